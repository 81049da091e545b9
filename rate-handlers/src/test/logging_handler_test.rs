//! Unit tests for LoggingHandler.

use kurs_core::{Handler, HandlerResponse};

use super::support::{callback_event, text_event};
use crate::LoggingHandler;

#[tokio::test]
async fn test_logging_handler_before_continues() {
    let h = LoggingHandler;
    assert!(h.before(&text_event("Anna", "hello")).await.unwrap());
    assert!(h.before(&callback_event("bank:USD")).await.unwrap());
}

#[tokio::test]
async fn test_logging_handler_after_ok() {
    let h = LoggingHandler;
    let response = HandlerResponse::Reply("hi".to_string());
    assert!(h.after(&text_event("Anna", "hello"), &response).await.is_ok());
}

#[tokio::test]
async fn test_logging_handler_leaves_handle_to_others() {
    let h = LoggingHandler;
    let response = h.handle(&text_event("Anna", "/start")).await.unwrap();
    assert_eq!(response, HandlerResponse::Continue);
}
