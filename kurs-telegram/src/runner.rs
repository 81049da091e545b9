//! Dispatcher runner: converts teloxide messages and callback queries to core events and passes them to HandlerChain.
//!
//! Updates from one chat are handled in arrival order; different chats run concurrently.

use anyhow::Result;
use handler_chain::HandlerChain;
use kurs_core::{ChatEvent, HandlerResponse, ToCoreEvent};
use teloxide::{
    dptree,
    prelude::*,
    types::{CallbackQuery, Update},
};
use tracing::{debug, error, info, instrument, warn};

use super::adapters::{TelegramCallbackWrapper, TelegramMessageWrapper};

/// Runs one event through the chain. This is the logging boundary for handler failures:
/// errors are logged and swallowed so the dispatcher keeps serving updates.
pub async fn dispatch_event(chain: &HandlerChain, event: &ChatEvent) -> Option<HandlerResponse> {
    match chain.handle(event).await {
        Ok(response) => Some(response),
        Err(e) => {
            error!(
                error = %e,
                kind = event.kind(),
                user_id = event.user().id,
                chat_id = event.chat().id,
                "Handler chain failed"
            );
            None
        }
    }
}

async fn on_message(msg: Message, chain: HandlerChain) -> ResponseResult<()> {
    match TelegramMessageWrapper(&msg).to_core() {
        Some(event) => {
            dispatch_event(&chain, &event).await;
        }
        None => debug!(chat_id = msg.chat.id.0, "Ignoring non-text message"),
    }
    Ok(())
}

async fn on_callback(bot: Bot, query: CallbackQuery, chain: HandlerChain) -> ResponseResult<()> {
    match TelegramCallbackWrapper(&query).to_core() {
        Some(event) => {
            dispatch_event(&chain, &event).await;
        }
        None => debug!(user_id = query.from.id.0, "Ignoring callback without data"),
    }

    // Stops the client-side progress indicator on the pressed button.
    if let Err(e) = bot.answer_callback_query(query.id.clone()).await {
        warn!(error = %e, "Failed to answer callback query");
    }
    Ok(())
}

/// Starts long polling with the given teloxide Bot and HandlerChain; returns on shutdown (Ctrl-C).
#[instrument(skip(bot, handler_chain))]
pub async fn run_dispatcher(bot: teloxide::Bot, handler_chain: HandlerChain) -> Result<()> {
    let handler = dptree::entry()
        .branch(Update::filter_message().endpoint(on_message))
        .branch(Update::filter_callback_query().endpoint(on_callback));

    info!("Starting Telegram dispatcher");
    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![handler_chain])
        .default_handler(|upd| async move {
            debug!(update_id = upd.id.0, "Unhandled update");
        })
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;
    info!("Telegram dispatcher stopped");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::Utc;
    use kurs_core::{BotError, Chat, Handler, Message as CoreMessage, User};
    use std::sync::Arc;

    struct FailingHandler;

    #[async_trait]
    impl Handler for FailingHandler {
        async fn handle(&self, _event: &ChatEvent) -> kurs_core::Result<HandlerResponse> {
            Err(BotError::Delivery("Forbidden: bot was blocked by the user".to_string()))
        }
    }

    struct ReplyHandler;

    #[async_trait]
    impl Handler for ReplyHandler {
        async fn handle(&self, _event: &ChatEvent) -> kurs_core::Result<HandlerResponse> {
            Ok(HandlerResponse::Reply("ok".to_string()))
        }
    }

    fn event() -> ChatEvent {
        ChatEvent::Message(CoreMessage {
            id: "1".to_string(),
            user: User::default(),
            chat: Chat {
                id: 42,
                chat_type: "private".to_string(),
            },
            content: "hello".to_string(),
            created_at: Utc::now(),
        })
    }

    #[tokio::test]
    async fn test_dispatch_event_swallows_handler_errors() {
        let chain = HandlerChain::new().add_handler(Arc::new(FailingHandler));
        assert_eq!(dispatch_event(&chain, &event()).await, None);
    }

    #[tokio::test]
    async fn test_dispatch_event_returns_response() {
        let chain = HandlerChain::new().add_handler(Arc::new(ReplyHandler));
        assert_eq!(
            dispatch_event(&chain, &event()).await,
            Some(HandlerResponse::Reply("ok".to_string()))
        );
    }
}
