//! # kurs-core
//!
//! Core types and traits for the exchange-rate bot: [`Bot`], [`Handler`], chat events and user types,
//! and tracing initialization. Transport-agnostic; used by handler-chain, rate-handlers and kurs-telegram.

pub mod bot;
pub mod error;
pub mod logger;
pub mod types;

pub use bot::Bot;
pub use error::{BotError, HandlerError, Result};
pub use logger::init_tracing;
pub use types::{
    CallbackSelection, Chat, ChatEvent, Handler, HandlerResponse, MenuOption, Message,
    ToCoreEvent, ToCoreUser, User,
};
