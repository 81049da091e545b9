//! # kurs-telegram
//!
//! Telegram transport layer: adapters, [`kurs_core::Bot`] implementation, dispatcher runner.
//! Handles only Telegram connectivity and handler-chain execution; no rate lookup or conversation logic.

mod adapters;
mod bot_adapter;
mod runner;

pub use adapters::{TelegramCallbackWrapper, TelegramMessageWrapper, TelegramUserWrapper};
pub use bot_adapter::{build_teloxide_bot, menu_markup, TelegramBotAdapter};
pub use runner::{dispatch_event, run_dispatcher};
