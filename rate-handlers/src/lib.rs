//! # Handlers for the exchange-rate bot
//!
//! [`ConversationHandler`] answers `/start` with a greeting and a bank menu, any other text with help,
//! and bank selections with the current official rate. [`LoggingHandler`] logs every event.

mod catalog;
mod conversation;
mod logging;
pub mod replies;

#[cfg(test)]
mod test;

pub use catalog::{BankCatalog, StaticBankCatalog};
pub use conversation::ConversationHandler;
pub use logging::LoggingHandler;
