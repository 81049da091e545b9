//! Outbound side of the chat transport.
//!
//! [`Bot`] is transport-agnostic; kurs-telegram implements it via teloxide, tests substitute a recorder.

use crate::error::Result;
use crate::types::{Chat, MenuOption};
use async_trait::async_trait;

/// Abstraction for sending replies. Implementations map to a transport (e.g. Telegram).
#[async_trait]
pub trait Bot: Send + Sync {
    /// Sends a plain text message to the given chat.
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()>;

    /// Sends `prompt` with one selectable button per option. Pressing a button delivers the option's
    /// payload back as a [`crate::CallbackSelection`].
    async fn send_menu(&self, chat: &Chat, prompt: &str, options: &[MenuOption]) -> Result<()>;
}
