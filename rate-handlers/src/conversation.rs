//! Conversation handler: `/start` → greeting + bank menu; other text → help; bank selection → rate.
//!
//! Stateless: every decision is derived from the current event only.

use async_trait::async_trait;
use kurs_core::{
    Bot as CoreBot, CallbackSelection, Chat, ChatEvent, Handler, HandlerError, HandlerResponse,
    MenuOption, Message, Result,
};
use nbrb_client::RateLookup;
use std::sync::Arc;
use tracing::{info, instrument, warn};

use crate::catalog::BankCatalog;
use crate::replies;

/// Answers chat events through `bot`, using `catalog` for the menu and `rates` for lookups.
#[derive(Clone)]
pub struct ConversationHandler {
    bot: Arc<dyn CoreBot>,
    catalog: Arc<dyn BankCatalog>,
    rates: Arc<dyn RateLookup>,
}

impl ConversationHandler {
    pub fn new(
        bot: Arc<dyn CoreBot>,
        catalog: Arc<dyn BankCatalog>,
        rates: Arc<dyn RateLookup>,
    ) -> Self {
        Self {
            bot,
            catalog,
            rates,
        }
    }

    async fn handle_text(&self, message: &Message) -> Result<HandlerResponse> {
        if message.content == replies::START_COMMAND {
            self.greet(message).await
        } else {
            info!(chat_id = message.chat.id, "Unrecognised text, sending help");
            self.bot
                .send_message(&message.chat, replies::HELP_TEXT)
                .await?;
            Ok(HandlerResponse::Reply(replies::HELP_TEXT.to_string()))
        }
    }

    /// Greeting then menu. The menu is attempted even if the greeting was not delivered;
    /// the first failure is returned.
    async fn greet(&self, message: &Message) -> Result<HandlerResponse> {
        let greeting = replies::greeting(message.user.display_name());
        let greeting_sent = self.bot.send_message(&message.chat, &greeting).await;
        let menu_sent = self.send_bank_menu(&message.chat).await;
        greeting_sent?;
        menu_sent?;
        Ok(HandlerResponse::Reply(greeting))
    }

    async fn send_bank_menu(&self, chat: &Chat) -> Result<()> {
        let banks = self.catalog.list_banks().await?;
        if banks.is_empty() {
            return Err(HandlerError::Catalog("no banks to offer".to_string()).into());
        }
        let options: Vec<MenuOption> = banks
            .iter()
            .map(|bank| MenuOption::new(bank.as_str(), replies::bank_payload(bank)))
            .collect();
        info!(chat_id = chat.id, options = options.len(), "Sending bank menu");
        self.bot
            .send_menu(chat, replies::MENU_PROMPT, &options)
            .await
    }

    async fn handle_selection(&self, selection: &CallbackSelection) -> Result<HandlerResponse> {
        let Some(bank) = replies::parse_bank_payload(&selection.data) else {
            info!(
                chat_id = selection.chat.id,
                data = %selection.data,
                "Ignoring callback with unknown payload"
            );
            return Ok(HandlerResponse::Ignore);
        };

        let text = match self.rates.fetch_rate(bank).await {
            Ok(record) => replies::rate_reply(bank, &record.formatted_rate()),
            Err(e) => {
                warn!(chat_id = selection.chat.id, bank = %bank, error = %e, "Rate lookup failed");
                replies::rate_unavailable_reply(bank)
            }
        };

        self.bot.send_message(&selection.chat, &text).await?;
        Ok(HandlerResponse::Reply(text))
    }
}

#[async_trait]
impl Handler for ConversationHandler {
    #[instrument(skip(self, event), fields(kind = event.kind(), chat_id = event.chat().id))]
    async fn handle(&self, event: &ChatEvent) -> Result<HandlerResponse> {
        match event {
            ChatEvent::Message(message) => self.handle_text(message).await,
            ChatEvent::Callback(selection) => self.handle_selection(selection).await,
        }
    }
}
