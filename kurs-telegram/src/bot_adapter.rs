//! Wraps teloxide::Bot and implements [`kurs_core::Bot`]. Production code sends messages via Telegram; tests can substitute another Bot impl.

use async_trait::async_trait;
use kurs_core::{Bot as CoreBot, BotError, Chat, MenuOption, Result};
use teloxide::{
    prelude::*,
    types::{ChatId, InlineKeyboardButton, InlineKeyboardMarkup},
};
use tracing::{error, warn};

/// Creates the teloxide bot, pointing it at `api_url` when given (e.g. a mock server in tests).
/// An unparsable URL is logged and the default Telegram endpoint is used.
pub fn build_teloxide_bot(token: &str, api_url: Option<&str>) -> teloxide::Bot {
    let bot = teloxide::Bot::new(token);
    match api_url {
        Some(url_str) => match reqwest::Url::parse(url_str) {
            Ok(url) => bot.set_api_url(url),
            Err(e) => {
                warn!(error = %e, url = %url_str, "Invalid TELEGRAM_API_URL, using default");
                bot
            }
        },
        None => bot,
    }
}

/// Inline keyboard with all options in a single row.
pub fn menu_markup(options: &[MenuOption]) -> InlineKeyboardMarkup {
    let row: Vec<InlineKeyboardButton> = options
        .iter()
        .map(|o| InlineKeyboardButton::callback(o.label.clone(), o.payload.clone()))
        .collect();
    InlineKeyboardMarkup::new(vec![row])
}

/// Thin wrapper around teloxide::Bot that implements kurs-core's Bot trait.
pub struct TelegramBotAdapter {
    bot: teloxide::Bot,
}

impl TelegramBotAdapter {
    /// Creates an adapter from an existing teloxide Bot.
    pub fn new(bot: teloxide::Bot) -> Self {
        Self { bot }
    }
}

#[async_trait]
impl CoreBot for TelegramBotAdapter {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        self.bot
            .send_message(ChatId(chat.id), text.to_string())
            .await
            .map_err(|e| {
                error!(chat_id = chat.id, error = %e, "Failed to send message");
                BotError::Delivery(e.to_string())
            })?;
        Ok(())
    }

    async fn send_menu(&self, chat: &Chat, prompt: &str, options: &[MenuOption]) -> Result<()> {
        self.bot
            .send_message(ChatId(chat.id), prompt.to_string())
            .reply_markup(menu_markup(options))
            .await
            .map_err(|e| {
                error!(chat_id = chat.id, error = %e, "Failed to send menu");
                BotError::Delivery(e.to_string())
            })?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use teloxide::types::InlineKeyboardButtonKind;

    #[test]
    fn test_menu_markup_single_row() {
        let options = vec![
            MenuOption::new("USD", "bank:USD"),
            MenuOption::new("EUR", "bank:EUR"),
        ];

        let markup = menu_markup(&options);

        assert_eq!(markup.inline_keyboard.len(), 1);
        let row = &markup.inline_keyboard[0];
        assert_eq!(row.len(), 2);
        assert_eq!(row[0].text, "USD");
        assert_eq!(
            row[0].kind,
            InlineKeyboardButtonKind::CallbackData("bank:USD".to_string())
        );
        assert_eq!(row[1].text, "EUR");
    }

    #[test]
    fn test_build_teloxide_bot_with_api_url() {
        let bot = build_teloxide_bot("dummy_token", Some("http://127.0.0.1:8081"));
        assert_eq!(bot.api_url().as_str(), "http://127.0.0.1:8081/");
    }

    #[test]
    fn test_build_teloxide_bot_ignores_invalid_url() {
        let bot = build_teloxide_bot("dummy_token", Some("not a url"));
        assert_eq!(bot.api_url().as_str(), "https://api.telegram.org/");
    }
}
