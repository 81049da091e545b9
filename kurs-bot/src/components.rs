//! Builds the bot's collaborators from config and assembles the handler chain.

use handler_chain::HandlerChain;
use kurs_core::Bot;
use kurs_telegram::{build_teloxide_bot, TelegramBotAdapter};
use nbrb_client::{RateLookup, RateLookupClient};
use rate_handlers::{BankCatalog, ConversationHandler, LoggingHandler, StaticBankCatalog};
use std::sync::Arc;
use tracing::{info, instrument};

use crate::config::BotConfig;

/// Shared collaborators. Cheap to clone.
#[derive(Clone)]
pub struct BotComponents {
    /// Raw teloxide bot, used by the dispatcher.
    pub teloxide_bot: teloxide::Bot,
    /// Outbound side used by handlers.
    pub bot: Arc<dyn Bot>,
    pub catalog: Arc<dyn BankCatalog>,
    pub rates: Arc<dyn RateLookup>,
}

/// Creates the Telegram bot, bank catalog and rate client from config.
#[instrument(skip(config))]
pub fn build_bot_components(config: &BotConfig) -> BotComponents {
    let teloxide_bot = build_teloxide_bot(&config.bot_token, config.telegram_api_url.as_deref());
    let bot: Arc<dyn Bot> = Arc::new(TelegramBotAdapter::new(teloxide_bot.clone()));
    let catalog: Arc<dyn BankCatalog> = Arc::new(StaticBankCatalog::new(&config.banks));
    let rates: Arc<dyn RateLookup> = Arc::new(RateLookupClient::new(config.rates_api_url.as_str()));

    info!(
        rates_api_url = %config.rates_api_url,
        banks = ?config.banks,
        "Bot components built"
    );

    BotComponents {
        teloxide_bot,
        bot,
        catalog,
        rates,
    }
}

/// Chain order: logging, then the conversation.
pub fn build_handler_chain(components: &BotComponents) -> HandlerChain {
    let conversation = ConversationHandler::new(
        components.bot.clone(),
        components.catalog.clone(),
        components.rates.clone(),
    );
    HandlerChain::new()
        .add_handler(Arc::new(LoggingHandler))
        .add_handler(Arc::new(conversation))
}
