use anyhow::Result;
use kurs_core::init_tracing;
use kurs_telegram::run_dispatcher;
use teloxide::prelude::Requester;
use tracing::{info, instrument, warn};

use crate::components::{build_bot_components, build_handler_chain};
use crate::config::{mask_token, BotConfig};

/// Main entry: validate config, init logging, build components and chain, then run the dispatcher until shutdown.
#[instrument(skip(config))]
pub async fn run_bot(config: BotConfig) -> Result<()> {
    config.validate()?;
    init_tracing(&config.log_file)?;

    info!(
        bot_name = %config.bot_name,
        token = %mask_token(&config.bot_token),
        "Initializing bot"
    );

    let components = build_bot_components(&config);
    let handler_chain = build_handler_chain(&components);
    let teloxide_bot = components.teloxide_bot.clone();

    match teloxide_bot.get_me().await {
        Ok(me) => {
            let username = me.user.username.clone().unwrap_or_default();
            if username != config.bot_name {
                warn!(
                    configured = %config.bot_name,
                    actual = %username,
                    "BOT_NAME does not match the bot's Telegram username"
                );
            }
            info!(username = %username, "Bot started successfully");
        }
        Err(e) => warn!(error = %e, "getMe failed; continuing with dispatcher"),
    }

    run_dispatcher(teloxide_bot, handler_chain).await
}
