//! Bot configuration, loaded from environment variables.

use anyhow::{Context, Result};
use nbrb_client::DEFAULT_BASE_URL;
use rate_handlers::StaticBankCatalog;
use std::env;

pub const DEFAULT_BOT_NAME: &str = "kurs_bot";
pub const DEFAULT_LOG_FILE: &str = "logs/kurs-bot.log";
pub const DEFAULT_BANKS: &str = "USD,EUR,RUB";

/// Bot config: Telegram connection, logging, rate provider, bank list.
#[derive(Debug, Clone)]
pub struct BotConfig {
    /// BOT_TOKEN
    pub bot_token: String,
    /// BOT_NAME; the bot's user name, compared against getMe at startup
    pub bot_name: String,
    /// TELEGRAM_API_URL or TELOXIDE_API_URL
    pub telegram_api_url: Option<String>,
    /// LOG_FILE
    pub log_file: String,
    /// RATES_API_URL; base of `/{bank}` rate requests
    pub rates_api_url: String,
    /// BANKS; comma-separated, order preserved
    pub banks: Vec<String>,
}

impl BotConfig {
    /// Load from environment variables. `token` overrides BOT_TOKEN if provided.
    /// Call validate() after load to check config before init.
    pub fn load(token: Option<String>) -> Result<Self> {
        let bot_token = match token {
            Some(token) => token,
            None => env::var("BOT_TOKEN").context("BOT_TOKEN not set")?,
        };
        let bot_name = env::var("BOT_NAME").unwrap_or_else(|_| DEFAULT_BOT_NAME.to_string());
        let telegram_api_url = env::var("TELEGRAM_API_URL")
            .or_else(|_| env::var("TELOXIDE_API_URL"))
            .ok();
        let log_file = env::var("LOG_FILE").unwrap_or_else(|_| DEFAULT_LOG_FILE.to_string());
        let rates_api_url =
            env::var("RATES_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let banks = StaticBankCatalog::from_csv(
            &env::var("BANKS").unwrap_or_else(|_| DEFAULT_BANKS.to_string()),
        )
        .banks()
        .to_vec();

        Ok(Self {
            bot_token,
            bot_name,
            telegram_api_url,
            log_file,
            rates_api_url,
            banks,
        })
    }

    /// Validate config. Call after load() to fail fast before init.
    pub fn validate(&self) -> Result<()> {
        if self.bot_token.trim().is_empty() {
            anyhow::bail!("BOT_TOKEN is empty");
        }
        if let Some(ref url_str) = self.telegram_api_url {
            if reqwest::Url::parse(url_str).is_err() {
                anyhow::bail!(
                    "TELEGRAM_API_URL (or TELOXIDE_API_URL) is set but not a valid URL: {}",
                    url_str
                );
            }
        }
        if reqwest::Url::parse(&self.rates_api_url).is_err() {
            anyhow::bail!("RATES_API_URL is not a valid URL: {}", self.rates_api_url);
        }
        if self.banks.is_empty() {
            anyhow::bail!("BANKS must list at least one bank identifier");
        }
        Ok(())
    }
}

/// Masks a token for safe logging: first 7 chars + "***" + last 4 chars.
/// If length <= 11, returns "***" to avoid leaking any part of it.
pub fn mask_token(token: &str) -> String {
    let chars: Vec<char> = token.chars().collect();
    let len = chars.len();
    if len <= 11 {
        return "***".to_string();
    }
    let head: String = chars[..7].iter().collect();
    let tail: String = chars[len - 4..].iter().collect();
    format!("{}***{}", head, tail)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const VARS: &[&str] = &[
        "BOT_TOKEN",
        "BOT_NAME",
        "TELEGRAM_API_URL",
        "TELOXIDE_API_URL",
        "LOG_FILE",
        "RATES_API_URL",
        "BANKS",
    ];

    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    #[serial]
    fn test_load_config_with_defaults() {
        clear_env();
        env::set_var("BOT_TOKEN", "test_token");

        let config = BotConfig::load(None).unwrap();

        assert_eq!(config.bot_token, "test_token");
        assert_eq!(config.bot_name, "kurs_bot");
        assert!(config.telegram_api_url.is_none());
        assert_eq!(config.log_file, "logs/kurs-bot.log");
        assert_eq!(config.rates_api_url, "https://api.nbrb.by/exrates/rates");
        assert_eq!(config.banks, vec!["USD", "EUR", "RUB"]);
        assert!(config.validate().is_ok());

        clear_env();
    }

    #[test]
    #[serial]
    fn test_load_config_with_custom_values() {
        clear_env();
        env::set_var("BOT_TOKEN", "custom_token");
        env::set_var("BOT_NAME", "rates_by_bot");
        env::set_var("TELOXIDE_API_URL", "http://127.0.0.1:8081");
        env::set_var("LOG_FILE", "/tmp/kurs.log");
        env::set_var("RATES_API_URL", "http://127.0.0.1:9000/rates");
        env::set_var("BANKS", " 431, 451 ,,456 ");

        let config = BotConfig::load(None).unwrap();

        assert_eq!(config.bot_token, "custom_token");
        assert_eq!(config.bot_name, "rates_by_bot");
        assert_eq!(config.telegram_api_url.as_deref(), Some("http://127.0.0.1:8081"));
        assert_eq!(config.log_file, "/tmp/kurs.log");
        assert_eq!(config.rates_api_url, "http://127.0.0.1:9000/rates");
        assert_eq!(config.banks, vec!["431", "451", "456"]);
        assert!(config.validate().is_ok());

        clear_env();
    }

    #[test]
    #[serial]
    fn test_load_config_with_override_token() {
        clear_env();
        env::set_var("BOT_TOKEN", "env_token");

        let config = BotConfig::load(Some("override_token".to_string())).unwrap();

        assert_eq!(config.bot_token, "override_token");
        clear_env();
    }

    #[test]
    #[serial]
    fn test_load_config_requires_token() {
        clear_env();
        assert!(BotConfig::load(None).is_err());
    }

    #[test]
    #[serial]
    fn test_validate_telegram_api_url_invalid() {
        clear_env();
        env::set_var("BOT_TOKEN", "test_token");
        env::set_var("TELEGRAM_API_URL", "not-a-valid-url");

        let config = BotConfig::load(None).unwrap();
        assert!(config.validate().is_err());

        clear_env();
    }

    #[test]
    #[serial]
    fn test_validate_rejects_empty_bank_list() {
        clear_env();
        env::set_var("BOT_TOKEN", "test_token");
        env::set_var("BANKS", " , ");

        let config = BotConfig::load(None).unwrap();
        assert!(config.banks.is_empty());
        assert!(config.validate().is_err());

        clear_env();
    }

    #[test]
    fn test_mask_token() {
        assert_eq!(mask_token(""), "***");
        assert_eq!(mask_token("12345:abcde"), "***");
        assert_eq!(
            mask_token("123456789:AAHdqTcvCH1vGWJxfSeofSAs0K5PALDsaw"),
            "1234567***Dsaw"
        );
    }
}
