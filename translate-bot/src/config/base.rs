//! Base config: Telegram connection, logging, startup behavior. Loaded from env.

use anyhow::{bail, Result};
use relay_telegram::TelegramConfig;
use std::env;

use super::first_env;

/// Telegram-related settings plus log file and backlog handling.
#[derive(Debug, Clone)]
pub struct BaseConfig {
    /// TELEGRAM_API_KEY (or BOT_TOKEN)
    pub bot_token: String,
    /// TELEGRAM_API_URL or TELOXIDE_API_URL
    pub telegram_api_url: Option<String>,
    /// LOG_FILE
    pub log_file: String,
    /// SKIP_BACKLOG: drop updates queued while the bot was offline
    pub skip_backlog: bool,
}

impl BaseConfig {
    /// Loads from environment variables. `token` overrides TELEGRAM_API_KEY if provided.
    pub fn load(token: Option<String>) -> Result<Self> {
        let bot_token = match token.filter(|t| !t.trim().is_empty()) {
            Some(t) => t,
            None => match first_env(&["TELEGRAM_API_KEY", "BOT_TOKEN"]) {
                Some(t) => t,
                None => bail!("telegram api key does not exist (set TELEGRAM_API_KEY)"),
            },
        };
        let telegram_api_url = first_env(&["TELEGRAM_API_URL", "TELOXIDE_API_URL"]);
        let log_file =
            env::var("LOG_FILE").unwrap_or_else(|_| "logs/translate-bot.log".to_string());
        let skip_backlog = env::var("SKIP_BACKLOG")
            .ok()
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(true);

        Ok(Self {
            bot_token,
            telegram_api_url,
            log_file,
            skip_backlog,
        })
    }

    /// Checks that telegram_api_url is a valid URL if set.
    pub fn validate(&self) -> Result<()> {
        if let Some(ref url_str) = self.telegram_api_url {
            if reqwest::Url::parse(url_str).is_err() {
                bail!(
                    "TELEGRAM_API_URL (or TELOXIDE_API_URL) is set but not a valid URL: {}",
                    url_str
                );
            }
        }
        Ok(())
    }

    pub fn telegram(&self) -> TelegramConfig {
        TelegramConfig::with_token(self.bot_token.clone())
            .with_api_url(self.telegram_api_url.clone())
    }
}
