//! Telegram connection config: token and optional Bot API base URL.

use anyhow::{Context, Result};

pub const DEFAULT_TELEGRAM_API_URL: &str = "https://api.telegram.org";

/// Minimal Telegram connectivity config.
#[derive(Debug, Clone)]
pub struct TelegramConfig {
    pub bot_token: String,
    /// Bot API base URL; `None` means the public Telegram API.
    pub telegram_api_url: Option<String>,
}

impl TelegramConfig {
    /// Builds config with the given token and the default API URL.
    pub fn with_token(bot_token: String) -> Self {
        Self {
            bot_token,
            telegram_api_url: None,
        }
    }

    pub fn with_api_url(mut self, url: Option<String>) -> Self {
        self.telegram_api_url = url;
        self
    }

    /// Effective API base URL without trailing slash.
    pub fn api_url(&self) -> &str {
        self.telegram_api_url
            .as_deref()
            .unwrap_or(DEFAULT_TELEGRAM_API_URL)
            .trim_end_matches('/')
    }

    /// Creates the teloxide Bot, pointing it at `telegram_api_url` when set.
    pub fn build_bot(&self) -> Result<teloxide::Bot> {
        let bot = teloxide::Bot::new(self.bot_token.clone());
        match self.telegram_api_url {
            Some(ref url_str) => {
                let url = reqwest::Url::parse(url_str)
                    .with_context(|| format!("Invalid Telegram API URL: {}", url_str))?;
                Ok(bot.set_api_url(url))
            }
            None => Ok(bot),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_token() {
        let config = TelegramConfig::with_token("test_token".to_string());
        assert_eq!(config.bot_token, "test_token");
        assert!(config.telegram_api_url.is_none());
        assert_eq!(config.api_url(), DEFAULT_TELEGRAM_API_URL);
    }

    #[test]
    fn test_api_url_override_trims_slash() {
        let config = TelegramConfig::with_token("t".to_string())
            .with_api_url(Some("http://127.0.0.1:8081/".to_string()));
        assert_eq!(config.api_url(), "http://127.0.0.1:8081");
    }

    #[test]
    fn test_build_bot_rejects_invalid_url() {
        let config = TelegramConfig::with_token("t".to_string())
            .with_api_url(Some("not a url".to_string()));
        assert!(config.build_bot().is_err());
    }

    #[test]
    fn test_build_bot_default() {
        assert!(TelegramConfig::with_token("123:abc".to_string()).build_bot().is_ok());
    }
}
