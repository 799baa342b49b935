//! BotConfig: BaseConfig + TranslationConfig. Use load() for env-based loading.

use anyhow::Result;

use super::{BaseConfig, TranslationConfig};

/// Full bot config. Both secrets are required; `load` fails without either.
#[derive(Debug, Clone)]
pub struct BotConfig {
    pub base: BaseConfig,
    pub translation: TranslationConfig,
}

impl BotConfig {
    /// Loads from environment variables. If `token` is provided it overrides TELEGRAM_API_KEY.
    /// Call validate() after load to check config before init.
    pub fn load(token: Option<String>) -> Result<Self> {
        let base = BaseConfig::load(token)?;
        let translation = TranslationConfig::from_env()?;
        Ok(Self { base, translation })
    }

    pub fn validate(&self) -> Result<()> {
        self.base.validate()?;
        self.translation.validate()
    }

    pub fn log_file(&self) -> &str {
        &self.base.log_file
    }
    pub fn telegram_api_url(&self) -> Option<&str> {
        self.base.telegram_api_url.as_deref()
    }
}
