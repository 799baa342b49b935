//! Bot configuration: BaseConfig (Telegram + logging + startup) + TranslationConfig (DeepL + classifier).

mod base;
mod bot_config;
mod translation;


pub use base::BaseConfig;
pub use bot_config::BotConfig;
pub use translation::TranslationConfig;

/// Reads the first non-empty variable among `names`.
pub(crate) fn first_env(names: &[&str]) -> Option<String> {
    names
        .iter()
        .filter_map(|name| std::env::var(name).ok())
        .map(|v| v.trim().to_string())
        .find(|v| !v.is_empty())
}
