//! # Translation relay bot
//!
//! Loads config from env, assembles classifier + DeepL translator + Telegram transport into a
//! handler chain, skips the update backlog and runs the REPL.

pub mod cli;
pub mod components;
pub mod config;
pub mod runner;

pub use cli::{load_config, Cli, Commands};
pub use components::{
    build_bot_components, build_handler_chain, build_translation_service, BotComponents,
};
pub use config::{BaseConfig, BotConfig, TranslationConfig};
pub use runner::{detect_once, run_bot, translate_once};
