//! # relay-telegram
//!
//! Telegram layer: teloxide → core adapters, [`relay_core::Bot`] implementation, connection config,
//! the startup backlog skip, and the REPL runner. Handles only Telegram connectivity and handler-chain
//! execution; no translation logic.

mod adapters;
mod bot_adapter;
mod catch_up;
mod config;
mod runner;

pub use adapters::{TelegramMessageWrapper, TelegramUserWrapper};
pub use bot_adapter::TelegramBotAdapter;
pub use catch_up::skip_backlog;
pub use config::{TelegramConfig, DEFAULT_TELEGRAM_API_URL};
pub use runner::run_repl;

/// The teloxide client type, re-exported so callers need no direct teloxide dependency.
pub use teloxide::Bot as TeloxideBot;
