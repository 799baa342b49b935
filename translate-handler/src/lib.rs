//! # translate-handler
//!
//! Per-message translation: classify the text, choose the [`TranslationDirection`], call the
//! [`deepl_client::Translator`], and turn the outcome into a [`Reply`]. [`TranslationService`] holds
//! the logic; [`TranslationHandler`] plugs it into the handler chain and sends the reply.

mod direction;
mod handler;
mod logging;
mod reply;
mod service;

pub use direction::TranslationDirection;
pub use handler::TranslationHandler;
pub use logging::LoggingHandler;
pub use reply::{Reply, UNSUPPORTED_LANGUAGE_REPLY};
pub use service::{ServiceError, TranslationService};
