//! # Translation provider
//!
//! Defines the [`Translator`] interface the relay calls, and [`DeepLTranslator`], which implements it
//! against the DeepL REST API (`POST /v2/translate`).
//!
//! ## Example
//!
//! ```rust,no_run
//! use deepl_client::{DeepLTranslator, Translator};
//!
//! async fn example() -> Result<(), deepl_client::TranslateError> {
//!     let translator = DeepLTranslator::new("your-auth-key:fx".to_string());
//!     let result = translator.translate("Hello world", "en", "ru").await?;
//!     println!("{}", result.text);
//!     Ok(())
//! }
//! ```

use async_trait::async_trait;

mod deepl;
mod error;

pub use deepl::{DeepLTranslator, DEEPL_FREE_SERVER_URL, DEEPL_PRO_SERVER_URL};
pub use error::TranslateError;

/// Output of one translation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextResult {
    pub text: String,
    /// Source language as reported by the provider (e.g. `EN`).
    pub detected_source_language: String,
}

/// Translates text between locales. Locale codes are lower-case (`en`, `ru`, `en-US`).
#[async_trait]
pub trait Translator: Send + Sync {
    async fn translate(
        &self,
        text: &str,
        source_lang: &str,
        target_lang: &str,
    ) -> Result<TextResult, TranslateError>;
}
