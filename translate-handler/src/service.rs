//! Classify → translate → [`Reply`].

use deepl_client::{TranslateError, Translator};
use language_detect::{ClassifyError, LanguageClassifier};
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, instrument, warn};

use crate::{Reply, TranslationDirection};

/// Anything that can go wrong while handling one message.
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error(transparent)]
    Classify(#[from] ClassifyError),

    #[error(transparent)]
    Translate(#[from] TranslateError),
}

impl ServiceError {
    /// Turns the error into the reply for `original`.
    pub fn into_reply(self, original: &str) -> Reply {
        match self {
            Self::Translate(TranslateError::Unrecognized(value)) => Reply::UnknownError(value),
            other => Reply::Failed {
                error: other.to_string(),
                original: original.to_string(),
            },
        }
    }
}

/// Stateless translation logic with injected classifier and translator.
#[derive(Clone)]
pub struct TranslationService {
    classifier: Arc<dyn LanguageClassifier>,
    translator: Arc<dyn Translator>,
}

impl TranslationService {
    pub fn new(classifier: Arc<dyn LanguageClassifier>, translator: Arc<dyn Translator>) -> Self {
        Self {
            classifier,
            translator,
        }
    }

    /// Handles one message. Never fails: errors become [`Reply::Failed`] or [`Reply::UnknownError`].
    #[instrument(skip(self, text), fields(text_len = text.len()))]
    pub async fn translate_message(&self, text: &str) -> Reply {
        match self.try_translate(text).await {
            Ok(reply) => reply,
            Err(e) => {
                warn!(error = %e, "translation failed");
                e.into_reply(text)
            }
        }
    }

    async fn try_translate(&self, text: &str) -> Result<Reply, ServiceError> {
        let language = self.classifier.classify(text).await?;
        let Some(direction) = TranslationDirection::for_language(language) else {
            info!(language = %language, "unsupported language, not translating");
            return Ok(Reply::Unsupported);
        };

        info!(
            language = %language,
            source_lang = direction.source,
            target_lang = direction.target,
            "step: translating"
        );
        let result = self
            .translator
            .translate(text, direction.source, direction.target)
            .await?;
        Ok(Reply::Translated(result.text))
    }
}
