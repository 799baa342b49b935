//! whatlang-backed [`LanguageDetector`].

use async_trait::async_trait;
use whatlang::{Detector, Lang};

use crate::{ClassifyError, LanguageCandidate, LanguageDetector};

/// Trigram detector from the whatlang crate. Runs in-process; returns at most one candidate.
pub struct WhatlangDetector {
    detector: Detector,
}

impl WhatlangDetector {
    pub fn new() -> Self {
        Self {
            detector: Detector::new(),
        }
    }
}

impl Default for WhatlangDetector {
    fn default() -> Self {
        Self::new()
    }
}

fn lang_code(lang: Lang) -> String {
    match lang {
        Lang::Eng => "en".to_string(),
        Lang::Rus => "ru".to_string(),
        other => other.code().to_string(),
    }
}

#[async_trait]
impl LanguageDetector for WhatlangDetector {
    async fn detect(&self, text: &str) -> Result<Vec<LanguageCandidate>, ClassifyError> {
        Ok(self
            .detector
            .detect(text)
            .map(|info| vec![LanguageCandidate::new(lang_code(info.lang()), info.confidence())])
            .unwrap_or_default())
    }
}
