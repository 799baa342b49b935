//! Statistical strategy: pick the best-scoring candidate from a [`LanguageDetector`].

use async_trait::async_trait;
use std::sync::Arc;

use crate::{ClassifyError, LanguageClassifier, LanguageTag};

/// One detector guess.
#[derive(Debug, Clone, PartialEq)]
pub struct LanguageCandidate {
    /// Language code; `en` and `ru` are the only ones the relay accepts.
    pub code: String,
    /// Confidence, higher is better.
    pub score: f64,
}

impl LanguageCandidate {
    pub fn new(code: impl Into<String>, score: f64) -> Self {
        Self {
            code: code.into(),
            score,
        }
    }
}

/// Detector returning scored language candidates. May do I/O, may fail.
#[async_trait]
pub trait LanguageDetector: Send + Sync {
    async fn detect(&self, text: &str) -> Result<Vec<LanguageCandidate>, ClassifyError>;
}

/// Classifies with the highest-scoring detector candidate.
///
/// The first candidate wins on equal scores. A top candidate other than `en`/`ru` is an error,
/// not [`LanguageTag::Unknown`].
pub struct StatisticalClassifier {
    detector: Arc<dyn LanguageDetector>,
}

impl StatisticalClassifier {
    pub fn new(detector: Arc<dyn LanguageDetector>) -> Self {
        Self { detector }
    }
}

/// Highest score; on ties the earlier candidate is kept.
pub(crate) fn best_candidate(candidates: &[LanguageCandidate]) -> Option<&LanguageCandidate> {
    let mut iter = candidates.iter();
    let mut best = iter.next()?;
    for candidate in iter {
        if best.score < candidate.score {
            best = candidate;
        }
    }
    Some(best)
}

#[async_trait]
impl LanguageClassifier for StatisticalClassifier {
    async fn classify(&self, text: &str) -> Result<LanguageTag, ClassifyError> {
        let candidates = self.detector.detect(text).await?;
        let best = best_candidate(&candidates).ok_or(ClassifyError::NoCandidates)?;
        tracing::debug!(
            code = %best.code,
            score = best.score,
            candidates = candidates.len(),
            "statistical classification"
        );
        LanguageTag::from_code(&best.code)
            .ok_or_else(|| ClassifyError::UnsupportedLanguage(best.code.clone()))
    }
}
