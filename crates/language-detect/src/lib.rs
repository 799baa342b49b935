//! # Language classification
//!
//! Decides whether a message is English or Russian. Two interchangeable strategies implement
//! [`LanguageClassifier`]:
//!
//! - [`ScriptClassifier`]: counts Cyrillic vs Latin script characters. Local, never fails.
//! - [`StatisticalClassifier`]: asks a [`LanguageDetector`] for scored candidates and keeps the best
//!   one if it is English or Russian.
//!
//! The strategy is chosen once at startup via [`ClassifierKind`] and [`build_classifier`].

use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;

mod error;
mod script;
mod statistical;
mod whatlang_detector;

pub use error::{ClassifyError, UnknownStrategy};
pub use script::{ScriptClassifier, ScriptCounts};
pub use statistical::{LanguageCandidate, LanguageDetector, StatisticalClassifier};
pub use whatlang_detector::WhatlangDetector;

/// Language of a message as far as the relay cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LanguageTag {
    English,
    Russian,
    /// Neither English nor Russian could be determined.
    Unknown,
}

impl LanguageTag {
    /// Maps a two-letter code (`en`, `ru`) to a tag; anything else is `None`.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "en" => Some(Self::English),
            "ru" => Some(Self::Russian),
            _ => None,
        }
    }

    /// Two-letter code, or `"unknown"`.
    pub fn code(&self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Russian => "ru",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for LanguageTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Classifies a message into a [`LanguageTag`].
#[async_trait]
pub trait LanguageClassifier: Send + Sync {
    async fn classify(&self, text: &str) -> Result<LanguageTag, ClassifyError>;
}

/// Which classification strategy to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClassifierKind {
    /// Cyrillic vs Latin character counting.
    #[default]
    Script,
    /// whatlang statistical detection.
    Statistical,
}

impl ClassifierKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Script => "script",
            Self::Statistical => "statistical",
        }
    }
}

impl fmt::Display for ClassifierKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ClassifierKind {
    type Err = UnknownStrategy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "script" => Ok(Self::Script),
            "statistical" | "whatlang" => Ok(Self::Statistical),
            other => Err(UnknownStrategy(other.to_string())),
        }
    }
}

/// Builds the classifier for `kind`.
pub fn build_classifier(kind: ClassifierKind) -> Arc<dyn LanguageClassifier> {
    match kind {
        ClassifierKind::Script => Arc::new(ScriptClassifier::new()),
        ClassifierKind::Statistical => {
            Arc::new(StatisticalClassifier::new(Arc::new(WhatlangDetector::new())))
        }
    }
}
