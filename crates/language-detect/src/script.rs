//! Script heuristic: Cyrillic vs Latin character counts.

use async_trait::async_trait;
use regex::Regex;
use std::sync::LazyLock;

use crate::{ClassifyError, LanguageClassifier, LanguageTag};

static CYRILLIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\p{sc=Cyrillic}").expect("valid Cyrillic pattern"));
static LATIN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\p{sc=Latin}").expect("valid Latin pattern"));

/// Number of Cyrillic and Latin script characters in a text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScriptCounts {
    pub cyrillic: usize,
    pub latin: usize,
}

impl ScriptCounts {
    pub fn of(text: &str) -> Self {
        Self {
            cyrillic: CYRILLIC.find_iter(text).count(),
            latin: LATIN.find_iter(text).count(),
        }
    }

    /// Russian when Cyrillic wins or ties, English when Latin wins, Unknown when both are zero.
    pub fn tag(&self) -> LanguageTag {
        match (self.cyrillic, self.latin) {
            (0, 0) => LanguageTag::Unknown,
            (_, 0) => LanguageTag::Russian,
            (0, _) => LanguageTag::English,
            (c, l) if c >= l => LanguageTag::Russian,
            _ => LanguageTag::English,
        }
    }
}

/// Classifies by counting script characters. Cannot fail.
#[derive(Debug, Clone, Default)]
pub struct ScriptClassifier;

impl ScriptClassifier {
    pub fn new() -> Self {
        Self
    }

    pub fn classify_text(&self, text: &str) -> LanguageTag {
        ScriptCounts::of(text).tag()
    }
}

#[async_trait]
impl LanguageClassifier for ScriptClassifier {
    async fn classify(&self, text: &str) -> Result<LanguageTag, ClassifyError> {
        let counts = ScriptCounts::of(text);
        let tag = counts.tag();
        tracing::debug!(
            cyrillic = counts.cyrillic,
            latin = counts.latin,
            language = %tag,
            "script classification"
        );
        Ok(tag)
    }
}
