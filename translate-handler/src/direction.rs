use language_detect::LanguageTag;

/// Source and target locale for one translation call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TranslationDirection {
    pub source: &'static str,
    pub target: &'static str,
}

impl TranslationDirection {
    pub const ENGLISH_TO_RUSSIAN: Self = Self {
        source: "en",
        target: "ru",
    };

    pub const RUSSIAN_TO_ENGLISH: Self = Self {
        source: "ru",
        target: "en-US",
    };

    /// Direction for a detected language; `Unknown` has none.
    pub fn for_language(tag: LanguageTag) -> Option<Self> {
        match tag {
            LanguageTag::English => Some(Self::ENGLISH_TO_RUSSIAN),
            LanguageTag::Russian => Some(Self::RUSSIAN_TO_ENGLISH),
            LanguageTag::Unknown => None,
        }
    }
}
