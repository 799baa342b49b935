use std::fmt;

/// Fixed answer when the text is neither English nor Russian.
pub const UNSUPPORTED_LANGUAGE_REPLY: &str = "language detected is not english or russian";

/// Outcome of handling one message. Always rendered to exactly one reply string.
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    /// Translated text.
    Translated(String),
    /// Language not English or Russian; no translation was attempted.
    Unsupported,
    /// Classification or translation failed; rendered as `"<error>: <original>"`.
    Failed { error: String, original: String },
    /// Provider error without a message; rendered as `"unknown error <json>"`.
    UnknownError(serde_json::Value),
}

impl Reply {
    /// Short name for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Translated(_) => "translated",
            Self::Unsupported => "unsupported",
            Self::Failed { .. } => "failed",
            Self::UnknownError(_) => "unknown_error",
        }
    }
}

impl fmt::Display for Reply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Translated(text) => f.write_str(text),
            Self::Unsupported => f.write_str(UNSUPPORTED_LANGUAGE_REPLY),
            Self::Failed { error, original } => write!(f, "{}: {}", error, original),
            Self::UnknownError(value) => write!(f, "unknown error {}", value),
        }
    }
}
