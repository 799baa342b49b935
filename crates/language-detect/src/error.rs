use thiserror::Error;

/// Classification failures. Only the statistical strategy produces them.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClassifyError {
    #[error("no language candidates detected")]
    NoCandidates,

    #[error("detected language {0} is not supported")]
    UnsupportedLanguage(String),

    #[error("language detection failed: {0}")]
    Detector(String),
}

/// A classifier strategy name that is neither `script` nor `statistical`.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("unknown classifier strategy: {0} (expected script or statistical)")]
pub struct UnknownStrategy(pub String);
