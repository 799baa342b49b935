use thiserror::Error;

/// DeepL failures, mapped from HTTP status and body.
#[derive(Error, Debug)]
pub enum TranslateError {
    #[error("Authorization failure, check auth_key")]
    AuthorizationFailed,

    #[error("Quota for this billing period has been exceeded")]
    QuotaExceeded,

    #[error("Too many requests, DeepL servers are currently experiencing high load")]
    TooManyRequests,

    #[error("Not found, check server_url")]
    NotFound,

    #[error("Bad request, message: {0}")]
    BadRequest(String),

    #[error("Unexpected status code: {status}, message: {message}")]
    Service { status: u16, message: String },

    #[error("Connection failure: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Unexpected response from server: {0}")]
    MalformedResponse(String),

    #[error("Server returned no translation")]
    NoTranslation,

    /// Error body with no usable message; the raw JSON is kept for the caller to report.
    #[error("Unrecognized error response: {0}")]
    Unrecognized(serde_json::Value),
}
