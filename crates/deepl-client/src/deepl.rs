//! DeepL REST client.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use tracing::{info, warn};

use crate::{TextResult, TranslateError, Translator};

pub const DEEPL_FREE_SERVER_URL: &str = "https://api-free.deepl.com";
pub const DEEPL_PRO_SERVER_URL: &str = "https://api.deepl.com";

/// DeepL's quota-exceeded status.
const STATUS_QUOTA_EXCEEDED: u16 = 456;

/// DeepL translator. Free-tier keys (suffix `:fx`) go to the free endpoint unless a server URL is set.
#[derive(Debug, Clone)]
pub struct DeepLTranslator {
    client: Client,
    auth_key: String,
    server_url: String,
}

impl DeepLTranslator {
    pub fn new(auth_key: String) -> Self {
        let server_url = Self::default_server_url(&auth_key).to_string();
        Self {
            client: Client::new(),
            auth_key,
            server_url,
        }
    }

    /// Overrides the API server (e.g. a mock server in tests).
    pub fn with_server_url(mut self, server_url: impl Into<String>) -> Self {
        self.server_url = server_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn server_url(&self) -> &str {
        &self.server_url
    }

    pub fn default_server_url(auth_key: &str) -> &'static str {
        if auth_key.ends_with(":fx") {
            DEEPL_FREE_SERVER_URL
        } else {
            DEEPL_PRO_SERVER_URL
        }
    }
}

/// DeepL wants upper-case codes; source languages take the base language only.
fn source_code(lang: &str) -> String {
    lang.split('-').next().unwrap_or(lang).to_uppercase()
}

fn target_code(lang: &str) -> String {
    lang.to_uppercase()
}

#[derive(Debug, Deserialize)]
struct TranslateResponse {
    translations: Vec<Translation>,
}

#[derive(Debug, Deserialize)]
struct Translation {
    #[serde(default)]
    detected_source_language: String,
    text: String,
}

/// Maps a non-success response to an error. `body` is the raw response text.
fn error_from_response(status: StatusCode, body: &str) -> TranslateError {
    let json = serde_json::from_str::<serde_json::Value>(body).ok();
    let message = json
        .as_ref()
        .and_then(|v| v.get("message"))
        .and_then(|m| m.as_str())
        .map(str::to_string);

    match status.as_u16() {
        403 => TranslateError::AuthorizationFailed,
        STATUS_QUOTA_EXCEEDED => TranslateError::QuotaExceeded,
        429 => TranslateError::TooManyRequests,
        404 => TranslateError::NotFound,
        400 => TranslateError::BadRequest(message.unwrap_or_else(|| body.to_string())),
        code => match (message, json) {
            (Some(message), _) => TranslateError::Service {
                status: code,
                message,
            },
            (None, Some(value)) => TranslateError::Unrecognized(value),
            (None, None) => TranslateError::Service {
                status: code,
                message: body.to_string(),
            },
        },
    }
}

#[async_trait]
impl Translator for DeepLTranslator {
    async fn translate(
        &self,
        text: &str,
        source_lang: &str,
        target_lang: &str,
    ) -> Result<TextResult, TranslateError> {
        let source = source_code(source_lang);
        let target = target_code(target_lang);
        info!(
            source_lang = %source,
            target_lang = %target,
            text_len = text.len(),
            "step: DeepL translate request"
        );

        let params = [
            ("text", text.to_string()),
            ("source_lang", source),
            ("target_lang", target),
        ];

        let response = self
            .client
            .post(format!("{}/v2/translate", self.server_url))
            .header("Authorization", format!("DeepL-Auth-Key {}", self.auth_key))
            .form(&params)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let err = error_from_response(status, &body);
            warn!(status = status.as_u16(), error = %err, "DeepL request failed");
            return Err(err);
        }

        let body = response.text().await?;
        let parsed: TranslateResponse = serde_json::from_str(&body)
            .map_err(|e| TranslateError::MalformedResponse(e.to_string()))?;
        let translation = parsed
            .translations
            .into_iter()
            .next()
            .ok_or(TranslateError::NoTranslation)?;

        info!(
            detected_source_language = %translation.detected_source_language,
            text_len = translation.text.len(),
            "step: DeepL translate done"
        );
        Ok(TextResult {
            text: translation.text,
            detected_source_language: translation.detected_source_language,
        })
    }
}
