//! Translation config: DeepL credentials and the language classifier strategy.

use anyhow::{bail, Context, Result};
use language_detect::ClassifierKind;

use super::first_env;

#[derive(Debug, Clone)]
pub struct TranslationConfig {
    /// DEEPL_API_KEY
    pub deepl_api_key: String,
    /// DEEPL_SERVER_URL; `None` picks the free or pro endpoint from the key
    pub deepl_server_url: Option<String>,
    /// LANGUAGE_CLASSIFIER
    pub classifier: ClassifierKind,
}

impl TranslationConfig {
    pub fn from_env() -> Result<Self> {
        let Some(deepl_api_key) = first_env(&["DEEPL_API_KEY"]) else {
            bail!("deepl api key does not exist (set DEEPL_API_KEY)");
        };
        Ok(Self {
            deepl_api_key,
            deepl_server_url: first_env(&["DEEPL_SERVER_URL"]),
            classifier: Self::classifier_from_env()?,
        })
    }

    /// LANGUAGE_CLASSIFIER, defaulting to the script heuristic.
    pub fn classifier_from_env() -> Result<ClassifierKind> {
        match first_env(&["LANGUAGE_CLASSIFIER"]) {
            Some(s) => s.parse().context("Invalid LANGUAGE_CLASSIFIER"),
            None => Ok(ClassifierKind::default()),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if let Some(ref url_str) = self.deepl_server_url {
            if reqwest::Url::parse(url_str).is_err() {
                bail!("DEEPL_SERVER_URL is set but not a valid URL: {}", url_str);
            }
        }
        Ok(())
    }
}
