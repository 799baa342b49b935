//! Test doubles for the translator, classifier and bot.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;
use deepl_client::{TextResult, TranslateError, Translator};
use language_detect::{ClassifyError, LanguageClassifier, LanguageTag};
use relay_core::{Bot, Chat, Message, RelayError, User};

/// One recorded `translate(text, source, target)` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslateCall {
    pub text: String,
    pub source: String,
    pub target: String,
}

type Responder = Box<dyn Fn(&str) -> Result<TextResult, TranslateError> + Send + Sync>;

/// Translator that records calls and answers through a closure.
pub struct MockTranslator {
    calls: Mutex<Vec<TranslateCall>>,
    respond: Responder,
}

impl MockTranslator {
    /// Answers every call with `text`.
    pub fn replying(text: &str) -> Arc<Self> {
        let text = text.to_string();
        Arc::new(Self {
            calls: Mutex::new(Vec::new()),
            respond: Box::new(move |_: &str| {
                Ok(TextResult {
                    text: text.clone(),
                    detected_source_language: String::new(),
                })
            }),
        })
    }

    /// Fails every call with the error built by `make_err`.
    pub fn failing<F>(make_err: F) -> Arc<Self>
    where
        F: Fn() -> TranslateError + Send + Sync + 'static,
    {
        Arc::new(Self {
            calls: Mutex::new(Vec::new()),
            respond: Box::new(move |_: &str| Err(make_err())),
        })
    }

    pub fn calls(&self) -> Vec<TranslateCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Translator for MockTranslator {
    async fn translate(
        &self,
        text: &str,
        source_lang: &str,
        target_lang: &str,
    ) -> Result<TextResult, TranslateError> {
        self.calls.lock().unwrap().push(TranslateCall {
            text: text.to_string(),
            source: source_lang.to_string(),
            target: target_lang.to_string(),
        });
        (self.respond)(text)
    }
}

/// Classifier with a fixed answer.
pub struct FixedClassifier(pub Result<LanguageTag, ClassifyError>);

#[async_trait]
impl LanguageClassifier for FixedClassifier {
    async fn classify(&self, _text: &str) -> Result<LanguageTag, ClassifyError> {
        self.0.clone()
    }
}

/// Bot that records `(chat_id, text)` for every message sent; optionally fails.
#[derive(Default)]
pub struct RecordingBot {
    pub sent: Mutex<Vec<(i64, String)>>,
    pub fail: bool,
}

impl RecordingBot {
    pub fn failing() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    pub fn sent(&self) -> Vec<(i64, String)> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Bot for RecordingBot {
    async fn send_message(&self, chat: &Chat, text: &str) -> relay_core::Result<()> {
        if self.fail {
            return Err(RelayError::Bot("Forbidden: bot was blocked by the user".to_string()));
        }
        self.sent.lock().unwrap().push((chat.id, text.to_string()));
        Ok(())
    }
}

pub fn text_message(content: &str) -> Message {
    Message {
        id: "7".to_string(),
        user: User {
            id: 1001,
            username: Some("alice".to_string()),
            first_name: Some("Alice".to_string()),
            last_name: None,
        },
        chat: Chat {
            id: -100500,
            chat_type: "group".to_string(),
        },
        content: content.to_string(),
        created_at: Utc::now(),
    }
}
