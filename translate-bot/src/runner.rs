//! Startup and one-shot entry points.

use anyhow::{Context, Result};
use language_detect::{build_classifier, ClassifierKind, LanguageClassifier, LanguageTag};
use relay_core::init_tracing;
use relay_telegram::{run_repl, skip_backlog, DEFAULT_TELEGRAM_API_URL};
use std::path::Path;
use tracing::{info, instrument};
use translate_handler::Reply;

use crate::components::{build_bot_components, build_handler_chain, build_translation_service};
use crate::config::{BotConfig, TranslationConfig};

/// Main entry: validate config, init logging, build components, skip the backlog, then run the REPL.
#[instrument(skip(config))]
pub async fn run_bot(config: BotConfig) -> Result<()> {
    config.validate()?;
    if let Some(dir) = Path::new(config.log_file()).parent() {
        if !dir.as_os_str().is_empty() {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create log directory {}", dir.display()))?;
        }
    }
    init_tracing(config.log_file())?;

    info!(
        classifier = %config.translation.classifier,
        skip_backlog = config.base.skip_backlog,
        telegram_api_url = config.telegram_api_url().unwrap_or(DEFAULT_TELEGRAM_API_URL),
        "Initializing bot"
    );

    let components = build_bot_components(&config)?;

    if config.base.skip_backlog {
        skip_backlog(&reqwest::Client::new(), &config.base.telegram())
            .await
            .context("Failed to skip update backlog")?;
    }

    let handler_chain = build_handler_chain(components.service, components.bot);

    info!("Bot started successfully");
    run_repl(components.teloxide_bot, handler_chain).await
}

/// Classifies `text` once. `classifier` overrides LANGUAGE_CLASSIFIER.
pub async fn detect_once(text: &str, classifier: Option<ClassifierKind>) -> Result<LanguageTag> {
    let kind = match classifier {
        Some(kind) => kind,
        None => TranslationConfig::classifier_from_env()?,
    };
    Ok(build_classifier(kind).classify(text).await?)
}

/// Runs the full message handling once and returns the reply the bot would send.
pub async fn translate_once(text: &str, classifier: Option<ClassifierKind>) -> Result<Reply> {
    let mut config = TranslationConfig::from_env()?;
    if let Some(kind) = classifier {
        config.classifier = kind;
    }
    config.validate()?;
    Ok(build_translation_service(&config).translate_message(text).await)
}
