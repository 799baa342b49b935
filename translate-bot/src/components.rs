//! Component factory: builds the classifier, translator, Telegram bot and handler chain from config.

use anyhow::Result;
use deepl_client::{DeepLTranslator, Translator};
use handler_chain::HandlerChain;
use language_detect::build_classifier;
use relay_core::Bot;
use relay_telegram::{TelegramBotAdapter, TeloxideBot};
use std::sync::Arc;
use tracing::{info, instrument};
use translate_handler::{LoggingHandler, TranslationHandler, TranslationService};

use crate::config::{BotConfig, TranslationConfig};

/// Everything run_bot needs, produced by the component factory.
pub struct BotComponents {
    pub teloxide_bot: TeloxideBot,
    /// Reply transport used by the translation handler.
    pub bot: Arc<dyn Bot>,
    pub service: TranslationService,
}

/// Classifier strategy + DeepL translator.
pub fn build_translation_service(config: &TranslationConfig) -> TranslationService {
    let mut translator = DeepLTranslator::new(config.deepl_api_key.clone());
    if let Some(ref url) = config.deepl_server_url {
        translator = translator.with_server_url(url.clone());
    }
    info!(
        classifier = %config.classifier,
        deepl_server_url = %translator.server_url(),
        "Translation service configured"
    );
    let translator: Arc<dyn Translator> = Arc::new(translator);
    TranslationService::new(build_classifier(config.classifier), translator)
}

#[instrument(skip(config))]
pub fn build_bot_components(config: &BotConfig) -> Result<BotComponents> {
    let teloxide_bot = config.base.telegram().build_bot()?;
    let bot: Arc<dyn Bot> = Arc::new(TelegramBotAdapter::new(teloxide_bot.clone()));
    let service = build_translation_service(&config.translation);
    Ok(BotComponents {
        teloxide_bot,
        bot,
        service,
    })
}

/// Builds the handler chain (logging → translation).
pub fn build_handler_chain(service: TranslationService, bot: Arc<dyn Bot>) -> HandlerChain {
    HandlerChain::new()
        .add_handler(Arc::new(LoggingHandler))
        .add_handler(Arc::new(TranslationHandler::new(service, bot)))
}
