//! Tests for [`translate_handler::TranslationHandler`] and [`translate_handler::LoggingHandler`]:
//! the reply goes to the originating chat and comes back as `HandlerResponse::Reply`.

mod common;

use std::sync::Arc;

use common::{text_message, MockTranslator, RecordingBot};
use deepl_client::TranslateError;
use language_detect::ScriptClassifier;
use relay_core::{Handler, HandlerResponse};
use translate_handler::{LoggingHandler, TranslationHandler, TranslationService};

fn handler(translator: Arc<MockTranslator>, bot: Arc<RecordingBot>) -> TranslationHandler {
    TranslationHandler::new(
        TranslationService::new(Arc::new(ScriptClassifier::new()), translator),
        bot,
    )
}

/// **Test: Translation is sent to the message's chat and returned as Reply.**
#[tokio::test]
async fn test_reply_sent_to_origin_chat() {
    let bot = Arc::new(RecordingBot::default());
    let h = handler(MockTranslator::replying("Привет мир"), bot.clone());
    let message = text_message("Hello world");

    let response = h.handle(&message).await.unwrap();

    assert_eq!(response, HandlerResponse::Reply("Привет мир".to_string()));
    assert_eq!(bot.sent(), vec![(-100500, "Привет мир".to_string())]);
}

/// **Test: Failures are still answered with exactly one reply.**
#[tokio::test]
async fn test_failure_reply_sent() {
    let bot = Arc::new(RecordingBot::default());
    let h = handler(
        MockTranslator::failing(|| TranslateError::TooManyRequests),
        bot.clone(),
    );

    let response = h.handle(&text_message("Hello")).await.unwrap();

    let expected =
        "Too many requests, DeepL servers are currently experiencing high load: Hello".to_string();
    assert_eq!(response, HandlerResponse::Reply(expected.clone()));
    assert_eq!(bot.sent(), vec![(-100500, expected)]);
}

/// **Test: Empty content is ignored without replying.**
#[tokio::test]
async fn test_empty_message_ignored() {
    let bot = Arc::new(RecordingBot::default());
    let translator = MockTranslator::replying("unused");
    let h = handler(translator.clone(), bot.clone());

    let response = h.handle(&text_message("")).await.unwrap();

    assert_eq!(response, HandlerResponse::Ignore);
    assert!(bot.sent().is_empty());
    assert!(translator.calls().is_empty());
}

/// **Test: Whitespace-only text still gets the unsupported-language reply.**
#[tokio::test]
async fn test_whitespace_message_answered_as_unsupported() {
    let bot = Arc::new(RecordingBot::default());
    let translator = MockTranslator::replying("unused");
    let h = handler(translator.clone(), bot.clone());

    let response = h.handle(&text_message("   ")).await.unwrap();

    let expected = "language detected is not english or russian".to_string();
    assert_eq!(response, HandlerResponse::Reply(expected.clone()));
    assert_eq!(bot.sent(), vec![(-100500, expected)]);
    assert!(translator.calls().is_empty());
}

/// **Test: A transport failure while replying is returned to the caller.**
#[tokio::test]
async fn test_bot_failure_propagates() {
    let bot = Arc::new(RecordingBot::failing());
    let h = handler(MockTranslator::replying("Привет"), bot);

    let err = h.handle(&text_message("Hello")).await.unwrap_err();

    assert!(err.to_string().contains("bot was blocked"));
}

/// **Test: LoggingHandler lets the chain continue.**
#[tokio::test]
async fn test_logging_handler_passes_through() {
    let message = text_message("Hello");
    assert!(LoggingHandler.before(&message).await.unwrap());
    assert_eq!(
        LoggingHandler.handle(&message).await.unwrap(),
        HandlerResponse::Continue
    );
    LoggingHandler
        .after(&message, &HandlerResponse::Reply("x".to_string()))
        .await
        .unwrap();
}
