//! Tests for [`relay_telegram::skip_backlog`] against a mockito Bot API.

use mockito::Matcher;
use relay_telegram::{skip_backlog, TelegramConfig};

const TEST_BOT_TOKEN: &str = "test_bot_token_12345";

/// **Test: Requests getUpdates with offset=-1 on the configured API URL and returns the body.**
#[tokio::test]
async fn test_skip_backlog_requests_latest_update() {
    let mut server = mockito::Server::new_async().await;
    let path = format!("/bot{}/getUpdates", TEST_BOT_TOKEN);
    let mock = server
        .mock("GET", path.as_str())
        .match_query(Matcher::UrlEncoded("offset".into(), "-1".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"ok":true,"result":[{"update_id":991}]}"#)
        .create_async()
        .await;

    let config = TelegramConfig::with_token(TEST_BOT_TOKEN.to_string())
        .with_api_url(Some(server.url()));
    let body = skip_backlog(&reqwest::Client::new(), &config).await.unwrap();

    mock.assert_async().await;
    assert_eq!(body["ok"], serde_json::json!(true));
    assert_eq!(body["result"][0]["update_id"], serde_json::json!(991));
}

/// **Test: A non-JSON body is an error (startup aborts).**
#[tokio::test]
async fn test_skip_backlog_non_json_fails() {
    let mut server = mockito::Server::new_async().await;
    let path = format!("/bot{}/getUpdates", TEST_BOT_TOKEN);
    let _mock = server
        .mock("GET", path.as_str())
        .match_query(Matcher::Any)
        .with_status(502)
        .with_body("Bad Gateway")
        .create_async()
        .await;

    let config = TelegramConfig::with_token(TEST_BOT_TOKEN.to_string())
        .with_api_url(Some(server.url()));
    let err = skip_backlog(&reqwest::Client::new(), &config)
        .await
        .unwrap_err();

    assert!(err.to_string().contains("non-JSON"));
}

/// **Test: Telegram error payloads are still JSON and are returned for logging.**
#[tokio::test]
async fn test_skip_backlog_returns_error_payload() {
    let mut server = mockito::Server::new_async().await;
    let path = format!("/bot{}/getUpdates", TEST_BOT_TOKEN);
    let _mock = server
        .mock("GET", path.as_str())
        .match_query(Matcher::Any)
        .with_status(401)
        .with_body(r#"{"ok":false,"error_code":401,"description":"Unauthorized"}"#)
        .create_async()
        .await;

    let config = TelegramConfig::with_token(TEST_BOT_TOKEN.to_string())
        .with_api_url(Some(server.url()));
    let body = skip_backlog(&reqwest::Client::new(), &config).await.unwrap();

    assert_eq!(body["description"], serde_json::json!("Unauthorized"));
}
