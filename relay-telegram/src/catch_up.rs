//! Startup backlog skip: ask for only the latest update before polling starts.

use anyhow::{Context, Result};
use tracing::{info, instrument};

use crate::TelegramConfig;

/// `GET {api}/bot{token}/getUpdates?offset=-1`, then logs the response.
///
/// Asking for offset -1 returns just the newest update, so messages that piled up while the bot
/// was down are not replayed. Returns the parsed response body.
#[instrument(skip(client, config))]
pub async fn skip_backlog(
    client: &reqwest::Client,
    config: &TelegramConfig,
) -> Result<serde_json::Value> {
    let url = format!("{}/bot{}/getUpdates", config.api_url(), config.bot_token);
    let response = client
        .get(&url)
        .query(&[("offset", "-1")])
        .send()
        .await
        .context("getUpdates request failed")?;

    let status = response.status();
    let body: serde_json::Value = response
        .json()
        .await
        .context("getUpdates returned a non-JSON body")?;

    info!(status = status.as_u16(), response = %body, "Skipped update backlog");
    Ok(body)
}
