//! REPL runner: converts teloxide text messages to core::Message and passes them to HandlerChain.

use anyhow::Result;
use handler_chain::HandlerChain;
use relay_core::ToCoreMessage;
use teloxide::prelude::*;
use tracing::{debug, error, info, instrument};

use crate::adapters::TelegramMessageWrapper;

/// Starts long polling. Each text message runs through `handler_chain` in its own spawned task,
/// so a slow translation never holds up other chats. Non-text messages are skipped.
#[instrument(skip(bot, handler_chain))]
pub async fn run_repl(bot: teloxide::Bot, handler_chain: HandlerChain) -> Result<()> {
    if let Ok(me) = bot.get_me().await {
        if let Some(username) = &me.user.username {
            info!(username = %username, "Bot identity resolved");
        }
    }

    teloxide::repl(bot, move |_bot: Bot, msg: teloxide::types::Message| {
        let chain = handler_chain.clone();

        async move {
            let core_msg = TelegramMessageWrapper(&msg).to_core();

            if msg.text().is_none() {
                debug!(
                    user_id = core_msg.user.id,
                    chat_id = core_msg.chat.id,
                    "Received non-text message, skipping"
                );
                return respond(());
            }

            tokio::spawn(async move {
                if let Err(e) = chain.handle(&core_msg).await {
                    error!(
                        error = %e,
                        user_id = core_msg.user.id,
                        chat_id = core_msg.chat.id,
                        "Handler chain failed"
                    );
                }
            });

            respond(())
        }
    })
    .await;

    Ok(())
}
