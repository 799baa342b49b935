//! Chain handler that translates the message and replies in the same chat.

use async_trait::async_trait;
use relay_core::{Bot, Handler, HandlerResponse, Message, Result};
use std::sync::Arc;
use tracing::{info, instrument};

use crate::TranslationService;

/// Terminal handler: translates `message.content` and sends the reply via [`Bot`].
pub struct TranslationHandler {
    service: TranslationService,
    bot: Arc<dyn Bot>,
}

impl TranslationHandler {
    pub fn new(service: TranslationService, bot: Arc<dyn Bot>) -> Self {
        Self { service, bot }
    }
}

#[async_trait]
impl Handler for TranslationHandler {
    #[instrument(skip(self, message), fields(user_id = message.user.id, chat_id = message.chat.id))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        if message.content.is_empty() {
            return Ok(HandlerResponse::Ignore);
        }

        let reply = self.service.translate_message(&message.content).await;
        let text = reply.to_string();
        self.bot.reply_to(message, &text).await?;

        info!(reply_kind = reply.kind(), reply_len = text.len(), "step: reply sent");
        Ok(HandlerResponse::Reply(text))
    }
}
