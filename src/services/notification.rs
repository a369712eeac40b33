//! Lead notification service
//!
//! Forwards completed leads to the administrator chat.

use teloxide::{Bot, types::{ChatId, Message, ParseMode}, requests::Requester, prelude::Request, payloads::SendMessageSetters, sugar::request::RequestLinkPreviewExt};
use tracing::{debug, error, info};
use crate::models::Lead;
use crate::utils::errors::{KomekError, Result};

/// Sends lead notifications to the administrator
#[derive(Clone)]
pub struct LeadNotifier {
    bot: Bot,
    admin_chat_id: ChatId,
}

impl LeadNotifier {
    pub fn new(bot: Bot, admin_chat_id: i64) -> Self {
        Self {
            bot,
            admin_chat_id: ChatId(admin_chat_id),
        }
    }

    /// Send one lead to the administrator
    pub async fn notify(&self, lead: &Lead) -> Result<Message> {
        debug!(lead_id = %lead.id, admin_chat_id = ?self.admin_chat_id, "Sending lead notification");

        let send_request = self
            .bot
            .send_message(self.admin_chat_id, lead.to_notification_text())
            .parse_mode(ParseMode::Html)
            .disable_link_preview(true);

        match send_request.send().await {
            Ok(message) => {
                info!(lead_id = %lead.id, "Lead notification sent");
                Ok(message)
            }
            Err(e) => {
                error!(lead_id = %lead.id, error = %e, "Failed to send lead notification");
                Err(KomekError::Telegram(e))
            }
        }
    }
}
