//! Logging middleware
//!
//! Structured logging of inbound updates before they are normalized. Message
//! text is only logged at debug level.

use teloxide::types::{Chat, MediaKind, Message, MessageKind, Update, UpdateKind};
use tracing::{debug, info};
use crate::utils::helpers::truncate_text;

/// Longest message text written to the debug log
const LOGGED_TEXT_CHARS: usize = 64;

/// Log an incoming update
pub fn log_update(update: &Update) {
    match &update.kind {
        UpdateKind::Message(message) => log_message(update.id.0, message),
        UpdateKind::CallbackQuery(callback) => {
            info!(
                update_id = update.id.0,
                user_id = callback.from.id.0,
                callback_data = callback.data.as_deref().unwrap_or("none"),
                "Callback query received"
            );
        }
        _ => {
            debug!(update_id = update.id.0, update_type = ?std::mem::discriminant(&update.kind), "Other update type received");
        }
    }
}

fn log_message(update_id: u32, message: &Message) {
    let message_type = match &message.kind {
        MessageKind::Common(common) => match &common.media_kind {
            MediaKind::Text(text) => {
                debug!(update_id, chat_id = message.chat.id.0, text = %truncate_text(&text.text, LOGGED_TEXT_CHARS), "Text message received");
                "text"
            }
            MediaKind::Contact(_) => "contact",
            MediaKind::Photo(_) => "photo",
            MediaKind::Sticker(_) => "sticker",
            MediaKind::Voice(_) => "voice",
            _ => "other_media",
        },
        _ => "other",
    };

    info!(
        update_id,
        user_id = message.from.as_ref().map(|user| user.id.0),
        chat_id = message.chat.id.0,
        chat_type = chat_type(&message.chat),
        message_type,
        message_id = message.id.0,
        "Message received"
    );
}

fn chat_type(chat: &Chat) -> &'static str {
    if chat.is_private() {
        "private"
    } else if chat.is_group() {
        "group"
    } else if chat.is_supergroup() {
        "supergroup"
    } else {
        "channel"
    }
}
