//! Inbound event normalization
//!
//! Maps raw Telegram updates onto dialogue events. Button labels and callback
//! data are recognized here, so the state machine only ever sees [`Event`]s.

use teloxide::types::{CallbackQuery, ChatId, Message, Update, UpdateKind, UserId};
use teloxide::utils::command::BotCommands;
use thiserror::Error;
use crate::dialogue::{BackTarget, Event};
use crate::models::faq::FAQ_CALLBACK_PREFIX;
use crate::ui::keyboards::callback;
use crate::ui::texts;
use super::commands::BotCommand;

/// An update that cannot be turned into an event
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Malformed {
    #[error("empty update body")]
    EmptyBody,
    #[error("invalid update body: {0}")]
    InvalidBody(String),
    #[error("update payload could not be parsed")]
    UnparsedPayload,
    #[error("update is missing {0}")]
    MissingField(&'static str),
}

/// A normalized event together with where it came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Envelope {
    pub update_id: u32,
    pub user_id: UserId,
    pub chat_id: ChatId,
    pub event: Event,
}

/// Outcome of normalizing a well-formed update
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inbound {
    Event(Envelope),
    /// Acknowledged without reaching the dialogue
    Ignored(&'static str),
}

/// Decode a webhook request body into an update
pub fn parse_update(body: &[u8]) -> Result<Update, Malformed> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(Malformed::EmptyBody);
    }

    serde_json::from_slice(body).map_err(|e| Malformed::InvalidBody(e.to_string()))
}

/// Turns updates into dialogue events
#[derive(Debug, Clone)]
pub struct EventNormalizer {
    bot_username: String,
}

impl EventNormalizer {
    /// `bot_username` is used to accept `/command@bot_username` forms
    pub fn new(bot_username: impl Into<String>) -> Self {
        Self {
            bot_username: bot_username.into(),
        }
    }

    pub fn normalize(&self, update: &Update) -> Result<Inbound, Malformed> {
        let update_id = update.id.0;

        match &update.kind {
            UpdateKind::Message(msg) => self.from_message(update_id, msg),
            UpdateKind::CallbackQuery(query) => Ok(Self::from_callback(update_id, query)),
            UpdateKind::EditedMessage(_) => Ok(Inbound::Ignored("edited message")),
            UpdateKind::Error(_) => Err(Malformed::UnparsedPayload),
            _ => Ok(Inbound::Ignored("unsupported update kind")),
        }
    }

    /// Parse and normalize a raw webhook body in one step
    pub fn normalize_body(&self, body: &[u8]) -> Result<(Update, Inbound), Malformed> {
        let update = parse_update(body)?;
        let inbound = self.normalize(&update)?;
        Ok((update, inbound))
    }

    fn from_message(&self, update_id: u32, msg: &Message) -> Result<Inbound, Malformed> {
        let user = msg.from.as_ref().ok_or(Malformed::MissingField("message sender"))?;
        if user.is_bot {
            return Ok(Inbound::Ignored("message from a bot"));
        }

        let event = if let Some(text) = msg.text() {
            self.classify_text(text)
        } else if let Some(contact) = msg.contact() {
            Event::ContactShared(contact.phone_number.clone())
        } else {
            Event::Unrecognized
        };

        Ok(Inbound::Event(Envelope {
            update_id,
            user_id: user.id,
            chat_id: msg.chat.id,
            event,
        }))
    }

    fn from_callback(update_id: u32, query: &CallbackQuery) -> Inbound {
        if query.from.is_bot {
            return Inbound::Ignored("callback from a bot");
        }

        let chat_id = query
            .message
            .as_ref()
            .map(|message| message.chat().id)
            .unwrap_or_else(|| ChatId::from(query.from.id));

        let event = match query.data.as_deref() {
            Some(callback::MENU_FAQ) => Event::SelectFaqMenu,
            Some(callback::MENU_LEAD) => Event::SelectLeadForm,
            Some(callback::BACK_MAIN) => Event::BackStep(BackTarget::MainMenu),
            Some(callback::BACK_FAQ) => Event::BackStep(BackTarget::FaqMenu),
            Some(callback::BACK_STEP) => Event::BackStep(BackTarget::PreviousStep),
            Some(data) if data.starts_with(FAQ_CALLBACK_PREFIX) => Event::SelectFaqCategory(data.to_string()),
            _ => Event::Unrecognized,
        };

        Inbound::Event(Envelope {
            update_id,
            user_id: query.from.id,
            chat_id,
            event,
        })
    }

    fn classify_text(&self, text: &str) -> Event {
        let trimmed = text.trim();

        if trimmed.starts_with('/') {
            return match BotCommand::parse(trimmed, &self.bot_username) {
                Ok(command) => command.event(),
                Err(_) => Event::Unrecognized,
            };
        }

        // Manual phone entry label stays text input, the dialogue re-prompts on it
        match trimmed {
            texts::FAQ_BUTTON => Event::SelectFaqMenu,
            texts::LEAD_FORM_BUTTON => Event::SelectLeadForm,
            texts::BACK_BUTTON => Event::BackStep(BackTarget::PreviousStep),
            texts::MAIN_MENU_BUTTON => Event::MenuCommand,
            _ => Event::TextInput(text.to_string()),
        }
    }
}
