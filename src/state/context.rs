//! Conversation context management
//!
//! This module holds the per-user conversation state (stage plus collected
//! form fields) and the application-wide context handed to every handler.

use std::sync::Arc;
use serde::{Deserialize, Serialize};
use teloxide::Bot;

use crate::Settings;
use crate::handlers::{CommandExecutor, EventNormalizer};
use crate::services::LeadNotifier;
use crate::transport::DeliveryLog;
use super::storage::StateStore;

/// Application-wide context containing services and settings
///
/// Built once at startup and passed explicitly to every update handler.
#[derive(Clone)]
pub struct AppContext {
    pub settings: Arc<Settings>,
    pub bot: Bot,
    pub store: StateStore,
    pub normalizer: EventNormalizer,
    pub executor: CommandExecutor,
    pub deliveries: DeliveryLog,
}

impl AppContext {
    /// Create the context from loaded settings and the bot's own username
    pub fn new(settings: Settings, bot: Bot, bot_username: impl Into<String>) -> Self {
        let notifier = LeadNotifier::new(bot.clone(), settings.bot.admin_chat_id);
        let executor = CommandExecutor::new(bot.clone(), notifier);

        Self {
            settings: Arc::new(settings),
            bot,
            store: StateStore::new(),
            normalizer: EventNormalizer::new(bot_username),
            executor,
            deliveries: DeliveryLog::default(),
        }
    }
}

/// Step of the lead-capture form the conversation is at
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stage {
    #[default]
    Idle,
    AwaitingName,
    AwaitingPhone,
    AwaitingQuestion,
}

impl Stage {
    pub fn as_str(self) -> &'static str {
        match self {
            Stage::Idle => "idle",
            Stage::AwaitingName => "awaiting_name",
            Stage::AwaitingPhone => "awaiting_phone",
            Stage::AwaitingQuestion => "awaiting_question",
        }
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Form fields confirmed so far
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectedFields {
    pub name: Option<String>,
    pub phone: Option<String>,
}

impl CollectedFields {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.phone.is_none()
    }
}

/// User conversation state
///
/// Build non-idle states through the stage constructors so that the fields
/// always match the stage.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationState {
    pub stage: Stage,
    pub fields: CollectedFields,
}

impl ConversationState {
    /// Idle state with no collected fields
    pub fn idle() -> Self {
        Self::default()
    }

    pub fn awaiting_name() -> Self {
        Self {
            stage: Stage::AwaitingName,
            fields: CollectedFields::default(),
        }
    }

    pub fn awaiting_phone(name: impl Into<String>) -> Self {
        Self {
            stage: Stage::AwaitingPhone,
            fields: CollectedFields {
                name: Some(name.into()),
                phone: None,
            },
        }
    }

    pub fn awaiting_question(name: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            stage: Stage::AwaitingQuestion,
            fields: CollectedFields {
                name: Some(name.into()),
                phone: Some(phone.into()),
            },
        }
    }

    /// Whether the collected fields are exactly those the stage requires
    pub fn is_consistent(&self) -> bool {
        let present = |value: &Option<String>| value.as_deref().is_some_and(|v| !v.is_empty());

        match self.stage {
            Stage::Idle | Stage::AwaitingName => self.fields.is_empty(),
            Stage::AwaitingPhone => present(&self.fields.name) && self.fields.phone.is_none(),
            Stage::AwaitingQuestion => present(&self.fields.name) && present(&self.fields.phone),
        }
    }
}
