//! Command execution
//!
//! Runs the commands a transition produced against the Telegram API.

use teloxide::{Bot, types::{CallbackQuery, ChatId, ParseMode}, prelude::*};
use tracing::{debug, warn};
use crate::dialogue::{Command, Keyboard, LeadDraft};
use crate::models::Lead;
use crate::services::LeadNotifier;
use crate::ui::render_keyboard;
use crate::utils::errors::Result;
use crate::utils::logging::log_lead_captured;
use super::normalizer::Envelope;

/// Executes dialogue commands in order
#[derive(Clone)]
pub struct CommandExecutor {
    bot: Bot,
    notifier: LeadNotifier,
}

impl CommandExecutor {
    pub fn new(bot: Bot, notifier: LeadNotifier) -> Self {
        Self { bot, notifier }
    }

    /// Execute the commands for one event
    ///
    /// A failed reply aborts the remaining commands. A failed admin
    /// notification is logged and the remaining commands still run.
    pub async fn execute(&self, envelope: &Envelope, commands: Vec<Command>) -> Result<()> {
        for command in commands {
            match command {
                Command::Reply { text, keyboard } => {
                    self.send_reply(envelope.chat_id, text, keyboard).await?;
                }
                Command::NotifyAdmin(draft) => self.notify_admin(envelope, draft).await,
            }
        }

        Ok(())
    }

    /// Send an HTML message, attaching a keyboard unless it is [`Keyboard::Keep`]
    pub async fn send_reply(&self, chat_id: ChatId, text: String, keyboard: Keyboard) -> Result<()> {
        debug!(chat_id = ?chat_id, keyboard = ?keyboard, "Sending reply");

        let mut request = self.bot.send_message(chat_id, text).parse_mode(ParseMode::Html);
        if let Some(markup) = render_keyboard(keyboard) {
            request = request.reply_markup(markup);
        }

        request.await?;
        Ok(())
    }

    /// Stop the client's loading indicator on an inline button
    pub async fn answer_callback(&self, query: &CallbackQuery) {
        if let Err(e) = self.bot.answer_callback_query(query.id.clone()).await {
            warn!(user_id = query.from.id.0, error = %e, "Failed to answer callback query");
        }
    }

    async fn notify_admin(&self, envelope: &Envelope, draft: LeadDraft) {
        let lead = Lead::new(
            envelope.user_id.0,
            draft.name.as_deref(),
            draft.phone.as_deref(),
            &draft.question,
        );

        let delivered = self.notifier.notify(&lead).await.is_ok();
        log_lead_captured(&lead.id.to_string(), lead.user_id, delivered);
    }
}
