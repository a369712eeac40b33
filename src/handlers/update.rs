//! Per-update entry point
//!
//! Shared by the polling dispatcher and the webhook endpoint. Every failure
//! is handled here so neither transport sees an error.

use teloxide::types::{Update, UpdateKind};
use tracing::{debug, error, info, warn};
use crate::dialogue::{transition, Keyboard};
use crate::middleware::log_update;
use crate::state::AppContext;
use crate::ui::texts;
use crate::utils::errors::Result;
use super::normalizer::{Envelope, Inbound};

/// What happened to an update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Handled,
    /// Handling failed and the user got an apology
    Failed,
    Duplicate,
    Ignored,
    Malformed,
}

/// Normalize and process one update
pub async fn handle_update(app: &AppContext, update: Update) -> Outcome {
    log_update(&update);

    match app.normalizer.normalize(&update) {
        Ok(inbound) => process_inbound(app, &update, inbound).await,
        Err(malformed) => {
            warn!(update_id = update.id.0, error = %malformed, "Dropping malformed update");
            Outcome::Malformed
        }
    }
}

/// Process an already normalized update
pub async fn process_inbound(app: &AppContext, update: &Update, inbound: Inbound) -> Outcome {
    let envelope = match inbound {
        Inbound::Event(envelope) => envelope,
        Inbound::Ignored(reason) => {
            debug!(update_id = update.id.0, reason, "Ignoring update");
            return Outcome::Ignored;
        }
    };

    if !app.deliveries.first_delivery(envelope.update_id) {
        debug!(update_id = envelope.update_id, "Skipping duplicate delivery");
        return Outcome::Duplicate;
    }

    if let UpdateKind::CallbackQuery(query) = &update.kind {
        app.executor.answer_callback(query).await;
    }

    match dispatch(app, &envelope).await {
        Ok(()) => Outcome::Handled,
        Err(e) => {
            error!(
                user_id = envelope.user_id.0,
                event = envelope.event.kind(),
                severity = %e.severity(),
                recoverable = e.is_recoverable(),
                error = %e,
                "Error handling update"
            );

            let apology = app
                .executor
                .send_reply(envelope.chat_id, texts::APOLOGY.to_string(), Keyboard::Keep)
                .await;
            if let Err(e) = apology {
                error!(user_id = envelope.user_id.0, error = %e, "Failed to send apology");
            }

            Outcome::Failed
        }
    }
}

/// Apply the event to the user's state and run the resulting commands
///
/// The user's lock is held until the commands finish, so replies for one
/// user go out in event order.
async fn dispatch(app: &AppContext, envelope: &Envelope) -> Result<()> {
    let mut conversation = app.store.lock(envelope.user_id).await;

    let from = conversation.stage;
    let result = transition(&conversation, &envelope.event);
    *conversation = result.new_state;

    info!(
        user_id = envelope.user_id.0,
        event = envelope.event.kind(),
        from = %from,
        to = %conversation.stage,
        "Conversation transition"
    );

    app.executor.execute(envelope, result.commands).await
}
