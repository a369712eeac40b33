//! State storage implementation
//!
//! This module keeps conversation state in process memory, one entry per user,
//! with a per-user async mutex serializing every read-modify-write.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};
use teloxide::types::UserId;
use tokio::sync::{Mutex as AsyncMutex, OwnedMutexGuard};
use tracing::debug;
use super::context::ConversationState;

type Slot = Arc<AsyncMutex<ConversationState>>;

/// Exclusive access to one user's conversation state
pub type ConversationGuard = OwnedMutexGuard<ConversationState>;

/// In-memory state storage manager
#[derive(Clone, Default)]
pub struct StateStore {
    slots: Arc<Mutex<HashMap<UserId, Slot>>>,
}

impl StateStore {
    /// Create an empty state store
    pub fn new() -> Self {
        Self::default()
    }

    /// Lock a user's state, creating an idle one on first use
    ///
    /// Waiters are served in arrival order, so events for one user are
    /// applied in the order their handlers reached the store.
    pub async fn lock(&self, user_id: UserId) -> ConversationGuard {
        let slot = self.slot(user_id);
        slot.lock_owned().await
    }

    /// Snapshot of a user's state (idle if the user was never seen)
    pub async fn get(&self, user_id: UserId) -> ConversationState {
        self.lock(user_id).await.clone()
    }

    /// Replace a user's state
    pub async fn set(&self, user_id: UserId, state: ConversationState) {
        let mut guard = self.lock(user_id).await;
        debug!(user_id = user_id.0, stage = %state.stage, "Saving conversation state");
        *guard = state;
    }

    /// Number of users with a state entry
    pub fn len(&self) -> usize {
        self.slots.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn slot(&self, user_id: UserId) -> Slot {
        let mut slots = self.slots.lock().unwrap_or_else(PoisonError::into_inner);
        slots
            .entry(user_id)
            .or_insert_with(|| {
                debug!(user_id = user_id.0, "Creating conversation state");
                Arc::new(AsyncMutex::new(ConversationState::idle()))
            })
            .clone()
    }
}
