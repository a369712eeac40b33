//! Duplicate delivery detection
//!
//! Telegram delivers at least once; a bounded window of recent update ids lets
//! redeliveries be acknowledged without being processed again.

use std::collections::{HashSet, VecDeque};
use std::sync::{Arc, Mutex, PoisonError};

/// Number of update ids remembered
pub const DEFAULT_WINDOW: usize = 1024;

#[derive(Debug)]
struct Window {
    capacity: usize,
    order: VecDeque<u32>,
    seen: HashSet<u32>,
}

/// Recently seen update ids, oldest evicted first
#[derive(Debug, Clone)]
pub struct DeliveryLog {
    window: Arc<Mutex<Window>>,
}

impl DeliveryLog {
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            window: Arc::new(Mutex::new(Window {
                capacity,
                order: VecDeque::with_capacity(capacity),
                seen: HashSet::with_capacity(capacity),
            })),
        }
    }

    /// Record an update id, returning `false` if it is already in the window
    pub fn first_delivery(&self, update_id: u32) -> bool {
        let mut window = self.window.lock().unwrap_or_else(PoisonError::into_inner);
        if !window.seen.insert(update_id) {
            return false;
        }

        window.order.push_back(update_id);
        if window.order.len() > window.capacity {
            if let Some(oldest) = window.order.pop_front() {
                window.seen.remove(&oldest);
            }
        }
        true
    }

    pub fn len(&self) -> usize {
        self.window.lock().unwrap_or_else(PoisonError::into_inner).order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for DeliveryLog {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_WINDOW)
    }
}
