//! State management module
//! 
//! This module handles conversation state and the application context

pub mod context;
pub mod storage;

// Re-export commonly used state components
pub use context::{AppContext, CollectedFields, ConversationState, Stage};
pub use storage::{ConversationGuard, StateStore};
