//! KomekBot Telegram Bot
//!
//! A Telegram bot for primary-school teachers: it answers frequently asked
//! questions from a static menu and collects consultation requests (name,
//! phone, question) that are forwarded to an administrator.

#![allow(non_snake_case)]

pub mod config;
pub mod dialogue;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;
pub mod state;
pub mod transport;
pub mod ui;
pub mod utils;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{KomekError, Result};

// Re-export main components for easy access
pub use dialogue::{transition, Command, Event};
pub use handlers::{handle_update, CommandExecutor, EventNormalizer};
pub use services::{LeadNotifier, WebhookManager};
pub use state::{AppContext, ConversationState, Stage, StateStore};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
