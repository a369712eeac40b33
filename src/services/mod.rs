//! Services module
//!
//! Outbound integrations with the Telegram API

pub mod notification;
pub mod webhook;

// Re-export commonly used services
pub use notification::LeadNotifier;
pub use webhook::WebhookManager;
