//! Bot handlers module
//! 
//! This module turns platform updates into dialogue events and carries out
//! the resulting commands:
//! - Bot command parsing
//! - Inbound event normalization
//! - Outbound command execution
//! - The per-update entry point shared by both transports

pub mod commands;
pub mod executor;
pub mod normalizer;
pub mod update;

// Re-export commonly used handler components
pub use commands::BotCommand;
pub use executor::CommandExecutor;
pub use normalizer::{parse_update, Envelope, EventNormalizer, Inbound, Malformed};
pub use update::{handle_update, process_inbound, Outcome};
