//! Error handling for KomekBot
//! 
//! This module defines the main error types used throughout the application
//! and provides a unified error handling strategy.

use thiserror::Error;

/// Main error type for KomekBot application
#[derive(Error, Debug)]
pub enum KomekError {
    #[error("Telegram API error: {0}")]
    Telegram(#[from] teloxide::RequestError),
    
    #[error("Configuration error: {0}")]
    Config(String),
    
    #[error("Configuration loading error: {0}")]
    ConfigLoad(#[from] config::ConfigError),
    
    #[error("Webhook registration failed after {attempts} attempts: {reason}")]
    WebhookRegistration { attempts: u32, reason: String },
    
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    
    #[error("URL parsing error: {0}")]
    UrlParse(#[from] url::ParseError),
    
    #[error("Logging setup error: {0}")]
    Logging(String),
}

/// Result type alias for KomekBot operations
pub type Result<T> = std::result::Result<T, KomekError>;

impl KomekError {
    /// Check if the error is recoverable
    pub fn is_recoverable(&self) -> bool {
        match self {
            KomekError::Telegram(_) => true,
            KomekError::Config(_) => false,
            KomekError::ConfigLoad(_) => false,
            KomekError::WebhookRegistration { .. } => false,
            KomekError::Io(_) => true,
            KomekError::UrlParse(_) => false,
            KomekError::Logging(_) => false,
        }
    }
    
    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            KomekError::Config(_) => ErrorSeverity::Critical,
            KomekError::ConfigLoad(_) => ErrorSeverity::Critical,
            KomekError::WebhookRegistration { .. } => ErrorSeverity::Critical,
            KomekError::Logging(_) => ErrorSeverity::Critical,
            _ => ErrorSeverity::Error,
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Info,
    Warning,
    Error,
    Critical,
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorSeverity::Info => write!(f, "INFO"),
            ErrorSeverity::Warning => write!(f, "WARN"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}
