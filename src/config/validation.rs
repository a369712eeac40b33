//! Configuration validation module
//! 
//! This module provides validation functions for application configuration
//! to ensure all required settings are properly configured.

use crate::utils::errors::{KomekError, Result};
use super::{Settings, TransportMode};

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_bot_config(&settings.bot)?;
    validate_server_config(&settings.server)?;
    validate_webhook_config(&settings.webhook, settings.bot.mode)?;
    validate_logging_config(&settings.logging)?;
    
    Ok(())
}

/// Validate bot configuration
fn validate_bot_config(config: &super::BotConfig) -> Result<()> {
    if config.token.trim().is_empty() {
        return Err(KomekError::Config(
            "Bot token is required".to_string()
        ));
    }
    
    if config.admin_chat_id == 0 {
        return Err(KomekError::Config(
            "Admin chat ID must be configured".to_string()
        ));
    }
    
    Ok(())
}

/// Validate HTTP listener configuration
fn validate_server_config(config: &super::ServerConfig) -> Result<()> {
    if config.host.is_empty() {
        return Err(KomekError::Config(
            "Server host is required".to_string()
        ));
    }
    
    if config.port == 0 {
        return Err(KomekError::Config(
            "Server port must be greater than 0".to_string()
        ));
    }
    
    Ok(())
}

/// Validate webhook configuration; the base URL matters only in webhook mode
fn validate_webhook_config(config: &super::WebhookConfig, mode: TransportMode) -> Result<()> {
    if !config.path.starts_with('/') {
        return Err(KomekError::Config(
            format!("Webhook path must start with '/': {}", config.path)
        ));
    }
    
    if config.register_attempts == 0 {
        return Err(KomekError::Config(
            "Webhook register attempts must be greater than 0".to_string()
        ));
    }
    
    if config.check_interval_seconds == 0 {
        return Err(KomekError::Config(
            "Webhook check interval must be greater than 0".to_string()
        ));
    }
    
    if mode == TransportMode::Webhook {
        let base_url = config.base_url.as_deref().unwrap_or("");
        if base_url.is_empty() {
            return Err(KomekError::Config(
                "Webhook base URL is required in webhook mode".to_string()
            ));
        }
        
        let url = url::Url::parse(base_url)?;
        if url.scheme() != "https" {
            return Err(KomekError::Config(
                format!("Webhook base URL must use https: {}", base_url)
            ));
        }
    }
    
    Ok(())
}

/// Validate logging configuration
fn validate_logging_config(config: &super::LoggingConfig) -> Result<()> {
    if config.level.is_empty() {
        return Err(KomekError::Config(
            "Log level is required".to_string()
        ));
    }
    
    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if !valid_levels.contains(&config.level.as_str()) {
        return Err(KomekError::Config(
            format!("Invalid log level: {}. Valid levels: {:?}", config.level, valid_levels)
        ));
    }
    
    Ok(())
}
