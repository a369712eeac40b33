//! Logging configuration and setup
//! 
//! This module provides logging initialization and structured logging utilities
//! for the KomekBot application.

use tracing::{info, warn, error};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, Layer};
use crate::config::{LoggingConfig, LogFormat};
use crate::utils::errors::{KomekError, Result};

/// Initialize logging based on configuration
///
/// The returned guard flushes the file writer on drop and must be kept alive
/// for as long as the process logs.
pub fn init_logging(config: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    let (file_layer, guard) = match &config.file_path {
        Some(dir) => {
            let file_appender = tracing_appender::rolling::daily(dir, "komekbot.log");
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(non_blocking);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    let stdout_layer = match config.format {
        LogFormat::Plain => tracing_subscriber::fmt::layer().with_writer(std::io::stdout).boxed(),
        LogFormat::Json => tracing_subscriber::fmt::layer().json().with_writer(std::io::stdout).boxed(),
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.level))
        .with(stdout_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| KomekError::Logging(e.to_string()))?;
        
    info!("Logging initialized with level: {}", config.level);
    Ok(guard)
}

/// Log a captured lead without its free-text question
pub fn log_lead_captured(lead_id: &str, user_id: u64, delivered: bool) {
    if delivered {
        info!(lead_id = lead_id, user_id = user_id, "Lead delivered to administrator");
    } else {
        warn!(lead_id = lead_id, user_id = user_id, "Lead captured but notification failed");
    }
}

/// Log API errors with context
pub fn log_api_error(api: &str, error: &str, context: Option<&str>) {
    error!(
        api = api,
        error = error,
        context = context,
        "API error occurred"
    );
}
