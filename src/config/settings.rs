//! Application settings management
//! 
//! This module defines the configuration structure and provides methods
//! for loading settings from a TOML file and environment variables.

use std::collections::HashMap;
use std::net::SocketAddr;
use serde::{Deserialize, Serialize};
use url::Url;
use crate::utils::errors::{KomekError, Result};

/// Prefix for structured environment variables, e.g. `KOMEK_BOT__TOKEN`
pub const ENV_PREFIX: &str = "KOMEK";

/// Main application configuration structure
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    pub bot: BotConfig,
    pub server: ServerConfig,
    pub webhook: WebhookConfig,
    pub logging: LoggingConfig,
}

/// Telegram bot configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BotConfig {
    pub token: String,
    /// Chat that receives every captured lead
    pub admin_chat_id: i64,
    #[serde(default)]
    pub mode: TransportMode,
}

/// How updates reach the bot
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TransportMode {
    #[default]
    Polling,
    Webhook,
}

/// HTTP listener configuration (health endpoint, webhook endpoint)
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Webhook registration configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WebhookConfig {
    /// Externally visible base URL, required in webhook mode
    pub base_url: Option<String>,
    pub path: String,
    pub register_attempts: u32,
    pub retry_delay_seconds: u64,
    pub check_interval_seconds: u64,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: String,
    #[serde(default)]
    pub format: LogFormat,
    /// Directory for a daily rolling log file
    pub file_path: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Plain,
    Json,
}

impl Settings {
    /// Load settings from configuration file and process environment variables
    pub fn new() -> std::result::Result<Self, config::ConfigError> {
        Self::from_vars(std::env::vars().collect())
    }

    /// Load settings from an explicit set of environment variables
    ///
    /// Short names (`BOT_TOKEN`, `ADMIN_CHAT_ID`, `WEBHOOK_URL`, `PORT`,
    /// `TRANSPORT_MODE`, `LOG_LEVEL`) take precedence over `KOMEK_*` ones.
    pub fn from_vars(vars: HashMap<String, String>) -> std::result::Result<Self, config::ConfigError> {
        let short = |name: &str| vars.get(name).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let settings = config::Config::builder()
            .set_default("bot.mode", "polling")?
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8080_i64)?
            .set_default("webhook.path", "/webhook")?
            .set_default("webhook.register_attempts", 5_i64)?
            .set_default("webhook.retry_delay_seconds", 5_i64)?
            .set_default("webhook.check_interval_seconds", 600_i64)?
            .set_default("logging.level", "info")?
            .set_default("logging.format", "plain")?
            .add_source(config::File::with_name("config").required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .source(Some(vars.clone())),
            )
            .set_override_option("bot.token", short("BOT_TOKEN"))?
            .set_override_option("bot.admin_chat_id", short("ADMIN_CHAT_ID"))?
            .set_override_option("bot.mode", short("TRANSPORT_MODE").map(|m| m.to_lowercase()))?
            .set_override_option("webhook.base_url", short("WEBHOOK_URL"))?
            .set_override_option("server.port", short("PORT"))?
            .set_override_option("logging.level", short("LOG_LEVEL").map(|l| l.to_lowercase()))?
            .build()?;

        settings.try_deserialize()
    }

    /// Validate configuration settings
    pub fn validate(&self) -> Result<()> {
        super::validation::validate_settings(self)
    }

    /// Full URL the platform should deliver updates to, if a base URL is configured
    pub fn webhook_url(&self) -> Result<Option<Url>> {
        let Some(base) = self.webhook.base_url.as_deref() else {
            return Ok(None);
        };

        let base = Url::parse(base.trim_end_matches('/'))?;
        let mut url = base.clone();
        let path = format!("{}{}", base.path().trim_end_matches('/'), self.webhook.path);
        url.set_path(&path);
        Ok(Some(url))
    }

    /// Socket address for the HTTP listener
    pub fn listen_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| KomekError::Config(format!("Invalid listen address: {}", e)))
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bot: BotConfig {
                token: String::new(),
                admin_chat_id: 0,
                mode: TransportMode::Polling,
            },
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 8080,
            },
            webhook: WebhookConfig {
                base_url: None,
                path: "/webhook".to_string(),
                register_attempts: 5,
                retry_delay_seconds: 5,
                check_interval_seconds: 600,
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                format: LogFormat::Plain,
                file_path: None,
            },
        }
    }
}
