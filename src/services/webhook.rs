//! Webhook registration service
//!
//! Registers the webhook with bounded retries, re-asserts it periodically and
//! removes it on shutdown.

use std::time::Duration;
use teloxide::{Bot, prelude::*};
use tracing::{debug, error, info, warn};
use url::Url;
use crate::config::Settings;
use crate::utils::errors::{KomekError, Result};
use crate::utils::logging::log_api_error;

/// Webhook lifecycle against the Telegram API
#[derive(Clone)]
pub struct WebhookManager {
    bot: Bot,
    url: Url,
    attempts: u32,
    retry_delay: Duration,
    check_interval: Duration,
}

impl WebhookManager {
    pub fn new(bot: Bot, url: Url, attempts: u32, retry_delay: Duration, check_interval: Duration) -> Self {
        Self {
            bot,
            url,
            attempts: attempts.max(1),
            retry_delay,
            check_interval,
        }
    }

    /// Build from settings; fails when no webhook URL is configured
    pub fn from_settings(bot: Bot, settings: &Settings) -> Result<Self> {
        let url = settings
            .webhook_url()?
            .ok_or_else(|| KomekError::Config("webhook.base_url is required in webhook mode".to_string()))?;

        Ok(Self::new(
            bot,
            url,
            settings.webhook.register_attempts,
            Duration::from_secs(settings.webhook.retry_delay_seconds),
            Duration::from_secs(settings.webhook.check_interval_seconds),
        ))
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Call `setWebhook` until it succeeds or the attempts run out
    pub async fn register(&self) -> Result<()> {
        let mut last_error = String::new();

        for attempt in 1..=self.attempts {
            match self.bot.set_webhook(self.url.clone()).await {
                Ok(_) => {
                    info!(url = %self.url, attempt, "Webhook registered");
                    return Ok(());
                }
                Err(e) => {
                    warn!(url = %self.url, attempt, max_attempts = self.attempts, error = %e, "Webhook registration failed");
                    last_error = e.to_string();
                    if attempt < self.attempts {
                        tokio::time::sleep(self.retry_delay).await;
                    }
                }
            }
        }

        Err(KomekError::WebhookRegistration {
            attempts: self.attempts,
            reason: last_error,
        })
    }

    /// Re-register when Telegram reports no webhook or a different URL
    ///
    /// Returns whether a re-registration happened.
    pub async fn ensure_registered(&self) -> Result<bool> {
        let info = self.bot.get_webhook_info().await?;

        if info.url.as_ref() == Some(&self.url) {
            debug!(url = %self.url, pending = info.pending_update_count, "Webhook is current");
            return Ok(false);
        }

        warn!(
            expected = %self.url,
            actual = info.url.as_ref().map(Url::as_str).unwrap_or("none"),
            "Webhook missing or changed, registering again"
        );
        self.register().await?;
        Ok(true)
    }

    /// Check the registration every interval, forever
    pub async fn monitor(&self) {
        let mut ticker = tokio::time::interval(self.check_interval);
        // First tick completes immediately and the webhook was just registered
        ticker.tick().await;

        loop {
            ticker.tick().await;
            if let Err(e) = self.ensure_registered().await {
                log_api_error("getWebhookInfo", &e.to_string(), Some("webhook monitor"));
            }
        }
    }

    pub async fn delete(&self) -> Result<()> {
        match self.bot.delete_webhook().await {
            Ok(_) => {
                info!("Webhook deleted");
                Ok(())
            }
            Err(e) => {
                error!(error = %e, "Failed to delete webhook");
                Err(e.into())
            }
        }
    }
}
