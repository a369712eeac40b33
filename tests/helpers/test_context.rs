//! Test context for unified test setup
//!
//! Builds an application context whose bot talks to the mock Telegram server.

#![allow(dead_code)]

use std::sync::Arc;
use teloxide::Bot;
use url::Url;
use KomekBot::config::{Settings, TransportMode};
use KomekBot::state::AppContext;

use super::telegram_mock::{TelegramMockServer, TEST_BOT_TOKEN};
use super::test_data::ADMIN_CHAT_ID;

pub const TEST_BASE_URL: &str = "https://bot.example.com";

/// Unified test context that manages all test components
pub struct TestContext {
    pub telegram_mock: TelegramMockServer,
    pub app: Arc<AppContext>,
}

impl TestContext {
    /// Polling-mode context with default mocks mounted
    pub async fn new() -> Self {
        Self::with_mode(TransportMode::Polling).await
    }

    pub async fn with_mode(mode: TransportMode) -> Self {
        let telegram_mock = TelegramMockServer::new().await;
        let app = Arc::new(AppContext::new(test_settings(mode), test_bot(&telegram_mock), "komek_bot"));
        Self { telegram_mock, app }
    }

    pub async fn with_default_mocks(mode: TransportMode) -> Self {
        let context = Self::with_mode(mode).await;
        context.telegram_mock.setup_default_mocks().await;
        context
    }
}

pub fn test_settings(mode: TransportMode) -> Settings {
    let mut settings = Settings::default();
    settings.bot.token = TEST_BOT_TOKEN.to_string();
    settings.bot.admin_chat_id = ADMIN_CHAT_ID;
    settings.bot.mode = mode;
    settings.webhook.base_url = Some(TEST_BASE_URL.to_string());
    settings.webhook.register_attempts = 3;
    settings.webhook.retry_delay_seconds = 0;
    settings
}

pub fn test_bot(mock: &TelegramMockServer) -> Bot {
    let api_url = Url::parse(&mock.uri()).expect("mock server uri should parse");
    Bot::new(TEST_BOT_TOKEN).set_api_url(api_url)
}
