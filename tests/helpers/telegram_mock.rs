//! Mock Telegram API Server for testing
//!
//! This module provides a mock HTTP server that simulates the Telegram Bot API
//! for testing purposes. It uses wiremock to create configurable mock responses.

#![allow(dead_code)]

use serde_json::{json, Value};
use wiremock::{
    matchers::{body_partial_json, method, path},
    Mock, MockServer, ResponseTemplate,
};

pub const TEST_BOT_TOKEN: &str = "12345:test_token";

/// Mock Telegram API server for testing
pub struct TelegramMockServer {
    pub server: MockServer,
}

/// A `sendMessage` call as the mock received it
#[derive(Debug, Clone)]
pub struct SentMessage {
    pub chat_id: i64,
    pub text: String,
    pub body: Value,
}

/// Path teloxide posts an API method to; it capitalizes the method name
fn endpoint(name: &str) -> String {
    let mut chars = name.chars();
    let method: String = match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    };
    format!("/bot{}/{}", TEST_BOT_TOKEN, method)
}

fn ok(result: Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({ "ok": true, "result": result }))
}

fn api_error(code: u16, description: &str) -> ResponseTemplate {
    ResponseTemplate::new(code).set_body_json(json!({
        "ok": false,
        "error_code": code,
        "description": description,
    }))
}

fn sent_message_result(chat_id: i64) -> Value {
    json!({
        "message_id": 123,
        "from": {
            "id": 12345,
            "is_bot": true,
            "first_name": "KomekBot",
            "username": "komek_bot"
        },
        "chat": {
            "id": chat_id,
            "type": "private",
            "first_name": "Test"
        },
        "date": 1640995200,
        "text": "Test message"
    })
}

impl TelegramMockServer {
    /// Create a new mock Telegram API server
    pub async fn new() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    /// Mock server with every endpoint used by the bot answering successfully
    pub async fn with_default_mocks() -> Self {
        let mock = Self::new().await;
        mock.setup_default_mocks().await;
        mock
    }

    pub fn uri(&self) -> String {
        self.server.uri()
    }

    /// Setup mock for sendMessage endpoint
    pub async fn mock_send_message(&self) {
        Mock::given(method("POST"))
            .and(path(endpoint("sendMessage")))
            .respond_with(ok(sent_message_result(42)))
            .mount(&self.server)
            .await;
    }

    /// Make sendMessage fail for one chat only
    pub async fn fail_send_message_to(&self, chat_id: i64) {
        Mock::given(method("POST"))
            .and(path(endpoint("sendMessage")))
            .and(body_partial_json(json!({ "chat_id": chat_id })))
            .respond_with(api_error(400, "Bad Request: chat not found"))
            .with_priority(1)
            .mount(&self.server)
            .await;
    }

    /// Make every sendMessage fail
    pub async fn fail_all_send_message(&self) {
        Mock::given(method("POST"))
            .and(path(endpoint("sendMessage")))
            .respond_with(api_error(400, "Bad Request: chat not found"))
            .with_priority(1)
            .mount(&self.server)
            .await;
    }

    pub async fn mock_answer_callback_query(&self) {
        Mock::given(method("POST"))
            .and(path(endpoint("answerCallbackQuery")))
            .respond_with(ok(json!(true)))
            .mount(&self.server)
            .await;
    }

    pub async fn mock_set_webhook(&self) {
        Mock::given(method("POST"))
            .and(path(endpoint("setWebhook")))
            .respond_with(ok(json!(true)))
            .mount(&self.server)
            .await;
    }

    /// Make the next `times` setWebhook calls fail
    pub async fn fail_set_webhook(&self, times: u64) {
        Mock::given(method("POST"))
            .and(path(endpoint("setWebhook")))
            .respond_with(api_error(500, "Internal Server Error"))
            .up_to_n_times(times)
            .with_priority(1)
            .mount(&self.server)
            .await;
    }

    pub async fn mock_delete_webhook(&self) {
        Mock::given(method("POST"))
            .and(path(endpoint("deleteWebhook")))
            .respond_with(ok(json!(true)))
            .mount(&self.server)
            .await;
    }

    /// getWebhookInfo reporting `url` (empty string for no webhook)
    pub async fn mock_webhook_info(&self, url: &str) {
        Mock::given(method("POST"))
            .and(path(endpoint("getWebhookInfo")))
            .respond_with(ok(json!({
                "url": url,
                "has_custom_certificate": false,
                "pending_update_count": 0
            })))
            .mount(&self.server)
            .await;
    }

    /// Setup all default mocks
    pub async fn setup_default_mocks(&self) {
        self.mock_send_message().await;
        self.mock_answer_callback_query().await;
        self.mock_set_webhook().await;
        self.mock_delete_webhook().await;
    }

    /// Number of calls made to an API method
    pub async fn calls_to(&self, api_method: &str) -> usize {
        let target = endpoint(api_method);
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .iter()
            .filter(|req| req.url.path() == target)
            .count()
    }

    /// Every sendMessage call, in the order received
    pub async fn sent_messages(&self) -> Vec<SentMessage> {
        let target = endpoint("sendMessage");
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .iter()
            .filter(|req| req.url.path() == target)
            .filter_map(|req| req.body_json::<Value>().ok())
            .map(|body| SentMessage {
                chat_id: body["chat_id"].as_i64().unwrap_or_default(),
                text: body["text"].as_str().unwrap_or_default().to_string(),
                body,
            })
            .collect()
    }

    /// sendMessage calls addressed to one chat
    pub async fn sent_to(&self, chat_id: i64) -> Vec<SentMessage> {
        self.sent_messages()
            .await
            .into_iter()
            .filter(|message| message.chat_id == chat_id)
            .collect()
    }
}
