//! Telegram update builders
//!
//! Updates are built in the Bot API wire format and deserialized, the same
//! way both transports receive them.

#![allow(dead_code)]

use serde_json::{json, Value};
use teloxide::types::Update;

pub const TEST_USER_ID: i64 = 42;
pub const SECOND_USER_ID: i64 = 43;
pub const ADMIN_CHAT_ID: i64 = 584791919;

fn user(user_id: i64) -> Value {
    json!({ "id": user_id, "is_bot": false, "first_name": "Aigerim", "language_code": "kk" })
}

fn message(user_id: i64, fields: Value) -> Value {
    let mut message = json!({
        "message_id": 1,
        "date": 1_700_000_000,
        "chat": { "id": user_id, "type": "private", "first_name": "Aigerim" },
        "from": user(user_id),
    });
    if let (Some(target), Some(extra)) = (message.as_object_mut(), fields.as_object()) {
        for (key, value) in extra {
            target.insert(key.clone(), value.clone());
        }
    }
    message
}

pub fn text_json(update_id: u32, user_id: i64, text: &str) -> Value {
    json!({ "update_id": update_id, "message": message(user_id, json!({ "text": text })) })
}

pub fn contact_json(update_id: u32, user_id: i64, phone: &str) -> Value {
    json!({
        "update_id": update_id,
        "message": message(user_id, json!({
            "contact": { "phone_number": phone, "first_name": "Aigerim", "user_id": user_id }
        })),
    })
}

pub fn callback_json(update_id: u32, user_id: i64, data: &str) -> Value {
    json!({
        "update_id": update_id,
        "callback_query": {
            "id": format!("cbq-{}", update_id),
            "from": user(user_id),
            "chat_instance": "chat-instance",
            "message": message(user_id, json!({ "text": "menu" })),
            "data": data,
        },
    })
}

pub fn edited_json(update_id: u32, user_id: i64, text: &str) -> Value {
    let mut edited = message(user_id, json!({ "text": text }));
    edited["edit_date"] = json!(1_700_000_100);
    json!({ "update_id": update_id, "edited_message": edited })
}

/// Parse from text, as the transports do
pub fn to_update(value: Value) -> Update {
    serde_json::from_str(&value.to_string()).expect("test update should deserialize")
}

pub fn text_update(update_id: u32, user_id: i64, text: &str) -> Update {
    to_update(text_json(update_id, user_id, text))
}

pub fn contact_update(update_id: u32, user_id: i64, phone: &str) -> Update {
    to_update(contact_json(update_id, user_id, phone))
}

pub fn callback_update(update_id: u32, user_id: i64, data: &str) -> Update {
    to_update(callback_json(update_id, user_id, data))
}
