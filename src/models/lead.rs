//! Lead record forwarded to the administrator

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use crate::ui::texts;
use crate::utils::helpers::{escape_html, whatsapp_link};

/// A completed consultation request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lead {
    pub id: Uuid,
    pub user_id: u64,
    pub name: String,
    /// Phone exactly as the client gave it
    pub phone: String,
    pub question: String,
    pub received_at: DateTime<Utc>,
}

impl Lead {
    /// Assemble a lead, substituting a placeholder for any missing field
    pub fn new(user_id: u64, name: Option<&str>, phone: Option<&str>, question: &str) -> Self {
        let or_placeholder = |value: Option<&str>| {
            value
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .unwrap_or(texts::NOT_PROVIDED)
                .to_string()
        };

        Self {
            id: Uuid::new_v4(),
            user_id,
            name: or_placeholder(name),
            phone: or_placeholder(phone),
            question: question.trim().to_string(),
            received_at: Utc::now(),
        }
    }

    /// WhatsApp deep link built from the digits of the phone
    pub fn whatsapp_link(&self) -> Option<String> {
        whatsapp_link(&self.phone)
    }

    /// Notification text for the administrator (HTML parse mode)
    pub fn to_notification_text(&self) -> String {
        let link = self
            .whatsapp_link()
            .unwrap_or_else(|| texts::NOT_PROVIDED.to_string());

        format!(
            "{}\n\n{} {}\n{} {}\n{} {}\n{} {}",
            texts::LEAD_HEADER,
            texts::LEAD_NAME,
            escape_html(&self.name),
            texts::LEAD_PHONE,
            escape_html(&self.phone),
            texts::LEAD_QUESTION,
            escape_html(&self.question),
            texts::LEAD_WHATSAPP,
            link,
        )
    }
}
