//! Helper functions and utilities
//! 
//! This module contains common helper functions used throughout the application.

/// Base of the WhatsApp click-to-chat deep link
pub const WHATSAPP_BASE_URL: &str = "https://wa.me/";

/// Keep only the ASCII digits of a phone number
///
/// `+7 (777) 123-45-67` becomes `77771234567`. Digit-only input is returned unchanged.
pub fn normalize_phone(phone: &str) -> String {
    phone.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Build the WhatsApp deep link for a phone number, `None` if it has no digits
pub fn whatsapp_link(phone: &str) -> Option<String> {
    let digits = normalize_phone(phone);
    if digits.is_empty() {
        None
    } else {
        Some(format!("{}{}", WHATSAPP_BASE_URL, digits))
    }
}

/// Escape text for Telegram HTML parse mode
pub fn escape_html(text: &str) -> String {
    teloxide::utils::html::escape(text)
}

/// Truncate text to a maximum number of characters with ellipsis
pub fn truncate_text(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let kept: String = text.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
