//! Keyboard rendering
//!
//! Maps the dialogue's abstract keyboards onto Telegram reply and inline markup.

use teloxide::types::{
    ButtonRequest, InlineKeyboardButton, InlineKeyboardMarkup, KeyboardButton, KeyboardMarkup, ReplyMarkup,
};
use crate::dialogue::Keyboard;
use crate::models::FaqCategory;
use super::texts;

/// Callback data of the inline buttons outside the FAQ catalogue
pub mod callback {
    pub const MENU_FAQ: &str = "menu:faq";
    pub const MENU_LEAD: &str = "menu:lead";
    pub const BACK_MAIN: &str = "back:main";
    pub const BACK_FAQ: &str = "back:faq";
    pub const BACK_STEP: &str = "back:step";
}

/// Number of FAQ buttons per row
const FAQ_ROW_WIDTH: usize = 2;

/// Render a keyboard, `None` when the client's current keyboard should stay
pub fn render_keyboard(keyboard: Keyboard) -> Option<ReplyMarkup> {
    match keyboard {
        Keyboard::Keep => None,
        Keyboard::MainMenu => Some(main_menu().into()),
        Keyboard::FaqCategories => Some(faq_categories().into()),
        Keyboard::FaqAnswer => Some(faq_answer().into()),
        Keyboard::NameEntry | Keyboard::ManualPhoneEntry | Keyboard::QuestionEntry => Some(back_only().into()),
        Keyboard::PhoneEntry => Some(phone_entry().into()),
    }
}

/// Persistent main menu
pub fn main_menu() -> KeyboardMarkup {
    KeyboardMarkup::new(vec![vec![
        KeyboardButton::new(texts::FAQ_BUTTON),
        KeyboardButton::new(texts::LEAD_FORM_BUTTON),
    ]])
    .resize_keyboard()
}

/// FAQ categories, two per row, with a way back to the main menu
pub fn faq_categories() -> InlineKeyboardMarkup {
    let mut rows: Vec<Vec<InlineKeyboardButton>> = FaqCategory::ALL
        .chunks(FAQ_ROW_WIDTH)
        .map(|chunk| {
            chunk
                .iter()
                .map(|category| InlineKeyboardButton::callback(category.label(), category.key()))
                .collect()
        })
        .collect();

    rows.push(vec![InlineKeyboardButton::callback(texts::MAIN_MENU_BUTTON, callback::BACK_MAIN)]);
    InlineKeyboardMarkup::new(rows)
}

/// Inline "back" under an FAQ answer
pub fn faq_answer() -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(vec![vec![InlineKeyboardButton::callback(
        texts::BACK_BUTTON,
        callback::BACK_FAQ,
    )]])
}

/// Phone step: share the account's contact, type it, or go back
pub fn phone_entry() -> KeyboardMarkup {
    KeyboardMarkup::new(vec![
        vec![KeyboardButton::new(texts::SHARE_CONTACT_BUTTON).request(ButtonRequest::Contact)],
        vec![KeyboardButton::new(texts::MANUAL_PHONE_BUTTON)],
        vec![KeyboardButton::new(texts::BACK_BUTTON), KeyboardButton::new(texts::MAIN_MENU_BUTTON)],
    ])
    .resize_keyboard()
    .one_time_keyboard()
}

/// Free-text steps only offer navigation
pub fn back_only() -> KeyboardMarkup {
    KeyboardMarkup::new(vec![vec![
        KeyboardButton::new(texts::BACK_BUTTON),
        KeyboardButton::new(texts::MAIN_MENU_BUTTON),
    ]])
    .resize_keyboard()
}
