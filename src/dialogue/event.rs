//! Events consumed by the dialogue state machine

/// Where a "back" affordance leads
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BackTarget {
    /// Abandon everything and show the main menu
    MainMenu,
    /// Return from an FAQ answer to the category list
    FaqMenu,
    /// Undo the last form step
    PreviousStep,
}

/// Typed inbound events, produced by the normalizer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    StartCommand,
    ResetCommand,
    MenuCommand,
    SelectFaqMenu,
    /// Raw callback key; may name no known category
    SelectFaqCategory(String),
    SelectLeadForm,
    /// Phone number of a shared contact, as sent by the platform
    ContactShared(String),
    TextInput(String),
    BackStep(BackTarget),
    Unrecognized,
}

impl Event {
    /// Short name for structured logs; never includes user text
    pub fn kind(&self) -> &'static str {
        match self {
            Event::StartCommand => "start_command",
            Event::ResetCommand => "reset_command",
            Event::MenuCommand => "menu_command",
            Event::SelectFaqMenu => "select_faq_menu",
            Event::SelectFaqCategory(_) => "select_faq_category",
            Event::SelectLeadForm => "select_lead_form",
            Event::ContactShared(_) => "contact_shared",
            Event::TextInput(_) => "text_input",
            Event::BackStep(_) => "back_step",
            Event::Unrecognized => "unrecognized",
        }
    }
}
