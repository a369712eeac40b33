//! Commands produced by state transitions

/// Keyboard attached to a reply
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyboard {
    /// Leave whatever keyboard the client shows
    Keep,
    MainMenu,
    FaqCategories,
    /// Inline "back" under an FAQ answer
    FaqAnswer,
    NameEntry,
    PhoneEntry,
    ManualPhoneEntry,
    QuestionEntry,
}

/// Lead fields as collected; placeholders are applied when the lead is built
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeadDraft {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub question: String,
}

/// Commands to be executed after a state transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Send a message to the conversation (HTML parse mode)
    Reply { text: String, keyboard: Keyboard },

    /// Forward a completed lead to the administrator
    NotifyAdmin(LeadDraft),
}

impl Command {
    pub fn reply(text: impl Into<String>, keyboard: Keyboard) -> Self {
        Command::Reply {
            text: text.into(),
            keyboard,
        }
    }

    pub fn is_reply(&self) -> bool {
        matches!(self, Command::Reply { .. })
    }
}
