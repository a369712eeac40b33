//! Pure state transition function

use super::{BackTarget, Command, Event, Keyboard, LeadDraft};
use crate::models::FaqCategory;
use crate::state::{CollectedFields, ConversationState, Stage};
use crate::ui::texts;

/// Result of a state transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionResult {
    pub new_state: ConversationState,
    pub commands: Vec<Command>,
}

impl TransitionResult {
    pub fn new(state: ConversationState) -> Self {
        Self {
            new_state: state,
            commands: vec![],
        }
    }

    pub fn with_command(mut self, command: Command) -> Self {
        self.commands.push(command);
        self
    }

    fn reply(self, text: impl Into<String>, keyboard: Keyboard) -> Self {
        self.with_command(Command::reply(text, keyboard))
    }
}

/// Pure transition function
///
/// Every transition yields at least one reply, so the client always gets
/// feedback.
pub fn transition(state: &ConversationState, event: &Event) -> TransitionResult {
    match (state.stage, event) {
        // Commands valid from any stage
        (_, Event::StartCommand) => {
            TransitionResult::new(ConversationState::idle()).reply(texts::WELCOME, Keyboard::MainMenu)
        }
        (_, Event::ResetCommand | Event::MenuCommand | Event::BackStep(BackTarget::MainMenu)) => main_menu(),

        // FAQ browsing
        (Stage::Idle, Event::SelectFaqMenu | Event::BackStep(BackTarget::FaqMenu)) => {
            TransitionResult::new(ConversationState::idle()).reply(texts::FAQ_MENU, Keyboard::FaqCategories)
        }
        (Stage::Idle, Event::SelectFaqCategory(key)) => match FaqCategory::from_key(key) {
            Some(category) => {
                TransitionResult::new(ConversationState::idle()).reply(category.text(), Keyboard::FaqAnswer)
            }
            None => TransitionResult::new(ConversationState::idle()).reply(texts::FAQ_FALLBACK, Keyboard::FaqCategories),
        },

        // Lead form
        (Stage::Idle, Event::SelectLeadForm) => prompt(ConversationState::awaiting_name()),
        (Stage::Idle, Event::BackStep(BackTarget::PreviousStep)) => main_menu(),

        (Stage::AwaitingName, Event::TextInput(text)) => match non_blank(text) {
            Some(name) => prompt(ConversationState::awaiting_phone(name)),
            None => prompt(state.clone()),
        },
        (Stage::AwaitingName, Event::BackStep(BackTarget::PreviousStep)) => main_menu(),

        (Stage::AwaitingPhone, Event::TextInput(text)) if text.trim() == texts::MANUAL_PHONE_BUTTON => {
            TransitionResult::new(state.clone()).reply(texts::MANUAL_PHONE_PROMPT, Keyboard::ManualPhoneEntry)
        }
        (Stage::AwaitingPhone, Event::TextInput(phone) | Event::ContactShared(phone)) => match non_blank(phone) {
            Some(phone) => prompt(ConversationState {
                stage: Stage::AwaitingQuestion,
                fields: CollectedFields {
                    name: state.fields.name.clone(),
                    phone: Some(phone),
                },
            }),
            None => prompt(state.clone()),
        },
        (Stage::AwaitingPhone, Event::BackStep(BackTarget::PreviousStep)) => prompt(ConversationState::awaiting_name()),

        (Stage::AwaitingQuestion, Event::TextInput(text)) => match non_blank(text) {
            Some(question) => complete_form(state, question),
            None => prompt(state.clone()),
        },
        (Stage::AwaitingQuestion, Event::BackStep(BackTarget::PreviousStep)) => prompt(ConversationState {
            stage: Stage::AwaitingPhone,
            fields: CollectedFields {
                name: state.fields.name.clone(),
                phone: None,
            },
        }),

        // Anything else leaves the state unchanged
        (Stage::Idle, _) => TransitionResult::new(state.clone()).reply(texts::UNRECOGNIZED, Keyboard::MainMenu),
        (stage, _) => {
            let (prompt_text, keyboard) = stage_prompt(stage);
            TransitionResult::new(state.clone()).reply(
                format!("{}\n\n{}", texts::MID_FORM_REMINDER, prompt_text),
                keyboard,
            )
        }
    }
}

fn main_menu() -> TransitionResult {
    TransitionResult::new(ConversationState::idle()).reply(texts::MAIN_MENU, Keyboard::MainMenu)
}

/// Enter (or stay in) a state and show its prompt
fn prompt(state: ConversationState) -> TransitionResult {
    let (text, keyboard) = stage_prompt(state.stage);
    TransitionResult::new(state).reply(text, keyboard)
}

fn stage_prompt(stage: Stage) -> (&'static str, Keyboard) {
    match stage {
        Stage::Idle => (texts::MAIN_MENU, Keyboard::MainMenu),
        Stage::AwaitingName => (texts::NAME_PROMPT, Keyboard::NameEntry),
        Stage::AwaitingPhone => (texts::PHONE_PROMPT, Keyboard::PhoneEntry),
        Stage::AwaitingQuestion => (texts::QUESTION_PROMPT, Keyboard::QuestionEntry),
    }
}

/// Final form step: the new state is idle no matter how the notification goes
fn complete_form(state: &ConversationState, question: String) -> TransitionResult {
    let draft = LeadDraft {
        name: state.fields.name.clone(),
        phone: state.fields.phone.clone(),
        question,
    };

    TransitionResult::new(ConversationState::idle())
        .with_command(Command::NotifyAdmin(draft))
        .reply(texts::CONFIRMATION, Keyboard::MainMenu)
}

fn non_blank(text: &str) -> Option<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
