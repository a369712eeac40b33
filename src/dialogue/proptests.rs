//! Property-based tests for the dialogue state machine
//!
//! These tests verify key invariants hold across all possible inputs.

use super::*;
use crate::models::FaqCategory;
use crate::state::{ConversationState, Stage};
use crate::ui::texts;
use proptest::prelude::*;

// ============================================================================
// Arbitrary Generators
// ============================================================================

fn arb_back_target() -> impl Strategy<Value = BackTarget> {
    prop_oneof![
        Just(BackTarget::MainMenu),
        Just(BackTarget::FaqMenu),
        Just(BackTarget::PreviousStep),
    ]
}

fn arb_faq_key() -> impl Strategy<Value = String> {
    prop_oneof![
        proptest::sample::select(FaqCategory::ALL.to_vec()).prop_map(|c| c.key().to_string()),
        "faq_[a-z]{0,10}",
    ]
}

fn arb_text() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-zA-Z +()0-9-]{0,30}",
        "\\PC{0,40}",
        Just(texts::MANUAL_PHONE_BUTTON.to_string()),
        Just("   ".to_string()),
    ]
}

fn arb_event() -> impl Strategy<Value = Event> {
    prop_oneof![
        Just(Event::StartCommand),
        Just(Event::ResetCommand),
        Just(Event::MenuCommand),
        Just(Event::SelectFaqMenu),
        arb_faq_key().prop_map(Event::SelectFaqCategory),
        Just(Event::SelectLeadForm),
        "\\+?[0-9]{5,15}".prop_map(Event::ContactShared),
        arb_text().prop_map(Event::TextInput),
        arb_back_target().prop_map(Event::BackStep),
        Just(Event::Unrecognized),
    ]
}

fn arb_state() -> impl Strategy<Value = ConversationState> {
    prop_oneof![
        Just(ConversationState::idle()),
        Just(ConversationState::awaiting_name()),
        "[a-zA-Z]{1,12}".prop_map(ConversationState::awaiting_phone),
        ("[a-zA-Z]{1,12}", "\\+?[0-9]{5,15}")
            .prop_map(|(name, phone)| ConversationState::awaiting_question(name, phone)),
    ]
}

fn form_completion() -> impl Strategy<Value = Vec<Event>> {
    (
        "[a-zA-Z]{1,12}",
        prop_oneof![
            "\\+?[0-9]{5,15}".prop_map(Event::ContactShared),
            "[0-9 +()-]{1,20}[0-9]".prop_map(Event::TextInput),
        ],
        "[a-zA-Z?]{1,40}",
    )
        .prop_map(|(name, phone, question)| {
            vec![
                Event::SelectLeadForm,
                Event::TextInput(name),
                phone,
                Event::TextInput(question),
            ]
        })
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn fields_always_match_stage(
        start in arb_state(),
        events in proptest::collection::vec(arb_event(), 0..40),
    ) {
        let mut state = start;
        for event in &events {
            state = transition(&state, event).new_state;
            prop_assert!(state.is_consistent(), "inconsistent after {:?}: {:?}", event, state);
        }
    }

    #[test]
    fn every_event_gets_a_reply(state in arb_state(), event in arb_event()) {
        let result = transition(&state, &event);
        prop_assert!(result.commands.iter().any(Command::is_reply));
    }

    #[test]
    fn start_and_reset_always_go_idle(
        state in arb_state(),
        event in prop_oneof![Just(Event::StartCommand), Just(Event::ResetCommand)],
    ) {
        let result = transition(&state, &event);
        prop_assert_eq!(result.new_state, ConversationState::idle());
    }

    #[test]
    fn completing_the_form_ends_idle_with_one_lead(events in form_completion()) {
        let mut state = ConversationState::idle();
        let mut leads = 0;
        for event in &events {
            let result = transition(&state, event);
            leads += result.commands.iter().filter(|c| matches!(c, Command::NotifyAdmin(_))).count();
            state = result.new_state;
        }
        prop_assert_eq!(state, ConversationState::idle());
        prop_assert_eq!(leads, 1);
    }

    #[test]
    fn leads_only_come_from_the_question_stage(state in arb_state(), event in arb_event()) {
        let result = transition(&state, &event);
        let notifies = result.commands.iter().any(|c| matches!(c, Command::NotifyAdmin(_)));
        if notifies {
            prop_assert_eq!(state.stage, Stage::AwaitingQuestion);
            prop_assert_eq!(result.new_state.stage, Stage::Idle);
        }
    }

    #[test]
    fn unknown_faq_keys_never_panic(key in "\\PC{0,64}") {
        let result = transition(&ConversationState::idle(), &Event::SelectFaqCategory(key));
        prop_assert_eq!(result.new_state, ConversationState::idle());
        prop_assert_eq!(result.commands.len(), 1);
    }
}
