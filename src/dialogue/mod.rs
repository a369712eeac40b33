//! Dialogue state machine
//!
//! Pure transitions: the current conversation state and one inbound event
//! produce the next state plus the commands to execute. No I/O happens here.

mod command;
pub mod event;
pub(crate) mod transition;

#[cfg(test)]
mod proptests;

pub use command::{Command, Keyboard, LeadDraft};
pub use event::{BackTarget, Event};
pub use transition::{transition, TransitionResult};
