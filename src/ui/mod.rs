//! User interface module
//!
//! Static message texts, button labels and keyboard rendering.

pub mod keyboards;
pub mod texts;

pub use keyboards::render_keyboard;
