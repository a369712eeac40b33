//! Middleware module
//! 
//! Cross-cutting processing applied to every update before it is handled

pub mod logging;

pub use logging::log_update;
