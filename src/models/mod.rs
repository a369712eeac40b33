//! Data models module
//!
//! This module contains the FAQ catalogue and the lead record.

pub mod faq;
pub mod lead;

pub use faq::FaqCategory;
pub use lead::Lead;
