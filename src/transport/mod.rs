//! Update transports
//!
//! Long polling through the teloxide dispatcher, or webhook delivery through
//! the axum router. Both hand every update to [`crate::handlers::handle_update`].

pub mod dedup;
pub mod polling;
pub mod server;
pub mod webhook;

pub use dedup::DeliveryLog;
pub use polling::run_polling;
pub use server::{bind, create_router, serve, HEALTH_TEXT};
pub use webhook::run_webhook;
