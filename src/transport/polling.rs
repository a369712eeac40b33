//! Long polling transport

use std::sync::Arc;
use teloxide::{prelude::*, types::Update};
use tracing::info;
use crate::handlers::handle_update;
use crate::state::AppContext;
use crate::utils::errors::Result;

/// Poll for updates until Ctrl-C
///
/// Any registered webhook is removed first, Telegram refuses `getUpdates`
/// while one is set.
pub async fn run_polling(app: Arc<AppContext>) -> Result<()> {
    app.bot.delete_webhook().await?;
    info!("Starting bot with polling mode...");

    let handler = dptree::entry().endpoint(|update: Update, app: Arc<AppContext>| async move {
        handle_update(&app, update).await;
        respond(())
    });

    Dispatcher::builder(app.bot.clone(), handler)
        .dependencies(dptree::deps![app.clone()])
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    info!("Polling stopped");
    Ok(())
}
