//! KomekBot Telegram Bot
//!
//! Main application entry point

use std::sync::Arc;
use anyhow::Context;
use teloxide::prelude::*;
use teloxide::utils::command::BotCommands;
use tracing::{error, info, warn};

use KomekBot::{
    config::{Settings, TransportMode},
    handlers::BotCommand,
    services::WebhookManager,
    state::AppContext,
    transport,
    utils::logging,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env file is fine
    dotenv::dotenv().ok();

    // Load configuration
    let settings = Settings::new().context("failed to load configuration")?;
    settings.validate().context("invalid configuration")?;

    // Initialize logging; the guard flushes the log file on exit
    let _log_guard = logging::init_logging(&settings.logging)?;

    info!("Starting {}...", KomekBot::info());

    let bot = Bot::new(&settings.bot.token);
    let me = bot.get_me().await.context("failed to reach the Telegram API")?;
    let username = me.username.clone().unwrap_or_default();
    info!(username = %username, "Authorized as bot");

    if let Err(e) = bot.set_my_commands(BotCommand::bot_commands()).await {
        warn!(error = %e, "Failed to register the command list");
    }

    let mode = settings.bot.mode;
    let webhook = match mode {
        TransportMode::Webhook => Some(WebhookManager::from_settings(bot.clone(), &settings)?),
        TransportMode::Polling => None,
    };

    let app = Arc::new(AppContext::new(settings, bot, username));

    // Bind before registering so health checks answer during registration
    let listener = transport::bind(&app.settings).await?;

    match webhook {
        None => {
            let server = tokio::spawn(transport::serve(listener, app.clone(), shutdown_signal()));
            transport::run_polling(app).await?;
            if let Err(e) = server.await? {
                error!(error = %e, "HTTP server failed");
            }
        }
        Some(manager) => {
            transport::run_webhook(app, manager, listener, shutdown_signal()).await?;
        }
    }

    info!("KomekBot has been shut down.");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
