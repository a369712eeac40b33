//! HTTP server
//!
//! Health endpoints in every mode, plus the webhook endpoint when updates
//! arrive by webhook.

use std::future::Future;
use std::sync::Arc;
use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use crate::config::{Settings, TransportMode};
use crate::handlers::process_inbound;
use crate::middleware::log_update;
use crate::state::AppContext;
use crate::utils::errors::Result;

/// Body of the health endpoints
pub const HEALTH_TEXT: &str = "Bot is running!";

pub fn create_router(app: Arc<AppContext>) -> Router {
    let mut router = Router::new()
        .route("/", get(health))
        .route("/ping", get(health));

    if app.settings.bot.mode == TransportMode::Webhook {
        router = router.route(&app.settings.webhook.path, post(receive_update));
    }

    router.layer(TraceLayer::new_for_http()).with_state(app)
}

/// Bind the configured listen address
pub async fn bind(settings: &Settings) -> Result<TcpListener> {
    let addr = settings.listen_addr()?;
    let listener = TcpListener::bind(addr).await?;
    info!("HTTP server listening on {}", listener.local_addr()?);
    Ok(listener)
}

/// Serve on `listener` until `shutdown` resolves
pub async fn serve<F>(listener: TcpListener, app: Arc<AppContext>, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, create_router(app))
        .with_graceful_shutdown(shutdown)
        .await?;

    info!("HTTP server stopped");
    Ok(())
}

async fn health() -> &'static str {
    HEALTH_TEXT
}

/// One update per request; 400 only when the body is not a usable update
async fn receive_update(State(app): State<Arc<AppContext>>, body: Bytes) -> StatusCode {
    let (update, inbound) = match app.normalizer.normalize_body(&body) {
        Ok(parsed) => parsed,
        Err(malformed) => {
            warn!(error = %malformed, "Rejecting webhook request");
            return StatusCode::BAD_REQUEST;
        }
    };

    log_update(&update);
    process_inbound(&app, &update, inbound).await;
    StatusCode::OK
}
