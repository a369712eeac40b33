//! Webhook transport lifecycle
//!
//! The HTTP server is already accepting connections while `setWebhook` is
//! retried, so health checks pass during registration. A registration that
//! runs out of attempts stops the server and is returned as the error.

use std::future::Future;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tracing::{debug, info};
use crate::services::WebhookManager;
use crate::state::AppContext;
use crate::utils::errors::Result;
use super::server::serve;

/// Serve, register, monitor, and delete the webhook once the server stops
pub async fn run_webhook<F>(
    app: Arc<AppContext>,
    manager: WebhookManager,
    listener: TcpListener,
    shutdown: F,
) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let (stop_tx, stop_rx) = oneshot::channel::<()>();
    let stop = async move {
        tokio::select! {
            _ = shutdown => {}
            Ok(()) = stop_rx => {}
        }
    };

    let server = serve(listener, app, stop);
    tokio::pin!(server);

    tokio::select! {
        served = &mut server => return served,
        registered = manager.register() => {
            if let Err(e) = registered {
                let _ = stop_tx.send(());
                if let Err(server_err) = server.await {
                    debug!(error = %server_err, "HTTP server stopped with an error");
                }
                return Err(e);
            }
        }
    }

    info!(url = %manager.url(), "Starting bot with webhook mode...");

    let served = tokio::select! {
        served = &mut server => served,
        () = manager.monitor() => Ok(()),
    };

    if let Err(e) = manager.delete().await {
        debug!(error = %e, "Webhook left registered at shutdown");
    }

    served
}
