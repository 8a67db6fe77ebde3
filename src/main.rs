//! Festival Countdown Server - Binary Entry Point

use std::sync::Arc;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use festival_countdown::api::{create_router, AppState};
use festival_countdown::config::AppConfig;
use festival_countdown::LifecycleController;

type MainResult<T> = Result<T, Box<dyn std::error::Error + Send + Sync>>;

#[tokio::main]
async fn main() -> MainResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("festival_countdown=info,tower_http=info")),
        )
        .init();

    let config = AppConfig::from_env();
    let backend = config.open_backend()?;
    let controller = LifecycleController::with_policy(backend, config.validation_policy());

    // Fail fast on an unreadable document instead of on the first request
    let store = controller.snapshot()?;
    info!(
        storage = %controller.backend().describe(),
        pending = store.pending.len(),
        approved = store.approved.len(),
        "event store ready"
    );
    if !config.require_future_dates {
        warn!("future-date check disabled, past events can be submitted");
    }

    let app = create_router(Arc::new(AppState::new(controller)));

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("🎉 Festival Countdown Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("🛑 Shutdown");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
}
