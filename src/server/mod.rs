//! HTTP surface: form page, form/JSON classification endpoints, health.

mod error;
mod handlers;
mod page;

pub use error::{ApiError, ApiResult};
pub use page::render_index;

use crate::config::ServerConfig;
use crate::verdict::UrlAnalyzer;
use axum::{
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;
use std::sync::Arc;
use tracing::info;

/// Shared, read-only request state
pub struct AppState {
    pub analyzer: UrlAnalyzer,
}

impl AppState {
    pub fn new(analyzer: UrlAnalyzer) -> Arc<Self> {
        Arc::new(Self { analyzer })
    }
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::index_handler))
        .route("/predict", post(handlers::predict_handler))
        .route("/api/classify", post(handlers::classify_handler))
        .route("/health", get(handlers::health_handler))
        .with_state(state)
}

/// Bind the configured listener; `host` may be an IP literal or a resolvable name.
pub async fn bind(config: &ServerConfig) -> std::io::Result<TcpListener> {
    let listener = TcpListener::bind((config.host.as_str(), config.port)).await?;
    info!(addr = %listener.local_addr()?, "listening");
    Ok(listener)
}

/// Serve until Ctrl+C.
pub async fn serve(listener: TcpListener, state: Arc<AppState>) -> std::io::Result<()> {
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("shutdown signal received");
    }
}
