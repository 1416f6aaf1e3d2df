//! HTTP API
//!
//! - GET  /              - Service banner
//! - GET  /health        - Liveness and version
//! - POST /extract-pdf   - PDF upload (alias: /extract)
//! - POST /extract-doc   - .doc / .docx upload
//! - POST /extract-txt   - .txt upload
//!
//! Extraction routes require the `X-API-KEY` header.

pub mod auth;
pub mod handlers;
pub mod upload;

use crate::config::{Config, API_KEY_ENV};
use crate::models::DocumentFormat;
use anyhow::{Context, Result};
use axum::extract::DefaultBodyLimit;
use axum::middleware;
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
}

/// Build the application router for a configuration
pub fn router(config: Config) -> Router {
    let max_upload_bytes = config.server.max_upload_bytes;
    let state = AppState {
        config: Arc::new(config),
    };

    let mut extract = Router::new();
    if state.config.serves(DocumentFormat::Pdf) {
        extract = extract
            .route("/extract-pdf", post(handlers::extract_pdf))
            .route("/extract", post(handlers::extract_pdf));
    }
    if state.config.serves(DocumentFormat::Docx) {
        extract = extract.route("/extract-doc", post(handlers::extract_doc));
    }
    if state.config.serves(DocumentFormat::Txt) {
        extract = extract.route("/extract-txt", post(handlers::extract_txt));
    }
    if !state.config.formats.is_empty() {
        extract = extract.route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth::require_api_key,
        ));
    }

    Router::new()
        .route("/", get(handlers::index))
        .route("/health", get(handlers::health))
        .merge(extract)
        .fallback(handlers::not_found)
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Bind and serve until Ctrl+C
pub async fn serve(config: Config) -> Result<()> {
    let addr = config.socket_addr()?;

    if config.api_key().is_none() {
        warn!(
            "no API key configured (set {}); every extraction request will be rejected",
            API_KEY_ENV
        );
    }
    let formats: Vec<String> = config.formats.iter().map(|f| f.to_string()).collect();
    info!(formats = %formats.join(","), max_upload_bytes = config.server.max_upload_bytes, "serving formats");

    let app = router(config);

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    info!(%addr, "listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}
