//! HTTP layer - axum routing, shared state, and the server entry point.
//!
//! This module wires the public pages, the JSON API, and the admin gate into
//! a single `Router`, applies permissive CORS headers uniformly (including the
//! OPTIONS pre-flight short-circuit), and owns the listener lifecycle with
//! graceful shutdown on ctrl-c or SIGTERM.

/// JSON API handlers (complaint CRUD, admin login)
pub mod api;
/// Signed admin session tokens
pub mod auth;
/// Server-rendered page handlers
pub mod pages;

use crate::config::AppConfig;
use crate::errors::Result;
use axum::{
    Router,
    http::StatusCode,
    routing::{get, post, put},
};
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::cors::{Any, CorsLayer};
use tracing::{error, info};

/// Shared data available to all request handlers.
///
/// Axum clones this per request; both fields are cheap handles, and all
/// mutable state lives behind the database connection.
#[derive(Clone)]
pub struct AppState {
    /// Database connection for all complaint operations
    pub db: DatabaseConnection,
    /// Immutable application configuration (credentials, category catalog)
    pub config: Arc<AppConfig>,
}

/// Builds the complete application router over the given state.
///
/// Unmatched paths fall through to a plain-text 404; the CORS layer answers
/// pre-flight requests with an empty body and stamps permissive cross-origin
/// headers onto every response, API and pages alike.
#[must_use]
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(pages::intake))
        .route("/index.html", get(pages::intake))
        .route("/submit", get(pages::submit))
        .route("/success", get(pages::success))
        .route("/admin", get(pages::admin))
        .route(
            "/api/complaints",
            post(api::create_complaint).get(api::list_complaints),
        )
        .route(
            "/api/complaints/:id",
            put(api::update_complaint_status).delete(api::delete_complaint),
        )
        .route("/api/admin/login", post(api::login))
        .fallback(not_found)
        .layer(cors)
        .with_state(state)
}

/// Binds the configured address and serves requests until shutdown.
///
/// # Errors
/// Returns an error if the listener cannot bind or the server fails while
/// running.
pub async fn serve(state: AppState) -> Result<()> {
    let bind_addr = state.config.bind_addr.clone();
    let app = router(state);

    let listener = TcpListener::bind(&bind_addr).await?;
    info!("Listening on http://{bind_addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down cleanly.");
    Ok(())
}

/// Plain-text response for every unmatched (path, method) pair.
async fn not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "页面未找到")
}

/// Resolves when the process receives ctrl-c or, on unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        match signal::ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, shutting down"),
            Err(e) => {
                error!("Failed to install Ctrl+C handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                error!("Failed to install signal handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
}
