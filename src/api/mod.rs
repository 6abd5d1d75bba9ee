//! API layer - HTTP routes, handlers and server startup
//!
//! This module exposes the habit CRUD endpoints over axum. Handlers share a
//! single [`AppState`] holding the repository; nothing else is shared between
//! requests.

/// Error to response conversion
pub mod error;
/// Endpoint handlers
pub mod handlers;

pub use error::MessageBody;
pub use handlers::DeleteResponse;

use crate::{
    config::ServerConfig,
    core::HabitRepository,
    errors::Result,
};
use axum::{
    Router,
    routing::{get, put},
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, instrument};

/// Shared data available to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Habit persistence
    pub habits: Arc<dyn HabitRepository>,
}

impl AppState {
    /// Creates state around any repository implementation.
    #[must_use]
    pub fn new(habits: Arc<dyn HabitRepository>) -> Self {
        Self { habits }
    }
}

/// Builds the application router with permissive CORS on every route.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::service_alive))
        .route(
            "/api/habits",
            get(handlers::list_habits).post(handlers::create_habit),
        )
        .route(
            "/api/habits/:id",
            put(handlers::update_habit).delete(handlers::delete_habit),
        )
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Binds the configured address and serves until Ctrl-C.
#[instrument(skip(state))]
pub async fn serve(config: &ServerConfig, state: AppState) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(config.socket_addr()).await?;
    info!("Server is running on {}", listener.local_addr()?);

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
