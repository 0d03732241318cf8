//! # demochat-server
//!
//! HTTP API for the demochat assistant.

pub mod error;
pub mod handlers;

use std::sync::Arc;

use axum::routing::post;
use axum::Router;
use demochat_assistant::Assistant;
use demochat_core::{AppConfig, AppError, AppResult};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::handlers::chat;

/// Path of the chat endpoint.
pub const CHAT_ROUTE: &str = "/api/chat";

/// Shared application state passed to all handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The stateless assistant answering every request.
    pub assistant: Arc<Assistant>,
}

impl AppState {
    pub fn new(assistant: Assistant) -> Self {
        Self {
            assistant: Arc::new(assistant),
        }
    }
}

/// Builds the Axum router with all routes and shared state.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(CHAT_ROUTE, post(chat::chat_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind `config.bind_addr` and serve until Ctrl-C.
pub async fn serve(config: &AppConfig, state: AppState) -> AppResult<()> {
    let addr = config.socket_addr()?;

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Server(format!("Failed to bind {}: {}", addr, e)))?;
    let local_addr = listener.local_addr()?;

    info!(addr = %local_addr, "Chat API listening");

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::Server(e.to_string()))?;

    info!("Chat API stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => {
            warn!("Failed to listen for shutdown signal: {e}");
            std::future::pending::<()>().await;
        }
    }
}
