//! API Module
//!
//! HTTP boundary for the supervisor: request validation, initial state
//! construction, and serialization of terminal workflow state.

pub mod chat;
pub mod error;
pub mod health;
pub mod supervisor;

use std::sync::Arc;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::engine::Workflow;
use crate::session::Responder;

/// Maximum accepted request body size; image uploads are the large case.
const MAX_BODY_BYTES: usize = 16 * 1024 * 1024;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub workflow: Arc<Workflow>,
    pub responder: Arc<Responder>,
}

/// Create the main API router with all endpoints
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Conversational entry point
        .route("/chat", post(chat::chat))
        // Full report workflow
        .route("/supervisor", post(supervisor::run_report))
        // Add state and middleware
        .with_state(state)
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
