//! Tarmac Supervisor
//!
//! Stateful orchestration service for the incident-report workflow.
//!
//! Architecture:
//! - Config: collaborator endpoints and timeouts from the environment
//! - Engine: the three-stage report workflow (detect, form, submit)
//! - Session: per-user conversational history and the chat responder
//! - API: the HTTP boundary (/chat, /supervisor, /health)

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tarmac_client::{ChatModelClient, DetectionClient, FormsClient, SubmissionClient};

pub mod api;
pub mod config;
pub mod engine;
pub mod session;

use crate::api::AppState;
use crate::config::Config;
use crate::engine::Workflow;
use crate::session::{Responder, SessionStore};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tarmac_supervisor=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Tarmac Supervisor...");

    // Load configuration; a missing collaborator endpoint is fatal here,
    // never a per-request error
    let config = Config::from_env().expect("Failed to load configuration");
    config.validate().expect("Invalid configuration");

    tracing::info!(
        "Collaborators: detection={}, forms={}, submission={}, chat={}",
        config.detection_url,
        config.forms_url,
        config.submission_url,
        config.chat_model_url
    );

    // One HTTP client shared by all collaborator calls, with a bounded
    // per-call timeout
    let http = reqwest::Client::builder()
        .timeout(config.collaborator_timeout)
        .build()
        .expect("Failed to build HTTP client");

    let workflow = Arc::new(Workflow::new(
        Arc::new(DetectionClient::with_client(
            config.detection_url.clone(),
            http.clone(),
        )),
        Arc::new(FormsClient::with_client(
            config.forms_url.clone(),
            http.clone(),
        )),
        Arc::new(SubmissionClient::with_client(
            config.submission_url.clone(),
            http.clone(),
        )),
    ));

    let store = Arc::new(match config.max_sessions {
        Some(max) => SessionStore::with_capacity(max),
        None => SessionStore::new(),
    });

    let responder = Arc::new(Responder::new(
        Arc::new(ChatModelClient::with_client(
            config.chat_model_url.clone(),
            http,
        )),
        store,
    ));

    let app = api::create_router(AppState {
        workflow,
        responder,
    });

    tracing::info!("Listening on {}", config.bind_addr);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .await
        .expect("Failed to start server");
}
