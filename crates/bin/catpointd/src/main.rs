//! # catpointd — catpoint daemon
//!
//! Composition root that wires all adapters together and starts the server.
//!
//! ## Responsibilities
//! - Parse configuration (config file, env vars)
//! - Initialize tracing
//! - Open the snapshot repository and build the image classifier
//! - Construct the security service and register the event bus on it
//! - Build the axum router and serve it
//! - Handle graceful shutdown (Ctrl-C)
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use catpoint_adapter_http_axum::router;
use catpoint_adapter_http_axum::state::AppState;
use catpoint_adapter_image_fake::FakeImageClassifier;
use catpoint_adapter_storage_json::JsonFileSecurityRepository;
use catpoint_app::event_bus::StatusEventBus;
use catpoint_app::services::security_service::SecurityService;

use crate::config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .init();

    // Repository
    let repo = match config.storage_path() {
        Some(path) => JsonFileSecurityRepository::open(path)?,
        None => {
            tracing::warn!("no storage path configured, state will not survive restarts");
            JsonFileSecurityRepository::in_memory()
        }
    };

    // Classifier
    let classifier = FakeImageClassifier::new(&config.classifier);
    tracing::info!(mode = ?classifier.mode(), "image classifier ready");

    // Service + event bus
    let event_bus = Arc::new(StatusEventBus::new(256));
    let state = AppState::new(SecurityService::new(repo, classifier), event_bus);
    let app = router::build(state);

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(%bind_addr, "catpointd listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("catpointd stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}
