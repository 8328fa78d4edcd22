//! # catpointd — catpoint daemon
//!
//! Composition root that wires all adapters together and starts the server.
//!
//! ## Responsibilities
//! - Parse configuration (config file, env vars)
//! - Initialize logging
//! - Initialize the `SQLite` connection pool and run migrations
//! - Pick the image classifier backend
//! - Construct the security service, injecting adapters via port traits
//! - Log status events published on the in-process bus
//! - Build the axum router, bind to a TCP port and serve
//! - Handle graceful shutdown (Ctrl-C)
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer; no domain logic belongs here.

mod classifier;
mod config;

use std::sync::Arc;

use tokio::sync::broadcast;
use tracing_subscriber::EnvFilter;

use catpoint_adapter_http_axum::state::AppState;
use catpoint_adapter_storage_sqlite_sqlx::SqliteSecurityRepository;
use catpoint_app::event_bus::InProcessEventBus;
use catpoint_app::services::security_service::SecurityService;
use catpoint_domain::event::{Event, EventKind};

use crate::classifier::Classifier;
use crate::config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .init();

    // Database
    let db = catpoint_adapter_storage_sqlite_sqlx::Config {
        database_url: config.database_url().to_string(),
    }
    .build()
    .await?;
    let repo = SqliteSecurityRepository::new(db.pool().clone());

    // Classifier
    let classifier = Classifier::from_config(&config.classifier)?;
    tracing::info!(kind = %config.classifier.kind, "image classifier ready");

    // Event bus
    let event_bus = Arc::new(InProcessEventBus::new(256));
    tokio::spawn(log_events(event_bus.subscribe()));

    // Services
    let security = SecurityService::new(repo, classifier, Arc::clone(&event_bus));

    // HTTP
    let app = catpoint_adapter_http_axum::router::build(AppState::new(security));

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(addr = %bind_addr, "catpointd listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("catpointd stopped");
    Ok(())
}

async fn log_events(mut rx: broadcast::Receiver<Event>) {
    loop {
        match rx.recv().await {
            Ok(event) => log_event(&event),
            Err(broadcast::error::RecvError::Lagged(skipped)) => {
                tracing::warn!(skipped, "event log fell behind");
            }
            Err(broadcast::error::RecvError::Closed) => break,
        }
    }
}

fn log_event(event: &Event) {
    match &event.kind {
        EventKind::AlarmStatusChanged { status } => {
            tracing::info!(event_id = %event.id, status = %status, "alarm status changed");
        }
        EventKind::ArmingStatusChanged { status } => {
            tracing::info!(event_id = %event.id, status = %status, "arming status changed");
        }
        EventKind::SensorsChanged => {
            tracing::debug!(event_id = %event.id, "sensors changed");
        }
        EventKind::CatDetected { detected } => {
            tracing::debug!(event_id = %event.id, detected, "image classified");
        }
    }
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown requested");
}
