// Copyright (c) 2025 - Cowboy AI, Inc.
//! Company Registry Service
//!
//! Serves the company API over NATS request/reply and announces every
//! committed mutation on `{root}.events.*`.
//!
//! Run with: cargo run --bin company-service
//!
//! Prerequisites:
//! 1. NATS server running (default: localhost:4222)
//! 2. Writable location for the SQLite file (via DATABASE_PATH)
//!
//! See `company_registry::config` for every environment variable.

use anyhow::{Context, Result};
use company_registry::{
    api::CompanyApi,
    auth::BearerTokenGate,
    config::AppConfig,
    server::CompanyServer,
    subjects::SubjectBuilder,
    CompanyOrchestrator, EventPublisher, NatsClient, NatsEventPublisher, NoopEventPublisher,
    SqliteCompanyRepository,
};
use std::sync::Arc;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    info!("Starting company registry service");

    let config = AppConfig::from_env().context("Failed to load configuration")?;
    info!("Configuration loaded:");
    info!("  - NATS servers: {:?}", config.nats.servers);
    info!("  - Subject root: {}", config.subject_root);
    info!("  - Database: {}", config.database_path.display());
    info!("  - Events enabled: {}", config.events_enabled);

    let repository = if config.in_memory_database() {
        warn!("Using an in-memory database, data will not survive a restart");
        SqliteCompanyRepository::in_memory()
    } else {
        SqliteCompanyRepository::open(&config.database_path)
    }
    .context("Failed to open company database")?;
    repository
        .migrate()
        .await
        .context("Failed to migrate company database")?;

    let client = NatsClient::new(config.nats.clone())
        .await
        .context("Failed to connect to NATS")?;

    let subjects = SubjectBuilder::new(config.subject_root.clone());
    let publisher: Arc<dyn EventPublisher> = if config.events_enabled {
        Arc::new(NatsEventPublisher::new(client.clone(), subjects.clone()))
    } else {
        info!("Event publishing disabled");
        Arc::new(NoopEventPublisher)
    };

    let service = CompanyOrchestrator::new(Arc::new(repository), publisher)
        .with_timeouts(config.timeouts);
    let api = CompanyApi::new(Arc::new(service), Arc::new(BearerTokenGate::new()));
    let server = CompanyServer::new(client.clone(), Arc::new(api), subjects);

    server
        .run(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                warn!(error = %e, "Failed to listen for shutdown signal");
                std::future::pending::<()>().await;
            }
        })
        .await
        .context("Company API stopped unexpectedly")?;

    client.flush().await.context("Failed to flush NATS")?;
    info!("Company registry service stopped");
    Ok(())
}
