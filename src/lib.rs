// Copyright (c) 2025 - Cowboy AI, Inc.
//! Company registry service
//!
//! Validated create/read/patch/delete over a single `Company` record type,
//! persisted through a repository port and announced on NATS through an
//! event port.
//!
//! # Layers
//!
//! ```text
//! NATS request → CompanyServer → CompanyApi (auth gate, decode)
//!     ↓
//! CompanyService (validate → uniqueness → persist → publish)
//!     ↓                              ↓
//! CompanyRepository             EventPublisher
//! (SQLite / in-memory)          (NATS / no-op)
//! ```

pub mod api;
pub mod auth;
pub mod config;
pub mod domain;
pub mod errors;
pub mod events;
pub mod nats;
pub mod publisher;
pub mod repository;
pub mod server;
pub mod service;
pub mod subjects;

// Re-export commonly used types
pub use api::{ApiRequest, ApiResponse, CompanyApi};
pub use auth::{AuthGate, BearerTokenGate};
pub use config::AppConfig;
pub use domain::{Company, CompanyCandidate, CompanyPatch, CompanyType, ValidationError};
pub use errors::{InfrastructureError, InfrastructureResult};
pub use nats::{NatsClient, NatsConfig};
pub use publisher::{EventPublisher, NatsEventPublisher, NoopEventPublisher, PublishError};
pub use repository::{CompanyRepository, InMemoryCompanyRepository, RepositoryError, SqliteCompanyRepository};
pub use server::CompanyServer;
pub use service::{CompanyOrchestrator, CompanyService, ErrorKind, ServiceError, ServiceResult};
