// Copyright (c) 2025 - Cowboy AI, Inc.
//! Test Fixtures for company-registry
//!
//! Deterministic candidates, fixed identities and instrumented port
//! implementations (recording, failing and slow publishers and
//! repositories) shared by the integration suites.
//!
//! # Design Principles
//! - Candidate data is fixed; only the service mints ids
//! - Port doubles record what they saw instead of asserting inline
//! - Each suite builds a fresh orchestrator; no shared state between tests
#![allow(dead_code)]

use async_trait::async_trait;
use serde_json::Value;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use uuid::Uuid;

use company_registry::domain::PatchFields;
use company_registry::publisher::{EventPublisher, PublishError};
use company_registry::repository::{CompanyRepository, RepositoryError, RepositoryResult};
use company_registry::service::OperationTimeouts;
use company_registry::{Company, CompanyCandidate, CompanyOrchestrator, InMemoryCompanyRepository};

// Fixed test UUIDs (UUID v7 format, never minted by the service under test)
pub const UNKNOWN_ID: &str = "01934f4a-0000-7000-8000-00000000dead";
pub const COMPANY_ID_1: &str = "01934f4a-1000-7000-8000-000000001000";

/// Parse a fixed UUID from a constant string
pub fn parse_uuid(s: &str) -> Uuid {
    Uuid::parse_str(s).expect("Invalid UUID in test fixture")
}

/// A well-formed candidate: 10 employees, registered, a corporation
pub fn acme() -> CompanyCandidate {
    CompanyCandidate::new("Acme", 10, true, "Corporations").with_description("Widgets")
}

/// A well-formed candidate with the given name and no description
pub fn candidate(name: &str) -> CompanyCandidate {
    CompanyCandidate::new(name, 3, false, "Cooperative")
}

/// Field map from a JSON object literal
pub fn fields(value: Value) -> PatchFields {
    value
        .as_object()
        .cloned()
        .expect("patch fixture must be a JSON object")
}

/// One event as seen by a publisher
#[derive(Debug, Clone, PartialEq)]
pub struct PublishedEvent {
    pub event_type: String,
    pub payload: Value,
}

/// Records every publish and always succeeds
#[derive(Debug, Default)]
pub struct RecordingPublisher {
    events: Mutex<Vec<PublishedEvent>>,
}

impl RecordingPublisher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<PublishedEvent> {
        self.events.lock().expect("publisher lock poisoned").clone()
    }

    pub fn event_types(&self) -> Vec<String> {
        self.events().into_iter().map(|e| e.event_type).collect()
    }
}

#[async_trait]
impl EventPublisher for RecordingPublisher {
    async fn publish(&self, event_type: &str, payload: Value) -> Result<(), PublishError> {
        self.events
            .lock()
            .expect("publisher lock poisoned")
            .push(PublishedEvent {
                event_type: event_type.to_string(),
                payload,
            });
        Ok(())
    }
}

/// Broker that is always down
#[derive(Debug, Default)]
pub struct FailingPublisher;

#[async_trait]
impl EventPublisher for FailingPublisher {
    async fn publish(&self, _event_type: &str, _payload: Value) -> Result<(), PublishError> {
        Err(PublishError::Nats("broker unavailable".to_string()))
    }
}

/// Broker that never answers within any reasonable timeout
#[derive(Debug, Default)]
pub struct StalledPublisher;

#[async_trait]
impl EventPublisher for StalledPublisher {
    async fn publish(&self, _event_type: &str, _payload: Value) -> Result<(), PublishError> {
        tokio::time::sleep(Duration::from_secs(30)).await;
        Ok(())
    }
}

/// Storage that fails every call
#[derive(Debug, Default)]
pub struct BrokenRepository;

#[async_trait]
impl CompanyRepository for BrokenRepository {
    async fn create(&self, _company: &Company) -> RepositoryResult<()> {
        Err(broken())
    }

    async fn get_by_id(&self, _id: Uuid) -> RepositoryResult<Company> {
        Err(broken())
    }

    async fn get_by_name(&self, _name: &str) -> RepositoryResult<Option<Company>> {
        Err(broken())
    }

    async fn update(&self, _company: &Company) -> RepositoryResult<()> {
        Err(broken())
    }

    async fn delete(&self, _id: Uuid) -> RepositoryResult<()> {
        Err(broken())
    }

    async fn health_check(&self) -> RepositoryResult<()> {
        Err(broken())
    }
}

fn broken() -> RepositoryError {
    RepositoryError::Storage("database is locked".to_string())
}

/// Storage that hangs on every call
#[derive(Debug, Default)]
pub struct StalledRepository;

#[async_trait]
impl CompanyRepository for StalledRepository {
    async fn create(&self, _company: &Company) -> RepositoryResult<()> {
        stall().await
    }

    async fn get_by_id(&self, _id: Uuid) -> RepositoryResult<Company> {
        stall().await
    }

    async fn get_by_name(&self, _name: &str) -> RepositoryResult<Option<Company>> {
        stall().await
    }

    async fn update(&self, _company: &Company) -> RepositoryResult<()> {
        stall().await
    }

    async fn delete(&self, _id: Uuid) -> RepositoryResult<()> {
        stall().await
    }
}

async fn stall<T>() -> RepositoryResult<T> {
    tokio::time::sleep(Duration::from_secs(30)).await;
    Err(RepositoryError::Storage("stalled call returned".to_string()))
}

/// Storage that loses every race after the service's own checks pass
///
/// Name lookups find nothing and id lookups find `company`, but every write
/// reports that another writer got there first.
#[derive(Debug)]
pub struct RacingRepository {
    company: Company,
}

impl RacingRepository {
    pub fn new(company: Company) -> Self {
        Self { company }
    }
}

#[async_trait]
impl CompanyRepository for RacingRepository {
    async fn create(&self, company: &Company) -> RepositoryResult<()> {
        Err(RepositoryError::DuplicateName(company.name.clone()))
    }

    async fn get_by_id(&self, _id: Uuid) -> RepositoryResult<Company> {
        Ok(self.company.clone())
    }

    async fn get_by_name(&self, _name: &str) -> RepositoryResult<Option<Company>> {
        Ok(None)
    }

    async fn update(&self, company: &Company) -> RepositoryResult<()> {
        Err(RepositoryError::NotFound(company.id))
    }

    async fn delete(&self, id: Uuid) -> RepositoryResult<()> {
        Err(RepositoryError::NotFound(id))
    }
}

/// Timeouts short enough to keep stalled-port tests fast
pub fn short_timeouts() -> OperationTimeouts {
    OperationTimeouts {
        storage: Duration::from_millis(50),
        publish: Duration::from_millis(50),
    }
}

/// Orchestrator over fresh in-memory storage and a recording publisher
pub struct Harness {
    pub repository: Arc<InMemoryCompanyRepository>,
    pub publisher: Arc<RecordingPublisher>,
    pub service: Arc<CompanyOrchestrator>,
}

impl Harness {
    pub fn new() -> Self {
        let repository = Arc::new(InMemoryCompanyRepository::new());
        let publisher = Arc::new(RecordingPublisher::new());
        let service = Arc::new(CompanyOrchestrator::new(
            repository.clone(),
            publisher.clone(),
        ));
        Self {
            repository,
            publisher,
            service,
        }
    }
}

/// Orchestrator over fresh in-memory storage and the given publisher
pub fn service_with_publisher(
    publisher: Arc<dyn EventPublisher>,
) -> (Arc<InMemoryCompanyRepository>, CompanyOrchestrator) {
    let repository = Arc::new(InMemoryCompanyRepository::new());
    let service = CompanyOrchestrator::new(repository.clone(), publisher)
        .with_timeouts(short_timeouts());
    (repository, service)
}
