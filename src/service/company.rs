// Copyright (c) 2025 - Cowboy AI, Inc.
//! Company Service Layer
//!
//! Orchestrates validation, name uniqueness, persistence and event
//! publishing for each company operation.
//!
//! # Service Pattern
//!
//! ```text
//! Request → Service → Validate → Uniqueness probe → Repository
//!                                                      ↓
//!                                              Publish (best-effort)
//! ```
//!
//! # Transaction Semantics
//!
//! Each mutation is held in memory until its single repository write:
//! 1. Validate / merge the candidate state
//! 2. Probe for a name collision (the repository re-checks on write)
//! 3. Write to the repository
//! 4. Publish the event
//!
//! A failure in steps 1-3 fails the operation with nothing written. A
//! failure in step 4 is logged and the operation still succeeds.
//!
//! # Cancellation
//!
//! Dropping an operation's future before the write returns leaves storage
//! untouched; dropping it afterwards skips the publish. Every repository
//! call and every publish is also bounded by [`OperationTimeouts`].

use async_trait::async_trait;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, info, warn};
use uuid::Uuid;

use crate::domain::{Company, CompanyCandidate, CompanyPatch, PatchFields, ValidationError};
use crate::events::{CompanyDeleted, CompanyEvent};
use crate::publisher::{EventPublisher, PublishError};
use crate::repository::{CompanyRepository, RepositoryError, RepositoryResult};

/// Service layer result type
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Service layer errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ServiceError {
    /// Input rejected by a domain rule
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Another company already holds the name
    #[error("company name already exists: {0}")]
    DuplicateName(String),

    /// No company with this id
    #[error("company not found: {0}")]
    NotFound(Uuid),

    /// Infrastructure failure, opaque to the caller
    #[error("storage error: {0}")]
    Storage(String),
}

/// Closed classification of [`ServiceError`], for transports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Validation,
    DuplicateName,
    NotFound,
    Storage,
}

impl ErrorKind {
    /// HTTP-style status code for the kind
    pub fn status_code(&self) -> u16 {
        match self {
            ErrorKind::Validation => 400,
            ErrorKind::NotFound => 404,
            ErrorKind::DuplicateName => 409,
            ErrorKind::Storage => 500,
        }
    }
}

impl ServiceError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ServiceError::Validation(_) => ErrorKind::Validation,
            ServiceError::DuplicateName(_) => ErrorKind::DuplicateName,
            ServiceError::NotFound(_) => ErrorKind::NotFound,
            ServiceError::Storage(_) => ErrorKind::Storage,
        }
    }

    pub fn status_code(&self) -> u16 {
        self.kind().status_code()
    }
}

impl From<RepositoryError> for ServiceError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound(id) => ServiceError::NotFound(id),
            RepositoryError::DuplicateName(name) => ServiceError::DuplicateName(name),
            RepositoryError::Storage(message) => ServiceError::Storage(message),
            RepositoryError::Timeout => ServiceError::Storage("storage operation timed out".to_string()),
        }
    }
}

/// Company service trait
///
/// Defines the application service interface for company management.
#[async_trait]
pub trait CompanyService: Send + Sync {
    /// Validate and persist a new company, minting its id
    async fn create(&self, candidate: CompanyCandidate) -> ServiceResult<Company>;

    /// Fetch a company by id
    async fn get(&self, id: Uuid) -> ServiceResult<Company>;

    /// Merge `fields` onto the stored company and persist the result
    async fn patch(&self, id: Uuid, fields: PatchFields) -> ServiceResult<Company>;

    /// Remove a company. Deleting an already-deleted id is `NotFound`.
    async fn delete(&self, id: Uuid) -> ServiceResult<()>;

    /// Readiness of the backing store
    async fn health_check(&self) -> ServiceResult<()>;
}

/// Upper bounds for suspension points
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperationTimeouts {
    /// Per repository call
    pub storage: Duration,
    /// Per publish attempt
    pub publish: Duration,
}

impl Default for OperationTimeouts {
    fn default() -> Self {
        Self {
            storage: Duration::from_secs(5),
            publish: Duration::from_secs(2),
        }
    }
}

/// Repository-backed implementation of [`CompanyService`]
///
/// Holds no mutable state of its own; share it behind an `Arc`.
pub struct CompanyOrchestrator {
    repository: Arc<dyn CompanyRepository>,
    publisher: Arc<dyn EventPublisher>,
    timeouts: OperationTimeouts,
}

impl CompanyOrchestrator {
    /// Create a new orchestrator with default timeouts
    pub fn new(repository: Arc<dyn CompanyRepository>, publisher: Arc<dyn EventPublisher>) -> Self {
        Self {
            repository,
            publisher,
            timeouts: OperationTimeouts::default(),
        }
    }

    /// Override the default timeouts
    pub fn with_timeouts(mut self, timeouts: OperationTimeouts) -> Self {
        self.timeouts = timeouts;
        self
    }

    /// Run a repository call under the storage timeout
    async fn storage<T, F>(&self, call: F) -> RepositoryResult<T>
    where
        F: Future<Output = RepositoryResult<T>>,
    {
        match tokio::time::timeout(self.timeouts.storage, call).await {
            Ok(result) => result,
            Err(_) => Err(RepositoryError::Timeout),
        }
    }

    /// Fail with `DuplicateName` if a company other than `owner` holds `name`
    async fn ensure_name_available(&self, name: &str, owner: Option<Uuid>) -> ServiceResult<()> {
        let existing = self.storage(self.repository.get_by_name(name)).await?;
        match existing {
            Some(holder) if Some(holder.id) != owner => {
                debug!(name = name, holder = %holder.id, "Name already taken");
                Err(ServiceError::DuplicateName(name.to_string()))
            }
            _ => Ok(()),
        }
    }

    /// Best-effort publish; never fails the calling operation
    async fn announce(&self, event: CompanyEvent) {
        let event_type = event.event_type();
        let company_id = event.company_id();

        let payload = match event.payload() {
            Ok(payload) => payload,
            Err(e) => {
                warn!(event_type, company_id = %company_id, error = %e, "Failed to encode event, dropping");
                return;
            }
        };

        let outcome = tokio::time::timeout(
            self.timeouts.publish,
            self.publisher.publish(event_type, payload),
        )
        .await
        .unwrap_or(Err(PublishError::Timeout));

        match outcome {
            Ok(()) => debug!(event_type, company_id = %company_id, "Event published"),
            Err(e) => warn!(
                event_type,
                company_id = %company_id,
                error = %e,
                "Failed to publish event, mutation kept"
            ),
        }
    }

    fn log_storage_failure(operation: &str, err: &ServiceError) {
        if let ServiceError::Storage(message) = err {
            error!(operation, error = %message, "Storage failure");
        }
    }

    async fn create_record(&self, candidate: CompanyCandidate) -> ServiceResult<Company> {
        candidate.validate()?;
        self.ensure_name_available(&candidate.name, None).await?;

        let company = Company::from_candidate(Uuid::now_v7(), candidate)?;
        self.storage(self.repository.create(&company)).await?;

        info!(company_id = %company.id, name = %company.name, "Company created");
        Ok(company)
    }

    async fn patch_record(&self, id: Uuid, fields: &PatchFields) -> ServiceResult<Company> {
        // Rejected before touching storage
        if !CompanyPatch::touches_mutable_field(fields) {
            return Err(ValidationError::EmptyPatch.into());
        }

        let current = self.storage(self.repository.get_by_id(id)).await?;
        let patch = CompanyPatch::from_fields(fields)?;

        if let Some(new_name) = patch.renames(&current.name) {
            self.ensure_name_available(new_name, Some(id)).await?;
        }

        // Revalidate the whole merged record, not just the changed fields
        let updated = Company::from_candidate(id, patch.apply(&current.to_candidate()))?;
        self.storage(self.repository.update(&updated)).await?;

        info!(company_id = %id, "Company updated");
        Ok(updated)
    }

    async fn delete_record(&self, id: Uuid) -> ServiceResult<Company> {
        let current = self.storage(self.repository.get_by_id(id)).await?;
        self.storage(self.repository.delete(id)).await?;

        info!(company_id = %id, name = %current.name, "Company deleted");
        Ok(current)
    }
}

#[async_trait]
impl CompanyService for CompanyOrchestrator {
    async fn create(&self, candidate: CompanyCandidate) -> ServiceResult<Company> {
        let company = self
            .create_record(candidate)
            .await
            .inspect_err(|e| Self::log_storage_failure("create", e))?;

        self.announce(CompanyEvent::Created(company.clone())).await;
        Ok(company)
    }

    async fn get(&self, id: Uuid) -> ServiceResult<Company> {
        let company = self
            .storage(self.repository.get_by_id(id))
            .await
            .map_err(ServiceError::from)
            .inspect_err(|e| Self::log_storage_failure("get", e))?;
        Ok(company)
    }

    async fn patch(&self, id: Uuid, fields: PatchFields) -> ServiceResult<Company> {
        let company = self
            .patch_record(id, &fields)
            .await
            .inspect_err(|e| Self::log_storage_failure("patch", e))?;

        self.announce(CompanyEvent::Updated(company.clone())).await;
        Ok(company)
    }

    async fn delete(&self, id: Uuid) -> ServiceResult<()> {
        let removed = self
            .delete_record(id)
            .await
            .inspect_err(|e| Self::log_storage_failure("delete", e))?;

        self.announce(CompanyEvent::Deleted(CompanyDeleted {
            id,
            name: removed.name,
        }))
        .await;
        Ok(())
    }

    async fn health_check(&self) -> ServiceResult<()> {
        self.storage(self.repository.health_check()).await?;
        Ok(())
    }
}
