// Copyright (c) 2025 - Cowboy AI, Inc.
//! Company Repository Port
//!
//! Durable storage for company records. The orchestrator depends only on
//! [`CompanyRepository`]; adapters decide where records live.
//!
//! # Adapter Requirements
//!
//! 1. **Name exclusivity**: two records with the same name must never
//!    coexist, even under concurrent writers. An application-level probe is
//!    not enough; the adapter must enforce it at write time and report
//!    [`RepositoryError::DuplicateName`].
//! 2. **Affected rows**: `update` and `delete` on a missing id report
//!    [`RepositoryError::NotFound`] rather than succeeding silently.
//! 3. **Atomic writes**: each call either commits fully or not at all.
//!
//! # Adapters
//!
//! - [`SqliteCompanyRepository`] - relational store with a `UNIQUE` name column
//! - [`InMemoryCompanyRepository`] - map behind a lock, for tests and demos

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::domain::Company;

pub mod memory;
pub mod sqlite;

pub use memory::InMemoryCompanyRepository;
pub use sqlite::SqliteCompanyRepository;

/// Errors reported by repository adapters
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    /// No record with this id
    #[error("company not found: {0}")]
    NotFound(Uuid),

    /// Another record already holds this name
    #[error("company name already exists: {0}")]
    DuplicateName(String),

    /// Infrastructure failure
    #[error("storage error: {0}")]
    Storage(String),

    /// The call did not complete in time
    #[error("storage operation timed out")]
    Timeout,
}

/// Result type for repository operations
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Durable storage for company records
#[async_trait]
pub trait CompanyRepository: Send + Sync {
    /// Insert a new record
    async fn create(&self, company: &Company) -> RepositoryResult<()>;

    /// Fetch a record by id
    async fn get_by_id(&self, id: Uuid) -> RepositoryResult<Company>;

    /// Uniqueness probe; absence is `Ok(None)`, not an error
    async fn get_by_name(&self, name: &str) -> RepositoryResult<Option<Company>>;

    /// Replace every mutable field of the record with `company.id`
    async fn update(&self, company: &Company) -> RepositoryResult<()>;

    /// Physically remove a record
    async fn delete(&self, id: Uuid) -> RepositoryResult<()>;

    /// Readiness probe
    async fn health_check(&self) -> RepositoryResult<()> {
        Ok(())
    }
}
