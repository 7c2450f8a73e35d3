// Copyright (c) 2025 - Cowboy AI, Inc.
//! Service Layer for Company Management
//!
//! This module provides the application service layer that orchestrates
//! domain validation, persistence and event publishing.
//!
//! # Architecture
//!
//! ```text
//! Client Request
//!     ↓
//! Service Layer (this module)
//!     ↓
//! Domain Validation → Name Uniqueness Probe
//!     ↓
//! CompanyRepository (SQLite / in-memory)
//!     ↓
//! EventPublisher (NATS, best-effort)
//! ```
//!
//! # Design Principles
//!
//! 1. **Transaction Boundaries**: One repository write per mutation
//! 2. **Ports In, Ports Out**: Storage and events arrive as trait objects
//! 3. **Pure Domain Logic**: Validation never touches I/O
//! 4. **Async by Default**: All I/O is asynchronous and time-bounded
//!
//! # Example
//!
//! ```rust,ignore
//! use company_registry::service::{CompanyOrchestrator, CompanyService};
//!
//! let service = CompanyOrchestrator::new(repository, publisher);
//! let company = service.create(candidate).await?;
//! let fetched = service.get(company.id).await?;
//! ```

pub mod company;

pub use company::{
    CompanyOrchestrator, CompanyService, ErrorKind, OperationTimeouts, ServiceError, ServiceResult,
};
