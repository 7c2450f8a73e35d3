// Copyright (c) 2025 - Cowboy AI, Inc.
//! Company Domain Model
//!
//! The single entity of the registry and everything needed to decide
//! whether a given state of it may be persisted. Nothing in here performs
//! I/O.
//!
//! - [`Company`] / [`CompanyCandidate`] - validated record and raw input
//! - [`CompanyType`] - the four accepted legal forms
//! - [`invariants`] - ordered, first-failure validation
//! - [`CompanyPatch`] - typed partial update built from an untyped field map

pub mod company;
pub mod company_type;
pub mod invariants;
pub mod patch;

pub use company::{Company, CompanyCandidate};
pub use company_type::CompanyType;
pub use invariants::{validate, ValidationError, ValidationResult};
pub use patch::{CompanyPatch, PatchFields};
