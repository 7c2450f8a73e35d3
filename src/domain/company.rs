// Copyright (c) 2025 - Cowboy AI, Inc.
//! Company Entity
//!
//! Two shapes of the same record:
//!
//! - [`CompanyCandidate`]: unvalidated input, as decoded from a request or
//!   produced by merging a patch. The legal form is still raw text and the
//!   employee count may be negative.
//! - [`Company`]: a record that passed every invariant and carries its
//!   immutable identity. Only [`Company::from_candidate`] builds one from
//!   input, so a persisted company is valid by construction.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::invariants::{self, ValidationError};
use super::CompanyType;

/// Persisted company record
///
/// # Invariants
/// - `name` is 1..=15 bytes and unique among live records
/// - `description`, when present, is at most 3000 bytes
/// - `employees` ≥ 0
/// - `id` never changes after creation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    /// Identity minted on create
    pub id: Uuid,

    pub name: String,

    /// Absent is distinct from empty
    pub description: Option<String>,

    pub employees: i64,

    pub registered: bool,

    #[serde(rename = "type")]
    pub company_type: CompanyType,
}

impl Company {
    /// Validate a candidate and bind it to an identity
    pub fn from_candidate(id: Uuid, candidate: CompanyCandidate) -> Result<Self, ValidationError> {
        invariants::validate(&candidate)?;
        let company_type = invariants::validate_company_type(&candidate.company_type)?;

        Ok(Self {
            id,
            name: candidate.name,
            description: candidate.description,
            employees: candidate.employees,
            registered: candidate.registered,
            company_type,
        })
    }

    /// Unvalidated copy of this record's mutable fields, the starting point
    /// for a patch merge
    pub fn to_candidate(&self) -> CompanyCandidate {
        CompanyCandidate {
            name: self.name.clone(),
            description: self.description.clone(),
            employees: self.employees,
            registered: self.registered,
            company_type: self.company_type.as_str().to_string(),
        }
    }
}

/// Unvalidated company fields
///
/// Deserializes the create request body: `name`, `employees`, `registered`
/// and `type` are required keys; `description` may be omitted or null.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyCandidate {
    pub name: String,

    #[serde(default)]
    pub description: Option<String>,

    pub employees: i64,

    pub registered: bool,

    #[serde(rename = "type")]
    pub company_type: String,
}

impl CompanyCandidate {
    /// Candidate without a description
    pub fn new(
        name: impl Into<String>,
        employees: i64,
        registered: bool,
        company_type: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: None,
            employees,
            registered,
            company_type: company_type.into(),
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Run the invariants without building a record
    pub fn validate(&self) -> Result<(), ValidationError> {
        invariants::validate(self)
    }
}
