// Copyright (c) 2025 - Cowboy AI, Inc.
//! Pure Validation Functions - Domain Invariants
//!
//! Every rule a persisted company must satisfy. All functions are pure
//! (no I/O, deterministic) and report the first rule that fails.
//!
//! # Check Order
//!
//! [`validate`] runs the rules in a fixed order and stops at the first
//! failure:
//!
//! 1. name present
//! 2. name length ≤ [`MAX_NAME_LENGTH`] bytes
//! 3. description length ≤ [`MAX_DESCRIPTION_LENGTH`] bytes (when present)
//! 4. employees ≥ 0
//! 5. type is one of the four legal forms
//!
//! Callers always receive exactly one error, never a collection.

use super::{CompanyCandidate, CompanyType};

/// Maximum name length, measured in bytes of the UTF-8 encoding
pub const MAX_NAME_LENGTH: usize = 15;

/// Maximum description length, measured in bytes of the UTF-8 encoding
pub const MAX_DESCRIPTION_LENGTH: usize = 3000;

/// Validation result with detailed error information
pub type ValidationResult = Result<(), ValidationError>;

/// A rejected input, caller's fault, never retried
///
/// Patch-shape failures ([`ValidationError::TypeMismatch`],
/// [`ValidationError::EmptyPatch`]) are part of the same family.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("name is required")]
    NameRequired,

    #[error("name must be {max} characters or fewer, got {length}", max = MAX_NAME_LENGTH)]
    NameTooLong { length: usize },

    #[error("description must be {max} characters or fewer, got {length}", max = MAX_DESCRIPTION_LENGTH)]
    DescriptionTooLong { length: usize },

    #[error("employees cannot be negative, got {0}")]
    NegativeEmployees(i64),

    #[error("invalid company type: {0}")]
    InvalidCompanyType(String),

    /// A patch value of the wrong kind for its field
    #[error("{field} must be {expected}")]
    TypeMismatch {
        field: &'static str,
        expected: &'static str,
    },

    /// A patch with no recognised mutable field
    #[error("no fields to update")]
    EmptyPatch,
}

impl ValidationError {
    /// The field the failed rule concerns
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::NameRequired | Self::NameTooLong { .. } => Some("name"),
            Self::DescriptionTooLong { .. } => Some("description"),
            Self::NegativeEmployees(_) => Some("employees"),
            Self::InvalidCompanyType(_) => Some("type"),
            Self::TypeMismatch { field, .. } => Some(field),
            Self::EmptyPatch => None,
        }
    }
}

/// Validate the name rules: present, at most 15 bytes
pub fn validate_name(name: &str) -> ValidationResult {
    if name.is_empty() {
        return Err(ValidationError::NameRequired);
    }
    if name.len() > MAX_NAME_LENGTH {
        return Err(ValidationError::NameTooLong { length: name.len() });
    }
    Ok(())
}

/// Validate the description rule. Absent passes; empty passes.
pub fn validate_description(description: Option<&str>) -> ValidationResult {
    match description {
        Some(text) if text.len() > MAX_DESCRIPTION_LENGTH => {
            Err(ValidationError::DescriptionTooLong { length: text.len() })
        }
        _ => Ok(()),
    }
}

/// Validate the employee count is not negative
pub fn validate_employees(employees: i64) -> ValidationResult {
    if employees < 0 {
        return Err(ValidationError::NegativeEmployees(employees));
    }
    Ok(())
}

/// Validate and parse the legal form
pub fn validate_company_type(raw: &str) -> Result<CompanyType, ValidationError> {
    raw.parse().map_err(ValidationError::InvalidCompanyType)
}

/// Validate a full candidate in the fixed rule order
pub fn validate(candidate: &CompanyCandidate) -> ValidationResult {
    validate_name(&candidate.name)?;
    validate_description(candidate.description.as_deref())?;
    validate_employees(candidate.employees)?;
    validate_company_type(&candidate.company_type)?;
    Ok(())
}
