// Copyright (c) 2025 - Cowboy AI, Inc.
//! Partial-Update Merger
//!
//! Turns a loosely-typed field map (a decoded JSON object) into a typed
//! [`CompanyPatch`], then applies it onto an existing record's fields.
//!
//! # Rules
//! - Only `name`, `description`, `employees`, `registered` and `type` are
//!   recognised; `id` and unknown keys are ignored.
//! - `description: null` clears the description; a missing key leaves it.
//! - `employees` accepts any JSON number with an integral part that fits in
//!   `i64`; fractions are truncated toward zero.
//! - A value of the wrong kind rejects the whole patch. Nothing is applied
//!   until every recognised field has been checked.

use serde_json::{Map, Value};

use super::invariants::ValidationError;
use super::CompanyCandidate;

/// Untyped patch payload, field name → dynamically-typed value
pub type PatchFields = Map<String, Value>;

/// Fields a patch may change, in the order they are checked
pub const MUTABLE_FIELDS: [&str; 5] = ["name", "description", "employees", "registered", "type"];

/// Typed partial update; `None` means "leave untouched"
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompanyPatch {
    pub name: Option<String>,
    /// `Some(None)` clears the description
    pub description: Option<Option<String>>,
    pub employees: Option<i64>,
    pub registered: Option<bool>,
    pub company_type: Option<String>,
}

impl CompanyPatch {
    /// Whether the map names at least one mutable field
    pub fn touches_mutable_field(fields: &PatchFields) -> bool {
        MUTABLE_FIELDS.iter().any(|field| fields.contains_key(*field))
    }

    /// Type-check a field map
    ///
    /// # Errors
    /// - [`ValidationError::EmptyPatch`] when no mutable field is present
    /// - [`ValidationError::TypeMismatch`] for the first field of the wrong kind
    pub fn from_fields(fields: &PatchFields) -> Result<Self, ValidationError> {
        if !Self::touches_mutable_field(fields) {
            return Err(ValidationError::EmptyPatch);
        }

        let name = match fields.get("name") {
            None => None,
            Some(Value::String(name)) => Some(name.clone()),
            Some(_) => return Err(mismatch("name", "a string")),
        };

        let description = match fields.get("description") {
            None => None,
            Some(Value::Null) => Some(None),
            Some(Value::String(text)) => Some(Some(text.clone())),
            Some(_) => return Err(mismatch("description", "a string or null")),
        };

        let employees = match fields.get("employees") {
            None => None,
            Some(value) => Some(coerce_integer(value).ok_or_else(|| mismatch("employees", "a number"))?),
        };

        let registered = match fields.get("registered") {
            None => None,
            Some(Value::Bool(flag)) => Some(*flag),
            Some(_) => return Err(mismatch("registered", "a boolean")),
        };

        let company_type = match fields.get("type") {
            None => None,
            Some(Value::String(raw)) => Some(raw.clone()),
            Some(_) => return Err(mismatch("type", "a string")),
        };

        Ok(Self {
            name,
            description,
            employees,
            registered,
            company_type,
        })
    }

    /// The new name, if this patch sets one different from `current`
    pub fn renames<'a>(&'a self, current: &str) -> Option<&'a str> {
        self.name.as_deref().filter(|name| *name != current)
    }

    /// Produce the merged candidate; `base` is left untouched
    pub fn apply(&self, base: &CompanyCandidate) -> CompanyCandidate {
        let mut merged = base.clone();
        if let Some(name) = &self.name {
            merged.name = name.clone();
        }
        if let Some(description) = &self.description {
            merged.description = description.clone();
        }
        if let Some(employees) = self.employees {
            merged.employees = employees;
        }
        if let Some(registered) = self.registered {
            merged.registered = registered;
        }
        if let Some(company_type) = &self.company_type {
            merged.company_type = company_type.clone();
        }
        merged
    }
}

fn mismatch(field: &'static str, expected: &'static str) -> ValidationError {
    ValidationError::TypeMismatch { field, expected }
}

/// Integers pass through; floats truncate toward zero when in range
fn coerce_integer(value: &Value) -> Option<i64> {
    let number = value.as_number()?;
    if let Some(int) = number.as_i64() {
        return Some(int);
    }
    let float = number.as_f64()?;
    // i64::MAX as f64 rounds up to 2^63, which is itself out of range
    if float.is_finite() && float >= i64::MIN as f64 && float < i64::MAX as f64 {
        Some(float.trunc() as i64)
    } else {
        None
    }
}
