// Copyright (c) 2025 - Cowboy AI, Inc.
//! Company Mutation Events
//!
//! One event per committed mutation. Created and updated events carry the
//! full record; deleted events carry only the identity and the last name.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::domain::Company;

/// Event type names as published on the wire
pub const COMPANY_CREATED: &str = "CompanyCreated";
pub const COMPANY_UPDATED: &str = "CompanyUpdated";
pub const COMPANY_DELETED: &str = "CompanyDeleted";

/// A committed mutation of a company
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompanyEvent {
    Created(Company),
    Updated(Company),
    Deleted(CompanyDeleted),
}

/// Payload of a deletion notification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyDeleted {
    pub id: Uuid,
    pub name: String,
}

impl CompanyEvent {
    /// Logical event type name
    pub fn event_type(&self) -> &'static str {
        match self {
            Self::Created(_) => COMPANY_CREATED,
            Self::Updated(_) => COMPANY_UPDATED,
            Self::Deleted(_) => COMPANY_DELETED,
        }
    }

    /// Identity of the company the event is about
    pub fn company_id(&self) -> Uuid {
        match self {
            Self::Created(company) | Self::Updated(company) => company.id,
            Self::Deleted(deleted) => deleted.id,
        }
    }

    /// Structured payload handed to the event port
    pub fn payload(&self) -> Result<Value, serde_json::Error> {
        match self {
            Self::Created(company) | Self::Updated(company) => serde_json::to_value(company),
            Self::Deleted(deleted) => serde_json::to_value(deleted),
        }
    }
}
