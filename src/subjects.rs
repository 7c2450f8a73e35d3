// Copyright (c) 2025 - Cowboy AI, Inc.

//! NATS subject hierarchy for company traffic
//!
//! Two channels live under a configurable root (default `companies`):
//!
//! ```text
//! {root}.events.{created|updated|deleted}             mutation notifications
//! {root}.api.{create|get|patch|delete|health|live}    request/reply API
//! ```
//!
//! This allows for:
//! - Precise subscriptions (`companies.events.created`)
//! - Channel-level wildcards (`companies.events.>`)
//!
//! # Examples
//!
//! ```rust
//! use company_registry::subjects::{ApiOperation, EventOperation, SubjectBuilder};
//!
//! let subjects = SubjectBuilder::default();
//! assert_eq!(subjects.event(EventOperation::Created), "companies.events.created");
//! assert_eq!(subjects.api(ApiOperation::Patch), "companies.api.patch");
//! assert_eq!(subjects.api_wildcard(), "companies.api.>");
//! ```

use std::fmt;
use std::str::FromStr;

/// Default root namespace for all company subjects
pub const DEFAULT_ROOT: &str = "companies";

const EVENTS_CHANNEL: &str = "events";
const API_CHANNEL: &str = "api";

/// Mutation notifications published after a committed write
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventOperation {
    /// A company was created
    Created,
    /// A company was patched
    Updated,
    /// A company was deleted
    Deleted,
}

impl EventOperation {
    /// Map a logical event type (`CompanyCreated`, ...) to its operation
    pub fn from_event_type(event_type: &str) -> Option<Self> {
        match event_type {
            "CompanyCreated" => Some(Self::Created),
            "CompanyUpdated" => Some(Self::Updated),
            "CompanyDeleted" => Some(Self::Deleted),
            _ => None,
        }
    }
}

impl fmt::Display for EventOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventOperation::Created => write!(f, "created"),
            EventOperation::Updated => write!(f, "updated"),
            EventOperation::Deleted => write!(f, "deleted"),
        }
    }
}

/// Operations served on the request/reply channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiOperation {
    Create,
    Get,
    Patch,
    Delete,
    /// Readiness: pings storage
    Health,
    /// Liveness: answers without touching storage
    Live,
}

impl ApiOperation {
    /// Whether the operation mutates state and therefore needs a bearer token
    pub fn requires_auth(&self) -> bool {
        matches!(self, Self::Create | Self::Patch | Self::Delete)
    }
}

impl fmt::Display for ApiOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiOperation::Create => write!(f, "create"),
            ApiOperation::Get => write!(f, "get"),
            ApiOperation::Patch => write!(f, "patch"),
            ApiOperation::Delete => write!(f, "delete"),
            ApiOperation::Health => write!(f, "health"),
            ApiOperation::Live => write!(f, "live"),
        }
    }
}

impl FromStr for ApiOperation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "create" => Ok(Self::Create),
            "get" => Ok(Self::Get),
            "patch" => Ok(Self::Patch),
            "delete" => Ok(Self::Delete),
            "health" => Ok(Self::Health),
            "live" => Ok(Self::Live),
            other => Err(format!("unknown api operation: {}", other)),
        }
    }
}

/// Builder for company NATS subjects
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubjectBuilder {
    root: String,
}

impl SubjectBuilder {
    /// Create a builder rooted at `root`
    pub fn new(root: impl Into<String>) -> Self {
        Self { root: root.into() }
    }

    /// The configured root namespace
    pub fn root(&self) -> &str {
        &self.root
    }

    /// Subject for a mutation notification
    pub fn event(&self, operation: EventOperation) -> String {
        format!("{}.{}.{}", self.root, EVENTS_CHANNEL, operation)
    }

    /// Subject for a request/reply operation
    pub fn api(&self, operation: ApiOperation) -> String {
        format!("{}.{}.{}", self.root, API_CHANNEL, operation)
    }

    /// Subscription covering every notification: `{root}.events.>`
    pub fn events_wildcard(&self) -> String {
        format!("{}.{}.>", self.root, EVENTS_CHANNEL)
    }

    /// Subscription covering every API operation: `{root}.api.>`
    pub fn api_wildcard(&self) -> String {
        format!("{}.{}.>", self.root, API_CHANNEL)
    }

    /// Recover the API operation from a concrete request subject
    pub fn parse_api(&self, subject: &str) -> Option<ApiOperation> {
        let rest = subject.strip_prefix(self.root.as_str())?.strip_prefix('.')?;
        let operation = rest.strip_prefix(API_CHANNEL)?.strip_prefix('.')?;
        operation.parse().ok()
    }
}

impl Default for SubjectBuilder {
    fn default() -> Self {
        Self::new(DEFAULT_ROOT)
    }
}
