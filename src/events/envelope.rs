// Copyright (c) 2025 - Cowboy AI, Inc.
//! Event Envelope
//!
//! Wire wrapper for every published event. Consumers dispatch on `type` and
//! deserialize `payload` accordingly.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// Current envelope schema version
pub const ENVELOPE_VERSION: u32 = 1;

/// Published form of an event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventEnvelope {
    /// Envelope schema version
    pub event_version: u32,

    /// Unique event identifier (UUID v7 for time ordering)
    pub event_id: Uuid,

    #[serde(rename = "type")]
    pub event_type: String,

    pub payload: Value,

    /// When the envelope was built, UTC
    pub timestamp: DateTime<Utc>,
}

impl EventEnvelope {
    /// Wrap a payload, minting a fresh event id and timestamp
    pub fn new(event_type: impl Into<String>, payload: Value) -> Self {
        Self {
            event_version: ENVELOPE_VERSION,
            event_id: Uuid::now_v7(),
            event_type: event_type.into(),
            payload,
            timestamp: Utc::now(),
        }
    }
}
