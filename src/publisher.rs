// Copyright (c) 2025 - Cowboy AI, Inc.
//! Event publisher port and its adapters
//!
//! The orchestrator hands every committed mutation to an [`EventPublisher`]
//! as a logical event type plus a structured payload. Adapters decide the
//! wire format:
//!
//! - [`NatsEventPublisher`] wraps the payload in an [`EventEnvelope`] and
//!   publishes it to `{root}.events.{operation}`
//! - [`NoopEventPublisher`] only logs, for deployments without a broker

use async_nats::HeaderMap;
use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, info};

use crate::events::EventEnvelope;
use crate::nats::NatsClient;
use crate::subjects::{EventOperation, SubjectBuilder};

/// Header carrying the logical event type
pub const EVENT_TYPE_HEADER: &str = "Event-Type";

/// Error types for event publishing
#[derive(Debug, Error)]
pub enum PublishError {
    #[error("NATS error: {0}")]
    Nats(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Unknown event type: {0}")]
    UnknownEventType(String),

    #[error("Publish timed out")]
    Timeout,
}

/// Result type for publish operations
pub type Result<T> = std::result::Result<T, PublishError>;

/// Best-effort notification of committed mutations
#[async_trait]
pub trait EventPublisher: Send + Sync {
    /// Publish one event
    async fn publish(&self, event_type: &str, payload: Value) -> Result<()>;
}

/// Publishes enveloped events to NATS
pub struct NatsEventPublisher {
    client: NatsClient,
    subjects: SubjectBuilder,
}

impl NatsEventPublisher {
    /// Create a new event publisher
    pub fn new(client: NatsClient, subjects: SubjectBuilder) -> Self {
        Self { client, subjects }
    }

    /// Subject an event type is routed to
    pub fn subject_for(&self, event_type: &str) -> Result<String> {
        let operation = EventOperation::from_event_type(event_type)
            .ok_or_else(|| PublishError::UnknownEventType(event_type.to_string()))?;
        Ok(self.subjects.event(operation))
    }
}

#[async_trait]
impl EventPublisher for NatsEventPublisher {
    async fn publish(&self, event_type: &str, payload: Value) -> Result<()> {
        let subject = self.subject_for(event_type)?;
        let envelope = EventEnvelope::new(event_type, payload);

        let mut headers = HeaderMap::new();
        headers.insert(EVENT_TYPE_HEADER, event_type);

        debug!(
            subject = %subject,
            event_id = %envelope.event_id,
            "Publishing company event"
        );

        self.client
            .publish_with_headers(&subject, headers, &envelope)
            .await
            .map_err(|e| PublishError::Nats(e.to_string()))?;

        info!(
            subject = %subject,
            event_type = event_type,
            event_id = %envelope.event_id,
            "Event published successfully"
        );

        Ok(())
    }
}

/// Publisher for deployments with events switched off
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopEventPublisher;

#[async_trait]
impl EventPublisher for NoopEventPublisher {
    async fn publish(&self, event_type: &str, _payload: Value) -> Result<()> {
        debug!(event_type = event_type, "Events disabled, skipping publish");
        Ok(())
    }
}
