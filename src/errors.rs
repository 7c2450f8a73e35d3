// Copyright (c) 2025 - Cowboy AI, Inc.
//! Messaging errors
//!
//! Domain, storage and service failures have their own types next to the
//! code that raises them; this one covers the NATS plumbing.

use thiserror::Error;

/// Failures talking to NATS
#[derive(Debug, Error)]
pub enum InfrastructureError {
    /// Could not reach any server
    #[error("NATS connection error: {0}")]
    NatsConnection(String),

    /// Publish, reply or flush failed
    #[error("NATS publish error: {0}")]
    NatsPublish(String),

    /// Subscription was refused
    #[error("NATS subscribe error: {0}")]
    NatsSubscribe(String),

    /// Outbound message could not be encoded
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type for messaging operations
pub type InfrastructureResult<T> = Result<T, InfrastructureError>;

impl From<async_nats::Error> for InfrastructureError {
    fn from(err: async_nats::Error) -> Self {
        InfrastructureError::NatsConnection(err.to_string())
    }
}

impl From<serde_json::Error> for InfrastructureError {
    fn from(err: serde_json::Error) -> Self {
        InfrastructureError::Serialization(err.to_string())
    }
}
