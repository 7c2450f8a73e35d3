// Copyright (c) 2025 - Cowboy AI, Inc.
//! NATS connection shared by the event publisher and the request server
//!
//! Everything that crosses the wire is JSON. Failures are reported as
//! [`InfrastructureError`] with the subject involved.

use async_nats::{Client, ConnectOptions, HeaderMap, Message, Subscriber};
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, info};

use crate::errors::{InfrastructureError, InfrastructureResult};

/// Connection settings
#[derive(Debug, Clone)]
pub struct NatsConfig {
    /// Server URLs, tried in order
    pub servers: Vec<String>,
    /// Name reported to the server
    pub name: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl Default for NatsConfig {
    fn default() -> Self {
        Self {
            servers: vec!["nats://localhost:4222".to_string()],
            name: "company-registry".to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(5),
        }
    }
}

/// Cloneable handle on one NATS connection
#[derive(Clone)]
pub struct NatsClient {
    client: Client,
}

impl NatsClient {
    /// Connect using `config`
    pub async fn new(config: NatsConfig) -> InfrastructureResult<Self> {
        let options = ConnectOptions::new()
            .name(&config.name)
            .connection_timeout(config.connect_timeout)
            .request_timeout(Some(config.request_timeout));

        let client = async_nats::connect_with_options(config.servers.join(","), options)
            .await
            .map_err(|e| InfrastructureError::NatsConnection(e.to_string()))?;

        info!(servers = ?config.servers, name = %config.name, "Connected to NATS");
        Ok(Self { client })
    }

    /// Wrap an already connected client
    pub fn from_client(client: Client) -> Self {
        Self { client }
    }

    /// Publish `message` as JSON with headers attached
    pub async fn publish_with_headers<T: Serialize>(
        &self,
        subject: &str,
        headers: HeaderMap,
        message: &T,
    ) -> InfrastructureResult<()> {
        self.send(subject, Some(headers), message).await
    }

    /// Answer a request on its reply subject
    ///
    /// Returns `false` without sending anything when the request carried no
    /// reply subject.
    pub async fn reply<T: Serialize>(&self, request: &Message, message: &T) -> InfrastructureResult<bool> {
        let Some(reply) = request.reply.as_ref() else {
            return Ok(false);
        };
        self.send(&reply.to_string(), None, message).await?;
        Ok(true)
    }

    async fn send<T: Serialize>(
        &self,
        subject: &str,
        headers: Option<HeaderMap>,
        message: &T,
    ) -> InfrastructureResult<()> {
        let payload = serde_json::to_vec(message)?;
        let size = payload.len();

        let sent = match headers {
            Some(headers) => {
                self.client
                    .publish_with_headers(subject.to_string(), headers, payload.into())
                    .await
            }
            None => self.client.publish(subject.to_string(), payload.into()).await,
        };
        sent.map_err(|e| InfrastructureError::NatsPublish(format!("{}: {}", subject, e)))?;

        debug!(subject = subject, bytes = size, "Published");
        Ok(())
    }

    /// Subscribe to a subject or wildcard
    pub async fn subscribe(&self, subject: &str) -> InfrastructureResult<Subscriber> {
        let subscriber = self
            .client
            .subscribe(subject.to_string())
            .await
            .map_err(|e| InfrastructureError::NatsSubscribe(format!("{}: {}", subject, e)))?;

        info!(subject = subject, "Subscribed");
        Ok(subscriber)
    }

    /// Wait until buffered messages reach the server
    pub async fn flush(&self) -> InfrastructureResult<()> {
        self.client
            .flush()
            .await
            .map_err(|e| InfrastructureError::NatsPublish(format!("flush: {}", e)))
    }

    /// Get the underlying NATS client for advanced operations
    pub fn inner(&self) -> &Client {
        &self.client
    }
}
