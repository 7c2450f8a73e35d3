// Copyright (c) 2025 - Cowboy AI, Inc.
//! NATS request/reply server
//!
//! Subscribes to `{root}.api.>` and answers every request on its reply
//! subject with a JSON-encoded [`ApiResponse`]. Each request runs in its own
//! task; requests without a reply subject are dropped.

use async_nats::Message;
use futures::StreamExt;
use std::future::Future;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

use crate::api::{ApiRequest, ApiResponse, CompanyApi, AUTHORIZATION_HEADER, COMPANY_ID_HEADER};
use crate::errors::InfrastructureResult;
use crate::nats::NatsClient;
use crate::subjects::SubjectBuilder;

/// Serves [`CompanyApi`] over NATS
pub struct CompanyServer {
    client: NatsClient,
    api: Arc<CompanyApi>,
    subjects: SubjectBuilder,
}

impl CompanyServer {
    pub fn new(client: NatsClient, api: Arc<CompanyApi>, subjects: SubjectBuilder) -> Self {
        Self {
            client,
            api,
            subjects,
        }
    }

    /// Serve until `shutdown` resolves or the subscription closes
    pub async fn run<S>(self, shutdown: S) -> InfrastructureResult<()>
    where
        S: Future<Output = ()>,
    {
        let subject = self.subjects.api_wildcard();
        let mut subscriber = self.client.subscribe(&subject).await?;
        info!(subject = %subject, "Company API listening");

        tokio::pin!(shutdown);

        loop {
            tokio::select! {
                _ = &mut shutdown => {
                    info!("Shutdown requested, stopping company API");
                    break;
                }
                message = subscriber.next() => {
                    let Some(message) = message else {
                        warn!("Subscription closed");
                        break;
                    };

                    let client = self.client.clone();
                    let api = Arc::clone(&self.api);
                    let subjects = self.subjects.clone();
                    tokio::spawn(async move {
                        serve_message(client, api, subjects, message).await;
                    });
                }
            }
        }

        if let Err(e) = subscriber.unsubscribe().await {
            warn!(error = %e, "Failed to unsubscribe");
        }
        Ok(())
    }
}

/// Decode a NATS message into an [`ApiRequest`]
pub fn request_from_message(subjects: &SubjectBuilder, message: &Message) -> Option<ApiRequest> {
    let operation = subjects.parse_api(&message.subject.to_string())?;

    let header = |name: &str| {
        message
            .headers
            .as_ref()
            .and_then(|headers| headers.get(name))
            .map(|value| value.as_str().to_string())
    };

    let mut request = ApiRequest::new(operation).with_body(message.payload.to_vec());
    request.company_id = header(COMPANY_ID_HEADER);
    request.authorization = header(AUTHORIZATION_HEADER);
    Some(request)
}

async fn serve_message(client: NatsClient, api: Arc<CompanyApi>, subjects: SubjectBuilder, message: Message) {
    if message.reply.is_none() {
        debug!(subject = %message.subject, "Request without reply subject, dropping");
        return;
    }

    let response = match request_from_message(&subjects, &message) {
        Some(request) => api.handle(request).await,
        None => ApiResponse::error(404, format!("unknown operation: {}", message.subject)),
    };

    debug!(subject = %message.subject, status = response.status, "Replying");
    if let Err(e) = client.reply(&message, &response).await {
        error!(subject = %message.subject, error = %e, "Failed to send reply");
    }
}
