// Copyright (c) 2025 - Cowboy AI, Inc.
//! Request handling independent of the wire
//!
//! [`CompanyApi`] takes a decoded [`ApiRequest`], runs the auth gate for
//! mutating operations, parses the id and body, calls the service and maps
//! the outcome onto an HTTP-style [`ApiResponse`]:
//!
//! | Operation | Success | Failures            |
//! |-----------|---------|---------------------|
//! | Create    | 201     | 400 401 409         |
//! | Get       | 200     | 400 404             |
//! | Patch     | 200     | 400 401 404 409     |
//! | Delete    | 204     | 400 401 404         |
//! | Health    | 200     | 503                 |
//! | Live      | 200     |                     |
//!
//! Storage failures become 500 with a generic message.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::{debug, error, warn};
use uuid::Uuid;

use crate::auth::AuthGate;
use crate::domain::{CompanyCandidate, PatchFields};
use crate::service::{CompanyService, ErrorKind, ServiceError};
use crate::subjects::ApiOperation;

/// Header carrying the bearer token
pub const AUTHORIZATION_HEADER: &str = "Authorization";

/// Header carrying the target company id
pub const COMPANY_ID_HEADER: &str = "Company-Id";

pub const STATUS_OK: u16 = 200;
pub const STATUS_CREATED: u16 = 201;
pub const STATUS_NO_CONTENT: u16 = 204;
pub const STATUS_BAD_REQUEST: u16 = 400;
pub const STATUS_UNAUTHORIZED: u16 = 401;
pub const STATUS_INTERNAL_ERROR: u16 = 500;
pub const STATUS_UNAVAILABLE: u16 = 503;

/// Decoded inbound request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    pub operation: ApiOperation,
    /// Raw id, parsed by the handler
    pub company_id: Option<String>,
    /// Raw `Authorization` header value
    pub authorization: Option<String>,
    /// JSON body, possibly empty
    pub body: Vec<u8>,
}

impl ApiRequest {
    pub fn new(operation: ApiOperation) -> Self {
        Self {
            operation,
            company_id: None,
            authorization: None,
            body: Vec::new(),
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.company_id = Some(id.into());
        self
    }

    pub fn with_authorization(mut self, header: impl Into<String>) -> Self {
        self.authorization = Some(header.into());
        self
    }

    pub fn with_body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = body.into();
        self
    }

    /// Serialize `value` as the body
    pub fn with_json(self, value: &Value) -> Self {
        self.with_body(value.to_string())
    }
}

/// Outbound reply: status code plus optional JSON body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse {
    pub status: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<Value>,
}

impl ApiResponse {
    pub fn json<T: Serialize>(status: u16, body: &T) -> Self {
        match serde_json::to_value(body) {
            Ok(body) => Self {
                status,
                body: Some(body),
            },
            Err(e) => {
                error!(error = %e, "Error encoding response");
                Self::error(STATUS_INTERNAL_ERROR, "internal server error")
            }
        }
    }

    pub fn error(status: u16, message: impl Into<String>) -> Self {
        Self {
            status,
            body: Some(json!({ "error": message.into() })),
        }
    }

    pub fn no_content() -> Self {
        Self {
            status: STATUS_NO_CONTENT,
            body: None,
        }
    }

    /// The `error` message of an error response
    pub fn error_message(&self) -> Option<&str> {
        self.body.as_ref()?.get("error")?.as_str()
    }
}

impl From<&ServiceError> for ApiResponse {
    fn from(err: &ServiceError) -> Self {
        match err.kind() {
            ErrorKind::Storage => {
                error!(error = %err, "Internal error");
                ApiResponse::error(err.status_code(), "internal server error")
            }
            _ => ApiResponse::error(err.status_code(), err.to_string()),
        }
    }
}

/// Dispatches requests to a [`CompanyService`]
pub struct CompanyApi {
    service: Arc<dyn CompanyService>,
    auth: Arc<dyn AuthGate>,
}

impl CompanyApi {
    pub fn new(service: Arc<dyn CompanyService>, auth: Arc<dyn AuthGate>) -> Self {
        Self { service, auth }
    }

    /// Handle one request end to end
    pub async fn handle(&self, request: ApiRequest) -> ApiResponse {
        debug!(operation = %request.operation, "Handling request");

        if request.operation.requires_auth() {
            if let Err(e) = self.auth.authorize(request.authorization.as_deref()) {
                warn!(operation = %request.operation, reason = %e, "Unauthorized request");
                return ApiResponse::error(STATUS_UNAUTHORIZED, e.to_string());
            }
        }

        match request.operation {
            ApiOperation::Create => self.create(&request.body).await,
            ApiOperation::Get => match parse_id(request.company_id.as_deref()) {
                Ok(id) => self.get(id).await,
                Err(response) => response,
            },
            ApiOperation::Patch => match parse_id(request.company_id.as_deref()) {
                Ok(id) => self.patch(id, &request.body).await,
                Err(response) => response,
            },
            ApiOperation::Delete => match parse_id(request.company_id.as_deref()) {
                Ok(id) => self.delete(id).await,
                Err(response) => response,
            },
            ApiOperation::Health => self.health().await,
            ApiOperation::Live => ApiResponse::json(STATUS_OK, &json!({ "status": "ok" })),
        }
    }

    async fn create(&self, body: &[u8]) -> ApiResponse {
        let candidate: CompanyCandidate = match serde_json::from_slice(body) {
            Ok(candidate) => candidate,
            Err(e) => return invalid_body(e),
        };

        match self.service.create(candidate).await {
            Ok(company) => ApiResponse::json(STATUS_CREATED, &company),
            Err(e) => ApiResponse::from(&e),
        }
    }

    async fn get(&self, id: Uuid) -> ApiResponse {
        match self.service.get(id).await {
            Ok(company) => ApiResponse::json(STATUS_OK, &company),
            Err(e) => ApiResponse::from(&e),
        }
    }

    async fn patch(&self, id: Uuid, body: &[u8]) -> ApiResponse {
        let fields: PatchFields = match serde_json::from_slice(body) {
            Ok(fields) => fields,
            Err(e) => return invalid_body(e),
        };

        match self.service.patch(id, fields).await {
            Ok(company) => ApiResponse::json(STATUS_OK, &company),
            Err(e) => ApiResponse::from(&e),
        }
    }

    async fn delete(&self, id: Uuid) -> ApiResponse {
        match self.service.delete(id).await {
            Ok(()) => ApiResponse::no_content(),
            Err(e) => ApiResponse::from(&e),
        }
    }

    async fn health(&self) -> ApiResponse {
        match self.service.health_check().await {
            Ok(()) => ApiResponse::json(
                STATUS_OK,
                &json!({ "status": "ok", "services": { "database": "healthy" } }),
            ),
            Err(e) => ApiResponse::json(
                STATUS_UNAVAILABLE,
                &json!({
                    "status": "unhealthy",
                    "services": { "database": format!("unhealthy: {}", e) }
                }),
            ),
        }
    }
}

fn parse_id(raw: Option<&str>) -> Result<Uuid, ApiResponse> {
    raw.and_then(|raw| Uuid::parse_str(raw.trim()).ok())
        .ok_or_else(|| ApiResponse::error(STATUS_BAD_REQUEST, "invalid UUID format"))
}

fn invalid_body(err: serde_json::Error) -> ApiResponse {
    ApiResponse::error(STATUS_BAD_REQUEST, format!("invalid JSON body: {}", err))
}
