// Copyright (c) 2025 - Cowboy AI, Inc.
//! Bearer-token gate for mutating operations
//!
//! The service core never sees tokens; the transport asks an [`AuthGate`]
//! before dispatching Create, Patch or Delete. [`BearerTokenGate`] only
//! checks the header shape and accepts any non-empty token. A verifying
//! gate (signature, expiry, claims) drops in behind the same trait.

use thiserror::Error;

/// Why a request was refused
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("missing authorization header")]
    MissingHeader,

    #[error("invalid authorization header format")]
    InvalidFormat,

    #[error("empty token")]
    EmptyToken,
}

/// Identity attached to an authorised request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    pub subject: String,
}

/// Decides whether a request may mutate state
pub trait AuthGate: Send + Sync {
    /// Inspect the raw `Authorization` header value, if any
    fn authorize(&self, authorization: Option<&str>) -> Result<Principal, AuthError>;
}

/// Extract the token from a `Bearer <token>` header value
///
/// The scheme is matched case-insensitively; exactly one space-separated
/// token must follow.
pub fn bearer_token(header: &str) -> Result<&str, AuthError> {
    let mut parts = header.split(' ');
    let (Some(scheme), Some(token), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(AuthError::InvalidFormat);
    };
    if !scheme.eq_ignore_ascii_case("bearer") {
        return Err(AuthError::InvalidFormat);
    }
    if token.is_empty() {
        return Err(AuthError::EmptyToken);
    }
    Ok(token)
}

/// Accepts any well-formed bearer token without verifying it
#[derive(Debug, Clone)]
pub struct BearerTokenGate {
    subject: String,
}

impl BearerTokenGate {
    pub fn new() -> Self {
        Self {
            subject: "mock-user-id".to_string(),
        }
    }
}

impl Default for BearerTokenGate {
    fn default() -> Self {
        Self::new()
    }
}

impl AuthGate for BearerTokenGate {
    fn authorize(&self, authorization: Option<&str>) -> Result<Principal, AuthError> {
        let header = authorization
            .filter(|h| !h.is_empty())
            .ok_or(AuthError::MissingHeader)?;
        bearer_token(header)?;
        Ok(Principal {
            subject: self.subject.clone(),
        })
    }
}
