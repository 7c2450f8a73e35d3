// Copyright (c) 2025 - Cowboy AI, Inc.
//! Process configuration from environment variables
//!
//! | Variable                    | Default                 |
//! |-----------------------------|-------------------------|
//! | `NATS_URL`                  | `nats://localhost:4222` |
//! | `NATS_CLIENT_NAME`          | `company-registry`      |
//! | `NATS_CONNECT_TIMEOUT_SECS` | `10`                    |
//! | `NATS_REQUEST_TIMEOUT_SECS` | `5`                     |
//! | `COMPANY_SUBJECT_ROOT`      | `companies`             |
//! | `EVENTS_ENABLED`            | `true`                  |
//! | `DATABASE_PATH`             | `companies.db`          |
//! | `STORAGE_TIMEOUT_MS`        | `5000`                  |
//! | `PUBLISH_TIMEOUT_MS`        | `2000`                  |
//!
//! `NATS_URL` may list several servers separated by commas. `DATABASE_PATH`
//! accepts `:memory:` for a throwaway database.

use anyhow::{bail, Context, Result};
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use crate::nats::NatsConfig;
use crate::service::OperationTimeouts;
use crate::subjects::DEFAULT_ROOT;

/// `DATABASE_PATH` value selecting an in-memory database
pub const IN_MEMORY_DATABASE: &str = ":memory:";

/// Everything the service binary needs to start
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub nats: NatsConfig,
    /// Root of the `{root}.events.*` and `{root}.api.*` subjects
    pub subject_root: String,
    /// Publish mutation events; when false a no-op publisher is wired in
    pub events_enabled: bool,
    pub database_path: PathBuf,
    pub timeouts: OperationTimeouts,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            nats: NatsConfig::default(),
            subject_root: DEFAULT_ROOT.to_string(),
            events_enabled: true,
            database_path: PathBuf::from("companies.db"),
            timeouts: OperationTimeouts::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through `lookup`, falling back to defaults
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let var = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let servers = match var("NATS_URL") {
            Some(urls) => urls
                .split(',')
                .map(|url| url.trim().to_string())
                .filter(|url| !url.is_empty())
                .collect(),
            None => defaults.nats.servers,
        };

        let nats = NatsConfig {
            servers,
            name: var("NATS_CLIENT_NAME").unwrap_or(defaults.nats.name),
            connect_timeout: match var("NATS_CONNECT_TIMEOUT_SECS") {
                Some(raw) => Duration::from_secs(parse("NATS_CONNECT_TIMEOUT_SECS", &raw)?),
                None => defaults.nats.connect_timeout,
            },
            request_timeout: match var("NATS_REQUEST_TIMEOUT_SECS") {
                Some(raw) => Duration::from_secs(parse("NATS_REQUEST_TIMEOUT_SECS", &raw)?),
                None => defaults.nats.request_timeout,
            },
        };

        let subject_root = var("COMPANY_SUBJECT_ROOT").unwrap_or(defaults.subject_root);
        if subject_root.contains(['*', '>', ' ']) {
            bail!("COMPANY_SUBJECT_ROOT must not contain wildcards or spaces: {}", subject_root);
        }

        let events_enabled = match var("EVENTS_ENABLED") {
            Some(raw) => parse_flag("EVENTS_ENABLED", &raw)?,
            None => defaults.events_enabled,
        };

        let timeouts = OperationTimeouts {
            storage: match var("STORAGE_TIMEOUT_MS") {
                Some(raw) => Duration::from_millis(parse("STORAGE_TIMEOUT_MS", &raw)?),
                None => defaults.timeouts.storage,
            },
            publish: match var("PUBLISH_TIMEOUT_MS") {
                Some(raw) => Duration::from_millis(parse("PUBLISH_TIMEOUT_MS", &raw)?),
                None => defaults.timeouts.publish,
            },
        };

        Ok(Self {
            nats,
            subject_root,
            events_enabled,
            database_path: var("DATABASE_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.database_path),
            timeouts,
        })
    }

    /// Whether the database lives only in memory
    pub fn in_memory_database(&self) -> bool {
        self.database_path.as_os_str() == IN_MEMORY_DATABASE
    }
}

fn parse<T>(key: &str, raw: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    raw.trim()
        .parse()
        .with_context(|| format!("{} is not a valid number: {}", key, raw))
}

fn parse_flag(key: &str, raw: &str) -> Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => bail!("{} must be a boolean: {}", key, raw),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<AppConfig> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = load(&[]).unwrap();
        assert_eq!(config.nats.servers, vec!["nats://localhost:4222"]);
        assert_eq!(config.nats.name, "company-registry");
        assert_eq!(config.subject_root, "companies");
        assert!(config.events_enabled);
        assert_eq!(config.database_path, PathBuf::from("companies.db"));
        assert_eq!(config.timeouts, OperationTimeouts::default());
        assert!(!config.in_memory_database());
    }

    #[test]
    fn test_overrides() {
        let config = load(&[
            ("NATS_URL", "nats://a:4222, nats://b:4222"),
            ("COMPANY_SUBJECT_ROOT", "acme.companies"),
            ("EVENTS_ENABLED", "off"),
            ("DATABASE_PATH", ":memory:"),
            ("STORAGE_TIMEOUT_MS", "250"),
            ("NATS_CONNECT_TIMEOUT_SECS", "3"),
        ])
        .unwrap();

        assert_eq!(config.nats.servers, vec!["nats://a:4222", "nats://b:4222"]);
        assert_eq!(config.subject_root, "acme.companies");
        assert!(!config.events_enabled);
        assert!(config.in_memory_database());
        assert_eq!(config.timeouts.storage, Duration::from_millis(250));
        assert_eq!(config.timeouts.publish, Duration::from_secs(2));
        assert_eq!(config.nats.connect_timeout, Duration::from_secs(3));
    }

    #[test]
    fn test_blank_values_use_defaults() {
        let config = load(&[("NATS_URL", "  "), ("EVENTS_ENABLED", "")]).unwrap();
        assert_eq!(config.nats.servers, vec!["nats://localhost:4222"]);
        assert!(config.events_enabled);
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        assert!(load(&[("STORAGE_TIMEOUT_MS", "soon")]).is_err());
        assert!(load(&[("EVENTS_ENABLED", "maybe")]).is_err());
        assert!(load(&[("COMPANY_SUBJECT_ROOT", "companies.>")]).is_err());
    }
}
