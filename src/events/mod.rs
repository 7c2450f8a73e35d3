// Copyright (c) 2025 - Cowboy AI, Inc.
//! Company Events
//!
//! Notifications emitted after a mutation is committed. Delivery is
//! best-effort: a mutation that committed stays committed whether or not
//! its event reaches the broker.
//!
//! # Module Organization
//!
//! - [`company`] - the three mutation events and their payloads
//! - [`envelope`] - the wire wrapper added by the NATS publisher

pub mod company;
pub mod envelope;

pub use company::{CompanyDeleted, CompanyEvent, COMPANY_CREATED, COMPANY_DELETED, COMPANY_UPDATED};
pub use envelope::EventEnvelope;
