// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests Module
//!
//! - `validation`: the invariants accept exactly the legal records
//! - `patch`: merging changes only the supplied fields

mod patch;
mod validation;
