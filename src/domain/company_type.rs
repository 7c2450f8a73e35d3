// Copyright (c) 2025 - Cowboy AI, Inc.
//! Company Legal Form
//!
//! The closed set of legal forms a company may be registered under. The wire
//! form is case-sensitive and must match exactly, including the embedded
//! space in `Sole Proprietorship`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Legal form of a company
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CompanyType {
    #[serde(rename = "Corporations")]
    Corporations,
    #[serde(rename = "NonProfit")]
    NonProfit,
    #[serde(rename = "Cooperative")]
    Cooperative,
    #[serde(rename = "Sole Proprietorship")]
    SoleProprietorship,
}

impl CompanyType {
    /// Every accepted legal form, in declaration order
    pub const ALL: [CompanyType; 4] = [
        Self::Corporations,
        Self::NonProfit,
        Self::Cooperative,
        Self::SoleProprietorship,
    ];

    /// Get the canonical wire representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Corporations => "Corporations",
            Self::NonProfit => "NonProfit",
            Self::Cooperative => "Cooperative",
            Self::SoleProprietorship => "Sole Proprietorship",
        }
    }
}

impl fmt::Display for CompanyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CompanyType {
    type Err = String;

    /// Exact match only; no case folding, no aliases
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| s.to_string())
    }
}
