//! Strongly-typed identifiers for domain entities
//!
//! Claims are numbered sequentially by the store that owns them. The newtype
//! keeps claim numbers from being mixed up with hours, counts or other
//! integers flowing through the same call sites.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;
use thiserror::Error;

/// Display prefix for claim identifiers
const CLAIM_PREFIX: &str = "CLM";

/// Error returned when a claim identifier cannot be parsed
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Invalid claim id {input:?}: {source}")]
pub struct ParseClaimIdError {
    input: String,
    #[source]
    source: ParseIntError,
}

/// Sequential claim identifier, starting at 1
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClaimId(u64);

impl ClaimId {
    /// The identifier handed to the first claim of a store
    pub const FIRST: ClaimId = ClaimId(1);

    /// Wraps a raw claim number
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the raw claim number
    pub fn value(&self) -> u64 {
        self.0
    }

    /// Returns the identifier that follows this one
    pub fn next(&self) -> Self {
        Self(self.0 + 1)
    }

    /// Returns the identifier prefix for display
    pub fn prefix() -> &'static str {
        CLAIM_PREFIX
    }
}

impl Default for ClaimId {
    fn default() -> Self {
        Self::FIRST
    }
}

impl fmt::Display for ClaimId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", CLAIM_PREFIX, self.0)
    }
}

impl FromStr for ClaimId {
    type Err = ParseClaimIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Strip prefix if present
        let digits = s
            .strip_prefix(CLAIM_PREFIX)
            .and_then(|rest| rest.strip_prefix('-'))
            .unwrap_or(s);
        digits
            .parse::<u64>()
            .map(Self)
            .map_err(|source| ParseClaimIdError {
                input: s.to_string(),
                source,
            })
    }
}

impl From<u64> for ClaimId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<ClaimId> for u64 {
    fn from(id: ClaimId) -> u64 {
        id.0
    }
}
