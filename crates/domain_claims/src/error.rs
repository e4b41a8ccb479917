//! Claims domain errors

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use core_kernel::{ClaimId, MoneyError};
use crate::claim::ClaimStatus;

/// Which submitted field failed validation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationKind {
    /// Hours worked missing, non-numeric, zero or negative
    InvalidHours,
    /// Hourly rate missing, non-numeric, zero or negative
    InvalidRate,
}

impl fmt::Display for ValidationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationKind::InvalidHours => write!(f, "please enter valid hours worked"),
            ValidationKind::InvalidRate => write!(f, "please enter a valid hourly rate"),
        }
    }
}

/// Errors that can occur in the claims domain
///
/// Every failing store operation leaves the store exactly as it found it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClaimError {
    #[error("Validation error: {0}")]
    Validation(ValidationKind),

    #[error("Claim not found: {0}")]
    ClaimNotFound(ClaimId),

    #[error("Invalid status transition for {id} from {from} to {to}")]
    InvalidStatusTransition {
        id: ClaimId,
        from: ClaimStatus,
        to: ClaimStatus,
    },

    #[error("Document {name} is {size_bytes} bytes, exceeding the {limit_bytes} byte limit")]
    DocumentTooLarge {
        name: String,
        size_bytes: u64,
        limit_bytes: u64,
    },

    #[error("Amount error: {0}")]
    Money(#[from] MoneyError),
}

impl ClaimError {
    /// Returns true for errors the submitter can fix by correcting input
    pub fn is_validation(&self) -> bool {
        matches!(self, ClaimError::Validation(_))
    }

    /// Returns the failed field for validation errors
    pub fn validation_kind(&self) -> Option<ValidationKind> {
        match self {
            ClaimError::Validation(kind) => Some(*kind),
            _ => None,
        }
    }
}
