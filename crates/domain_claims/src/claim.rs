//! Claim aggregate

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use core_kernel::{ClaimId, Money};
use crate::attachment::DocumentName;
use crate::error::ClaimError;

/// Claim status
///
/// ```text
/// Pending -> Approved
/// Pending -> Rejected
/// ```
///
/// Approved and Rejected are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClaimStatus {
    /// Submitted and awaiting a manager's decision
    Pending,
    /// Approved for payment
    Approved,
    /// Rejected by a manager
    Rejected,
}

impl ClaimStatus {
    /// All statuses in lifecycle order
    pub const ALL: [ClaimStatus; 3] = [
        ClaimStatus::Pending,
        ClaimStatus::Approved,
        ClaimStatus::Rejected,
    ];

    /// Returns true if no transition leaves this status
    pub fn is_terminal(&self) -> bool {
        !matches!(self, ClaimStatus::Pending)
    }

    /// Checks if a transition to `target` is legal
    pub fn can_transition_to(&self, target: ClaimStatus) -> bool {
        use ClaimStatus::*;
        matches!((self, target), (Pending, Approved) | (Pending, Rejected))
    }

    /// Label shown to users
    pub fn as_str(&self) -> &'static str {
        match self {
            ClaimStatus::Pending => "Pending",
            ClaimStatus::Approved => "Approved",
            ClaimStatus::Rejected => "Rejected",
        }
    }
}

impl fmt::Display for ClaimStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A lecturer's claim for payment of hours worked
///
/// Claims are created by [`crate::ClaimStore`] only. Everything except the
/// status is fixed at creation, and `total_amount` is always
/// `hours * hourly_rate` at full precision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Claim {
    id: ClaimId,
    lecturer_name: String,
    submitted_on: NaiveDate,
    hours: Decimal,
    hourly_rate: Money,
    total_amount: Money,
    status: ClaimStatus,
    notes: Option<String>,
    document: DocumentName,
}

impl Claim {
    /// Creates a pending claim, computing its total
    ///
    /// Callers must already have checked that `hours` and `hourly_rate` are
    /// positive. Fails with `ClaimError::Money` when the product overflows or
    /// cannot be held exactly.
    pub(crate) fn pending(
        id: ClaimId,
        lecturer_name: String,
        submitted_on: NaiveDate,
        hours: Decimal,
        hourly_rate: Money,
        notes: Option<String>,
        document: DocumentName,
    ) -> Result<Self, ClaimError> {
        let total_amount = hourly_rate.checked_mul(hours)?;

        Ok(Self {
            id,
            lecturer_name,
            submitted_on,
            hours,
            hourly_rate,
            total_amount,
            status: ClaimStatus::Pending,
            notes: notes.filter(|n| !n.trim().is_empty()),
            document,
        })
    }

    pub fn id(&self) -> ClaimId {
        self.id
    }

    pub fn lecturer_name(&self) -> &str {
        &self.lecturer_name
    }

    pub fn submitted_on(&self) -> NaiveDate {
        self.submitted_on
    }

    pub fn hours(&self) -> Decimal {
        self.hours
    }

    pub fn hourly_rate(&self) -> Money {
        self.hourly_rate
    }

    /// Hours multiplied by rate, unrounded
    pub fn total_amount(&self) -> Money {
        self.total_amount
    }

    pub fn status(&self) -> ClaimStatus {
        self.status
    }

    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    pub fn document(&self) -> &DocumentName {
        &self.document
    }

    /// Attached file name, or `"None"` when nothing was attached
    pub fn document_name(&self) -> &str {
        self.document.as_str()
    }

    pub fn is_pending(&self) -> bool {
        self.status == ClaimStatus::Pending
    }

    /// Updates the status
    pub(crate) fn update_status(&mut self, status: ClaimStatus) -> Result<(), ClaimError> {
        if !self.status.can_transition_to(status) {
            return Err(ClaimError::InvalidStatusTransition {
                id: self.id,
                from: self.status,
                to: status,
            });
        }
        self.status = status;
        Ok(())
    }
}
