//! Claim store
//!
//! The store is the single owner of every claim and of the id counter. Both
//! live behind one mutex so that id allocation plus append, and the
//! read-then-write of a status transition, are each atomic.
//!
//! # Example
//!
//! ```rust
//! use domain_claims::{ClaimStore, ClaimSubmission, ClaimStatus};
//!
//! let store = ClaimStore::new();
//! let claim = store
//!     .submit(ClaimSubmission::new("Dr. Smith", 40, 75).with_notes("October teaching"))
//!     .unwrap();
//! assert_eq!(claim.document_name(), "None");
//!
//! let approved = store.approve(claim.id()).unwrap();
//! assert_eq!(approved.status(), ClaimStatus::Approved);
//! assert!(store.approve(claim.id()).is_err());
//! ```

use chrono::{Local, NaiveDate};
use std::sync::{Mutex, MutexGuard, PoisonError};
use tracing::{debug, info, instrument, warn};

use core_kernel::{ClaimId, Money};
use crate::attachment::DocumentName;
use crate::claim::{Claim, ClaimStatus};
use crate::error::{ClaimError, ValidationKind};
use crate::validation::{parse_positive, NumericInput};

/// Raw input for a new claim
#[derive(Debug, Clone, PartialEq)]
pub struct ClaimSubmission {
    /// Identity of the submitting lecturer
    pub lecturer_name: String,
    pub hours: NumericInput,
    pub hourly_rate: NumericInput,
    pub notes: Option<String>,
    pub document: DocumentName,
}

impl ClaimSubmission {
    /// Creates a submission with no notes and no document
    pub fn new(
        lecturer_name: impl Into<String>,
        hours: impl Into<NumericInput>,
        hourly_rate: impl Into<NumericInput>,
    ) -> Self {
        Self {
            lecturer_name: lecturer_name.into(),
            hours: hours.into(),
            hourly_rate: hourly_rate.into(),
            notes: None,
            document: DocumentName::none(),
        }
    }

    /// Sets the free-text notes
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Sets the attached document's display name
    pub fn with_document(mut self, document: impl Into<DocumentName>) -> Self {
        self.document = document.into();
        self
    }
}

#[derive(Debug)]
struct StoreState {
    claims: Vec<Claim>,
    next_id: ClaimId,
}

impl StoreState {
    fn find_mut(&mut self, id: ClaimId) -> Option<&mut Claim> {
        self.claims.iter_mut().find(|c| c.id() == id)
    }
}

/// In-memory owner of all claims
///
/// Every query returns owned snapshots; stored claims change only through
/// [`ClaimStore::approve`] and [`ClaimStore::reject`]. No durability is
/// provided.
#[derive(Debug)]
pub struct ClaimStore {
    state: Mutex<StoreState>,
}

impl Default for ClaimStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ClaimStore {
    /// Creates an empty store whose first claim will be numbered 1
    pub fn new() -> Self {
        Self {
            state: Mutex::new(StoreState {
                claims: Vec::new(),
                next_id: ClaimId::FIRST,
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, StoreState> {
        // Every mutation validates before touching state, so a poisoned
        // guard still holds consistent data.
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Submits a new claim dated today
    pub fn submit(&self, submission: ClaimSubmission) -> Result<Claim, ClaimError> {
        self.submit_on(submission, Local::now().date_naive())
    }

    /// Submits a new claim with an explicit submission date
    ///
    /// Hours and rate must both be positive finite numbers. Validation and
    /// the total computation run before an id is allocated, so a failed
    /// submission leaves no gap in the numbering.
    #[instrument(skip(self, submission), fields(lecturer = %submission.lecturer_name))]
    pub fn submit_on(
        &self,
        submission: ClaimSubmission,
        submitted_on: NaiveDate,
    ) -> Result<Claim, ClaimError> {
        let ClaimSubmission {
            lecturer_name,
            hours,
            hourly_rate,
            notes,
            document,
        } = submission;

        let validated = parse_positive(hours, ValidationKind::InvalidHours).and_then(|hours| {
            parse_positive(hourly_rate, ValidationKind::InvalidRate).map(|rate| (hours, rate))
        });
        let (hours, rate) = match validated {
            Ok(values) => values,
            Err(err) => {
                warn!(error = %err, "Claim submission rejected");
                return Err(err);
            }
        };

        let mut state = self.lock();
        let claim = Claim::pending(
            state.next_id,
            lecturer_name,
            submitted_on,
            hours,
            Money::new(rate),
            notes,
            document,
        )?;
        state.next_id = state.next_id.next();
        state.claims.push(claim.clone());

        info!(
            claim_id = %claim.id(),
            total = %claim.total_amount(),
            "Claim submitted"
        );
        Ok(claim)
    }

    /// Returns every claim in submission order
    pub fn list_all(&self) -> Vec<Claim> {
        let claims = self.lock().claims.clone();
        debug!(count = claims.len(), "Listed all claims");
        claims
    }

    /// Returns claims with exactly the given status, in submission order
    pub fn list_by_status(&self, status: ClaimStatus) -> Vec<Claim> {
        let claims: Vec<Claim> = self
            .lock()
            .claims
            .iter()
            .filter(|c| c.status() == status)
            .cloned()
            .collect();
        debug!(%status, count = claims.len(), "Listed claims by status");
        claims
    }

    /// Returns claims submitted under the given lecturer name, in submission order
    pub fn list_for_lecturer(&self, lecturer_name: &str) -> Vec<Claim> {
        self.lock()
            .claims
            .iter()
            .filter(|c| c.lecturer_name() == lecturer_name)
            .cloned()
            .collect()
    }

    /// Looks up a single claim
    pub fn get(&self, id: ClaimId) -> Option<Claim> {
        self.lock().claims.iter().find(|c| c.id() == id).cloned()
    }

    /// Number of claims held
    pub fn len(&self) -> usize {
        self.lock().claims.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().claims.is_empty()
    }

    /// Approves a pending claim
    pub fn approve(&self, id: ClaimId) -> Result<Claim, ClaimError> {
        self.transition(id, ClaimStatus::Approved)
    }

    /// Rejects a pending claim
    pub fn reject(&self, id: ClaimId) -> Result<Claim, ClaimError> {
        self.transition(id, ClaimStatus::Rejected)
    }

    #[instrument(skip(self, id), fields(claim_id = %id))]
    fn transition(&self, id: ClaimId, target: ClaimStatus) -> Result<Claim, ClaimError> {
        let mut state = self.lock();
        let Some(claim) = state.find_mut(id) else {
            warn!("Claim not found");
            return Err(ClaimError::ClaimNotFound(id));
        };

        if let Err(err) = claim.update_status(target) {
            warn!(current = %claim.status(), %target, "Status transition refused");
            return Err(err);
        }

        info!(status = %target, lecturer = %claim.lecturer_name(), "Claim status updated");
        Ok(claim.clone())
    }
}
