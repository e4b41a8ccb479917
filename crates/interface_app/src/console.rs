//! Console session
//!
//! Plays the part of the claim form and the two review screens: it turns raw
//! form input into store calls and store results into views and notices.

use std::path::PathBuf;

use core_kernel::ClaimId;
use domain_claims::{
    compute_total, seed_sample_claims, select_document, Claim, ClaimStatus, ClaimStore,
    ClaimSubmission, DocumentName,
};

use crate::config::AppConfig;
use crate::error::{AppError, Notice};
use crate::views::{decision_message, format_amount, ManagerView, TrackingView};

/// A file chosen in the document picker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickedFile {
    pub path: PathBuf,
    pub size_bytes: u64,
}

/// Raw contents of the claim form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClaimForm {
    pub hours: String,
    pub hourly_rate: String,
    pub notes: String,
    pub document: Option<PickedFile>,
}

impl ClaimForm {
    pub fn new(hours: impl Into<String>, hourly_rate: impl Into<String>) -> Self {
        Self {
            hours: hours.into(),
            hourly_rate: hourly_rate.into(),
            ..Self::default()
        }
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }

    pub fn with_document(mut self, path: impl Into<PathBuf>, size_bytes: u64) -> Self {
        self.document = Some(PickedFile {
            path: path.into(),
            size_bytes,
        });
        self
    }

    /// Running total shown under the form
    pub fn total_preview(&self) -> String {
        format_amount(compute_total(self.hours.as_str(), self.hourly_rate.as_str()))
    }
}

/// A console session bound to one lecturer identity
#[derive(Debug)]
pub struct ClaimsConsole {
    store: ClaimStore,
    lecturer_name: String,
}

impl ClaimsConsole {
    /// Creates a session, seeding sample claims when configured
    pub fn new(config: &AppConfig) -> Result<Self, AppError> {
        let console = Self {
            store: ClaimStore::new(),
            lecturer_name: config.lecturer_name.clone(),
        };
        if config.seed_sample_data {
            seed_sample_claims(&console.store)?;
        }
        Ok(console)
    }

    pub fn store(&self) -> &ClaimStore {
        &self.store
    }

    pub fn lecturer_name(&self) -> &str {
        &self.lecturer_name
    }

    /// Submits the form as the session's lecturer
    pub fn submit_form(&self, form: ClaimForm) -> Result<Claim, AppError> {
        let document = match &form.document {
            Some(picked) => select_document(&picked.path, picked.size_bytes)?,
            None => DocumentName::none(),
        };

        let mut submission = ClaimSubmission::new(
            self.lecturer_name.as_str(),
            form.hours,
            form.hourly_rate,
        )
        .with_document(document);
        if !form.notes.trim().is_empty() {
            submission = submission.with_notes(form.notes);
        }

        Ok(self.store.submit(submission)?)
    }

    /// Every claim, for the tracking screen
    pub fn tracking_view(&self) -> TrackingView {
        TrackingView::from_claims(&self.store.list_all())
    }

    /// Pending claims, for the manager screen
    pub fn manager_view(&self) -> ManagerView {
        ManagerView::from_pending(&self.store.list_by_status(ClaimStatus::Pending))
    }

    /// Approves a claim and returns the confirmation
    pub fn approve(&self, id: ClaimId) -> Result<Notice, AppError> {
        let claim = self.store.approve(id)?;
        Ok(Notice::info("Claim Approved", decision_message(&claim)))
    }

    /// Rejects a claim and returns the confirmation
    pub fn reject(&self, id: ClaimId) -> Result<Notice, AppError> {
        let claim = self.store.reject(id)?;
        Ok(Notice::info("Claim Rejected", decision_message(&claim)))
    }
}
