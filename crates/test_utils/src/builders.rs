//! Test Data Builders
//!
//! Provides builder patterns for constructing claim submissions with
//! sensible defaults. Tests specify only the relevant fields.

use chrono::NaiveDate;
use domain_claims::{Claim, ClaimError, ClaimStore, ClaimSubmission, DocumentName, NumericInput};

use crate::fixtures::{AmountFixtures, DateFixtures, LecturerFixtures};

/// Builder for claim submissions
pub struct ClaimSubmissionBuilder {
    lecturer_name: String,
    hours: NumericInput,
    hourly_rate: NumericInput,
    notes: Option<String>,
    document: DocumentName,
    submitted_on: NaiveDate,
}

impl Default for ClaimSubmissionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ClaimSubmissionBuilder {
    /// Creates a new builder with default values
    pub fn new() -> Self {
        Self {
            lecturer_name: LecturerFixtures::smith().to_string(),
            hours: AmountFixtures::standard_hours().into(),
            hourly_rate: AmountFixtures::standard_rate().into(),
            notes: None,
            document: DocumentName::none(),
            submitted_on: DateFixtures::submission_date(),
        }
    }

    /// Sets the lecturer
    pub fn with_lecturer(mut self, name: impl Into<String>) -> Self {
        self.lecturer_name = name.into();
        self
    }

    /// Sets the hours worked
    pub fn with_hours(mut self, hours: impl Into<NumericInput>) -> Self {
        self.hours = hours.into();
        self
    }

    /// Sets the hourly rate
    pub fn with_rate(mut self, rate: impl Into<NumericInput>) -> Self {
        self.hourly_rate = rate.into();
        self
    }

    /// Sets the notes
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Sets the attached document
    pub fn with_document(mut self, document: impl Into<DocumentName>) -> Self {
        self.document = document.into();
        self
    }

    /// Sets the submission date
    pub fn on(mut self, date: NaiveDate) -> Self {
        self.submitted_on = date;
        self
    }

    /// Builds the submission
    pub fn build(self) -> ClaimSubmission {
        let mut submission = ClaimSubmission::new(self.lecturer_name, self.hours, self.hourly_rate)
            .with_document(self.document);
        submission.notes = self.notes;
        submission
    }

    /// Submits to `store` on the configured date
    pub fn submit_to(self, store: &ClaimStore) -> Result<Claim, ClaimError> {
        let date = self.submitted_on;
        store.submit_on(self.build(), date)
    }
}
