//! Demonstration data
//!
//! Seeds a store with one approved and one pending claim so both the
//! tracking and manager views have something to show on first launch.

use chrono::{Days, Local, NaiveDate};

use crate::claim::Claim;
use crate::error::ClaimError;
use crate::store::{ClaimStore, ClaimSubmission};

/// Seeds the sample claims relative to today's date
pub fn seed_sample_claims(store: &ClaimStore) -> Result<Vec<Claim>, ClaimError> {
    seed_sample_claims_as_of(store, Local::now().date_naive())
}

/// Seeds the sample claims relative to `today`
///
/// Claims go through the normal submit/approve path, so they obey every
/// store invariant and take the next free ids.
pub fn seed_sample_claims_as_of(
    store: &ClaimStore,
    today: NaiveDate,
) -> Result<Vec<Claim>, ClaimError> {
    let two_days_ago = today.checked_sub_days(Days::new(2)).unwrap_or(today);
    let yesterday = today.checked_sub_days(Days::new(1)).unwrap_or(today);

    let regular = store.submit_on(
        ClaimSubmission::new("Dr. Smith", 40, 75)
            .with_notes("Regular teaching hours for October")
            .with_document("syllabus.pdf"),
        two_days_ago,
    )?;
    let regular = store.approve(regular.id())?;

    let workshop = store.submit_on(
        ClaimSubmission::new("Prof. Johnson", 35, 80)
            .with_notes("Additional workshop preparation")
            .with_document("workshop_plan.docx"),
        yesterday,
    )?;

    tracing::debug!(count = 2, "Seeded sample claims");
    Ok(vec![regular, workshop])
}
