//! Pre-built Test Fixtures
//!
//! Provides ready-to-use test data for claims. These fixtures are designed
//! to be consistent and predictable for unit tests.

use chrono::NaiveDate;
use core_kernel::Money;
use domain_claims::{Claim, ClaimStore, ClaimSubmission};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Fixture for hours and rate values
pub struct AmountFixtures;

impl AmountFixtures {
    /// A standard teaching month
    pub fn standard_hours() -> Decimal {
        dec!(40)
    }

    /// A standard hourly rate
    pub fn standard_rate() -> Decimal {
        dec!(75)
    }

    /// Total for the standard hours at the standard rate
    pub fn standard_total() -> Money {
        Money::new(dec!(3000))
    }

    /// Fractional hours that still produce a whole total at rate 80
    pub fn fractional_hours() -> Decimal {
        dec!(35.5)
    }
}

/// Fixture for dates
pub struct DateFixtures;

impl DateFixtures {
    /// A fixed submission date (Oct 14, 2024)
    pub fn submission_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 10, 14).unwrap()
    }

    /// A fixed "today" for seeding (Oct 16, 2024)
    pub fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 10, 16).unwrap()
    }
}

/// Fixture for lecturer identities
pub struct LecturerFixtures;

impl LecturerFixtures {
    pub fn smith() -> &'static str {
        "Dr. Smith"
    }

    pub fn johnson() -> &'static str {
        "Prof. Johnson"
    }

    /// The placeholder identity used when no authentication is wired in
    pub fn placeholder() -> &'static str {
        "Current User"
    }
}

/// Fixture for stores
pub struct StoreFixtures;

impl StoreFixtures {
    /// A store holding `count` pending claims for Dr. Smith
    pub fn with_pending(count: usize) -> (ClaimStore, Vec<Claim>) {
        let store = ClaimStore::new();
        let claims = (0..count)
            .map(|i| {
                store
                    .submit_on(
                        ClaimSubmission::new(LecturerFixtures::smith(), (i + 1) as u32, 75),
                        DateFixtures::submission_date(),
                    )
                    .expect("fixture submission is valid")
            })
            .collect();
        (store, claims)
    }
}
