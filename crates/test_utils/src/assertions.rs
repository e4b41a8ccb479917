//! Custom Test Assertions
//!
//! Provides specialized assertion helpers for domain types that give
//! more meaningful error messages than standard assertions.

use core_kernel::{ClaimId, Money};
use domain_claims::{Claim, ClaimError, ClaimStatus, ValidationKind};

/// Asserts that a claim has the expected status
pub fn assert_claim_status(claim: &Claim, expected: ClaimStatus) {
    assert_eq!(
        claim.status(),
        expected,
        "Claim {} has status {}, expected {}",
        claim.id(),
        claim.status(),
        expected
    );
}

/// Asserts that a claim's total is exactly hours times rate
pub fn assert_total_consistent(claim: &Claim) {
    let expected = claim.hourly_rate().amount() * claim.hours();
    assert_eq!(
        claim.total_amount(),
        Money::new(expected),
        "Claim {} total {} does not equal {} x {}",
        claim.id(),
        claim.total_amount().amount(),
        claim.hours(),
        claim.hourly_rate().amount()
    );
}

/// Asserts that ids are strictly increasing with no gaps
pub fn assert_ids_strictly_increasing(ids: &[ClaimId]) {
    for pair in ids.windows(2) {
        assert_eq!(
            pair[1].value(),
            pair[0].value() + 1,
            "Expected {} to follow {} directly",
            pair[1],
            pair[0]
        );
    }
}

/// Asserts that a result is a validation failure of the given kind
pub fn assert_validation_error<T: std::fmt::Debug>(result: Result<T, ClaimError>, kind: ValidationKind) {
    match result {
        Err(ClaimError::Validation(actual)) => assert_eq!(actual, kind),
        other => panic!("Expected validation error {:?}, got {:?}", kind, other),
    }
}

/// Asserts that a result is a refused status transition
pub fn assert_invalid_transition<T: std::fmt::Debug>(result: Result<T, ClaimError>) {
    assert!(
        matches!(result, Err(ClaimError::InvalidStatusTransition { .. })),
        "Expected invalid transition, got {:?}",
        result
    );
}
