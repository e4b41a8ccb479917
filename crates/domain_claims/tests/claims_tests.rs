//! Behavioural tests for domain_claims

use chrono::NaiveDate;
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use core_kernel::{ClaimId, Money, MoneyError};
use domain_claims::{
    compute_total, seed_sample_claims_as_of, select_document, ClaimError, ClaimStatus, ClaimStore,
    ClaimSubmission, DocumentName, ValidationKind, MAX_DOCUMENT_BYTES,
};
use test_utils::{
    assert_claim_status, assert_ids_strictly_increasing, assert_invalid_transition,
    assert_total_consistent, assert_validation_error, decision_strategy, fake_lecturer_name,
    non_numeric_text_strategy, non_positive_decimal_strategy, positive_decimal_strategy,
    AmountFixtures, ClaimSubmissionBuilder, DateFixtures, LecturerFixtures, StoreFixtures,
};

// ============================================================================
// Submission
// ============================================================================

mod submission_tests {
    use super::*;

    #[test]
    fn test_submit_creates_pending_claim() {
        let store = ClaimStore::new();
        let claim = ClaimSubmissionBuilder::new()
            .with_notes("notes")
            .submit_to(&store)
            .unwrap();

        assert_eq!(claim.id(), ClaimId::FIRST);
        assert_eq!(claim.lecturer_name(), "Dr. Smith");
        assert_eq!(claim.submitted_on(), DateFixtures::submission_date());
        assert_eq!(claim.hours(), AmountFixtures::standard_hours());
        assert_eq!(claim.hourly_rate(), Money::new(AmountFixtures::standard_rate()));
        assert_eq!(claim.total_amount(), AmountFixtures::standard_total());
        assert_eq!(claim.notes(), Some("notes"));
        assert_claim_status(&claim, ClaimStatus::Pending);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_submit_stores_full_precision_total() {
        let store = ClaimStore::new();
        let claim = ClaimSubmissionBuilder::new()
            .with_hours("1.333")
            .with_rate("1.5")
            .submit_to(&store)
            .unwrap();

        assert_eq!(claim.total_amount().amount(), dec!(1.9995));
        assert_eq!(compute_total("1.333", "1.5").amount(), dec!(2.00));
    }

    #[test]
    fn test_submit_fractional_hours() {
        let store = ClaimStore::new();
        let claim = ClaimSubmissionBuilder::new()
            .with_hours(AmountFixtures::fractional_hours())
            .with_rate(80)
            .submit_to(&store)
            .unwrap();
        assert_eq!(claim.total_amount().amount(), dec!(2840));
        assert_total_consistent(&claim);
    }

    #[test]
    fn test_submit_refuses_total_below_smallest_decimal() {
        let store = ClaimStore::new();
        let err = store
            .submit(ClaimSubmission::new("Dr. Smith", "1e-20", "1e-20"))
            .unwrap_err();
        assert_eq!(err, ClaimError::Money(MoneyError::PrecisionLoss));
        assert!(store.is_empty());

        let next = ClaimSubmissionBuilder::new().submit_to(&store).unwrap();
        assert_eq!(next.id(), ClaimId::FIRST);
    }

    #[test]
    fn test_submit_refuses_total_that_would_be_rounded() {
        let store = ClaimStore::new();
        let result = store.submit(ClaimSubmission::new(
            "Dr. Smith",
            "1.23456789012345678901234567",
            "9.87654321098765432109876543",
        ));
        assert_eq!(result, Err(ClaimError::Money(MoneyError::PrecisionLoss)));
        assert!(store.list_all().is_empty());
    }

    #[test]
    fn test_submit_accepts_text_input() {
        let store = ClaimStore::new();
        let claim = store
            .submit(ClaimSubmission::new("Prof. Johnson", " 35.5 ", "80"))
            .unwrap();
        assert_eq!(claim.total_amount().amount(), dec!(2840));
    }

    #[test]
    fn test_submit_uses_today_when_undated() {
        let store = ClaimStore::new();
        let before = chrono::Local::now().date_naive();
        let claim = store.submit(ClaimSubmission::new("A", 1, 1)).unwrap();
        let after = chrono::Local::now().date_naive();
        assert!(claim.submitted_on() >= before && claim.submitted_on() <= after);
    }

    #[test]
    fn test_missing_document_becomes_none_sentinel() {
        let store = ClaimStore::new();
        let claim = ClaimSubmissionBuilder::new().submit_to(&store).unwrap();
        assert_eq!(claim.document_name(), "None");
        assert!(!claim.document().is_attached());
    }

    #[test]
    fn test_selected_document_is_stored_by_name() {
        let store = ClaimStore::new();
        let document = select_document("/tmp/uploads/syllabus.pdf", MAX_DOCUMENT_BYTES).unwrap();
        let claim = ClaimSubmissionBuilder::new()
            .with_document(document)
            .submit_to(&store)
            .unwrap();
        assert_eq!(claim.document_name(), "syllabus.pdf");
    }

    #[test]
    fn test_invalid_hours() {
        let store = ClaimStore::new();
        for hours in ["", "abc", "0", "-3"] {
            let result = ClaimSubmissionBuilder::new().with_hours(hours).submit_to(&store);
            assert_validation_error(result, ValidationKind::InvalidHours);
        }
        assert!(store.is_empty());
    }

    #[test]
    fn test_invalid_rate() {
        let store = ClaimStore::new();
        for rate in ["", "abc", "0", "-3"] {
            let result = ClaimSubmissionBuilder::new().with_rate(rate).submit_to(&store);
            assert_validation_error(result, ValidationKind::InvalidRate);
        }
        let nan = ClaimSubmissionBuilder::new().with_rate(f64::NAN).submit_to(&store);
        assert_validation_error(nan, ValidationKind::InvalidRate);
        assert!(store.is_empty());
    }

    #[test]
    fn test_validation_error_message() {
        let err = ClaimError::Validation(ValidationKind::InvalidHours);
        assert!(err.is_validation());
        assert_eq!(err.to_string(), "Validation error: please enter valid hours worked");
    }
}

// ============================================================================
// Approval workflow
// ============================================================================

mod workflow_tests {
    use super::*;

    #[test]
    fn test_approve_pending_claim() {
        let (store, claims) = StoreFixtures::with_pending(1);
        let approved = store.approve(claims[0].id()).unwrap();
        assert_claim_status(&approved, ClaimStatus::Approved);
        assert_claim_status(&store.get(claims[0].id()).unwrap(), ClaimStatus::Approved);
    }

    #[test]
    fn test_reject_pending_claim() {
        let (store, claims) = StoreFixtures::with_pending(1);
        let rejected = store.reject(claims[0].id()).unwrap();
        assert_claim_status(&rejected, ClaimStatus::Rejected);
    }

    #[test]
    fn test_unknown_id_is_not_found() {
        let (store, _) = StoreFixtures::with_pending(2);
        let missing = ClaimId::new(99);
        assert_eq!(store.approve(missing), Err(ClaimError::ClaimNotFound(missing)));
        assert_eq!(store.reject(missing), Err(ClaimError::ClaimNotFound(missing)));
    }

    #[test]
    fn test_approve_then_reject_is_refused() {
        let (store, claims) = StoreFixtures::with_pending(1);
        let id = claims[0].id();
        store.approve(id).unwrap();

        assert_eq!(
            store.reject(id),
            Err(ClaimError::InvalidStatusTransition {
                id,
                from: ClaimStatus::Approved,
                to: ClaimStatus::Rejected,
            })
        );
        assert_claim_status(&store.get(id).unwrap(), ClaimStatus::Approved);
    }

    #[test]
    fn test_reject_then_approve_is_refused() {
        let (store, claims) = StoreFixtures::with_pending(1);
        let id = claims[0].id();
        store.reject(id).unwrap();

        assert_invalid_transition(store.approve(id));
        assert_invalid_transition(store.reject(id));
        assert_claim_status(&store.get(id).unwrap(), ClaimStatus::Rejected);
    }

    #[test]
    fn test_transitions_only_touch_the_target_claim() {
        let (store, claims) = StoreFixtures::with_pending(3);
        store.approve(claims[1].id()).unwrap();

        let statuses: Vec<ClaimStatus> = store.list_all().iter().map(|c| c.status()).collect();
        assert_eq!(
            statuses,
            vec![ClaimStatus::Pending, ClaimStatus::Approved, ClaimStatus::Pending]
        );
    }

    #[test]
    fn test_end_to_end() {
        let store = ClaimStore::new();
        let claim = store
            .submit(ClaimSubmission::new("Dr. Smith", 40, 75).with_notes("notes"))
            .unwrap();
        assert_eq!(claim.status(), ClaimStatus::Pending);
        assert_eq!(claim.document_name(), "None");
        assert_eq!(claim.total_amount().amount(), dec!(3000));

        let approved = store.approve(claim.id()).unwrap();
        assert_eq!(approved.status(), ClaimStatus::Approved);

        assert!(matches!(
            store.approve(claim.id()),
            Err(ClaimError::InvalidStatusTransition { .. })
        ));
    }
}

// ============================================================================
// Queries
// ============================================================================

mod query_tests {
    use super::*;

    #[test]
    fn test_list_all_in_insertion_order() {
        let store = ClaimStore::new();
        let names: Vec<String> = (0..5).map(|_| fake_lecturer_name()).collect();
        for name in &names {
            ClaimSubmissionBuilder::new().with_lecturer(name.clone()).submit_to(&store).unwrap();
        }

        let listed: Vec<String> = store
            .list_all()
            .iter()
            .map(|c| c.lecturer_name().to_string())
            .collect();
        assert_eq!(listed, names);
    }

    #[test]
    fn test_list_by_status() {
        let (store, claims) = StoreFixtures::with_pending(4);
        store.approve(claims[0].id()).unwrap();
        store.reject(claims[2].id()).unwrap();

        let pending: Vec<ClaimId> = store
            .list_by_status(ClaimStatus::Pending)
            .iter()
            .map(|c| c.id())
            .collect();
        assert_eq!(pending, vec![claims[1].id(), claims[3].id()]);
        assert_eq!(store.list_by_status(ClaimStatus::Approved).len(), 1);
        assert_eq!(store.list_by_status(ClaimStatus::Rejected).len(), 1);
    }

    #[test]
    fn test_list_for_lecturer() {
        let store = ClaimStore::new();
        ClaimSubmissionBuilder::new().with_lecturer(LecturerFixtures::smith()).submit_to(&store).unwrap();
        ClaimSubmissionBuilder::new().with_lecturer(LecturerFixtures::johnson()).submit_to(&store).unwrap();
        ClaimSubmissionBuilder::new().with_lecturer(LecturerFixtures::smith()).submit_to(&store).unwrap();

        let smith = store.list_for_lecturer(LecturerFixtures::smith());
        assert_eq!(smith.len(), 2);
        assert!(smith.iter().all(|c| c.lecturer_name() == "Dr. Smith"));
        assert!(store.list_for_lecturer("Nobody").is_empty());
        assert_eq!(store.list_all().len(), 3);
    }

    #[test]
    fn test_get_missing_claim() {
        let store = ClaimStore::new();
        assert!(store.get(ClaimId::FIRST).is_none());
    }

    #[test]
    fn test_sample_data() {
        let store = ClaimStore::new();
        seed_sample_claims_as_of(&store, DateFixtures::today()).unwrap();

        let all = store.list_all();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].lecturer_name(), "Dr. Smith");
        assert_eq!(all[0].document_name(), "syllabus.pdf");
        assert_eq!(all[0].submitted_on(), NaiveDate::from_ymd_opt(2024, 10, 14).unwrap());
        assert_eq!(all[1].submitted_on(), NaiveDate::from_ymd_opt(2024, 10, 15).unwrap());
        assert_eq!(store.list_by_status(ClaimStatus::Pending)[0].lecturer_name(), "Prof. Johnson");

        // Next submission continues the numbering
        let next = ClaimSubmissionBuilder::new().submit_to(&store).unwrap();
        assert_eq!(next.id().value(), 3);
    }

    #[test]
    fn test_claim_serializes_plain_values() {
        let store = ClaimStore::new();
        let claim = ClaimSubmissionBuilder::new()
            .with_document(DocumentName::from("plan.xlsx"))
            .submit_to(&store)
            .unwrap();
        let json = serde_json::to_value(&claim).unwrap();
        assert_eq!(json["status"], "Pending");
        assert_eq!(json["document"], "plan.xlsx");
        assert_eq!(json["id"], 1);
    }
}

// ============================================================================
// Concurrency
// ============================================================================

mod concurrency_tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_concurrent_submissions_get_unique_ids() {
        let store = Arc::new(ClaimStore::new());
        let handles: Vec<_> = (0..8)
            .map(|t| {
                let store = Arc::clone(&store);
                thread::spawn(move || {
                    (0..25)
                        .map(|_| {
                            store
                                .submit(ClaimSubmission::new(format!("Lecturer {t}"), 1, 1))
                                .unwrap()
                                .id()
                        })
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        let mut ids: Vec<ClaimId> = handles.into_iter().flat_map(|h| h.join().unwrap()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 200);
        assert_ids_strictly_increasing(&ids);
    }

    #[test]
    fn test_concurrent_decisions_apply_exactly_once() {
        let (store, claims) = StoreFixtures::with_pending(1);
        let store = Arc::new(store);
        let id = claims[0].id();

        let handles: Vec<_> = (0..8)
            .map(|t| {
                let store = Arc::clone(&store);
                thread::spawn(move || {
                    if t % 2 == 0 {
                        store.approve(id).is_ok()
                    } else {
                        store.reject(id).is_ok()
                    }
                })
            })
            .collect();

        let successes = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|ok| *ok)
            .count();
        assert_eq!(successes, 1);
        assert!(store.get(id).unwrap().status().is_terminal());
    }
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn valid_submissions_store_exact_totals(
        hours in positive_decimal_strategy(),
        rate in positive_decimal_strategy()
    ) {
        let store = ClaimStore::new();
        let claim = store.submit(ClaimSubmission::new("Dr. Smith", hours, rate)).unwrap();
        prop_assert_eq!(claim.total_amount().amount(), hours * rate);
        assert_total_consistent(&claim);
    }

    #[test]
    fn non_positive_hours_never_mutate(
        hours in non_positive_decimal_strategy(),
        rate in positive_decimal_strategy()
    ) {
        let (store, _) = StoreFixtures::with_pending(2);
        let result = store.submit(ClaimSubmission::new("Dr. Smith", hours, rate));
        prop_assert_eq!(result, Err(ClaimError::Validation(ValidationKind::InvalidHours)));
        prop_assert_eq!(store.len(), 2);
    }

    #[test]
    fn non_positive_rate_never_mutates(
        hours in positive_decimal_strategy(),
        rate in non_positive_decimal_strategy()
    ) {
        let (store, _) = StoreFixtures::with_pending(2);
        let result = store.submit(ClaimSubmission::new("Dr. Smith", hours, rate));
        prop_assert_eq!(result, Err(ClaimError::Validation(ValidationKind::InvalidRate)));
        prop_assert_eq!(store.len(), 2);
    }

    #[test]
    fn non_numeric_text_previews_zero(text in non_numeric_text_strategy()) {
        prop_assert_eq!(compute_total(text.clone(), "75"), Money::zero());
        prop_assert_eq!(compute_total("40", text), Money::zero());
    }

    #[test]
    fn ids_have_no_gaps_from_failed_calls(attempts in proptest::collection::vec(any::<bool>(), 1..40)) {
        let store = ClaimStore::new();
        let mut ids = Vec::new();
        for valid in attempts {
            let hours = if valid { Decimal::ONE } else { Decimal::ZERO };
            if let Ok(claim) = store.submit(ClaimSubmission::new("Dr. Smith", hours, 10)) {
                ids.push(claim.id());
            }
        }
        if let Some(first) = ids.first() {
            prop_assert_eq!(*first, ClaimId::FIRST);
        }
        assert_ids_strictly_increasing(&ids);
        prop_assert_eq!(ids.len(), store.len());
    }

    #[test]
    fn pending_list_is_ordered_subset_of_all(
        decisions in proptest::collection::vec(proptest::option::of(decision_strategy()), 0..20)
    ) {
        let (store, claims) = StoreFixtures::with_pending(decisions.len());
        for (claim, decision) in claims.iter().zip(&decisions) {
            match decision {
                Some(ClaimStatus::Approved) => { store.approve(claim.id()).unwrap(); }
                Some(ClaimStatus::Rejected) => { store.reject(claim.id()).unwrap(); }
                _ => {}
            }
        }

        let expected: Vec<_> = store.list_all().into_iter().filter(|c| c.is_pending()).collect();
        prop_assert_eq!(store.list_by_status(ClaimStatus::Pending), expected);
    }

    #[test]
    fn second_decision_is_always_refused(
        first in decision_strategy(),
        second in decision_strategy()
    ) {
        let (store, claims) = StoreFixtures::with_pending(1);
        let id = claims[0].id();
        let decide = |status: ClaimStatus| match status {
            ClaimStatus::Approved => store.approve(id),
            _ => store.reject(id),
        };

        decide(first).unwrap();
        let refused = matches!(decide(second), Err(ClaimError::InvalidStatusTransition { .. }));
        prop_assert!(refused);
        prop_assert_eq!(store.get(id).unwrap().status(), first);
    }
}
