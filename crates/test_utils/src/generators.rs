//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating hours, rates and form text,
//! plus faker-backed lecturer names.

use domain_claims::ClaimStatus;
use fake::faker::name::en::Name;
use fake::Fake;
use proptest::prelude::*;
use rust_decimal::Decimal;

/// Strategy for strictly positive decimals with up to two decimal places
pub fn positive_decimal_strategy() -> impl Strategy<Value = Decimal> {
    (1i64..10_000_000i64).prop_map(|minor| Decimal::new(minor, 2))
}

/// Strategy for zero or negative decimals
pub fn non_positive_decimal_strategy() -> impl Strategy<Value = Decimal> {
    (-10_000_000i64..=0i64).prop_map(|minor| Decimal::new(minor, 2))
}

/// Strategy for text a user might type that is not a number
pub fn non_numeric_text_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        Just("   ".to_string()),
        "[a-zA-Z]{1,8}",
        "[0-9]{1,3}\\.[0-9]{1,3}\\.[0-9]{1,3}",
    ]
}

/// Strategy for manager decisions
pub fn decision_strategy() -> impl Strategy<Value = ClaimStatus> {
    prop_oneof![Just(ClaimStatus::Approved), Just(ClaimStatus::Rejected)]
}

/// A random realistic lecturer name
pub fn fake_lecturer_name() -> String {
    Name().fake()
}
