//! Total amount preview
//!
//! The form shows a running total while hours and rate are being typed. This
//! path never fails: anything that is not a pair of numbers previews as zero.
//! The authoritative check happens in [`crate::ClaimStore::submit`].

use core_kernel::Money;

use crate::validation::{parse_number, NumericInput};

/// Computes `hours * rate` rounded to two decimal places for display
///
/// Returns zero when either input fails to parse or the product overflows.
/// Unlike the stored total, the preview tolerates rounding beyond 28 decimal
/// places since it is cut to cents anyway.
pub fn compute_total(hours: impl Into<NumericInput>, rate: impl Into<NumericInput>) -> Money {
    let (Some(hours), Some(rate)) = (parse_number(hours), parse_number(rate)) else {
        return Money::zero();
    };

    rate.checked_mul(hours)
        .map(|total| Money::new(total).round_for_display())
        .unwrap_or_default()
}
