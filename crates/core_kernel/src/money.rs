//! Money types with precise decimal arithmetic
//!
//! Claim totals are the product of hours worked and an hourly rate. Both
//! factors are held as `rust_decimal::Decimal`, so the stored total is exact
//! and only the display path ever rounds.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Number of decimal places used when an amount is shown to a person
pub const DISPLAY_DECIMAL_PLACES: u32 = 2;

/// Errors that can occur during money operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MoneyError {
    #[error("Overflow during calculation")]
    Overflow,

    #[error("Result cannot be represented exactly")]
    PrecisionLoss,
}

/// Largest scale a `Decimal` can carry
const MAX_SCALE: u32 = 28;

/// Mantissas must fit in 96 bits
const MANTISSA_LIMIT: u128 = 1 << 96;

/// A monetary amount
///
/// Amounts are kept at full precision. Use [`Money::round_for_display`] (or
/// the `Display` impl) when presenting a value; never store the rounded form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money {
    amount: Decimal,
}

impl Money {
    /// Creates a new Money value without rounding
    pub fn new(amount: Decimal) -> Self {
        Self { amount }
    }

    /// Creates a zero amount
    pub fn zero() -> Self {
        Self {
            amount: Decimal::ZERO,
        }
    }

    /// Returns the amount
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    /// Returns true if the amount is zero
    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    /// Multiplies by a scalar (e.g. hours worked against an hourly rate)
    ///
    /// The product is exact or the call fails. `Decimal::checked_mul` quietly
    /// rounds a result that needs more than 28 decimal places or 96 bits of
    /// mantissa; here that case is [`MoneyError::PrecisionLoss`], and a
    /// magnitude beyond `Decimal::MAX` is [`MoneyError::Overflow`].
    pub fn checked_mul(&self, factor: Decimal) -> Result<Money, MoneyError> {
        exact_product(self.amount, factor).map(Self::new)
    }

    /// Rounds to two decimal places, midpoints away from zero
    pub fn round_for_display(&self) -> Self {
        Self {
            amount: self.amount.round_dp_with_strategy(
                DISPLAY_DECIMAL_PLACES,
                RoundingStrategy::MidpointAwayFromZero,
            ),
        }
    }
}

fn exact_product(a: Decimal, b: Decimal) -> Result<Decimal, MoneyError> {
    let (a, b) = (a.normalize(), b.normalize());
    let negative = a.is_sign_negative() != b.is_sign_negative();

    let Some(mut mantissa) = a
        .mantissa()
        .unsigned_abs()
        .checked_mul(b.mantissa().unsigned_abs())
    else {
        // More than 38 significant digits; either too large or rounded.
        return Err(match a.checked_mul(b) {
            None => MoneyError::Overflow,
            Some(_) => MoneyError::PrecisionLoss,
        });
    };
    if mantissa == 0 {
        return Ok(Decimal::ZERO);
    }

    let mut scale = a.scale() + b.scale();
    while scale > 0 && mantissa % 10 == 0 {
        mantissa /= 10;
        scale -= 1;
    }
    if scale > MAX_SCALE {
        return Err(MoneyError::PrecisionLoss);
    }
    if mantissa >= MANTISSA_LIMIT {
        let whole = mantissa / 10u128.pow(scale);
        return Err(if whole >= MANTISSA_LIMIT {
            MoneyError::Overflow
        } else {
            MoneyError::PrecisionLoss
        });
    }

    let signed = if negative {
        -(mantissa as i128)
    } else {
        mantissa as i128
    };
    Decimal::try_from_i128_with_scale(signed, scale).map_err(|_| MoneyError::Overflow)
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl From<Decimal> for Money {
    fn from(amount: Decimal) -> Self {
        Self::new(amount)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.dp$}",
            self.round_for_display().amount,
            dp = DISPLAY_DECIMAL_PLACES as usize
        )
    }
}
