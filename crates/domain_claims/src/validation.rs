//! Numeric input parsing and validation
//!
//! Hours and rates arrive either as raw form text or as numbers. Two parsers
//! share one notion of "is a number":
//!
//! - [`parse_number`] is lenient and used by the total preview
//! - [`parse_positive`] is the submission gate and rejects zero and negatives

use rust_decimal::Decimal;
use std::str::FromStr;

use crate::error::{ClaimError, ValidationKind};

/// A raw hours or rate value as supplied by the caller
#[derive(Debug, Clone, PartialEq)]
pub enum NumericInput {
    /// Free text typed into a form field
    Text(String),
    /// A floating point value
    Float(f64),
    /// An exact decimal value
    Exact(Decimal),
}

impl From<&str> for NumericInput {
    fn from(text: &str) -> Self {
        NumericInput::Text(text.to_string())
    }
}

impl From<String> for NumericInput {
    fn from(text: String) -> Self {
        NumericInput::Text(text)
    }
}

impl From<&String> for NumericInput {
    fn from(text: &String) -> Self {
        NumericInput::Text(text.clone())
    }
}

impl From<f64> for NumericInput {
    fn from(value: f64) -> Self {
        NumericInput::Float(value)
    }
}

impl From<Decimal> for NumericInput {
    fn from(value: Decimal) -> Self {
        NumericInput::Exact(value)
    }
}

impl From<i32> for NumericInput {
    fn from(value: i32) -> Self {
        NumericInput::Exact(Decimal::from(value))
    }
}

impl From<i64> for NumericInput {
    fn from(value: i64) -> Self {
        NumericInput::Exact(Decimal::from(value))
    }
}

impl From<u32> for NumericInput {
    fn from(value: u32) -> Self {
        NumericInput::Exact(Decimal::from(value))
    }
}

impl NumericInput {
    /// Interprets the input as a finite decimal number
    ///
    /// Text is trimmed and may use plain or scientific notation. NaN and
    /// infinities never parse.
    pub fn to_decimal(&self) -> Option<Decimal> {
        match self {
            NumericInput::Text(text) => parse_text(text),
            NumericInput::Float(value) if value.is_finite() => Decimal::try_from(*value).ok(),
            NumericInput::Float(_) => None,
            NumericInput::Exact(value) => Some(*value),
        }
    }
}

fn parse_text(text: &str) -> Option<Decimal> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    Decimal::from_str(text)
        .or_else(|_| Decimal::from_scientific(text))
        .ok()
}

/// Lenient parse: any finite number, including zero and negatives
pub fn parse_number(input: impl Into<NumericInput>) -> Option<Decimal> {
    input.into().to_decimal()
}

/// Strict parse: a finite number greater than zero
///
/// Fails with `ClaimError::Validation(kind)` otherwise.
///
/// Accepted values are bounded by `Decimal`: magnitudes up to about 7.9e28
/// and at most 28 decimal places. Larger text such as `"1e30"` does not
/// parse, and text with more fractional digits is rounded to 28 places, so a
/// positive value below 1e-28 becomes zero. Both report `kind` like any
/// other unusable entry.
pub fn parse_positive(
    input: impl Into<NumericInput>,
    kind: ValidationKind,
) -> Result<Decimal, ClaimError> {
    match parse_number(input) {
        Some(value) if value > Decimal::ZERO => Ok(value),
        _ => Err(ClaimError::Validation(kind)),
    }
}

/// Keystroke filter for hours and rate fields: digits and `.` only
pub fn is_numeric_entry(text: &str) -> bool {
    text.chars().all(|c| c.is_ascii_digit() || c == '.')
}
