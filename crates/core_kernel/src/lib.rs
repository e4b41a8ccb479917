//! Core Kernel - Foundational value types for the claim tracker
//!
//! This crate provides the building blocks used by the claims domain:
//! - Money with exact decimal arithmetic
//! - Sequential claim identifiers

pub mod money;
pub mod identifiers;

pub use money::{Money, MoneyError};
pub use identifiers::{ClaimId, ParseClaimIdError};
