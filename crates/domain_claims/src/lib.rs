//! Claims Domain
//!
//! This crate implements the lecturer claim lifecycle: submission with
//! validated hours and rate, the manager's approve/reject decision, and the
//! queries that drive the tracking and manager views.
//!
//! # Claim Lifecycle
//!
//! ```text
//! Submit -> Pending -> Approved
//!                   -> Rejected
//! ```

pub mod claim;
pub mod store;
pub mod calculator;
pub mod validation;
pub mod attachment;
pub mod sample;
pub mod error;

pub use claim::{Claim, ClaimStatus};
pub use store::{ClaimStore, ClaimSubmission};
pub use calculator::compute_total;
pub use validation::{parse_number, parse_positive, is_numeric_entry, NumericInput};
pub use attachment::{
    select_document, is_supported_document, DocumentName,
    MAX_DOCUMENT_BYTES, NO_DOCUMENT, SUPPORTED_EXTENSIONS,
};
pub use sample::{seed_sample_claims, seed_sample_claims_as_of};
pub use error::{ClaimError, ValidationKind};
