//! Console front end
//!
//! A thin stand-in for the claim form and the tracking and manager screens,
//! plus the ambient wiring a binary needs.
//!
//! # Architecture
//!
//! - **Config**: `CLAIMS_*` environment settings
//! - **Telemetry**: tracing subscriber setup
//! - **Views**: tracking rows, manager cards, status colours
//! - **Console**: form handling and manager decisions over a `ClaimStore`
//! - **Error Handling**: errors mapped to user-facing notices
//!
//! # Example
//!
//! ```rust
//! use interface_app::{config::AppConfig, console::{ClaimsConsole, ClaimForm}};
//!
//! let console = ClaimsConsole::new(&AppConfig::default()).unwrap();
//! let claim = console.submit_form(ClaimForm::new("40", "75")).unwrap();
//! assert_eq!(claim.lecturer_name(), "Current User");
//! ```

pub mod config;
pub mod telemetry;
pub mod views;
pub mod console;
pub mod error;

pub use config::AppConfig;
pub use console::{ClaimForm, ClaimsConsole, PickedFile};
pub use error::{AppError, Notice, Severity};
