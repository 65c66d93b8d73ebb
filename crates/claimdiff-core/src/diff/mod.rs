//! Claim diff engine.
//!
//! Compares two decoded claim documents and produces a structured,
//! deterministic diff plus a human-readable report.
//!
//! ## Entry point
//!
//! ```ignore
//! use claimdiff_core::diff::{compare_claims, render_report};
//!
//! let diff = compare_claims(&claim1, &claim2, CompareOptions::default());
//! for line in render_report(&diff) {
//!     println!("{line}");
//! }
//! ```
//!
//! ## Guarantees
//!
//! - **Determinism**: every list of names or test ids is sorted, so identical
//!   inputs produce byte-identical output whatever the source map order.
//! - **Purity**: differs borrow their inputs and share no state.
//! - **Totality**: empty sections are valid input and never an error.

pub mod engine;
pub mod model;
pub mod nodes;
pub mod plugins;
pub mod report;
pub mod results;
pub mod sets;

pub use engine::compare_claims;
pub use model::ClaimDiff;
pub use report::render_report;
pub use sets::set_delta;
