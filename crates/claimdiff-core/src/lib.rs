//! claimdiff core - structural comparison of certification claim documents
//!
//! This crate provides:
//! - The claim document model and the loader that decodes claim files
//! - The diff engine: node inventory, CNI plugin configuration and test
//!   result differs, all pure and deterministic
//! - The report assembler rendering a diff as ordered text lines
//! - The error and logging facilities shared with the CLI

pub mod claim;
pub mod config;
pub mod diff;
pub mod errors;
pub mod logging_facility;

// Referenced by the logging macros
pub use claimdiff_core_types;

// Re-export commonly used types
pub use claim::{load_claim, parse_claim_bytes, ClaimDocument, ClaimSide, LoadedClaim};
pub use config::{CompareConfig, CompareOptions, PluginComparison};
pub use diff::{compare_claims, render_report, ClaimDiff};
pub use errors::{ClaimDiffError, ExError, ExErrorKind, Result};
