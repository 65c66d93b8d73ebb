//! Claim documents: the typed model and the loader that decodes claim files.
//!
//! A claim file is the JSON report a certification run leaves behind:
//!
//! ```json
//! { "claim": { "nodes": { "nodesHwInfo": {}, "cniPlugins": {} }, "results": {} } }
//! ```
//!
//! Only the three sections the diff engine compares are decoded; everything
//! else in the file is ignored.

pub mod loader;
pub mod model;

pub use loader::{load_claim, parse_claim_bytes, LoadedClaim};
pub use model::{ClaimDocument, ClaimSide, PluginEntry, TestResult, TestStatus};
