//! Comparison configuration.
//!
//! Built once from command-line arguments and passed by value to the loader
//! and engine. Nothing here is process-global.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// How matched CNI plugin entries are compared.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PluginComparison {
    /// Changed when the `plugins` sequences differ in length
    #[default]
    LengthOnly,
    /// Changed when the `plugins` sequences are not structurally equal
    Structural,
}

/// Knobs for the diff engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompareOptions {
    pub plugin_comparison: PluginComparison,
}

/// A fully resolved comparison request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompareConfig {
    pub claim1_path: PathBuf,
    pub claim2_path: PathBuf,
    pub options: CompareOptions,
}

impl CompareConfig {
    pub fn new(claim1_path: impl Into<PathBuf>, claim2_path: impl Into<PathBuf>) -> Self {
        Self {
            claim1_path: claim1_path.into(),
            claim2_path: claim2_path.into(),
            options: CompareOptions::default(),
        }
    }

    pub fn with_options(mut self, options: CompareOptions) -> Self {
        self.options = options;
        self
    }
}
