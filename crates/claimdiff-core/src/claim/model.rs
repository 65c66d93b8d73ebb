//! Claim document model.
//!
//! All collections are `BTreeMap` so that serialized output is stable; the
//! differs still sort their own outputs and never rely on map order.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// A decoded claim snapshot.
///
/// Immutable once decoded. The differs borrow it and never take ownership.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClaimDocument {
    /// Node name to opaque hardware inventory record (`nodesHwInfo`)
    pub nodes: BTreeMap<String, Value>,
    /// Node name to the ordered CNI plugin entries on that node (`cniPlugins`)
    pub plugin_config: BTreeMap<String, Vec<PluginEntry>>,
    /// Test identifier to test outcome (`results`)
    pub results: BTreeMap<String, TestResult>,
}

/// A named CNI network configuration attached to a node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PluginEntry {
    pub name: String,
    #[serde(
        rename = "cniVersion",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub cni_version: Option<String>,
    /// Opaque plugin descriptors; `null` decodes as empty
    #[serde(default, deserialize_with = "nullable_seq")]
    pub plugins: Vec<Value>,
}

impl PluginEntry {
    pub fn new(name: impl Into<String>, plugins: Vec<Value>) -> Self {
        Self {
            name: name.into(),
            cni_version: None,
            plugins,
        }
    }
}

fn nullable_seq<'de, D>(deserializer: D) -> std::result::Result<Vec<Value>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<Vec<Value>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Outcome of a single test case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TestStatus {
    #[serde(alias = "passed")]
    Pass,
    #[serde(alias = "failed")]
    Fail,
    #[serde(alias = "skipped")]
    Skip,
    Error,
}

impl TestStatus {
    /// Every status, in report order.
    pub const ALL: [TestStatus; 4] = [
        TestStatus::Pass,
        TestStatus::Fail,
        TestStatus::Skip,
        TestStatus::Error,
    ];

    /// Map a claim `state` string to a status.
    ///
    /// Accepts both the long claim form (`passed`) and the short form
    /// (`pass`), case-insensitively. Anything unrecognised is an `Error`.
    pub fn from_state(state: &str) -> Self {
        match state.trim().to_ascii_lowercase().as_str() {
            "pass" | "passed" => TestStatus::Pass,
            "fail" | "failed" => TestStatus::Fail,
            "skip" | "skipped" => TestStatus::Skip,
            _ => TestStatus::Error,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TestStatus::Pass => "pass",
            TestStatus::Fail => "fail",
            TestStatus::Skip => "skip",
            TestStatus::Error => "error",
        }
    }
}

impl std::fmt::Display for TestStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single test case result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestResult {
    pub id: String,
    pub status: TestStatus,
    /// Remaining fields of the claim record, uninterpreted
    #[serde(default)]
    pub metadata: Value,
}

impl TestResult {
    pub fn new(id: impl Into<String>, status: TestStatus) -> Self {
        Self {
            id: id.into(),
            status,
            metadata: Value::Null,
        }
    }
}

/// Which of the two compared claims a value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClaimSide {
    Claim1,
    Claim2,
}

impl std::fmt::Display for ClaimSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClaimSide::Claim1 => f.write_str("claim1"),
            ClaimSide::Claim2 => f.write_str("claim2"),
        }
    }
}
