//! Claim diff output types.
//!
//! All types implement `Debug, Clone, Serialize, Deserialize, PartialEq`.
//! Collections use `BTreeMap` and sorted `Vec` for deterministic serialization.

use crate::claim::{ClaimSide, PluginEntry, TestStatus};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The top-level structured diff between two claim documents.
///
/// Every section is populated even when nothing changed (empty collections,
/// `false` flags) to allow uniform downstream processing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClaimDiff {
    /// Node inventory differences (`nodesHwInfo`)
    pub nodes: NodeInventoryDiff,
    /// Per-node CNI plugin differences (`cniPlugins`)
    pub plugin_config: PluginConfigDiff,
    /// Test case result differences (`results`)
    pub test_results: TestResultsDiff,
}

impl ClaimDiff {
    /// True when no differ found anything to report.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.plugin_config.is_empty() && self.test_results.is_empty()
    }
}

/// Node names present on only one side.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct NodeInventoryDiff {
    /// Node names in claim 1 but not claim 2, sorted
    pub only_in_a: Vec<String>,
    /// Node names in claim 2 but not claim 1, sorted
    pub only_in_b: Vec<String>,
    /// True iff the two node-name sets are not identical
    pub clusters_differ: bool,
    /// True iff both sides have nodes and no node name is shared
    pub all_nodes_differ: bool,
}

impl NodeInventoryDiff {
    /// True when both claims list the same node names.
    pub fn is_empty(&self) -> bool {
        !self.clusters_differ
    }
}

/// CNI plugin differences for every node present in both claims.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PluginConfigDiff {
    /// Keyed by node name
    pub nodes: BTreeMap<String, NodePluginDiff>,
}

impl PluginConfigDiff {
    /// True when no node has a reportable plugin difference.
    pub fn is_empty(&self) -> bool {
        self.nodes.values().all(NodePluginDiff::is_empty)
    }

    /// Nodes with at least one reportable difference, in name order.
    pub fn changed_nodes(&self) -> impl Iterator<Item = (&str, &NodePluginDiff)> {
        self.nodes
            .iter()
            .filter(|(_, d)| !d.is_empty())
            .map(|(n, d)| (n.as_str(), d))
    }
}

/// CNI plugin differences on a single node.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct NodePluginDiff {
    /// Claim 1's copy of entries whose `plugins` differ from a same-named
    /// entry in claim 2, in claim 1 order
    pub changed: Vec<PluginEntry>,
    /// Entry names in claim 2 but not claim 1, sorted and deduplicated
    pub not_found_in_1: Vec<String>,
    /// Entry names in claim 1 but not claim 2, sorted and deduplicated
    pub not_found_in_2: Vec<String>,
    /// Sides with no entries for this node, in claim order. Nothing was
    /// compared when this is non-empty.
    pub no_data: Vec<ClaimSide>,
}

impl NodePluginDiff {
    pub(crate) fn no_data(sides: Vec<ClaimSide>) -> Self {
        Self {
            no_data: sides,
            ..Self::default()
        }
    }

    /// `no_data` is informational and does not count as a difference.
    pub fn is_empty(&self) -> bool {
        self.changed.is_empty() && self.not_found_in_1.is_empty() && self.not_found_in_2.is_empty()
    }
}

/// Test case result differences.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TestResultsDiff {
    /// Tests present in both claims with a different status, sorted by id
    pub status_changed: Vec<StatusChange>,
    /// Tests only in claim 2, sorted by id
    pub added: Vec<TestOutcome>,
    /// Tests only in claim 1, sorted by id
    pub removed: Vec<TestOutcome>,
    /// Per-status counts for claim 1
    pub summary_a: StatusSummary,
    /// Per-status counts for claim 2
    pub summary_b: StatusSummary,
}

impl TestResultsDiff {
    /// True when no test changed status, appeared or disappeared.
    pub fn is_empty(&self) -> bool {
        self.status_changed.is_empty() && self.added.is_empty() && self.removed.is_empty()
    }
}

/// A test whose status differs between the claims.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatusChange {
    pub id: String,
    pub status_in_a: TestStatus,
    pub status_in_b: TestStatus,
}

/// A test present on only one side.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TestOutcome {
    pub id: String,
    pub status: TestStatus,
}

/// Count of test cases per status.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatusSummary {
    pub pass: usize,
    pub fail: usize,
    pub skip: usize,
    pub error: usize,
}

impl StatusSummary {
    pub fn record(&mut self, status: TestStatus) {
        match status {
            TestStatus::Pass => self.pass += 1,
            TestStatus::Fail => self.fail += 1,
            TestStatus::Skip => self.skip += 1,
            TestStatus::Error => self.error += 1,
        }
    }

    pub fn count(&self, status: TestStatus) -> usize {
        match status {
            TestStatus::Pass => self.pass,
            TestStatus::Fail => self.fail,
            TestStatus::Skip => self.skip,
            TestStatus::Error => self.error,
        }
    }

    pub fn total(&self) -> usize {
        self.pass + self.fail + self.skip + self.error
    }
}
