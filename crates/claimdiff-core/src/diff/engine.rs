//! Claim diff computation engine.
//!
//! The core entry point is [`compare_claims`], which accepts two decoded claim
//! documents and produces a [`ClaimDiff`]. The engine never fails: every
//! input shape, including empty sections, yields a diff.

use crate::claim::ClaimDocument;
use crate::config::CompareOptions;
use crate::diff::model::ClaimDiff;
use crate::diff::nodes::diff_nodes;
use crate::diff::plugins::diff_plugin_config;
use crate::diff::results::diff_test_results;
use crate::{log_op_end, log_op_start};

/// Compute a structured, deterministic diff between two claim documents.
///
/// Differs run in order: node inventory, CNI plugin configuration, test
/// results. Neither input is modified.
pub fn compare_claims(a: &ClaimDocument, b: &ClaimDocument, options: CompareOptions) -> ClaimDiff {
    log_op_start!(
        "compare_claims",
        nodes_len_a = a.nodes.len() as u64,
        nodes_len_b = b.nodes.len() as u64,
        results_len_a = a.results.len() as u64,
        results_len_b = b.results.len() as u64
    );
    let start = std::time::Instant::now();

    let nodes = diff_nodes(&a.nodes, &b.nodes);
    if nodes.clusters_differ {
        tracing::warn!(
            component = module_path!(),
            op = "compare_claims",
            all_nodes_differ = nodes.all_nodes_differ,
            "claims describe different node inventories"
        );
    }

    let plugin_config =
        diff_plugin_config(&a.plugin_config, &b.plugin_config, options.plugin_comparison);
    let test_results = diff_test_results(&a.results, &b.results);

    let diff = ClaimDiff {
        nodes,
        plugin_config,
        test_results,
    };

    log_op_end!(
        "compare_claims",
        duration_ms = start.elapsed().as_millis() as u64,
        identical = diff.is_empty()
    );

    diff
}
