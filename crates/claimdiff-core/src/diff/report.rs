//! Human-readable report assembler for claim diffs.

use crate::claim::TestStatus;
use crate::diff::model::{ClaimDiff, NodeInventoryDiff, PluginConfigDiff, TestResultsDiff};

/// Render a [`ClaimDiff`] as ordered report lines.
///
/// Sections appear in a fixed order: cluster mismatch warning, per-node CNI
/// plugin differences, then test case summary and per-test changes. A section
/// with nothing to report is omitted, so two equivalent claims render as an
/// empty report.
pub fn render_report(diff: &ClaimDiff) -> Vec<String> {
    let mut out = Vec::new();
    render_nodes(&diff.nodes, &mut out);
    render_plugins(&diff.plugin_config, &mut out);
    render_test_results(&diff.test_results, &mut out);
    out
}

fn render_nodes(nodes: &NodeInventoryDiff, out: &mut Vec<String>) {
    if !nodes.clusters_differ {
        return;
    }
    out.push("Cluster:".to_string());
    if nodes.all_nodes_differ {
        out.push(
            "  WARNING: claim1 and claim2 describe entirely different clusters, no node names in common"
                .to_string(),
        );
    } else {
        out.push("  WARNING: node inventories differ between claim1 and claim2".to_string());
    }
    if !nodes.only_in_a.is_empty() {
        out.push(format!("  nodes only in claim1: {}", nodes.only_in_a.join(", ")));
    }
    if !nodes.only_in_b.is_empty() {
        out.push(format!("  nodes only in claim2: {}", nodes.only_in_b.join(", ")));
    }
}

fn render_plugins(plugins: &PluginConfigDiff, out: &mut Vec<String>) {
    if plugins.is_empty() {
        return;
    }
    out.push("CNI plugins:".to_string());
    for (node, diff) in plugins.changed_nodes() {
        if !diff.not_found_in_2.is_empty() {
            out.push(format!(
                "  node {}: CNIs only in claim1: {}",
                node,
                diff.not_found_in_2.join(", ")
            ));
        }
        if !diff.not_found_in_1.is_empty() {
            out.push(format!(
                "  node {}: CNIs only in claim2: {}",
                node,
                diff.not_found_in_1.join(", ")
            ));
        }
        if !diff.changed.is_empty() {
            let names: Vec<&str> = diff.changed.iter().map(|e| e.name.as_str()).collect();
            out.push(format!(
                "  node {}: CNIs in both claims with different plugins: {}",
                node,
                names.join(", ")
            ));
        }
    }
}

fn render_test_results(results: &TestResultsDiff, out: &mut Vec<String>) {
    if results.is_empty() {
        return;
    }
    out.push("Test cases:".to_string());
    out.push(format!(
        "  {:<8}{:>8}{:>8}{:>8}",
        "status", "claim1", "claim2", "delta"
    ));
    for status in TestStatus::ALL {
        let a = results.summary_a.count(status);
        let b = results.summary_b.count(status);
        out.push(format!(
            "  {:<8}{:>8}{:>8}{:>8}",
            status.as_str(),
            a,
            b,
            format!("{:+}", b as i64 - a as i64)
        ));
    }
    out.push(format!(
        "  {:<8}{:>8}{:>8}",
        "total",
        results.summary_a.total(),
        results.summary_b.total()
    ));
    for change in &results.status_changed {
        out.push(format!(
            "  status changed: {} ({} -> {})",
            change.id, change.status_in_a, change.status_in_b
        ));
    }
    for added in &results.added {
        out.push(format!("  only in claim2: {} ({})", added.id, added.status));
    }
    for removed in &results.removed {
        out.push(format!("  only in claim1: {} ({})", removed.id, removed.status));
    }
}
