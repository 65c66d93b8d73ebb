//! CNI plugin configuration differ.

use crate::claim::{ClaimSide, PluginEntry};
use crate::config::PluginComparison;
use crate::diff::model::{NodePluginDiff, PluginConfigDiff};
use crate::diff::sets::set_delta;
use std::collections::BTreeMap;

/// Compare the CNI plugin lists of every node present in both claims.
///
/// Nodes configured on only one side are skipped; the node inventory differ
/// already reports them.
pub fn diff_plugin_config(
    a: &BTreeMap<String, Vec<PluginEntry>>,
    b: &BTreeMap<String, Vec<PluginEntry>>,
    comparison: PluginComparison,
) -> PluginConfigDiff {
    let nodes = a
        .iter()
        .filter_map(|(node, entries_a)| {
            b.get(node).map(|entries_b| {
                (
                    node.clone(),
                    diff_node_plugins(node, entries_a, entries_b, comparison),
                )
            })
        })
        .collect();

    PluginConfigDiff { nodes }
}

/// Compare the plugin entries of a single node.
///
/// Entries are matched by name. A name repeated on either side matches every
/// same-named entry on the other, so a repeated entry can be reported as
/// changed more than once.
pub fn diff_node_plugins(
    node: &str,
    entries_a: &[PluginEntry],
    entries_b: &[PluginEntry],
    comparison: PluginComparison,
) -> NodePluginDiff {
    let empty = empty_sides(entries_a, entries_b);
    if !empty.is_empty() {
        for side in &empty {
            tracing::info!(
                component = module_path!(),
                op = "diff_plugin_config",
                node = node,
                side = %side,
                "node has no CNI plugin data, nothing to compare"
            );
        }
        return NodePluginDiff::no_data(empty);
    }

    let mut changed = Vec::new();
    for entry_a in entries_a {
        for entry_b in entries_b.iter().filter(|e| e.name == entry_a.name) {
            if plugins_differ(entry_a, entry_b, comparison) {
                changed.push(entry_a.clone());
            }
        }
    }

    let (not_found_in_1, not_found_in_2) = set_delta(
        entries_a.iter().map(|e| e.name.as_str()),
        entries_b.iter().map(|e| e.name.as_str()),
    );

    NodePluginDiff {
        changed,
        not_found_in_1,
        not_found_in_2,
        no_data: Vec::new(),
    }
}

/// Sides with no entries for the node, claim1 first.
fn empty_sides(entries_a: &[PluginEntry], entries_b: &[PluginEntry]) -> Vec<ClaimSide> {
    [
        (ClaimSide::Claim1, entries_a.is_empty()),
        (ClaimSide::Claim2, entries_b.is_empty()),
    ]
    .into_iter()
    .filter_map(|(side, empty)| empty.then_some(side))
    .collect()
}

/// An empty `plugins` sequence on either side is never a change.
fn plugins_differ(a: &PluginEntry, b: &PluginEntry, comparison: PluginComparison) -> bool {
    if a.plugins.is_empty() || b.plugins.is_empty() {
        return false;
    }
    match comparison {
        PluginComparison::LengthOnly => a.plugins.len() != b.plugins.len(),
        PluginComparison::Structural => a.plugins != b.plugins,
    }
}
