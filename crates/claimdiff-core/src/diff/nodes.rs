//! Node inventory differ.

use crate::diff::model::NodeInventoryDiff;
use crate::diff::sets::set_delta;
use serde_json::Value;
use std::collections::BTreeMap;

/// Compare the node inventories (`nodesHwInfo`) of two claims by node name.
///
/// Inventory records themselves are opaque; only presence is compared.
pub fn diff_nodes(
    a: &BTreeMap<String, Value>,
    b: &BTreeMap<String, Value>,
) -> NodeInventoryDiff {
    let (only_in_b, only_in_a) = set_delta(
        a.keys().map(String::as_str),
        b.keys().map(String::as_str),
    );
    let clusters_differ = !only_in_a.is_empty() || !only_in_b.is_empty();
    let all_nodes_differ =
        !a.is_empty() && !b.is_empty() && a.keys().all(|node| !b.contains_key(node));

    NodeInventoryDiff {
        only_in_a,
        only_in_b,
        clusters_differ,
        all_nodes_differ,
    }
}
