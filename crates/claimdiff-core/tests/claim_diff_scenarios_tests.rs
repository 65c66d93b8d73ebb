//! End-to-end diff scenarios: claim bytes -> decode -> compare -> report.
//!
//! All tests operate on in-memory claim bytes (no I/O).

mod common;

use claimdiff_core::claim::{parse_claim_bytes, ClaimSide, TestStatus};
use claimdiff_core::diff::model::{StatusChange, TestOutcome};
use claimdiff_core::{compare_claims, render_report, ClaimDiff, CompareOptions, PluginComparison};
use common::{claim_json, hw_info, results, to_bytes};
use serde_json::{json, Value};

fn diff_of(a: &Value, b: &Value) -> ClaimDiff {
    diff_with(a, b, CompareOptions::default())
}

fn diff_with(a: &Value, b: &Value, options: CompareOptions) -> ClaimDiff {
    let claim1 = parse_claim_bytes(&to_bytes(a)).unwrap();
    let claim2 = parse_claim_bytes(&to_bytes(b)).unwrap();
    compare_claims(&claim1, &claim2, options)
}

fn baseline() -> Value {
    claim_json(
        hw_info(&["worker-0", "worker-1"]),
        json!({
            "worker-0": [
                {"name": "flannel", "cniVersion": "0.3.1", "plugins": [{"type": "flannel"}, {"type": "portmap"}]},
                {"name": "podman", "plugins": [{"type": "bridge"}]}
            ],
            "worker-1": [
                {"name": "flannel", "plugins": [{"type": "flannel"}]}
            ]
        }),
        results(&[
            ("networking-icmpv4-connectivity", "passed"),
            ("lifecycle-pod-owner-type", "failed"),
            ("observability-crd-status", "skipped"),
        ]),
    )
}

// S1: partially overlapping node inventories
#[test]
fn test_node_inventory_mismatch() {
    let a = claim_json(hw_info(&["n1", "n2"]), json!({}), json!({}));
    let b = claim_json(hw_info(&["n2", "n3"]), json!({}), json!({}));
    let diff = diff_of(&a, &b);

    assert_eq!(diff.nodes.only_in_a, vec!["n1"]);
    assert_eq!(diff.nodes.only_in_b, vec!["n3"]);
    assert!(diff.nodes.clusters_differ);

    let report = render_report(&diff);
    assert_eq!(report[0], "Cluster:");
    assert!(report[1].starts_with("  WARNING"));
}

// S2: same CNI name, different plugin count
#[test]
fn test_plugin_count_change() {
    let a = claim_json(
        hw_info(&["n1"]),
        json!({"n1": [{"name": "flannel", "plugins": ["p1", "p2"]}]}),
        json!({}),
    );
    let b = claim_json(
        hw_info(&["n1"]),
        json!({"n1": [{"name": "flannel", "plugins": ["p1"]}]}),
        json!({}),
    );
    let diff = diff_of(&a, &b);

    let node = &diff.plugin_config.nodes["n1"];
    assert_eq!(node.changed.len(), 1);
    assert_eq!(node.changed[0].name, "flannel");
    assert_eq!(node.changed[0].plugins, vec![json!("p1"), json!("p2")]);

    let report = render_report(&diff);
    assert_eq!(
        report,
        vec![
            "CNI plugins:".to_string(),
            "  node n1: CNIs in both claims with different plugins: flannel".to_string(),
        ]
    );
}

// S3: test status change plus a new test
#[test]
fn test_result_status_change_and_addition() {
    let a = claim_json(json!({}), json!({}), results(&[("t1", "passed"), ("t2", "failed")]));
    let b = claim_json(
        json!({}),
        json!({}),
        results(&[("t1", "passed"), ("t2", "passed"), ("t3", "skipped")]),
    );
    let diff = diff_of(&a, &b);

    assert_eq!(
        diff.test_results.status_changed,
        vec![StatusChange {
            id: "t2".to_string(),
            status_in_a: TestStatus::Fail,
            status_in_b: TestStatus::Pass,
        }]
    );
    assert_eq!(
        diff.test_results.added,
        vec![TestOutcome {
            id: "t3".to_string(),
            status: TestStatus::Skip,
        }]
    );
    assert!(diff.test_results.removed.is_empty());

    let report = render_report(&diff);
    assert!(report.contains(&"  status changed: t2 (fail -> pass)".to_string()));
    assert!(report.contains(&"  only in claim2: t3 (skip)".to_string()));
}

// S4: identical documents render an empty report
#[test]
fn test_identical_claims_render_empty_report() {
    let diff = diff_of(&baseline(), &baseline());
    assert!(diff.is_empty());
    assert!(render_report(&diff).is_empty());
}

// Non-compared sections do not affect the diff
#[test]
fn test_unrelated_sections_are_ignored() {
    let a = baseline();
    let mut b = baseline();
    b["claim"]["metadata"]["startTime"] = json!("2026-06-01T00:00:00Z");
    b["claim"]["results"]["networking-icmpv4-connectivity"]["duration"] = json!(999);
    let diff = diff_of(&a, &b);
    assert!(diff.is_empty());
}

// Differences in one section do not leak into the others
#[test]
fn test_sections_are_independent() {
    let a = baseline();
    let mut b = baseline();
    b["claim"]["results"]["lifecycle-pod-owner-type"]["state"] = json!("passed");
    let diff = diff_of(&a, &b);

    assert!(diff.nodes.is_empty());
    assert!(diff.plugin_config.is_empty());
    assert_eq!(diff.test_results.status_changed.len(), 1);

    let report = render_report(&diff);
    assert_eq!(report[0], "Test cases:");
}

// A node with an empty CNI list on one side is "no data", not a removal
#[test]
fn test_empty_plugin_list_is_not_reported() {
    let a = baseline();
    let mut b = baseline();
    b["claim"]["nodes"]["cniPlugins"]["worker-1"] = json!([]);
    let diff = diff_of(&a, &b);

    let node = &diff.plugin_config.nodes["worker-1"];
    assert!(node.is_empty());
    assert_eq!(node.no_data, vec![ClaimSide::Claim2]);
    assert!(render_report(&diff).is_empty());
}

// CNI names only on one side, reported per node in sorted order
#[test]
fn test_plugin_names_added_and_removed() {
    let a = baseline();
    let mut b = baseline();
    b["claim"]["nodes"]["cniPlugins"]["worker-0"] = json!([
        {"name": "flannel", "plugins": [{"type": "flannel"}, {"type": "portmap"}]},
        {"name": "multus", "plugins": [{"type": "multus"}]},
        {"name": "calico", "plugins": [{"type": "calico"}]}
    ]);
    let diff = diff_of(&a, &b);

    let node = &diff.plugin_config.nodes["worker-0"];
    assert_eq!(node.not_found_in_1, vec!["calico", "multus"]);
    assert_eq!(node.not_found_in_2, vec!["podman"]);
    assert!(node.changed.is_empty());

    let report = render_report(&diff);
    assert_eq!(
        report,
        vec![
            "CNI plugins:".to_string(),
            "  node worker-0: CNIs only in claim1: podman".to_string(),
            "  node worker-0: CNIs only in claim2: calico, multus".to_string(),
        ]
    );
}

// Structural plugin comparison catches same-length edits
#[test]
fn test_structural_comparison_is_opt_in() {
    let a = baseline();
    let mut b = baseline();
    b["claim"]["nodes"]["cniPlugins"]["worker-1"] =
        json!([{"name": "flannel", "plugins": [{"type": "bridge"}]}]);

    assert!(diff_of(&a, &b).is_empty());

    let structural = diff_with(
        &a,
        &b,
        CompareOptions {
            plugin_comparison: PluginComparison::Structural,
        },
    );
    assert_eq!(structural.plugin_config.nodes["worker-1"].changed.len(), 1);
}

// Report section order: cluster, plugins, tests
#[test]
fn test_report_section_order() {
    let a = baseline();
    let mut b = baseline();
    b["claim"]["nodes"]["nodesHwInfo"]["worker-2"] = json!({});
    b["claim"]["nodes"]["cniPlugins"]["worker-1"] =
        json!([{"name": "flannel", "plugins": [{"type": "flannel"}, {"type": "tuning"}]}]);
    b["claim"]["results"]["observability-crd-status"]["state"] = json!("failed");

    let report = render_report(&diff_of(&a, &b));
    let pos = |header: &str| report.iter().position(|l| l == header).unwrap();
    assert!(pos("Cluster:") < pos("CNI plugins:"));
    assert!(pos("CNI plugins:") < pos("Test cases:"));
}

// Map order in the source file never changes the output
#[test]
fn test_output_independent_of_source_key_order() {
    let a = claim_json(
        hw_info(&["n1"]),
        json!({}),
        results(&[("b", "passed"), ("a", "passed"), ("c", "passed")]),
    );
    let b_text = r#"{"claim":{"nodes":{"nodesHwInfo":{"n1":{}}},"results":{
        "c":{"state":"failed"},"a":{"state":"failed"},"b":{"state":"failed"}}}}"#;

    let claim1 = parse_claim_bytes(&to_bytes(&a)).unwrap();
    let claim2 = parse_claim_bytes(b_text.as_bytes()).unwrap();
    let diff = compare_claims(&claim1, &claim2, CompareOptions::default());

    let ids: Vec<&str> = diff
        .test_results
        .status_changed
        .iter()
        .map(|c| c.id.as_str())
        .collect();
    assert_eq!(ids, vec!["a", "b", "c"]);
}

// The structured diff is stable through JSON
#[test]
fn test_diff_serialization_is_deterministic() {
    let a = baseline();
    let mut b = baseline();
    b["claim"]["nodes"]["nodesHwInfo"] = hw_info(&["master-0"]);
    let d1 = diff_of(&a, &b);
    let d2 = diff_of(&a, &b);
    assert_eq!(
        serde_json::to_string(&d1).unwrap(),
        serde_json::to_string(&d2).unwrap()
    );
    let reparsed: ClaimDiff = serde_json::from_str(&serde_json::to_string(&d1).unwrap()).unwrap();
    assert_eq!(reparsed, d1);
    assert!(d1.nodes.all_nodes_differ);
}
