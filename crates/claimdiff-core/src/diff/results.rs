//! Test case result differ.

use crate::claim::TestResult;
use crate::diff::model::{StatusChange, StatusSummary, TestOutcome, TestResultsDiff};
use std::collections::{BTreeMap, BTreeSet};

/// Compare two result sets keyed by test identifier.
///
/// Every list in the output is sorted by test identifier.
pub fn diff_test_results(
    a: &BTreeMap<String, TestResult>,
    b: &BTreeMap<String, TestResult>,
) -> TestResultsDiff {
    let mut diff = TestResultsDiff {
        summary_a: summarize(a),
        summary_b: summarize(b),
        ..TestResultsDiff::default()
    };

    let ids: BTreeSet<&str> = a.keys().chain(b.keys()).map(String::as_str).collect();
    for id in ids {
        match (a.get(id), b.get(id)) {
            (Some(ra), Some(rb)) if ra.status != rb.status => {
                diff.status_changed.push(StatusChange {
                    id: id.to_string(),
                    status_in_a: ra.status,
                    status_in_b: rb.status,
                });
            }
            (Some(_), Some(_)) => {}
            (Some(ra), None) => diff.removed.push(TestOutcome {
                id: id.to_string(),
                status: ra.status,
            }),
            (None, Some(rb)) => diff.added.push(TestOutcome {
                id: id.to_string(),
                status: rb.status,
            }),
            (None, None) => {}
        }
    }

    diff
}

fn summarize(results: &BTreeMap<String, TestResult>) -> StatusSummary {
    let mut summary = StatusSummary::default();
    for result in results.values() {
        summary.record(result.status);
    }
    summary
}
