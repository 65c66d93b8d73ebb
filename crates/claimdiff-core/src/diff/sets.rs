//! Set differ shared by the node and plugin differs.

use std::collections::BTreeSet;

/// Compute the symmetric difference of two key collections.
///
/// Returns `(missing_from_a, missing_from_b)` where `missing_from_a` holds
/// keys in `b` absent from `a` and `missing_from_b` holds keys in `a` absent
/// from `b`. Both are deduplicated and sorted ascending regardless of input
/// order.
pub fn set_delta<'a, A, B>(a: A, b: B) -> (Vec<String>, Vec<String>)
where
    A: IntoIterator<Item = &'a str>,
    B: IntoIterator<Item = &'a str>,
{
    let set_a: BTreeSet<&str> = a.into_iter().collect();
    let set_b: BTreeSet<&str> = b.into_iter().collect();
    let missing_from_a = set_b.difference(&set_a).map(|s| s.to_string()).collect();
    let missing_from_b = set_a.difference(&set_b).map(|s| s.to_string()).collect();
    (missing_from_a, missing_from_b)
}
