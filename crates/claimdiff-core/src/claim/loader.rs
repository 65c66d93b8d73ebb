//! Claim file loader.
//!
//! [`load_claim`] reads a claim file from disk and [`parse_claim_bytes`]
//! decodes it into a [`ClaimDocument`]. Both are fatal on failure; the diff
//! engine only ever sees fully decoded documents.

use crate::claim::model::{ClaimDocument, PluginEntry, TestResult, TestStatus};
use crate::errors::{ClaimDiffError, Result};
use crate::{log_op_end, log_op_error, log_op_start};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use sha2::{Digest as _, Sha256};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Record keys that carry a test case's status.
const STATUS_KEYS: &[&str] = &["state", "status"];

/// A claim document together with where it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedClaim {
    pub path: PathBuf,
    /// SHA-256 of the raw file bytes, hex encoded
    pub source_digest: String,
    pub document: ClaimDocument,
}

fn invalid(reason: impl Into<String>) -> ClaimDiffError {
    ClaimDiffError::InvalidClaim {
        path: PathBuf::new(),
        reason: reason.into(),
    }
}

/// Decode an optional JSON section, treating an absent or `null` section as empty.
fn decode_section<T>(value: Option<&Value>, name: &str) -> Result<T>
where
    T: DeserializeOwned + Default,
{
    match value {
        None | Some(Value::Null) => Ok(T::default()),
        Some(v) => serde_json::from_value(v.clone())
            .map_err(|e| invalid(format!("`{}` is malformed: {}", name, e))),
    }
}

/// Decode `claim.results` into typed results keyed by test identifier.
///
/// The map key is the test identifier. The status is read from `state`
/// (falling back to `status`); every other field is kept as metadata.
fn decode_results(value: Option<&Value>) -> Result<BTreeMap<String, TestResult>> {
    let records = match value {
        None | Some(Value::Null) => return Ok(BTreeMap::new()),
        Some(Value::Object(records)) => records,
        Some(_) => return Err(invalid("`claim.results` must be an object")),
    };

    let mut results = BTreeMap::new();
    for (id, record) in records {
        let record = record
            .as_object()
            .ok_or_else(|| invalid(format!("result `{}` must be an object", id)))?;

        let status = STATUS_KEYS
            .iter()
            .find_map(|key| record.get(*key).and_then(Value::as_str))
            .map(TestStatus::from_state)
            .unwrap_or(TestStatus::Error);

        let metadata: Map<String, Value> = record
            .iter()
            .filter(|(k, _)| !STATUS_KEYS.contains(&k.as_str()))
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();

        results.insert(
            id.clone(),
            TestResult {
                id: id.clone(),
                status,
                metadata: Value::Object(metadata),
            },
        );
    }
    Ok(results)
}

/// Decode raw claim file bytes into a [`ClaimDocument`].
///
/// # Errors
///
/// - `InvalidClaim`: bytes are not valid UTF-8 or JSON, or a compared section
///   has the wrong shape
/// - `MissingSection`: the `claim` root object is absent
pub fn parse_claim_bytes(bytes: &[u8]) -> Result<ClaimDocument> {
    // 1. UTF-8 decode
    let text = std::str::from_utf8(bytes)
        .map_err(|e| invalid(format!("claim is not valid UTF-8: {}", e)))?;

    // 2. JSON parse to generic Value
    let raw: Value = serde_json::from_str(text)
        .map_err(|e| invalid(format!("claim is not valid JSON: {}", e)))?;
    let root = raw
        .as_object()
        .ok_or_else(|| invalid("claim JSON root must be an object"))?;

    // 3. `claim` must be present
    let claim = root
        .get("claim")
        .ok_or_else(|| ClaimDiffError::MissingSection {
            path: PathBuf::new(),
            section: "claim".to_string(),
        })?
        .as_object()
        .ok_or_else(|| invalid("`claim` must be an object"))?;

    // 4. Node inventory and CNI plugins
    let nodes_section = claim.get("nodes");
    let nodes: BTreeMap<String, Value> = decode_section(
        nodes_section.and_then(|n| n.get("nodesHwInfo")),
        "claim.nodes.nodesHwInfo",
    )?;
    let plugin_config: BTreeMap<String, Option<Vec<PluginEntry>>> = decode_section(
        nodes_section.and_then(|n| n.get("cniPlugins")),
        "claim.nodes.cniPlugins",
    )?;
    let plugin_config = plugin_config
        .into_iter()
        .map(|(node, entries)| (node, entries.unwrap_or_default()))
        .collect();

    // 5. Test case results
    let results = decode_results(claim.get("results"))?;

    Ok(ClaimDocument {
        nodes,
        plugin_config,
        results,
    })
}

/// Read and decode a claim file.
///
/// # Errors
///
/// - `ReadFailed`: the file does not exist or cannot be read
/// - `InvalidClaim` / `MissingSection`: see [`parse_claim_bytes`]
pub fn load_claim(path: &Path) -> Result<LoadedClaim> {
    log_op_start!("load_claim", claim_path = %path.display());
    let start = std::time::Instant::now();

    let loaded = load_claim_impl(path).map_err(|e| {
        log_op_error!(
            "load_claim",
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64
        );
        e
    })?;

    log_op_end!(
        "load_claim",
        duration_ms = start.elapsed().as_millis() as u64,
        nodes_len = loaded.document.nodes.len() as u64,
        results_len = loaded.document.results.len() as u64
    );

    Ok(loaded)
}

fn load_claim_impl(path: &Path) -> Result<LoadedClaim> {
    let bytes = std::fs::read(path).map_err(|e| ClaimDiffError::ReadFailed {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    let document = parse_claim_bytes(&bytes).map_err(|e| e.at_path(path))?;

    Ok(LoadedClaim {
        path: path.to_path_buf(),
        source_digest: hex::encode(Sha256::digest(&bytes)),
        document,
    })
}
