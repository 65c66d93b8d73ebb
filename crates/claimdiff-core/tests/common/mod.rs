use serde_json::{json, Value};

/// Build a claim file JSON value from its three compared sections.
#[allow(dead_code)]
pub fn claim_json(nodes_hw_info: Value, cni_plugins: Value, results: Value) -> Value {
    json!({
        "claim": {
            "configurations": {},
            "metadata": {"startTime": "2026-01-01T00:00:00Z"},
            "nodes": {
                "nodesHwInfo": nodes_hw_info,
                "cniPlugins": cni_plugins
            },
            "results": results,
            "versions": {"claimFormat": "v0.1.0"}
        }
    })
}

/// Inventory section with an opaque record per node name.
#[allow(dead_code)]
pub fn hw_info(nodes: &[&str]) -> Value {
    let mut map = serde_json::Map::new();
    for node in nodes {
        map.insert(
            node.to_string(),
            json!({"Lscpu": [{"field": "Architecture:", "data": "x86_64"}]}),
        );
    }
    Value::Object(map)
}

/// Results section from `(test id, state)` pairs.
#[allow(dead_code)]
pub fn results(pairs: &[(&str, &str)]) -> Value {
    let mut map = serde_json::Map::new();
    for (id, state) in pairs {
        map.insert(
            id.to_string(),
            json!({
                "state": state,
                "testID": {"id": id, "suite": "networking"},
                "duration": 1
            }),
        );
    }
    Value::Object(map)
}

/// Serialize a JSON value to claim file bytes.
#[allow(dead_code)]
pub fn to_bytes(v: &Value) -> Vec<u8> {
    serde_json::to_vec(v).unwrap()
}
