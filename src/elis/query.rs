//! Query parameter encoding
//!
//! The API does not understand native boolean encodings, so booleans are sent
//! as lowercase `true`/`false` literals.

use serde_json::Value;

/// Ordered query parameters; values are JSON so callers can mix ids, flags and lists
pub type Query = Vec<(String, Value)>;

/// Flatten a query into string pairs ready for the URL.
///
/// Arrays expand into repeated keys, scalars become a single pair and `null`
/// values are dropped.
pub fn encode_query(query: &[(String, Value)]) -> Vec<(String, String)> {
    let mut pairs = Vec::new();
    for (key, value) in query {
        let values: &[Value] = match value {
            Value::Array(items) => items,
            other => std::slice::from_ref(other),
        };
        for v in values {
            if let Some(encoded) = encode_scalar(v) {
                pairs.push((key.clone(), encoded));
            }
        }
    }
    pairs
}

fn encode_scalar(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::Bool(b) => Some(if *b { "true" } else { "false" }.to_string()),
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        other => Some(other.to_string()),
    }
}
