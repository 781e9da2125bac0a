//! Common utilities for output formatters

use serde::Serialize;
use serde_json::Value;

use crate::elis::Object;

/// Escape a value for CSV output
/// Handles commas, quotes, and newlines according to RFC 4180
pub fn escape_csv(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// Render a JSON value as a cell: strings unquoted, null empty
pub fn cell(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// `id` of a sideloaded object, empty for unresolved references
pub fn sideloaded_id(object: &Object, key: &str) -> String {
    cell(object.get(key).and_then(|related| related.get("id")))
}

pub fn print_json<T: Serialize + ?Sized>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Error serializing JSON: {}", e),
    }
}

pub fn print_yaml<T: Serialize + ?Sized>(data: &T) {
    match serde_yml::to_string(data) {
        Ok(yaml) => print!("{}", yaml),
        Err(e) => eprintln!("Error serializing YAML: {}", e),
    }
}
