//! Schema content rendering
//!
//! Schema content is a tree of `section`, `multivalue`, `tuple` and
//! `datapoint` nodes. Sections and tuples hold a list of children, a
//! multivalue holds a single child.

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{Serializer, Value};

use super::common::{cell, escape_csv};
use crate::error::Result;

/// One schema node flattened into a grid row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaRow {
    pub id: String,
    pub category: String,
    pub label: String,
    /// Datapoint type, empty for container nodes
    pub node_type: String,
    /// Ids of the ancestors, joined by `/`
    pub path: String,
}

/// Flatten schema content depth-first, parents before children
pub fn schema_rows(content: &Value) -> Vec<SchemaRow> {
    let mut rows = Vec::new();
    if let Value::Array(nodes) = content {
        for node in nodes {
            collect_rows(node, &[], &mut rows);
        }
    }
    rows
}

fn collect_rows(node: &Value, ancestors: &[String], rows: &mut Vec<SchemaRow>) {
    let id = cell(node.get("id"));
    rows.push(SchemaRow {
        id: id.clone(),
        category: cell(node.get("category")),
        label: cell(node.get("label")),
        node_type: cell(node.get("type")),
        path: ancestors.join("/"),
    });

    let mut path = ancestors.to_vec();
    path.push(id);
    match node.get("children") {
        Some(Value::Array(children)) => {
            for child in children {
                collect_rows(child, &path, rows);
            }
        }
        Some(child @ Value::Object(_)) => collect_rows(child, &path, rows),
        _ => {}
    }
}

/// Render schema content as CSV with an `id,category,label,type,path` header
pub fn schema_csv(content: &Value) -> String {
    let mut out = String::from("id,category,label,type,path\n");
    for row in schema_rows(content) {
        out.push_str(&format!(
            "{},{},{},{},{}\n",
            escape_csv(&row.id),
            escape_csv(&row.category),
            escape_csv(&row.label),
            escape_csv(&row.node_type),
            escape_csv(&row.path)
        ));
    }
    out
}

/// Render schema content as JSON with sorted keys and the given indentation
pub fn schema_json(content: &Value, indent: usize) -> Result<String> {
    let indent = " ".repeat(indent);
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(indent.as_bytes());
    let mut serializer = Serializer::with_formatter(&mut buf, formatter);
    sort_keys(content).serialize(&mut serializer)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

fn sort_keys(value: &Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut entries: Vec<(&String, &Value)> = map.iter().collect();
            entries.sort_by(|a, b| a.0.cmp(b.0));
            Value::Object(
                entries
                    .into_iter()
                    .map(|(k, v)| (k.clone(), sort_keys(v)))
                    .collect(),
            )
        }
        Value::Array(items) => Value::Array(items.iter().map(sort_keys).collect()),
        other => other.clone(),
    }
}
