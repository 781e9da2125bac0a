//! Organization output formatter

use comfy_table::{presets::NOTHING, Table};
use serde_json::Value;

use super::common::{cell, escape_csv, print_json, print_yaml};
use crate::cli::OutputFormat;
use crate::elis::Object;

/// Output a single organization in the given format
pub fn output_organization(organization: &Object, format: OutputFormat) {
    match format {
        OutputFormat::Table => println!("{}", organization_table(organization)),
        OutputFormat::Csv => print!("{}", organization_csv(organization)),
        OutputFormat::Json => print_json(organization),
        OutputFormat::Yaml => print_yaml(organization),
    }
}

/// Scalar fields only; lists of related URLs are counted
fn fields(organization: &Object) -> Vec<(&str, String)> {
    organization
        .iter()
        .map(|(key, value)| {
            let rendered = match value {
                Value::Array(items) => format!("{} item(s)", items.len()),
                Value::Object(_) => value.to_string(),
                other => cell(Some(other)),
            };
            (key.as_str(), rendered)
        })
        .collect()
}

fn organization_table(organization: &Object) -> String {
    let mut table = Table::new();
    table.load_preset(NOTHING);
    for (key, value) in fields(organization) {
        table.add_row(vec![key.to_string(), value]);
    }
    table.to_string()
}

fn organization_csv(organization: &Object) -> String {
    let mut out = String::from("field,value\n");
    for (key, value) in fields(organization) {
        out.push_str(&format!("{},{}\n", escape_csv(key), escape_csv(&value)));
    }
    out
}
