//! Workspace output formatter

use comfy_table::{presets::NOTHING, Table};
use serde_json::Value;

use super::common::{cell, escape_csv, print_json, print_yaml};
use crate::cli::OutputFormat;
use crate::elis::Object;

/// Flattened workspace for table and CSV output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkspaceRow {
    pub id: String,
    pub name: String,
    /// Ids of the sideloaded queues
    pub queues: Vec<String>,
}

impl WorkspaceRow {
    pub fn new(workspace: &Object) -> Self {
        let queues = match workspace.get("queues") {
            Some(Value::Array(queues)) => queues.iter().map(|q| cell(q.get("id"))).collect(),
            _ => Vec::new(),
        };
        Self {
            id: cell(workspace.get("id")),
            name: cell(workspace.get("name")),
            queues,
        }
    }
}

/// Output workspaces (with sideloaded queues) in the given format
pub fn output_workspaces(workspaces: &[Object], format: OutputFormat) {
    match format {
        OutputFormat::Table => println!("{}", workspaces_table(workspaces)),
        OutputFormat::Csv => print!("{}", workspaces_csv(workspaces)),
        OutputFormat::Json => print_json(workspaces),
        OutputFormat::Yaml => print_yaml(workspaces),
    }
}

fn workspaces_table(workspaces: &[Object]) -> String {
    let mut table = Table::new();
    table.load_preset(NOTHING);
    table.set_header(vec!["id", "name", "queues"]);
    for row in workspaces.iter().map(WorkspaceRow::new) {
        table.add_row(vec![row.id, row.name, row.queues.join(", ")]);
    }
    table.to_string()
}

fn workspaces_csv(workspaces: &[Object]) -> String {
    let mut out = String::from("id,name,queues\n");
    for row in workspaces.iter().map(WorkspaceRow::new) {
        out.push_str(&format!(
            "{},{},{}\n",
            escape_csv(&row.id),
            escape_csv(&row.name),
            escape_csv(&row.queues.join(";"))
        ));
    }
    out
}
