//! Queue output formatter

use comfy_table::{presets::NOTHING, Table};

use super::common::{cell, escape_csv, print_json, print_yaml};
use crate::cli::OutputFormat;
use crate::elis::Object;

const HEADERS: [&str; 5] = ["id", "name", "workspace", "inbox", "schema"];

/// Flattened queue (with sideloaded workspace and inbox)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueueRow {
    pub id: String,
    pub name: String,
    pub workspace: String,
    pub inbox: String,
    pub schema: String,
}

impl QueueRow {
    pub fn new(queue: &Object) -> Self {
        Self {
            id: cell(queue.get("id")),
            name: cell(queue.get("name")),
            workspace: cell(queue.get("workspace").and_then(|w| w.get("id"))),
            inbox: cell(queue.get("inbox").and_then(|i| i.get("email"))),
            schema: cell(queue.get("schema")),
        }
    }

    fn cells(&self) -> [&str; 5] {
        [
            &self.id,
            &self.name,
            &self.workspace,
            &self.inbox,
            &self.schema,
        ]
    }
}

/// Output queues in the given format
pub fn output_queues(queues: &[Object], format: OutputFormat) {
    match format {
        OutputFormat::Table => println!("{}", queues_table(queues)),
        OutputFormat::Csv => print!("{}", queues_csv(queues)),
        OutputFormat::Json => print_json(queues),
        OutputFormat::Yaml => print_yaml(queues),
    }
}

fn queues_table(queues: &[Object]) -> String {
    let mut table = Table::new();
    table.load_preset(NOTHING);
    table.set_header(HEADERS.to_vec());
    for row in queues.iter().map(QueueRow::new) {
        table.add_row(row.cells().to_vec());
    }
    table.to_string()
}

fn queues_csv(queues: &[Object]) -> String {
    let mut out = HEADERS.join(",");
    out.push('\n');
    for row in queues.iter().map(QueueRow::new) {
        let cells: Vec<String> = row.cells().iter().map(|c| escape_csv(c)).collect();
        out.push_str(&cells.join(","));
        out.push('\n');
    }
    out
}
