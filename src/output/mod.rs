//! Output formatting module
//!
//! Renders API objects as tables, CSV, JSON or YAML.

pub mod common;
mod organizations;
mod queues;
mod schema;
mod workspaces;

pub use common::{print_json, print_yaml};
pub use organizations::output_organization;
pub use queues::{output_queues, QueueRow};
pub use schema::{schema_csv, schema_json, schema_rows, SchemaRow};
pub use workspaces::{output_workspaces, WorkspaceRow};
