//! Schema module

mod api;
mod commands;

pub use commands::{load_schema_content, run_schema_command};
