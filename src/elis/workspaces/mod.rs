//! Workspace module

mod api;
mod commands;

pub use commands::run_workspace_command;
