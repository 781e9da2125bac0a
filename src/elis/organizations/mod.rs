//! Organization module

mod api;
mod commands;

pub use commands::run_organization_command;
