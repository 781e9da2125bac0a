//! Queue module

mod api;
mod commands;

pub use api::NewQueue;
pub use commands::run_queue_command;
