//! Credential profiles
//!
//! Profiles are stored in `~/.elisctl/credentials.json` and filled in by
//! `elisctl configure`.

mod commands;
mod models;
mod store;

pub use commands::{run_configure_command, save_profile};
pub use models::{Profile, ProfileConfig};
pub use store::ProfileStore;
