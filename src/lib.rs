//! elisctl - command line client for the ELIS document-processing API
//!
//! Manages organizations, workspaces, queues, schemas and inboxes.
//!
//! # Features
//!
//! - Token authentication with a single login per command and guaranteed logout
//! - Automatic pagination and sideloading of related resources
//! - Bulk deletes that report per-item failures and carry on
//! - Schema download as JSON or a flattened CSV grid, and schema upload
//!
//! # Example
//!
//! ```bash
//! # Store credentials
//! elisctl configure
//!
//! # List workspaces with their queues
//! elisctl workspace list
//!
//! # Create a queue with an inbox
//! elisctl queue create Invoices -s schema.json --email-prefix inv --bounce-email ops@example.com
//!
//! # Download a schema as CSV
//! elisctl schema get 42 --format csv -O schema.csv
//! ```

pub mod cli;
pub mod config;
pub mod elis;
pub mod error;
pub mod output;
pub mod profile;
pub mod ui;

pub use cli::{Cli, Command, OutputFormat};
pub use elis::{
    run_organization_command, run_queue_command, run_schema_command, run_workspace_command,
    ApiObject, AuthMode, ClientIdentity, ClientOptions, ElisClient, Object, ProfileResolver,
};
pub use error::{ElisError, Result};
pub use profile::run_configure_command;
