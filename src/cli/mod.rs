//! CLI argument parsing

mod common;
mod queue;
mod schema;
mod workspace;

use clap::{ArgAction, Parser, Subcommand};

use crate::config::defaults;

pub use common::{OutputFormat, SchemaFormat};
pub use queue::{
    ChangeQueueArgs, CreateQueueArgs, DeleteQueueArgs, ListQueuesArgs, QueueCommand,
};
pub use schema::{GetSchemaArgs, SchemaCommand, UploadSchemaArgs};
pub use workspace::{
    ChangeWorkspaceArgs, CreateWorkspaceArgs, DeleteWorkspaceArgs, ListWorkspacesArgs,
    WorkspaceCommand,
};

/// Command line client for the ELIS document-processing API
#[derive(Parser, Debug)]
#[command(name = "elisctl")]
#[command(version)]
#[command(about = "Manage ELIS organizations, workspaces, queues and schemas", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Credentials profile (falls back to ELIS_PROFILE, then "default")
    #[arg(short = 'p', long, global = true)]
    pub profile: Option<String>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(short = 'l', long, global = true, default_value = defaults::LOG_LEVEL)]
    pub log_level: String,

    /// Verbosity; -vv reports every deleted item
    #[arg(short = 'v', long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Do not show progress spinners
    #[arg(short = 'q', long, global = true, default_value_t = false)]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Store API URL and credentials in a profile
    Configure,

    /// Organization operations
    #[command(visible_alias = "org")]
    Organization {
        #[command(subcommand)]
        command: OrganizationCommand,
    },

    /// Workspace operations
    #[command(visible_alias = "ws")]
    Workspace {
        #[command(subcommand)]
        command: WorkspaceCommand,
    },

    /// Queue operations
    Queue {
        #[command(subcommand)]
        command: QueueCommand,
    },

    /// Schema operations
    Schema {
        #[command(subcommand)]
        command: SchemaCommand,
    },
}

/// Subcommands of 'organization'
#[derive(Subcommand, Debug)]
pub enum OrganizationCommand {
    /// Show an organization (the current user's when no ID is given)
    Get {
        /// Organization ID
        id: Option<u64>,

        /// Output format
        #[arg(short = 'o', long = "output", value_enum, default_value_t = OutputFormat::Json)]
        output: OutputFormat,
    },
}
