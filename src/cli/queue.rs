//! Queue command definitions and arguments

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use super::common::OutputFormat;

/// Subcommands of 'queue'
#[derive(Subcommand, Debug)]
pub enum QueueCommand {
    /// List queues with their workspace, inbox and schema
    #[command(visible_alias = "ls")]
    List(ListQueuesArgs),

    /// Create a queue with a new schema and, optionally, an inbox
    Create(CreateQueueArgs),

    /// Delete a queue together with its documents
    #[command(visible_alias = "rm")]
    Delete(DeleteQueueArgs),

    /// Change queue attributes
    Change(ChangeQueueArgs),
}

#[derive(Parser, Debug)]
pub struct ListQueuesArgs {
    /// Only list queues of this workspace
    #[arg(short = 'w', long = "workspace-id")]
    pub workspace_id: Option<u64>,

    /// Output format
    #[arg(short = 'o', long = "output", value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}

#[derive(Parser, Debug)]
pub struct CreateQueueArgs {
    /// Queue name
    pub name: String,

    /// Schema content file (JSON list of schema nodes)
    #[arg(short = 's', long = "schema-content-file")]
    pub schema_content_file: PathBuf,

    /// Workspace ID (may be omitted when the account has a single workspace)
    #[arg(short = 'w', long = "workspace-id")]
    pub workspace_id: Option<u64>,

    /// Create an inbox with an address starting with this prefix
    #[arg(short = 'e', long = "email-prefix", requires = "bounce_email")]
    pub email_prefix: Option<String>,

    /// Where to bounce unprocessable inbox emails
    #[arg(short = 'b', long = "bounce-email", requires = "email_prefix")]
    pub bounce_email: Option<String>,

    /// Connector ID
    #[arg(short = 'c', long = "connector-id")]
    pub connector_id: Option<u64>,

    /// Document locale, e.g. en_US
    #[arg(long)]
    pub locale: Option<String>,
}

#[derive(Parser, Debug)]
pub struct DeleteQueueArgs {
    /// Queue ID
    pub id: u64,

    /// Skip confirmation prompt
    #[arg(short = 'y', long, default_value_t = false)]
    pub yes: bool,
}

#[derive(Parser, Debug)]
pub struct ChangeQueueArgs {
    /// Queue ID
    pub id: u64,

    /// New queue name
    #[arg(short = 'n', long)]
    pub name: Option<String>,

    /// Replace the queue schema with a new one built from this file
    #[arg(short = 's', long = "schema-content-file")]
    pub schema_content_file: Option<PathBuf>,

    /// Document locale, e.g. en_US
    #[arg(long)]
    pub locale: Option<String>,
}
