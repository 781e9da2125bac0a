//! Workspace command definitions and arguments

use clap::{Parser, Subcommand};

use super::common::OutputFormat;

/// Subcommands of 'workspace'
#[derive(Subcommand, Debug)]
pub enum WorkspaceCommand {
    /// Create a workspace and print its id
    Create(CreateWorkspaceArgs),

    /// List all workspaces with their queues
    #[command(visible_alias = "ls")]
    List(ListWorkspacesArgs),

    /// Delete a workspace together with the documents of its queues
    #[command(visible_alias = "rm")]
    Delete(DeleteWorkspaceArgs),

    /// Change workspace attributes
    Change(ChangeWorkspaceArgs),
}

#[derive(Parser, Debug)]
pub struct CreateWorkspaceArgs {
    /// Workspace name
    pub name: String,

    /// Organization ID (defaults to the organization of the current user)
    #[arg(long = "organization-id")]
    pub organization_id: Option<u64>,
}

#[derive(Parser, Debug)]
pub struct ListWorkspacesArgs {
    /// Output format
    #[arg(short = 'o', long = "output", value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}

#[derive(Parser, Debug)]
pub struct DeleteWorkspaceArgs {
    /// Workspace ID
    pub id: u64,

    /// Skip confirmation prompt
    #[arg(short = 'y', long, default_value_t = false)]
    pub yes: bool,
}

#[derive(Parser, Debug)]
pub struct ChangeWorkspaceArgs {
    /// Workspace ID
    pub id: u64,

    /// New workspace name
    #[arg(short = 'n', long)]
    pub name: Option<String>,
}
