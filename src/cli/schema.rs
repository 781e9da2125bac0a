//! Schema command definitions and arguments

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use super::common::SchemaFormat;
use crate::config::defaults;

/// Subcommands of 'schema'
#[derive(Subcommand, Debug)]
pub enum SchemaCommand {
    /// Download schema content
    #[command(visible_alias = "download")]
    Get(GetSchemaArgs),

    /// Upload schema content, replacing or superseding an existing schema
    Upload(UploadSchemaArgs),
}

#[derive(Parser, Debug)]
pub struct GetSchemaArgs {
    /// Schema ID
    pub id: u64,

    /// Download format; csv is the spreadsheet-compatible export (one row per schema node)
    #[arg(long, value_enum, default_value_t = SchemaFormat::Json)]
    pub format: SchemaFormat,

    /// JSON indentation
    #[arg(long, default_value_t = defaults::INDENT)]
    pub indent: usize,

    /// Write to this file instead of stdout
    #[arg(short = 'O', long = "output-file")]
    pub output_file: Option<PathBuf>,
}

#[derive(Parser, Debug)]
pub struct UploadSchemaArgs {
    /// ID of the schema to replace
    pub id: u64,

    /// Schema content file (JSON list of schema nodes)
    pub schema_file: PathBuf,

    /// Overwrite the content of the existing schema in place
    #[arg(short = 'r', long, default_value_t = false)]
    pub rewrite: bool,

    /// Name of the new schema (defaults to the name of the replaced one)
    #[arg(short = 'n', long)]
    pub name: Option<String>,
}
