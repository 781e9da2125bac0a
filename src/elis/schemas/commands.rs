//! Schema command handlers

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use log::{debug, info};
use serde_json::{json, Value};

use crate::cli::{GetSchemaArgs, SchemaCommand, SchemaFormat, UploadSchemaArgs};
use crate::elis::{object_str, object_url, ElisClient};
use crate::error::{ElisError, Result};
use crate::output::{schema_csv, schema_json};
use crate::{Cli, Command};

type CommandResult = std::result::Result<(), Box<dyn std::error::Error>>;

/// Read a schema content file (a JSON list of schema nodes)
pub fn load_schema_content(path: &Path) -> Result<Value> {
    let raw = fs::read_to_string(path)
        .map_err(|e| ElisError::Io(format!("Failed to read {}: {}", path.display(), e)))?;
    serde_json::from_str(&raw)
        .map_err(|e| ElisError::Json(format!("Invalid schema file {}: {}", path.display(), e)))
}

/// Dispatch 'schema' subcommands
pub async fn run_schema_command(client: &ElisClient, cli: &Cli) -> CommandResult {
    let Command::Schema { command } = &cli.command else {
        unreachable!()
    };

    match command {
        SchemaCommand::Get(args) => match &args.output_file {
            Some(path) => {
                let mut file = fs::File::create(path).map_err(|e| {
                    ElisError::Io(format!("Failed to create {}: {}", path.display(), e))
                })?;
                download(client, args, &mut file).await
            }
            None => download(client, args, &mut io::stdout()).await,
        },
        SchemaCommand::Upload(args) => upload(client, args).await,
    }
}

async fn download(client: &ElisClient, args: &GetSchemaArgs, out: &mut dyn Write) -> CommandResult {
    let schema = client.get_schema(args.id).await?;
    let content = schema.get("content").cloned().unwrap_or(Value::Null);

    let rendered = match args.format {
        SchemaFormat::Json => schema_json(&content, args.indent)?,
        SchemaFormat::Csv => schema_csv(&content),
    };
    out.write_all(rendered.as_bytes())?;
    out.flush()?;
    Ok(())
}

/// Replace the content of a schema in place, or supersede it with a new one
async fn upload(client: &ElisClient, args: &UploadSchemaArgs) -> CommandResult {
    let content = load_schema_content(&args.schema_file)?;

    if args.rewrite {
        client.rewrite_schema(args.id, &content).await?;
        info!("Rewrote content of schema {}", args.id);
        return Ok(());
    }

    let original = client.get_schema(args.id).await?;
    let name = match &args.name {
        Some(name) => name.clone(),
        None => object_str(&original, "name").to_string(),
    };
    let schema = client.create_schema(&name, &content).await?;
    let schema_url = object_url(&schema)
        .ok_or_else(|| format!("Created schema has no URL: {}", json!(schema)))?;

    let queues: Vec<&str> = original
        .get("queues")
        .and_then(Value::as_array)
        .map(|urls| urls.iter().filter_map(Value::as_str).collect())
        .unwrap_or_default();
    debug!(
        "Moving {} queue(s) from schema {} to {}",
        queues.len(),
        args.id,
        schema_url
    );
    for queue_url in queues {
        client
            .patch(queue_url, json!({"schema": schema_url}))
            .await?;
    }
    Ok(())
}
