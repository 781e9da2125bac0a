//! Queue command handlers

use std::io::{self, Write};

use log::{debug, info};
use serde_json::json;

use super::api::NewQueue;
use crate::cli::{ChangeQueueArgs, CreateQueueArgs, DeleteQueueArgs, ListQueuesArgs, QueueCommand};
use crate::elis::schemas::load_schema_content;
use crate::elis::{
    object_str, object_url, ElisClient, Object, ToDelete, CONNECTORS, INBOXES, WORKSPACES,
};
use crate::error::ElisError;
use crate::output::output_queues;
use crate::ui::{confirm_action, create_spinner, finish_spinner};
use crate::{Cli, Command};

type CommandResult = std::result::Result<(), Box<dyn std::error::Error>>;

/// Dispatch 'queue' subcommands
pub async fn run_queue_command(client: &ElisClient, cli: &Cli) -> CommandResult {
    let Command::Queue { command } = &cli.command else {
        unreachable!()
    };

    let mut out = io::stdout();
    match command {
        QueueCommand::List(args) => list(client, args, cli.quiet).await,
        QueueCommand::Create(args) => create(client, args, &mut out).await,
        QueueCommand::Delete(args) => {
            let prompt = format!("Delete queue {} with all its documents?", args.id);
            if !confirm_action(&prompt, args.yes)? {
                println!("Aborted.");
                return Ok(());
            }
            delete(client, args, cli.verbose, &mut out).await
        }
        QueueCommand::Change(args) => change(client, args).await,
    }
}

fn required_url<'a>(object: &'a Object, what: &str) -> crate::Result<&'a str> {
    object_url(object).ok_or_else(|| ElisError::InvalidResponse {
        url: what.to_string(),
        body: json!(object).to_string(),
    })
}

async fn list(client: &ElisClient, args: &ListQueuesArgs, quiet: bool) -> CommandResult {
    let spinner = create_spinner("Fetching queues...", quiet);
    let queues = client
        .get_queues(&[WORKSPACES, INBOXES], args.workspace_id)
        .await;
    finish_spinner(spinner);

    let (queues, total) = queues?;
    debug!("Fetched {} of {} queue(s)", queues.len(), total);
    output_queues(&queues, args.output);
    Ok(())
}

/// Create schema, queue and optional inbox; prints `<queue id>[, <inbox email>]`
async fn create(client: &ElisClient, args: &CreateQueueArgs, out: &mut dyn Write) -> CommandResult {
    let content = load_schema_content(&args.schema_content_file)?;

    let workspace = client.get_workspace(args.workspace_id, &[]).await?;
    let workspace_url = required_url(&workspace, "workspace")?;

    let schema = client
        .create_schema(&format!("{} schema", args.name), &content)
        .await?;
    let schema_url = required_url(&schema, "schema")?;

    let connector_url = match args.connector_id {
        Some(id) => Some(client.absolute_url(&format!("{}/{}", CONNECTORS, id))?),
        None => None,
    };

    let queue = client
        .create_queue(&NewQueue {
            name: args.name.clone(),
            workspace_url: workspace_url.to_string(),
            schema_url: schema_url.to_string(),
            connector_url,
            locale: args.locale.clone(),
        })
        .await?;
    let queue_id = json!(queue.get("id"));
    info!("Created queue '{}' ({})", args.name, queue_id);

    match (&args.email_prefix, &args.bounce_email) {
        (Some(prefix), Some(bounce_email)) => {
            let queue_url = required_url(&queue, "queue")?;
            let inbox = client
                .create_inbox(
                    &format!("{} inbox", args.name),
                    prefix,
                    bounce_email,
                    queue_url,
                )
                .await?;
            writeln!(out, "{}, {}", queue_id, object_str(&inbox, "email"))?;
        }
        _ => writeln!(out, "{}", queue_id)?,
    }
    Ok(())
}

async fn delete(
    client: &ElisClient,
    args: &DeleteQueueArgs,
    verbosity: u8,
    out: &mut dyn Write,
) -> CommandResult {
    let queue = client.get_queue(Some(args.id), &[]).await?;
    let url = required_url(&queue, "queue")?.to_string();
    let documents = client.queue_documents(args.id).await?;
    debug!(
        "Deleting queue {} and {} document(s)",
        args.id,
        documents.len()
    );

    client
        .delete(ToDelete::from([(args.id, url)]), verbosity, "queue", out)
        .await?;
    client.delete(documents, verbosity, "document", out).await?;
    Ok(())
}

async fn change(client: &ElisClient, args: &ChangeQueueArgs) -> CommandResult {
    let mut changes = Object::new();
    if let Some(name) = &args.name {
        changes.insert("name".to_string(), json!(name));
    }
    if let Some(locale) = &args.locale {
        changes.insert("locale".to_string(), json!(locale));
    }
    if let Some(file) = &args.schema_content_file {
        let content = load_schema_content(file)?;
        let queue_name = match &args.name {
            Some(name) => name.clone(),
            None => object_str(&client.get_queue(Some(args.id), &[]).await?, "name").to_string(),
        };
        let schema = client
            .create_schema(&format!("{} schema", queue_name), &content)
            .await?;
        changes.insert(
            "schema".to_string(),
            json!(required_url(&schema, "schema")?),
        );
    }

    if changes.is_empty() {
        debug!("Nothing to change on queue {}", args.id);
        return Ok(());
    }
    client.change_queue(args.id, changes).await?;
    Ok(())
}
