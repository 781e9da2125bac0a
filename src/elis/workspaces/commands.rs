//! Workspace command handlers

use std::io::{self, Write};

use log::{debug, info};
use serde_json::json;

use crate::cli::{
    ChangeWorkspaceArgs, CreateWorkspaceArgs, DeleteWorkspaceArgs, ListWorkspacesArgs,
    WorkspaceCommand,
};
use crate::elis::{object_id, object_url, ElisClient, Object, ToDelete, QUEUES};
use crate::error::ElisError;
use crate::output::output_workspaces;
use crate::ui::{confirm_action, create_spinner, finish_spinner};
use crate::{Cli, Command};

type CommandResult = std::result::Result<(), Box<dyn std::error::Error>>;

/// Dispatch 'workspace' subcommands
pub async fn run_workspace_command(client: &ElisClient, cli: &Cli) -> CommandResult {
    let Command::Workspace { command } = &cli.command else {
        unreachable!()
    };

    let mut out = io::stdout();
    match command {
        WorkspaceCommand::Create(args) => create(client, args, &mut out).await,
        WorkspaceCommand::List(args) => list(client, args, cli.quiet).await,
        WorkspaceCommand::Delete(args) => {
            let prompt = format!(
                "Delete workspace {} with all documents in its queues?",
                args.id
            );
            if !confirm_action(&prompt, args.yes)? {
                println!("Aborted.");
                return Ok(());
            }
            delete(client, args, cli.verbose, &mut out).await
        }
        WorkspaceCommand::Change(args) => change(client, args).await,
    }
}

async fn create(client: &ElisClient, args: &CreateWorkspaceArgs, out: &mut dyn Write) -> CommandResult {
    let organization = client.get_organization(args.organization_id).await?;
    let organization_url = object_url(&organization)
        .ok_or_else(|| format!("Organization has no URL: {}", json!(organization)))?;

    let workspace = client.create_workspace(&args.name, organization_url).await?;
    info!("Created workspace '{}'", args.name);
    writeln!(out, "{}", json!(workspace.get("id")))?;
    Ok(())
}

async fn list(client: &ElisClient, args: &ListWorkspacesArgs, quiet: bool) -> CommandResult {
    let spinner = create_spinner("Fetching workspaces...", quiet);
    let workspaces = client.get_workspaces(&[QUEUES]).await;
    finish_spinner(spinner);

    let workspaces = workspaces?;
    debug!("Fetched {} workspace(s)", workspaces.len());
    output_workspaces(&workspaces, args.output);
    Ok(())
}

/// Documents of every queue in the workspace; a document shared by queues appears once
async fn workspace_documents(client: &ElisClient, workspace_id: u64) -> crate::Result<ToDelete> {
    let (queues, _) = client.get_queues(&[], Some(workspace_id)).await?;
    let mut documents = ToDelete::new();
    for queue in &queues {
        let Some(queue_id) = object_id(queue) else {
            continue;
        };
        documents.extend(client.queue_documents(queue_id).await?);
    }
    Ok(documents)
}

async fn delete(
    client: &ElisClient,
    args: &DeleteWorkspaceArgs,
    verbosity: u8,
    out: &mut dyn Write,
) -> CommandResult {
    let workspace = client.get_workspace(Some(args.id), &[]).await?;
    let documents = workspace_documents(client, args.id).await?;
    debug!(
        "Deleting workspace {} and {} document(s)",
        args.id,
        documents.len()
    );

    let url = object_url(&workspace).ok_or_else(|| ElisError::InvalidResponse {
        url: format!("workspaces/{}", args.id),
        body: json!(workspace).to_string(),
    })?;
    client
        .delete(
            ToDelete::from([(args.id, url.to_string())]),
            verbosity,
            "workspace",
            out,
        )
        .await?;
    client.delete(documents, verbosity, "document", out).await?;
    Ok(())
}

async fn change(client: &ElisClient, args: &ChangeWorkspaceArgs) -> CommandResult {
    let mut changes = Object::new();
    if let Some(name) = &args.name {
        changes.insert("name".to_string(), json!(name));
    }
    if changes.is_empty() {
        debug!("Nothing to change on workspace {}", args.id);
        return Ok(());
    }
    client.change_workspace(args.id, changes).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elis::client::testing::mount_login;
    use wiremock::matchers::{body_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_create_prints_id() {
        let server = MockServer::start().await;
        mount_login(&server).await;
        Mock::given(method("GET"))
            .and(path("/v1/organizations/3"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": 3,
                "url": "http://api/organizations/3"
            })))
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/v1/workspaces"))
            .and(body_json(json!({"name": "Main", "organization": "http://api/organizations/3"})))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": 44})))
            .expect(1)
            .mount(&server)
            .await;

        let client = ElisClient::test_client(&server.uri());
        let args = CreateWorkspaceArgs {
            name: "Main".to_string(),
            organization_id: Some(3),
        };
        let mut out = Vec::new();
        create(&client, &args, &mut out).await.unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "44\n");
    }

    #[tokio::test]
    async fn test_delete_removes_workspace_and_documents() {
        let server = MockServer::start().await;
        mount_login(&server).await;
        let uri = server.uri();
        Mock::given(method("GET"))
            .and(path("/v1/workspaces/2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": 2,
                "url": format!("{}/v1/workspaces/2", uri)
            })))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/v1/queues"))
            .and(query_param("workspace", "2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "results": [{"id": 7}],
                "pagination": {"next": null, "total": 1}
            })))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/v1/annotations"))
            .and(query_param("queue", "7"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "results": [],
                "documents": [{"id": 70, "url": format!("{}/v1/documents/70", uri)}],
                "pagination": {"next": null, "total": 1}
            })))
            .mount(&server)
            .await;
        for item in ["/v1/workspaces/2", "/v1/documents/70"] {
            Mock::given(method("DELETE"))
                .and(path(item))
                .respond_with(ResponseTemplate::new(204))
                .expect(1)
                .mount(&server)
                .await;
        }

        let client = ElisClient::test_client(&server.uri());
        let args = DeleteWorkspaceArgs { id: 2, yes: true };
        let mut out = Vec::new();
        delete(&client, &args, 2, &mut out).await.unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Deleted workspace 2.\nDeleted document 70.\n"
        );
    }

    #[tokio::test]
    async fn test_document_shared_by_queues_is_collected_once() {
        let server = MockServer::start().await;
        mount_login(&server).await;
        let uri = server.uri();
        Mock::given(method("GET"))
            .and(path("/v1/queues"))
            .and(query_param("workspace", "2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "results": [{"id": 1}, {"id": 2}],
                "pagination": {"next": null, "total": 2}
            })))
            .mount(&server)
            .await;
        for queue in ["1", "2"] {
            Mock::given(method("GET"))
                .and(path("/v1/annotations"))
                .and(query_param("queue", queue))
                .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                    "results": [],
                    "documents": [{"id": 7, "url": format!("{}/v1/documents/7", uri)}],
                    "pagination": {"next": null, "total": 1}
                })))
                .expect(1)
                .mount(&server)
                .await;
        }

        let client = ElisClient::test_client(&server.uri());
        let documents = workspace_documents(&client, 2).await.unwrap();
        assert_eq!(
            documents,
            ToDelete::from([(7, format!("{}/v1/documents/7", uri))])
        );
    }

    #[tokio::test]
    async fn test_change_without_changes_is_noop() {
        let server = MockServer::start().await;
        Mock::given(method("PATCH"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let client = ElisClient::test_client(&server.uri());
        let args = ChangeWorkspaceArgs { id: 1, name: None };
        change(&client, &args).await.unwrap();
    }
}
