//! Workspace API operations

use log::debug;
use serde_json::{json, Value};

use crate::elis::client::into_object;
use crate::elis::query::Query;
use crate::elis::{ApiObject, ElisClient, Object, WORKSPACES};
use crate::error::{ElisError, Result};

impl ElisClient {
    /// All workspaces, with the requested kinds sideloaded
    pub async fn get_workspaces(&self, sideloads: &[ApiObject]) -> Result<Vec<Object>> {
        let (mut workspaces, _) = self.get_paginated(WORKSPACES.plural(), Query::new()).await?;
        self.sideload(&mut workspaces, sideloads).await?;
        Ok(workspaces)
    }

    /// A workspace by id, or the only workspace of the account
    pub async fn get_workspace(&self, id: Option<u64>, sideloads: &[ApiObject]) -> Result<Object> {
        let workspace = match id {
            Some(id) => self.get_object(&format!("{}/{}", WORKSPACES, id)).await?,
            None => {
                let mut workspaces = self.get_workspaces(&[]).await?;
                debug!("Account has {} workspace(s)", workspaces.len());
                if workspaces.len() != 1 {
                    return Err(ElisError::ParameterRequired(
                        "Workspace ID must be specified.".to_string(),
                    ));
                }
                workspaces.remove(0)
            }
        };

        let mut workspaces = [workspace];
        self.sideload(&mut workspaces, sideloads).await?;
        let [workspace] = workspaces;
        Ok(workspace)
    }

    pub async fn create_workspace(&self, name: &str, organization_url: &str) -> Result<Object> {
        let body = json!({"name": name, "organization": organization_url});
        into_object(self.post(WORKSPACES.plural(), body).await?).await
    }

    pub async fn change_workspace(&self, id: u64, changes: Object) -> Result<Object> {
        let path = format!("{}/{}", WORKSPACES, id);
        into_object(self.patch(&path, Value::Object(changes)).await?).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elis::client::testing::mount_login;
    use crate::elis::QUEUES;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn mount_workspaces(server: &MockServer, results: Value) {
        let total = results.as_array().map_or(0, Vec::len);
        Mock::given(method("GET"))
            .and(path("/v1/workspaces"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "results": results,
                "pagination": {"next": null, "total": total}
            })))
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn test_get_workspace_single_candidate() {
        let server = MockServer::start().await;
        mount_login(&server).await;
        mount_workspaces(&server, json!([{"id": 4, "name": "Only"}])).await;

        let client = ElisClient::test_client(&server.uri());
        let workspace = client.get_workspace(None, &[]).await.unwrap();
        assert_eq!(workspace["name"], "Only");
    }

    #[tokio::test]
    async fn test_get_workspace_ambiguous() {
        let server = MockServer::start().await;
        mount_login(&server).await;
        mount_workspaces(&server, json!([{"id": 1}, {"id": 2}])).await;

        let client = ElisClient::test_client(&server.uri());
        match client.get_workspace(None, &[]).await {
            Err(ElisError::ParameterRequired(msg)) => {
                assert_eq!(msg, "Workspace ID must be specified.")
            }
            other => panic!("Expected ParameterRequired, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_get_workspace_none_exists() {
        let server = MockServer::start().await;
        mount_login(&server).await;
        mount_workspaces(&server, json!([])).await;

        let client = ElisClient::test_client(&server.uri());
        let result = client.get_workspace(None, &[]).await;
        assert!(matches!(result, Err(ElisError::ParameterRequired(_))));
    }

    #[tokio::test]
    async fn test_get_workspaces_with_queues() {
        let server = MockServer::start().await;
        mount_login(&server).await;
        mount_workspaces(
            &server,
            json!([{"id": 1, "queues": ["http://api/queues/7", "http://api/queues/8"]}]),
        )
        .await;
        Mock::given(method("GET"))
            .and(path("/v1/queues"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "results": [{"id": 7, "url": "http://api/queues/7"}],
                "pagination": {"next": null, "total": 1}
            })))
            .mount(&server)
            .await;

        let client = ElisClient::test_client(&server.uri());
        let workspaces = client.get_workspaces(&[QUEUES]).await.unwrap();
        assert_eq!(workspaces[0]["queues"], json!([{"id": 7, "url": "http://api/queues/7"}, {}]));
    }

    #[tokio::test]
    async fn test_create_workspace() {
        let server = MockServer::start().await;
        mount_login(&server).await;
        Mock::given(method("POST"))
            .and(path("/v1/workspaces"))
            .and(body_json(json!({"name": "New", "organization": "http://api/organizations/1"})))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": 12, "name": "New"})))
            .expect(1)
            .mount(&server)
            .await;

        let client = ElisClient::test_client(&server.uri());
        let workspace = client
            .create_workspace("New", "http://api/organizations/1")
            .await
            .unwrap();
        assert_eq!(workspace["id"], 12);
    }

    #[tokio::test]
    async fn test_change_workspace() {
        let server = MockServer::start().await;
        mount_login(&server).await;
        Mock::given(method("PATCH"))
            .and(path("/v1/workspaces/3"))
            .and(body_json(json!({"name": "Renamed"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 3, "name": "Renamed"})))
            .expect(1)
            .mount(&server)
            .await;

        let client = ElisClient::test_client(&server.uri());
        let mut changes = Object::new();
        changes.insert("name".to_string(), json!("Renamed"));
        client.change_workspace(3, changes).await.unwrap();
    }
}
