//! Queue API operations

use log::debug;
use serde_json::{json, Value};

use crate::config::api;
use crate::elis::client::into_object;
use crate::elis::delete::ToDelete;
use crate::elis::query::Query;
use crate::elis::{
    object_id, object_url, ApiObject, ElisClient, Object, CONNECTORS, QUEUES, WORKSPACES,
};
use crate::error::{ElisError, Result};

/// Attributes of a queue to create
#[derive(Debug, Clone, Default)]
pub struct NewQueue {
    pub name: String,
    pub workspace_url: String,
    pub schema_url: String,
    pub connector_url: Option<String>,
    pub locale: Option<String>,
}

impl NewQueue {
    fn to_body(&self) -> Value {
        let mut body = json!({
            "name": self.name,
            "workspace": self.workspace_url,
            "schema": self.schema_url,
            // Required by the API, which has no default for it
            "rir_url": api::DEFAULT_RIR_URL,
        });
        if let Some(connector_url) = &self.connector_url {
            body[CONNECTORS.singular()] = json!(connector_url);
        }
        if let Some(locale) = &self.locale {
            body["locale"] = json!(locale);
        }
        body
    }
}

impl ElisClient {
    /// All queues, optionally only those of one workspace, with the requested
    /// kinds sideloaded. Also returns the total reported by the API.
    pub async fn get_queues(
        &self,
        sideloads: &[ApiObject],
        workspace: Option<u64>,
    ) -> Result<(Vec<Object>, u64)> {
        let mut query = Query::new();
        if let Some(workspace) = workspace {
            query.push((WORKSPACES.singular().to_string(), json!(workspace)));
        }
        let (mut queues, total) = self.get_paginated(QUEUES.plural(), query).await?;
        self.sideload(&mut queues, sideloads).await?;
        Ok((queues, total))
    }

    /// A queue by id, or the only queue of the account
    pub async fn get_queue(&self, id: Option<u64>, sideloads: &[ApiObject]) -> Result<Object> {
        let queue = match id {
            Some(id) => self.get_object(&format!("{}/{}", QUEUES, id)).await?,
            None => {
                let (mut queues, _) = self.get_queues(&[], None).await?;
                debug!("Account has {} queue(s)", queues.len());
                if queues.len() != 1 {
                    return Err(ElisError::ParameterRequired(
                        "Queue ID must be specified.".to_string(),
                    ));
                }
                queues.remove(0)
            }
        };

        let mut queues = [queue];
        self.sideload(&mut queues, sideloads).await?;
        let [queue] = queues;
        Ok(queue)
    }

    pub async fn create_queue(&self, queue: &NewQueue) -> Result<Object> {
        into_object(self.post(QUEUES.plural(), queue.to_body()).await?).await
    }

    pub async fn change_queue(&self, id: u64, changes: Object) -> Result<Object> {
        let path = format!("{}/{}", QUEUES, id);
        into_object(self.patch(&path, Value::Object(changes)).await?).await
    }

    /// Documents of all annotations in a queue keyed by id, ready for bulk delete
    pub async fn queue_documents(&self, queue_id: u64) -> Result<ToDelete> {
        let query = vec![
            ("page_size".to_string(), json!(api::DOCUMENTS_PAGE_SIZE)),
            (QUEUES.singular().to_string(), json!(queue_id)),
            ("sideload".to_string(), json!("documents")),
        ];
        let (documents, _) = self
            .get_paginated_key(api::ANNOTATIONS, query, "documents")
            .await?;

        Ok(documents
            .iter()
            .filter_map(|document| {
                let id = object_id(document)?;
                let url = object_url(document)?;
                Some((id, url.to_string()))
            })
            .collect())
    }
}
