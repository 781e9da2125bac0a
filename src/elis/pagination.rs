//! Pagination walker for `{results, pagination: {next, total}}` envelopes

use log::debug;
use serde_json::Value;

use crate::config::api;
use crate::elis::client::{get_json, ApiRequest};
use crate::elis::query::Query;
use crate::elis::{ElisClient, Object};
use crate::error::{ElisError, Result};

/// One decoded page of a listing
#[derive(Debug)]
struct Page {
    items: Vec<Object>,
    next: Option<String>,
    total: u64,
}

impl Page {
    fn from_value(url: &str, body: Value, key: &str) -> Result<Self> {
        let malformed = |detail: String| ElisError::MalformedEnvelope {
            url: url.to_string(),
            detail,
        };

        let Value::Object(mut envelope) = body else {
            return Err(malformed("expected a JSON object".to_string()));
        };

        let items = match envelope.remove(key) {
            Some(Value::Array(items)) => items
                .into_iter()
                .map(|item| match item {
                    Value::Object(object) => Ok(object),
                    other => Err(malformed(format!("'{}' item is not an object: {}", key, other))),
                })
                .collect::<Result<Vec<_>>>()?,
            Some(_) => return Err(malformed(format!("'{}' is not a list", key))),
            None => return Err(malformed(format!("missing '{}'", key))),
        };

        let pagination = envelope
            .get("pagination")
            .and_then(Value::as_object)
            .ok_or_else(|| malformed("missing 'pagination'".to_string()))?;

        let next = match pagination.get("next") {
            Some(Value::String(next)) if !next.is_empty() => Some(next.clone()),
            Some(Value::String(_)) | Some(Value::Null) => None,
            Some(other) => return Err(malformed(format!("invalid 'pagination.next': {}", other))),
            None => return Err(malformed("missing 'pagination.next'".to_string())),
        };

        let total = pagination
            .get("total")
            .and_then(Value::as_u64)
            .ok_or_else(|| malformed("missing 'pagination.total'".to_string()))?;

        Ok(Self { items, next, total })
    }
}

impl ElisClient {
    /// Fetch every page of a collection, returning the items and the reported total
    pub async fn get_paginated(&self, path: &str, query: Query) -> Result<(Vec<Object>, u64)> {
        self.get_paginated_key(path, query, api::RESULTS_KEY).await
    }

    /// Like [`ElisClient::get_paginated`], reading items from `key` instead of `results`.
    ///
    /// Follows `pagination.next` until it is null. The next link already carries
    /// the query, so follow-up pages are requested without one. Any failing page
    /// fails the whole walk.
    pub async fn get_paginated_key(
        &self,
        path: &str,
        query: Query,
        key: &str,
    ) -> Result<(Vec<Object>, u64)> {
        let mut page = self.fetch_page(ApiRequest::get(path).query(query), key).await?;
        let mut items = std::mem::take(&mut page.items);
        let mut pages = 1;

        while let Some(next) = page.next.take() {
            page = self.fetch_page(ApiRequest::get(next), key).await?;
            items.append(&mut page.items);
            pages += 1;
        }

        debug!(
            "Fetched {} {} item(s) from {} page(s), total {}",
            items.len(),
            path,
            pages,
            page.total
        );
        Ok((items, page.total))
    }

    async fn fetch_page(&self, request: ApiRequest, key: &str) -> Result<Page> {
        let response = self.request(request).await?;
        let url = response.url().to_string();
        let body = get_json(response).await?;
        Page::from_value(&url, body, key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elis::client::testing::mount_login;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param, query_param_is_missing};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_page_missing_results_is_malformed() {
        let err = Page::from_value(
            "http://x/queues",
            json!({"pagination": {"next": null, "total": 0}}),
            "results",
        )
        .unwrap_err();
        match err {
            ElisError::MalformedEnvelope { url, detail } => {
                assert_eq!(url, "http://x/queues");
                assert!(detail.contains("results"));
            }
            other => panic!("Expected MalformedEnvelope, got {:?}", other),
        }
    }

    #[test]
    fn test_page_missing_pagination_is_malformed() {
        let err = Page::from_value("u", json!({"results": []}), "results").unwrap_err();
        assert!(matches!(err, ElisError::MalformedEnvelope { .. }));
    }

    #[test]
    fn test_page_missing_total_is_malformed() {
        let err = Page::from_value(
            "u",
            json!({"results": [], "pagination": {"next": null}}),
            "results",
        )
        .unwrap_err();
        assert!(err.to_string().contains("total"));
    }

    #[test]
    fn test_page_custom_key() {
        let page = Page::from_value(
            "u",
            json!({"documents": [{"id": 1}], "pagination": {"next": null, "total": 1}}),
            "documents",
        )
        .unwrap();
        assert_eq!(page.items.len(), 1);
        assert!(page.next.is_none());
        assert_eq!(page.total, 1);
    }

    #[tokio::test]
    async fn test_walks_all_pages_in_order() {
        let server = MockServer::start().await;
        mount_login(&server).await;
        let next = format!("{}/v1/queues?page=2", server.uri());

        Mock::given(method("GET"))
            .and(path("/v1/queues"))
            .and(query_param_is_missing("page"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "results": [{"id": 1}, {"id": 2}],
                "pagination": {"next": next, "total": 3}
            })))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/v1/queues"))
            .and(query_param("page", "2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "results": [{"id": 3}],
                "pagination": {"next": null, "total": 3}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = ElisClient::test_client(&server.uri());
        let (items, total) = client.get_paginated("queues", Query::new()).await.unwrap();

        let ids: Vec<i64> = items.iter().filter_map(|q| q["id"].as_i64()).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(total, 3);
    }

    #[tokio::test]
    async fn test_single_page() {
        let server = MockServer::start().await;
        mount_login(&server).await;
        Mock::given(method("GET"))
            .and(path("/v1/workspaces"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "results": [{"id": 7, "name": "Main"}],
                "pagination": {"next": null, "total": 1}
            })))
            .mount(&server)
            .await;

        let client = ElisClient::test_client(&server.uri());
        let (items, total) = client
            .get_paginated("workspaces", Query::new())
            .await
            .unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0]["name"], "Main");
        assert_eq!(total, 1);
    }

    #[tokio::test]
    async fn test_failing_page_fails_walk() {
        let server = MockServer::start().await;
        mount_login(&server).await;
        let next = format!("{}/v1/queues?page=2", server.uri());

        Mock::given(method("GET"))
            .and(path("/v1/queues"))
            .and(query_param_is_missing("page"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "results": [{"id": 1}],
                "pagination": {"next": next, "total": 2}
            })))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/v1/queues"))
            .and(query_param("page", "2"))
            .respond_with(ResponseTemplate::new(502).set_body_string("bad gateway"))
            .mount(&server)
            .await;

        let client = ElisClient::test_client(&server.uri());
        let result = client.get_paginated("queues", Query::new()).await;
        match result {
            Err(ElisError::InvalidResponse { body, .. }) => assert_eq!(body, "bad gateway"),
            other => panic!("Expected InvalidResponse, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_first_page_query_is_sent() {
        let server = MockServer::start().await;
        mount_login(&server).await;
        Mock::given(method("GET"))
            .and(path("/v1/annotations"))
            .and(query_param("sideload", "documents"))
            .and(query_param("page_size", "50"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "results": [],
                "documents": [{"id": 10, "url": "http://d/10"}],
                "pagination": {"next": null, "total": 0}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = ElisClient::test_client(&server.uri());
        let query = vec![
            ("sideload".to_string(), json!("documents")),
            ("page_size".to_string(), json!(50)),
        ];
        let (documents, _) = client
            .get_paginated_key("annotations", query, "documents")
            .await
            .unwrap();
        assert_eq!(documents.len(), 1);
        assert_eq!(documents[0]["id"], 10);
    }
}
