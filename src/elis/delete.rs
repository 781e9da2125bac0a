//! Bulk delete with per-item failure reporting

use std::collections::BTreeMap;
use std::io::Write;

use log::debug;

use crate::elis::ElisClient;
use crate::error::Result;

/// Items to delete keyed by id; an item reached twice is deleted once, in id order
pub type ToDelete = BTreeMap<u64, String>;

impl ElisClient {
    /// Delete every item, writing a line per failure to `out`.
    ///
    /// API-level failures are reported and the batch continues. Any other
    /// failure is reported and aborts the batch. With `verbosity > 1` every
    /// successful deletion is reported too.
    pub async fn delete(
        &self,
        to_delete: ToDelete,
        verbosity: u8,
        item: &str,
        out: &mut dyn Write,
    ) -> Result<()> {
        for (id, url) in to_delete {
            match self.delete_url(&url).await {
                Ok(_) => {
                    debug!("Deleted {} {} ({})", item, id, url);
                    if verbosity > 1 {
                        writeln!(out, "Deleted {} {}.", item, id)?;
                    }
                }
                Err(e) if e.is_api_error() => {
                    writeln!(out, "Deleting {} {} caused \"{}\".", item, id, e)?;
                }
                Err(e) => {
                    writeln!(
                        out,
                        "Deleting {} {} caused an unexpected exception: \"{}\".",
                        item, id, e
                    )?;
                    return Err(e);
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elis::client::testing::mount_login;
    use crate::error::ElisError;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn mount_delete(server: &MockServer, item_path: &str, status: u16) {
        Mock::given(method("DELETE"))
            .and(path(item_path))
            .respond_with(ResponseTemplate::new(status).set_body_string("nope"))
            .expect(1)
            .mount(server)
            .await;
    }

    fn batch(server: &MockServer, ids: &[u64]) -> ToDelete {
        ids.iter()
            .map(|id| (*id, format!("{}/v1/documents/{}", server.uri(), id)))
            .collect()
    }

    #[tokio::test]
    async fn test_api_failure_does_not_stop_batch() {
        let server = MockServer::start().await;
        mount_login(&server).await;
        mount_delete(&server, "/v1/documents/1", 204).await;
        mount_delete(&server, "/v1/documents/2", 404).await;
        mount_delete(&server, "/v1/documents/3", 204).await;

        let client = ElisClient::test_client(&server.uri());
        let mut out = Vec::new();
        client
            .delete(batch(&server, &[1, 2, 3]), 0, "document", &mut out)
            .await
            .unwrap();

        let out = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].starts_with("Deleting document 2 caused \"Invalid response ["));
        assert!(lines[0].ends_with("nope\"."));
    }

    #[tokio::test]
    async fn test_verbose_reports_successes() {
        let server = MockServer::start().await;
        mount_login(&server).await;
        mount_delete(&server, "/v1/documents/1", 204).await;
        mount_delete(&server, "/v1/documents/2", 204).await;

        let client = ElisClient::test_client(&server.uri());
        let mut out = Vec::new();
        client
            .delete(batch(&server, &[1, 2]), 2, "document", &mut out)
            .await
            .unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Deleted document 1.\nDeleted document 2.\n"
        );
    }

    #[tokio::test]
    async fn test_single_verbosity_is_quiet_on_success() {
        let server = MockServer::start().await;
        mount_login(&server).await;
        mount_delete(&server, "/v1/documents/1", 204).await;

        let client = ElisClient::test_client(&server.uri());
        let mut out = Vec::new();
        client
            .delete(batch(&server, &[1]), 1, "document", &mut out)
            .await
            .unwrap();
        assert!(out.is_empty());
    }

    #[tokio::test]
    async fn test_unexpected_failure_aborts_batch() {
        let server = MockServer::start().await;
        mount_login(&server).await;
        Mock::given(method("DELETE"))
            .and(path("/v1/documents/2"))
            .respond_with(ResponseTemplate::new(204))
            .expect(0)
            .mount(&server)
            .await;

        let client = ElisClient::test_client(&server.uri());
        let to_delete = ToDelete::from([
            (1, "http://127.0.0.1:1/v1/documents/1".to_string()),
            (2, format!("{}/v1/documents/2", server.uri())),
        ]);
        let mut out = Vec::new();
        let result = client.delete(to_delete, 0, "document", &mut out).await;

        assert!(matches!(result, Err(ElisError::Http(_))));
        let out = String::from_utf8(out).unwrap();
        assert!(out.starts_with("Deleting document 1 caused an unexpected exception: \""));
    }

    #[tokio::test]
    async fn test_repeated_item_is_deleted_once() {
        let server = MockServer::start().await;
        mount_login(&server).await;
        mount_delete(&server, "/v1/documents/7", 204).await;

        let client = ElisClient::test_client(&server.uri());
        let mut to_delete = batch(&server, &[7]);
        to_delete.extend(batch(&server, &[7]));
        let mut out = Vec::new();
        client
            .delete(to_delete, 2, "document", &mut out)
            .await
            .unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Deleted document 7.\n");
    }

    #[tokio::test]
    async fn test_empty_batch() {
        let server = MockServer::start().await;
        let client = ElisClient::test_client(&server.uri());
        let mut out = Vec::new();
        client
            .delete(ToDelete::new(), 2, "queue", &mut out)
            .await
            .unwrap();
        assert!(out.is_empty());
    }
}
