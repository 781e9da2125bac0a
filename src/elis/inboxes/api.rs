//! Inbox API operations

use log::debug;
use rand::Rng;
use serde_json::json;

use crate::config::api;
use crate::elis::client::into_object;
use crate::elis::{ElisClient, Object, INBOXES};
use crate::error::Result;

const EMAIL_SUFFIX_ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

fn random_suffix(len: usize) -> String {
    let mut rng = rand::rng();
    std::iter::repeat_with(|| {
        EMAIL_SUFFIX_ALPHABET[rng.random_range(0..EMAIL_SUFFIX_ALPHABET.len())] as char
    })
    .take(len)
    .collect()
}

/// Generate an inbox address: `<prefix>-<6 random [a-z0-9]>@elis.rossum.ai`
pub fn inbox_email(prefix: &str) -> String {
    format!(
        "{}-{}@{}",
        prefix,
        random_suffix(api::INBOX_SUFFIX_LEN),
        api::INBOX_EMAIL_DOMAIN
    )
}

impl ElisClient {
    /// Create an inbox feeding a single queue
    pub async fn create_inbox(
        &self,
        name: &str,
        email_prefix: &str,
        bounce_email: &str,
        queue_url: &str,
    ) -> Result<Object> {
        let email = inbox_email(email_prefix);
        debug!("Creating inbox '{}' with address {}", name, email);

        let body = json!({
            "name": name,
            "email": email,
            "bounce_email_to": bounce_email,
            "queues": [queue_url],
        });
        into_object(self.post(INBOXES.plural(), body).await?).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elis::client::testing::mount_login;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, Request, ResponseTemplate};

    fn assert_generated_email(email: &str, prefix: &str) {
        let local = email
            .strip_suffix("@elis.rossum.ai")
            .expect("domain suffix");
        let suffix = local
            .strip_prefix(&format!("{}-", prefix))
            .expect("prefix");
        assert_eq!(suffix.len(), 6);
        assert!(suffix
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
    }

    #[test]
    fn test_inbox_email_format() {
        for _ in 0..20 {
            assert_generated_email(&inbox_email("invoices"), "invoices");
        }
    }

    #[test]
    fn test_inbox_email_prefix_with_dash() {
        assert_generated_email(&inbox_email("acme-ap"), "acme-ap");
    }

    #[tokio::test]
    async fn test_create_inbox() {
        let server = MockServer::start().await;
        mount_login(&server).await;
        Mock::given(method("POST"))
            .and(path("/v1/inboxes"))
            .and(|request: &Request| {
                let Ok(body) = serde_json::from_slice::<serde_json::Value>(&request.body) else {
                    return false;
                };
                body["name"] == "Inbox"
                    && body["bounce_email_to"] == "ops@example.com"
                    && body["queues"] == json!(["http://api/queues/8"])
                    && body["email"]
                        .as_str()
                        .is_some_and(|e| e.starts_with("in-") && e.ends_with("@elis.rossum.ai"))
            })
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "id": 4,
                "email": "in-abc123@elis.rossum.ai"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = ElisClient::test_client(&server.uri());
        let inbox = client
            .create_inbox("Inbox", "in", "ops@example.com", "http://api/queues/8")
            .await
            .unwrap();
        assert_eq!(inbox["email"], "in-abc123@elis.rossum.ai");
    }
}
