//! Organization API operations

use log::debug;
use serde_json::Value;

use crate::config::api;
use crate::elis::{ElisClient, Object, ORGANIZATIONS};
use crate::error::{ElisError, Result};

impl ElisClient {
    /// Get an organization by id, or the authenticated user's organization.
    ///
    /// Without an id the organization comes from `auth/user`; when that profile
    /// carries no organization reference, the user resource at its `url` is
    /// asked instead.
    pub async fn get_organization(&self, id: Option<u64>) -> Result<Object> {
        let Some(id) = id else {
            let user = self.get_object(api::CURRENT_USER).await?;
            let organization_url = match organization_reference(&user) {
                Some(url) => url,
                None => {
                    let user_url = user
                        .get("url")
                        .and_then(Value::as_str)
                        .ok_or_else(|| missing_organization(api::CURRENT_USER, &user))?;
                    debug!("No organization in user profile, fetching {}", user_url);
                    let details = self.get_object(user_url).await?;
                    organization_reference(&details)
                        .ok_or_else(|| missing_organization(user_url, &details))?
                }
            };
            return self.get_object(&organization_url).await;
        };

        self.get_object(&format!("{}/{}", ORGANIZATIONS, id)).await
    }
}

fn organization_reference(user: &Object) -> Option<String> {
    user.get(ORGANIZATIONS.singular())
        .and_then(Value::as_str)
        .map(str::to_string)
}

fn missing_organization(url: &str, body: &Object) -> ElisError {
    ElisError::InvalidResponse {
        url: url.to_string(),
        body: Value::Object(body.clone()).to_string(),
    }
}
