//! Schema API operations

use serde_json::{json, Value};

use crate::elis::client::into_object;
use crate::elis::{ElisClient, Object, SCHEMAS};
use crate::error::Result;

impl ElisClient {
    pub async fn get_schema(&self, id: u64) -> Result<Object> {
        self.get_object(&format!("{}/{}", SCHEMAS, id)).await
    }

    /// Create a schema from its name and content tree
    pub async fn create_schema(&self, name: &str, content: &Value) -> Result<Object> {
        let body = json!({"name": name, "content": content});
        into_object(self.post(SCHEMAS.plural(), body).await?).await
    }

    /// Replace the content of an existing schema
    pub async fn rewrite_schema(&self, id: u64, content: &Value) -> Result<Object> {
        let path = format!("{}/{}", SCHEMAS, id);
        into_object(self.patch(&path, json!({"content": content})).await?).await
    }
}
