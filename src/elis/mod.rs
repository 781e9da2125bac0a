//! ELIS API client module
//!
//! Generic REST plumbing (requests, authentication, pagination, sideloading,
//! bulk delete) plus per-resource accessors and command handlers.

pub mod api_object;
mod client;
pub mod credentials;
mod delete;
pub mod inboxes;
pub mod organizations;
mod pagination;
pub mod query;
pub mod queues;
pub mod schemas;
mod sideload;
pub mod workspaces;

/// A JSON object as returned by the API
pub type Object = serde_json::Map<String, serde_json::Value>;

pub use api_object::{ApiObject, CONNECTORS, INBOXES, ORGANIZATIONS, QUEUES, SCHEMAS, WORKSPACES};
pub use client::{
    default_expected_status, get_json, get_text, into_object, ApiRequest, AuthMode,
    ClientIdentity, ClientOptions, ElisClient,
};
pub use credentials::{CredentialKind, CredentialResolver, ProfileResolver, StaticCredentials};
pub use delete::ToDelete;
pub use organizations::run_organization_command;
pub use query::{encode_query, Query};
pub use queues::run_queue_command;
pub use schemas::run_schema_command;
pub use sideload::{Reference, SideloadMap};
pub use workspaces::run_workspace_command;

/// Numeric `id` of an API object
pub fn object_id(object: &Object) -> Option<u64> {
    object.get("id").and_then(serde_json::Value::as_u64)
}

/// `url` of an API object
pub fn object_url(object: &Object) -> Option<&str> {
    object.get("url").and_then(serde_json::Value::as_str)
}

/// A string field of an API object, empty when missing
pub fn object_str<'a>(object: &'a Object, key: &str) -> &'a str {
    object
        .get(key)
        .and_then(serde_json::Value::as_str)
        .unwrap_or("")
}
