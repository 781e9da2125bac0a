//! Credential profile data models

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Top-level credentials file
#[derive(Debug, Serialize, Deserialize, Default)]
pub struct ProfileConfig {
    /// Map of profile name to stored credentials
    #[serde(default)]
    pub profiles: BTreeMap<String, Profile>,
}

/// A named set of stored credentials
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Profile {
    /// API URL without the version suffix
    pub url: String,
    pub username: String,
    pub password: String,
}

impl Profile {
    /// Look up a credential by its kind name (`url`, `username`, `password`)
    pub fn get(&self, kind: &str) -> Option<&str> {
        match kind {
            "url" => Some(&self.url),
            "username" => Some(&self.username),
            "password" => Some(&self.password),
            _ => None,
        }
    }
}
