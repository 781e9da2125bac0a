//! Credential resolution from environment and stored profiles

use log::debug;
use std::fmt;

use crate::config::credentials;
use crate::error::{ElisError, Result};
use crate::profile::ProfileStore;

/// Kind of credential needed by a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialKind {
    Url,
    Username,
    Password,
}

impl CredentialKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            CredentialKind::Url => "url",
            CredentialKind::Username => "username",
            CredentialKind::Password => "password",
        }
    }

    /// Environment variable overriding this credential (ELIS_URL, ...)
    pub fn env_var(&self) -> String {
        format!(
            "{}{}",
            credentials::ENV_PREFIX,
            self.as_str().to_uppercase()
        )
    }
}

impl fmt::Display for CredentialKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Source of session credentials
pub trait CredentialResolver: Send + Sync {
    fn resolve(&self, kind: CredentialKind) -> Result<String>;
}

/// Resolves credentials with fallback:
/// 1. `ELIS_<KIND>` environment variable
/// 2. Profile from the credentials file (`--profile`, then `ELIS_PROFILE`, then `default`)
pub struct ProfileResolver {
    profile: Option<String>,
    store: ProfileStore,
    env: fn(&str) -> Option<String>,
}

impl ProfileResolver {
    pub fn new(profile: Option<&str>) -> Self {
        Self {
            profile: profile.map(str::to_string),
            store: ProfileStore::new(),
            env: |key| std::env::var(key).ok(),
        }
    }

    /// Use a specific store and environment lookup (for testing)
    pub fn with_store(
        profile: Option<&str>,
        store: ProfileStore,
        env: fn(&str) -> Option<String>,
    ) -> Self {
        Self {
            profile: profile.map(str::to_string),
            store,
            env,
        }
    }

    /// Name of the profile to read from
    pub fn profile_name(&self) -> String {
        if let Some(name) = &self.profile {
            return name.clone();
        }
        match (self.env)(credentials::PROFILE_ENV_VAR) {
            Some(name) if !name.is_empty() => name,
            _ => credentials::DEFAULT_PROFILE.to_string(),
        }
    }
}

impl CredentialResolver for ProfileResolver {
    fn resolve(&self, kind: CredentialKind) -> Result<String> {
        let env_var = kind.env_var();
        if let Some(value) = (self.env)(&env_var) {
            debug!("Using {} from {} environment variable", kind, env_var);
            return Ok(value);
        }

        let name = self.profile_name();
        let profile = self.store.profile(&name)?;
        let value = profile
            .as_ref()
            .and_then(|profile| profile.get(kind.as_str()))
            .ok_or_else(|| ElisError::MissingCredential {
                kind: kind.as_str().to_string(),
            })?;

        debug!(
            "Using {} from profile '{}' in {}",
            kind,
            name,
            self.store.path().display()
        );
        Ok(value.trim().to_string())
    }
}

/// Fixed credentials, e.g. passed explicitly by a library user
pub struct StaticCredentials {
    pub url: String,
    pub username: String,
    pub password: String,
}

impl CredentialResolver for StaticCredentials {
    fn resolve(&self, kind: CredentialKind) -> Result<String> {
        Ok(match kind {
            CredentialKind::Url => self.url.clone(),
            CredentialKind::Username => self.username.clone(),
            CredentialKind::Password => self.password.clone(),
        })
    }
}
