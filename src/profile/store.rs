//! Credentials file I/O

use std::fmt::Display;
use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use crate::config::credentials as credentials_config;
use crate::error::{ElisError, Result};

use super::models::{Profile, ProfileConfig};

/// `~/.elisctl/credentials.json`, holding every named profile
pub struct ProfileStore {
    path: PathBuf,
}

impl Default for ProfileStore {
    fn default() -> Self {
        Self::new()
    }
}

fn config_error(action: &str, path: &Path, e: impl Display) -> ElisError {
    ElisError::Config(format!("Failed to {} {}: {}", action, path.display(), e))
}

/// Write a file readable by the owner only; passwords live in it
fn write_private(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).map_err(|e| config_error("write", path, e))?;
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(0o600))
            .map_err(|e| config_error("restrict permissions of", path, e))?;
    }
    Ok(())
}

impl ProfileStore {
    pub fn new() -> Self {
        let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        Self::with_path(
            home.join(credentials_config::DIR_NAME)
                .join(credentials_config::FILE_NAME),
        )
    }

    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All profiles; a missing file is an empty set, an unreadable one an error
    pub fn load(&self) -> Result<ProfileConfig> {
        if !self.path.exists() {
            debug!("No credentials file at {}", self.path.display());
            return Ok(ProfileConfig::default());
        }
        let raw = fs::read_to_string(&self.path).map_err(|e| config_error("read", &self.path, e))?;
        serde_json::from_str(&raw).map_err(|e| config_error("parse credentials", &self.path, e))
    }

    /// A single profile by name
    pub fn profile(&self, name: &str) -> Result<Option<Profile>> {
        Ok(self.load()?.profiles.remove(name))
    }

    /// Replace the whole file. The content goes to a sibling `.tmp` file first
    /// and is renamed over the target, so readers never see a partial write.
    pub fn save(&self, config: &ProfileConfig) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir).map_err(|e| config_error("create directory", dir, e))?;
        }

        let json = serde_json::to_string_pretty(config)?;
        let staging = self.path.with_extension("json.tmp");
        write_private(&staging, &json)?;
        fs::rename(&staging, &self.path).map_err(|e| config_error("replace", &self.path, e))
    }
}
