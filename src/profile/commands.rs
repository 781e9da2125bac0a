//! `configure` command handler

use dialoguer::{theme::ColorfulTheme, Input, Password};
use log::{debug, info};

use crate::config::{credentials, defaults};
use crate::error::{ElisError, Result};
use crate::Cli;

use super::models::Profile;
use super::store::ProfileStore;

/// Insert or replace a profile, keeping the others
pub fn save_profile(store: &ProfileStore, name: &str, profile: Profile) -> Result<()> {
    let mut config = store.load()?;
    let replaced = config.profiles.insert(name.to_string(), profile).is_some();
    store.save(&config)?;
    debug!(
        "{} profile '{}' in {}",
        if replaced { "Updated" } else { "Added" },
        name,
        store.path().display()
    );
    Ok(())
}

fn prompt_error(e: dialoguer::Error) -> ElisError {
    ElisError::Io(format!("Failed to read input: {}", e))
}

/// Prompt for URL, username and password and store them in the selected profile
pub fn run_configure_command(cli: &Cli) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let name = cli
        .profile
        .clone()
        .unwrap_or_else(|| credentials::DEFAULT_PROFILE.to_string());
    let store = ProfileStore::new();
    let theme = ColorfulTheme::default();

    let url: String = Input::with_theme(&theme)
        .with_prompt("API URL")
        .default(defaults::API_URL.to_string())
        .interact_text()
        .map_err(prompt_error)?;
    let username: String = Input::with_theme(&theme)
        .with_prompt("Username")
        .interact_text()
        .map_err(prompt_error)?;
    let password = Password::with_theme(&theme)
        .with_prompt("Password")
        .interact()
        .map_err(prompt_error)?;

    let profile = Profile {
        url: url.trim().trim_end_matches('/').to_string(),
        username: username.trim().to_string(),
        password: password.trim().to_string(),
    };
    save_profile(&store, &name, profile)?;

    info!("Saved profile '{}'", name);
    println!(
        "Credentials for profile '{}' saved to {}",
        name,
        store.path().display()
    );
    Ok(())
}
