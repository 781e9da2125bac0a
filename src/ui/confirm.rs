//! Confirmation prompts for destructive operations

use dialoguer::Confirm;

use crate::error::{ElisError, Result};

/// Ask the user to confirm; `assume_yes` skips the prompt
pub fn confirm_action(prompt: &str, assume_yes: bool) -> Result<bool> {
    if assume_yes {
        return Ok(true);
    }
    Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .interact()
        .map_err(|e| ElisError::Io(format!("Failed to read confirmation: {}", e)))
}
