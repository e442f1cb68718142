//! Interactive setup wizard
//!
//! Prompts for the settings most installs need to touch and writes the
//! result to the given config file. Existing values become the defaults of
//! each prompt, so running it again edits rather than resets.

use super::GoldleafConfig;
use config::ConfigError;
use dialoguer::{Confirm, Input, theme::ColorfulTheme};
use std::path::{Path, PathBuf};

/// Interactive setup - prompts for data directory, page size and token policy
///
/// # Errors
///
/// Returns `ConfigError` if:
/// - User input cannot be read
/// - The configuration cannot be saved
pub fn interactive_setup(existing: &GoldleafConfig, path: &Path) -> Result<GoldleafConfig, ConfigError> {
    println!("Welcome to goldleaf! Let's point it at your data.\n");

    let theme = ColorfulTheme::default();

    let data_dir: String = Input::with_theme(&theme)
        .with_prompt("Snapshot directory")
        .default(existing.data_dir().to_string_lossy().to_string())
        .interact_text()
        .map_err(|e| ConfigError::Message(format!("Failed to read input: {e}")))?;

    let page_size: usize = Input::with_theme(&theme)
        .with_prompt("Rows per page")
        .default(existing.page_size)
        .validate_with(|size: &usize| {
            if *size == 0 {
                Err("must be at least 1")
            } else {
                Ok(())
            }
        })
        .interact_text()
        .map_err(|e| ConfigError::Message(format!("Failed to read input: {e}")))?;

    let require_token = Confirm::with_theme(&theme)
        .with_prompt("Require a bearer token for every fetch?")
        .default(existing.require_token)
        .interact()
        .map_err(|e| ConfigError::Message(format!("Failed to read input: {e}")))?;

    let config = GoldleafConfig {
        data_dir: Some(PathBuf::from(data_dir)),
        page_size,
        require_token,
        ..existing.clone()
    };
    config.save_to(path)?;

    println!("\nConfiguration saved to {}", path.display());
    Ok(config)
}
