//! Config command - show, locate, initialise or edit the configuration

use super::Context;
use crate::cli::ConfigCommands;
use crate::completions::{complete_config_key, config_keys};
use crate::config::interactive_setup;
use crate::GoldleafError;

type Result<T> = std::result::Result<T, GoldleafError>;

/// Execute a config subcommand
///
/// # Errors
///
/// Returns `GoldleafError` if the setting is malformed or the configuration
/// cannot be written.
pub fn execute(ctx: &Context, command: &ConfigCommands) -> Result<()> {
    match command {
        ConfigCommands::Show => {
            let rendered = toml::to_string_pretty(&ctx.config)
                .map_err(|e| GoldleafError::InvalidInput(format!("Failed to render config: {e}")))?;
            print!("{rendered}");
            if !ctx.quiet {
                println!("# effective data_dir = {}", ctx.data_dir.display());
            }
        }
        ConfigCommands::Path => println!("{}", ctx.config_path.display()),
        ConfigCommands::Init => {
            interactive_setup(&ctx.config, &ctx.config_path)?;
        }
        ConfigCommands::Set { setting } => {
            let (key, value) = parse_setting(setting)?;
            let mut config = ctx.config.clone();
            if let Err(e) = config.set_value(key, value) {
                if !ctx.quiet {
                    let section = key.split('.').next().unwrap_or_default();
                    let mut known = complete_config_key(section);
                    if known.is_empty() {
                        known = config_keys();
                    }
                    eprintln!("Known keys:");
                    for candidate in known {
                        eprintln!("  {:<32} {}", candidate.value, candidate.help.unwrap_or_default());
                    }
                }
                return Err(e.into());
            }
            config.save_to(&ctx.config_path)?;
            if !ctx.quiet {
                println!("Set {key} = {value}");
            }
        }
    }
    Ok(())
}

/// Split a `key=value` argument
///
/// # Errors
///
/// Returns `GoldleafError::InvalidInput` if there is no `=` or the key is empty.
pub fn parse_setting(setting: &str) -> Result<(&str, &str)> {
    match setting.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => Ok((key.trim(), value.trim())),
        _ => Err(GoldleafError::InvalidInput(format!(
            "Expected KEY=VALUE, got '{setting}'"
        ))),
    }
}
