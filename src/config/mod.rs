//! Configuration module for goldleaf
//!
//! Manages the snapshot data directory, the default page size and
//! per-screen overrides. Configuration is stored in the user's config
//! directory as `goldleaf/config.toml`.
//!
//! ```toml
//! data_dir = "/srv/goldleaf/data"
//! page_size = 5
//! require_token = false
//!
//! [screens.gold-prices]
//! sort_key = "buyPrice"
//! sort_direction = "descending"
//! page_size = 10
//! ```

mod setup;

pub use setup::interactive_setup;

use crate::browse::{PageSize, ScreenSettings, SortDirection, normalize_field_name};
use crate::records::Resource;
use config::{Config, ConfigError, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

const fn default_page_size() -> usize {
    PageSize::DEFAULT.get()
}

/// Per-screen overrides, every key optional
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct ScreenOverrides {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter_field: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_key: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_direction: Option<SortDirection>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_size: Option<usize>,
}

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct GoldleafConfig {
    /// Directory holding `<resource>.json` snapshots
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,

    /// Rows per page for screens without their own setting
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Refuse to fetch without a bearer token
    #[serde(default)]
    pub require_token: bool,

    /// Suppress informational output by default
    #[serde(default)]
    pub quiet: bool,

    /// Overrides keyed by resource name
    #[serde(default)]
    pub screens: BTreeMap<String, ScreenOverrides>,
}

impl Default for GoldleafConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            page_size: default_page_size(),
            require_token: false,
            quiet: false,
            screens: BTreeMap::new(),
        }
    }
}

impl GoldleafConfig {
    /// Get the path to the config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ConfigError::Message("Could not determine config directory".to_string()))?;

        Ok(config_dir.join("goldleaf").join("config.toml"))
    }

    /// Load configuration from the default path, creating it if missing
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config file cannot be read, parsed, or created.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from `path`, writing defaults there if missing
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read, parsed, or created.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            let default_config = Self::default();
            default_config.save_to(path)?;
            return Ok(default_config);
        }

        let settings = Config::builder()
            .add_source(File::from(path).format(FileFormat::Toml))
            .build()?;

        let config: Self = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to the default path
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the configuration cannot be written.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::config_path()?)
    }

    /// Save configuration to `path`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the directory cannot be created, the
    /// configuration cannot be serialized to TOML, or the file cannot be
    /// written.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| ConfigError::Message(format!("Failed to create config directory: {e}")))?;
        }

        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))?;

        fs::write(path, toml_string)
            .map_err(|e| ConfigError::Message(format!("Failed to write config file: {e}")))?;

        info!(path = %path.display(), "saved configuration");
        Ok(())
    }

    /// Check values serde cannot check on its own
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Message` naming the first bad key.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.page_size == 0 {
            return Err(ConfigError::Message("page_size must be positive".to_string()));
        }
        for (name, overrides) in &self.screens {
            if name.parse::<Resource>().is_err() {
                return Err(ConfigError::Message(format!("Unknown screen '{name}'")));
            }
            if overrides.page_size == Some(0) {
                return Err(ConfigError::Message(format!(
                    "screens.{name}.page_size must be positive"
                )));
            }
        }
        Ok(())
    }

    /// Snapshot directory, falling back to the platform data directory
    #[must_use]
    pub fn data_dir(&self) -> PathBuf {
        self.data_dir.clone().unwrap_or_else(|| {
            dirs::data_local_dir()
                .map_or_else(|| PathBuf::from("data"), |dir| dir.join("goldleaf"))
        })
    }

    /// Overrides for one screen, if any
    #[must_use]
    pub fn screen(&self, resource: Resource) -> Option<&ScreenOverrides> {
        self.screens.get(resource.name())
    }

    /// Resolve the settings of one screen
    ///
    /// Built-in defaults first, then the global page size, then the screen's
    /// own overrides. Field names are normalised to record keys.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a page size is zero.
    pub fn screen_settings(&self, resource: Resource) -> Result<ScreenSettings, ConfigError> {
        let mut settings = ScreenSettings::for_resource(resource);
        settings.page_size = page_size(self.page_size, "page_size")?;

        if let Some(overrides) = self.screen(resource) {
            if let Some(field) = &overrides.filter_field {
                settings.filter_field = normalize_field_name(field);
            }
            if let Some(key) = &overrides.sort_key {
                settings.sort_key = normalize_field_name(key);
            }
            if let Some(direction) = overrides.sort_direction {
                settings.sort_direction = direction;
            }
            if let Some(size) = overrides.page_size {
                settings.page_size = page_size(size, "screens.*.page_size")?;
            }
        }

        if settings.filter_field.is_empty() {
            warn!(%resource, "empty filter field, falling back to default");
            settings.filter_field = resource.default_filter_field().to_string();
        }
        Ok(settings)
    }

    /// Set one key from a `key=value` style assignment
    ///
    /// Accepted keys: `data_dir`, `page_size`, `require_token`, `quiet`, and
    /// `screens.<resource>.<filter_field|sort_key|sort_direction|page_size>`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Message` for an unknown key or a value that
    /// does not parse.
    pub fn set_value(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let value = value.trim();
        match key.trim() {
            "data_dir" => self.data_dir = (!value.is_empty()).then(|| PathBuf::from(value)),
            "page_size" => self.page_size = page_size(parse(key, value)?, key)?.get(),
            "require_token" => self.require_token = parse(key, value)?,
            "quiet" => self.quiet = parse(key, value)?,
            other => {
                let Some((resource, field)) = other
                    .strip_prefix("screens.")
                    .and_then(|rest| rest.split_once('.'))
                else {
                    return Err(ConfigError::Message(format!("Unknown config key '{other}'")));
                };
                let resource: Resource = resource.parse().map_err(ConfigError::Message)?;
                let mut overrides = self.screen(resource).cloned().unwrap_or_default();
                match field {
                    "filter_field" => overrides.filter_field = Some(value.to_string()),
                    "sort_key" => overrides.sort_key = Some(value.to_string()),
                    "sort_direction" => {
                        overrides.sort_direction = Some(value.parse().map_err(ConfigError::Message)?);
                    }
                    "page_size" => overrides.page_size = Some(page_size(parse(key, value)?, key)?.get()),
                    _ => return Err(ConfigError::Message(format!("Unknown config key '{other}'"))),
                }
                self.screens.insert(resource.name().to_string(), overrides);
            }
        }
        Ok(())
    }
}

fn page_size(size: usize, key: &str) -> Result<PageSize, ConfigError> {
    PageSize::new(size).map_err(|_| ConfigError::Message(format!("{key} must be positive")))
}

fn parse<T: std::str::FromStr>(key: &str, value: &str) -> Result<T, ConfigError>
where
    T::Err: std::fmt::Display,
{
    value
        .parse()
        .map_err(|e| ConfigError::Message(format!("Invalid value for {key}: {e}")))
}
