//! Command implementations
//!
//! Each command is a module with an execute function that takes parsed CLI
//! args and a [`Context`] built from global flags and configuration.

/// Run `$body` with `$ty` bound to the record type of `$resource`
///
/// ```ignore
/// with_record_type!(resource, R => browse_typed::<R>(ctx, args))
/// ```
macro_rules! with_record_type {
    ($resource:expr, $ty:ident => $body:expr) => {
        match $resource {
            $crate::records::Resource::Customers => {
                type $ty = $crate::records::Customer;
                $body
            }
            $crate::records::Resource::Staff => {
                type $ty = $crate::records::Staff;
                $body
            }
            $crate::records::Resource::Promotions => {
                type $ty = $crate::records::Promotion;
                $body
            }
            $crate::records::Resource::Bills => {
                type $ty = $crate::records::Bill;
                $body
            }
            $crate::records::Resource::GoldPrices => {
                type $ty = $crate::records::GoldPrice;
                $body
            }
        }
    };
}
pub(crate) use with_record_type;

pub mod browse;
pub mod config;
pub mod resources;
pub mod shell;

// Re-export execute functions for convenience
pub use browse::execute as browse;
pub use config::execute as config;
pub use resources::execute as resources;
pub use shell::execute as shell;

use crate::GoldleafError;
use crate::browse::{PageSize, ScreenSettings, SortDirection, normalize_field_name};
use crate::cli::ViewArgs;
use crate::config::GoldleafConfig;
use crate::records::Resource;
use crate::source::{Credentials, JsonDirSource};
use std::path::PathBuf;

type Result<T> = std::result::Result<T, GoldleafError>;

/// Global state every command runs with
#[derive(Debug, Clone)]
pub struct Context {
    pub config: GoldleafConfig,
    pub config_path: PathBuf,
    pub data_dir: PathBuf,
    pub credentials: Credentials,
    pub quiet: bool,
}

impl Context {
    /// Snapshot source for the configured data directory
    #[must_use]
    pub fn source(&self) -> JsonDirSource {
        JsonDirSource::new(&self.data_dir).require_token(self.config.require_token)
    }

    /// Screen settings from config, then CLI overrides on top
    ///
    /// # Errors
    ///
    /// Returns `GoldleafError` if a configured or requested page size is zero.
    pub fn screen_settings(&self, resource: Resource, view: &ViewArgs) -> Result<ScreenSettings> {
        let mut settings = self.config.screen_settings(resource)?;

        if let Some(field) = &view.filter_field {
            let field = normalize_field_name(field);
            if field.is_empty() {
                return Err(GoldleafError::InvalidInput("--filter-field cannot be empty".into()));
            }
            settings.filter_field = field;
        }
        if let Some(key) = &view.sort {
            settings.sort_key = normalize_field_name(key);
            settings.sort_direction = SortDirection::Ascending;
        }
        if view.desc {
            settings.sort_direction = SortDirection::Descending;
        }
        if let Some(size) = view.page_size {
            settings.page_size = PageSize::new(size)?;
        }
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::browse::Browsable;

    fn context() -> Context {
        Context {
            config: GoldleafConfig::default(),
            config_path: PathBuf::from("/tmp/goldleaf/config.toml"),
            data_dir: PathBuf::from("/tmp/goldleaf"),
            credentials: Credentials::anonymous(),
            quiet: true,
        }
    }

    #[test]
    fn test_cli_overrides_config() {
        let mut ctx = context();
        ctx.config.set_value("screens.bills.sort_direction", "desc").unwrap();

        let view = ViewArgs {
            sort: Some("total_amount".into()),
            page_size: Some(2),
            ..ViewArgs::default()
        };
        let settings = ctx.screen_settings(Resource::Bills, &view).unwrap();
        assert_eq!(settings.sort_key, "totalAmount");
        assert_eq!(settings.sort_direction, SortDirection::Ascending);
        assert_eq!(settings.page_size.get(), 2);
        assert_eq!(settings.filter_field, "customerName");
    }

    #[test]
    fn test_desc_flag_without_sort_keeps_key() {
        let view = ViewArgs {
            desc: true,
            ..ViewArgs::default()
        };
        let settings = context().screen_settings(Resource::Staff, &view).unwrap();
        assert_eq!(settings.sort_key, "name");
        assert_eq!(settings.sort_direction, SortDirection::Descending);
    }

    #[test]
    fn test_zero_page_size_is_rejected() {
        let view = ViewArgs {
            page_size: Some(0),
            ..ViewArgs::default()
        };
        assert!(context().screen_settings(Resource::Staff, &view).is_err());
    }

    #[test]
    fn test_with_record_type_dispatch() {
        for resource in Resource::ALL {
            let resolved = with_record_type!(resource, R => R::RESOURCE);
            assert_eq!(resolved, resource);
        }
    }
}
