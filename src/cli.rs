//! Command-line interface definitions and parsing
//!
//! This module defines the complete CLI structure for goldleaf using the
//! `clap` crate.
//!
//! # Commands
//!
//! - **browse**: Print one page of a resource's list screen (default)
//! - **shell**: Line-oriented interactive browser over one resource
//! - **resources**: List resources with their columns and filter fields
//! - **config**: Show, locate, initialise or edit the configuration
//! - **completions**: Generate shell completion scripts
//!
//! # Examples
//!
//! ```
//! use goldleaf::cli::{Cli, Commands};
//! use clap::Parser;
//!
//! let cli = Cli::parse_from(["goldleaf", "browse", "gold-prices", "--filter", "han"]);
//! assert!(matches!(cli.get_command(), Commands::Browse { .. }));
//! ```

use crate::records::Resource;
use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use std::path::PathBuf;

/// Output format for the browse command
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Aligned table with selection markers and padding rows
    #[default]
    Table,
    /// Visible records as a JSON array
    Json,
    /// Visible records as CSV
    Csv,
}

/// View options shared by `browse` and `shell`
#[derive(Args, Debug, Clone, Default)]
pub struct ViewArgs {
    /// Case-insensitive text to match against the screen's filter field
    #[arg(short = 'f', long = "filter", value_name = "TEXT")]
    pub filter: Option<String>,

    /// Field to match the filter against (overrides config)
    #[arg(long = "filter-field", value_name = "FIELD")]
    pub filter_field: Option<String>,

    /// Column to sort by (e.g. buyPrice or buy_price)
    #[arg(short = 's', long = "sort", value_name = "KEY")]
    pub sort: Option<String>,

    /// Sort descending instead of ascending
    #[arg(short = 'd', long = "desc")]
    pub desc: bool,

    /// Rows per page (overrides config)
    #[arg(short = 'n', long = "page-size", value_name = "N")]
    pub page_size: Option<usize>,
}

/// Configuration management subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum ConfigCommands {
    /// Print the effective configuration
    Show,

    /// Print the config file path
    Path,

    /// Run the interactive setup
    Init,

    /// Set a configuration value
    Set {
        /// Configuration key=value (e.g., page_size=10, screens.bills.sort_key=totalAmount)
        #[arg(value_name = "KEY=VALUE")]
        setting: String,
    },
}

/// Main CLI structure for parsing command-line arguments
#[derive(Parser, Debug)]
#[command(name = "goldleaf")]
#[command(about = "Browse jewellery back-office records", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Suppress informational output (only print results)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Use this config file instead of the default one
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Directory holding <resource>.json snapshots (overrides config)
    #[arg(long = "data-dir", value_name = "DIR", global = true)]
    pub data_dir: Option<PathBuf>,

    /// Bearer token passed to the data source
    #[arg(long = "token", env = "GOLDLEAF_TOKEN", hide_env_values = true, global = true)]
    pub token: Option<String>,
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Print one page of a resource (default: gold-prices)
    #[command(visible_alias = "b")]
    Browse {
        /// Resource to browse
        #[arg(value_enum, default_value_t = Resource::GoldPrices)]
        resource: Resource,

        #[command(flatten)]
        view: ViewArgs,

        /// Page to show, starting at 1
        #[arg(short = 'p', long = "page", value_name = "N", default_value_t = 1, allow_negative_numbers = true)]
        page: i64,

        /// Toggle selection of a record id (repeatable)
        #[arg(long = "select", value_name = "ID")]
        select: Vec<String>,

        /// Toggle select-all over the filtered view
        #[arg(short = 'a', long = "select-all")]
        select_all: bool,

        /// Output format
        #[arg(short = 'o', long = "format", value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },

    /// Interactive line-oriented browser
    #[command(visible_alias = "sh")]
    Shell {
        /// Resource to browse
        #[arg(value_enum)]
        resource: Resource,

        #[command(flatten)]
        view: ViewArgs,
    },

    /// List resources with their columns and filter fields
    #[command(visible_alias = "ls")]
    Resources,

    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completion scripts
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

impl Cli {
    /// Parse command line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the command, defaulting to browsing gold prices if none specified
    #[must_use]
    pub fn get_command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Browse {
            resource: Resource::GoldPrices,
            view: ViewArgs::default(),
            page: 1,
            select: Vec::new(),
            select_all: false,
            format: OutputFormat::Table,
        })
    }

    /// Default log filter for the `-v` count, used when `RUST_LOG` is unset
    #[must_use]
    pub const fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_command_is_browse() {
        let cli = Cli::parse_from(["goldleaf"]);
        match cli.get_command() {
            Commands::Browse { resource, page, format, .. } => {
                assert_eq!(resource, Resource::GoldPrices);
                assert_eq!(page, 1);
                assert_eq!(format, OutputFormat::Table);
            }
            other => panic!("Expected Browse command, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_browse_with_view_options() {
        let cli = Cli::parse_from([
            "goldleaf", "browse", "customers", "-f", "nguyen", "--sort", "point", "--desc", "-n", "10",
            "--page", "2", "--select", "3", "--select", "7", "--format", "csv",
        ]);

        let Some(Commands::Browse { resource, view, page, select, format, select_all }) = cli.command else {
            panic!("Expected Browse command");
        };
        assert_eq!(resource, Resource::Customers);
        assert_eq!(view.filter.as_deref(), Some("nguyen"));
        assert_eq!(view.sort.as_deref(), Some("point"));
        assert!(view.desc);
        assert_eq!(view.page_size, Some(10));
        assert_eq!(page, 2);
        assert_eq!(select, vec!["3".to_string(), "7".to_string()]);
        assert!(!select_all);
        assert_eq!(format, OutputFormat::Csv);
    }

    #[test]
    fn test_parse_negative_page() {
        let cli = Cli::parse_from(["goldleaf", "browse", "bills", "--page", "-2"]);
        assert!(matches!(cli.command, Some(Commands::Browse { page: -2, .. })));
    }

    #[test]
    fn test_parse_shell_alias() {
        let cli = Cli::parse_from(["goldleaf", "sh", "gold-prices"]);
        assert!(matches!(
            cli.command,
            Some(Commands::Shell { resource: Resource::GoldPrices, .. })
        ));
    }

    #[test]
    fn test_parse_config_set() {
        let cli = Cli::parse_from(["goldleaf", "config", "set", "page_size=10"]);
        match cli.command {
            Some(Commands::Config { command: ConfigCommands::Set { setting } }) => {
                assert_eq!(setting, "page_size=10");
            }
            other => panic!("Expected Config Set command, got {other:?}"),
        }
    }

    #[test]
    fn test_global_flags() {
        let cli = Cli::parse_from([
            "goldleaf", "-vv", "--data-dir", "/tmp/data", "--token", "abc", "resources",
        ]);
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.log_level(), "debug");
        assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/data")));
        assert_eq!(cli.token.as_deref(), Some("abc"));
        assert!(matches!(cli.command, Some(Commands::Resources)));
    }

    #[test]
    fn test_rejects_unknown_resource() {
        assert!(Cli::try_parse_from(["goldleaf", "browse", "rings"]).is_err());
    }
}
