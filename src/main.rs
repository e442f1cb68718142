//! goldleaf CLI application entry point
//!
//! This is the main executable for the goldleaf record browser. It prints
//! sortable, filterable, paginated tables of the shop's back-office data and
//! offers a small interactive shell over the same engine.
//!
//! # Usage
//!
//! ```bash
//! # Gold prices, first page (default command)
//! goldleaf
//!
//! # Customers named like "nguyen", sorted by points, highest first
//! goldleaf browse customers --filter nguyen --sort point --desc
//!
//! # Page 2 of bills, 10 per page, as CSV
//! goldleaf browse bills --page 2 --page-size 10 --format csv
//!
//! # Interactive shell
//! goldleaf shell promotions
//!
//! # More logging
//! goldleaf -vv browse staff
//! RUST_LOG=goldleaf=trace goldleaf browse staff
//! ```
//!
//! # Configuration
//!
//! Configuration lives in the user's config directory
//! (`~/.config/goldleaf/config.toml` on Linux) and is created with defaults
//! on first run. `goldleaf config init` walks through the main settings.

use clap::CommandFactory;
use goldleaf::{
    GoldleafError,
    cli::{Cli, Commands},
    commands::{self, Context, browse::BrowseArgs},
    completions,
    config::GoldleafConfig,
    source::Credentials,
};
use std::io;
use tracing::debug;
use tracing_subscriber::EnvFilter;

type Result<T> = std::result::Result<T, GoldleafError>;

/// Install the stderr log subscriber
///
/// `RUST_LOG` wins when set; otherwise the `-v` count picks the level.
fn init_logging(cli: &Cli) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_level()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .compact()
        .init();
}

/// Build the command context from global flags and the config file
///
/// # Errors
///
/// Returns `GoldleafError` if the config file cannot be located, read or created.
fn build_context(cli: &Cli) -> Result<Context> {
    let config_path = match &cli.config {
        Some(path) => path.clone(),
        None => GoldleafConfig::config_path()?,
    };
    let config = GoldleafConfig::load_from(&config_path)?;
    let data_dir = cli.data_dir.clone().unwrap_or_else(|| config.data_dir());
    debug!(config = %config_path.display(), data_dir = %data_dir.display(), "loaded configuration");

    Ok(Context {
        quiet: cli.quiet || config.quiet,
        credentials: Credentials::from(cli.token.clone()),
        config,
        config_path,
        data_dir,
    })
}

fn main() -> Result<()> {
    let cli = Cli::parse_args();
    init_logging(&cli);

    let command = cli.get_command();
    if let Commands::Completions { shell } = command {
        completions::generate_static(shell, &mut Cli::command(), &mut io::stdout());
        return Ok(());
    }

    let ctx = build_context(&cli)?;

    match command {
        Commands::Browse {
            resource,
            view,
            page,
            select,
            select_all,
            format,
        } => commands::browse(
            &ctx,
            resource,
            &BrowseArgs {
                view,
                page,
                select,
                select_all,
                format,
            },
        ),
        Commands::Shell { resource, view } => commands::shell(&ctx, resource, &view),
        Commands::Resources => commands::resources(&ctx),
        Commands::Config { command } => commands::config(&ctx, &command),
        Commands::Completions { .. } => Ok(()),
    }
}
