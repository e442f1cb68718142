//! Resources command - list resources, their columns and filter fields

use super::{Context, with_record_type};
use crate::browse::Browsable;
use crate::records::Resource;
use crate::GoldleafError;
use colored::Colorize;

type Result<T> = std::result::Result<T, GoldleafError>;

/// Execute the resources command
///
/// # Errors
///
/// Returns `GoldleafError` if a screen's configured settings are invalid.
pub fn execute(ctx: &Context) -> Result<()> {
    for resource in Resource::ALL {
        let settings = ctx.config.screen_settings(resource)?;
        let columns: Vec<&str> = with_record_type!(resource, R => R::columns())
            .iter()
            .map(|c| c.key)
            .collect();

        if ctx.quiet {
            println!("{resource}");
            continue;
        }

        let sort = if settings.sort_key.is_empty() {
            "(collection order)".to_string()
        } else {
            format!("{} {}", settings.sort_key, settings.sort_direction.label())
        };
        let snapshot = ctx.source().snapshot_path(resource);
        let status = if snapshot.is_file() {
            "available".green()
        } else {
            "missing".red()
        };

        println!("{} ({})", resource.name().bold(), resource.title());
        println!("  columns:  {}", columns.join(", "));
        println!("  filter:   {}", settings.filter_field);
        println!("  sort:     {sort}");
        println!("  per page: {}", settings.page_size.get());
        println!("  snapshot: {} [{status}]", snapshot.display());
    }
    Ok(())
}
