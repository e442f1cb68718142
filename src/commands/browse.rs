//! Browse command - print one page of a resource's list screen

use super::{Context, with_record_type};
use crate::browse::{Browsable, BrowseSession, RecordId};
use crate::cli::{OutputFormat, ViewArgs};
use crate::records::Resource;
use crate::source::DataSource;
use crate::{GoldleafError, output};
use colored::Colorize;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::io;

type Result<T> = std::result::Result<T, GoldleafError>;

/// Parsed arguments of the browse command
#[derive(Debug, Clone)]
pub struct BrowseArgs {
    pub view: ViewArgs,
    /// 1-based page number as typed by the user
    pub page: i64,
    pub select: Vec<String>,
    pub select_all: bool,
    pub format: OutputFormat,
}

/// Execute the browse command
///
/// # Errors
///
/// Returns `GoldleafError` if the snapshot cannot be fetched, the view
/// options are invalid, or writing the output fails.
pub fn execute(ctx: &Context, resource: Resource, args: &BrowseArgs) -> Result<()> {
    with_record_type!(resource, R => browse_typed::<R>(ctx, resource, args))
}

fn browse_typed<R>(ctx: &Context, resource: Resource, args: &BrowseArgs) -> Result<()>
where
    R: Browsable + DeserializeOwned + Serialize,
{
    let source = ctx.source();
    let settings = ctx.screen_settings(resource, &args.view)?;
    let mut session: BrowseSession<'_, _, R> =
        BrowseSession::new(&source, ctx.credentials.clone(), settings)?;

    let state = session.state_mut();
    if let Some(filter) = &args.view.filter {
        state.set_filter(filter.as_str());
    }
    state.go_to_page(args.page.saturating_sub(1));
    for id in &args.select {
        state.toggle_one(RecordId::from(id.as_str()));
    }
    if args.select_all {
        session.toggle_all();
    }

    let view = session.view();
    match args.format {
        OutputFormat::Table => {
            if !ctx.quiet {
                println!("{}", resource.title().bold());
            }
            print!("{}", output::render_table(&view, session.state(), ctx.quiet));
            print_selection(&session, ctx.quiet);
        }
        OutputFormat::Json => println!("{}", output::render_json(view.visible())?),
        OutputFormat::Csv => output::write_csv(view.visible(), io::stdout().lock())?,
    }
    Ok(())
}

fn print_selection<S, R>(session: &BrowseSession<'_, S, R>, quiet: bool)
where
    S: DataSource + ?Sized,
    R: Browsable + DeserializeOwned,
{
    let selection = session.state().selection();
    if quiet || selection.is_empty() {
        return;
    }

    let ids: Vec<String> = selection.sorted_ids().iter().map(ToString::to_string).collect();
    println!("Selected: {}", ids.join(", "));

    let missing = selection.len() - session.selected_records().len();
    if missing > 0 {
        println!("{}", format!("{missing} selected id(s) not in this snapshot").yellow());
    }
}
