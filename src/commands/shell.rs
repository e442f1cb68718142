//! Shell command - line-oriented interactive browser
//!
//! Reads one command per line, applies it to the session's view state and
//! reprints the page. The loop is generic over its input and output so it
//! can be driven by a script as well as a terminal.

use super::{Context, with_record_type};
use crate::browse::{Browsable, BrowseSession, RecordId, SortDirection};
use crate::cli::ViewArgs;
use crate::records::Resource;
use crate::source::DataSource;
use crate::{GoldleafError, output};
use colored::Colorize;
use serde::de::DeserializeOwned;
use std::io::{self, BufRead, Write};
use std::str::FromStr;
use tracing::warn;

type Result<T> = std::result::Result<T, GoldleafError>;

/// One line of shell input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    /// Reprint the current page
    Show,
    /// Replace the filter text, empty to clear
    Filter(String),
    /// Sort by a column; without a direction behaves like a header click
    Sort {
        key: String,
        direction: Option<SortDirection>,
    },
    /// Jump to a 1-based page
    Page(i64),
    Next,
    Prev,
    /// Change rows per page
    Size(usize),
    /// Toggle one record id
    Toggle(String),
    /// Toggle select-all over the filtered view
    All,
    /// Clear the whole selection
    Clear,
    /// List selected ids
    Selected,
    /// Re-fetch the snapshot
    Refresh,
    Help,
    Quit,
}

const HELP: &str = "\
Commands:
  filter [TEXT]        match TEXT against the filter field (no TEXT clears)
  sort KEY [asc|desc]  sort by a column; repeating 'sort KEY' flips direction
  page N               jump to page N (1-based)
  next | prev          step one page
  size N               rows per page
  toggle ID            select or deselect a record
  all                  select or deselect every record matching the filter
  clear                deselect everything
  selected             list selected ids
  refresh              re-fetch the data
  help                 show this help
  quit                 leave the shell";

impl FromStr for ShellCommand {
    type Err = String;

    fn from_str(line: &str) -> std::result::Result<Self, Self::Err> {
        let line = line.trim_end_matches(['\r', '\n']);
        let trimmed = line.trim_start();
        let (word, rest) = trimmed.split_once(' ').unwrap_or((trimmed, ""));

        let number = |what: &str| -> std::result::Result<i64, String> {
            rest.trim()
                .parse()
                .map_err(|_| format!("{what} expects a number, got '{}'", rest.trim()))
        };

        match word.to_ascii_lowercase().as_str() {
            "" | "show" | "ls" => Ok(Self::Show),
            "filter" | "f" | "/" => Ok(Self::Filter(rest.to_string())),
            "sort" | "s" => {
                let mut parts = rest.split_whitespace();
                let key = parts.next().ok_or("sort expects a column key")?.to_string();
                let direction = parts.next().map(str::parse).transpose()?;
                Ok(Self::Sort { key, direction })
            }
            "page" | "p" => number("page").map(Self::Page),
            "next" | "n" => Ok(Self::Next),
            "prev" | "previous" => Ok(Self::Prev),
            "size" => {
                let size = number("size")?;
                usize::try_from(size)
                    .map(Self::Size)
                    .map_err(|_| format!("size must be positive, got {size}"))
            }
            "toggle" | "t" => {
                let id = rest.trim();
                if id.is_empty() {
                    Err("toggle expects a record id".to_string())
                } else {
                    Ok(Self::Toggle(id.to_string()))
                }
            }
            "all" | "a" => Ok(Self::All),
            "clear" => Ok(Self::Clear),
            "selected" => Ok(Self::Selected),
            "refresh" | "r" => Ok(Self::Refresh),
            "help" | "h" | "?" => Ok(Self::Help),
            "quit" | "q" | "exit" => Ok(Self::Quit),
            other => Err(format!("unknown command '{other}' (try 'help')")),
        }
    }
}

/// Execute the shell command
///
/// # Errors
///
/// Returns `GoldleafError` if the first fetch fails or the terminal cannot
/// be read or written.
pub fn execute(ctx: &Context, resource: Resource, view: &ViewArgs) -> Result<()> {
    with_record_type!(resource, R => shell_typed::<R>(ctx, resource, view))
}

fn shell_typed<R>(ctx: &Context, resource: Resource, view: &ViewArgs) -> Result<()>
where
    R: Browsable + DeserializeOwned,
{
    let source = ctx.source();
    let settings = ctx.screen_settings(resource, view)?;
    let mut session: BrowseSession<'_, _, R> =
        BrowseSession::new(&source, ctx.credentials.clone(), settings)?;
    if let Some(filter) = &view.filter {
        session.state_mut().set_filter(filter.as_str());
    }

    if !ctx.quiet {
        println!("{} (type 'help' for commands)", resource.title().bold());
    }
    run(&mut session, io::stdin().lock(), io::stdout().lock(), ctx.quiet)
}

/// Drive a session from line input until `quit` or end of input
///
/// Bad commands and failed refreshes are reported and the loop goes on.
///
/// # Errors
///
/// Returns `GoldleafError::IoError` if reading or writing fails.
pub fn run<S, R, I, W>(session: &mut BrowseSession<'_, S, R>, input: I, mut out: W, quiet: bool) -> Result<()>
where
    S: DataSource + ?Sized,
    R: Browsable + DeserializeOwned,
    I: BufRead,
    W: Write,
{
    write!(out, "{}", output::render_table(&session.view(), session.state(), quiet))?;
    prompt(&mut out, quiet)?;

    for line in input.lines() {
        let line = line?;
        match line.parse::<ShellCommand>() {
            Ok(ShellCommand::Quit) => break,
            Ok(command) => apply(session, command, &mut out, quiet)?,
            Err(message) => writeln!(out, "{}", if quiet { message } else { message.red().to_string() })?,
        }
        prompt(&mut out, quiet)?;
    }
    Ok(())
}

fn prompt<W: Write>(out: &mut W, quiet: bool) -> io::Result<()> {
    if !quiet {
        write!(out, "> ")?;
    }
    out.flush()
}

fn apply<S, R, W>(session: &mut BrowseSession<'_, S, R>, command: ShellCommand, out: &mut W, quiet: bool) -> Result<()>
where
    S: DataSource + ?Sized,
    R: Browsable + DeserializeOwned,
    W: Write,
{
    let state = session.state_mut();
    match command {
        ShellCommand::Show | ShellCommand::Quit => {}
        ShellCommand::Filter(text) => state.set_filter(text),
        ShellCommand::Sort { key, direction: None } => state.request_sort(&key),
        ShellCommand::Sort { key, direction: Some(direction) } => state.set_sort(&key, direction),
        ShellCommand::Page(page) => state.go_to_page(page.saturating_sub(1)),
        ShellCommand::Next => state.next_page(),
        ShellCommand::Prev => state.previous_page(),
        ShellCommand::Size(size) => {
            if let Err(e) = state.set_page_size(size) {
                writeln!(out, "{e}")?;
                return Ok(());
            }
        }
        ShellCommand::Toggle(id) => {
            let selected = state.toggle_one(RecordId::from(id.as_str()));
            writeln!(out, "{id} {}", if selected { "selected" } else { "deselected" })?;
        }
        ShellCommand::All => {
            let result = session.toggle_all();
            writeln!(out, "{}", output::select_all_label(result))?;
        }
        ShellCommand::Clear => state.clear_selection(),
        ShellCommand::Selected => {
            let ids: Vec<String> = state.selection().sorted_ids().iter().map(ToString::to_string).collect();
            writeln!(out, "{}", if ids.is_empty() { "(none)".to_string() } else { ids.join(", ") })?;
            return Ok(());
        }
        ShellCommand::Refresh => match session.refresh() {
            Ok(dropped) if dropped > 0 => writeln!(out, "{dropped} selected id(s) no longer exist")?,
            Ok(_) => {}
            Err(e) => {
                warn!(error = %e, "refresh failed, keeping previous snapshot");
                writeln!(out, "refresh failed: {e}")?;
            }
        },
        ShellCommand::Help => {
            writeln!(out, "{HELP}")?;
            let columns: Vec<&str> = R::columns().iter().map(|c| c.key).collect();
            writeln!(out, "Columns: {}", columns.join(", "))?;
            return Ok(());
        }
    }

    write!(out, "{}", output::render_table(&session.view(), session.state(), quiet))?;
    Ok(())
}
