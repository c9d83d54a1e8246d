//! Output rendering for human and robot modes.

pub mod error;
pub mod human;
pub mod robot;

use crate::cli::args::OutputFormat;
use crate::core::aggregator::ActivityQuery;
use crate::core::models::{ActivityRow, BookChange, Entry};
use crate::error::Result;

/// Render the full address book.
pub fn render_entries(
    entries: &[Entry],
    format: OutputFormat,
    pretty: bool,
    no_color: bool,
) -> Result<String> {
    match format {
        OutputFormat::Human => Ok(human::render_entries(entries, no_color)),
        OutputFormat::Json => robot::render_json_envelope("book list", entries, pretty),
        OutputFormat::Md => Ok(robot::render_entries_md(entries)),
    }
}

/// Render a single looked-up entry.
pub fn render_entry(
    entry: &Entry,
    format: OutputFormat,
    pretty: bool,
    no_color: bool,
) -> Result<String> {
    match format {
        OutputFormat::Human => Ok(human::render_entry(entry, no_color)),
        OutputFormat::Json => robot::render_json_envelope("book get", entry, pretty),
        OutputFormat::Md => Ok(robot::render_entries_md(std::slice::from_ref(entry))),
    }
}

/// Render the outcome of `put`, `remove` or `clear`.
pub fn render_book_change(
    change: &BookChange,
    format: OutputFormat,
    pretty: bool,
    no_color: bool,
) -> Result<String> {
    match format {
        OutputFormat::Human => Ok(human::render_book_change(change, no_color)),
        OutputFormat::Json => {
            robot::render_json_envelope(&format!("book {}", change.action), change, pretty)
        }
        OutputFormat::Md => Ok(robot::render_book_change_md(change)),
    }
}

/// Render recent activity rows.
pub fn render_activity(
    rows: &[ActivityRow],
    query: &ActivityQuery,
    format: OutputFormat,
    pretty: bool,
    no_color: bool,
) -> Result<String> {
    match format {
        OutputFormat::Human => Ok(human::render_activity(rows, query, no_color)),
        OutputFormat::Json => robot::render_json_envelope("activity", rows, pretty),
        OutputFormat::Md => Ok(robot::render_activity_md(rows, query)),
    }
}
