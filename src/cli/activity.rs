//! `activity` command implementation.

use crate::cli::args::ActivityArgs;
use crate::core::models::ActivityRow;
use crate::error::Result;
use crate::render;
use crate::storage::{AddressBook, ResolvedConfig, load_snapshot};

/// Load the snapshot, aggregate recent activity and render it.
///
/// Counterparties are labelled from the address book when it can be opened.
/// A missing or unreadable book only loses the labels.
///
/// # Errors
/// Returns an error if the snapshot cannot be loaded or rendering fails.
pub fn execute(args: &ActivityArgs, config: &ResolvedConfig) -> Result<String> {
    let snapshot = load_snapshot(&args.snapshot)?;
    let items = config.activity.run(&snapshot.accounts);

    let book = match AddressBook::open(&config.book_path) {
        Ok(book) => Some(book),
        Err(e) => {
            tracing::warn!(error = %e, "Address book unavailable, showing raw addresses");
            None
        }
    };

    let rows: Vec<ActivityRow> = items
        .into_iter()
        .map(|item| {
            let names = match (&book, item.counterparty()) {
                (Some(book), Some(address)) => book.names_for_address(address),
                _ => Vec::new(),
            };
            ActivityRow::new(item, names)
        })
        .collect();

    render::render_activity(
        &rows,
        &config.activity,
        config.format,
        config.pretty,
        config.no_color,
    )
}
