//! `book` command implementation.

use crate::cli::args::BookCommand;
use crate::core::models::{BookChange, Entry};
use crate::error::{Result, WalletError};
use crate::render;
use crate::storage::{AddressBook, ResolvedConfig};

/// Execute a book subcommand and return the rendered output.
///
/// # Errors
/// Returns an error if the book cannot be loaded or written, the address is
/// not hex, or `get` names an unknown entry.
pub fn execute(command: &BookCommand, config: &ResolvedConfig) -> Result<String> {
    let book = AddressBook::open(&config.book_path)?;
    let (format, pretty, no_color) = (config.format, config.pretty, config.no_color);

    match command {
        BookCommand::List => render::render_entries(&book.list(), format, pretty, no_color),
        BookCommand::Get { name } => {
            let entry = book
                .get_by_name(name)
                .ok_or_else(|| WalletError::EntryNotFound(name.clone()))?;
            render::render_entry(&entry, format, pretty, no_color)
        }
        BookCommand::Put { name, address } => {
            let address = address.trim();
            check_hex_digits(address)?;
            let entry = Entry::new(name.clone(), address);
            book.put(entry.clone())?;
            let change = BookChange {
                action: "put".to_string(),
                entry: Some(entry),
                changed: true,
                entries: book.len(),
            };
            render::render_book_change(&change, format, pretty, no_color)
        }
        BookCommand::Remove { name } => {
            let existing = book.get_by_name(name);
            book.remove(name)?;
            let change = BookChange {
                action: "remove".to_string(),
                changed: existing.is_some(),
                entry: Some(existing.unwrap_or_else(|| Entry::new(name.clone(), ""))),
                entries: book.len(),
            };
            render::render_book_change(&change, format, pretty, no_color)
        }
        BookCommand::Clear => {
            let before = book.len();
            book.clear()?;
            let change = BookChange {
                action: "clear".to_string(),
                entry: None,
                changed: before > 0,
                entries: 0,
            };
            render::render_book_change(&change, format, pretty, no_color)
        }
    }
}

/// Accept `0x`-prefixed or bare hex of any length, odd digit counts included.
fn check_hex_digits(address: &str) -> Result<()> {
    let digits = address
        .strip_prefix("0x")
        .or_else(|| address.strip_prefix("0X"))
        .unwrap_or(address);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(WalletError::InvalidAddress(format!(
            "{address}: expected hex digits"
        )));
    }
    Ok(())
}
