//! Persistent address book.
//!
//! Maps unique names to address strings and mirrors every change to a JSON
//! file: an array of `{"name", "address"}` objects, rewritten whole on each
//! mutation.
//!
//! # Concurrency
//!
//! One mutex guards both the in-memory entries and the persist step, so a
//! mutation and its write form a single critical section and readers never
//! observe a half-applied change. Writes happen synchronously on the
//! caller's thread.
//!
//! # Failure semantics
//!
//! - Missing file at open: empty book.
//! - Unparseable file at open: [`WalletError::BookParse`]; nothing is
//!   discarded.
//! - Failed write: [`WalletError::BookPersist`]; the in-memory entries stay
//!   as they were before the call.

use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::core::models::{Address, Entry};
use crate::error::{Result, WalletError};
use crate::storage::atomic::write_atomic;

/// File-backed name to address store.
#[derive(Debug)]
pub struct AddressBook {
    path: PathBuf,
    entries: Mutex<Vec<Entry>>,
}

impl AddressBook {
    /// Open the book stored at `path`, loading it once.
    ///
    /// # Errors
    /// Returns [`WalletError::BookParse`] if the file exists but is not a
    /// valid entry list, or [`WalletError::Io`] if it cannot be read.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let entries = if path.exists() {
            let content = std::fs::read(&path)?;
            let entries = parse_entries(&path, &content)?;
            tracing::debug!(path = %path.display(), entries = entries.len(), "Loaded address book");
            entries
        } else {
            tracing::debug!(path = %path.display(), "Address book not found, starting empty");
            Vec::new()
        };

        Ok(Self {
            path,
            entries: Mutex::new(entries),
        })
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Entry>> {
        // Entries are only replaced after a successful persist, so a panic
        // while holding the lock cannot leave them half-updated.
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Persist `next` and, on success, make it the current state.
    fn commit(&self, guard: &mut MutexGuard<'_, Vec<Entry>>, next: Vec<Entry>) -> Result<()> {
        let content = serde_json::to_string_pretty(&next)?;
        write_atomic(&self.path, content.as_bytes()).map_err(|source| {
            tracing::warn!(path = %self.path.display(), error = %source, "Address book write failed");
            WalletError::BookPersist {
                path: self.path.clone(),
                source,
            }
        })?;
        tracing::trace!(path = %self.path.display(), entries = next.len(), "Address book persisted");
        **guard = next;
        Ok(())
    }

    /// Insert `entry`, replacing any entry with the same name.
    ///
    /// # Errors
    /// Returns [`WalletError::BookPersist`] if the file cannot be written.
    pub fn put(&self, entry: Entry) -> Result<()> {
        let mut guard = self.lock();
        let mut next = guard.clone();
        match next.iter_mut().find(|e| e.name == entry.name) {
            Some(existing) => {
                tracing::debug!(name = %entry.name, "Updating address book entry");
                *existing = entry;
            }
            None => {
                tracing::debug!(name = %entry.name, "Adding address book entry");
                next.push(entry);
            }
        }
        self.commit(&mut guard, next)
    }

    /// Shorthand for `put(Entry::new(name, address))`.
    ///
    /// # Errors
    /// Returns [`WalletError::BookPersist`] if the file cannot be written.
    pub fn put_pair(&self, name: impl Into<String>, address: impl Into<String>) -> Result<()> {
        self.put(Entry::new(name, address))
    }

    /// Look up an entry by name.
    #[must_use]
    pub fn get_by_name(&self, name: &str) -> Option<Entry> {
        self.lock().iter().find(|e| e.name == name).cloned()
    }

    /// Remove the entry with `name`. Removing an unknown name does nothing
    /// and does not touch the file.
    ///
    /// # Errors
    /// Returns [`WalletError::BookPersist`] if the file cannot be written.
    pub fn remove(&self, name: &str) -> Result<()> {
        let mut guard = self.lock();
        if !guard.iter().any(|e| e.name == name) {
            tracing::debug!(name, "Remove of unknown name, nothing to do");
            return Ok(());
        }
        let next = guard.iter().filter(|e| e.name != name).cloned().collect();
        tracing::debug!(name, "Removing address book entry");
        self.commit(&mut guard, next)
    }

    /// Snapshot of all entries in storage order.
    #[must_use]
    pub fn list(&self) -> Vec<Entry> {
        self.lock().clone()
    }

    /// Remove every entry and persist the empty book.
    ///
    /// # Errors
    /// Returns [`WalletError::BookPersist`] if the file cannot be written.
    pub fn clear(&self) -> Result<()> {
        let mut guard = self.lock();
        tracing::debug!(entries = guard.len(), "Clearing address book");
        self.commit(&mut guard, Vec::new())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Names whose stored address equals `address`.
    ///
    /// Stored addresses that parse as hex are compared by bytes, so `0x`
    /// prefixes and letter case do not matter; others compare verbatim.
    #[must_use]
    pub fn names_for_address(&self, address: &Address) -> Vec<String> {
        self.lock()
            .iter()
            .filter(|e| {
                Address::from_hex(&e.address).map_or_else(
                    |_| e.address == address.to_hex(),
                    |stored| &stored == address,
                )
            })
            .map(|e| e.name.clone())
            .collect()
    }
}

fn parse_entries(path: &Path, content: &[u8]) -> Result<Vec<Entry>> {
    if content.trim_ascii().is_empty() {
        return Ok(Vec::new());
    }
    let entries: Vec<Entry> =
        serde_json::from_slice(content).map_err(|e| WalletError::BookParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    // Files edited by hand may repeat a name; the last one wins.
    let mut unique: Vec<Entry> = Vec::with_capacity(entries.len());
    for entry in entries {
        match unique.iter_mut().find(|e| e.name == entry.name) {
            Some(existing) => *existing = entry,
            None => unique.push(entry),
        }
    }
    Ok(unique)
}
