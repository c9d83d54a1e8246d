//! Test utilities for walletbook.
//!
//! Shared test data factories and a temp directory helper.
//!
//! # Usage
//!
//! ```rust,ignore
//! use walletbook::test_utils::*;
//!
//! let tx = make_test_transaction(1, 0x0a, 0x0b, 10);
//! let account = make_test_account(0x0a, vec![tx]);
//! let dir = TestDir::new();
//! dir.create_file("addressbook.json", "[]");
//! ```

use std::fs;
use std::io::{self, Write as IoWrite};
use std::path::{Path, PathBuf};

use crate::cli::args::OutputFormat;
use crate::core::aggregator::ActivityQuery;
use crate::core::models::{Account, Address, Transaction, TransactionType, TxHash};
use crate::storage::config::{ConfigSources, ResolvedConfig};

// =============================================================================
// Test Data Factories
// =============================================================================

/// One-byte address, handy for readable fixtures (`0x0a`, `0x0b`, ...).
#[must_use]
pub fn addr(byte: u8) -> Address {
    Address::new(vec![byte])
}

/// Create a TRANSFER transaction with a one-byte hash and addresses.
///
/// The value is fixed at 1 SEM.
///
/// # Examples
///
/// ```rust,ignore
/// use walletbook::test_utils::make_test_transaction;
///
/// let tx = make_test_transaction(1, 0x0a, 0x0b, 1_500_000_000_000);
/// assert_eq!(tx.value, 1_000_000_000);
/// ```
#[must_use]
pub fn make_test_transaction(hash: u8, from: u8, to: u8, timestamp: i64) -> Transaction {
    make_test_transaction_typed(hash, from, to, timestamp, TransactionType::Transfer)
}

/// Like [`make_test_transaction`] with an explicit type.
#[must_use]
pub fn make_test_transaction_typed(
    hash: u8,
    from: u8,
    to: u8,
    timestamp: i64,
    tx_type: TransactionType,
) -> Transaction {
    Transaction {
        hash: TxHash::new(vec![hash]),
        from: addr(from),
        to: addr(to),
        value: 1_000_000_000,
        timestamp,
        tx_type,
    }
}

/// Create an account owning `address` with the given history.
#[must_use]
pub fn make_test_account(address: u8, transactions: Vec<Transaction>) -> Account {
    Account {
        address: addr(address),
        transactions,
    }
}

/// Snapshot JSON with two wallet accounts (`0x0a`, `0x0b`) and an outside
/// party `0x0c`.
///
/// Newest first, the transfers are: cycle a→b, outbound a→c, inbound c→a,
/// plus one unrelated c→d and one vote.
#[must_use]
pub fn make_test_snapshot_json() -> String {
    r#"{
  "accounts": [
    {
      "address": "0x0a",
      "transactions": [
        {"hash": "01", "from": "0c", "to": "0a", "value": 1500000000, "timestamp": 1500000001000, "type": "TRANSFER"},
        {"hash": "02", "from": "0a", "to": "0c", "value": 2000000000, "timestamp": 1500000002000, "type": "TRANSFER"},
        {"hash": "03", "from": "0a", "to": "0b", "value": 10000000000, "timestamp": 1500000003000, "type": "TRANSFER"},
        {"hash": "05", "from": "0a", "to": "0c", "value": 1, "timestamp": 1500000005000, "type": "VOTE"}
      ]
    },
    {
      "address": "0x0b",
      "transactions": [
        {"hash": "03", "from": "0a", "to": "0b", "value": 10000000000, "timestamp": 1500000003000, "type": "TRANSFER"},
        {"hash": "04", "from": "0c", "to": "0d", "value": 7, "timestamp": 1500000000000, "type": "TRANSFER"}
      ]
    }
  ]
}"#
    .to_string()
}

/// Write [`make_test_snapshot_json`] to `dir/accounts.json` and return the path.
///
/// # Panics
///
/// Panics if the file cannot be written.
pub fn write_test_snapshot(dir: &Path) -> PathBuf {
    let path = dir.join("accounts.json");
    fs::write(&path, make_test_snapshot_json()).expect("Failed to write test snapshot");
    path
}

/// Resolved config pointing at `book_path`, human output without color.
#[must_use]
pub fn make_test_resolved_config(book_path: PathBuf) -> ResolvedConfig {
    ResolvedConfig {
        book_path,
        format: OutputFormat::Human,
        no_color: true,
        pretty: false,
        activity: ActivityQuery::default(),
        sources: ConfigSources::default(),
    }
}

// =============================================================================
// Temp Directory Utilities
// =============================================================================

/// A temporary directory for tests with automatic cleanup.
///
/// Creates an isolated directory that is automatically deleted when
/// the `TestDir` is dropped. Uses the `tempfile` crate internally.
pub struct TestDir {
    inner: tempfile::TempDir,
}

impl TestDir {
    /// Create a new isolated temporary directory.
    ///
    /// # Panics
    ///
    /// Panics if the temporary directory cannot be created.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: tempfile::tempdir().expect("Failed to create temp directory"),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        self.inner.path()
    }

    /// Create a file in the temporary directory with the given content.
    ///
    /// Creates parent directories as needed.
    ///
    /// # Panics
    ///
    /// Panics if the file cannot be created or written.
    pub fn create_file(&self, name: &str, content: &str) {
        let path = self.inner.path().join(name);

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }

        let mut file = fs::File::create(&path).expect("Failed to create test file");
        file.write_all(content.as_bytes())
            .expect("Failed to write test file");
    }

    /// Read a file from the temporary directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read.
    pub fn read_file(&self, name: &str) -> io::Result<String> {
        fs::read_to_string(self.inner.path().join(name))
    }

    #[must_use]
    pub fn file_path(&self, name: &str) -> PathBuf {
        self.inner.path().join(name)
    }
}

impl Default for TestDir {
    fn default() -> Self {
        Self::new()
    }
}
