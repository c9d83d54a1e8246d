//! Fixtures for integration tests.
//!
//! Every CLI invocation runs with its own config and data directories so
//! tests never touch the user's real address book.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use walletbook::core::models::{Account, Address, Transaction, TransactionType, TxHash};
use walletbook::storage::AccountSnapshot;
use walletbook::test_utils::TestDir;

/// Variables that would leak the developer's own settings into a test run.
const SCRUBBED_ENV: &[&str] = &[
    "WALLETBOOK_CONFIG",
    "WALLETBOOK_BOOK",
    "WALLETBOOK_FORMAT",
    "WALLETBOOK_LIMIT",
    "WALLETBOOK_NO_COLOR",
    "WALLETBOOK_PRETTY",
    "WALLETBOOK_LOG",
    "WALLETBOOK_LOG_FORMAT",
    "WALLETBOOK_LOG_FILE",
    "RUST_LOG",
];

/// Build a `walletbook` command isolated inside `dir`.
#[allow(deprecated)]
pub fn walletbook_cmd(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("walletbook").unwrap();
    for key in SCRUBBED_ENV {
        cmd.env_remove(key);
    }
    cmd.env("HOME", dir)
        .env("XDG_CONFIG_HOME", dir.join("config"))
        .env("XDG_DATA_HOME", dir.join("data"))
        .env("NO_COLOR", "1");
    cmd
}

/// Like [`walletbook_cmd`] with `--book` pointing at `dir/book.json`.
pub fn book_cmd(dir: &Path) -> Command {
    let mut cmd = walletbook_cmd(dir);
    cmd.arg("--book").arg(book_path(dir));
    cmd
}

pub fn book_path(dir: &Path) -> PathBuf {
    dir.join("book.json")
}

/// 20-byte address filled with `byte`.
pub fn address(byte: u8) -> Address {
    Address::new(vec![byte; 20])
}

pub fn tx(hash: u8, from: u8, to: u8, value: u64, timestamp: i64) -> Transaction {
    Transaction {
        hash: TxHash::new(vec![hash; 32]),
        from: address(from),
        to: address(to),
        value,
        timestamp,
        tx_type: TransactionType::Transfer,
    }
}

/// Fluent builder for account snapshot files.
#[derive(Default)]
pub struct SnapshotBuilder {
    accounts: Vec<Account>,
}

impl SnapshotBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn account(mut self, byte: u8, transactions: Vec<Transaction>) -> Self {
        self.accounts.push(Account {
            address: address(byte),
            transactions,
        });
        self
    }

    pub fn build(self) -> Vec<Account> {
        self.accounts
    }

    /// Write the snapshot to `dir/name` and return its path.
    pub fn write(self, dir: &TestDir, name: &str) -> PathBuf {
        let snapshot = AccountSnapshot {
            accounts: self.accounts,
        };
        dir.create_file(name, &serde_json::to_string_pretty(&snapshot).unwrap());
        dir.file_path(name)
    }
}
