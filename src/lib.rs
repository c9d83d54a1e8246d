//! walletbook - wallet address book and recent activity
//!
//! A persisted name to address book, plus an aggregator that turns account
//! snapshots into a deduplicated, newest-first list of transactions
//! classified as inbound, outbound, or internal.

// Note: deny (not forbid) so test helpers can opt out if they ever need to
#![deny(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod core;
pub mod error;
pub mod render;
pub mod storage;
pub mod util;

/// Test utilities module - included in test builds or when test-utils feature is enabled.
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use error::{ExitCode, Result, WalletError};

// Re-export test utilities for external test crates
#[cfg(any(test, feature = "test-utils"))]
pub use test_utils::*;
