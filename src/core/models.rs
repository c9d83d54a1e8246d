//! Core data models.
//!
//! Address book entries, the account/transaction snapshot supplied by the
//! wallet layer, classified activity rows, and the robot output envelope.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{Result, WalletError};

/// Robot output schema version.
pub const SCHEMA_VERSION: &str = "walletbook.v1";

// =============================================================================
// Address Book
// =============================================================================

/// A name-to-address record in the address book.
///
/// Equality and hashing are structural over both fields, so entries can be
/// used directly as map keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Entry {
    pub name: String,
    pub address: String,
}

impl Entry {
    #[must_use]
    pub fn new(name: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            address: address.into(),
        }
    }
}

// =============================================================================
// Byte Newtypes
// =============================================================================

fn decode_hex(value: &str) -> std::result::Result<Vec<u8>, hex::FromHexError> {
    let trimmed = value.trim();
    let digits = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);
    hex::decode(digits)
}

/// Raw account address bytes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Address(Vec<u8>);

impl Address {
    #[must_use]
    pub const fn new(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    /// Parse from hex, with or without a `0x` prefix.
    ///
    /// # Errors
    /// Returns [`WalletError::InvalidAddress`] if the input is not valid hex.
    pub fn from_hex(value: &str) -> Result<Self> {
        decode_hex(value)
            .map(Self)
            .map_err(|e| WalletError::InvalidAddress(format!("{value}: {e}")))
    }

    /// Lowercase hex without prefix.
    #[must_use]
    pub fn to_hex(&self) -> String {
        hex::encode(&self.0)
    }

    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", self.to_hex())
    }
}

impl From<&[u8]> for Address {
    fn from(bytes: &[u8]) -> Self {
        Self(bytes.to_vec())
    }
}

impl Serialize for Address {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        decode_hex(&raw).map(Self).map_err(serde::de::Error::custom)
    }
}

/// Transaction hash bytes; the identity used for deduplication.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TxHash(Vec<u8>);

impl TxHash {
    #[must_use]
    pub const fn new(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    #[must_use]
    pub fn to_hex(&self) -> String {
        hex::encode(&self.0)
    }
}

impl fmt::Display for TxHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", self.to_hex())
    }
}

impl Serialize for TxHash {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for TxHash {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        decode_hex(&raw).map(Self).map_err(serde::de::Error::custom)
    }
}

// =============================================================================
// Ledger Snapshot
// =============================================================================

/// Kind of ledger transaction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionType {
    Coinbase,
    #[default]
    Transfer,
    Delegate,
    Vote,
    Unvote,
}

impl TransactionType {
    pub const ALL: &'static [Self] = &[
        Self::Coinbase,
        Self::Transfer,
        Self::Delegate,
        Self::Vote,
        Self::Unvote,
    ];

    /// Lowercase name used in config files and CLI flags.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Coinbase => "coinbase",
            Self::Transfer => "transfer",
            Self::Delegate => "delegate",
            Self::Vote => "vote",
            Self::Unvote => "unvote",
        }
    }

    /// Parse from string (case-insensitive).
    ///
    /// # Errors
    /// Returns [`WalletError::InvalidTransactionType`] for unknown names.
    pub fn from_arg(s: &str) -> Result<Self> {
        let lower = s.trim().to_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|t| t.as_str() == lower)
            .ok_or_else(|| WalletError::InvalidTransactionType(s.to_string()))
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A ledger transaction as reported by the wallet layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub hash: TxHash,
    pub from: Address,
    pub to: Address,
    /// Amount in nano units.
    pub value: u64,
    /// Epoch milliseconds.
    pub timestamp: i64,
    #[serde(rename = "type")]
    pub tx_type: TransactionType,
}

/// A wallet account and its transaction history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub address: Address,
    #[serde(default)]
    pub transactions: Vec<Transaction>,
}

// =============================================================================
// Classified Activity
// =============================================================================

/// Direction of a transaction relative to the wallet's own addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Relation {
    /// Only the recipient is ours.
    Inbound,
    /// Only the sender is ours.
    Outbound,
    /// Both sides are ours.
    Cycle,
}

impl Relation {
    /// Classify from whether the recipient (`inbound`) and sender
    /// (`outbound`) belong to the known address set.
    #[must_use]
    pub const fn classify(inbound: bool, outbound: bool) -> Option<Self> {
        match (inbound, outbound) {
            (true, true) => Some(Self::Cycle),
            (true, false) => Some(Self::Inbound),
            (false, true) => Some(Self::Outbound),
            (false, false) => None,
        }
    }

    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Inbound => "inbound",
            Self::Outbound => "outbound",
            Self::Cycle => "cycle",
        }
    }

    /// Sign shown in front of the amount.
    #[must_use]
    pub const fn sign_prefix(&self) -> &'static str {
        match self {
            Self::Inbound => "+",
            Self::Outbound => "-",
            Self::Cycle => "",
        }
    }
}

/// A transaction tagged with its relation to the wallet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifiedTransaction {
    pub transaction: Transaction,
    pub relation: Relation,
}

impl ClassifiedTransaction {
    /// The other party: sender for inbound, recipient for outbound, none for
    /// an internal transfer.
    #[must_use]
    pub const fn counterparty(&self) -> Option<&Address> {
        match self.relation {
            Relation::Inbound => Some(&self.transaction.from),
            Relation::Outbound => Some(&self.transaction.to),
            Relation::Cycle => None,
        }
    }
}

// =============================================================================
// Command Payloads
// =============================================================================

/// One row of the activity view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityRow {
    pub hash: TxHash,
    pub relation: Relation,
    #[serde(rename = "type")]
    pub tx_type: TransactionType,
    pub timestamp: i64,
    pub value: u64,
    pub from: Address,
    pub to: Address,
    /// `None` for internal transfers.
    pub counterparty: Option<Address>,
    /// Address book names stored for the counterparty.
    #[serde(default)]
    pub counterparty_names: Vec<String>,
}

impl ActivityRow {
    #[must_use]
    pub fn new(item: ClassifiedTransaction, counterparty_names: Vec<String>) -> Self {
        let counterparty = item.counterparty().cloned();
        let ClassifiedTransaction {
            transaction,
            relation,
        } = item;
        Self {
            hash: transaction.hash,
            relation,
            tx_type: transaction.tx_type,
            timestamp: transaction.timestamp,
            value: transaction.value,
            from: transaction.from,
            to: transaction.to,
            counterparty,
            counterparty_names,
        }
    }
}

/// Result of a mutating address book command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookChange {
    /// `put`, `remove`, or `clear`.
    pub action: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entry: Option<Entry>,
    /// Whether the book was modified.
    pub changed: bool,
    /// Entry count after the change.
    pub entries: usize,
}

// =============================================================================
// Robot Output
// =============================================================================

/// Stable JSON envelope for machine consumers.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RobotOutput<T> {
    pub schema_version: String,
    pub generated_at: DateTime<Utc>,
    pub command: String,
    pub data: T,

    #[serde(default)]
    pub errors: Vec<String>,

    pub meta: RobotMeta,
}

/// Metadata for robot output.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RobotMeta {
    pub format: String,
    pub runtime: String,
}

impl<T> RobotOutput<T> {
    /// Create a new robot output envelope.
    pub fn new(command: impl Into<String>, data: T) -> Self {
        Self {
            schema_version: SCHEMA_VERSION.to_string(),
            generated_at: Utc::now(),
            command: command.into(),
            data,
            errors: Vec::new(),
            meta: RobotMeta {
                format: "json".to_string(),
                runtime: "cli".to_string(),
            },
        }
    }
}
