//! Error types for walletbook.
//!
//! Uses `thiserror` for structured error types that map to exit codes.
//!
//! ## Error Taxonomy
//!
//! Errors are categorized into four categories:
//! - **Storage**: The address book file could not be parsed or written
//! - **Input**: Snapshot files, addresses, or names supplied by the caller
//! - **Configuration**: Config file parsing or invalid values
//! - **Internal**: Unexpected I/O or serialization failures
//!
//! Each error has a stable error code (e.g., `WB-S001`) for programmatic handling.
//!
//! Absence is never an error inside the store: lookups and removals of unknown
//! names return `None` or do nothing. [`WalletError::EntryNotFound`] exists only
//! for the command layer, where a missing name is reported to the user.

use std::path::PathBuf;
use thiserror::Error;

// =============================================================================
// Error Categories
// =============================================================================

/// High-level error categories for classification and routing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Address book load or persist failures.
    Storage,
    /// Bad caller input (snapshot files, addresses, transaction types).
    Input,
    /// Configuration issues (parse errors, invalid values).
    Configuration,
    /// Internal errors (unexpected I/O or serialization failures).
    Internal,
}

impl ErrorCategory {
    /// Returns a human-readable description of the category.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Storage => "Storage error",
            Self::Input => "Input error",
            Self::Configuration => "Configuration error",
            Self::Internal => "Internal error",
        }
    }

    /// Returns a short code prefix for this category.
    #[must_use]
    pub const fn code_prefix(&self) -> &'static str {
        match self {
            Self::Storage => "S",
            Self::Input => "I",
            Self::Configuration => "C",
            Self::Internal => "X",
        }
    }
}

impl std::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.description())
    }
}

// =============================================================================
// Exit Codes
// =============================================================================

/// Process exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success
    Success = 0,
    /// Unexpected failure, including failed writes
    GeneralError = 1,
    /// Named entry or input file does not exist
    NotFound = 2,
    /// Parse/format errors and invalid configuration
    ParseError = 3,
}

impl ExitCode {
    /// Process exit status byte.
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> Self {
        Self::from(code.as_u8())
    }
}

/// Main error type for walletbook operations.
#[derive(Error, Debug)]
pub enum WalletError {
    // ==========================================================================
    // Storage errors (Category: Storage)
    // ==========================================================================
    /// The address book file exists but is not a valid entry list.
    #[error("address book at {} is corrupt: {message}", path.display())]
    BookParse { path: PathBuf, message: String },

    /// The address book could not be written; in-memory state is unchanged.
    #[error("failed to persist address book to {}: {source}", path.display())]
    BookPersist {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // ==========================================================================
    // Input errors (Category: Input)
    // ==========================================================================
    /// No entry is stored under the requested name.
    #[error("no address book entry named '{0}'")]
    EntryNotFound(String),

    /// Account snapshot file not found.
    #[error("snapshot file not found: {}", path.display())]
    SnapshotNotFound { path: PathBuf },

    /// Account snapshot file is malformed.
    #[error("snapshot parse error at {}: {message}", path.display())]
    SnapshotParse { path: PathBuf, message: String },

    /// Address is not valid hex.
    #[error("invalid address: {0}")]
    InvalidAddress(String),

    /// Unknown transaction type name.
    #[error("invalid transaction type: {0}")]
    InvalidTransactionType(String),

    // ==========================================================================
    // Configuration errors (Category: Configuration)
    // ==========================================================================
    /// Error parsing configuration file.
    #[error("config parse error at {}: {message}", path.display())]
    ConfigParse { path: PathBuf, message: String },

    /// Invalid value in configuration.
    #[error("invalid config value for '{key}': {message}")]
    ConfigInvalid {
        key: String,
        value: String,
        message: String,
    },

    /// Generic configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    // ==========================================================================
    // I/O errors (Category: Internal)
    // ==========================================================================
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl WalletError {
    /// Map error to process exit code.
    #[must_use]
    pub const fn exit_code(&self) -> ExitCode {
        match self {
            Self::EntryNotFound(_) | Self::SnapshotNotFound { .. } => ExitCode::NotFound,

            Self::BookParse { .. }
            | Self::SnapshotParse { .. }
            | Self::InvalidAddress(_)
            | Self::InvalidTransactionType(_)
            | Self::ConfigParse { .. }
            | Self::ConfigInvalid { .. }
            | Self::Config(_) => ExitCode::ParseError,

            Self::BookPersist { .. } | Self::Io(_) | Self::Json(_) => ExitCode::GeneralError,
        }
    }

    /// Returns the error category for classification and routing.
    #[must_use]
    pub const fn category(&self) -> ErrorCategory {
        match self {
            Self::BookParse { .. } | Self::BookPersist { .. } => ErrorCategory::Storage,

            Self::EntryNotFound(_)
            | Self::SnapshotNotFound { .. }
            | Self::SnapshotParse { .. }
            | Self::InvalidAddress(_)
            | Self::InvalidTransactionType(_) => ErrorCategory::Input,

            Self::ConfigParse { .. } | Self::ConfigInvalid { .. } | Self::Config(_) => {
                ErrorCategory::Configuration
            }

            Self::Io(_) | Self::Json(_) => ErrorCategory::Internal,
        }
    }

    /// Returns a stable error code for programmatic handling.
    ///
    /// Format: `WB-{category}{number}`.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            // Storage errors (S001-S099)
            Self::BookParse { .. } => "WB-S001",
            Self::BookPersist { .. } => "WB-S002",

            // Input errors (I001-I099)
            Self::EntryNotFound(_) => "WB-I001",
            Self::SnapshotNotFound { .. } => "WB-I002",
            Self::SnapshotParse { .. } => "WB-I003",
            Self::InvalidAddress(_) => "WB-I010",
            Self::InvalidTransactionType(_) => "WB-I011",

            // Configuration errors (C001-C099)
            Self::ConfigParse { .. } => "WB-C001",
            Self::ConfigInvalid { .. } => "WB-C002",
            Self::Config(_) => "WB-C003",

            // Internal errors (X001-X099)
            Self::Io(_) => "WB-X001",
            Self::Json(_) => "WB-X002",
        }
    }
}

/// Result type alias for walletbook operations.
pub type Result<T> = std::result::Result<T, WalletError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn all_variants() -> Vec<WalletError> {
        vec![
            WalletError::BookParse {
                path: PathBuf::from("book.json"),
                message: "expected value".to_string(),
            },
            WalletError::BookPersist {
                path: PathBuf::from("book.json"),
                source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
            },
            WalletError::EntryNotFound("alice".to_string()),
            WalletError::SnapshotNotFound {
                path: PathBuf::from("accounts.json"),
            },
            WalletError::SnapshotParse {
                path: PathBuf::from("accounts.json"),
                message: "bad".to_string(),
            },
            WalletError::InvalidAddress("zz".to_string()),
            WalletError::InvalidTransactionType("mint".to_string()),
            WalletError::ConfigParse {
                path: PathBuf::from("config.toml"),
                message: "bad".to_string(),
            },
            WalletError::ConfigInvalid {
                key: "activity.limit".to_string(),
                value: "0".to_string(),
                message: "too small".to_string(),
            },
            WalletError::Config("bad".to_string()),
            WalletError::Io(std::io::Error::other("boom")),
            WalletError::Json(serde_json::from_str::<u32>("nope").unwrap_err()),
        ]
    }

    #[test]
    fn error_category_code_prefix() {
        assert_eq!(ErrorCategory::Storage.code_prefix(), "S");
        assert_eq!(ErrorCategory::Input.code_prefix(), "I");
        assert_eq!(ErrorCategory::Configuration.code_prefix(), "C");
        assert_eq!(ErrorCategory::Internal.code_prefix(), "X");
    }

    #[test]
    fn error_codes_follow_category_prefix() {
        for err in all_variants() {
            let code = err.error_code();
            let expected = format!("WB-{}", err.category().code_prefix());
            assert!(
                code.starts_with(&expected),
                "{code} should start with {expected}"
            );
            assert_eq!(code.len(), 7, "{code} should be WB-Xnnn");
        }
    }

    #[test]
    fn error_codes_are_unique() {
        let codes: Vec<_> = all_variants().iter().map(WalletError::error_code).collect();
        let unique: HashSet<_> = codes.iter().collect();
        assert_eq!(codes.len(), unique.len());
    }

    #[test]
    fn exit_codes_are_correct() {
        assert_eq!(
            WalletError::EntryNotFound("x".to_string()).exit_code(),
            ExitCode::NotFound
        );
        assert_eq!(
            WalletError::BookParse {
                path: PathBuf::from("a"),
                message: String::new(),
            }
            .exit_code(),
            ExitCode::ParseError
        );
        assert_eq!(
            WalletError::BookPersist {
                path: PathBuf::from("a"),
                source: std::io::Error::other("x"),
            }
            .exit_code(),
            ExitCode::GeneralError
        );
        assert_eq!(i32::from(ExitCode::ParseError), 3);
        assert_eq!(ExitCode::Success.as_u8(), 0);
        assert_eq!(ExitCode::NotFound.as_u8(), 2);
    }

    #[test]
    fn persist_error_keeps_io_source() {
        use std::error::Error as _;

        let err = WalletError::BookPersist {
            path: PathBuf::from("/ro/book.json"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.to_string().contains("/ro/book.json"));
        assert!(err.source().is_some());
    }
}
