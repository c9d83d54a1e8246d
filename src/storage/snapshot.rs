//! Account snapshot files.
//!
//! The wallet layer exports its accounts as JSON:
//!
//! ```json
//! {"accounts": [{"address": "0x…", "transactions": [{"hash": "…", "from": "…",
//!   "to": "…", "value": 1000000000, "timestamp": 1500000000000, "type": "TRANSFER"}]}]}
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::models::Account;
use crate::error::{Result, WalletError};

/// A point-in-time copy of the wallet's accounts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountSnapshot {
    pub accounts: Vec<Account>,
}

/// Load a snapshot file.
///
/// # Errors
/// Returns [`WalletError::SnapshotNotFound`] if the file does not exist and
/// [`WalletError::SnapshotParse`] if it is malformed.
pub fn load_snapshot(path: &Path) -> Result<AccountSnapshot> {
    if !path.exists() {
        return Err(WalletError::SnapshotNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = std::fs::read(path)?;
    let snapshot: AccountSnapshot =
        serde_json::from_slice(&content).map_err(|e| WalletError::SnapshotParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    tracing::debug!(
        path = %path.display(),
        accounts = snapshot.accounts.len(),
        transactions = snapshot.accounts.iter().map(|a| a.transactions.len()).sum::<usize>(),
        "Loaded account snapshot"
    );
    Ok(snapshot)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn load_valid_snapshot() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"accounts": [
                {{"address": "0x0a", "transactions": [
                    {{"hash": "01", "from": "0a", "to": "0c", "value": 5, "timestamp": 10, "type": "TRANSFER"}}
                ]}},
                {{"address": "0b"}}
            ]}}"#
        )
        .unwrap();

        let snapshot = load_snapshot(file.path()).unwrap();
        assert_eq!(snapshot.accounts.len(), 2);
        assert_eq!(snapshot.accounts[0].transactions.len(), 1);
        assert!(snapshot.accounts[1].transactions.is_empty());
    }

    #[test]
    fn missing_snapshot_is_not_found() {
        let err = load_snapshot(Path::new("/nonexistent/accounts.json")).unwrap_err();
        assert!(matches!(err, WalletError::SnapshotNotFound { .. }));
    }

    #[test]
    fn malformed_snapshot_is_parse_error() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"accounts": [{{"address": "not-hex"}}]}}"#).unwrap();

        let err = load_snapshot(file.path()).unwrap_err();
        assert!(matches!(err, WalletError::SnapshotParse { .. }));
    }

    #[test]
    fn non_utf8_snapshot_is_parse_error() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(&[0x7b, 0xff, 0xfe, 0x7d]).unwrap();

        let err = load_snapshot(file.path()).unwrap_err();
        assert!(matches!(err, WalletError::SnapshotParse { .. }));
        assert_eq!(err.exit_code(), crate::error::ExitCode::ParseError);
    }
}
