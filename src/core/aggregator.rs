//! Transaction activity aggregation.
//!
//! Merges the transaction histories of several wallet accounts into one
//! deduplicated, newest-first, relation-tagged list.
//!
//! The routine is pure. Callers that mutate accounts concurrently must pass a
//! snapshot; nothing here guards against racing input.

use std::collections::HashSet;

use super::models::{Account, Address, ClassifiedTransaction, Relation, Transaction, TransactionType};

/// Number of rows shown by the home activity view.
pub const DEFAULT_ACTIVITY_LIMIT: usize = 6;

/// The set of addresses owned by the accounts being aggregated.
#[derive(Debug, Clone, Default)]
pub struct KnownAddresses<'a> {
    addresses: HashSet<&'a Address>,
}

impl<'a> KnownAddresses<'a> {
    #[must_use]
    pub fn from_accounts(accounts: &'a [Account]) -> Self {
        Self {
            addresses: accounts.iter().map(|a| &a.address).collect(),
        }
    }

    #[must_use]
    pub fn contains(&self, address: &Address) -> bool {
        self.addresses.contains(address)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.addresses.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.addresses.is_empty()
    }

    /// Relation of `tx` to this set, or `None` when neither side is known.
    #[must_use]
    pub fn classify(&self, tx: &Transaction) -> Option<Relation> {
        Relation::classify(self.contains(&tx.to), self.contains(&tx.from))
    }
}

/// Build the classified activity view.
///
/// 1. Known addresses are the addresses of `accounts`.
/// 2. Transactions of `type_filter` are collected walking accounts in the
///    given order and each history in stored order; the first occurrence of
///    a hash wins.
/// 3. The result is stable-sorted by timestamp, newest first.
/// 4. It is truncated to `limit`.
/// 5. Each remaining transaction is classified; ones touching no known
///    address are dropped, so the output may be shorter than `limit`.
#[must_use]
pub fn aggregate(
    accounts: &[Account],
    type_filter: TransactionType,
    limit: usize,
) -> Vec<ClassifiedTransaction> {
    let known = KnownAddresses::from_accounts(accounts);

    let mut seen = HashSet::new();
    let mut scanned = 0usize;
    let mut kept: Vec<&Transaction> = Vec::new();
    for account in accounts {
        for tx in &account.transactions {
            scanned += 1;
            if tx.tx_type == type_filter && seen.insert(&tx.hash) {
                kept.push(tx);
            }
        }
    }
    let unique = kept.len();

    // sort_by is stable: equal timestamps keep collection order
    kept.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    kept.truncate(limit);

    let result: Vec<ClassifiedTransaction> = kept
        .into_iter()
        .filter_map(|tx| {
            let Some(relation) = known.classify(tx) else {
                tracing::trace!(hash = %tx.hash, "Dropping transaction with no known side");
                return None;
            };
            Some(ClassifiedTransaction {
                transaction: tx.clone(),
                relation,
            })
        })
        .collect();

    tracing::debug!(
        accounts = accounts.len(),
        known = known.len(),
        scanned,
        unique,
        returned = result.len(),
        %type_filter,
        limit,
        "Aggregated transaction activity"
    );

    result
}

/// Parameters of an activity refresh.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivityQuery {
    pub type_filter: TransactionType,
    pub limit: usize,
}

impl Default for ActivityQuery {
    fn default() -> Self {
        Self {
            type_filter: TransactionType::Transfer,
            limit: DEFAULT_ACTIVITY_LIMIT,
        }
    }
}

impl ActivityQuery {
    #[must_use]
    pub const fn new(type_filter: TransactionType, limit: usize) -> Self {
        Self { type_filter, limit }
    }

    /// Run [`aggregate`] with these parameters.
    #[must_use]
    pub fn run(&self, accounts: &[Account]) -> Vec<ClassifiedTransaction> {
        aggregate(accounts, self.type_filter, self.limit)
    }
}
