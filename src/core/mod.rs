//! Core data models, activity aggregation, and logging.

pub mod aggregator;
pub mod logging;
pub mod models;

pub use aggregator::{ActivityQuery, DEFAULT_ACTIVITY_LIMIT, KnownAddresses, aggregate};
pub use models::{
    Account, ActivityRow, Address, BookChange, ClassifiedTransaction, Entry, Relation,
    RobotOutput, Transaction, TransactionType, TxHash,
};
