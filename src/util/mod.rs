//! Utility functions.

pub mod env;
pub mod format;
pub mod time;

pub use format::{NANO_PER_SEM, format_sem};
pub use time::format_timestamp_ms;
