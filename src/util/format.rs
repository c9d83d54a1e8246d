//! Amount formatting.

/// Nano units per SEM.
pub const NANO_PER_SEM: u64 = 1_000_000_000;

/// Format a nano amount as SEM with three decimals, e.g. `+1.500 SEM`.
///
/// Rounds half up at the third decimal.
#[must_use]
pub fn format_sem(nano: u64, prefix: &str) -> String {
    let thousandths = (u128::from(nano) + 500_000) / 1_000_000;
    let whole = thousandths / 1000;
    let frac = thousandths % 1000;
    format!("{prefix}{whole}.{frac:03} SEM")
}
