//! Time formatting utilities.

use chrono::{Local, TimeZone};

/// Display pattern for transaction timestamps.
pub const TIMESTAMP_FORMAT: &str = "%m/%d %H:%M:%S";

/// Format epoch milliseconds as `MM/dd HH:mm:ss` in local time.
#[must_use]
pub fn format_timestamp_ms(millis: i64) -> String {
    format_timestamp_in(millis, &Local)
}

/// Format epoch milliseconds in the given time zone.
///
/// Out-of-range timestamps render as `-`.
#[must_use]
pub fn format_timestamp_in<Tz>(millis: i64, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    tz.timestamp_millis_opt(millis)
        .earliest()
        .map_or_else(|| "-".to_string(), |dt| dt.format(TIMESTAMP_FORMAT).to_string())
}
