//! Day alignment for unix timestamps.
//!
//! Every source keys its daily rows by the unix timestamp of 00:00:00 UTC.
//! A timestamp that is not aligned the same way never matches a row.

use chrono::{DateTime, NaiveDate, Utc};

/// Seconds in one UTC day.
pub const ONE_DAY_SECONDS: i64 = 86_400;

/// Truncate a unix timestamp (seconds) to 00:00:00 UTC of its day.
///
/// Returns `None` when the timestamp is outside the range chrono can
/// represent.
pub fn start_of_day_utc(timestamp: i64) -> Option<i64> {
    let datetime = DateTime::<Utc>::from_timestamp(timestamp, 0)?;
    let midnight = datetime.date_naive().and_hms_opt(0, 0, 0)?;
    Some(midnight.and_utc().timestamp())
}

/// Calendar date of a day-aligned timestamp, for log fields.
pub fn day_label(timestamp: i64) -> Option<NaiveDate> {
    DateTime::<Utc>::from_timestamp(timestamp, 0).map(|dt| dt.date_naive())
}

/// Current unix time in seconds.
pub fn now_unix() -> i64 {
    Utc::now().timestamp()
}
