//! Time utility functions

use chrono::{Local, NaiveDate, NaiveTime, TimeZone};

/// Convert a calendar date to epoch milliseconds at local-timezone midnight.
///
/// When midnight does not exist locally (DST gap), falls back to the UTC
/// interpretation of the same wall-clock time.
pub fn date_to_epoch_millis(date: NaiveDate) -> i64 {
    let midnight = date.and_time(NaiveTime::MIN);
    match Local.from_local_datetime(&midnight).earliest() {
        Some(dt) => dt.timestamp_millis(),
        None => midnight.and_utc().timestamp_millis(),
    }
}

/// Parse a `YYYY-MM-DD` date string, `None` on anything else
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}
