//! Event time extraction.
//!
//! Producers stamp time under different field names, so the event time is the
//! first of [`TIMESTAMP_FIELDS`] that carries text. Unparseable or missing
//! times map to `0`: the record is kept and sorts earliest.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use super::record::Record;

/// Timestamp fields in precedence order.
pub const TIMESTAMP_FIELDS: [&str; 4] = ["ts", "Timestamp", "receivedAt", "createdAt"];

/// Date-times with a numeric offset that RFC 3339 rejects (`+0000`, no seconds).
const OFFSET_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f%z",
    "%Y-%m-%d %H:%M:%S%.f%z",
    "%Y-%m-%dT%H:%M%:z",
    "%Y-%m-%dT%H:%M%z",
];

/// Date-times without an offset, or with a literal `Z`. Read as UTC.
const NAIVE_FORMATS: [&str; 5] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%MZ",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// First non-empty timestamp text, or `""` when none is present.
pub fn timestamp_text(record: &Record) -> String {
    record.first_text(&TIMESTAMP_FIELDS).unwrap_or_default()
}

/// Event time in epoch milliseconds. `0` when absent or unparseable.
pub fn epoch_millis(record: &Record) -> i64 {
    parse_epoch_millis(&timestamp_text(record)).unwrap_or(0)
}

/// Parse a calendar date/time into epoch milliseconds.
///
/// Accepts RFC 3339, RFC 2822, ISO-8601 with `+hhmm` offsets or minute
/// precision, ISO-8601 without offset (UTC), and the reduced dates
/// `YYYY-MM-DD`, `YYYY-MM`, `YYYY` (UTC midnight of the first day).
pub fn parse_epoch_millis(text: &str) -> Option<i64> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.timestamp_millis());
    }
    for fmt in OFFSET_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(text, fmt) {
            return Some(dt.timestamp_millis());
        }
    }
    for fmt in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, fmt) {
            return Some(naive.and_utc().timestamp_millis());
        }
    }
    if let Some(date) = parse_reduced_date(text) {
        return date
            .and_hms_opt(0, 0, 0)
            .map(|midnight| midnight.and_utc().timestamp_millis());
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(text) {
        return Some(dt.timestamp_millis());
    }
    None
}

/// `YYYY-MM-DD`, `YYYY-MM`, or `YYYY`. Missing parts are the first month / day.
fn parse_reduced_date(text: &str) -> Option<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        return Some(date);
    }
    let all_digits = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());
    match text.split_once('-') {
        Some((year, month))
            if year.len() == 4 && month.len() == 2 && all_digits(year) && all_digits(month) =>
        {
            NaiveDate::parse_from_str(&format!("{year}-{month}-01"), "%Y-%m-%d").ok()
        }
        None if text.len() == 4 && all_digits(text) => {
            NaiveDate::parse_from_str(&format!("{text}-01-01"), "%Y-%m-%d").ok()
        }
        _ => None,
    }
}
