//! Parsing and display of event timestamps.
//!
//! Start and end times are stored as the raw strings found in the events
//! document or typed into the form. They are only interpreted for display.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};

/// Shown for a timestamp that cannot be interpreted.
pub const INVALID_DATE: &str = "Invalid Date";

const LOCAL_FORMATS: [&str; 5] = [
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%d %H:%M:%S",
];

/// Interpret a timestamp as a local wall-clock time.
///
/// Accepts ISO-local datetimes (the `datetime-local` input shape, also with a
/// space instead of the `T`), RFC 3339
/// timestamps (converted to the local zone) and plain dates (midnight UTC,
/// converted to the local zone).
pub fn parse(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();

    if let Some(dt) = LOCAL_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
    {
        return Some(dt);
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Local).naive_local());
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc().with_timezone(&Local).naive_local())
}

/// Format a timestamp the way the page shows it (e.g. "20-3-2026, 15:00:00").
pub fn display(value: &str) -> String {
    match parse(value) {
        Some(dt) => dt.format("%-d-%-m-%Y, %H:%M:%S").to_string(),
        None => INVALID_DATE.to_string(),
    }
}
