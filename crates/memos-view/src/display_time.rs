//! Parsing of serialized display timestamps.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Formats accepted for timestamps that carry no offset.
const NAIVE_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Parses a serialized display time.
///
/// Accepts RFC 3339 with any offset, naive date-times (`T` or space
/// separated, optional fraction) and bare `YYYY-MM-DD` dates. Naive values
/// are read as UTC. Returns `None` for anything else.
///
/// # Example
///
/// ```
/// use memos_view::parse_display_time;
///
/// let a = parse_display_time("2024-03-01T10:00:00+02:00").unwrap();
/// let b = parse_display_time("2024-03-01 08:00:00").unwrap();
/// assert_eq!(a, b);
/// assert!(parse_display_time("not a date").is_none());
/// ```
pub fn parse_display_time(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }

    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, format) {
            return Some(naive.and_utc());
        }
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Parses a display time into whole epoch seconds, the unit used for ordering.
pub fn display_epoch_seconds(value: &str) -> Option<i64> {
    parse_display_time(value).map(|dt| dt.timestamp())
}
