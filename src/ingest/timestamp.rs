//! Timestamp parsing and formatting.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Datetime layouts tried after RFC 3339, in order.
const DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
    "%m/%d/%Y %H:%M:%S",
    "%m-%d-%Y %H:%M:%S",
];

/// Parse a timestamp cell into a UTC datetime.
///
/// Accepts, in order:
/// - digits-only strings of ten or more characters as Unix epochs
///   (exactly ten digits are seconds, longer is milliseconds),
/// - RFC 3339,
/// - `YYYY-MM-DDTHH:MM:SS`, `YYYY-MM-DD HH:MM:SS`, `MM/DD/YYYY HH:MM:SS`
///   and `MM-DD-YYYY HH:MM:SS`,
/// - bare `YYYY-MM-DD` dates, taken as midnight.
///
/// Returns `None` when no form matches, so callers can skip the row rather
/// than abort the whole ingest.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if raw.len() >= 10 && raw.bytes().all(|b| b.is_ascii_digit()) {
        let epoch: i64 = raw.parse().ok()?;
        return if raw.len() == 10 {
            DateTime::from_timestamp(epoch, 0)
        } else {
            DateTime::from_timestamp_millis(epoch)
        };
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }

    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(dt.and_utc());
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date.and_hms_opt(0, 0, 0)?.and_utc());
    }

    None
}

/// Format a UTC datetime as `YYYY-MM-DD HH:MM:SS`.
pub fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp.format("%Y-%m-%d %H:%M:%S").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn parses_epoch_seconds_and_millis() {
        // 2021-01-01 00:00:00 UTC
        let expected = Utc.with_ymd_and_hms(2021, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(parse_timestamp("1609459200"), Some(expected));
        assert_eq!(parse_timestamp("1609459200000"), Some(expected));
    }

    #[test]
    fn short_numeric_strings_are_not_epochs() {
        assert_eq!(parse_timestamp("12345"), None);
        assert_eq!(parse_timestamp("0"), None);
    }

    #[test]
    fn parses_rfc3339() {
        let expected = Utc.with_ymd_and_hms(2024, 3, 15, 14, 30, 0).unwrap();
        assert_eq!(parse_timestamp("2024-03-15T14:30:00Z"), Some(expected));
        assert_eq!(parse_timestamp("2024-03-15T16:30:00+02:00"), Some(expected));
    }

    #[test]
    fn parses_iso_without_zone_as_utc() {
        let expected = Utc.with_ymd_and_hms(2024, 3, 15, 14, 30, 0).unwrap();
        assert_eq!(parse_timestamp("2024-03-15T14:30:00"), Some(expected));
        assert_eq!(parse_timestamp("2024-03-15 14:30:00"), Some(expected));
    }

    #[test]
    fn parses_us_layouts() {
        let expected = Utc.with_ymd_and_hms(2024, 3, 15, 14, 30, 0).unwrap();
        assert_eq!(parse_timestamp("03/15/2024 14:30:00"), Some(expected));
        assert_eq!(parse_timestamp("03-15-2024 14:30:00"), Some(expected));
    }

    #[test]
    fn parses_bare_date_as_midnight() {
        let expected = Utc.with_ymd_and_hms(2024, 3, 15, 0, 0, 0).unwrap();
        assert_eq!(parse_timestamp("2024-03-15"), Some(expected));
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(parse_timestamp(""), None);
        assert_eq!(parse_timestamp("   "), None);
        assert_eq!(parse_timestamp("not a date"), None);
        assert_eq!(parse_timestamp("2024-13-40 99:99:99"), None);
    }

    #[test]
    fn format_round_trips_through_parse() {
        let ts = Utc.with_ymd_and_hms(2023, 11, 5, 7, 42, 9).unwrap();
        let formatted = format_timestamp(&ts);
        assert_eq!(formatted, "2023-11-05 07:42:09");
        assert_eq!(parse_timestamp(&formatted), Some(ts));
    }
}
