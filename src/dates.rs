//! Date Utilities
//!
//! Conversions between the date-picker value and the ISO-8601 strings the API stores.

use chrono::{NaiveDate, NaiveDateTime};

/// Normalize a `YYYY-MM-DD` date-picker value (or a full timestamp) to
/// UTC ISO-8601 with millisecond precision, e.g. `2024-05-01T00:00:00.000Z`.
/// Returns `None` for input no date can be read from.
pub fn to_iso_timestamp(input: &str) -> Option<String> {
    let input = input.trim();
    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        return Some(format_utc(date.and_hms_opt(0, 0, 0)?));
    }
    chrono::DateTime::parse_from_rfc3339(input)
        .ok()
        .map(|dt| format_utc(dt.naive_utc()))
}

fn format_utc(dt: NaiveDateTime) -> String {
    dt.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string()
}

/// Date portion of a stored timestamp (its first 10 characters)
pub fn display_date(iso: &str) -> String {
    iso.chars().take(10).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_picker_value_becomes_utc_midnight() {
        assert_eq!(
            to_iso_timestamp("2024-05-01").as_deref(),
            Some("2024-05-01T00:00:00.000Z")
        );
    }

    #[test]
    fn test_offset_timestamp_is_shifted_to_utc() {
        assert_eq!(
            to_iso_timestamp("2024-05-01T02:30:00+02:00").as_deref(),
            Some("2024-05-01T00:30:00.000Z")
        );
    }

    #[test]
    fn test_invalid_input() {
        assert_eq!(to_iso_timestamp(""), None);
        assert_eq!(to_iso_timestamp("2024-13-40"), None);
        assert_eq!(to_iso_timestamp("tomorrow"), None);
    }

    #[test]
    fn test_display_date_is_first_ten_chars() {
        let stored = "2024-05-01T00:00:00.000Z";
        assert_eq!(display_date(stored), &stored[..10]);
        assert_eq!(display_date("2024"), "2024");
    }
}
