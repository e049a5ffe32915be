//! Date helper functions

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Parse a post date into a calendar date
///
/// # Examples
/// ```ignore
/// parse_date("2024-01-15")          // -> Some(2024-01-15)
/// parse_date("2024/01/15 10:30")    // -> Some(2024-01-15)
/// parse_date("yesterday")           // -> None
/// ```
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();

    for fmt in ["%Y-%m-%d", "%Y/%m/%d"] {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return Some(d);
        }
    }

    let formats = [
        "%Y-%m-%d %H:%M:%S",
        "%Y/%m/%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
        "%Y/%m/%d %H:%M",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M:%S%.f",
    ];

    for fmt in formats {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt.date());
        }
    }

    // RFC 3339 / ISO 8601 with offset, normalized to UTC
    DateTime::parse_from_rfc3339(s)
        .ok()
        .map(|dt| dt.with_timezone(&Utc).date_naive())
}

/// Format a timestamp as the UTC `YYYY-MM-DD` date
pub fn format_utc_date(date: &DateTime<Utc>) -> String {
    date.format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_date_formats() {
        assert_eq!(parse_date("2024-01-15"), Some(ymd(2024, 1, 15)));
        assert_eq!(parse_date(" 2024/01/15 "), Some(ymd(2024, 1, 15)));
        assert_eq!(parse_date("2024-01-15 10:30"), Some(ymd(2024, 1, 15)));
        assert_eq!(parse_date("2024-01-15T10:30:00"), Some(ymd(2024, 1, 15)));
        assert_eq!(
            parse_date("2024-01-15T23:30:00-05:00"),
            Some(ymd(2024, 1, 16))
        );
    }

    #[test]
    fn test_parse_invalid_date() {
        assert_eq!(parse_date("someday"), None);
        assert_eq!(parse_date("2024-13-01"), None);
        assert_eq!(parse_date(""), None);
    }

    #[test]
    fn test_format_utc_date() {
        let date = Utc.with_ymd_and_hms(2024, 1, 15, 23, 59, 59).unwrap();
        assert_eq!(format_utc_date(&date), "2024-01-15");
    }
}
