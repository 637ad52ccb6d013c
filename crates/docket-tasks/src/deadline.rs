//! Deadline text to calendar date

use chrono::{DateTime, NaiveDate, NaiveDateTime};

const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%B %d, %Y",
    "%b %d, %Y",
    "%d %B %Y",
];

const DATETIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"];

/// Parse a deadline to a calendar date, discarding any time of day
///
/// Returns `None` for relative or free-form phrases such as "next Tuesday".
///
/// # Examples
///
/// ```
/// use docket_tasks::parse_deadline;
///
/// assert_eq!(parse_deadline("2025-01-20").unwrap().to_string(), "2025-01-20");
/// assert!(parse_deadline("next Tuesday").is_none());
/// ```
pub fn parse_deadline(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.date_naive());
    }

    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(text, fmt).ok())
        .map(|dt| dt.date())
        .or_else(|| {
            DATE_FORMATS
                .iter()
                .find_map(|fmt| NaiveDate::parse_from_str(text, fmt).ok())
        })
}

/// Render a date the way the task service's date column expects
pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(y, m, d)
    }

    #[test]
    fn test_iso_date() {
        assert_eq!(parse_deadline("2025-01-20"), ymd(2025, 1, 20));
        assert_eq!(parse_deadline("  2025-01-20  "), ymd(2025, 1, 20));
    }

    #[test]
    fn test_timestamps_drop_time_of_day() {
        assert_eq!(parse_deadline("2025-01-20T17:30:00Z"), ymd(2025, 1, 20));
        assert_eq!(parse_deadline("2025-01-20T09:00:00+02:00"), ymd(2025, 1, 20));
        assert_eq!(parse_deadline("2025-01-20T17:30:00"), ymd(2025, 1, 20));
        assert_eq!(parse_deadline("2025-01-20T17:30"), ymd(2025, 1, 20));
    }

    #[test]
    fn test_other_calendar_formats() {
        assert_eq!(parse_deadline("2025/01/20"), ymd(2025, 1, 20));
        assert_eq!(parse_deadline("01/20/2025"), ymd(2025, 1, 20));
        assert_eq!(parse_deadline("January 20, 2025"), ymd(2025, 1, 20));
        assert_eq!(parse_deadline("Jan 20, 2025"), ymd(2025, 1, 20));
        assert_eq!(parse_deadline("20 January 2025"), ymd(2025, 1, 20));
    }

    #[test]
    fn test_unparseable() {
        assert_eq!(parse_deadline("next Tuesday"), None);
        assert_eq!(parse_deadline("end of quarter"), None);
        assert_eq!(parse_deadline(""), None);
        assert_eq!(parse_deadline("2025-02-30"), None);
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date(NaiveDate::from_ymd_opt(2025, 3, 4).unwrap()), "2025-03-04");
    }
}
