//! Date normalization for statement text.
//!
//! Numeric dates come in as Y-M-D, D-M-Y or M-D-Y with `-`, `/` or `.`
//! separators. Anything else goes through a short list of textual formats.

use std::sync::LazyLock;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use regex::Regex;

static NUMERIC_DATE: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(r"\b(\d{1,4})[-/.](\d{1,2})[-/.](\d{1,4})\b").ok()
});

const DATE_FORMATS: &[&str] = &[
    "%d %b %Y",
    "%d %B %Y",
    "%d-%b-%Y",
    "%d-%b-%y",
    "%d %b %y",
    "%b %d, %Y",
    "%B %d, %Y",
    "%b %d %Y",
    "%B %d %Y",
];

const DATETIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S", "%d/%m/%Y %H:%M"];

/// Normalize `text` to a calendar date, falling back to `today`.
pub fn normalize_date(text: &str, today: NaiveDate) -> NaiveDate {
    parse_date(text).unwrap_or(today)
}

/// Best-effort parse without a fallback.
pub fn parse_date(text: &str) -> Option<NaiveDate> {
    numeric_date(text).or_else(|| calendar_date(text))
}

/// True for fields shaped like a date, even when the numbers are out of range.
pub fn looks_like_date(text: &str) -> bool {
    let shaped = NUMERIC_DATE
        .as_ref()
        .is_some_and(|re| re.is_match(text));
    shaped || calendar_date(text).is_some()
}

fn numeric_date(text: &str) -> Option<NaiveDate> {
    let caps = NUMERIC_DATE.as_ref()?.captures(text)?;
    let (a, b, c) = (&caps[1], &caps[2], &caps[3]);
    let num = |s: &str| s.parse::<u32>().ok();

    if a.len() == 4 {
        let year = a.parse::<i32>().ok()?;
        return NaiveDate::from_ymd_opt(year, num(b)?, num(c)?);
    }

    let year = match c.len() {
        4 => c.parse::<i32>().ok()?,
        // Two-digit years read as 20YY, same day-first order
        2 => 2000 + c.parse::<i32>().ok()?,
        _ => return None,
    };
    let (mut day, mut month) = (num(a)?, num(b)?);
    // Day-first unless the middle group cannot be a month (01/31/2024)
    if month > 12 && day <= 12 {
        std::mem::swap(&mut day, &mut month);
    }
    NaiveDate::from_ymd_opt(year, month, day)
}

fn calendar_date(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.date_naive());
    }
    DATETIME_FORMATS
        .iter()
        .find_map(|f| NaiveDateTime::parse_from_str(text, f).ok().map(|dt| dt.date()))
        .or_else(|| {
            DATE_FORMATS
                .iter()
                .find_map(|f| NaiveDate::parse_from_str(text, f).ok())
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn today() -> NaiveDate {
        ymd(2026, 2, 19)
    }

    #[test]
    fn test_iso_passes_through() {
        assert_eq!(normalize_date("2024-01-31", today()), ymd(2024, 1, 31));
        assert_eq!(normalize_date("2024/1/5", today()), ymd(2024, 1, 5));
    }

    #[test]
    fn test_day_first_with_four_digit_year() {
        assert_eq!(normalize_date("31/01/2024", today()), ymd(2024, 1, 31));
        assert_eq!(normalize_date("02-01-2024", today()), ymd(2024, 1, 2));
        assert_eq!(normalize_date("5.3.2024", today()), ymd(2024, 3, 5));
    }

    #[test]
    fn test_month_first_when_middle_is_not_a_month() {
        assert_eq!(normalize_date("01/31/2024", today()), ymd(2024, 1, 31));
    }

    #[test]
    fn test_two_digit_year() {
        assert_eq!(normalize_date("12/05/24", today()), ymd(2024, 5, 12));
    }

    #[test]
    fn test_textual_formats() {
        assert_eq!(normalize_date("12 May 2024", today()), ymd(2024, 5, 12));
        assert_eq!(normalize_date("05-Mar-2024", today()), ymd(2024, 3, 5));
        assert_eq!(normalize_date("March 5, 2024", today()), ymd(2024, 3, 5));
        assert_eq!(normalize_date("2024-03-05T10:15:00+05:30", today()), ymd(2024, 3, 5));
    }

    #[test]
    fn test_date_inside_longer_text() {
        assert_eq!(normalize_date("Txn on 12/05/2024 10:30", today()), ymd(2024, 5, 12));
    }

    #[test]
    fn test_unparseable_defaults_to_today() {
        assert_eq!(normalize_date("yesterday-ish", today()), today());
        assert_eq!(normalize_date("", today()), today());
        assert_eq!(normalize_date("45/45/2024", today()), today());
    }

    #[test]
    fn test_looks_like_date() {
        assert!(looks_like_date("12/05/2024"));
        assert!(looks_like_date("45/45/2024"));
        assert!(looks_like_date("12 May 2024"));
        assert!(!looks_like_date("450"));
        assert!(!looks_like_date("Starbucks"));
        assert!(!looks_like_date("1,234.50"));
    }
}
