//! "Data as of" date extraction and timestamp formatting.

use std::sync::LazyLock;

use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use regex::Regex;

use crate::text::{flatten_html_to_text, normalize_line};

/// Returned when no as-of date can be found.
pub use voterstats_api::types::UNKNOWN as UNKNOWN_DATE;

static MONTH_NAME_DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)Data\s+as\s+of\s*:?\s*([A-Za-z]+\s+\d{1,2},\s*\d{4})")
        .expect("invalid regex: month name date")
});

static NUMERIC_DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)Data\s+as\s+of\s*:?\s*(\d{1,2}/\d{1,2}/\d{2,4})")
        .expect("invalid regex: numeric date")
});

/// Finds the "Data as of ..." stamp in a source page and returns it as
/// `YYYY-MM-DD`, or [`UNKNOWN_DATE`] when the page carries none.
pub fn extract_as_of_date(content: &str) -> String {
    let text = flatten_html_to_text(content);

    if let Some(raw) = MONTH_NAME_DATE.captures(&text).and_then(|c| c.get(1)) {
        return to_iso_date(raw.as_str());
    }
    if let Some(raw) = NUMERIC_DATE.captures(&text).and_then(|c| c.get(1)) {
        return to_iso_date(raw.as_str());
    }

    UNKNOWN_DATE.to_string()
}

/// Converts a matched date string to `YYYY-MM-DD`.
///
/// Periods are dropped and whitespace collapsed first. A string that does not
/// parse as a calendar date is returned in that cleaned form rather than
/// rejected.
pub fn to_iso_date(raw: &str) -> String {
    let text = normalize_line(&raw.replace('.', ""));
    if text.is_empty() {
        return UNKNOWN_DATE.to_string();
    }

    match parse_month_name_date(&text).or_else(|| parse_numeric_date(&text)) {
        Some(date) => date.format("%Y-%m-%d").to_string(),
        None => text,
    }
}

fn parse_month_name_date(text: &str) -> Option<NaiveDate> {
    // "December 31, 2025", "Dec 31,2025"; chrono's %B also takes abbreviations.
    let spaced = normalize_line(&text.replace(',', " "));
    NaiveDate::parse_from_str(&spaced, "%B %d %Y").ok()
}

fn parse_numeric_date(text: &str) -> Option<NaiveDate> {
    let mut parts = text.split('/');
    let month: u32 = parts.next()?.trim().parse().ok()?;
    let day: u32 = parts.next()?.trim().parse().ok()?;
    let year_raw = parts.next()?.trim();
    if parts.next().is_some() {
        return None;
    }
    let year: i32 = year_raw.parse().ok()?;
    let year = match year_raw.len() {
        1 | 2 if year < 50 => 2000 + year,
        1 | 2 => 1900 + year,
        _ => year,
    };
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Formats a timestamp the way the website serializes `lastChecked`
/// (`2026-02-08T00:00:00.000Z`).
pub fn iso_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}
