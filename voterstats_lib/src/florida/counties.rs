//! County rows from the county-by-party report.

use std::sync::LazyLock;

use regex::Regex;
use voterstats_api::types::FloridaCountyRegistration;

use crate::text::{normalize_line, parse_integer_token, text_lines};

/// Upper-case county name, then republican, democratic, minor, NPA, total.
static COUNTY_ROW: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^([A-Z][A-Z.\-\s]+?)\s+([0-9,]+)\s+([0-9,]+)\s+([0-9,]+)\s+([0-9,]+)\s+([0-9,]+)$",
    )
    .expect("invalid regex: county row")
});

/// Header and footer labels that match the row shape but are not counties.
const NON_COUNTY_LABELS: &[&str] = &["TOTALS", "COUNTY"];

/// Party shares of a row's total.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Shares {
    pub republican: f64,
    pub democratic: f64,
    pub npa: f64,
    pub minor: f64,
}

/// Each count divided by `total`; all zero when `total` is zero.
///
/// When the counts add up to more than `total` they are divided by their
/// own sum instead, so every share stays in `0.0..=1.0` and the four never
/// sum past one.
pub fn compute_shares(republican: u64, democratic: u64, minor: u64, npa: u64, total: u64) -> Shares {
    if total == 0 {
        return Shares::default();
    }
    let category_sum = republican as f64 + democratic as f64 + minor as f64 + npa as f64;
    let total = (total as f64).max(category_sum);
    Shares {
        republican: republican as f64 / total,
        democratic: democratic as f64 / total,
        npa: npa as f64 / total,
        minor: minor as f64 / total,
    }
}

/// `MIAMI-DADE` -> `Miami-Dade`, `ST. JOHNS` -> `St. Johns`.
pub fn format_county_name(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut at_word_start = true;
    for ch in raw.chars().flat_map(char::to_lowercase) {
        if at_word_start {
            out.extend(ch.to_uppercase());
        } else {
            out.push(ch);
        }
        at_word_start = !(ch.is_alphanumeric() || ch == '_');
    }
    out
}

/// Parses one normalized line into a county row.
///
/// Returns `None` for lines of any other shape and for the `TOTALS` and
/// `COUNTY` label rows.
pub fn parse_county_line(line: &str) -> Option<FloridaCountyRegistration> {
    let caps = COUNTY_ROW.captures(line)?;
    let raw_name = normalize_line(&caps[1]);
    if NON_COUNTY_LABELS.contains(&raw_name.as_str()) {
        return None;
    }

    let column = |index: usize| parse_integer_token(&caps[index]);
    let republican = column(2)?;
    let democratic = column(3)?;
    let minor = column(4)?;
    let npa = column(5)?;
    let total = column(6)?;
    let shares = compute_shares(republican, democratic, minor, npa, total);

    Some(FloridaCountyRegistration {
        county: format_county_name(&raw_name),
        republican,
        democratic,
        npa,
        minor,
        total,
        rep_share: shares.republican,
        dem_share: shares.democratic,
        npa_share: shares.npa,
        minor_share: shares.minor,
    })
}

/// Parses every county row in a county-by-party page, largest total first.
///
/// A page with no matching rows yields an empty list.
pub fn parse_county_rows(content: &str) -> Vec<FloridaCountyRegistration> {
    let mut rows: Vec<FloridaCountyRegistration> = text_lines(content)
        .iter()
        .filter_map(|line| parse_county_line(line))
        .collect();
    rows.sort_by(|left, right| right.total.cmp(&left.total));
    tracing::debug!("Parsed {} county rows", rows.len());
    rows
}
