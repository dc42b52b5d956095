//! Statewide party totals from the party-affiliation report.
//!
//! The report lists one row per year (`2025 5,509,354 4,330,372 ...`); some
//! renderings instead end with a `TOTALS` row. Both carry five columns in the
//! order republican, democratic, minor, NPA, total.

use std::sync::LazyLock;

use regex::{Captures, Regex};
use voterstats_api::types::FloridaPartyTotals;

use crate::text::{parse_integer_token, text_lines};

static YEAR_ROW: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(20[0-9]{2})\s+([0-9,]+)\s+([0-9,]+)\s+([0-9,]+)\s+([0-9,]+)\s+([0-9,]+)$")
        .expect("invalid regex: year row")
});

static TOTALS_ROW: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^TOTALS\s+([0-9,]+)\s+([0-9,]+)\s+([0-9,]+)\s+([0-9,]+)\s+([0-9,]+)$")
        .expect("invalid regex: totals row")
});

/// Maps five consecutive capture groups starting at `first` to totals.
fn totals_from_columns(caps: &Captures<'_>, first: usize) -> Option<FloridaPartyTotals> {
    let column = |offset: usize| {
        caps.get(first + offset)
            .and_then(|m| parse_integer_token(m.as_str()))
    };
    Some(FloridaPartyTotals {
        republican: column(0)?,
        democratic: column(1)?,
        minor: column(2)?,
        npa: column(3)?,
        total: column(4)?,
    })
}

/// Year-row strategy: the row with the largest leading year wins.
/// When two rows share that year the first one is kept.
pub fn year_row_totals(lines: &[String]) -> Option<FloridaPartyTotals> {
    let mut best: Option<(u64, FloridaPartyTotals)> = None;
    for line in lines {
        let Some(caps) = YEAR_ROW.captures(line) else {
            continue;
        };
        let Some(year) = parse_integer_token(&caps[1]) else {
            continue;
        };
        let Some(totals) = totals_from_columns(&caps, 2) else {
            continue;
        };
        if best.map_or(true, |(best_year, _)| year > best_year) {
            best = Some((year, totals));
        }
    }
    best.map(|(_, totals)| totals)
}

/// `TOTALS`-row strategy: the first `TOTALS` line followed by five integers.
pub fn totals_row_totals(lines: &[String]) -> Option<FloridaPartyTotals> {
    lines
        .iter()
        .filter_map(|line| TOTALS_ROW.captures(line))
        .find_map(|caps| totals_from_columns(&caps, 1))
}

/// Parses statewide totals from a party-affiliation page.
///
/// Returns `None` when neither a year row nor a `TOTALS` row is present.
pub fn parse_party_totals(content: &str) -> Option<FloridaPartyTotals> {
    let lines = text_lines(content);
    let parsed = year_row_totals(&lines).or_else(|| totals_row_totals(&lines));
    if parsed.is_none() {
        tracing::debug!("No party totals row found in {} lines", lines.len());
    }
    parsed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_single_year_row() {
        let totals = parse_party_totals("2026 1,000 900 100 500 2,500").unwrap();
        assert_eq!(
            totals,
            FloridaPartyTotals {
                republican: 1000,
                democratic: 900,
                minor: 100,
                npa: 500,
                total: 2500,
            }
        );
    }

    #[test]
    fn picks_largest_year_not_first_or_last() {
        let text = "\
Year Republican Democratic Minor No Party Affiliation Total
2023 1 1 1 1 4
2025 5,509,354 4,330,372 403,778 3,847,473 14,091,977
2024 2 2 2 2 8";
        let totals = parse_party_totals(text).unwrap();
        assert_eq!(totals.republican, 5_509_354);
        assert_eq!(totals.total, 14_091_977);
    }

    #[test]
    fn same_year_keeps_first_occurrence() {
        let text = "2025 10 10 10 10 40\n2025 20 20 20 20 80";
        assert_eq!(parse_party_totals(text).unwrap().total, 40);
    }

    #[test]
    fn falls_back_to_totals_row() {
        let html = "<table><tr><td>County</td></tr><tr><td>TOTALS</td><td>5</td><td>4</td><td>3</td><td>2</td><td>14</td></tr></table>";
        let totals = parse_party_totals(html).unwrap();
        assert_eq!(totals.republican, 5);
        assert_eq!(totals.democratic, 4);
        assert_eq!(totals.minor, 3);
        assert_eq!(totals.npa, 2);
        assert_eq!(totals.total, 14);
    }

    #[test]
    fn year_row_preferred_over_totals_row() {
        let text = "TOTALS 1 1 1 1 4\n2024 2 2 2 2 8";
        assert_eq!(parse_party_totals(text).unwrap().total, 8);
    }

    #[test]
    fn rejects_rows_with_wrong_column_count() {
        assert!(parse_party_totals("2025 1 2 3 4").is_none());
        assert!(parse_party_totals("TOTALS 1 2 3 4 5 6").is_none());
        assert!(parse_party_totals("1999 1 2 3 4 10").is_none());
    }

    #[test]
    fn empty_input_is_none() {
        assert!(parse_party_totals("").is_none());
    }
}
