//! County explorer ranking.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use voterstats_api::types::FloridaCountyRegistration;

/// Rows shown when there is no search query and "view all" is off.
pub const DEFAULT_RANKING_LIMIT: usize = 10;

/// Numeric field the explorer sorts by (always descending).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CountySortKey {
    #[default]
    Total,
    Republican,
    Democratic,
    Npa,
    RepShare,
    DemShare,
}

impl CountySortKey {
    pub const ALL: [CountySortKey; 6] = [
        CountySortKey::Total,
        CountySortKey::Republican,
        CountySortKey::Democratic,
        CountySortKey::Npa,
        CountySortKey::RepShare,
        CountySortKey::DemShare,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            CountySortKey::Total => "total",
            CountySortKey::Republican => "republican",
            CountySortKey::Democratic => "democratic",
            CountySortKey::Npa => "npa",
            CountySortKey::RepShare => "repShare",
            CountySortKey::DemShare => "demShare",
        }
    }

    /// The row's value for this key.
    pub fn value(self, row: &FloridaCountyRegistration) -> f64 {
        match self {
            CountySortKey::Total => row.total as f64,
            CountySortKey::Republican => row.republican as f64,
            CountySortKey::Democratic => row.democratic as f64,
            CountySortKey::Npa => row.npa as f64,
            CountySortKey::RepShare => row.rep_share,
            CountySortKey::DemShare => row.dem_share,
        }
    }
}

impl fmt::Display for CountySortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CountySortKey {
    type Err = ();

    /// Accepts the camelCase wire names plus kebab/snake spellings.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let folded: String = s
            .trim()
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .flat_map(char::to_lowercase)
            .collect();
        match folded.as_str() {
            "total" => Ok(CountySortKey::Total),
            "republican" => Ok(CountySortKey::Republican),
            "democratic" => Ok(CountySortKey::Democratic),
            "npa" => Ok(CountySortKey::Npa),
            "repshare" => Ok(CountySortKey::RepShare),
            "demshare" => Ok(CountySortKey::DemShare),
            _ => Err(()),
        }
    }
}

/// Filters counties by a case-insensitive name substring and sorts them
/// descending by `sort_key`.
///
/// With an empty query and `view_all` off only the first
/// [`DEFAULT_RANKING_LIMIT`] rows are returned.
pub fn county_ranking(
    counties: &[FloridaCountyRegistration],
    query: &str,
    sort_key: CountySortKey,
    view_all: bool,
) -> Vec<FloridaCountyRegistration> {
    let query = query.trim().to_lowercase();

    let mut ranked: Vec<FloridaCountyRegistration> = counties
        .iter()
        .filter(|row| query.is_empty() || row.county.to_lowercase().contains(&query))
        .cloned()
        .collect();
    ranked.sort_by(|left, right| sort_key.value(right).total_cmp(&sort_key.value(left)));

    if !view_all && query.is_empty() {
        ranked.truncate(DEFAULT_RANKING_LIMIT);
    }
    ranked
}
