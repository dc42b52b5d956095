use serde::{Deserialize, Serialize};

use super::meta::{ApiResponse, DatasetMeta};

/// Statewide registration counts by party.
///
/// The four categories are expected, but not required, to add up to `total`.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FloridaPartyTotals {
    pub republican: u64,
    pub democratic: u64,
    pub npa: u64,
    pub minor: u64,
    pub total: u64,
}

impl FloridaPartyTotals {
    /// Sum of the four party categories, saturating at `u64::MAX`.
    pub fn category_sum(&self) -> u64 {
        self.republican
            .saturating_add(self.democratic)
            .saturating_add(self.npa)
            .saturating_add(self.minor)
    }
}

/// One county row with its derived party shares.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FloridaCountyRegistration {
    pub county: String,
    pub republican: u64,
    pub democratic: u64,
    pub npa: u64,
    pub minor: u64,
    pub total: u64,
    pub rep_share: f64,
    pub dem_share: f64,
    pub npa_share: f64,
    pub minor_share: f64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FloridaSourceMeta {
    pub party_totals: DatasetMeta,
    pub county_breakdown: DatasetMeta,
}

/// A complete point-in-time Florida registration snapshot.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FloridaRegistration {
    pub totals: FloridaPartyTotals,
    /// Ordered by descending total at build time.
    pub by_county: Vec<FloridaCountyRegistration>,
    pub source_meta: FloridaSourceMeta,
    pub notes: Vec<String>,
    pub last_refreshed: String,
    pub used_fallback: bool,
}

pub type FloridaApiResponse = ApiResponse<FloridaRegistration>;
