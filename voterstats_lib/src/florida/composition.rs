//! Statewide composition breakdown for the registration donut chart.

use serde::{Deserialize, Serialize};
use voterstats_api::types::FloridaPartyTotals;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompositionKey {
    Republican,
    Democratic,
    Npa,
    Minor,
    Other,
}

impl CompositionKey {
    pub fn color(self) -> &'static str {
        match self {
            CompositionKey::Republican => "#1f3a5f",
            CompositionKey::Democratic => "#5f7ea6",
            CompositionKey::Npa => "#a9b7cc",
            CompositionKey::Minor => "#b24c57",
            CompositionKey::Other => "#8f9bb0",
        }
    }
}

/// One slice of the composition chart.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CompositionDatum {
    pub key: CompositionKey,
    pub label: String,
    pub value: u64,
    /// Fraction of the statewide total, `0.0..=1.0` for consistent sources.
    pub percent: f64,
    pub color: String,
}

/// Splits statewide totals into chart slices.
///
/// The two-party view folds NPA and minor parties into one "Other" slice.
/// A zero total yields no slices.
pub fn composition_data(totals: &FloridaPartyTotals, two_party_view: bool) -> Vec<CompositionDatum> {
    if totals.total == 0 {
        return Vec::new();
    }

    let slices: Vec<(CompositionKey, &str, u64)> = if two_party_view {
        vec![
            (CompositionKey::Republican, "Republican", totals.republican),
            (CompositionKey::Democratic, "Democratic", totals.democratic),
            (
                CompositionKey::Other,
                "Other (NPA + Minor)",
                totals.npa.saturating_add(totals.minor),
            ),
        ]
    } else {
        vec![
            (CompositionKey::Republican, "Republican", totals.republican),
            (CompositionKey::Democratic, "Democratic", totals.democratic),
            (CompositionKey::Npa, "No Party Affiliation", totals.npa),
            (CompositionKey::Minor, "Minor Parties", totals.minor),
        ]
    };

    slices
        .into_iter()
        .map(|(key, label, value)| CompositionDatum {
            key,
            label: label.to_string(),
            value,
            percent: value as f64 / totals.total as f64,
            color: key.color().to_string(),
        })
        .collect()
}
