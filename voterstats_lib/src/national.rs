//! Curated national party-identification snapshot.
//!
//! Unlike the Florida data nothing here is parsed: the survey tables are
//! constants, and remote checks only decide whether the response is flagged
//! as a fallback.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use voterstats_api::types::{NationalDemographicRow, NationalPartyId, NationalSourceMeta};

use crate::sources::{
    gallup_party_id_baseline, pew_fact_sheet_baseline, pew_gender_baseline,
    VOTER_STATS_METHOD_NOTE,
};

const METHOD_NOTES: &[&str] = &[
    "National values are survey percentages and should not be interpreted as official voter registration counts.",
    "Pew values are identify/lean snapshots for registered voters; Gallup tracks self-identification trends among U.S. adults.",
    "Independent percentages represent respondents who do not identify or lean to either major party in this curated snapshot.",
];

fn row(group: &str, democratic: u32, republican: u32, independent: u32) -> NationalDemographicRow {
    NationalDemographicRow {
        group: group.to_string(),
        democratic,
        republican,
        independent,
        total: 100,
    }
}

pub fn gender_rows() -> Vec<NationalDemographicRow> {
    vec![row("Men", 46, 52, 2), row("Women", 51, 44, 5)]
}

pub fn age_rows() -> Vec<NationalDemographicRow> {
    vec![
        row("18-29", 65, 33, 2),
        row("30-49", 53, 45, 2),
        row("50-64", 45, 52, 3),
        row("65+", 43, 54, 3),
    ]
}

fn method_notes() -> Vec<String> {
    METHOD_NOTES
        .iter()
        .copied()
        .chain(std::iter::once(VOTER_STATS_METHOD_NOTE))
        .map(str::to_string)
        .collect()
}

/// Builds the national snapshot stamped with `last_checked`, with
/// `diagnostics` appended to the method notes.
pub fn build_national_snapshot(
    last_checked: &str,
    diagnostics: &[String],
    used_fallback: bool,
) -> NationalPartyId {
    let mut notes = method_notes();
    notes.extend_from_slice(diagnostics);

    NationalPartyId {
        source_meta: NationalSourceMeta {
            pew_fact_sheet: pew_fact_sheet_baseline().checked_at(last_checked),
            pew_gender: pew_gender_baseline().checked_at(last_checked),
            gallup_party_id: gallup_party_id_baseline().checked_at(last_checked),
        },
        by_gender: gender_rows(),
        by_age: age_rows(),
        method_notes: notes,
        last_refreshed: last_checked.to_string(),
        used_fallback,
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NationalDimension {
    #[default]
    Gender,
    Age,
}

impl fmt::Display for NationalDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NationalDimension::Gender => write!(f, "gender"),
            NationalDimension::Age => write!(f, "age"),
        }
    }
}

impl FromStr for NationalDimension {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "gender" => Ok(NationalDimension::Gender),
            "age" => Ok(NationalDimension::Age),
            _ => Err(()),
        }
    }
}

pub fn national_rows(
    national: &NationalPartyId,
    dimension: NationalDimension,
) -> &[NationalDemographicRow] {
    match dimension {
        NationalDimension::Gender => &national.by_gender,
        NationalDimension::Age => &national.by_age,
    }
}

/// Chart-ready row; `independent` is omitted unless requested.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NationalChartDatum {
    pub group: String,
    pub democratic: u32,
    pub republican: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub independent: Option<u32>,
}

pub fn chart_data(rows: &[NationalDemographicRow], include_independent: bool) -> Vec<NationalChartDatum> {
    rows.iter()
        .map(|row| NationalChartDatum {
            group: row.group.clone(),
            democratic: row.democratic,
            republican: row.republican,
            independent: include_independent.then_some(row.independent),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_sum_to_one_hundred() {
        for row in gender_rows().iter().chain(age_rows().iter()) {
            assert_eq!(row.democratic + row.republican + row.independent, row.total, "{}", row.group);
        }
    }

    #[test]
    fn snapshot_stamps_every_source_and_appends_diagnostics() {
        let diagnostics = vec!["Gallup party affiliation: remote check failed, serving curated snapshot.".to_string()];
        let snap = build_national_snapshot("2026-03-01T00:00:00.000Z", &diagnostics, true);

        assert_eq!(snap.source_meta.pew_fact_sheet.last_checked, "2026-03-01T00:00:00.000Z");
        assert_eq!(snap.source_meta.pew_gender.last_checked, "2026-03-01T00:00:00.000Z");
        assert_eq!(snap.source_meta.gallup_party_id.last_checked, "2026-03-01T00:00:00.000Z");
        assert_eq!(snap.source_meta.gallup_party_id.as_of_date, "2025-01-15");
        assert_eq!(snap.method_notes.len(), 5);
        assert_eq!(snap.method_notes[3], VOTER_STATS_METHOD_NOTE);
        assert_eq!(snap.method_notes.last(), diagnostics.last());
        assert!(snap.used_fallback);
    }

    #[test]
    fn snapshot_without_diagnostics_has_only_method_notes() {
        let snap = build_national_snapshot("2026-02-08T00:00:00.000Z", &[], false);
        assert!(!snap.used_fallback);
        assert_eq!(snap.last_refreshed, "2026-02-08T00:00:00.000Z");
        assert_eq!(snap.method_notes.len(), 4);
    }

    #[test]
    fn rows_by_dimension() {
        let snap = build_national_snapshot("2026-02-08T00:00:00.000Z", &[], false);
        assert_eq!(national_rows(&snap, NationalDimension::Gender).len(), 2);
        assert_eq!(national_rows(&snap, NationalDimension::Age)[3].group, "65+");
    }

    #[test]
    fn chart_data_omits_independent_unless_requested() {
        let rows = age_rows();
        let without = chart_data(&rows, false);
        assert!(without.iter().all(|d| d.independent.is_none()));
        let json = serde_json::to_value(&without[0]).unwrap();
        assert!(json.get("independent").is_none());

        let with = chart_data(&rows, true);
        assert_eq!(with[0].independent, Some(2));
    }

    #[test]
    fn dimension_parsing() {
        assert_eq!("AGE".parse(), Ok(NationalDimension::Age));
        assert_eq!("gender".parse(), Ok(NationalDimension::Gender));
        assert!("region".parse::<NationalDimension>().is_err());
    }
}
