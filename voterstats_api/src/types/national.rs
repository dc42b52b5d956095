use serde::{Deserialize, Serialize};

use super::meta::{ApiResponse, DatasetMeta};

/// Survey percentages for one demographic group.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct NationalDemographicRow {
    pub group: String,
    pub democratic: u32,
    pub republican: u32,
    pub independent: u32,
    pub total: u32,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NationalSourceMeta {
    pub pew_fact_sheet: DatasetMeta,
    pub pew_gender: DatasetMeta,
    pub gallup_party_id: DatasetMeta,
}

/// Curated national party-identification snapshot.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NationalPartyId {
    pub source_meta: NationalSourceMeta,
    pub by_gender: Vec<NationalDemographicRow>,
    pub by_age: Vec<NationalDemographicRow>,
    pub method_notes: Vec<String>,
    pub last_refreshed: String,
    pub used_fallback: bool,
}

pub type NationalApiResponse = ApiResponse<NationalPartyId>;
