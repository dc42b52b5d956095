use voterstats_api::types::{ApiError, FloridaApiResponse, NationalApiResponse, UNKNOWN};

fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap()
}

#[test]
fn deserialize_florida_response() {
    let json = load_fixture("florida_response.json");
    let resp: FloridaApiResponse = serde_json::from_str(&json).unwrap();

    assert!(resp.meta.used_fallback);
    assert_eq!(resp.meta.diagnostics.len(), 1);

    let data = &resp.data;
    assert_eq!(data.totals.republican, 5_509_354);
    assert_eq!(data.totals.total, 14_091_977);
    assert_eq!(data.totals.category_sum(), data.totals.total);
    assert_eq!(data.by_county.len(), 2);
    assert_eq!(data.by_county[0].county, "Miami-Dade");
    assert!(data.by_county[0].dem_share > data.by_county[0].rep_share);
    assert_eq!(data.source_meta.party_totals.as_of_date, "2025-12-31");
    assert_eq!(
        data.source_meta.party_totals.as_of_date,
        data.source_meta.county_breakdown.as_of_date
    );
}

#[test]
fn florida_response_serializes_camel_case() {
    let json = load_fixture("florida_response.json");
    let resp: FloridaApiResponse = serde_json::from_str(&json).unwrap();
    let value = serde_json::to_value(&resp).unwrap();

    assert!(value["data"]["byCounty"][0]["repShare"].is_number());
    assert!(value["data"]["sourceMeta"]["countyBreakdown"]["asOfDate"].is_string());
    assert!(value["meta"]["usedFallback"].as_bool().unwrap());
    assert!(value["data"].get("by_county").is_none());
}

#[test]
fn deserialize_national_response() {
    let json = load_fixture("national_response.json");
    let resp: NationalApiResponse = serde_json::from_str(&json).unwrap();

    assert!(!resp.data.used_fallback);
    assert_eq!(resp.data.by_gender.len(), 2);
    assert_eq!(resp.data.by_gender[1].group, "Women");
    assert_eq!(resp.data.by_age[0].democratic, 65);
    assert_eq!(resp.data.source_meta.gallup_party_id.publisher, "Gallup");
    assert!(resp.meta.diagnostics.is_empty());
}

#[test]
fn dataset_meta_stamping_keeps_identity() {
    let json = load_fixture("florida_response.json");
    let resp: FloridaApiResponse = serde_json::from_str(&json).unwrap();
    let meta = &resp.data.source_meta.party_totals;

    let stamped = meta.stamped(UNKNOWN, "2026-03-01T00:00:00.000Z");
    assert_eq!(stamped.id, meta.id);
    assert_eq!(stamped.as_of_date, "Unknown");
    assert_eq!(stamped.last_checked, "2026-03-01T00:00:00.000Z");

    let checked = meta.checked_at("2026-03-02T00:00:00.000Z");
    assert_eq!(checked.as_of_date, "2025-12-31");
}

#[test]
fn api_error_envelope_shape() {
    let err = ApiError::new("UPSTREAM_UNAVAILABLE", "sources offline");
    let value = serde_json::to_value(&err).unwrap();
    assert_eq!(value["error"]["code"], "UPSTREAM_UNAVAILABLE");
    assert_eq!(value["error"]["message"], "sources offline");
}
