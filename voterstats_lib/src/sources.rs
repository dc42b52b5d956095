//! Source URLs, baseline dataset descriptions and fixed note sentences.

use voterstats_api::types::{DatasetMeta, UNKNOWN};

pub const FLORIDA_PARTY_AFFILIATION_URL: &str =
    "https://dos.fl.gov/elections/data-statistics/voter-registration-statistics/voter-registration-by-party-affiliation/";

pub const FLORIDA_COUNTY_PARTY_URL: &str =
    "https://dos.fl.gov/elections/data-statistics/voter-registration-statistics/voter-registration-by-county-and-party/";

pub const PEW_FACT_SHEET_URL: &str =
    "https://www.pewresearch.org/politics/2024/04/09/the-partisanship-and-ideology-of-american-voters/";

pub const PEW_GENDER_URL: &str =
    "https://www.pewresearch.org/politics/2024/04/09/the-partisanship-and-ideology-of-american-voters/#partisan-composition-by-gender";

pub const GALLUP_PARTY_AFFILIATION_URL: &str =
    "https://news.gallup.com/poll/15370/party-affiliation.aspx";

const FLORIDA_PUBLISHER: &str = "Florida Department of State, Division of Elections";

/// Attribution sentence that opens every Florida snapshot's notes.
pub const FLORIDA_ATTRIBUTION_NOTE: &str =
    "Florida registration counts are official administrative records from the Florida Division of Elections.";

/// Cross-measure caveat carried by every snapshot.
pub const VOTER_STATS_METHOD_NOTE: &str =
    "Registration counts are administrative records; turnout is election participation; party identification is survey self-identification/leaning. These measures are not interchangeable.";

fn meta(id: &str, name: &str, publisher: &str, as_of_date: &str, url: &str, notes: &str) -> DatasetMeta {
    DatasetMeta {
        id: id.to_string(),
        name: name.to_string(),
        publisher: publisher.to_string(),
        as_of_date: as_of_date.to_string(),
        last_checked: UNKNOWN.to_string(),
        url: url.to_string(),
        notes: notes.to_string(),
    }
}

pub fn florida_party_totals_baseline() -> DatasetMeta {
    meta(
        "fl-dos-party-totals",
        "Voter Registration by Party Affiliation",
        FLORIDA_PUBLISHER,
        UNKNOWN,
        FLORIDA_PARTY_AFFILIATION_URL,
        "Official statewide registration counts by party.",
    )
}

pub fn florida_county_breakdown_baseline() -> DatasetMeta {
    meta(
        "fl-dos-county-party",
        "Voter Registration by County and Party",
        FLORIDA_PUBLISHER,
        UNKNOWN,
        FLORIDA_COUNTY_PARTY_URL,
        "Official county-level registration counts by party.",
    )
}

pub fn pew_fact_sheet_baseline() -> DatasetMeta {
    meta(
        "pew-partisanship-fact-sheet",
        "The Partisanship and Ideology of American Voters",
        "Pew Research Center",
        "2024-04-09",
        PEW_FACT_SHEET_URL,
        "Survey-based party identification and partisan leaning among U.S. registered voters.",
    )
}

pub fn pew_gender_baseline() -> DatasetMeta {
    meta(
        "pew-partisanship-gender",
        "Partisan Composition by Gender",
        "Pew Research Center",
        "2024-04-09",
        PEW_GENDER_URL,
        "Survey results by gender; identifies/leans Democratic, Republican, and independent/other.",
    )
}

pub fn gallup_party_id_baseline() -> DatasetMeta {
    meta(
        "gallup-party-affiliation",
        "Gallup Party Affiliation",
        "Gallup",
        "2025-01-15",
        GALLUP_PARTY_AFFILIATION_URL,
        "Long-running trend of U.S. adults identifying as Democrat, Republican, or independent.",
    )
}
