use anyhow::Result;
use serde::Serialize;
use tabled::settings::Style;
use tabled::{Table, Tabled};
use voterstats_lib::types::{FloridaCountyRegistration, FloridaPartyTotals, FloridaRegistration};
use voterstats_lib::{CompositionDatum, NationalChartDatum};

#[derive(Clone, Debug)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
    Markdown,
}

#[derive(Tabled, Serialize)]
struct StatewideRow {
    #[tabled(rename = "Party")]
    #[serde(rename = "Party")]
    party: String,
    #[tabled(rename = "Registered")]
    #[serde(rename = "Registered")]
    registered: String,
    #[tabled(rename = "Share")]
    #[serde(rename = "Share")]
    share: String,
}

#[derive(Tabled, Serialize)]
struct CountyRow {
    #[tabled(rename = "#")]
    #[serde(rename = "Rank")]
    rank: usize,
    #[tabled(rename = "County")]
    #[serde(rename = "County")]
    county: String,
    #[tabled(rename = "Republican")]
    #[serde(rename = "Republican")]
    republican: String,
    #[tabled(rename = "Democratic")]
    #[serde(rename = "Democratic")]
    democratic: String,
    #[tabled(rename = "NPA")]
    #[serde(rename = "NPA")]
    npa: String,
    #[tabled(rename = "Minor")]
    #[serde(rename = "Minor")]
    minor: String,
    #[tabled(rename = "Total")]
    #[serde(rename = "Total")]
    total: String,
    #[tabled(rename = "Rep %")]
    #[serde(rename = "Rep Share")]
    rep_share: String,
    #[tabled(rename = "Dem %")]
    #[serde(rename = "Dem Share")]
    dem_share: String,
}

#[derive(Tabled, Serialize)]
struct CompositionRow {
    #[tabled(rename = "Group")]
    #[serde(rename = "Group")]
    label: String,
    #[tabled(rename = "Voters")]
    #[serde(rename = "Voters")]
    value: String,
    #[tabled(rename = "Share")]
    #[serde(rename = "Share")]
    percent: String,
    #[tabled(rename = "Color")]
    #[serde(rename = "Color")]
    color: String,
}

#[derive(Tabled, Serialize)]
struct NationalRow {
    #[tabled(rename = "Group")]
    #[serde(rename = "Group")]
    group: String,
    #[tabled(rename = "Democratic")]
    #[serde(rename = "Democratic")]
    democratic: String,
    #[tabled(rename = "Republican")]
    #[serde(rename = "Republican")]
    republican: String,
    #[tabled(rename = "Independent")]
    #[serde(rename = "Independent")]
    independent: String,
}

// -- Row builders --

fn build_statewide_rows(totals: &FloridaPartyTotals) -> Vec<StatewideRow> {
    let share = |value: u64| {
        if totals.total == 0 {
            format_share(0.0)
        } else {
            format_share(value as f64 / totals.total as f64)
        }
    };
    [
        ("Republican", totals.republican),
        ("Democratic", totals.democratic),
        ("No Party Affiliation", totals.npa),
        ("Minor Parties", totals.minor),
    ]
    .into_iter()
    .map(|(party, value)| StatewideRow {
        party: party.to_string(),
        registered: format_count(value),
        share: share(value),
    })
    .chain(std::iter::once(StatewideRow {
        party: "Total".to_string(),
        registered: format_count(totals.total),
        share: String::new(),
    }))
    .collect()
}

fn build_county_rows(counties: &[FloridaCountyRegistration]) -> Vec<CountyRow> {
    counties
        .iter()
        .enumerate()
        .map(|(i, c)| CountyRow {
            rank: i + 1,
            county: c.county.clone(),
            republican: format_count(c.republican),
            democratic: format_count(c.democratic),
            npa: format_count(c.npa),
            minor: format_count(c.minor),
            total: format_count(c.total),
            rep_share: format_share(c.rep_share),
            dem_share: format_share(c.dem_share),
        })
        .collect()
}

fn build_composition_rows(data: &[CompositionDatum]) -> Vec<CompositionRow> {
    data.iter()
        .map(|d| CompositionRow {
            label: d.label.clone(),
            value: format_count(d.value),
            percent: format_share(d.percent),
            color: d.color.clone(),
        })
        .collect()
}

fn build_national_rows(data: &[NationalChartDatum]) -> Vec<NationalRow> {
    data.iter()
        .map(|d| NationalRow {
            group: d.group.clone(),
            democratic: format!("{}%", d.democratic),
            republican: format!("{}%", d.republican),
            independent: d.independent.map(|v| format!("{}%", v)).unwrap_or_else(|| "-".to_string()),
        })
        .collect()
}

// -- Table output --

pub fn print_statewide_table(totals: &FloridaPartyTotals) {
    println!("{}", Table::new(build_statewide_rows(totals)));
}

pub fn print_counties_table(counties: &[FloridaCountyRegistration]) {
    println!("{}", Table::new(build_county_rows(counties)));
}

pub fn print_composition_table(data: &[CompositionDatum]) {
    println!("{}", Table::new(build_composition_rows(data)));
}

pub fn print_national_table(data: &[NationalChartDatum]) {
    println!("{}", Table::new(build_national_rows(data)));
}

// -- Markdown output --

pub fn print_statewide_markdown(totals: &FloridaPartyTotals) {
    let mut table = Table::new(build_statewide_rows(totals));
    table.with(Style::markdown());
    println!("{}", table);
}

pub fn print_counties_markdown(counties: &[FloridaCountyRegistration]) {
    let mut table = Table::new(build_county_rows(counties));
    table.with(Style::markdown());
    println!("{}", table);
}

pub fn print_composition_markdown(data: &[CompositionDatum]) {
    let mut table = Table::new(build_composition_rows(data));
    table.with(Style::markdown());
    println!("{}", table);
}

pub fn print_national_markdown(data: &[NationalChartDatum]) {
    let mut table = Table::new(build_national_rows(data));
    table.with(Style::markdown());
    println!("{}", table);
}

// -- CSV output --

fn print_csv<T: Serialize>(rows: Vec<T>) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(std::io::stdout());
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn print_counties_csv(counties: &[FloridaCountyRegistration]) -> Result<()> {
    print_csv(build_county_rows(counties))
}

pub fn print_composition_csv(data: &[CompositionDatum]) -> Result<()> {
    print_csv(build_composition_rows(data))
}

pub fn print_national_csv(data: &[NationalChartDatum]) -> Result<()> {
    print_csv(build_national_rows(data))
}

// -- JSON output --

pub fn print_json<T: serde::Serialize>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}

pub fn print_summary_footer(registration: &FloridaRegistration) {
    let mut line = format!(
        "Data as of {}; last checked {}",
        registration.source_meta.party_totals.as_of_date, registration.last_refreshed
    );
    if registration.used_fallback {
        line.push_str(" (fallback snapshot)");
    }
    println!("{}", line);
}

/// Formats a count with thousands separators: `5509354` -> `5,509,354`.
fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Formats a fraction as a percentage with one decimal.
fn format_share(share: f64) -> String {
    format!("{:.1}%", share * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use voterstats_lib::national::{age_rows, chart_data};
    use voterstats_lib::types::FloridaApiResponse;
    use voterstats_lib::composition_data;

    fn load_florida_fixture() -> FloridaApiResponse {
        let json_str = include_str!("../../voterstats_api/tests/fixtures/florida_response.json");
        serde_json::from_str(json_str).unwrap()
    }

    // -- formatting tests --

    #[test]
    fn test_format_count_groups_thousands() {
        assert_eq!(format_count(14_091_977), "14,091,977");
        assert_eq!(format_count(268_502), "268,502");
    }

    #[test]
    fn test_format_count_small() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1_000), "1,000");
    }

    #[test]
    fn test_format_share() {
        assert_eq!(format_share(0.29957), "30.0%");
        assert_eq!(format_share(0.0), "0.0%");
        assert_eq!(format_share(1.0), "100.0%");
    }

    // -- Row builder tests --

    #[test]
    fn test_build_county_rows_mapping() {
        let resp = load_florida_fixture();
        let rows = build_county_rows(&resp.data.by_county);
        assert_eq!(rows.len(), 2);

        let row = &rows[0];
        assert_eq!(row.rank, 1);
        assert_eq!(row.county, "Miami-Dade");
        assert_eq!(row.total, "1,482,826");
        assert_eq!(row.rep_share, "30.0%");
        assert_eq!(row.dem_share, "39.2%");
        assert_eq!(rows[1].rank, 2);
    }

    #[test]
    fn test_build_statewide_rows_has_total_last() {
        let resp = load_florida_fixture();
        let rows = build_statewide_rows(&resp.data.totals);
        assert_eq!(rows.len(), 5);
        assert_eq!(rows[0].party, "Republican");
        assert_eq!(rows[0].registered, "5,509,354");
        assert_eq!(rows[0].share, "39.1%");
        assert_eq!(rows[4].party, "Total");
        assert_eq!(rows[4].registered, "14,091,977");
    }

    #[test]
    fn test_build_statewide_rows_zero_total() {
        let rows = build_statewide_rows(&FloridaPartyTotals::default());
        assert!(rows.iter().take(4).all(|r| r.share == "0.0%"));
    }

    #[test]
    fn test_build_composition_rows_mapping() {
        let resp = load_florida_fixture();
        let data = composition_data(&resp.data.totals, true);
        let rows = build_composition_rows(&data);
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[2].label, "Other (NPA + Minor)");
        assert_eq!(rows[2].value, "4,251,251");
        assert_eq!(rows[0].color, "#1f3a5f");
    }

    #[test]
    fn test_build_national_rows_independent_placeholder() {
        let without = build_national_rows(&chart_data(&age_rows(), false));
        assert_eq!(without[0].group, "18-29");
        assert_eq!(without[0].democratic, "65%");
        assert_eq!(without[0].independent, "-");

        let with = build_national_rows(&chart_data(&age_rows(), true));
        assert_eq!(with[0].independent, "2%");
    }

    #[test]
    fn test_build_county_rows_empty() {
        assert!(build_county_rows(&[]).is_empty());
    }
}
