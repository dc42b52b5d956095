//! Florida voter-registration pipeline: row parsers, snapshot builders and
//! the read-only query helpers the explorer UI uses.

pub mod composition;
pub mod counties;
pub mod fixtures;
pub mod ranking;
pub mod snapshot;
pub mod totals;

pub use composition::{composition_data, CompositionDatum, CompositionKey};
pub use counties::{compute_shares, format_county_name, parse_county_line, parse_county_rows, Shares};
pub use ranking::{county_ranking, CountySortKey, DEFAULT_RANKING_LIMIT};
pub use snapshot::{
    build_florida_registration, consistency_notes, parse_florida_payload, source_meta,
    BuildOptions, FallbackSnapshot, ParsedFloridaPayload,
};
pub use totals::{parse_party_totals, totals_row_totals, year_row_totals};
