//! Library layer for voterstats: the Florida registration scraping pipeline,
//! the curated national party-identification snapshot, and the response
//! logic the website's data routes run.
//!
//! Raw source pages come from `voterstats_api`; everything here turns them
//! into typed, immutable snapshots and always has a bundled fallback ready.

pub mod cache;
pub mod client;
pub mod config;
pub mod date;
pub mod error;
pub mod fetch;
pub mod florida;
pub mod national;
pub mod service;
pub mod sources;
pub mod text;
pub mod validation;

pub use voterstats_api;
pub use voterstats_api::types;

pub use client::CachedClient;
pub use config::ServiceConfig;
pub use error::VoterStatsError;
pub use fetch::{FetchFailure, FetchStage, SourceFetcher};
pub use florida::{
    build_florida_registration, composition_data, county_ranking, parse_county_rows,
    parse_party_totals, BuildOptions, CompositionDatum, CountySortKey, FallbackSnapshot,
};
pub use national::{build_national_snapshot, NationalChartDatum, NationalDimension};
pub use service::VoterStatsService;
