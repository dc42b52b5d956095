//! Response assembly for the Florida and national data routes.
//!
//! Both entry points always produce a complete response envelope: source
//! failures only change `usedFallback` and the diagnostics.

use chrono::{DateTime, Utc};
use voterstats_api::types::{ApiMeta, FloridaApiResponse, FloridaRegistration, NationalApiResponse};
use voterstats_api::Client;

use crate::cache::TextCache;
use crate::client::CachedClient;
use crate::config::ServiceConfig;
use crate::date::iso_timestamp;
use crate::error::VoterStatsError;
use crate::fetch::SourceFetcher;
use crate::florida::{build_florida_registration, consistency_notes, BuildOptions, FallbackSnapshot};
use crate::national::build_national_snapshot;

pub const PARTY_TOTALS_LABEL: &str = "party totals";
pub const COUNTY_TABLE_LABEL: &str = "county table";

pub const PEW_FACT_SHEET_LABEL: &str = "Pew fact sheet";
pub const PEW_GENDER_LABEL: &str = "Pew gender dataset";
pub const GALLUP_LABEL: &str = "Gallup party affiliation";

const PARSER_EMPTY_NOTE: &str = "Parser returned no rows; serving fallback snapshot.";
const SOURCES_UNAVAILABLE_NOTE: &str =
    "Remote Florida sources unavailable; returned last-known-good bundled snapshot.";
const FETCH_FAILED_DIAGNOSTIC: &str = "Remote Florida source fetch failed. Served fallback snapshot.";

pub struct VoterStatsService {
    fetcher: SourceFetcher,
    fallback: FallbackSnapshot,
    config: ServiceConfig,
}

impl VoterStatsService {
    /// Builds the HTTP client from `config`. The fallback snapshot is built
    /// once by the caller and shared.
    pub fn new(config: ServiceConfig, fallback: FallbackSnapshot) -> Result<Self, VoterStatsError> {
        let inner = Client::with_timeout(config.timeout)?;
        let client = match config.cache_ttl {
            Some(ttl) => CachedClient::new(inner, TextCache::new(ttl)),
            None => CachedClient::uncached(inner),
        };
        Ok(Self::with_client(config, fallback, client))
    }

    pub fn with_client(config: ServiceConfig, fallback: FallbackSnapshot, client: CachedClient) -> Self {
        let fetcher = SourceFetcher::new(client, config.mirror_base.clone());
        Self {
            fetcher,
            fallback,
            config,
        }
    }

    pub async fn florida_response(&self) -> FloridaApiResponse {
        self.florida_response_at(Utc::now()).await
    }

    /// Fetches both Florida reports and builds a snapshot, serving the
    /// fallback on fetch or parse failure.
    pub async fn florida_response_at(&self, now: DateTime<Utc>) -> FloridaApiResponse {
        let last_checked = iso_timestamp(now);
        let mut party_notes = Vec::new();
        let mut county_notes = Vec::new();

        let fetched = tokio::try_join!(
            self.fetcher
                .fetch_with_mirror(&self.config.party_url, PARTY_TOTALS_LABEL, &mut party_notes),
            self.fetcher
                .fetch_with_mirror(&self.config.county_url, COUNTY_TABLE_LABEL, &mut county_notes),
        );

        let mut diagnostics = party_notes;
        diagnostics.extend(county_notes);

        let (party_content, county_content) = match fetched {
            Ok(contents) => contents,
            Err(failure) => {
                tracing::warn!("Serving Florida fallback snapshot: {}", failure);
                let data = self
                    .fallback
                    .restamp(&last_checked, &[SOURCES_UNAVAILABLE_NOTE.to_string()]);
                diagnostics.push(FETCH_FAILED_DIAGNOSTIC.to_string());
                return envelope(data, diagnostics);
            }
        };

        let built = build_florida_registration(
            &party_content,
            &county_content,
            BuildOptions {
                last_checked: Some(last_checked.clone()),
                used_fallback: false,
                diagnostics: diagnostics.clone(),
                check_consistency: self.config.check_consistency,
            },
        );

        match built {
            Some(data) => envelope(data, diagnostics),
            None => {
                tracing::warn!("Florida reports fetched but nothing parsed; serving fallback");
                diagnostics.push(PARSER_EMPTY_NOTE.to_string());
                let data = self.fallback.restamp(&last_checked, &diagnostics);
                envelope(data, diagnostics)
            }
        }
    }

    /// The fallback snapshot without touching the network.
    ///
    /// With the consistency check on, its notes come before `diagnostics`
    /// as they do for a live build.
    pub fn fallback_response_at(&self, now: DateTime<Utc>, diagnostics: Vec<String>) -> FloridaApiResponse {
        let mut extra = Vec::new();
        if self.config.check_consistency {
            let base = self.fallback.registration();
            extra = consistency_notes(&base.totals, &base.by_county);
        }
        extra.extend(diagnostics.iter().cloned());
        let data = self.fallback.restamp(&iso_timestamp(now), &extra);
        envelope(data, diagnostics)
    }

    pub async fn national_response(&self) -> NationalApiResponse {
        self.national_response_at(Utc::now()).await
    }

    /// Health-checks the three national sources and stamps the curated
    /// snapshot. Each failed check only adds a diagnostic.
    pub async fn national_response_at(&self, now: DateTime<Utc>) -> NationalApiResponse {
        let last_checked = iso_timestamp(now);

        let (fact_sheet, gender, gallup) = tokio::join!(
            self.fetcher.check(&self.config.pew_fact_sheet_url),
            self.fetcher.check(&self.config.pew_gender_url),
            self.fetcher.check(&self.config.gallup_url),
        );

        let mut diagnostics = Vec::new();
        for (label, result) in [
            (PEW_FACT_SHEET_LABEL, fact_sheet),
            (PEW_GENDER_LABEL, gender),
            (GALLUP_LABEL, gallup),
        ] {
            if let Err(e) = result {
                tracing::warn!("{} check failed: {}", label, e);
                diagnostics.push(format!(
                    "{}: remote check failed, serving curated snapshot.",
                    label
                ));
            }
        }

        national_envelope(&last_checked, diagnostics)
    }

    /// The curated national snapshot without any remote checks.
    pub fn national_offline_at(&self, now: DateTime<Utc>, diagnostics: Vec<String>) -> NationalApiResponse {
        let last_checked = iso_timestamp(now);
        let data = build_national_snapshot(&last_checked, &diagnostics, true);
        NationalApiResponse {
            meta: ApiMeta {
                last_refreshed: data.last_refreshed.clone(),
                used_fallback: true,
                diagnostics,
            },
            data,
        }
    }
}

fn envelope(data: FloridaRegistration, diagnostics: Vec<String>) -> FloridaApiResponse {
    FloridaApiResponse {
        meta: ApiMeta {
            last_refreshed: data.last_refreshed.clone(),
            used_fallback: data.used_fallback,
            diagnostics,
        },
        data,
    }
}

fn national_envelope(last_checked: &str, diagnostics: Vec<String>) -> NationalApiResponse {
    let used_fallback = !diagnostics.is_empty();
    let data = build_national_snapshot(last_checked, &diagnostics, used_fallback);
    NationalApiResponse {
        meta: ApiMeta {
            last_refreshed: data.last_refreshed.clone(),
            used_fallback,
            diagnostics,
        },
        data,
    }
}
