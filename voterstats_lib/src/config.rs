//! Runtime configuration read from the environment.

use std::time::Duration;

use voterstats_api::DEFAULT_TIMEOUT;

use crate::cache::DEFAULT_TTL;
use crate::fetch::DEFAULT_MIRROR_BASE;
use crate::sources::{
    FLORIDA_COUNTY_PARTY_URL, FLORIDA_PARTY_AFFILIATION_URL, GALLUP_PARTY_AFFILIATION_URL,
    PEW_FACT_SHEET_URL, PEW_GENDER_URL,
};

/// Source URLs and fetch behaviour for [`crate::VoterStatsService`].
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceConfig {
    pub party_url: String,
    pub county_url: String,
    pub pew_fact_sheet_url: String,
    pub pew_gender_url: String,
    pub gallup_url: String,
    /// Mirror proxy base; `None` disables the mirror attempt.
    pub mirror_base: Option<String>,
    /// Body cache TTL; `None` disables caching.
    pub cache_ttl: Option<Duration>,
    pub timeout: Duration,
    pub check_consistency: bool,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            party_url: FLORIDA_PARTY_AFFILIATION_URL.to_string(),
            county_url: FLORIDA_COUNTY_PARTY_URL.to_string(),
            pew_fact_sheet_url: PEW_FACT_SHEET_URL.to_string(),
            pew_gender_url: PEW_GENDER_URL.to_string(),
            gallup_url: GALLUP_PARTY_AFFILIATION_URL.to_string(),
            mirror_base: Some(DEFAULT_MIRROR_BASE.to_string()),
            cache_ttl: Some(DEFAULT_TTL),
            timeout: DEFAULT_TIMEOUT,
            check_consistency: false,
        }
    }
}

impl ServiceConfig {
    /// Reads `VOTERSTATS_*` variables, falling back to the defaults.
    ///
    /// A cache TTL of 0 disables the body cache.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let mirror_base = if env_bool("VOTERSTATS_MIRROR_ENABLED", true) {
            Some(env_string("VOTERSTATS_MIRROR_BASE", DEFAULT_MIRROR_BASE))
        } else {
            None
        };
        let ttl_secs = env_u64("VOTERSTATS_CACHE_TTL_SECS", DEFAULT_TTL.as_secs());

        Self {
            party_url: env_string("VOTERSTATS_FL_PARTY_URL", &defaults.party_url),
            county_url: env_string("VOTERSTATS_FL_COUNTY_URL", &defaults.county_url),
            pew_fact_sheet_url: env_string("VOTERSTATS_PEW_FACT_SHEET_URL", &defaults.pew_fact_sheet_url),
            pew_gender_url: env_string("VOTERSTATS_PEW_GENDER_URL", &defaults.pew_gender_url),
            gallup_url: env_string("VOTERSTATS_GALLUP_URL", &defaults.gallup_url),
            mirror_base,
            cache_ttl: (ttl_secs > 0).then(|| Duration::from_secs(ttl_secs)),
            timeout: Duration::from_secs(env_u64("VOTERSTATS_TIMEOUT_SECS", DEFAULT_TIMEOUT.as_secs())),
            check_consistency: env_bool("VOTERSTATS_CHECK_CONSISTENCY", false),
        }
    }
}

fn env_string(key: &str, default: &str) -> String {
    std::env::var(key)
        .ok()
        .map(|val| val.trim().to_string())
        .filter(|val| !val.is_empty())
        .unwrap_or_else(|| default.to_string())
}

fn env_u64(key: &str, default: u64) -> u64 {
    std::env::var(key)
        .ok()
        .and_then(|val| val.trim().parse::<u64>().ok())
        .unwrap_or(default)
}

fn env_bool(key: &str, default: bool) -> bool {
    std::env::var(key)
        .ok()
        .and_then(|val| parse_bool(&val))
        .unwrap_or(default)
}

fn parse_bool(val: &str) -> Option<bool> {
    match val.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
