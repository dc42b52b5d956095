//! CLI subcommand implementations.

pub mod composition;
pub mod counties;
pub mod florida;
pub mod national;

use chrono::Utc;
use voterstats_lib::types::FloridaApiResponse;
use voterstats_lib::VoterStatsService;

use crate::output::OutputFormat;

const OFFLINE_NOTE: &str = "Offline mode; served bundled fallback snapshot.";

/// Shared state handed to every subcommand.
pub struct Context<'a> {
    pub service: &'a VoterStatsService,
    pub offline: bool,
    pub format: &'a OutputFormat,
}

impl Context<'_> {
    /// The Florida response, live or from the bundled fallback.
    pub async fn florida(&self) -> FloridaApiResponse {
        if self.offline {
            self.service
                .fallback_response_at(Utc::now(), vec![OFFLINE_NOTE.to_string()])
        } else {
            self.service.florida_response().await
        }
    }
}

/// Prints fallback diagnostics to stderr so tabular stdout stays clean.
pub fn report_diagnostics(used_fallback: bool, diagnostics: &[String]) {
    if used_fallback {
        tracing::warn!("Serving fallback data");
    }
    for line in diagnostics {
        eprintln!("note: {}", line);
    }
}
