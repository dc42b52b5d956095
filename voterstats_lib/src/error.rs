//! Error types for the library layer.

use std::fmt;

use crate::fetch::FetchFailure;

/// Errors produced by the library layer, wrapping source client errors and
/// adding fetch, serialization, and input validation failures.
#[derive(Debug)]
pub enum VoterStatsError {
    /// An error from the underlying source client.
    Api(voterstats_api::Error),
    /// A source could not be fetched directly or through the mirror.
    Fetch(FetchFailure),
    /// JSON serialization failed.
    Serialization(serde_json::Error),
    /// User-provided input failed validation.
    InvalidInput(String),
}

impl fmt::Display for VoterStatsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Api(e) => write!(f, "Source error: {}", e),
            Self::Fetch(e) => write!(f, "Fetch error: {}", e),
            Self::Serialization(e) => write!(f, "Serialization error: {}", e),
            Self::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
        }
    }
}

impl std::error::Error for VoterStatsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Api(e) => Some(e),
            Self::Fetch(e) => Some(e),
            Self::Serialization(e) => Some(e),
            Self::InvalidInput(_) => None,
        }
    }
}

impl From<voterstats_api::Error> for VoterStatsError {
    fn from(e: voterstats_api::Error) -> Self {
        Self::Api(e)
    }
}

impl From<FetchFailure> for VoterStatsError {
    fn from(e: FetchFailure) -> Self {
        Self::Fetch(e)
    }
}

impl From<serde_json::Error> for VoterStatsError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serialization(e)
    }
}
