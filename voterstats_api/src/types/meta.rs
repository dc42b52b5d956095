use serde::{Deserialize, Serialize};

/// Sentinel used for dates and timestamps that could not be determined.
pub const UNKNOWN: &str = "Unknown";

/// Describes one remote data source.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DatasetMeta {
    pub id: String,
    pub name: String,
    pub publisher: String,
    /// ISO date (`YYYY-MM-DD`) or [`UNKNOWN`].
    pub as_of_date: String,
    /// ISO-8601 timestamp or [`UNKNOWN`].
    pub last_checked: String,
    pub url: String,
    pub notes: String,
}

impl DatasetMeta {
    /// Returns a copy stamped with the given as-of date and check time.
    pub fn stamped(&self, as_of_date: &str, last_checked: &str) -> Self {
        Self {
            as_of_date: as_of_date.to_string(),
            last_checked: last_checked.to_string(),
            ..self.clone()
        }
    }

    /// Returns a copy with only the check time replaced.
    pub fn checked_at(&self, last_checked: &str) -> Self {
        Self {
            last_checked: last_checked.to_string(),
            ..self.clone()
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ApiMeta {
    pub last_refreshed: String,
    pub used_fallback: bool,
    pub diagnostics: Vec<String>,
}

/// JSON envelope returned by the website's data routes.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ApiResponse<T> {
    pub data: T,
    pub meta: ApiMeta,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ApiErrorBody {
    pub code: String,
    pub message: String,
}

/// Failure envelope for callers that cannot produce an [`ApiResponse`].
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ApiError {
    pub error: ApiErrorBody,
}

impl ApiError {
    pub fn new(code: &str, message: impl Into<String>) -> Self {
        Self {
            error: ApiErrorBody {
                code: code.to_string(),
                message: message.into(),
            },
        }
    }
}
