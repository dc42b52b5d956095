//! Fetch-with-mirror: try a source directly, then once through a
//! text-extraction proxy.

use std::fmt;

use voterstats_api::Error;

use crate::client::CachedClient;

/// Public reader proxy that returns a page's text for `{base}/http://{url}`.
pub const DEFAULT_MIRROR_BASE: &str = "https://r.jina.ai";

/// Rewrites `url` as a mirror URL under `base`.
///
/// The scheme is dropped and the rest is appended after `http://`, so
/// `https://dos.fl.gov/x` becomes `{base}/http://dos.fl.gov/x`.
pub fn mirror_url(base: &str, url: &str) -> String {
    let rest = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .unwrap_or(url);
    format!("{}/http://{}", base.trim_end_matches('/'), rest)
}

/// Which attempt a [`FetchFailure`] gave up at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchStage {
    Primary,
    Mirror,
}

impl fmt::Display for FetchStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchStage::Primary => write!(f, "primary"),
            FetchStage::Mirror => write!(f, "mirror"),
        }
    }
}

/// A source that could not be fetched.
///
/// The cause is always the primary error; the mirror error, when there was
/// a mirror attempt, is secondary context.
#[derive(thiserror::Error, Debug)]
pub enum FetchFailure {
    /// The direct fetch failed and no mirror was configured.
    #[error("{label}: primary fetch failed")]
    Primary {
        label: String,
        #[source]
        error: Error,
    },
    /// Both the direct fetch and the mirror fetch failed.
    #[error("{label}: primary and mirror fetch failed (mirror: {mirror})")]
    Mirror {
        label: String,
        #[source]
        primary: Error,
        mirror: Error,
    },
}

impl FetchFailure {
    pub fn stage(&self) -> FetchStage {
        match self {
            FetchFailure::Primary { .. } => FetchStage::Primary,
            FetchFailure::Mirror { .. } => FetchStage::Mirror,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            FetchFailure::Primary { label, .. } | FetchFailure::Mirror { label, .. } => label,
        }
    }

    pub fn primary_error(&self) -> &Error {
        match self {
            FetchFailure::Primary { error, .. } => error,
            FetchFailure::Mirror { primary, .. } => primary,
        }
    }
}

/// Fetches source pages, falling back to the mirror proxy once per source.
pub struct SourceFetcher {
    client: CachedClient,
    mirror_base: Option<String>,
}

impl SourceFetcher {
    /// `mirror_base` of `None` disables the mirror attempt.
    pub fn new(client: CachedClient, mirror_base: Option<String>) -> Self {
        Self {
            client,
            mirror_base,
        }
    }

    /// Fetches `url`, trying the mirror once if the direct fetch fails.
    ///
    /// Progress sentences are pushed onto `diagnostics` as they happen.
    pub async fn fetch_with_mirror(
        &self,
        url: &str,
        label: &str,
        diagnostics: &mut Vec<String>,
    ) -> Result<String, FetchFailure> {
        let primary = match self.client.fetch_text(url).await {
            Ok(body) => return Ok(body),
            Err(e) => e,
        };

        tracing::warn!("{} primary fetch failed: {}", label, primary);
        diagnostics.push(format!(
            "{}: primary source fetch failed, trying mirror proxy.",
            label
        ));

        let Some(base) = &self.mirror_base else {
            return Err(FetchFailure::Primary {
                label: label.to_string(),
                error: primary,
            });
        };

        match self.client.fetch_text(&mirror_url(base, url)).await {
            Ok(body) => Ok(body),
            Err(mirror) => {
                tracing::warn!("{} mirror fetch failed: {}", label, mirror);
                diagnostics.push(format!("{}: mirror fetch failed.", label));
                Err(FetchFailure::Mirror {
                    label: label.to_string(),
                    primary,
                    mirror,
                })
            }
        }
    }

    /// Reachability check for sources that are only health-checked.
    pub async fn check(&self, url: &str) -> Result<(), Error> {
        self.client.check_source(url).await
    }
}
