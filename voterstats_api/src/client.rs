//! HTTP client for fetching source pages as raw text.

use std::time::Duration;

use url::Url;

use crate::{
    user_agent::{get_user_agent, ACCEPT},
    Error,
};

/// Default request timeout. The pipeline itself imposes none.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP client for government and survey source pages.
///
/// Every request carries the fixed identifying user agent and an
/// `Accept: text/html, text/plain` header. Responses are consumed as raw
/// text; any non-success status is an error.
pub struct Client {
    http: reqwest::Client,
}

impl Client {
    /// Creates a client with the default timeout.
    pub fn new() -> Result<Self, Error> {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    /// Creates a client with a custom request timeout.
    pub fn with_timeout(timeout: Duration) -> Result<Self, Error> {
        let http = reqwest::Client::builder()
            .user_agent(get_user_agent())
            .timeout(timeout)
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                Error::RequestFailed
            })?;
        Ok(Self { http })
    }

    fn parse_url(url: &str) -> Result<Url, Error> {
        Url::parse(url).map_err(|e| {
            tracing::error!("Invalid source URL {}: {}", url, e);
            Error::InvalidUrl(url.to_string())
        })
    }

    async fn send(&self, url: &str) -> Result<reqwest::Response, Error> {
        let url = Self::parse_url(url)?;
        self.http
            .get(url)
            .header("accept", ACCEPT)
            .header("accept-language", "en-US,en;q=0.9")
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to get resource: {}", e);
                Error::RequestFailed
            })
    }

    /// Fetches `url` and returns the response body as text.
    pub async fn fetch_text(&self, url: &str) -> Result<String, Error> {
        let resp = self.send(url).await?;

        let status = resp.status();
        let body = resp.text().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            Error::RequestFailed
        })?;

        if !status.is_success() {
            let snippet = truncate_body(&body);
            tracing::error!("Fetch failed ({}) for {}: {}", status, url, snippet);
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                body: snippet,
            });
        }

        Ok(body)
    }

    /// Checks that `url` answers with a success status. The body is discarded.
    pub async fn check_source(&self, url: &str) -> Result<(), Error> {
        let resp = self.send(url).await?;
        let status = resp.status();
        if !status.is_success() {
            tracing::error!("Source check failed ({}) for {}", status, url);
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                body: String::new(),
            });
        }
        Ok(())
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        return body.to_string();
    }
    let mut end = MAX;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...[truncated]", &body[..end])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_keeps_short_bodies() {
        assert_eq!(truncate_body("oops"), "oops");
    }

    #[test]
    fn truncate_respects_char_boundaries() {
        let body = "é".repeat(1500);
        let out = truncate_body(&body);
        assert!(out.ends_with("...[truncated]"));
        assert!(out.len() <= 2000 + "...[truncated]".len());
    }

    #[test]
    fn rejects_unparseable_url() {
        assert!(matches!(
            Client::parse_url("not a url"),
            Err(Error::InvalidUrl(_))
        ));
    }
}
