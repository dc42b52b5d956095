//! Caching wrapper around the source client.

use voterstats_api::{Client, Error};

use crate::cache::TextCache;

/// Source client with an optional per-URL body cache.
///
/// Cache hits bypass the network entirely. Only successful bodies are
/// stored, so a failing source is retried on the next request.
pub struct CachedClient {
    inner: Client,
    cache: Option<TextCache>,
}

impl CachedClient {
    pub fn new(inner: Client, cache: TextCache) -> Self {
        Self {
            inner,
            cache: Some(cache),
        }
    }

    /// A client that always goes to the network.
    pub fn uncached(inner: Client) -> Self {
        Self { inner, cache: None }
    }

    /// Fetches `url` as text, returning the cached body when available.
    pub async fn fetch_text(&self, url: &str) -> Result<String, Error> {
        if let Some(cache) = &self.cache {
            if let Some(body) = cache.get(url) {
                tracing::debug!("Cache hit for {}", url);
                return Ok(body);
            }
        }

        let body = self.inner.fetch_text(url).await?;
        if let Some(cache) = &self.cache {
            cache.insert(url.to_string(), body.clone());
        }
        Ok(body)
    }

    /// Reachability check; never cached.
    pub async fn check_source(&self, url: &str) -> Result<(), Error> {
        self.inner.check_source(url).await
    }
}
