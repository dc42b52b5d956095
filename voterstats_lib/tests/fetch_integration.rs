//! Integration tests for fetch-with-mirror against wiremock servers.

use std::time::Duration;

use voterstats_lib::cache::TextCache;
use voterstats_lib::voterstats_api::Client;
use voterstats_lib::{CachedClient, FetchFailure, FetchStage, SourceFetcher};
use wiremock::matchers::{method, path, path_regex};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn fetcher(mirror: Option<&MockServer>) -> SourceFetcher {
    let client = CachedClient::uncached(Client::new().expect("client"));
    SourceFetcher::new(client, mirror.map(|m| m.uri()))
}

#[tokio::test]
async fn primary_success_adds_no_diagnostics() {
    let primary = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/party"))
        .respond_with(ResponseTemplate::new(200).set_body_string("2026 1 1 1 1 4"))
        .expect(1)
        .mount(&primary)
        .await;

    let mut diagnostics = Vec::new();
    let body = fetcher(None)
        .fetch_with_mirror(&format!("{}/party", primary.uri()), "party totals", &mut diagnostics)
        .await
        .unwrap();

    assert_eq!(body, "2026 1 1 1 1 4");
    assert!(diagnostics.is_empty());
}

#[tokio::test]
async fn mirror_serves_body_when_primary_fails() {
    let primary = MockServer::start().await;
    let mirror = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/party"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&primary)
        .await;
    Mock::given(method("GET"))
        .and(path_regex(r"^/http://.*/party$"))
        .respond_with(ResponseTemplate::new(200).set_body_string("mirrored text"))
        .expect(1)
        .mount(&mirror)
        .await;

    let mut diagnostics = Vec::new();
    let body = fetcher(Some(&mirror))
        .fetch_with_mirror(&format!("{}/party", primary.uri()), "party totals", &mut diagnostics)
        .await
        .unwrap();

    assert_eq!(body, "mirrored text");
    assert_eq!(
        diagnostics,
        vec!["party totals: primary source fetch failed, trying mirror proxy."]
    );
}

#[tokio::test]
async fn both_failing_returns_primary_error_tagged_mirror() {
    let primary = MockServer::start().await;
    let mirror = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500).set_body_string("primary down"))
        .mount(&primary)
        .await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(502))
        .expect(1)
        .mount(&mirror)
        .await;

    let mut diagnostics = Vec::new();
    let err = fetcher(Some(&mirror))
        .fetch_with_mirror(&format!("{}/county", primary.uri()), "county table", &mut diagnostics)
        .await
        .unwrap_err();

    assert_eq!(err.stage(), FetchStage::Mirror);
    assert_eq!(err.label(), "county table");
    assert_eq!(err.primary_error().status(), Some(500));
    match &err {
        FetchFailure::Mirror { mirror, .. } => assert_eq!(mirror.status(), Some(502)),
        other => panic!("expected mirror failure, got {:?}", other),
    }
    assert_eq!(
        diagnostics,
        vec![
            "county table: primary source fetch failed, trying mirror proxy.",
            "county table: mirror fetch failed.",
        ]
    );
}

#[tokio::test]
async fn disabled_mirror_fails_at_primary_stage() {
    let primary = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&primary)
        .await;

    let mut diagnostics = Vec::new();
    let err = fetcher(None)
        .fetch_with_mirror(&format!("{}/party", primary.uri()), "party totals", &mut diagnostics)
        .await
        .unwrap_err();

    assert_eq!(err.stage(), FetchStage::Primary);
    assert_eq!(err.primary_error().status(), Some(404));
    assert_eq!(diagnostics.len(), 1);
}

#[tokio::test]
async fn cached_client_serves_repeat_fetches_from_cache() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/county"))
        .respond_with(ResponseTemplate::new(200).set_body_string("ALACHUA 1 1 1 1 4"))
        .expect(1)
        .mount(&server)
        .await;

    let client = CachedClient::new(
        Client::new().expect("client"),
        TextCache::new(Duration::from_secs(60)),
    );
    let url = format!("{}/county", server.uri());
    assert_eq!(client.fetch_text(&url).await.unwrap(), "ALACHUA 1 1 1 1 4");
    assert_eq!(client.fetch_text(&url).await.unwrap(), "ALACHUA 1 1 1 1 4");
}

#[tokio::test]
async fn failed_fetch_is_not_cached() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .expect(2)
        .mount(&server)
        .await;

    let client = CachedClient::new(
        Client::new().expect("client"),
        TextCache::new(Duration::from_secs(60)),
    );
    let url = format!("{}/party", server.uri());
    assert!(client.fetch_text(&url).await.is_err());
    assert!(client.fetch_text(&url).await.is_err());
}
