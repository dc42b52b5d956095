use voterstats_api::user_agent::USER_AGENT;
use voterstats_api::{Client, Error};
use wiremock::matchers::{header, header_exists, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn fetch_text_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/party"))
        .and(header("user-agent", USER_AGENT))
        .and(header_exists("accept"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<p>2025 1 2 3 4 10</p>"))
        .mount(&mock_server)
        .await;

    let client = Client::new().unwrap();
    let body = client
        .fetch_text(&format!("{}/party", mock_server.uri()))
        .await
        .unwrap();
    assert_eq!(body, "<p>2025 1 2 3 4 10</p>");
}

#[tokio::test]
async fn fetch_text_server_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/party"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&mock_server)
        .await;

    let client = Client::new().unwrap();
    let result = client
        .fetch_text(&format!("{}/party", mock_server.uri()))
        .await;

    match result {
        Err(Error::HttpStatus { status, body }) => {
            assert_eq!(status, 500);
            assert_eq!(body, "Internal Server Error");
        }
        other => panic!("expected HttpStatus error, got {:?}", other),
    }
}

#[tokio::test]
async fn fetch_text_invalid_url() {
    let client = Client::new().unwrap();
    let result = client.fetch_text("::not-a-url::").await;
    assert!(matches!(result, Err(Error::InvalidUrl(_))));
}

#[tokio::test]
async fn check_source_success_and_failure() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/ok"))
        .respond_with(ResponseTemplate::new(200).set_body_string("fine"))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/gone"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let client = Client::new().unwrap();
    assert!(client
        .check_source(&format!("{}/ok", mock_server.uri()))
        .await
        .is_ok());

    let err = client
        .check_source(&format!("{}/gone", mock_server.uri()))
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(404));
}
