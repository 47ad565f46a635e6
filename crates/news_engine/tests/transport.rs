use std::sync::Arc;
use std::time::Duration;

use news_core::{build_request, ApiConfig, FilterChange, SearchState};
use news_engine::{
    BookmarkStore, MemoryStore, NewsSession, NullObserver, RefreshFailure, RefreshOutcome,
    ReqwestTransport, Transport, TransportFailure, TransportSettings,
};
use url::Url;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn api_for(server: &MockServer) -> ApiConfig {
    ApiConfig {
        endpoint: Url::parse(&format!("{}/search", server.uri())).unwrap(),
        api_key: "k-123".to_string(),
        page_size: 7,
    }
}

#[tokio::test]
async fn transport_returns_status_and_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"response":{}}"#))
        .mount(&server)
        .await;

    let transport = ReqwestTransport::new(TransportSettings::default()).unwrap();
    let request = build_request(&api_for(&server), &SearchState::new());

    let response = transport.request(&request).await.expect("request ok");
    assert_eq!(response.status, 200);
    assert_eq!(response.body, r#"{"response":{}}"#);
}

#[tokio::test]
async fn transport_passes_error_status_through() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let transport = ReqwestTransport::new(TransportSettings::default()).unwrap();
    let request = build_request(&api_for(&server), &SearchState::new());

    let response = transport.request(&request).await.expect("request ok");
    assert_eq!(response.status, 404);
    assert!(!response.is_success());
}

#[tokio::test]
async fn transport_times_out_on_slow_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(250))
                .set_body_string("{}"),
        )
        .mount(&server)
        .await;

    let settings = TransportSettings {
        request_timeout: Duration::from_millis(50),
        ..TransportSettings::default()
    };
    let transport = ReqwestTransport::new(settings).unwrap();
    let request = build_request(&api_for(&server), &SearchState::new());

    let err = transport.request(&request).await.unwrap_err();
    assert_eq!(err.kind, TransportFailure::Timeout);
}

#[tokio::test]
async fn transport_rejects_too_large_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("Content-Type", "application/json")
                .insert_header("Content-Length", "11")
                .set_body_string("01234567890"),
        )
        .mount(&server)
        .await;

    let settings = TransportSettings {
        max_bytes: 10,
        ..TransportSettings::default()
    };
    let transport = ReqwestTransport::new(settings).unwrap();
    let request = build_request(&api_for(&server), &SearchState::new());

    let err = transport.request(&request).await.unwrap_err();
    assert_eq!(
        err.kind,
        TransportFailure::TooLarge {
            max_bytes: 10,
            actual: Some(11)
        }
    );
}

#[tokio::test]
async fn session_sends_filters_to_the_api() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("api-key", "k-123"))
        .and(query_param("page-size", "7"))
        .and(query_param("page", "1"))
        .and(query_param("order-by", "newest"))
        .and(query_param("show-fields", "thumbnail,trailText"))
        .and(query_param("q", "rust"))
        .and(query_param("section", "technology"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{"response":{"total":1,"pages":1,"results":[
                {"id":"technology/rust","webTitle":"Rust","webUrl":"https://x/rust",
                 "sectionName":"Technology","fields":{"trailText":"<b>Fast</b>"}}]}}"#,
        ))
        .expect(1)
        .mount(&server)
        .await;

    news_logging::initialize_for_tests();
    let session = NewsSession::new(
        api_for(&server),
        Arc::new(ReqwestTransport::new(TransportSettings::default()).unwrap()),
        BookmarkStore::new(Arc::new(MemoryStore::new())),
        Arc::new(NullObserver),
    );

    let outcome = session
        .set_filters(FilterChange {
            query: Some("rust".to_string()),
            section: Some("technology".to_string()),
            include_summaries: Some(true),
        })
        .await
        .expect("filters always refresh");

    assert!(outcome.is_loaded());
    let view = session.view();
    assert_eq!(view.cards[0].summary.as_deref(), Some("Fast"));
    assert_eq!(view.status_text, "1 result(s)");
}

#[tokio::test]
async fn session_reports_server_errors() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let session = NewsSession::new(
        api_for(&server),
        Arc::new(ReqwestTransport::new(TransportSettings::default()).unwrap()),
        BookmarkStore::new(Arc::new(MemoryStore::new())),
        Arc::new(NullObserver),
    );

    let outcome = session.refresh().await;
    assert!(matches!(
        outcome,
        RefreshOutcome::Failed(RefreshFailure::HttpStatus(503))
    ));
    assert!(!session.search().in_flight());
}
