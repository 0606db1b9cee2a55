//! Tests for the Unsplash client against a local mock server

use class_catalog::config::SearchConfig;
use class_catalog::image_search::{
    FailureKind, ImageResult, ImageSearchClient, SearchError, SearchRequest, UnsplashClient,
};
use mockito::{Matcher, Server};

fn client_for(server: &Server) -> UnsplashClient {
    let config = SearchConfig::builder()
        .client_id("test-access-key")
        .api_base(server.url())
        .build()
        .unwrap();
    UnsplashClient::new(config).unwrap()
}

const TWO_PHOTOS: &str = r#"{
    "total": 42,
    "total_pages": 3,
    "results": [
        {
            "id": "abc",
            "urls": { "raw": "https://images/abc?raw", "regular": "https://images/abc" },
            "alt_description": "a red car"
        },
        {
            "id": "def",
            "urls": { "regular": "https://images/def" },
            "alt_description": null
        }
    ]
}"#;

#[tokio::test]
async fn test_search_sends_paging_and_credential() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/search/photos")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("query".into(), "red cars".into()),
            Matcher::UrlEncoded("page".into(), "2".into()),
            Matcher::UrlEncoded("per_page".into(), "15".into()),
            Matcher::UrlEncoded("client_id".into(), "test-access-key".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(TWO_PHOTOS)
        .create_async()
        .await;

    let page = client_for(&server)
        .search(SearchRequest::new("red cars", 2, 15))
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(page.total, 42);
    assert_eq!(page.total_pages, 3);
    assert_eq!(
        page.results,
        vec![
            ImageResult::new("https://images/abc", "a red car"),
            ImageResult::new("https://images/def", ""),
        ]
    );
}

#[tokio::test]
async fn test_empty_query_is_rejected_without_a_request() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let err = client_for(&server)
        .search(SearchRequest::new("   ", 1, 15))
        .await
        .unwrap_err();

    assert!(matches!(err, SearchError::EmptyQuery));
    assert_eq!(err.kind(), FailureKind::InvalidQuery);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_error_statuses_are_classified() {
    let cases: [(usize, &str, FailureKind, bool); 5] = [
        (401, "OAuth error: invalid token", FailureKind::Unauthorized, false),
        (403, "Rate Limit Exceeded", FailureKind::RateLimited, true),
        (429, "slow down", FailureKind::RateLimited, true),
        (500, "boom", FailureKind::Server, true),
        (404, "not found", FailureKind::Client, false),
    ];

    for (status, body, kind, transient) in cases {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/search/photos")
            .match_query(Matcher::Any)
            .with_status(status)
            .with_body(body)
            .create_async()
            .await;

        let err = client_for(&server)
            .search(SearchRequest::new("cats", 1, 15))
            .await
            .unwrap_err();

        assert_eq!(err.kind(), kind, "status {status}");
        assert_eq!(err.is_transient(), transient, "status {status}");
    }
}

#[tokio::test]
async fn test_malformed_body_is_a_decode_error() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/search/photos")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"results": "nope"}"#)
        .create_async()
        .await;

    let err = client_for(&server)
        .search(SearchRequest::new("cats", 1, 15))
        .await
        .unwrap_err();

    assert!(matches!(err, SearchError::Decode(_)));
    assert!(!err.is_transient());
}

#[tokio::test]
async fn test_unreachable_host_is_a_transient_network_error() {
    let config = SearchConfig::builder()
        .client_id("test-access-key")
        .api_base("http://127.0.0.1:1")
        .request_timeout_secs(2)
        .build()
        .unwrap();
    let client = UnsplashClient::new(config).unwrap();

    let err = client
        .search(SearchRequest::new("cats", 1, 15))
        .await
        .unwrap_err();

    assert!(matches!(
        err.kind(),
        FailureKind::Network | FailureKind::Timeout
    ));
    assert!(err.is_transient());
}
