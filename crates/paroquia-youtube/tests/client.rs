//! Integration tests for `YoutubeClient` and the aggregator using wiremock.

use paroquia_youtube::{aggregate, BroadcastFilter, TierSource, YoutubeClient, YoutubeError};
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(base_url: &str) -> YoutubeClient {
    YoutubeClient::with_base_url("test-key", "UC123", 5, "paroquia-test/0.1", base_url)
        .expect("client construction should not fail")
}

fn search_item(id: &str, status: &str) -> serde_json::Value {
    json!({
        "kind": "youtube#searchResult",
        "id": { "kind": "youtube#video", "videoId": id },
        "snippet": {
            "publishedAt": "2026-02-01T18:30:00Z",
            "channelId": "UC123",
            "title": format!("Santa Missa {id}"),
            "thumbnails": {
                "default": { "url": format!("https://i.ytimg.com/vi/{id}/default.jpg") },
                "medium": { "url": format!("https://i.ytimg.com/vi/{id}/mqdefault.jpg") },
                "high": { "url": format!("https://i.ytimg.com/vi/{id}/hqdefault.jpg") }
            },
            "liveBroadcastContent": status
        }
    })
}

fn search_body(items: Vec<serde_json::Value>) -> serde_json::Value {
    json!({
        "kind": "youtube#searchListResponse",
        "regionCode": "BR",
        "pageInfo": { "totalResults": items.len(), "resultsPerPage": items.len() },
        "items": items
    })
}

#[tokio::test]
async fn search_sends_channel_and_filter_parameters() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("key", "test-key"))
        .and(query_param("channelId", "UC123"))
        .and(query_param("part", "snippet"))
        .and(query_param("order", "date"))
        .and(query_param("maxResults", "2"))
        .and(query_param("type", "video"))
        .and(query_param("eventType", "upcoming"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(search_body(vec![search_item("u1", "upcoming")])),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let items = client
        .search(BroadcastFilter::Upcoming, 2)
        .await
        .expect("search should succeed");

    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["id"]["videoId"], "u1");
}

#[tokio::test]
async fn search_reports_http_errors_without_leaking_the_key() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({
            "error": { "code": 403, "message": "quotaExceeded" }
        })))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client
        .search(BroadcastFilter::Live, 1)
        .await
        .expect_err("403 should be an error");

    assert!(matches!(err, YoutubeError::Http(_)), "got: {err:?}");
    assert!(!err.to_string().contains("test-key"), "key leaked: {err}");
}

#[tokio::test]
async fn search_reports_malformed_envelope() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client.search(BroadcastFilter::Any, 10).await.unwrap_err();

    assert!(
        matches!(err, YoutubeError::Deserialize { ref context, .. } if context.contains("none")),
        "got: {err:?}"
    );
}

#[tokio::test]
async fn fetch_tier_reads_failures_as_empty() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let items = client.fetch_tier(BroadcastFilter::Live, 1).await;

    assert!(items.is_empty());
}

#[tokio::test]
async fn fetch_tier_reads_unreachable_server_as_empty() {
    // Port 9 (discard) is not listening in the test environment.
    let client = test_client("http://127.0.0.1:9");
    let items = client.fetch_tier(BroadcastFilter::Completed, 10).await;

    assert!(items.is_empty());
}

#[tokio::test]
async fn aggregate_against_mock_api_orders_and_deduplicates() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("eventType", "live"))
        .and(query_param("maxResults", "1"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(search_body(vec![search_item("A", "live")])),
        )
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("eventType", "upcoming"))
        .and(query_param("maxResults", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(search_body(vec![
            search_item("B", "upcoming"),
            search_item("A", "live"),
        ])))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("eventType", "completed"))
        .and(query_param("maxResults", "10"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(search_body(vec![search_item("C", "none")])),
        )
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let feed = aggregate(&client).await.expect("aggregate should succeed");

    let ids: Vec<&str> = feed.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["A", "B", "C"]);
    assert!(feed[0].is_live);
    assert!(feed[1].is_upcoming);
    assert!(!feed[2].is_live && !feed[2].is_upcoming);
}

#[tokio::test]
async fn aggregate_against_mock_api_falls_back_when_completed_fails() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("eventType", "completed"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": { "code": 400, "message": "invalidSearchFilter" }
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("eventType", "live"))
        .respond_with(ResponseTemplate::new(200).set_body_json(search_body(vec![])))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("eventType", "upcoming"))
        .respond_with(ResponseTemplate::new(200).set_body_json(search_body(vec![])))
        .mount(&server)
        .await;

    // Unfiltered search: lowest priority so the filtered mocks win when they match.
    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("maxResults", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(search_body(vec![
            search_item("R1", "none"),
            search_item("R2", "none"),
        ])))
        .with_priority(10)
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let feed = aggregate(&client).await.expect("aggregate should succeed");

    let ids: Vec<&str> = feed.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["R1", "R2"]);
}

#[tokio::test]
async fn aggregate_against_failing_api_is_empty() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(503))
        .expect(4)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let feed = aggregate(&client).await.expect("tier failures are not fatal");

    assert!(feed.is_empty());
}
