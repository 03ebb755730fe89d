//! Integration tests for the pagination engine.
//!
//! These tests verify next-link following, termination conditions, request
//! counts and manual marker walking against a mock Craton service.

use craton_api::v1::{CratonClient, ListParams};
use craton_api::{CratonConfig, CratonUrl, ProjectId, Session, Token, Username};
use serde_json::{json, Value};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn create_test_session() -> Session {
    Session::new(
        Username::new("demo").unwrap(),
        ProjectId::new("b9f10eca").unwrap(),
        Token::new("demo-token").unwrap(),
    )
}

fn create_client(server: &MockServer) -> CratonClient {
    let config = CratonConfig::builder()
        .url(CratonUrl::new(server.uri()).unwrap())
        .build()
        .unwrap();
    CratonClient::new(&config, &create_test_session())
}

/// Builds host items with ids in `range`.
fn hosts_page(range: std::ops::Range<u32>) -> Vec<Value> {
    range
        .map(|id| json!({"id": id, "name": format!("host-{id}")}))
        .collect()
}

/// A list body with items and an optional next link.
fn list_body(items: Vec<Value>, next: Option<String>) -> Value {
    let links = next.map_or_else(Vec::new, |href| vec![json!({"rel": "next", "href": href})]);
    json!({"hosts": items, "links": links})
}

// ============================================================================
// Auto-pagination
// ============================================================================

#[tokio::test]
async fn test_autopagination_follows_next_links_until_exhausted() {
    let mock_server = MockServer::start().await;
    let client = create_client(&mock_server);

    // Later pages are matched by their marker, so mount them first.
    Mock::given(method("GET"))
        .and(path("/hosts"))
        .and(query_param("marker", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(list_body(
            hosts_page(3..5),
            Some(format!("{}/hosts?limit=2&marker=4", mock_server.uri())),
        )))
        .expect(1)
        .mount(&mock_server)
        .await;

    // Final page: no next link.
    Mock::given(method("GET"))
        .and(path("/hosts"))
        .and(query_param("marker", "4"))
        .respond_with(ResponseTemplate::new(200).set_body_json(list_body(hosts_page(5..6), None)))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/hosts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(list_body(
            hosts_page(1..3),
            Some(format!("{}/hosts?limit=2&marker=2", mock_server.uri())),
        )))
        .expect(1)
        .mount(&mock_server)
        .await;

    let hosts = client
        .hosts()
        .list(ListParams::new().limit(2))
        .try_collect()
        .await
        .unwrap();

    let ids: Vec<&Value> = hosts.iter().map(|h| h.get_field("id").unwrap()).collect();
    assert_eq!(ids, vec![&json!(1), &json!(2), &json!(3), &json!(4), &json!(5)]);
}

#[tokio::test]
async fn test_autopagination_stops_on_empty_page() {
    let mock_server = MockServer::start().await;
    let client = create_client(&mock_server);

    // The empty page advertises a next link, which must not be followed.
    Mock::given(method("GET"))
        .and(path("/hosts"))
        .and(query_param("marker", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(list_body(
            Vec::new(),
            Some(format!("{}/hosts?marker=99", mock_server.uri())),
        )))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/hosts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(list_body(
            hosts_page(1..3),
            Some(format!("{}/hosts?marker=2", mock_server.uri())),
        )))
        .expect(1)
        .mount(&mock_server)
        .await;

    let hosts = client
        .hosts()
        .list(ListParams::new())
        .try_collect()
        .await
        .unwrap();
    assert_eq!(hosts.len(), 2);
}

#[tokio::test]
async fn test_empty_collection_issues_one_request() {
    let mock_server = MockServer::start().await;
    let client = create_client(&mock_server);

    Mock::given(method("GET"))
        .and(path("/hosts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(list_body(Vec::new(), None)))
        .expect(1)
        .mount(&mock_server)
        .await;

    let hosts = client
        .hosts()
        .list(ListParams::new())
        .try_collect()
        .await
        .unwrap();
    assert!(hosts.is_empty());
}

#[tokio::test]
async fn test_abandoning_a_list_stops_requests() {
    let mock_server = MockServer::start().await;
    let client = create_client(&mock_server);

    // Only the first page may ever be requested.
    Mock::given(method("GET"))
        .and(path("/hosts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(list_body(
            hosts_page(1..3),
            Some(format!("{}/hosts?marker=2", mock_server.uri())),
        )))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut list = client.hosts().list(ListParams::new());
    let first = list.try_next().await.unwrap().unwrap();
    assert_eq!(first.get_field("id"), Some(&json!(1)));
    drop(list);
}

// ============================================================================
// Manual pagination
// ============================================================================

#[tokio::test]
async fn test_manual_mode_issues_exactly_one_request() {
    let mock_server = MockServer::start().await;
    let client = create_client(&mock_server);

    // The next link exists but manual mode must not follow it.
    Mock::given(method("GET"))
        .and(path("/hosts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(list_body(
            hosts_page(1..31),
            Some(format!("{}/hosts?limit=30&marker=30", mock_server.uri())),
        )))
        .expect(1)
        .mount(&mock_server)
        .await;

    let hosts = client
        .hosts()
        .list(ListParams::new().autopaginate(false).limit(30))
        .try_collect()
        .await
        .unwrap();
    assert_eq!(hosts.len(), 30);
}

#[tokio::test]
async fn test_manual_marker_walk_over_63_items() {
    let mock_server = MockServer::start().await;
    let client = create_client(&mock_server);

    // 63 hosts, walked in three pages of 30, 30 and 3.
    Mock::given(method("GET"))
        .and(path("/hosts"))
        .and(query_param("marker", "29"))
        .respond_with(ResponseTemplate::new(200).set_body_json(list_body(
            hosts_page(30..60),
            Some(format!("{}/hosts?limit=30&marker=59", mock_server.uri())),
        )))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/hosts"))
        .and(query_param("marker", "59"))
        .respond_with(ResponseTemplate::new(200).set_body_json(list_body(hosts_page(60..63), None)))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/hosts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(list_body(
            hosts_page(0..30),
            Some(format!("{}/hosts?limit=30&marker=29", mock_server.uri())),
        )))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut seen = Vec::new();
    let mut marker: Option<String> = None;
    let mut pages = Vec::new();

    loop {
        let mut params = ListParams::new().autopaginate(false).limit(30);
        if let Some(m) = &marker {
            params = params.marker(m.clone());
        }
        let page = client.hosts().list(params).try_collect().await.unwrap();
        if page.is_empty() {
            break;
        }
        marker = page.last().unwrap().id();
        pages.push(page.len());
        seen.extend(page);
        if pages.last() < Some(&30) {
            break;
        }
    }

    assert_eq!(pages, vec![30, 30, 3]);
    assert_eq!(seen.len(), 63);
    assert_eq!(seen[0].get_field("id"), Some(&json!(0)));
    assert_eq!(seen[62].get_field("id"), Some(&json!(62)));
}

// ============================================================================
// Error propagation
// ============================================================================

#[tokio::test]
async fn test_page_fetch_error_propagates() {
    let mock_server = MockServer::start().await;
    let client = create_client(&mock_server);

    Mock::given(method("GET"))
        .and(path("/hosts"))
        .and(query_param("marker", "2"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({"message": "boom"})))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/hosts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(list_body(
            hosts_page(1..3),
            Some(format!("{}/hosts?marker=2", mock_server.uri())),
        )))
        .expect(1)
        .mount(&mock_server)
        .await;

    let err = client
        .hosts()
        .list(ListParams::new())
        .try_collect()
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        craton_api::HttpError::Api(craton_api::ApiError::InternalServerError { .. })
    ));
}
