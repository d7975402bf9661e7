//! Integration tests using mock HTTP server
//!
//! Tests the full end-to-end flow: YAML config → typed client → HTTP requests → decoded resources

use cf_client::client::{BuildListOptions, DropletListOptions, PackageListOptions};
use cf_client::query::{Filter, LabelSelector, ListOptions, OrderBy};
use cf_client::{Client, ClientConfig, Error, ListQuery};
use serde_json::{json, Value};
use wiremock::matchers::{body_json, header, method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ============================================================================
// Helpers
// ============================================================================

fn config_for(server: &MockServer, extra: &str) -> ClientConfig {
    let yaml = format!(
        "api_url: {}\nauth:\n  type: bearer\n  token: test-token\n{extra}",
        server.uri()
    );
    ClientConfig::from_yaml_str(&yaml).unwrap()
}

fn page(resources: &[Value], next: Option<&str>, previous: Option<&str>) -> Value {
    json!({
        "pagination": {
            "total_results": 5,
            "total_pages": 3,
            "first": {"href": "/v3/droplets?page=1&per_page=2"},
            "last": {"href": "/v3/droplets?page=3&per_page=2"},
            "next": next.map(|href| json!({"href": href})),
            "previous": previous.map(|href| json!({"href": href}))
        },
        "resources": resources
    })
}

fn droplet(guid: &str) -> Value {
    json!({
        "guid": guid,
        "state": "STAGED",
        "created_at": "2024-03-01T10:00:00Z",
        "relationships": {"app": {"data": {"guid": "app-1"}}}
    })
}

// ============================================================================
// Configured client
// ============================================================================

#[tokio::test]
async fn test_list_all_from_yaml_config_sends_auth_on_every_page() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v3/droplets"))
        .and(header("authorization", "Bearer test-token"))
        .and(query_param_is_missing("page"))
        .and(query_param("per_page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(
            &[droplet("d1"), droplet("d2")],
            Some("/v3/droplets?page=2&per_page=2"),
            None,
        )))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v3/droplets"))
        .and(header("authorization", "Bearer test-token"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(
            &[droplet("d3"), droplet("d4")],
            Some("/v3/droplets?page=3&per_page=2"),
            Some("/v3/droplets?page=1&per_page=2"),
        )))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v3/droplets"))
        .and(header("authorization", "Bearer test-token"))
        .and(query_param("page", "3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(
            &[droplet("d5")],
            None,
            Some("/v3/droplets?page=2&per_page=2"),
        )))
        .expect(1)
        .mount(&server)
        .await;

    let config = config_for(&server, "pagination:\n  per_page: 2\n");
    let client = Client::from_config(&config).unwrap();
    let droplets = client.droplets().list_all(None).await.unwrap();

    let guids: Vec<_> = droplets.iter().map(|d| d.guid.as_str()).collect();
    assert_eq!(guids, vec!["d1", "d2", "d3", "d4", "d5"]);
}

#[tokio::test]
async fn test_configured_page_limit_fails_instead_of_truncating() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v3/droplets"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(
            &[droplet("d1")],
            Some("/v3/droplets?page=2&per_page=1"),
            None,
        )))
        .mount(&server)
        .await;

    let config = config_for(&server, "pagination:\n  max_pages: 2\n");
    let client = Client::from_config(&config).unwrap();
    let err = client.droplets().list_all(None).await.unwrap_err();

    assert!(matches!(err, Error::PageLimitExceeded { max_pages: 2 }));
}

#[test]
fn test_invalid_config_rejected() {
    let config = ClientConfig::from_yaml_str("auth:\n  type: none\n").unwrap();
    assert!(matches!(
        Client::from_config(&config),
        Err(Error::MissingConfigField { .. })
    ));
}

// ============================================================================
// Manual paging
// ============================================================================

#[tokio::test]
async fn test_manual_paging_forward_and_back() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v3/droplets"))
        .and(query_param("page", "2"))
        .and(query_param("states", "STAGED"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(
            &[droplet("d3"), droplet("d4")],
            Some("/v3/droplets?page=3&per_page=2&states=STAGED"),
            Some("/v3/droplets?page=1&per_page=2&states=STAGED"),
        )))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v3/droplets"))
        .and(query_param("page", "1"))
        .and(query_param("states", "STAGED"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(
            &[droplet("d1"), droplet("d2")],
            Some("/v3/droplets?page=2&per_page=2&states=STAGED"),
            None,
        )))
        .mount(&server)
        .await;

    let client = Client::from_config(&config_for(&server, "")).unwrap();
    let mut opts = DropletListOptions {
        list: ListOptions::new().with_page(2).with_per_page(2),
        states: Filter::of(["STAGED"]),
        ..DropletListOptions::default()
    };

    let (items, pager) = client.droplets().list(Some(&opts)).await.unwrap();
    assert_eq!(items[0].guid, "d3");
    assert!(pager.has_next());
    assert!(pager.has_previous());

    assert!(pager.advance_previous(&mut opts));
    assert_eq!(opts.list_options().page, Some(1));
    assert_eq!(opts.states, Filter::of(["STAGED"]));

    let (items, pager) = client.droplets().list(Some(&opts)).await.unwrap();
    assert_eq!(items[0].guid, "d1");
    assert!(!pager.has_previous());
    assert!(!pager.advance_previous(&mut opts));
    assert_eq!(opts.list_options().page, Some(1));
}

#[tokio::test]
async fn test_malformed_next_link_ends_traversal() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v3/droplets"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(
            &[droplet("d1")],
            Some("http://[not a url"),
            None,
        )))
        .expect(1)
        .mount(&server)
        .await;

    let client = Client::from_config(&config_for(&server, "")).unwrap();
    let droplets = client.droplets().list_all(None).await.unwrap();

    assert_eq!(droplets.len(), 1);
}

// ============================================================================
// Query encoding on the wire
// ============================================================================

#[tokio::test]
async fn test_complex_filters_reach_server() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v3/packages"))
        .and(query_param("app_guids", "a 1,a&2"))
        .and(query_param("types[not]", "docker"))
        .and(query_param("order_by", "-created_at"))
        .and(query_param("label_selector", "env=prod,!legacy"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "pagination": {"total_results": 0, "total_pages": 0, "next": null},
            "resources": []
        })))
        .expect(1)
        .mount(&server)
        .await;

    let opts = PackageListOptions {
        list: ListOptions::new()
            .with_order_by(OrderBy::desc("created_at"))
            .with_label_selector(LabelSelector::new().equals("env", "prod").not_exists("legacy")),
        app_guids: Filter::of(["a 1", "a&2"]),
        types: Filter::not(["docker"]),
        ..PackageListOptions::default()
    };

    let client = Client::from_config(&config_for(&server, "")).unwrap();
    let (packages, pager) = client.packages().list(Some(&opts)).await.unwrap();

    assert!(packages.is_empty());
    assert!(!pager.has_next());
    assert_eq!(
        opts.to_query_string(),
        "app_guids=a+1,a%262&label_selector=env%3Dprod,%21legacy&order_by=-created_at&types[not]=docker"
    );
}

// ============================================================================
// Resource workflows
// ============================================================================

#[tokio::test]
async fn test_droplet_copy_and_promote() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v3/droplets"))
        .and(query_param("source_guid", "d1"))
        .respond_with(ResponseTemplate::new(201).set_body_json(droplet("d2")))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("PATCH"))
        .and(path("/v3/apps/app-2/relationships/current_droplet"))
        .and(body_json(json!({"data": {"guid": "d2"}})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"guid": "d2"},
            "links": {}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = Client::from_config(&config_for(&server, "")).unwrap();
    let copy = client.droplets().copy("d1", "app-2").await.unwrap();
    let current = client
        .droplets()
        .set_current_association_for_app("app-2", &copy.guid)
        .await
        .unwrap();

    assert_eq!(current.guid(), Some("d2"));
}

#[tokio::test]
async fn test_build_delete_then_get_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/v3/builds/b1"))
        .respond_with(ResponseTemplate::new(202))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v3/builds/b1"))
        .respond_with(ResponseTemplate::new(404).set_body_string("not found"))
        .mount(&server)
        .await;

    let client = Client::from_config(&config_for(&server, "")).unwrap();
    client.builds().delete("b1").await.unwrap();
    let err = client.builds().get("b1").await.unwrap_err();

    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_build_list_server_error_aborts() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v3/builds"))
        .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
        .expect(1)
        .mount(&server)
        .await;

    let client = Client::from_config(&config_for(&server, "")).unwrap();
    let opts = BuildListOptions::new();
    let err = client.builds().list_all(Some(opts)).await.unwrap_err();

    assert_eq!(err.status(), Some(503));
}
