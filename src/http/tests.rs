//! Tests for the HTTP transport module

use super::*;
use crate::error::Error;
use crate::types::Method;
use pretty_assertions::assert_eq;
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> HttpClient {
    HttpClient::with_config(HttpClientConfig::builder().base_url(server.uri()).build()).unwrap()
}

#[test]
fn test_http_client_config_default() {
    let config = HttpClientConfig::default();
    assert_eq!(config.timeout, Duration::from_secs(30));
    assert!(config.base_url.is_none());
    assert!(config.rate_limit.is_none());
    assert_eq!(config.auth, AuthConfig::None);
    assert!(config.user_agent.starts_with("cf-client/"));
}

#[test]
fn test_http_client_config_builder() {
    let config = HttpClientConfig::builder()
        .base_url("https://api.example.com")
        .timeout(Duration::from_secs(60))
        .auth(AuthConfig::bearer("tok"))
        .rate_limit(RateLimiterConfig::new(5, 2))
        .header("X-Custom", "value")
        .user_agent("test-agent/1.0")
        .build();

    assert_eq!(config.base_url.as_deref(), Some("https://api.example.com"));
    assert_eq!(config.timeout, Duration::from_secs(60));
    assert_eq!(config.auth, AuthConfig::bearer("tok"));
    assert_eq!(config.rate_limit, Some(RateLimiterConfig::new(5, 2)));
    assert_eq!(
        config.default_headers.get("X-Custom").map(String::as_str),
        Some("value")
    );
    assert_eq!(config.user_agent, "test-agent/1.0");

    let client = HttpClient::with_config(config).unwrap();
    assert!(format!("{client:?}").contains("has_rate_limiter: true"));
}

#[test]
fn test_build_url() {
    let client = HttpClient::with_config(
        HttpClientConfig::builder()
            .base_url("https://api.example.com/")
            .build(),
    )
    .unwrap();

    assert_eq!(
        client.build_url("/v3/builds?page=2"),
        "https://api.example.com/v3/builds?page=2"
    );
    assert_eq!(
        client.build_url("v3/builds"),
        "https://api.example.com/v3/builds"
    );
    assert_eq!(
        client.build_url("https://other.example.com/v3/droplets"),
        "https://other.example.com/v3/droplets"
    );
}

#[test]
fn test_auth_debug_hides_secrets() {
    let bearer = format!("{:?}", AuthConfig::bearer("s3cret"));
    let basic = format!("{:?}", AuthConfig::basic("admin", "hunter2"));

    assert!(!bearer.contains("s3cret"));
    assert!(basic.contains("admin"));
    assert!(!basic.contains("hunter2"));
}

#[test]
fn test_http_request_constructors() {
    let req = HttpRequest::post("/v3/builds", json!({"a": 1}));
    assert_eq!(req.method, Method::POST);
    assert_eq!(req.body, Some(json!({"a": 1})));

    let req = HttpRequest::delete("/v3/builds/x");
    assert_eq!(req.method, Method::DELETE);
    assert!(req.body.is_none());
}

#[tokio::test]
async fn test_send_get_with_query() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v3/builds"))
        .and(query_param("page", "2"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("X-Vcap-Request-Id", "req-1")
                .set_body_json(json!({"ok": true})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let response = client_for(&server)
        .send(HttpRequest::get("/v3/builds?page=2"))
        .await
        .unwrap();

    assert_eq!(response.status, 200);
    assert_eq!(response.header("x-vcap-request-id"), Some("req-1"));
    assert_eq!(response.text(), r#"{"ok":true}"#);
}

#[tokio::test]
async fn test_send_posts_json_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v3/packages"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({"type": "bits"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"guid": "p"})))
        .expect(1)
        .mount(&server)
        .await;

    let response = client_for(&server)
        .send(HttpRequest::post("/v3/packages", json!({"type": "bits"})))
        .await
        .unwrap();

    assert_eq!(response.status, 201);
}

#[tokio::test]
async fn test_send_applies_bearer_and_default_headers() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v3/droplets"))
        .and(header("authorization", "Bearer tok-123"))
        .and(header("X-Custom", "value"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let client = HttpClient::with_config(
        HttpClientConfig::builder()
            .base_url(server.uri())
            .auth(AuthConfig::bearer("tok-123"))
            .header("X-Custom", "value")
            .build(),
    )
    .unwrap();

    let response = client.send(HttpRequest::get("/v3/droplets")).await.unwrap();
    assert_eq!(response.status, 200);
}

#[tokio::test]
async fn test_send_applies_basic_auth() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v3/builds"))
        .and(header("authorization", "Basic dXNlcjpwYXNz"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let client = HttpClient::with_config(
        HttpClientConfig::builder()
            .base_url(server.uri())
            .auth(AuthConfig::basic("user", "pass"))
            .build(),
    )
    .unwrap();

    client.send(HttpRequest::get("/v3/builds")).await.unwrap();
}

#[tokio::test]
async fn test_send_returns_error_statuses_without_retry() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v3/builds"))
        .respond_with(ResponseTemplate::new(503).set_body_string("unavailable"))
        .expect(1)
        .mount(&server)
        .await;

    let response = client_for(&server)
        .send(HttpRequest::get("/v3/builds"))
        .await
        .unwrap();

    assert_eq!(response.status, 503);
    assert_eq!(response.text(), "unavailable");
}

#[tokio::test]
async fn test_send_without_base_url_fails() {
    let client = HttpClient::new().unwrap();
    let err = client
        .send(HttpRequest::get("/v3/builds"))
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Transport { .. }));
}

#[tokio::test]
async fn test_send_connection_failure_is_error() {
    let server = MockServer::start().await;
    let uri = server.uri();
    drop(server);

    let client =
        HttpClient::with_config(HttpClientConfig::builder().base_url(uri).build()).unwrap();
    let err = client
        .send(HttpRequest::get("/v3/builds"))
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Http(_)));
}

#[tokio::test]
async fn test_send_through_rate_limiter() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(3)
        .mount(&server)
        .await;

    let client = HttpClient::with_config(
        HttpClientConfig::builder()
            .base_url(server.uri())
            .rate_limit(RateLimiterConfig::new(100, 3))
            .build(),
    )
    .unwrap();

    for _ in 0..3 {
        client.send(HttpRequest::get("/v3/builds")).await.unwrap();
    }
}
