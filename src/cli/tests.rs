//! Tests for the CLI module

use super::*;
use crate::client::Client;
use crate::http::{HttpClient, HttpClientConfig};
use crate::query::OrderBy;
use clap::Parser;
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(args).unwrap()
}

fn client_for(server: &MockServer) -> Client {
    Client::new(
        HttpClient::with_config(HttpClientConfig::builder().base_url(server.uri()).build())
            .unwrap(),
    )
}

#[test]
fn test_parse_list_args() {
    let cli = parse(&[
        "cf-client",
        "builds",
        "list",
        "--all",
        "--app",
        "a1",
        "--per-page",
        "50",
        "--states",
        "STAGED,FAILED",
        "--order-by",
        "-created_at",
    ]);

    match cli.command {
        Commands::Builds {
            action: ResourceAction::List(args),
        } => {
            assert!(args.all);
            assert_eq!(args.app.as_deref(), Some("a1"));
            assert_eq!(args.per_page, Some(50));
            assert_eq!(args.states, vec!["STAGED", "FAILED"]);
            assert_eq!(args.order_by, Some(OrderBy::desc("created_at")));
        }
        other => panic!("Expected builds list, got {other:?}"),
    }
    assert_eq!(cli.format, OutputFormat::Json);
}

#[test]
fn test_parse_global_flags_after_subcommand() {
    let cli = parse(&[
        "cf-client",
        "droplets",
        "get",
        "d1",
        "--format",
        "pretty",
        "--api-url",
        "https://api.example.org",
    ]);

    assert_eq!(cli.format, OutputFormat::Pretty);
    assert_eq!(cli.api_url.as_deref(), Some("https://api.example.org"));
    assert!(matches!(
        cli.command,
        Commands::Droplets {
            action: ResourceAction::Get { ref guid }
        } if guid == "d1"
    ));
}

#[test]
fn test_parse_rejects_unknown_resource() {
    assert!(Cli::try_parse_from(["cf-client", "apps", "list"]).is_err());
}

#[test]
fn test_load_config_from_file_with_api_url_flag() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("cf.yaml");
    std::fs::write(
        &file,
        "api_url: https://file.example.org\npagination:\n  max_pages: 3\n",
    )
    .unwrap();

    let cli = parse(&[
        "cf-client",
        "--config",
        file.to_str().unwrap(),
        "--api-url",
        "https://flag.example.org",
        "packages",
        "list",
    ]);
    let config = Runner::new(cli).load_config().unwrap();

    assert_eq!(config.api_url, "https://flag.example.org");
    assert_eq!(config.pagination.max_pages, Some(3));
}

#[tokio::test]
async fn test_execute_list_single_page() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v3/packages"))
        .and(query_param("states", "READY"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "pagination": {"total_results": 1, "total_pages": 2, "next": null},
            "resources": [{
                "guid": "p1",
                "type": "bits",
                "state": "READY",
                "created_at": "2024-03-01T10:00:00Z"
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let cli = parse(&[
        "cf-client", "packages", "list", "--states", "READY", "--page", "2",
    ]);
    let output = Runner::new(cli)
        .execute(&client_for(&server))
        .await
        .unwrap();

    assert_eq!(output["resources"][0]["guid"], "p1");
    assert_eq!(output["pagination"]["total_pages"], 2);
}

#[tokio::test]
async fn test_execute_delete() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/v3/droplets/d1"))
        .respond_with(ResponseTemplate::new(202))
        .expect(1)
        .mount(&server)
        .await;

    let cli = parse(&["cf-client", "droplets", "delete", "d1"]);
    let output = Runner::new(cli)
        .execute(&client_for(&server))
        .await
        .unwrap();

    assert_eq!(output, json!({"deleted": "d1"}));
}

#[tokio::test]
async fn test_execute_list_all_for_app() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v3/apps/a1/builds"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "pagination": {"total_results": 1, "total_pages": 1, "next": null},
            "resources": [{
                "guid": "b1",
                "state": "STAGED",
                "created_at": "2024-03-01T10:00:00Z",
                "package": {"guid": "p1"}
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let cli = parse(&["cf-client", "builds", "list", "--all", "--app", "a1"]);
    let output = Runner::new(cli)
        .execute(&client_for(&server))
        .await
        .unwrap();

    assert_eq!(output["resources"][0]["guid"], "b1");
    assert!(output.get("pagination").is_none());
}
