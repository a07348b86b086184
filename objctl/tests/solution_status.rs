//! solution status against a recording transport

mod common;

use common::{tenant_context, RecordingClient};
use http::Method;
use objctl::commands::solution::status::{self, StatusArgs, StatusType};
use objctl::errors::CliError;
use objctl::output::OutputFormat;

const RELEASE: &str = r#"{"items": [{
    "data": {"solutionName": "mySolution", "solutionVersion": "1.2.0"},
    "createdAt": "2023-05-01T10:00:00Z"
}]}"#;

const INSTALL: &str = r#"{"items": [{
    "data": {
        "solutionName": "mySolution",
        "solutionVersion": "1.2.0",
        "isSuccessful": true,
        "installTime": "2023-05-01T10:05:00Z",
        "installMessage": "installed"
    },
    "createdAt": "2023-05-01T10:05:01Z"
}]}"#;

fn args(version: Option<&str>, status_type: StatusType) -> StatusArgs {
    StatusArgs {
        name: "mySolution".to_string(),
        solution_version: version.map(str::to_string),
        status_type,
        output: OutputFormat::Detail,
    }
}

#[tokio::test]
async fn test_install_status_queries_both_resources() {
    let client = RecordingClient::new()
        .reply("solutionRelease", RELEASE)
        .reply("solutionInstall", INSTALL);

    let row = status::run(&client, &tenant_context("acme"), &args(None, StatusType::Install))
        .await
        .unwrap();

    let requests = client.requests();
    assert_eq!(requests.len(), 2);
    assert!(requests.iter().all(|r| r.method == Method::GET));
    assert!(requests[0].path.starts_with("objstore/v1beta/objects/extensibility:solutionRelease?"));
    assert!(requests[1].path.starts_with("objstore/v1beta/objects/extensibility:solutionInstall?"));
    for request in &requests {
        assert_eq!(request.headers.get("layer-type").unwrap(), "TENANT");
        assert_eq!(request.headers.get("layer-id").unwrap(), "acme");
        assert!(request.body.is_none());
    }

    assert_eq!(
        row.headers(),
        vec![
            status::HEADER_NAME,
            status::HEADER_INSTALL_VERSION,
            status::HEADER_INSTALL_SUCCESSFUL,
            status::HEADER_INSTALL_TIME,
            status::HEADER_INSTALL_MESSAGE,
        ]
    );
    assert_eq!(row.value(status::HEADER_INSTALL_SUCCESSFUL), Some("true"));
    assert_eq!(row.value(status::HEADER_INSTALL_MESSAGE), Some("installed"));
}

#[tokio::test]
async fn test_versioned_status_uses_two_clause_filter() {
    let client = RecordingClient::new()
        .reply("solutionRelease", RELEASE)
        .reply("solutionInstall", INSTALL);

    let row = status::run(&client, &tenant_context("acme"), &args(Some("1.2.0"), StatusType::All))
        .await
        .unwrap();

    let expected_query = "?order=desc&filter=data.solutionName+eq+%22mySolution%22+and+data.solutionVersion+eq+%221.2.0%22&max=1";
    for request in client.requests() {
        assert!(request.path.ends_with(expected_query), "{}", request.path);
    }

    assert_eq!(row.fields().len(), 7);
    assert_eq!(row.value(status::HEADER_NAME), Some("mySolution"));
    assert_eq!(row.value(status::HEADER_UPLOAD_TIMESTAMP), Some("2023-05-01T10:00:00Z"));
    assert_eq!(row.value(status::HEADER_INSTALL_TIME), Some("2023-05-01T10:05:00Z"));
}

#[tokio::test]
async fn test_empty_results_are_not_errors() {
    let client = RecordingClient::new()
        .reply("solutionRelease", r#"{"items": []}"#)
        .reply("solutionInstall", "");

    let row = status::run(&client, &tenant_context("acme"), &args(None, StatusType::Upload))
        .await
        .unwrap();

    assert_eq!(row.value(status::HEADER_NAME), Some(""));
    assert_eq!(row.value(status::HEADER_UPLOAD_VERSION), Some(""));
    assert_eq!(row.value(status::HEADER_UPLOAD_TIMESTAMP), Some(""));
}

#[tokio::test]
async fn test_failure_on_either_query_is_fatal() {
    let client = RecordingClient::new()
        .reply("solutionRelease", RELEASE)
        .fail("solutionInstall", 503, "unavailable");

    let result = status::run(&client, &tenant_context("acme"), &args(None, StatusType::Upload)).await;

    assert!(matches!(result, Err(CliError::ApiError { status: 503, .. })));
}

#[tokio::test]
async fn test_malformed_response_is_an_error() {
    let client = RecordingClient::new().reply("solutionRelease", "<html>oops</html>");

    let result = status::run(&client, &tenant_context("acme"), &args(None, StatusType::All)).await;

    assert!(matches!(result, Err(CliError::JsonError(_))));
    assert_eq!(client.requests().len(), 1);
}

#[tokio::test]
async fn test_status_needs_a_tenant() {
    let client = RecordingClient::new();

    let err = status::run(&client, &tenant_context(""), &args(None, StatusType::All))
        .await
        .unwrap_err();

    assert!(matches!(err, CliError::ConfigError(_)));
    assert_eq!(err.to_string(), "Configuration error: context test has no tenant");
    assert!(!err.to_string().contains("--layer-id"));
    assert!(client.requests().is_empty());
}
