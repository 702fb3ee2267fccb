//! Integration tests for the HTTP client retry and error behavior.
//!
//! These tests run against a local mock server and verify attempt
//! counts, error classification, and payload shape enforcement.

use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use dixa_api::{ApiKey, BaseUrl, DixaClient, DixaConfig, DixaError, Expect};

/// Creates a client pointed at the mock server with a near-zero retry
/// delay so retry tests finish quickly.
fn create_test_client(server: &MockServer, max_retries: u32) -> DixaClient {
    let config = DixaConfig::builder()
        .api_key(ApiKey::new("test-api-key").unwrap())
        .base_url(BaseUrl::new(server.uri()).unwrap())
        .max_retries(max_retries)
        .retry_delay(Duration::from_millis(1))
        .build()
        .unwrap();
    DixaClient::new(&config).unwrap()
}

async fn request_count(server: &MockServer) -> usize {
    server.received_requests().await.unwrap().len()
}

#[tokio::test]
async fn test_success_on_first_attempt_sends_one_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/agents/agent-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"id": "agent-1", "displayName": "Sam"}
        })))
        .mount(&server)
        .await;

    let client = create_test_client(&server, 3);
    let agent = client.agents().get("agent-1").await.unwrap();

    assert_eq!(agent.id, "agent-1");
    assert_eq!(request_count(&server).await, 1);
}

#[tokio::test]
async fn test_requests_carry_auth_and_accept_headers() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/agents/agent-1"))
        .and(header("Authorization", "test-api-key"))
        .and(header("Accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"id": "agent-1"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server, 0);
    client.agents().get("agent-1").await.unwrap();
}

#[tokio::test]
async fn test_rate_limited_requests_retry_until_success() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/agents/agent-1"))
        .respond_with(ResponseTemplate::new(429))
        .up_to_n_times(2)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/agents/agent-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"id": "agent-1"}
        })))
        .mount(&server)
        .await;

    let client = create_test_client(&server, 3);
    let agent = client.agents().get("agent-1").await.unwrap();

    assert_eq!(agent.id, "agent-1");
    assert_eq!(request_count(&server).await, 3);
}

#[tokio::test]
async fn test_server_errors_retry_until_success() {
    for code in [500_u16, 502, 503] {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/queues/queue-1"))
            .respond_with(ResponseTemplate::new(code))
            .up_to_n_times(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/v1/queues/queue-1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": {"id": "queue-1", "name": "Support"}
            })))
            .mount(&server)
            .await;

        let client = create_test_client(&server, 3);
        let queue = client.queues().get("queue-1").await.unwrap();

        assert_eq!(queue.name, "Support");
        assert_eq!(request_count(&server).await, 2, "status {code}");
    }
}

#[tokio::test]
async fn test_exhausted_budget_reports_tries_and_last_outcome() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/agents/agent-1"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let client = create_test_client(&server, 2);
    let error = client.agents().get("agent-1").await.unwrap_err();

    match error {
        DixaError::ExhaustedRetries(exhausted) => {
            assert_eq!(exhausted.tries, 3);
            assert_eq!(exhausted.last.status(), Some(503));
        }
        other => panic!("expected ExhaustedRetries, got {other:?}"),
    }
    assert_eq!(request_count(&server).await, 3);
}

#[tokio::test]
async fn test_zero_retry_budget_fails_after_one_attempt() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/agents/agent-1"))
        .respond_with(ResponseTemplate::new(429))
        .mount(&server)
        .await;

    let client = create_test_client(&server, 0);
    let error = client.agents().get("agent-1").await.unwrap_err();

    match error {
        DixaError::ExhaustedRetries(exhausted) => {
            assert_eq!(exhausted.tries, 1);
            assert_eq!(exhausted.last.status(), Some(429));
        }
        other => panic!("expected ExhaustedRetries, got {other:?}"),
    }
    assert_eq!(request_count(&server).await, 1);
}

#[tokio::test]
async fn test_client_errors_fail_immediately_without_retry() {
    for code in [400_u16, 401, 403, 404] {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/agents/missing"))
            .respond_with(
                ResponseTemplate::new(code).set_body_json(json!({"message": "nope"})),
            )
            .mount(&server)
            .await;

        let client = create_test_client(&server, 3);
        let error = client.agents().get("missing").await.unwrap_err();

        match error {
            DixaError::Api(api) => assert_eq!(api.status, code),
            other => panic!("expected Api for status {code}, got {other:?}"),
        }
        assert_eq!(request_count(&server).await, 1, "status {code}");
    }
}

#[tokio::test]
async fn test_object_expected_but_array_returned_is_shape_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/agents/agent-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{"id": "agent-1"}]
        })))
        .mount(&server)
        .await;

    let client = create_test_client(&server, 0);
    let error = client.agents().get("agent-1").await.unwrap_err();

    match error {
        DixaError::Shape(shape) => {
            assert_eq!(shape.expected, Expect::Object);
            assert_eq!(shape.actual, "array");
        }
        other => panic!("expected Shape, got {other:?}"),
    }
}

#[tokio::test]
async fn test_array_expected_but_object_returned_is_shape_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/tags"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"id": "tag-1"}
        })))
        .mount(&server)
        .await;

    let client = create_test_client(&server, 0);
    let error = client.tags().list().await.unwrap_err();

    assert!(matches!(error, DixaError::Shape(_)));
}

#[tokio::test]
async fn test_shape_errors_are_not_retried() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/agents/agent-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
        .mount(&server)
        .await;

    let client = create_test_client(&server, 3);
    let error = client.agents().get("agent-1").await.unwrap_err();

    assert!(matches!(error, DixaError::Shape(_)));
    assert_eq!(request_count(&server).await, 1);
}

#[tokio::test]
async fn test_envelope_is_unwrapped_and_bare_payloads_pass_through() {
    let server = MockServer::start().await;
    // No envelope at all; the payload is used as-is.
    Mock::given(method("GET"))
        .and(path("/v1/agents/agent-1"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"id": "agent-1"})),
        )
        .mount(&server)
        .await;

    let client = create_test_client(&server, 0);
    let agent = client.agents().get("agent-1").await.unwrap();

    assert_eq!(agent.id, "agent-1");
}

#[tokio::test]
async fn test_query_parameters_are_forwarded() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/endusers"))
        .and(query_param("email", "jo@example.com"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{"id": "user-1", "email": "jo@example.com"}],
            "meta": {"next": null}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server, 0);
    let filter = dixa_api::resources::EndUserListFilter {
        email: Some("jo@example.com".to_string()),
        ..Default::default()
    };
    let users = client.end_users().list(filter).await.unwrap();

    assert_eq!(users.len(), 1);
}

#[tokio::test]
async fn test_non_json_error_body_is_preserved_as_raw_text() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/agents/agent-1"))
        .respond_with(ResponseTemplate::new(400).set_body_string("Bad Request"))
        .mount(&server)
        .await;

    let client = create_test_client(&server, 0);
    let error = client.agents().get("agent-1").await.unwrap_err();

    match error {
        DixaError::Api(api) => {
            assert_eq!(api.status, 400);
            assert_eq!(api.body["raw_body"], "Bad Request");
        }
        other => panic!("expected Api, got {other:?}"),
    }
}
