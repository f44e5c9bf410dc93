//! UpstreamClient over ReqwestTransport against a fake upstream

use crate::common::{
    COMPLETIONS_PATH, TEST_API_KEY, completion_body, mount_completion, upstream_config,
};
use party_prompt_gateway::config::UpstreamConfig;
use party_prompt_gateway::core::upstream::{FailureKind, ReqwestTransport, UpstreamClient};
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client(config: &UpstreamConfig) -> UpstreamClient {
    let transport = ReqwestTransport::new(Duration::from_secs(5)).expect("failed to build client");
    UpstreamClient::new(config, Arc::new(transport))
}

#[tokio::test]
async fn test_call_success() {
    let server = MockServer::start().await;
    mount_completion(&server, "  Do ten push-ups\n").await;

    let content = client(&upstream_config(&server))
        .call("Generate a dare task")
        .await
        .expect("call failed");

    assert_eq!(content, "Do ten push-ups");
}

#[tokio::test]
async fn test_request_shape() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(COMPLETIONS_PATH))
        .and(header("authorization", format!("Bearer {}", TEST_API_KEY).as_str()))
        .and(body_partial_json(json!({
            "model": "gpt-4.1",
            "messages": [{ "role": "user", "content": "Generate a truth question" }],
            "max_completion_tokens": 200
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion_body("ok")))
        .expect(1)
        .mount(&server)
        .await;

    let content = client(&upstream_config(&server))
        .call("Generate a truth question")
        .await
        .expect("request did not match");

    assert_eq!(content, "ok");
}

#[tokio::test]
async fn test_trailing_slash_in_base_url() {
    let server = MockServer::start().await;
    mount_completion(&server, "ok").await;

    let mut config = upstream_config(&server);
    config.base_url = format!("{}/", server.uri());

    assert!(client(&config).call("prompt").await.is_ok());
}

#[tokio::test]
async fn test_http_error_uses_error_message() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(COMPLETIONS_PATH))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "error": { "message": "Incorrect API key provided", "type": "invalid_request_error" }
        })))
        .mount(&server)
        .await;

    let failure = client(&upstream_config(&server))
        .call("prompt")
        .await
        .unwrap_err();

    assert_eq!(failure.kind, FailureKind::HttpError(401));
    assert_eq!(failure.message, "Incorrect API key provided");
}

#[tokio::test]
async fn test_http_error_plain_body_is_truncated() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(COMPLETIONS_PATH))
        .respond_with(ResponseTemplate::new(502).set_body_string("x".repeat(500)))
        .mount(&server)
        .await;

    let failure = client(&upstream_config(&server))
        .call("prompt")
        .await
        .unwrap_err();

    assert_eq!(failure.kind, FailureKind::HttpError(502));
    assert_eq!(failure.message.chars().count(), 200);
}

#[tokio::test]
async fn test_malformed_response() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(COMPLETIONS_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "choices": [] })))
        .mount(&server)
        .await;

    let failure = client(&upstream_config(&server))
        .call("prompt")
        .await
        .unwrap_err();

    assert_eq!(failure.kind, FailureKind::MalformedResponse);
}

#[tokio::test]
async fn test_slow_upstream_times_out_once() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(COMPLETIONS_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(completion_body("too late"))
                .set_delay(Duration::from_secs(2)),
        )
        .expect(1)
        .mount(&server)
        .await;

    let failure = client(&upstream_config(&server))
        .with_timeout(Duration::from_millis(200))
        .call("prompt")
        .await
        .unwrap_err();

    assert_eq!(failure.kind, FailureKind::Timeout);
}

#[tokio::test]
async fn test_reqwest_timeout_maps_to_timeout() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(COMPLETIONS_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(completion_body("too late"))
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&server)
        .await;

    let transport = ReqwestTransport::new(Duration::from_millis(200)).unwrap();
    let failure = UpstreamClient::new(&upstream_config(&server), Arc::new(transport))
        .call("prompt")
        .await
        .unwrap_err();

    assert_eq!(failure.kind, FailureKind::Timeout);
}

#[tokio::test]
async fn test_unreachable_upstream_is_connection_error() {
    let config = UpstreamConfig {
        base_url: "http://127.0.0.1:1".to_string(),
        api_key: TEST_API_KEY.to_string(),
        ..UpstreamConfig::default()
    };

    let failure = client(&config).call("prompt").await.unwrap_err();

    assert_eq!(failure.kind, FailureKind::ConnectionError);
    assert_eq!(failure.message, "network error");
}
