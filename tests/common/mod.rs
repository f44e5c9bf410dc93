//! Common test utilities
//!
//! Fixtures for configuration and a fake OpenAI-compatible upstream.

use party_prompt_gateway::Config;
use party_prompt_gateway::config::UpstreamConfig;
use serde_json::{Value, json};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const TEST_API_KEY: &str = "sk-test-key";
pub const COMPLETIONS_PATH: &str = "/v1/chat/completions";

/// Upstream settings pointing at the fake server
pub fn upstream_config(server: &MockServer) -> UpstreamConfig {
    UpstreamConfig {
        base_url: server.uri(),
        api_key: TEST_API_KEY.to_string(),
        ..UpstreamConfig::default()
    }
}

/// Full gateway configuration pointing at the fake server
pub fn gateway_config(server: &MockServer, requests_per_minute: u32) -> Config {
    let mut config = Config::default();
    config.gateway.upstream = upstream_config(server);
    config.gateway.rate_limit.requests_per_minute = requests_per_minute;
    config.gateway.server.static_dir = None;
    config
}

/// A successful chat completion body carrying `content`
pub fn completion_body(content: &str) -> Value {
    json!({
        "id": "chatcmpl-test",
        "object": "chat.completion",
        "choices": [{
            "index": 0,
            "message": { "role": "assistant", "content": content },
            "finish_reason": "stop"
        }]
    })
}

/// Answer every completion call with `content`
pub async fn mount_completion(server: &MockServer, content: &str) {
    Mock::given(method("POST"))
        .and(path(COMPLETIONS_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion_body(content)))
        .mount(server)
        .await;
}
