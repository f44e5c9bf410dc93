//! Upstream chat completion client
//!
//! Issues a single chat completion call and folds every way it can go wrong into a
//! [`FailureKind`]. Failed calls are returned as-is; retrying is up to the caller.

use super::transport::{ChatTransport, TransportError, TransportRequest, TransportResponse};
use super::types::{
    ChatCompletionRequest, ChatCompletionResponse, ChatMessage, ErrorEnvelope, MessageRole,
    UpstreamFailure, UpstreamOutcome,
};
use crate::config::UpstreamConfig;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Maximum number of characters of a raw error body surfaced to the client
const ERROR_BODY_LIMIT: usize = 200;

/// Client for the upstream generation service
pub struct UpstreamClient {
    base_url: String,
    api_key: String,
    model: String,
    timeout: Duration,
    max_completion_tokens: u32,
    temperature: f32,
    transport: Arc<dyn ChatTransport>,
}

impl UpstreamClient {
    /// Create a new client over the given transport
    pub fn new(config: &UpstreamConfig, transport: Arc<dyn ChatTransport>) -> Self {
        Self {
            base_url: config.base_url.trim().to_string(),
            api_key: config.api_key.trim().to_string(),
            model: config.model.clone(),
            timeout: Duration::from_secs(config.timeout),
            max_completion_tokens: config.max_completion_tokens,
            temperature: config.temperature,
            transport,
        }
    }

    /// Override the call timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Whether both the endpoint and the credential are set
    pub fn is_configured(&self) -> bool {
        !self.base_url.is_empty() && !self.api_key.is_empty()
    }

    /// Chat completion endpoint URL
    pub fn endpoint(&self) -> String {
        format!("{}/v1/chat/completions", self.base_url.trim_end_matches('/'))
    }

    /// Build the request body for a prompt
    pub fn request_body(&self, prompt: &str) -> ChatCompletionRequest {
        ChatCompletionRequest {
            model: self.model.clone(),
            messages: vec![ChatMessage {
                role: MessageRole::User,
                content: prompt.to_string(),
            }],
            max_completion_tokens: self.max_completion_tokens,
            temperature: self.temperature,
        }
    }

    /// Send the prompt upstream and classify the outcome
    pub async fn call(&self, prompt: &str) -> UpstreamOutcome {
        if !self.is_configured() {
            return Err(UpstreamFailure::config(
                "upstream base URL or API key is not set",
            ));
        }

        let request = TransportRequest {
            url: self.endpoint(),
            api_key: self.api_key.clone(),
            body: self.request_body(prompt),
        };

        info!(endpoint = %request.url, model = %self.model, "Calling upstream");

        let response = match tokio::time::timeout(self.timeout, self.transport.send(request)).await
        {
            Ok(Ok(response)) => response,
            Ok(Err(TransportError::Timeout)) | Err(_) => {
                warn!(timeout_secs = self.timeout.as_secs_f64(), "Upstream call timed out");
                return Err(UpstreamFailure::timeout());
            }
            Ok(Err(e)) => {
                warn!(error = %e, "Upstream transport failure");
                return Err(UpstreamFailure::connection());
            }
        };

        classify_response(response)
    }
}

/// Map a raw HTTP answer onto an outcome
pub(crate) fn classify_response(response: TransportResponse) -> UpstreamOutcome {
    debug!(status = response.status, "Classifying upstream response");

    if !response.is_success() {
        let message = extract_error_message(response.status, &response.body);
        warn!(status = response.status, message = %message, "Upstream returned an error status");
        return Err(UpstreamFailure::http(response.status, message));
    }

    let parsed: ChatCompletionResponse = serde_json::from_str(&response.body)
        .map_err(|e| UpstreamFailure::malformed(format!("Failed to parse response: {}", e)))?;

    let choice = parsed
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| UpstreamFailure::malformed("Response contained no choices"))?;

    Ok(choice.message.content.trim().to_string())
}

/// Best-effort error message: `error.message` from a JSON body, then the raw body, then the status
pub(crate) fn extract_error_message(status: u16, body: &str) -> String {
    if let Ok(envelope) = serde_json::from_str::<ErrorEnvelope>(body) {
        return envelope.error.message;
    }

    let trimmed = body.trim();
    if trimmed.is_empty() {
        return format!("HTTP {}", status);
    }

    trimmed.chars().take(ERROR_BODY_LIMIT).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::upstream::FailureKind;
    use crate::core::upstream::transport::MockChatTransport;
    use async_trait::async_trait;

    fn test_config() -> UpstreamConfig {
        UpstreamConfig {
            base_url: "https://llm.example.com/".to_string(),
            api_key: "sk-test".to_string(),
            ..UpstreamConfig::default()
        }
    }

    fn client_with(mock: MockChatTransport) -> UpstreamClient {
        UpstreamClient::new(&test_config(), Arc::new(mock))
    }

    fn ok_body(content: &str) -> String {
        serde_json::json!({
            "choices": [{ "message": { "role": "assistant", "content": content } }]
        })
        .to_string()
    }

    struct SlowTransport;

    #[async_trait]
    impl ChatTransport for SlowTransport {
        async fn send(
            &self,
            _request: TransportRequest,
        ) -> std::result::Result<TransportResponse, TransportError> {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Ok(TransportResponse::new(200, ok_body("too late")))
        }
    }

    #[tokio::test]
    async fn test_success_trims_content() {
        let mut mock = MockChatTransport::new();
        mock.expect_send()
            .times(1)
            .returning(|_| Ok(TransportResponse::new(200, ok_body("  Sing a song!\n"))));

        let outcome = client_with(mock).call("prompt").await;
        assert_eq!(outcome, Ok("Sing a song!".to_string()));
    }

    #[tokio::test]
    async fn test_request_shape() {
        let mut mock = MockChatTransport::new();
        mock.expect_send()
            .withf(|req| {
                req.url == "https://llm.example.com/v1/chat/completions"
                    && req.api_key == "sk-test"
                    && req.body.model == "gpt-4.1"
                    && req.body.max_completion_tokens == 200
                    && (req.body.temperature - 0.8).abs() < f32::EPSILON
                    && req.body.messages.len() == 1
                    && req.body.messages[0].role == MessageRole::User
                    && req.body.messages[0].content == "the prompt"
            })
            .times(1)
            .returning(|_| Ok(TransportResponse::new(200, ok_body("ok"))));

        assert!(client_with(mock).call("the prompt").await.is_ok());
    }

    #[tokio::test]
    async fn test_missing_config_fails_before_io() {
        let mut mock = MockChatTransport::new();
        mock.expect_send().times(0);

        let config = UpstreamConfig {
            api_key: "   ".to_string(),
            ..test_config()
        };
        let client = UpstreamClient::new(&config, Arc::new(mock));

        assert!(!client.is_configured());
        let failure = client.call("prompt").await.unwrap_err();
        assert_eq!(failure.kind, FailureKind::ConfigError);
    }

    #[tokio::test]
    async fn test_transport_timeout() {
        let mut mock = MockChatTransport::new();
        mock.expect_send()
            .times(1)
            .returning(|_| Err(TransportError::Timeout));

        let failure = client_with(mock).call("prompt").await.unwrap_err();
        assert_eq!(failure, UpstreamFailure::timeout());
        assert_eq!(failure.message, "request timed out");
    }

    #[tokio::test]
    async fn test_hard_timeout_bounds_slow_transport() {
        let client = UpstreamClient::new(&test_config(), Arc::new(SlowTransport))
            .with_timeout(Duration::from_millis(50));

        let started = std::time::Instant::now();
        let failure = client.call("prompt").await.unwrap_err();

        assert_eq!(failure.kind, FailureKind::Timeout);
        assert!(started.elapsed() < Duration::from_secs(2));
    }

    #[tokio::test]
    async fn test_connection_error() {
        let mut mock = MockChatTransport::new();
        mock.expect_send()
            .times(1)
            .returning(|_| Err(TransportError::Connect("refused".to_string())));

        let failure = client_with(mock).call("prompt").await.unwrap_err();
        assert_eq!(failure.kind, FailureKind::ConnectionError);
        assert_eq!(failure.message, "network error");
    }

    #[tokio::test]
    async fn test_http_error_uses_error_message() {
        let mut mock = MockChatTransport::new();
        mock.expect_send().times(1).returning(|_| {
            Ok(TransportResponse::new(
                401,
                r#"{"error":{"message":"Invalid API key","type":"auth"}}"#,
            ))
        });

        let failure = client_with(mock).call("prompt").await.unwrap_err();
        assert_eq!(failure.kind, FailureKind::HttpError(401));
        assert_eq!(failure.message, "Invalid API key");
    }

    #[tokio::test]
    async fn test_malformed_success_body() {
        let mut mock = MockChatTransport::new();
        mock.expect_send()
            .times(1)
            .returning(|_| Ok(TransportResponse::new(200, r#"{"choices":[{"message":{}}]}"#)));

        let failure = client_with(mock).call("prompt").await.unwrap_err();
        assert_eq!(failure.kind, FailureKind::MalformedResponse);
        assert!(failure.message.contains("content"));
    }

    #[test]
    fn test_empty_choices_is_malformed() {
        let failure =
            classify_response(TransportResponse::new(200, r#"{"choices":[]}"#)).unwrap_err();
        assert_eq!(failure.kind, FailureKind::MalformedResponse);
    }

    #[test]
    fn test_error_message_fallbacks() {
        let long_body = "x".repeat(500);
        assert_eq!(extract_error_message(502, &long_body).chars().count(), 200);
        assert_eq!(extract_error_message(503, ""), "HTTP 503");
        assert_eq!(extract_error_message(500, "  \n"), "HTTP 500");
        // `error` present but not an object falls back to the raw body
        assert_eq!(
            extract_error_message(400, r#"{"error":"bad"}"#),
            r#"{"error":"bad"}"#
        );
    }

    #[test]
    fn test_error_message_truncation_is_char_safe() {
        let body = "错".repeat(300);
        let message = extract_error_message(500, &body);
        assert_eq!(message.chars().count(), 200);
    }

    #[test]
    fn test_endpoint_without_trailing_slash() {
        let config = UpstreamConfig {
            base_url: "http://localhost:3000".to_string(),
            ..test_config()
        };
        let client = UpstreamClient::new(&config, Arc::new(MockChatTransport::new()));
        assert_eq!(
            client.endpoint(),
            "http://localhost:3000/v1/chat/completions"
        );
    }
}
