//! HttpAgentClient -- concrete [`AgentClient`] over HTTP.
//!
//! Posts the request envelope as JSON to the configured endpoint and decodes
//! the reply envelope. The body is decoded regardless of the HTTP status,
//! since the agent service reports application errors as
//! `{ "success": false, "error": ... }` with a non-2xx status. A body that
//! does not decode is a transport failure.

use std::time::Duration;

use reqwest::header::CONTENT_TYPE;
use tracing::debug;

use deskchat_core::agent::client::AgentClient;
use deskchat_types::agent::{AgentReply, AgentRequest};
use deskchat_types::config::WidgetConfig;
use deskchat_types::error::AgentError;

/// Agent service client over HTTP.
pub struct HttpAgentClient {
    client: reqwest::Client,
    endpoint: String,
    timeout: Option<Duration>,
}

impl HttpAgentClient {
    /// Create a client for `endpoint`.
    ///
    /// Without a `timeout` a hung request waits until the transport itself
    /// gives up.
    pub fn new(endpoint: impl Into<String>, timeout: Option<Duration>) -> Result<Self, AgentError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| AgentError::Transport(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
            timeout,
        })
    }

    /// Create a client from the widget configuration.
    pub fn from_config(config: &WidgetConfig) -> Result<Self, AgentError> {
        Self::new(
            config.endpoint.clone(),
            config.request_timeout_secs.map(Duration::from_secs),
        )
    }

    fn transport_error(&self, err: reqwest::Error) -> AgentError {
        match self.timeout {
            Some(timeout) if err.is_timeout() => AgentError::Timeout(timeout),
            _ => AgentError::Transport(format!("HTTP request failed: {err}")),
        }
    }
}

impl AgentClient for HttpAgentClient {
    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn send(&self, request: &AgentRequest) -> Result<AgentReply, AgentError> {
        let response = self
            .client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "application/json")
            .json(request)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        let body = response.bytes().await.map_err(|e| self.transport_error(e))?;

        let reply: AgentReply = serde_json::from_slice(&body)
            .map_err(|e| AgentError::Decode(format!("HTTP {status}: {e}")))?;

        debug!(
            endpoint = %self.endpoint,
            status = status.as_u16(),
            success = reply.success,
            "Agent reply received"
        );
        Ok(reply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use axum::routing::post;
    use axum::{Json, Router};
    use deskchat_types::agent::AgentPayload;
    use serde_json::json;

    async fn spawn_agent(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{addr}/api/agent")
    }

    fn request(message: &str) -> AgentRequest {
        AgentRequest {
            message: message.to_string(),
            agent_id: "agent-1".to_string(),
            user_id: "user-1".to_string(),
            session_id: "session-1".to_string(),
        }
    }

    #[tokio::test]
    async fn test_send_decodes_structured_reply() {
        let router = Router::new().route(
            "/api/agent",
            post(|Json(req): Json<AgentRequest>| async move {
                Json(json!({
                    "success": true,
                    "response": {
                        "agent_response": format!("echo: {} ({})", req.message, req.session_id),
                        "escalation_suggested": false
                    }
                }))
            }),
        );
        let endpoint = spawn_agent(router).await;
        let client = HttpAgentClient::new(endpoint, None).unwrap();

        let reply = client.send(&request("hello")).await.unwrap();
        assert!(reply.success);
        let AgentPayload::Structured(payload) = reply.response else {
            panic!("expected structured payload");
        };
        assert_eq!(
            payload.agent_response.as_deref(),
            Some("echo: hello (session-1)")
        );
    }

    #[tokio::test]
    async fn test_send_decodes_failure_reply_on_error_status() {
        let router = Router::new().route(
            "/api/agent",
            post(|| async {
                (
                    StatusCode::BAD_REQUEST,
                    Json(json!({"success": false, "error": "bad agent"})),
                )
            }),
        );
        let endpoint = spawn_agent(router).await;
        let client = HttpAgentClient::new(endpoint, None).unwrap();

        let reply = client.send(&request("hello")).await.unwrap();
        assert!(!reply.success);
        assert_eq!(reply.error.as_deref(), Some("bad agent"));
    }

    #[tokio::test]
    async fn test_send_decodes_loosely_typed_envelope() {
        let router = Router::new().route(
            "/api/agent",
            post(|| async {
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({"success": false, "error": {"detail": "x"}})),
                )
            }),
        );
        let endpoint = spawn_agent(router).await;
        let client = HttpAgentClient::new(endpoint, None).unwrap();

        let reply = client.send(&request("hello")).await.unwrap();
        assert!(!reply.success);
        assert_eq!(reply.error.as_deref(), Some(r#"{"detail":"x"}"#));
    }

    #[tokio::test]
    async fn test_send_non_object_json_is_decode_error() {
        let router = Router::new().route(
            "/api/agent",
            post(|| async { Json(json!(["not", "an", "envelope"])) }),
        );
        let endpoint = spawn_agent(router).await;
        let client = HttpAgentClient::new(endpoint, None).unwrap();

        let err = client.send(&request("hello")).await.unwrap_err();
        assert!(matches!(err, AgentError::Decode(ref msg) if msg.contains("expected a JSON object")));
    }

    #[tokio::test]
    async fn test_send_non_json_body_is_decode_error() {
        let router = Router::new().route(
            "/api/agent",
            post(|| async { (StatusCode::BAD_GATEWAY, "upstream exploded") }),
        );
        let endpoint = spawn_agent(router).await;
        let client = HttpAgentClient::new(endpoint, None).unwrap();

        let err = client.send(&request("hello")).await.unwrap_err();
        assert!(matches!(err, AgentError::Decode(ref msg) if msg.contains("502")));
    }

    #[tokio::test]
    async fn test_send_connection_refused_is_transport_error() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = HttpAgentClient::new(format!("http://{addr}/api/agent"), None).unwrap();
        let err = client.send(&request("hello")).await.unwrap_err();
        assert!(matches!(err, AgentError::Transport(_)));
    }

    #[tokio::test]
    async fn test_send_times_out_when_configured() {
        let router = Router::new().route(
            "/api/agent",
            post(|| async {
                tokio::time::sleep(Duration::from_secs(5)).await;
                Json(json!({"success": true, "response": "late"}))
            }),
        );
        let endpoint = spawn_agent(router).await;
        let client = HttpAgentClient::new(endpoint, Some(Duration::from_millis(200))).unwrap();

        let err = client.send(&request("hello")).await.unwrap_err();
        assert!(matches!(err, AgentError::Timeout(t) if t == Duration::from_millis(200)));
    }

    #[test]
    fn test_from_config_uses_endpoint() {
        let config = WidgetConfig {
            endpoint: "http://agent.internal/api/agent".to_string(),
            request_timeout_secs: Some(15),
            ..WidgetConfig::default()
        };
        let client = HttpAgentClient::from_config(&config).unwrap();
        assert_eq!(client.endpoint(), "http://agent.internal/api/agent");
        assert_eq!(client.timeout, Some(Duration::from_secs(15)));
    }
}
