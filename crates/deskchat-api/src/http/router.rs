//! Axum router for the mock agent service.
//!
//! Middleware: CORS (any origin, so a browser widget can call it) and
//! request tracing.

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::http::handlers;
use crate::state::AppState;

/// Build the mock agent router.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/agent", post(handlers::agent::handle_agent))
        .route("/health", get(health_check))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// GET /health
async fn health_check() -> &'static str {
    "ok"
}

#[cfg(test)]
mod tests {
    use super::*;
    use deskchat_core::agent::client::AgentClient;
    use deskchat_core::chat::controller::ChatController;
    use deskchat_infra::agent::http::HttpAgentClient;
    use deskchat_types::config::WidgetConfig;

    async fn spawn_mock_agent() -> std::net::SocketAddr {
        let state = AppState {
            config: WidgetConfig::default(),
        };
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, build_router(state)).await.unwrap();
        });
        addr
    }

    #[tokio::test]
    async fn test_health_check() {
        let addr = spawn_mock_agent().await;
        let body = reqwest::get(format!("http://{addr}/health"))
            .await
            .unwrap()
            .text()
            .await
            .unwrap();
        assert_eq!(body, "ok");
    }

    #[tokio::test]
    async fn test_http_client_round_trip_against_mock_agent() {
        let addr = spawn_mock_agent().await;
        let config = WidgetConfig {
            endpoint: format!("http://{addr}/api/agent"),
            ..WidgetConfig::default()
        };
        let client = HttpAgentClient::from_config(&config).unwrap();
        assert!(client.endpoint().ends_with("/api/agent"));
        let mut controller = ChatController::new(client, &config);

        let reply = controller.submit("What pricing plans do you have?").await.unwrap();
        assert!(reply.content.contains("plans"));
        assert_eq!(reply.escalation_suggested, Some(false));
        assert_eq!(controller.transcript().len(), 2);
        assert!(!controller.is_pending());
    }

    #[tokio::test]
    async fn test_mock_agent_escalation_reaches_transcript() {
        let addr = spawn_mock_agent().await;
        let config = WidgetConfig {
            endpoint: format!("http://{addr}/api/agent"),
            ..WidgetConfig::default()
        };
        let mut controller =
            ChatController::new(HttpAgentClient::from_config(&config).unwrap(), &config);

        let reply = controller.submit("I want a refund").await.unwrap();
        assert!(reply.is_escalation());
    }
}
