//! Mock agent endpoint.
//!
//! POST /api/agent - Answer a chat message with a canned structured reply.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde_json::json;
use tracing::info;

use deskchat_types::agent::{AgentPayload, AgentReply};

use crate::state::AppState;

/// Words that make the mock agent suggest a human hand-off.
const ESCALATION_KEYWORDS: &[&str] = &["human", "refund", "complaint"];

/// Request body accepted by the mock agent.
///
/// Every field is optional so a missing `message` gets the service's own
/// error reply instead of an extractor rejection.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct MockAgentRequest {
    pub message: String,
    pub agent_id: String,
    pub user_id: String,
    pub session_id: String,
}

/// POST /api/agent
pub async fn handle_agent(
    State(state): State<AppState>,
    Json(request): Json<MockAgentRequest>,
) -> (StatusCode, Json<AgentReply>) {
    let message = request.message.trim();
    if message.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(AgentReply::failed("message is required")),
        );
    }

    let reply = canned_reply(message, &state.config.company_name);
    info!(
        session_id = %request.session_id,
        agent_id = %request.agent_id,
        escalation = reply.escalation,
        "Mock agent answered"
    );

    let payload = AgentPayload::from(json!({
        "agent_response": reply.text,
        "escalation_suggested": reply.escalation,
        "suggested_topics": reply.topics,
    }));
    (StatusCode::OK, Json(AgentReply::ok(payload)))
}

struct CannedReply {
    text: String,
    escalation: bool,
    topics: Vec<&'static str>,
}

fn canned_reply(message: &str, company: &str) -> CannedReply {
    let lower = message.to_lowercase();

    if mentions_any(&lower, ESCALATION_KEYWORDS) {
        return CannedReply {
            text: format!(
                "I'm sorry about the trouble. I've flagged this conversation so a member \
                 of the {company} support team can follow up with you directly."
            ),
            escalation: true,
            topics: vec!["Account Help"],
        };
    }

    let (text, topics) = if mentions_any(&lower, &["pricing", "price", "plan", "cost"]) {
        (
            format!(
                "{company} offers three plans: **Starter**, **Team**, and **Enterprise**. \
                 Every plan includes a 14-day free trial."
            ),
            vec!["Features Overview", "Billing Questions"],
        )
    } else if mentions_any(&lower, &["feature", "capabilit"]) {
        (
            format!(
                "{company} includes shared inboxes, automations, and reporting. \
                 Enterprise adds SSO and audit logs."
            ),
            vec!["Pricing Plans"],
        )
    } else if mentions_any(&lower, &["account", "password", "login", "sign in"]) {
        (
            "You can reset your password from the sign-in page. Account settings \
             live under **Profile > Settings**."
                .to_string(),
            vec!["Billing Questions"],
        )
    } else if mentions_any(&lower, &["billing", "invoice", "payment", "charge"]) {
        (
            "Invoices are available under **Billing > History**. Payments are \
             charged at the start of each billing cycle."
                .to_string(),
            vec!["Pricing Plans", "Account Help"],
        )
    } else {
        (
            format!("Thanks for reaching out to {company}! You asked: \"{message}\". How else can I help?"),
            Vec::new(),
        )
    };

    CannedReply {
        text,
        escalation: false,
        topics,
    }
}

fn mentions_any(text: &str, words: &[&str]) -> bool {
    words.iter().any(|w| text.contains(w))
}
