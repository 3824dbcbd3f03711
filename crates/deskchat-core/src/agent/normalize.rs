//! Response normalization.
//!
//! Maps the `response` field of a successful [`AgentReply`] to the text shown
//! in the agent's bubble plus the escalation flag. The mapping is total: any
//! payload shape yields non-empty display text.
//!
//! [`AgentReply`]: deskchat_types::agent::AgentReply

use deskchat_types::agent::{AgentPayload, StructuredPayload};
use serde_json::Value;

/// Shown when a successful reply carries no `response` at all.
pub const EMPTY_RESPONSE_TEXT: &str = "The support agent returned an empty response.";

/// Display-ready form of an agent payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedReply {
    pub text: String,
    pub escalation_suggested: bool,
    pub suggested_topics: Vec<String>,
}

impl NormalizedReply {
    fn plain(text: String) -> Self {
        Self {
            text,
            escalation_suggested: false,
            suggested_topics: Vec::new(),
        }
    }
}

/// Normalize a reply payload.
///
/// Text priority for objects: `agent_response`, then `message`, then
/// `response`; empty strings are skipped. With no usable field the whole
/// object is shown as compact JSON.
pub fn normalize(payload: &AgentPayload) -> NormalizedReply {
    match payload {
        AgentPayload::Text(text) => NormalizedReply::plain(text.clone()),
        AgentPayload::Structured(structured) => normalize_structured(structured),
        AgentPayload::Other(value) => NormalizedReply::plain(value.to_string()),
        AgentPayload::Empty => NormalizedReply::plain(EMPTY_RESPONSE_TEXT.to_string()),
    }
}

fn normalize_structured(payload: &StructuredPayload) -> NormalizedReply {
    let text = [&payload.agent_response, &payload.message, &payload.response]
        .into_iter()
        .flatten()
        .find(|text| !text.is_empty())
        .cloned()
        .unwrap_or_else(|| Value::Object(payload.raw().clone()).to_string());

    NormalizedReply {
        text,
        escalation_suggested: payload.escalation_suggested.unwrap_or(false),
        suggested_topics: payload.suggested_topics.clone(),
    }
}
