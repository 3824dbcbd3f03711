//! Wire types for the remote agent service (`POST /api/agent`).
//!
//! The request body is a flat JSON object. The reply is a loosely-typed
//! envelope: `{ success, response?, error? }`, where `response` is either a
//! plain string or an object whose message-bearing field name varies between
//! agent versions. [`AgentPayload`] turns that shape into a tagged union at
//! decode time so callers never probe raw JSON.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Body of one outbound agent call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentRequest {
    pub message: String,
    pub agent_id: String,
    pub user_id: String,
    pub session_id: String,
}

/// Reply envelope returned by the agent service.
///
/// Decoded leniently from any JSON object: `success` is true only for a JSON
/// `true`; a string `error` is kept as is and any other non-null `error` is
/// kept as its compact JSON. Only a body that is not an object fails to
/// decode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Value", into = "Value")]
pub struct AgentReply {
    pub success: bool,
    pub response: AgentPayload,
    pub error: Option<String>,
}

impl TryFrom<Value> for AgentReply {
    type Error = String;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        let mut envelope = match value {
            Value::Object(map) => map,
            other => return Err(format!("expected a JSON object, found {}", json_kind(&other))),
        };

        let success = matches!(envelope.get("success"), Some(Value::Bool(true)));
        let response = envelope
            .remove("response")
            .map(AgentPayload::from)
            .unwrap_or_default();
        let error = match envelope.remove("error") {
            None | Some(Value::Null) => None,
            Some(Value::String(text)) => Some(text),
            Some(other) => Some(other.to_string()),
        };

        Ok(Self {
            success,
            response,
            error,
        })
    }
}

impl From<AgentReply> for Value {
    fn from(reply: AgentReply) -> Self {
        let mut envelope = Map::new();
        envelope.insert("success".to_string(), Value::Bool(reply.success));
        if !reply.response.is_empty() {
            envelope.insert("response".to_string(), reply.response.into());
        }
        if let Some(error) = reply.error {
            envelope.insert("error".to_string(), Value::String(error));
        }
        Value::Object(envelope)
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

impl AgentReply {
    /// A successful reply carrying `payload`.
    pub fn ok(payload: impl Into<AgentPayload>) -> Self {
        Self {
            success: true,
            response: payload.into(),
            error: None,
        }
    }

    /// An application-level failure carrying the server error text.
    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            response: AgentPayload::Empty,
            error: Some(error.into()),
        }
    }
}

/// The `response` field of an [`AgentReply`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "Value", into = "Value")]
pub enum AgentPayload {
    /// Field absent or `null`.
    #[default]
    Empty,
    /// A plain display string.
    Text(String),
    /// An object with (possibly) one of the known message-bearing fields.
    Structured(StructuredPayload),
    /// Any other JSON value (number, boolean, array).
    Other(Value),
}

impl AgentPayload {
    pub fn is_empty(&self) -> bool {
        matches!(self, AgentPayload::Empty)
    }
}

impl From<Value> for AgentPayload {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => AgentPayload::Empty,
            Value::String(text) => AgentPayload::Text(text),
            Value::Object(map) => AgentPayload::Structured(StructuredPayload::from_object(map)),
            other => AgentPayload::Other(other),
        }
    }
}

impl From<AgentPayload> for Value {
    fn from(payload: AgentPayload) -> Self {
        match payload {
            AgentPayload::Empty => Value::Null,
            AgentPayload::Text(text) => Value::String(text),
            AgentPayload::Structured(structured) => Value::Object(structured.into_raw()),
            AgentPayload::Other(value) => value,
        }
    }
}

impl From<&str> for AgentPayload {
    fn from(text: &str) -> Self {
        AgentPayload::Text(text.to_string())
    }
}

impl From<String> for AgentPayload {
    fn from(text: String) -> Self {
        AgentPayload::Text(text)
    }
}

/// Object-shaped agent response.
///
/// Known fields are extracted with their expected types; a field holding a
/// value of the wrong type is treated as absent. The original object is kept
/// so it can be shown verbatim when no text field is usable.
#[derive(Debug, Clone, PartialEq)]
pub struct StructuredPayload {
    pub agent_response: Option<String>,
    pub message: Option<String>,
    pub response: Option<String>,
    pub escalation_suggested: Option<bool>,
    pub suggested_topics: Vec<String>,
    raw: Map<String, Value>,
}

impl StructuredPayload {
    /// Extract the known fields from a JSON object.
    pub fn from_object(raw: Map<String, Value>) -> Self {
        let text = |key: &str| raw.get(key).and_then(Value::as_str).map(str::to_string);

        let suggested_topics = raw
            .get("suggested_topics")
            .and_then(Value::as_array)
            .map(|topics| {
                topics
                    .iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        Self {
            agent_response: text("agent_response"),
            message: text("message"),
            response: text("response"),
            escalation_suggested: raw.get("escalation_suggested").and_then(Value::as_bool),
            suggested_topics,
            raw,
        }
    }

    /// The object exactly as received.
    pub fn raw(&self) -> &Map<String, Value> {
        &self.raw
    }

    pub fn into_raw(self) -> Map<String, Value> {
        self.raw
    }
}
