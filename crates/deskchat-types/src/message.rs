//! Transcript message types for deskchat.
//!
//! A [`Message`] is one bubble in the chat thread. Messages are created by
//! the transcript controller when the user submits text or when the agent
//! call settles, and are never mutated afterwards.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use std::fmt;
use std::str::FromStr;

/// Who authored a message in the transcript.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    User,
    Agent,
}

impl fmt::Display for MessageRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MessageRole::User => write!(f, "user"),
            MessageRole::Agent => write!(f, "agent"),
        }
    }
}

impl FromStr for MessageRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "user" => Ok(MessageRole::User),
            "agent" => Ok(MessageRole::Agent),
            other => Err(format!("invalid message role: '{other}'")),
        }
    }
}

/// A single message in the chat transcript.
///
/// Ids are UUID v7, so two messages created within the same millisecond
/// still get distinct, time-ordered ids.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: Uuid,
    pub role: MessageRole,
    pub content: String,
    pub created_at: DateTime<Utc>,
    /// Set on agent replies only; `None` for user messages and error replies.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub escalation_suggested: Option<bool>,
    /// Follow-up topics the agent offered alongside its reply.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub suggested_topics: Vec<String>,
}

impl Message {
    /// Create a user message stamped with the current time.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            id: Uuid::now_v7(),
            role: MessageRole::User,
            content: content.into(),
            created_at: Utc::now(),
            escalation_suggested: None,
            suggested_topics: Vec::new(),
        }
    }

    /// Create an agent reply carrying the normalized escalation flag.
    pub fn agent(
        content: impl Into<String>,
        escalation_suggested: bool,
        suggested_topics: Vec<String>,
    ) -> Self {
        Self {
            id: Uuid::now_v7(),
            role: MessageRole::Agent,
            content: content.into(),
            created_at: Utc::now(),
            escalation_suggested: Some(escalation_suggested),
            suggested_topics,
        }
    }

    /// Create an agent-side error message (no escalation flag).
    pub fn agent_error(content: impl Into<String>) -> Self {
        Self {
            id: Uuid::now_v7(),
            role: MessageRole::Agent,
            content: content.into(),
            created_at: Utc::now(),
            escalation_suggested: None,
            suggested_topics: Vec::new(),
        }
    }

    /// Whether the escalation warning should be shown for this message.
    pub fn is_escalation(&self) -> bool {
        self.role == MessageRole::Agent && self.escalation_suggested == Some(true)
    }
}
