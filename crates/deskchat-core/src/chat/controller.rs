//! Transcript controller for a chat session.
//!
//! The controller is a two-state machine: `idle` and `pending`. An accepted
//! submission appends the user's message, moves to `pending`, and issues one
//! agent call. When the call settles -- successfully, with an application
//! error, or with a transport failure -- exactly one agent message is
//! appended and the controller returns to `idle`. There is no retry and no
//! cancellation.

use deskchat_types::agent::{AgentReply, AgentRequest};
use deskchat_types::config::WidgetConfig;
use deskchat_types::error::AgentError;
use deskchat_types::message::Message;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::agent::client::AgentClient;
use crate::agent::normalize::normalize;
use crate::chat::session::SessionIdentity;
use crate::chat::transcript::Transcript;

/// Maximum number of characters the input buffer holds.
pub const MAX_INPUT_CHARS: usize = 500;

/// Agent message appended when the agent service could not be reached.
pub const CONNECTION_ERROR_TEXT: &str =
    "Sorry, I encountered an error connecting to the service. Please try again.";

/// Used when a failed reply carries no error text.
pub const FALLBACK_ERROR_DETAIL: &str = "Unable to process your request";

/// One accepted submission whose agent call has not settled yet.
#[derive(Debug)]
pub struct PendingTurn {
    user_message_id: Uuid,
    request: AgentRequest,
}

impl PendingTurn {
    /// The request to send to the agent service.
    pub fn request(&self) -> &AgentRequest {
        &self.request
    }

    /// Id of the user message that opened this turn.
    pub fn user_message_id(&self) -> Uuid {
        self.user_message_id
    }
}

/// Owns the transcript, input buffer, and pending state of one session.
pub struct ChatController<C: AgentClient> {
    client: C,
    session: SessionIdentity,
    agent_id: String,
    quick_reply_topics: Vec<String>,
    transcript: Transcript,
    input: String,
    /// User message id of the outstanding turn, if any.
    pending: Option<Uuid>,
}

impl<C: AgentClient> ChatController<C> {
    /// Start a new session against `client`.
    pub fn new(client: C, config: &WidgetConfig) -> Self {
        let session = SessionIdentity::start();
        info!(
            session_id = %session.session_id,
            endpoint = client.endpoint(),
            agent_id = %config.agent_id,
            "Chat session started"
        );

        Self {
            client,
            session,
            agent_id: config.agent_id.clone(),
            quick_reply_topics: config.quick_reply_topics.clone(),
            transcript: Transcript::new(),
            input: String::new(),
            pending: None,
        }
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    pub fn session(&self) -> &SessionIdentity {
        &self.session
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// Whether an agent call is outstanding.
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Current contents of the input buffer.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Replace the input buffer, truncated to [`MAX_INPUT_CHARS`].
    pub fn set_input(&mut self, text: &str) {
        self.input = text.chars().take(MAX_INPUT_CHARS).collect();
    }

    /// Quick-reply topics to offer right now.
    ///
    /// Topics are only offered on an empty transcript while idle.
    pub fn quick_reply_topics(&self) -> &[String] {
        if self.transcript.is_empty() && !self.is_pending() {
            &self.quick_reply_topics
        } else {
            &[]
        }
    }

    /// Accept a submission and open a turn.
    ///
    /// Returns `None` (and changes nothing) when the trimmed text is empty or
    /// a turn is already pending. Otherwise the user message is appended, the
    /// input buffer is cleared, and the controller becomes pending.
    pub fn begin(&mut self, text: &str) -> Option<PendingTurn> {
        let text = text.trim();
        if text.is_empty() {
            debug!("Ignoring empty submission");
            return None;
        }
        if let Some(outstanding) = self.pending {
            debug!(outstanding = %outstanding, "Submission rejected while a request is pending");
            return None;
        }

        let message = Message::user(text);
        let user_message_id = message.id;
        let request = AgentRequest {
            message: text.to_string(),
            agent_id: self.agent_id.clone(),
            user_id: self.session.user_id.clone(),
            session_id: self.session.session_id.clone(),
        };

        self.transcript.push(message);
        self.input.clear();
        self.pending = Some(user_message_id);

        info!(
            session_id = %self.session.session_id,
            message_id = %user_message_id,
            "User message submitted"
        );
        debug!(content = %text, "User message content");

        Some(PendingTurn {
            user_message_id,
            request,
        })
    }

    /// Close a turn with the outcome of its agent call.
    ///
    /// Appends exactly one agent message and clears the pending state. A
    /// turn that is not the outstanding one is ignored and `None` returned.
    pub fn settle(
        &mut self,
        turn: PendingTurn,
        outcome: Result<AgentReply, AgentError>,
    ) -> Option<&Message> {
        if self.pending != Some(turn.user_message_id) {
            warn!(
                message_id = %turn.user_message_id,
                "Ignoring settlement for a turn that is not pending"
            );
            return None;
        }

        let message = reply_message(outcome);
        info!(
            session_id = %self.session.session_id,
            message_id = %message.id,
            escalation = message.is_escalation(),
            "Agent message appended"
        );

        self.transcript.push(message);
        self.pending = None;
        self.transcript.last()
    }

    /// Open a turn from the current input buffer.
    pub fn begin_input(&mut self) -> Option<PendingTurn> {
        let text = self.input.clone();
        self.begin(&text)
    }

    /// Open a turn from a quick-reply topic.
    ///
    /// Quick replies are only accepted while the transcript is empty.
    pub fn begin_quick_reply(&mut self, topic: &str) -> Option<PendingTurn> {
        if !self.transcript.is_empty() {
            debug!(topic, "Quick reply ignored on a non-empty transcript");
            return None;
        }
        self.begin(topic)
    }

    /// Issue the agent call for `turn` and settle it with the outcome.
    pub async fn dispatch(&mut self, turn: PendingTurn) -> Option<&Message> {
        let outcome = self.client.send(turn.request()).await;
        self.settle(turn, outcome)
    }

    /// Submit `text` and wait for the agent's reply.
    ///
    /// Returns the appended agent message, or `None` if the submission was
    /// rejected.
    pub async fn submit(&mut self, text: &str) -> Option<&Message> {
        let turn = self.begin(text)?;
        self.dispatch(turn).await
    }

    /// Submit the current input buffer.
    pub async fn send_input(&mut self) -> Option<&Message> {
        let turn = self.begin_input()?;
        self.dispatch(turn).await
    }

    /// Submit a quick-reply topic.
    pub async fn quick_reply(&mut self, topic: &str) -> Option<&Message> {
        let turn = self.begin_quick_reply(topic)?;
        self.dispatch(turn).await
    }
}

/// Map a settled agent call to the agent message shown for it.
fn reply_message(outcome: Result<AgentReply, AgentError>) -> Message {
    match outcome {
        Err(err) => {
            info!(error = %err, outcome = "transport_error", "Agent call failed");
            Message::agent_error(CONNECTION_ERROR_TEXT)
        }
        Ok(reply) if !reply.success => {
            let detail = reply
                .error
                .as_deref()
                .filter(|detail| !detail.is_empty())
                .unwrap_or(FALLBACK_ERROR_DETAIL);
            info!(error = detail, outcome = "agent_error", "Agent reported a failure");
            Message::agent_error(format!("Sorry, I encountered an error: {detail}"))
        }
        Ok(reply) => {
            let normalized = normalize(&reply.response);
            debug!(outcome = "success", "Agent reply normalized");
            Message::agent(
                normalized.text,
                normalized.escalation_suggested,
                normalized.suggested_topics,
            )
        }
    }
}
