//! AgentClient trait definition.
//!
//! The chat issues exactly one kind of remote call: post the user's text to
//! the agent service and wait for the reply envelope. Implementations live in
//! deskchat-infra (e.g., `HttpAgentClient`); tests use scripted clients.

use std::future::Future;

use deskchat_types::agent::{AgentReply, AgentRequest};
use deskchat_types::error::AgentError;

/// Trait for agent service backends.
///
/// Uses native async fn in traits (RPITIT, Rust 2024 edition).
///
/// `send` resolves to `Ok` whenever a reply envelope was decoded, including
/// replies with `success: false`. `Err` is reserved for transport failures.
pub trait AgentClient: Send + Sync {
    /// Where requests go (URL or a descriptive label), for logging.
    fn endpoint(&self) -> &str;

    /// Send one message to the agent and wait for its reply.
    fn send(
        &self,
        request: &AgentRequest,
    ) -> impl Future<Output = Result<AgentReply, AgentError>> + Send;
}
