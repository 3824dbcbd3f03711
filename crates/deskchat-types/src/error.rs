use std::time::Duration;

use thiserror::Error;

/// Errors raised while calling the remote agent service.
///
/// Every variant is a transport-level failure from the chat's point of view:
/// the transcript controller turns all of them into the same
/// connection-error message. Application-level failures arrive as a decoded
/// reply with `success: false` and are not errors here.
#[derive(Debug, Error)]
pub enum AgentError {
    #[error("transport error: {0}")]
    Transport(String),

    #[error("request timed out after {0:?}")]
    Timeout(Duration),

    #[error("undecodable agent reply: {0}")]
    Decode(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_agent_error_display() {
        let err = AgentError::Transport("connection refused".to_string());
        assert_eq!(err.to_string(), "transport error: connection refused");

        let err = AgentError::Timeout(Duration::from_secs(30));
        assert_eq!(err.to_string(), "request timed out after 30s");
    }
}
