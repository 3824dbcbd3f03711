//! Session identity for a chat session.
//!
//! The user and session identifiers are derived from the session start time
//! and reused for every request in the session. There is no server-side
//! session negotiation.

use std::sync::atomic::{AtomicI64, Ordering};

use chrono::{DateTime, Utc};

/// Last token handed out in this process.
static LAST_TOKEN: AtomicI64 = AtomicI64::new(0);

/// Identifiers sent with every agent request of one session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionIdentity {
    pub user_id: String,
    pub session_id: String,
    pub started_at: DateTime<Utc>,
}

impl SessionIdentity {
    /// Start a new session stamped with the current time.
    pub fn start() -> Self {
        let started_at = Utc::now();
        let token = next_token(started_at.timestamp_millis());
        Self {
            user_id: format!("user-{token}"),
            session_id: format!("session-{token}"),
            started_at,
        }
    }
}

/// Millisecond token, bumped past the previous one when two sessions start
/// within the same millisecond.
fn next_token(now_millis: i64) -> i64 {
    let mut previous = LAST_TOKEN.load(Ordering::Relaxed);
    loop {
        let candidate = now_millis.max(previous + 1);
        match LAST_TOKEN.compare_exchange_weak(
            previous,
            candidate,
            Ordering::Relaxed,
            Ordering::Relaxed,
        ) {
            Ok(_) => return candidate,
            Err(actual) => previous = actual,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_format() {
        let identity = SessionIdentity::start();
        assert!(identity.user_id.starts_with("user-"));
        assert!(identity.session_id.starts_with("session-"));
        assert_eq!(
            identity.user_id.trim_start_matches("user-"),
            identity.session_id.trim_start_matches("session-")
        );
    }

    #[test]
    fn test_sessions_started_together_are_distinct() {
        let a = SessionIdentity::start();
        let b = SessionIdentity::start();
        assert_ne!(a.session_id, b.session_id);
    }

    #[test]
    fn test_tokens_are_monotonic() {
        let first = next_token(5);
        let second = next_token(5);
        assert!(second > first);
    }
}
