//! Local mock agent service.
//!
//! Serves `POST /api/agent` with canned structured replies so the chat
//! client can be exercised without a real agent backend.

pub mod handlers;
pub mod router;
