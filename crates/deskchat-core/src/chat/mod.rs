//! Chat session state for deskchat.
//!
//! `ChatController` owns the session identity, the append-only transcript,
//! the input buffer, and the pending flag for one chat session.

pub mod controller;
pub mod session;
pub mod transcript;
