//! Shared domain types for deskchat.
//!
//! This crate contains the types every other deskchat crate agrees on:
//! transcript messages, the agent service wire envelope, widget
//! configuration, and the agent call error type.
//!
//! Zero infrastructure dependencies -- only serde, uuid, chrono, thiserror.

pub mod agent;
pub mod config;
pub mod error;
pub mod message;
