//! Chat logic for deskchat.
//!
//! This crate defines the agent client "port" that the infrastructure layer
//! implements, the pure response normalizer, and the transcript controller
//! that owns a chat session. It depends only on `deskchat-types` -- never on
//! `deskchat-infra` or any HTTP crate.

pub mod agent;
pub mod chat;
