//! Infrastructure layer for deskchat.
//!
//! Contains the implementation of the `AgentClient` trait defined in
//! `deskchat-core` (a reqwest-based HTTP client) and the `config.toml`
//! loader.

pub mod agent;
pub mod config;
