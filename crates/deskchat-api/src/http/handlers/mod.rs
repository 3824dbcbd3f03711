//! HTTP request handlers for the mock agent.

pub mod agent;
