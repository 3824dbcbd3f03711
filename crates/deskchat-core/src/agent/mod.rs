//! Remote agent abstractions for deskchat.
//!
//! - `AgentClient`: RPITIT trait for the single outbound agent call
//! - `normalize`: pure mapping from a reply payload to display text

pub mod client;
pub mod normalize;
