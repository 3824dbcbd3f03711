//! Interactive terminal chat for deskchat.
//!
//! This module implements the chat surface: welcome state, quick-reply
//! chips, typing indicator, message rendering with escalation warnings, and
//! slash commands. Entry point: `loop_runner::run_chat_loop`.

pub mod banner;
pub mod commands;
pub mod input;
pub mod loop_runner;
pub mod renderer;
