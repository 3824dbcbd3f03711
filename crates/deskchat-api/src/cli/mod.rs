//! CLI command definitions for the `deskchat` binary.
//!
//! Uses clap derive macros for argument parsing.

pub mod chat;
pub mod send;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// Talk to a customer-support agent from the terminal.
#[derive(Parser)]
#[command(name = "deskchat", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output machine-readable JSON instead of styled text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Also export tracing spans through OpenTelemetry (stdout exporter).
    #[arg(long, global = true)]
    pub otel: bool,

    /// Path to config.toml (defaults to ~/.deskchat/config.toml).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Agent endpoint URL, overriding the config file.
    #[arg(long, global = true, env = "DESKCHAT_ENDPOINT")]
    pub endpoint: Option<String>,

    /// Agent identifier, overriding the config file.
    #[arg(long, global = true, env = "DESKCHAT_AGENT_ID")]
    pub agent_id: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start an interactive support chat.
    Chat,

    /// Send a single message and print the agent's reply.
    Send {
        /// The message to send.
        message: String,
    },

    /// Serve a local mock agent at POST /api/agent.
    MockAgent {
        /// Port to listen on.
        #[arg(long, default_value_t = 3000)]
        port: u16,

        /// Host address to bind to.
        #[arg(long, default_value = "127.0.0.1")]
        host: String,
    },

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}
