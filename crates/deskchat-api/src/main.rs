//! deskchat CLI entry point.
//!
//! Binary name: `deskchat`
//!
//! Parses CLI arguments, installs tracing, resolves configuration, then
//! dispatches to the chat loop, the one-shot sender, or the mock agent.

mod cli;
mod http;
mod state;

use clap::Parser;
use clap_complete::generate;
use console::style;

use cli::{Cli, Commands};
use deskchat_observe::tracing_setup::{init_tracing, shutdown_tracing, verbosity_filter};
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_tracing(verbosity_filter(cli.verbose, cli.quiet), cli.otel)
        .map_err(|e| anyhow::anyhow!("Failed to initialize tracing: {e}"))?;

    // Shell completions don't need configuration
    if let Commands::Completions { shell } = &cli.command {
        let mut cmd = <Cli as clap::CommandFactory>::command();
        generate(*shell, &mut cmd, "deskchat", &mut std::io::stdout());
        return Ok(());
    }

    let state = AppState::init(&cli).await?;

    let result = match &cli.command {
        Commands::Chat => cli::chat::loop_runner::run_chat_loop(&state).await,
        Commands::Send { message } => cli::send::send_message(&state, message, cli.json, cli.quiet).await,
        Commands::MockAgent { port, host } => serve_mock_agent(state, host, *port, cli.quiet).await,
        Commands::Completions { .. } => Ok(()),
    };

    shutdown_tracing();
    result
}

/// Serve the mock agent until Ctrl+C or SIGTERM.
async fn serve_mock_agent(state: AppState, host: &str, port: u16, quiet: bool) -> anyhow::Result<()> {
    let addr = format!("{host}:{port}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    if !quiet {
        println!(
            "  {} Mock agent listening on {}",
            style("*").cyan().bold(),
            style(format!("http://{addr}/api/agent")).cyan()
        );
        println!("  {}", style("Press Ctrl+C to stop").dim());
    }
    tracing::info!(%addr, company = %state.config.company_name, "Mock agent started");

    let router = http::router::build_router(state);
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    if !quiet {
        println!("\n  Server stopped.");
    }
    Ok(())
}

/// Wait for Ctrl+C or SIGTERM for graceful shutdown.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
