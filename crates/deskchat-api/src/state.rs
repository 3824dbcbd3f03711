//! Application state shared by the CLI commands.
//!
//! AppState holds the resolved widget configuration (config file plus CLI
//! overrides) and builds the concrete agent client from it.

use deskchat_infra::agent::http::HttpAgentClient;
use deskchat_infra::config::{default_config_path, load_widget_config};
use deskchat_types::config::WidgetConfig;

use crate::cli::Cli;

/// Resolved configuration for one CLI invocation.
#[derive(Clone)]
pub struct AppState {
    pub config: WidgetConfig,
}

impl AppState {
    /// Load the config file and apply command-line overrides.
    pub async fn init(cli: &Cli) -> anyhow::Result<Self> {
        let config_path = cli.config.clone().unwrap_or_else(default_config_path);
        let mut config = load_widget_config(&config_path).await;

        if let Some(endpoint) = &cli.endpoint {
            config.endpoint = endpoint.clone();
        }
        if let Some(agent_id) = &cli.agent_id {
            config.agent_id = agent_id.clone();
        }

        tracing::debug!(
            config_path = %config_path.display(),
            endpoint = %config.endpoint,
            "Configuration resolved"
        );

        Ok(Self { config })
    }

    /// Build the HTTP agent client for the configured endpoint.
    pub fn agent_client(&self) -> anyhow::Result<HttpAgentClient> {
        Ok(HttpAgentClient::from_config(&self.config)?)
    }
}
