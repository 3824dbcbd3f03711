//! Widget configuration types for deskchat.
//!
//! `WidgetConfig` is the top-level `config.toml`: which agent service to
//! talk to, which agent to address, and the copy shown by the chat surface.

use serde::{Deserialize, Serialize};

/// Top-level configuration for the chat client.
///
/// Loaded from `~/.deskchat/config.toml`. All fields have defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WidgetConfig {
    /// Full URL of the agent endpoint.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Identifier of the remote agent every message is addressed to.
    #[serde(default = "default_agent_id")]
    pub agent_id: String,

    /// Company name shown in the welcome state and footer.
    #[serde(default = "default_company_name")]
    pub company_name: String,

    /// Label used for agent messages and the typing indicator.
    #[serde(default = "default_agent_display_name")]
    pub agent_display_name: String,

    /// Shortcut topics offered while the transcript is empty.
    #[serde(default = "default_quick_reply_topics")]
    pub quick_reply_topics: Vec<String>,

    /// Optional transport timeout. `None` waits for the transport itself.
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

fn default_endpoint() -> String {
    "http://localhost:3000/api/agent".to_string()
}

fn default_agent_id() -> String {
    "695cb642c2dad05ba69ae2b8".to_string()
}

fn default_company_name() -> String {
    "TechCorp".to_string()
}

fn default_agent_display_name() -> String {
    "Support Agent".to_string()
}

fn default_quick_reply_topics() -> Vec<String> {
    [
        "Pricing Plans",
        "Features Overview",
        "Account Help",
        "Billing Questions",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            agent_id: default_agent_id(),
            company_name: default_company_name(),
            agent_display_name: default_agent_display_name(),
            quick_reply_topics: default_quick_reply_topics(),
            request_timeout_secs: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_widget_config_default_values() {
        let config = WidgetConfig::default();
        assert_eq!(config.endpoint, "http://localhost:3000/api/agent");
        assert_eq!(config.company_name, "TechCorp");
        assert_eq!(config.quick_reply_topics.len(), 4);
        assert!(config.request_timeout_secs.is_none());
    }

    #[test]
    fn test_widget_config_deserialize_with_defaults() {
        let config: WidgetConfig = toml::from_str("").unwrap();
        assert_eq!(config, WidgetConfig::default());
    }

    #[test]
    fn test_widget_config_deserialize_with_values() {
        let toml_str = r#"
endpoint = "https://support.example.com/api/agent"
agent_id = "agent-42"
quick_reply_topics = ["Returns"]
request_timeout_secs = 20
"#;
        let config: WidgetConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.endpoint, "https://support.example.com/api/agent");
        assert_eq!(config.agent_id, "agent-42");
        assert_eq!(config.quick_reply_topics, vec!["Returns".to_string()]);
        assert_eq!(config.request_timeout_secs, Some(20));
        // Unset keys keep their defaults
        assert_eq!(config.agent_display_name, "Support Agent");
    }
}
