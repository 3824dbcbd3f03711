//! Widget configuration loader for deskchat.
//!
//! Reads `config.toml` from the data directory (`~/.deskchat/` by default)
//! or an explicit path and deserializes it into [`WidgetConfig`]. Falls back
//! to defaults when the file is missing or malformed.

use std::path::{Path, PathBuf};

use deskchat_types::config::WidgetConfig;

/// Resolve the deskchat data directory.
///
/// `DESKCHAT_DATA_DIR` wins; otherwise `~/.deskchat`, and as a last resort
/// `.deskchat` in the current directory.
pub fn resolve_data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("DESKCHAT_DATA_DIR") {
        return PathBuf::from(dir);
    }

    if let Some(home) = dirs::home_dir() {
        return home.join(".deskchat");
    }

    PathBuf::from(".deskchat")
}

/// Default location of `config.toml`.
pub fn default_config_path() -> PathBuf {
    resolve_data_dir().join("config.toml")
}

/// Load widget configuration from `config_path`.
///
/// Never fails: a missing file yields [`WidgetConfig::default()`], an
/// unreadable or malformed one is logged at `warn` and also yields the
/// defaults. Keys absent from the file keep their default values.
pub async fn load_widget_config(config_path: &Path) -> WidgetConfig {
    let path = config_path.display();

    let raw = match tokio::fs::read_to_string(config_path).await {
        Ok(raw) => raw,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(%path, "Config file absent, using defaults");
            return WidgetConfig::default();
        }
        Err(err) => {
            tracing::warn!(%path, error = %err, "Config file unreadable, using defaults");
            return WidgetConfig::default();
        }
    };

    toml::from_str(&raw).unwrap_or_else(|err| {
        tracing::warn!(%path, error = %err, "Config file invalid, using defaults");
        WidgetConfig::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn load_widget_config_missing_file_returns_default() {
        let dir = TempDir::new().unwrap();
        let config = load_widget_config(&dir.path().join("config.toml")).await;
        assert_eq!(config, WidgetConfig::default());
    }

    #[tokio::test]
    async fn load_widget_config_valid_toml_returns_parsed() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.toml");
        tokio::fs::write(
            &config_path,
            r#"
endpoint = "http://127.0.0.1:8080/api/agent"
company_name = "Acme"
quick_reply_topics = ["Orders", "Returns"]
"#,
        )
        .await
        .unwrap();

        let config = load_widget_config(&config_path).await;
        assert_eq!(config.endpoint, "http://127.0.0.1:8080/api/agent");
        assert_eq!(config.company_name, "Acme");
        assert_eq!(config.quick_reply_topics, vec!["Orders", "Returns"]);
        assert_eq!(config.agent_id, WidgetConfig::default().agent_id);
    }

    #[tokio::test]
    async fn load_widget_config_invalid_toml_returns_default() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.toml");
        tokio::fs::write(&config_path, "endpoint = [unterminated")
            .await
            .unwrap();

        let config = load_widget_config(&config_path).await;
        assert_eq!(config, WidgetConfig::default());
    }

    #[test]
    fn default_config_path_is_inside_data_dir() {
        assert_eq!(
            default_config_path().parent(),
            Some(resolve_data_dir().as_path())
        );
    }
}
