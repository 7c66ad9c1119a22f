//! Hub configuration with TOML file support.

use serde::{Deserialize, Serialize};

use agenthub_types::HubParams;

use crate::HubError;

/// Configuration for a hub node.
///
/// Can be loaded from a TOML file via [`HubConfig::from_toml_file`] or
/// built programmatically (e.g. for tests).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HubConfig {
    /// Address to bind the HTTP server to.
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,

    /// HTTP port.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Protocol parameters (fixed per deployment, not TOML config).
    #[serde(skip)]
    pub params: HubParams,

    /// Install the demo posts on startup so the front page is never empty.
    #[serde(default = "default_true")]
    pub seed_demo_posts: bool,

    /// Log format: "human" or "json".
    #[serde(default = "default_log_format")]
    pub log_format: String,

    /// Log level filter: "trace", "debug", "info", "warn", "error".
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

// ── Serde default helpers ──────────────────────────────────────────────

fn default_listen_addr() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_true() -> bool {
    true
}

fn default_log_format() -> String {
    "human".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

// ── Impl ───────────────────────────────────────────────────────────────

impl HubConfig {
    /// Load configuration from a TOML file.
    pub fn from_toml_file(path: &str) -> Result<Self, HubError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| HubError::Config(e.to_string()))?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, HubError> {
        toml::from_str(s).map_err(|e| HubError::Config(e.to_string()))
    }

    /// Serialize the configuration to a TOML string.
    pub fn to_toml_string(&self) -> String {
        toml::to_string_pretty(self).expect("HubConfig is always serializable to TOML")
    }
}

impl Default for HubConfig {
    fn default() -> Self {
        Self {
            listen_addr: default_listen_addr(),
            port: default_port(),
            params: HubParams::default(),
            seed_demo_posts: true,
            log_format: default_log_format(),
            log_level: default_log_level(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_config_round_trips_through_toml() {
        let config = HubConfig::default();
        let toml_str = config.to_toml_string();
        let parsed = HubConfig::from_toml_str(&toml_str).expect("should parse");
        assert_eq!(parsed.port, config.port);
        assert_eq!(parsed.listen_addr, config.listen_addr);
        assert_eq!(parsed.seed_demo_posts, config.seed_demo_posts);
    }

    #[test]
    fn minimal_toml_uses_defaults() {
        let config = HubConfig::from_toml_str("").expect("empty toml should use defaults");
        assert_eq!(config.port, 3000);
        assert_eq!(config.listen_addr, "0.0.0.0");
        assert!(config.seed_demo_posts);
        assert_eq!(config.log_format, "human");
    }

    #[test]
    fn partial_toml_overrides() {
        let toml = r#"
            port = 8080
            seed_demo_posts = false
        "#;
        let config = HubConfig::from_toml_str(toml).expect("should parse");
        assert_eq!(config.port, 8080);
        assert!(!config.seed_demo_posts);
        assert_eq!(config.log_level, "info"); // default
    }

    #[test]
    fn missing_file_returns_config_error() {
        let result = HubConfig::from_toml_file("/nonexistent/agenthub.toml");
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert!(matches!(err, HubError::Config(_)));
    }

    #[test]
    fn config_loads_from_a_real_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "port = 4242").unwrap();

        let config = HubConfig::from_toml_file(file.path().to_str().unwrap()).unwrap();
        assert_eq!(config.port, 4242);
    }
}
