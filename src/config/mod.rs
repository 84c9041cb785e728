//! Configuration loading and management

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Complete configuration for the admin back office
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminConfig {
    /// Address the HTTP server binds to
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,

    /// Rows per page when a list query does not say otherwise
    #[serde(default = "default_per_page")]
    pub default_per_page: usize,

    /// Quiet period before search input becomes an effective query
    #[serde(default = "default_debounce_ms")]
    pub search_debounce_ms: u64,

    /// Whether to load the demo fixture data on startup
    #[serde(default = "default_seed")]
    pub seed_demo_data: bool,
}

fn default_bind_addr() -> String {
    "127.0.0.1:3000".to_string()
}

fn default_per_page() -> usize {
    5
}

fn default_debounce_ms() -> u64 {
    500
}

fn default_seed() -> bool {
    true
}

impl Default for AdminConfig {
    fn default() -> Self {
        AdminConfig {
            bind_addr: default_bind_addr(),
            default_per_page: default_per_page(),
            search_debounce_ms: default_debounce_ms(),
            seed_demo_data: default_seed(),
        }
    }
}

impl AdminConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        Ok(config)
    }

    pub fn search_debounce(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.search_debounce_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_fill_missing_fields() {
        let config = AdminConfig::from_yaml_str("bind_addr: 0.0.0.0:8080\n").unwrap();
        assert_eq!(config.bind_addr, "0.0.0.0:8080");
        assert_eq!(config.default_per_page, 5);
        assert_eq!(config.search_debounce_ms, 500);
        assert!(config.seed_demo_data);
    }

    #[test]
    fn test_full_config_round_trip() {
        let config = AdminConfig {
            bind_addr: "127.0.0.1:9000".to_string(),
            default_per_page: 20,
            search_debounce_ms: 250,
            seed_demo_data: false,
        };
        let yaml = serde_yaml::to_string(&config).unwrap();
        let parsed = AdminConfig::from_yaml_str(&yaml).unwrap();
        assert_eq!(parsed.default_per_page, 20);
        assert_eq!(parsed.search_debounce_ms, 250);
        assert!(!parsed.seed_demo_data);
    }
}
