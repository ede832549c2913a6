//! Configuration management for the AI Vision admin dashboard

use serde::{Deserialize, Serialize};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Backend API configuration
    pub api: ApiConfig,

    /// Web shell configuration
    pub web: WebConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Backend API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the manage API, e.g. `https://api.example.com`
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds; expiry is an ordinary failure
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Page size used when fetching active-only reference lists for pickers
    #[serde(default = "default_lookup_page_size")]
    pub lookup_page_size: u32,
}

/// Web shell configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebConfig {
    /// Host to bind to
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format (json or text)
    #[serde(default = "default_log_format")]
    pub format: String,
}

// Default value functions
fn default_base_url() -> String {
    "http://localhost:8080".to_string()
}

const fn default_timeout_secs() -> u64 {
    20
}

const fn default_lookup_page_size() -> u32 {
    1000
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

const fn default_port() -> u16 {
    8081
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "json".to_string()
}

impl Config {
    /// Load configuration from environment and files
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded or parsed.
    pub fn load() -> crate::Result<Self> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config").required(false))
            .add_source(config::Environment::with_prefix("AIVISION").separator("__"))
            .build()
            .map_err(|e| crate::Error::configuration(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| crate::Error::configuration(e.to_string()))
    }
}

impl Default for Config {
    fn default() -> Self {
        let base_url =
            std::env::var("AIVISION_API_URL").unwrap_or_else(|_| default_base_url());

        Self {
            api: ApiConfig {
                base_url,
                timeout_secs: default_timeout_secs(),
                lookup_page_size: default_lookup_page_size(),
            },
            web: WebConfig {
                host: default_host(),
                port: default_port(),
            },
            logging: LoggingConfig {
                level: default_log_level(),
                format: default_log_format(),
            },
        }
    }
}

#[cfg(test)]
#[allow(clippy::missing_panics_doc)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_config_default() {
        let config = Config::default();

        assert!(config.api.base_url.starts_with("http"));
        assert_eq!(config.api.timeout_secs, 20);
        assert_eq!(config.api.lookup_page_size, 1000);

        assert_eq!(config.web.host, "0.0.0.0");
        assert_eq!(config.web.port, 8081);

        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, "json");
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();

        let serialized = serde_json::to_string(&config).unwrap();
        let deserialized: Config = serde_json::from_str(&serialized).unwrap();

        assert_eq!(deserialized.api.base_url, config.api.base_url);
        assert_eq!(deserialized.api.timeout_secs, config.api.timeout_secs);
        assert_eq!(deserialized.web.port, config.web.port);
        assert_eq!(deserialized.logging.level, config.logging.level);
    }

    #[test]
    fn test_partial_config_deserialization() {
        let json_str = r#"{
            "api": {"base_url": "https://api.aivision.example"},
            "web": {"port": 9000},
            "logging": {}
        }"#;

        let config: Config = serde_json::from_str(json_str).unwrap();

        assert_eq!(config.api.base_url, "https://api.aivision.example");
        assert_eq!(config.api.timeout_secs, 20); // Uses default
        assert_eq!(config.web.port, 9000);
        assert_eq!(config.web.host, "0.0.0.0"); // Uses default
        assert_eq!(config.logging.format, "json"); // Uses default
    }
}
