//! Configuration loading and validation.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

/// Server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8085
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Bearer credential and the identity string returned by the validate tool.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    #[serde(default = "default_token")]
    pub token: String,

    #[serde(default = "default_identity")]
    pub identity: String,
}

fn default_token() -> String {
    "hackathon2025".to_string()
}

fn default_identity() -> String {
    "cp-coach".to_string()
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            token: default_token(),
            identity: default_identity(),
        }
    }
}

/// Outbound fetch configuration: timeouts and collaborator endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchConfig {
    /// Per-call timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Codeforces API base URL
    #[serde(default = "default_codeforces_base")]
    pub codeforces_base_url: String,

    /// AtCoder contest dump URL
    #[serde(default = "default_atcoder_contests")]
    pub atcoder_contests_url: String,

    /// How many submissions to pull per profile (most recent first)
    #[serde(default = "default_submission_count")]
    pub submission_count: u32,
}

fn default_timeout() -> u64 {
    10
}

fn default_user_agent() -> String {
    concat!("cp-coach/", env!("CARGO_PKG_VERSION")).to_string()
}

fn default_codeforces_base() -> String {
    "https://codeforces.com/api".to_string()
}

fn default_atcoder_contests() -> String {
    "https://kenkoooo.com/atcoder/resources/contests.json".to_string()
}

fn default_submission_count() -> u32 {
    2000
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: default_timeout(),
            user_agent: default_user_agent(),
            codeforces_base_url: default_codeforces_base(),
            atcoder_contests_url: default_atcoder_contests(),
            submission_count: default_submission_count(),
        }
    }
}

/// Main application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub auth: AuthConfig,

    #[serde(default)]
    pub fetch: FetchConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::ValidationError(
                "Server port must be greater than 0".to_string(),
            ));
        }

        if self.fetch.timeout_seconds == 0 {
            return Err(ConfigError::ValidationError(
                "Fetch timeout must be greater than 0".to_string(),
            ));
        }

        if self.auth.token.is_empty() {
            return Err(ConfigError::ValidationError(
                "Bearer token must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();

        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 8085);
        assert_eq!(config.auth.token, "hackathon2025");
        assert_eq!(config.fetch.submission_count, 2000);
        assert!(config.fetch.codeforces_base_url.starts_with("https://codeforces.com"));
    }

    #[test]
    fn test_config_validation_ok() {
        assert!(AppConfig::default().validate().is_ok());
    }

    #[test]
    fn test_config_validation_bad_port() {
        let mut config = AppConfig::default();
        config.server.port = 0;

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validation_bad_timeout() {
        let mut config = AppConfig::default();
        config.fetch.timeout_seconds = 0;

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validation_empty_token() {
        let mut config = AppConfig::default();
        config.auth.token = String::new();

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[server]\nport = 9000\n").unwrap();

        let config = AppConfig::from_file(&path).unwrap();
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.fetch.submission_count, 2000);
    }

    #[test]
    fn test_config_serialization() {
        let config = AppConfig::default();
        let toml_str = toml::to_string(&config).unwrap();

        let parsed: AppConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(config.server.port, parsed.server.port);
        assert_eq!(config.fetch.codeforces_base_url, parsed.fetch.codeforces_base_url);
    }
}
