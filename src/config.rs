use crate::error::{GatewayError, Result};
use serde::{Deserialize, Serialize};

pub const DEFAULT_BASE_URL: &str = "https://api.hydric.org/v1";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayConfig {
    pub api: ApiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    pub api_key: Option<String>,
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub log_level: String,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig {
                api_key: None,
                base_url: default_base_url(),
            },
            logging: LoggingConfig::default(),
        }
    }
}

impl GatewayConfig {
    /// Config pointing at `base_url` with the given key; handy for tests and local gateways.
    pub fn with_key(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        let mut config = Self::default();
        config.api.api_key = Some(api_key.into());
        config.api.base_url = base_url.into();
        config
    }

    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        config.api.api_key = std::env::var("HYDRIC_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty());

        if let Ok(base_url) = std::env::var("HYDRIC_BASE_URL") {
            if base_url.trim().is_empty() {
                return Err(GatewayError::config_error("Invalid HYDRIC_BASE_URL"));
            }
            config.api.base_url = base_url;
        }

        if let Ok(log_level) = std::env::var("HYDRIC_LOG_LEVEL") {
            config.logging.log_level = log_level;
        }

        Ok(config)
    }

    pub fn from_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| GatewayError::config_error(format!("Failed to read config file: {}", e)))?;

        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| GatewayError::config_error(format!("Failed to parse config file: {}", e)))
    }

    /// The API key, or a configuration error when it is missing or blank.
    pub fn require_api_key(&self) -> Result<&str> {
        match self.api.api_key.as_deref() {
            Some(key) if !key.trim().is_empty() => Ok(key),
            _ => Err(GatewayError::config_error(
                "API key is required; set HYDRIC_API_KEY",
            )),
        }
    }
}
