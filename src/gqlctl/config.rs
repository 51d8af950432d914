use crate::error::{GqlctlError, Result};
use reqwest::Url;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_ENDPOINT: &str = "http://localhost:8080";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Client settings, stored in `<config dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GqlctlConfig {
    /// Base URL of the control-plane API
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Default for GqlctlConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl GqlctlConfig {
    pub const KEYS: &'static [&'static str] = &["endpoint", "timeout"];

    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content =
            fs::read_to_string(&config_path).map_err(|e| GqlctlError::io(&config_path, e))?;
        let config: Self = serde_json::from_str(&content).map_err(|e| {
            GqlctlError::Config(format!("invalid {}: {}", config_path.display(), e))
        })?;
        if config.timeout_secs == 0 {
            return Err(GqlctlError::Config(format!(
                "invalid {}: timeout_secs must be a positive number of seconds",
                config_path.display()
            )));
        }
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(|e| GqlctlError::io(config_dir, e))?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self)?;
        fs::write(&config_path, content).map_err(|e| GqlctlError::io(&config_path, e))?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "endpoint" => Some(self.endpoint.clone()),
            "timeout" => Some(self.timeout_secs.to_string()),
            _ => None,
        }
    }

    /// Set a key from its string form. Returns a user-facing message on bad input.
    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            "endpoint" => {
                parse_endpoint(value)?;
                self.endpoint = value.trim_end_matches('/').to_string();
                Ok(())
            }
            "timeout" => match value.parse::<u64>() {
                Ok(secs) if secs > 0 => {
                    self.timeout_secs = secs;
                    Ok(())
                }
                _ => Err(format!(
                    "timeout must be a positive number of seconds, got '{}'",
                    value
                )),
            },
            other => Err(unknown_key(other)),
        }
    }

    pub fn with_endpoint_override(mut self, endpoint: Option<String>) -> Self {
        if let Some(endpoint) = endpoint {
            self.endpoint = endpoint;
        }
        self
    }
}

pub fn unknown_key(key: &str) -> String {
    format!(
        "Unknown config key: {} (valid keys: {})",
        key,
        GqlctlConfig::KEYS.join(", ")
    )
}

/// Parses an endpoint, accepting only absolute http(s) URLs.
pub fn parse_endpoint(raw: &str) -> std::result::Result<Url, String> {
    let url = Url::parse(raw).map_err(|e| format!("invalid endpoint '{}': {}", raw, e))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        scheme => Err(format!(
            "invalid endpoint '{}': unsupported scheme '{}'",
            raw, scheme
        )),
    }
}
