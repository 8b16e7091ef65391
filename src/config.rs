//! Game configuration loaded from TOML.

use crate::error::ConfigError;
use crate::game::{DEFAULT_MAX_ID, DEFAULT_MIN_ID};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Runtime configuration for the catalog client and identifier range.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Base URL of the catalog service (no trailing slash needed).
    #[serde(default = "default_api_base_url")]
    api_base_url: String,

    /// Per-request timeout in milliseconds.
    #[serde(default = "default_request_timeout_ms")]
    request_timeout_ms: u64,

    /// Smallest identifier the sampler may draw.
    #[serde(default = "default_min_id")]
    min_id: u32,

    /// Largest identifier the sampler may draw.
    #[serde(default = "default_max_id")]
    max_id: u32,
}

fn default_api_base_url() -> String {
    "https://pokeapi.co/api/v2".to_string()
}

fn default_request_timeout_ms() -> u64 {
    10_000
}

fn default_min_id() -> u32 {
    DEFAULT_MIN_ID
}

fn default_max_id() -> u32 {
    DEFAULT_MAX_ID
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            request_timeout_ms: default_request_timeout_ms(),
            min_id: default_min_id(),
            max_id: default_max_id(),
        }
    }
}

impl GameConfig {
    /// Creates a validated configuration.
    #[instrument(skip(api_base_url), fields(api_base_url = %api_base_url))]
    pub fn new(
        api_base_url: String,
        request_timeout_ms: u64,
        min_id: u32,
        max_id: u32,
    ) -> Result<Self, ConfigError> {
        let config = Self {
            api_base_url,
            request_timeout_ms,
            min_id,
            max_id,
        };
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;

        info!(
            api_base_url = %config.api_base_url,
            min_id = config.min_id,
            max_id = config.max_id,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Loads the file at `path` if it exists, otherwise returns defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Returns the per-request timeout.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }

    /// Replaces the base URL, keeping everything else.
    pub fn with_api_base_url(mut self, api_base_url: impl Into<String>) -> Self {
        self.api_base_url = api_base_url.into();
        self
    }

    /// Replaces the per-request timeout, keeping everything else.
    pub fn with_request_timeout_ms(mut self, request_timeout_ms: u64) -> Self {
        self.request_timeout_ms = request_timeout_ms;
        self
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.api_base_url.trim().is_empty() {
            return Err(ConfigError::new("api_base_url must not be empty"));
        }
        if self.request_timeout_ms == 0 {
            return Err(ConfigError::new("request_timeout_ms must be positive"));
        }
        if self.min_id == 0 {
            return Err(ConfigError::new("min_id must be at least 1"));
        }
        if self.min_id > self.max_id {
            return Err(ConfigError::new(format!(
                "min_id ({}) must not exceed max_id ({})",
                self.min_id, self.max_id
            )));
        }
        Ok(())
    }
}
