//! Client configuration.

use crate::area::Participant;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Environment variable overriding the configured server URL.
pub const SERVER_URL_ENV: &str = "STRICTLY_SHOGI_SERVER_URL";

/// Configuration for a shogi area client.
#[derive(Debug, Clone, Getters, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the game server.
    #[serde(default = "default_server_url")]
    server_url: String,

    /// Area to mirror.
    area_id: String,

    /// Local player id.
    player_id: String,

    /// Local player display name; defaults to the id.
    #[serde(default)]
    player_name: Option<String>,

    /// Delay between snapshot polls.
    #[serde(default = "default_poll_interval_ms")]
    poll_interval_ms: u64,

    /// Other known participants, used to show names instead of ids.
    #[serde(default)]
    roster: Vec<Participant>,
}

#[instrument]
fn default_server_url() -> String {
    "http://127.0.0.1:3000".to_string()
}

#[instrument]
fn default_poll_interval_ms() -> u64 {
    500
}

impl ClientConfig {
    /// Creates a configuration with defaults for everything but the ids.
    #[instrument]
    pub fn new(area_id: String, player_id: String) -> Self {
        Self {
            server_url: default_server_url(),
            area_id,
            player_id,
            player_name: None,
            poll_interval_ms: default_poll_interval_ms(),
            roster: Vec::new(),
        }
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(
            area_id = %config.area_id,
            player_id = %config.player_id,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Parses configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        if config.area_id.is_empty() || config.player_id.is_empty() {
            return Err(ConfigError::new(
                "area_id and player_id must not be empty".to_string(),
            ));
        }
        Ok(config)
    }

    /// Applies overrides from the environment.
    #[instrument(skip(self))]
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(url) = std::env::var(SERVER_URL_ENV) {
            debug!(server_url = %url, "Server URL overridden from environment");
            self.server_url = url;
        }
        self
    }

    /// The local participant described by this configuration.
    pub fn participant(&self) -> Participant {
        Participant::new(
            self.player_id.clone(),
            self.player_name
                .clone()
                .unwrap_or_else(|| self.player_id.clone()),
        )
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_fill_optional_fields() {
        let config =
            ClientConfig::from_toml("area_id = \"dojo\"\nplayer_id = \"alice\"\n").unwrap();
        assert_eq!(config.server_url(), "http://127.0.0.1:3000");
        assert_eq!(*config.poll_interval_ms(), 500);
        assert!(config.roster().is_empty());
        assert_eq!(config.participant(), Participant::new("alice", "alice"));
    }

    #[test]
    fn test_empty_ids_rejected() {
        let result = ClientConfig::from_toml("area_id = \"\"\nplayer_id = \"alice\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_ids_rejected() {
        let result = ClientConfig::from_toml("server_url = \"http://localhost:1\"\n");
        assert!(result.unwrap_err().to_string().contains("Failed to parse config"));
    }
}
