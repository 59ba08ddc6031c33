//! Server Configuration
//!
//! TOML file, then `FOCUS_PULSE_*` environment overrides, then validation.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable naming an explicit config file
pub const CONFIG_ENV: &str = "FOCUS_PULSE_CONFIG";

const APP_DIR: &str = "focus-pulse";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid value for {key}: {value}")]
    InvalidEnv { key: &'static str, value: String },
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Runtime settings for the HTTP server
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// SQLite file, or `:memory:`
    pub database_path: PathBuf,
    /// Built UI assets (trunk `dist/`)
    pub static_dir: PathBuf,
    pub log_dir: PathBuf,
    /// `EnvFilter` directive
    pub log_level: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        let data_dir = default_data_dir();
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            database_path: data_dir.join("focus_pulse.db"),
            static_dir: PathBuf::from("dist"),
            log_dir: data_dir.join("logs"),
            log_level: "info".to_string(),
        }
    }
}

impl ServerConfig {
    /// Load from `FOCUS_PULSE_CONFIG`, the default config path, or defaults,
    /// then apply environment overrides.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(|key| std::env::var(key).ok(), &Self::default_config_path())
    }

    /// `load` with the environment read through `lookup` and an explicit
    /// fallback file
    pub fn load_from<F>(lookup: F, default_path: &Path) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match lookup(CONFIG_ENV) {
            Some(path) => Self::from_file(Path::new(&path))?,
            None if default_path.exists() => Self::from_file(default_path)?,
            None => Self::default(),
        };
        config.apply_overrides(lookup)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse a TOML file; missing fields fall back to defaults
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(toml::from_str(&content)?)
    }

    /// `~/.config/focus-pulse/config.toml` or the platform equivalent
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(std::env::temp_dir)
            .join(APP_DIR)
            .join("config.toml")
    }

    /// Apply `FOCUS_PULSE_*` overrides read through `lookup`
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("FOCUS_PULSE_HOST") {
            self.host = host;
        }
        if let Some(port) = lookup("FOCUS_PULSE_PORT") {
            self.port = port.parse().map_err(|_| ConfigError::InvalidEnv {
                key: "FOCUS_PULSE_PORT",
                value: port,
            })?;
        }
        if let Some(path) = lookup("FOCUS_PULSE_DATABASE") {
            self.database_path = PathBuf::from(path);
        }
        if let Some(path) = lookup("FOCUS_PULSE_STATIC_DIR") {
            self.static_dir = PathBuf::from(path);
        }
        if let Some(path) = lookup("FOCUS_PULSE_LOG_DIR") {
            self.log_dir = PathBuf::from(path);
        }
        if let Some(level) = lookup("FOCUS_PULSE_LOG_LEVEL") {
            self.log_level = level;
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.host.trim().is_empty() {
            return Err(ConfigError::Invalid("host must not be empty".to_string()));
        }
        if self.log_level.trim().is_empty() {
            return Err(ConfigError::Invalid("log_level must not be empty".to_string()));
        }
        Ok(())
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join(APP_DIR)
}
