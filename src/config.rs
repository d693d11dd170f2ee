use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

// =============================================================================
// Defaults
// =============================================================================

pub const APP_NAME: &str = "component-registry-cache";

/// Registry URL used when neither the config file nor the environment set one
pub const DEFAULT_REGISTRY_URL: &str = "http://localhost:4567";

/// Environment variable overriding the registry URL
pub const REGISTRY_URL_ENV: &str = "COMPONENTS_REGISTRY_URL";

/// Timeout for a single registry request in milliseconds (30 seconds)
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

/// Interval between invalidation checks of the `watch` command (1 minute)
pub const DEFAULT_INVALIDATION_INTERVAL_SECS: u64 = 60;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path:?}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Top-level configuration
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct ServiceConfig {
    pub registry: RegistryConfig,
    pub invalidation: InvalidationConfig,
    pub log: LogConfig,
}

/// Connection settings for the components registry
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct RegistryConfig {
    pub url: String,
    /// Request timeout in milliseconds
    pub timeout_ms: u64,
    pub user_agent: String,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_REGISTRY_URL.to_string(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            user_agent: APP_NAME.to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct InvalidationConfig {
    pub interval_secs: u64,
}

impl Default for InvalidationConfig {
    fn default() -> Self {
        Self {
            interval_secs: DEFAULT_INVALIDATION_INTERVAL_SECS,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct LogConfig {
    /// Write log lines as JSON objects
    pub json: bool,
}

impl ServiceConfig {
    /// Load configuration from `path`, or the default config file when `None`
    ///
    /// A missing file yields the defaults. The registry URL can always be
    /// overridden through [`REGISTRY_URL_ENV`].
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = path.map(Path::to_path_buf).unwrap_or_else(config_path);
        let config = Self::from_file(&path)?;
        Ok(config.with_env_override(std::env::var(REGISTRY_URL_ENV).ok()))
    }

    fn from_file(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    fn with_env_override(mut self, registry_url: Option<String>) -> Self {
        if let Some(url) = registry_url.filter(|url| !url.trim().is_empty()) {
            self.registry.url = url;
        }
        self
    }
}

/// Returns the path to the data directory for component-registry-cache.
/// Uses $XDG_DATA_HOME/component-registry-cache if XDG_DATA_HOME is set,
/// otherwise falls back to ~/.local/share/component-registry-cache,
/// or ./component-registry-cache if neither is available.
pub fn data_dir() -> PathBuf {
    data_dir_with_env(std::env::var("XDG_DATA_HOME").ok(), dirs::home_dir())
}

pub fn config_path() -> PathBuf {
    data_dir().join("config.json")
}

/// Directory the log files are written to
pub fn log_dir() -> PathBuf {
    data_dir().join("logs")
}

fn data_dir_with_env(xdg_data_home: Option<String>, home_dir: Option<PathBuf>) -> PathBuf {
    let data_dir = xdg_data_home
        .map(PathBuf::from)
        .or_else(|| home_dir.map(|home| home.join(".local/share")))
        .unwrap_or_else(|| PathBuf::from("."));

    data_dir.join(APP_NAME)
}
