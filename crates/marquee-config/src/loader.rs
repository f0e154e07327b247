//! Loading configuration from TOML files and the environment

use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

use crate::MarqueeConfig;

/// Errors raised while loading configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid value for {var}: {value:?}")]
    InvalidEnv { var: &'static str, value: String },
}

/// `~/.config/marquee/config.toml` on Linux, the platform equivalent elsewhere
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("marquee").join("config.toml"))
}

impl MarqueeConfig {
    /// Load from `path`, or from the default location when it exists, then
    /// apply `MARQUEE_*` environment overrides.
    ///
    /// An explicit path must exist; a missing default file just means
    /// defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => match default_config_path() {
                Some(path) if path.exists() => Self::from_file(&path)?,
                _ => {
                    debug!("No config file found, using defaults");
                    Self::default()
                }
            },
        };

        config.apply_env_from(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        info!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Apply overrides read through `lookup`
    pub fn apply_env_from<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("MARQUEE_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("MARQUEE_PORT") {
            self.server.port = port.parse().map_err(|_| ConfigError::InvalidEnv {
                var: "MARQUEE_PORT",
                value: port,
            })?;
        }
        if let Some(path) = lookup("MARQUEE_DB_PATH") {
            self.database.path = PathBuf::from(path);
        }
        if let Some(dir) = lookup("MARQUEE_STATIC_DIR") {
            self.server.static_dir = (!dir.is_empty()).then(|| PathBuf::from(dir));
        }
        if let Some(level) = lookup("MARQUEE_LOG") {
            self.logging.level = level;
        }
        Ok(())
    }
}
