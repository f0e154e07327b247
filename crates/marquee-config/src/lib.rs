//! # Marquee Configuration
//!
//! Typed configuration for the Marquee catalog server.
//!
//! Values are resolved in three layers, later layers winning:
//!
//! 1. Built-in defaults (`Default` impls on every section)
//! 2. A TOML file (`~/.config/marquee/config.toml` unless a path is given)
//! 3. `MARQUEE_*` environment variables
//!
//! Command-line flags are applied on top by the binary.
//!
//! ```toml
//! [server]
//! host = "0.0.0.0"
//! port = 3000
//!
//! [database]
//! path = "./data/marquee.db"
//!
//! [logging]
//! level = "debug"
//! ```

#![warn(clippy::all)]

pub mod components;
mod loader;

pub use components::{DatabaseConfig, LoggingConfig, ServerConfig};
pub use loader::{default_config_path, ConfigError};

use serde::{Deserialize, Serialize};

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarqueeConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
}
