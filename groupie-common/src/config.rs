//! Bootstrap configuration loaded from TOML
//!
//! The TOML file is optional and minimal: listen address, upstream API URL,
//! static asset root and logging. Command-line arguments and environment
//! variables override anything read here (see groupie-web `settings`).

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::client::DEFAULT_ARTISTS_URL;
use crate::{Error, Result};

/// Default HTTP bind address
pub const DEFAULT_BIND: &str = "127.0.0.1";

/// Default HTTP port
pub const DEFAULT_PORT: u16 = 3000;

/// Bootstrap configuration
///
/// Every field has a default, so an empty file is valid.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct TomlConfig {
    /// Address to bind the HTTP listener to
    #[serde(default = "default_bind")]
    pub bind: String,

    /// HTTP server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Artist list endpoint of the remote API
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Root directory for `/static/` assets (None = crate default)
    #[serde(default)]
    pub static_dir: Option<PathBuf>,

    /// Logging configuration (optional)
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Default for TomlConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            port: default_port(),
            api_url: default_api_url(),
            static_dir: None,
            logging: LoggingConfig::default(),
        }
    }
}

fn default_bind() -> String {
    DEFAULT_BIND.to_string()
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

fn default_api_url() -> String {
    DEFAULT_ARTISTS_URL.to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl TomlConfig {
    /// Load configuration from a TOML file
    ///
    /// A path that was asked for explicitly must exist; missing or malformed
    /// files are reported as [`Error::Config`].
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("Read {} failed: {}", path.display(), e)))?;
        Self::parse(&content)
            .map_err(|e| Error::Config(format!("Parse {} failed: {}", path.display(), e)))
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}
