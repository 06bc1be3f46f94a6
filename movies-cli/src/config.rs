//! File-based configuration
//!
//! Optional TOML file, `movies.toml` in the working directory by default:
//!
//! ```toml
//! [server]
//! bind = "0.0.0.0:8000"
//! database_url = "sqlite://data/movies.db"
//! max_connections = 5
//! cors_permissive = false
//! ```
//!
//! Every key is optional. CLI flags and environment variables take
//! precedence over the file.

use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Default config file, looked up relative to the working directory
pub const DEFAULT_CONFIG_FILE: &str = "movies.toml";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MoviesConfig {
    pub server: ServerSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerSection {
    pub bind: Option<SocketAddr>,
    pub database_url: Option<String>,
    pub max_connections: Option<u32>,
    pub cors_permissive: Option<bool>,
}

impl MoviesConfig {
    /// Load config from an explicit path, or from `movies.toml` if present.
    ///
    /// An explicit path must exist; the default file is optional.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                let default = PathBuf::from(DEFAULT_CONFIG_FILE);
                if default.exists() {
                    Self::from_file(&default)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file (invalid TOML): {}", path.display()))
    }
}
