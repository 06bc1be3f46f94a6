//! HTTP server command
//!
//! Resolves settings (flags > env > config file > defaults), connects the
//! store and runs the API until shutdown.

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};

use movies_server::db::{DEFAULT_DATABASE_URL, DEFAULT_MAX_CONNECTIONS};
use movies_server::{run_server, ServerConfig, Store};

use crate::config::{MoviesConfig, ServerSection};

/// Arguments for the serve command
#[derive(Parser, Debug, Default)]
pub struct ServeArgs {
    /// Address to bind to (default: 127.0.0.1:8000)
    #[arg(long, short = 'b', env = "MOVIES_BIND")]
    pub bind: Option<SocketAddr>,

    /// Database URL, e.g. sqlite://movies.db
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// Maximum pooled database connections
    #[arg(long)]
    pub max_connections: Option<u32>,

    /// Allow permissive CORS (all origins) - use with caution.
    /// `--cors-permissive false` overrides a config file that enables it
    #[arg(
        long,
        action = ArgAction::Set,
        num_args = 0..=1,
        default_missing_value = "true",
        value_name = "BOOL"
    )]
    pub cors_permissive: Option<bool>,

    /// Path to a TOML config file (default: ./movies.toml if present)
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,
}

/// Fully resolved serve settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServeSettings {
    pub bind: SocketAddr,
    pub database_url: String,
    pub max_connections: u32,
    pub cors_permissive: bool,
}

impl ServeSettings {
    pub fn resolve(args: &ServeArgs, file: &ServerSection) -> Self {
        let defaults = ServerConfig::default();
        Self {
            bind: args.bind.or(file.bind).unwrap_or(defaults.bind_addr),
            database_url: args
                .database_url
                .clone()
                .or_else(|| file.database_url.clone())
                .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_owned()),
            max_connections: args
                .max_connections
                .or(file.max_connections)
                .unwrap_or(DEFAULT_MAX_CONNECTIONS),
            cors_permissive: args
                .cors_permissive
                .or(file.cors_permissive)
                .unwrap_or(false),
        }
    }
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let file = MoviesConfig::load(args.config.as_deref())?;
    let settings = ServeSettings::resolve(&args, &file.server);

    tracing::info!(
        bind = %settings.bind,
        database_url = %settings.database_url,
        "Starting movies server"
    );

    let store = Store::connect_with_options(&settings.database_url, settings.max_connections)
        .await
        .with_context(|| format!("Failed to open database at {}", settings.database_url))?;

    let config = ServerConfig {
        bind_addr: settings.bind,
        cors_permissive: settings.cors_permissive,
    };

    // Run server (blocks until shutdown)
    run_server(store, config).await.context("Server error")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_nothing_is_set() {
        let settings = ServeSettings::resolve(&ServeArgs::default(), &ServerSection::default());
        assert_eq!(settings.bind, "127.0.0.1:8000".parse().unwrap());
        assert_eq!(settings.database_url, "sqlite://movies.db");
        assert_eq!(settings.max_connections, 5);
        assert!(!settings.cors_permissive);
    }

    #[test]
    fn file_fills_gaps_and_flags_win() {
        let args = ServeArgs {
            bind: Some("0.0.0.0:9999".parse().unwrap()),
            ..ServeArgs::default()
        };
        let file = ServerSection {
            bind: Some("0.0.0.0:7000".parse().unwrap()),
            database_url: Some("sqlite://file.db".into()),
            max_connections: Some(2),
            cors_permissive: Some(true),
        };

        let settings = ServeSettings::resolve(&args, &file);
        assert_eq!(settings.bind.port(), 9999);
        assert_eq!(settings.database_url, "sqlite://file.db");
        assert_eq!(settings.max_connections, 2);
        assert!(settings.cors_permissive);
    }

    #[test]
    fn cors_flag_overrides_file_in_both_directions() {
        let enabled = ServerSection {
            cors_permissive: Some(true),
            ..ServerSection::default()
        };
        let args = ServeArgs::try_parse_from(["serve", "--cors-permissive", "false"]).unwrap();
        assert_eq!(args.cors_permissive, Some(false));
        assert!(!ServeSettings::resolve(&args, &enabled).cors_permissive);

        let args = ServeArgs::try_parse_from(["serve", "--cors-permissive"]).unwrap();
        assert_eq!(args.cors_permissive, Some(true));
        assert!(ServeSettings::resolve(&args, &ServerSection::default()).cors_permissive);

        let args = ServeArgs::try_parse_from(["serve"]).unwrap();
        assert!(ServeSettings::resolve(&args, &enabled).cors_permissive);
    }
}
