//! Application configuration.
//!
//! Settings are read from environment variables. Every setting has a
//! default, so the server starts with no configuration at all.

use std::net::SocketAddr;
use std::path::PathBuf;

use crate::planner::SearchConfig;

/// Default listen address.
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

/// Error from reading configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A variable is set but its value cannot be used
    #[error("invalid value for {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}

/// Configuration for the server binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Address to listen on (`BIND_ADDR`).
    pub bind_addr: SocketAddr,

    /// JSON file of routes to load at startup (`ROUTES_FILE`).
    /// The sample graph is used when unset.
    pub routes_file: Option<PathBuf>,

    /// Planner limits (`PLANNER_MAX_STOPS`, `PLANNER_MAX_JOURNEYS`).
    pub search: SearchConfig,
}

impl AppConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration using `lookup` to fetch each variable.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind_addr = match lookup("BIND_ADDR") {
            Some(value) => parse("BIND_ADDR", value)?,
            None => parse("BIND_ADDR", DEFAULT_BIND_ADDR.to_string())?,
        };

        let routes_file = lookup("ROUTES_FILE")
            .filter(|s| !s.is_empty())
            .map(PathBuf::from);

        let max_stops = lookup("PLANNER_MAX_STOPS")
            .map(|v| parse_positive("PLANNER_MAX_STOPS", v))
            .transpose()?;
        let max_journeys = lookup("PLANNER_MAX_JOURNEYS")
            .map(|v| parse_positive("PLANNER_MAX_JOURNEYS", v))
            .transpose()?;

        Ok(Self {
            bind_addr,
            routes_file,
            search: SearchConfig::new(max_stops, max_journeys),
        })
    }
}

fn parse<T: std::str::FromStr>(key: &'static str, value: String) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::Invalid { key, value })
}

fn parse_positive(key: &'static str, value: String) -> Result<usize, ConfigError> {
    match parse::<usize>(key, value.clone())? {
        0 => Err(ConfigError::Invalid { key, value }),
        n => Ok(n),
    }
}
