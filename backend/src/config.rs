//! Backend configuration read from `PLANNER_*` environment variables.

use anyhow::{Context, Result};
use axum::http::HeaderValue;
use std::net::SocketAddr;
use std::path::PathBuf;

pub const BIND_ADDR_VAR: &str = "PLANNER_BIND_ADDR";
pub const DATA_DIR_VAR: &str = "PLANNER_DATA_DIR";
pub const ALLOWED_ORIGIN_VAR: &str = "PLANNER_ALLOWED_ORIGIN";
pub const FRONTEND_DIST_VAR: &str = "PLANNER_FRONTEND_DIST";

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
// Trunk dev server
const DEFAULT_ALLOWED_ORIGIN: &str = "http://localhost:8080";
const DEFAULT_FRONTEND_DIST: &str = "../frontend/dist";
const DATA_DIRECTORY_NAME: &str = "Activity Planner";

/// Runtime settings for the API server
#[derive(Debug, Clone)]
pub struct BackendConfig {
    pub bind_addr: SocketAddr,
    pub data_directory: PathBuf,
    pub allowed_origin: HeaderValue,
    pub frontend_dist: PathBuf,
}

impl BackendConfig {
    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup, applying defaults
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let value = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let bind_addr = value(BIND_ADDR_VAR)
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .parse::<SocketAddr>()
            .with_context(|| format!("{} must be a socket address like 127.0.0.1:3000", BIND_ADDR_VAR))?;

        let data_directory = match value(DATA_DIR_VAR) {
            Some(dir) => PathBuf::from(dir),
            None => Self::default_data_directory()?,
        };

        let allowed_origin = value(ALLOWED_ORIGIN_VAR)
            .unwrap_or_else(|| DEFAULT_ALLOWED_ORIGIN.to_string())
            .parse::<HeaderValue>()
            .with_context(|| format!("{} is not a valid header value", ALLOWED_ORIGIN_VAR))?;

        let frontend_dist = PathBuf::from(
            value(FRONTEND_DIST_VAR).unwrap_or_else(|| DEFAULT_FRONTEND_DIST.to_string()),
        );

        Ok(Self {
            bind_addr,
            data_directory,
            allowed_origin,
            frontend_dist,
        })
    }

    /// `~/Documents/Activity Planner`, falling back to the home directory
    pub fn default_data_directory() -> Result<PathBuf> {
        let documents_dir = dirs::document_dir()
            .or_else(|| dirs::home_dir().map(|home| home.join("Documents")))
            .context("Could not determine home directory")?;

        Ok(documents_dir.join(DATA_DIRECTORY_NAME))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_explicit_values() {
        let config = BackendConfig::from_lookup(lookup_from(&[
            (BIND_ADDR_VAR, "0.0.0.0:4000"),
            (DATA_DIR_VAR, "/tmp/planner"),
            (ALLOWED_ORIGIN_VAR, "https://planner.example"),
            (FRONTEND_DIST_VAR, "/srv/planner"),
        ]))
        .unwrap();

        assert_eq!(config.bind_addr, "0.0.0.0:4000".parse().unwrap());
        assert_eq!(config.data_directory, PathBuf::from("/tmp/planner"));
        assert_eq!(config.allowed_origin, "https://planner.example");
        assert_eq!(config.frontend_dist, PathBuf::from("/srv/planner"));
    }

    #[test]
    fn test_defaults_apply_for_missing_and_blank_values() {
        let config = BackendConfig::from_lookup(lookup_from(&[
            (DATA_DIR_VAR, "/tmp/planner"),
            (BIND_ADDR_VAR, "  "),
        ]))
        .unwrap();

        assert_eq!(config.bind_addr, DEFAULT_BIND_ADDR.parse().unwrap());
        assert_eq!(config.allowed_origin, DEFAULT_ALLOWED_ORIGIN);
        assert_eq!(config.frontend_dist, PathBuf::from(DEFAULT_FRONTEND_DIST));
    }

    #[test]
    fn test_invalid_bind_addr_is_an_error() {
        let result = BackendConfig::from_lookup(lookup_from(&[
            (DATA_DIR_VAR, "/tmp/planner"),
            (BIND_ADDR_VAR, "localhost"),
        ]));

        let message = format!("{:#}", result.unwrap_err());
        assert!(message.contains(BIND_ADDR_VAR));
    }
}
