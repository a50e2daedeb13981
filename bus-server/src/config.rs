//! Server configuration from environment variables.

use std::net::SocketAddr;
use std::path::PathBuf;

use crate::store::SupabaseConfig;

/// Default listen address.
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

/// Error returned when the environment does not describe a usable setup.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// No data source configured
    #[error("no data source: set SUPABASE_URL and SUPABASE_ANON_KEY, or BUS_DATA_FILE")]
    NoBackend,

    /// Supabase URL given without a key
    #[error("SUPABASE_URL is set but SUPABASE_ANON_KEY is missing")]
    MissingAnonKey,

    /// Listen address could not be parsed
    #[error("invalid BUS_BIND_ADDR {0:?}")]
    InvalidBindAddr(String),
}

/// Where stops and routes are read from.
#[derive(Debug, Clone)]
pub enum BackendConfig {
    /// Supabase REST API
    Supabase(SupabaseConfig),
    /// Local JSON snapshot
    File(PathBuf),
}

/// Configuration for the HTTP server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to listen on
    pub bind_addr: SocketAddr,
    /// Data source
    pub backend: BackendConfig,
}

impl ServerConfig {
    /// Read configuration from the process environment.
    ///
    /// | Variable | Meaning |
    /// | --- | --- |
    /// | `BUS_BIND_ADDR` | listen address, default `127.0.0.1:3000` |
    /// | `SUPABASE_URL` | Supabase project URL |
    /// | `SUPABASE_ANON_KEY` | Supabase anonymous key |
    /// | `BUS_DATA_FILE` | JSON snapshot, used when Supabase is not configured |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let bind_addr = var("BUS_BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_addr
            .parse()
            .map_err(|_| ConfigError::InvalidBindAddr(bind_addr.clone()))?;

        let backend = match (var("SUPABASE_URL"), var("SUPABASE_ANON_KEY"), var("BUS_DATA_FILE")) {
            (Some(url), Some(key), _) => BackendConfig::Supabase(SupabaseConfig::new(url, key)),
            (Some(_), None, _) => return Err(ConfigError::MissingAnonKey),
            (None, _, Some(path)) => BackendConfig::File(PathBuf::from(path)),
            (None, _, None) => return Err(ConfigError::NoBackend),
        };

        Ok(Self { bind_addr, backend })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn supabase_backend() {
        let config = config(&[
            ("SUPABASE_URL", "https://example.supabase.co"),
            ("SUPABASE_ANON_KEY", "anon"),
        ])
        .unwrap();

        assert_eq!(config.bind_addr, "127.0.0.1:3000".parse().unwrap());
        match config.backend {
            BackendConfig::Supabase(supabase) => {
                assert_eq!(supabase.base_url, "https://example.supabase.co");
                assert_eq!(supabase.anon_key, "anon");
            }
            other => panic!("expected Supabase backend, got {other:?}"),
        }
    }

    #[test]
    fn supabase_takes_precedence_over_file() {
        let config = config(&[
            ("SUPABASE_URL", "https://example.supabase.co"),
            ("SUPABASE_ANON_KEY", "anon"),
            ("BUS_DATA_FILE", "network.json"),
        ])
        .unwrap();

        assert!(matches!(config.backend, BackendConfig::Supabase(_)));
    }

    #[test]
    fn file_backend_and_custom_addr() {
        let config = config(&[
            ("BUS_DATA_FILE", "data/network.json"),
            ("BUS_BIND_ADDR", "0.0.0.0:8080"),
        ])
        .unwrap();

        assert_eq!(config.bind_addr, "0.0.0.0:8080".parse().unwrap());
        match config.backend {
            BackendConfig::File(path) => assert_eq!(path, PathBuf::from("data/network.json")),
            other => panic!("expected file backend, got {other:?}"),
        }
    }

    #[test]
    fn missing_backend() {
        assert_eq!(config(&[]).unwrap_err(), ConfigError::NoBackend);
        assert_eq!(
            config(&[("SUPABASE_URL", "  ")]).unwrap_err(),
            ConfigError::NoBackend
        );
    }

    #[test]
    fn missing_anon_key() {
        assert_eq!(
            config(&[("SUPABASE_URL", "https://example.supabase.co")]).unwrap_err(),
            ConfigError::MissingAnonKey
        );
    }

    #[test]
    fn invalid_bind_addr() {
        assert_eq!(
            config(&[("BUS_DATA_FILE", "n.json"), ("BUS_BIND_ADDR", "localhost")]).unwrap_err(),
            ConfigError::InvalidBindAddr("localhost".to_string())
        );
    }
}
