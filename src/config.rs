// Runtime configuration from environment variables
//
//   PETS_BIND_ADDR  server listen address (default 0.0.0.0:3000)
//   PETS_DATA       JSON dataset replacing the built-in pets
//   RUST_LOG        tracing filter

use crate::catalog::Catalog;
use crate::error::CatalogError;
use std::path::PathBuf;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub bind_addr: String,
    pub data_path: Option<PathBuf>,
    pub log_filter: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            data_path: None,
            log_filter: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            bind_addr: get("PETS_BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string()),
            data_path: get("PETS_DATA").map(PathBuf::from),
            log_filter: get("RUST_LOG"),
        }
    }

    /// The configured dataset, or the built-in pets
    pub fn load_catalog(&self) -> Result<Catalog, CatalogError> {
        match &self.data_path {
            Some(path) => Catalog::from_json_file(path),
            None => Ok(Catalog::builtin()),
        }
    }

    /// Install the global tracing subscriber, falling back to `default_filter`
    pub fn init_tracing(&self, default_filter: &str) {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        let (filter, rejected) = self.env_filter(default_filter);

        // try_init: tests and repeated calls may already have a subscriber
        let _ = tracing_subscriber::registry()
            .with(fmt::layer().with_writer(std::io::stderr))
            .with(filter)
            .try_init();

        if let Some((filter, err)) = rejected {
            tracing::warn!(filter = %filter, %err, default_filter, "invalid RUST_LOG, using default filter");
        }
    }

    /// The configured filter, or `default_filter` plus the rejected filter and its error
    fn env_filter(
        &self,
        default_filter: &str,
    ) -> (
        tracing_subscriber::EnvFilter,
        Option<(String, tracing_subscriber::filter::ParseError)>,
    ) {
        use tracing_subscriber::EnvFilter;

        match self.log_filter.as_deref().map(EnvFilter::try_new) {
            Some(Ok(filter)) => (filter, None),
            Some(Err(err)) => (
                EnvFilter::new(default_filter),
                self.log_filter.clone().map(|f| (f, err)),
            ),
            None => (EnvFilter::new(default_filter), None),
        }
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
    fn test_defaults() {
        let config = Config::from_lookup(|_| None);

        assert_eq!(config, Config::default());
        assert_eq!(config.bind_addr, "0.0.0.0:3000");
        assert!(config.data_path.is_none());
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("PETS_BIND_ADDR", "127.0.0.1:8080"),
            ("PETS_DATA", "/tmp/pets.json"),
            ("RUST_LOG", "debug"),
        ]));

        assert_eq!(config.bind_addr, "127.0.0.1:8080");
        assert_eq!(config.data_path, Some(PathBuf::from("/tmp/pets.json")));
        assert_eq!(config.log_filter.as_deref(), Some("debug"));
    }

    #[test]
    fn test_empty_values_are_unset() {
        let config = Config::from_lookup(lookup_from(&[("PETS_BIND_ADDR", "  "), ("PETS_DATA", "")]));

        assert_eq!(config.bind_addr, DEFAULT_BIND_ADDR);
        assert!(config.data_path.is_none());
    }

    #[test]
    fn test_invalid_log_filter_is_reported() {
        let config = Config::from_lookup(lookup_from(&[("RUST_LOG", "pets=verbose")]));

        let (_, rejected) = config.env_filter("warn");
        let (filter, _) = rejected.expect("filter should be rejected");
        assert_eq!(filter, "pets=verbose");

        let config = Config::from_lookup(lookup_from(&[("RUST_LOG", "debug")]));
        assert!(config.env_filter("warn").1.is_none());
        assert!(Config::default().env_filter("warn").1.is_none());
    }

    #[test]
    fn test_load_builtin_catalog() {
        let catalog = Config::default().load_catalog().unwrap();
        assert_eq!(catalog.len(), 6);
    }

    #[test]
    fn test_load_missing_dataset_fails() {
        let config = Config {
            data_path: Some(PathBuf::from("/nonexistent/pets.json")),
            ..Config::default()
        };

        assert!(config.load_catalog().is_err());
    }
}
