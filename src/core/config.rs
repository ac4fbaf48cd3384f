//! Static host configuration from environment variables.
//!
//! Load configuration using `SiteConfig::from_env()` after calling `dotenvy::dotenv()`.

use std::net::SocketAddr;
use std::path::PathBuf;

pub const DEFAULT_SITE_ADDR: &str = "127.0.0.1:3000";
pub const DEFAULT_SITE_ROOT: &str = "dist";
pub const DEFAULT_SITE_INDEX: &str = "index.html";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("SITE_ADDR '{value}' is not a valid socket address: {source}")]
    InvalidAddr {
        value: String,
        source: std::net::AddrParseError,
    },
}

/// Static host configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    /// Address to listen on
    /// Example: 0.0.0.0:8080
    pub addr: SocketAddr,

    /// Directory holding the compiled bundle (Trunk's `dist`)
    pub root: PathBuf,

    /// Document served for any path that is not a file under `root`
    pub index: String,
}

impl SiteConfig {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable source; unset or blank values take defaults
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str, default: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        let addr_value = var("SITE_ADDR", DEFAULT_SITE_ADDR);
        let addr = addr_value
            .parse()
            .map_err(|source| ConfigError::InvalidAddr {
                value: addr_value.clone(),
                source,
            })?;

        Ok(Self {
            addr,
            root: PathBuf::from(var("SITE_ROOT", DEFAULT_SITE_ROOT)),
            index: var("SITE_INDEX", DEFAULT_SITE_INDEX),
        })
    }

    /// Full path of the fallback document
    pub fn index_path(&self) -> PathBuf {
        self.root.join(&self.index)
    }

    /// Check whether the bundle has been built
    pub fn has_bundle(&self) -> bool {
        self.index_path().is_file()
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            root: PathBuf::from(DEFAULT_SITE_ROOT),
            index: DEFAULT_SITE_INDEX.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    // Lookup-based tests: no process env mutation, so they are thread safe

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = SiteConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, SiteConfig::default());
        assert_eq!(config.addr.to_string(), DEFAULT_SITE_ADDR);
        assert_eq!(config.index_path(), PathBuf::from("dist/index.html"));
    }

    #[test]
    fn test_all_fields_overridden() {
        let config = SiteConfig::from_lookup(lookup(&[
            ("SITE_ADDR", "0.0.0.0:8080"),
            ("SITE_ROOT", "/srv/site"),
            ("SITE_INDEX", "app.html"),
        ]))
        .unwrap();

        assert_eq!(config.addr.port(), 8080);
        assert_eq!(config.root, PathBuf::from("/srv/site"));
        assert_eq!(config.index, "app.html");
        assert_eq!(config.index_path(), PathBuf::from("/srv/site/app.html"));
    }

    #[test]
    fn test_blank_values_use_defaults() {
        let config =
            SiteConfig::from_lookup(lookup(&[("SITE_ROOT", "  "), ("SITE_ADDR", "")])).unwrap();
        assert_eq!(config.root, PathBuf::from(DEFAULT_SITE_ROOT));
        assert_eq!(config.addr.to_string(), DEFAULT_SITE_ADDR);
    }

    #[test]
    fn test_invalid_addr() {
        let err = SiteConfig::from_lookup(lookup(&[("SITE_ADDR", "localhost")])).unwrap_err();
        match err {
            ConfigError::InvalidAddr { ref value, .. } => assert_eq!(value, "localhost"),
        }
        assert!(err.to_string().starts_with("SITE_ADDR 'localhost'"));
    }

    #[test]
    fn test_missing_bundle() {
        let config = SiteConfig {
            root: PathBuf::from("/definitely/not/a/real/dir"),
            ..SiteConfig::default()
        };
        assert!(!config.has_bundle());
    }
}
