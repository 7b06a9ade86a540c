// src/config.rs
//! Client configuration, loadable from the environment.

use crate::utils::default_cache_path;
use std::env;
use std::path::PathBuf;

pub const DEFAULT_BASE_URL: &str = "https://www.reddit.com";
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;
pub const DEFAULT_USER_AGENT: &str = concat!("snoocache/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Upstream host, overridable for tests and mirrors.
    pub base_url: String,
    /// Location of the persistent cache file.
    pub cache_path: PathBuf,
    pub request_timeout_ms: u64,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            cache_path: default_cache_path(),
            request_timeout_ms: DEFAULT_TIMEOUT_MS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl ClientConfig {
    pub fn from_env() -> Self {
        Self {
            base_url: env::var("SNOOCACHE_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
            cache_path: env::var("SNOOCACHE_CACHE_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| default_cache_path()),
            request_timeout_ms: env::var("SNOOCACHE_TIMEOUT_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_TIMEOUT_MS),
            user_agent: env::var("SNOOCACHE_USER_AGENT")
                .unwrap_or_else(|_| DEFAULT_USER_AGENT.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_reddit_and_temp_dir() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "https://www.reddit.com");
        assert_eq!(config.cache_path, default_cache_path());
        assert_eq!(config.request_timeout_ms, DEFAULT_TIMEOUT_MS);
        assert!(config.user_agent.starts_with("snoocache/"));
    }
}
