//! Client configuration: where the Stats API lives and how long to wait for it.

use std::time::Duration;

pub const DEFAULT_HOST: &str = "statsapi.mlb.com";
pub const DEFAULT_VERSION: &str = "v1";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

pub const HOST_ENV_VAR: &str = "MLB_STATS_HOST";
pub const VERSION_ENV_VAR: &str = "MLB_STATS_API_VERSION";
pub const TIMEOUT_ENV_VAR: &str = "MLB_STATS_TIMEOUT_SECS";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Host name, optionally with a scheme (`http://127.0.0.1:8080`).
    pub host: String,
    pub version: String,
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            version: DEFAULT_VERSION.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: concat!("mlb-stats/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl ApiConfig {
    /// Defaults, overridden by `MLB_STATS_*` environment variables when set.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(host) = lookup(HOST_ENV_VAR).filter(|h| !h.trim().is_empty()) {
            config.host = host.trim().to_string();
        }
        if let Some(version) = lookup(VERSION_ENV_VAR).filter(|v| !v.trim().is_empty()) {
            config.version = version.trim().to_string();
        }
        if let Some(secs) = lookup(TIMEOUT_ENV_VAR).and_then(|s| s.trim().parse().ok()) {
            config.timeout = Duration::from_secs(secs);
        }
        config
    }

    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// `https://{host}/api/{version}`, keeping the scheme if `host` has one.
    pub fn base_url(&self) -> String {
        let host = self.host.trim_end_matches('/');
        if host.starts_with("http://") || host.starts_with("https://") {
            format!("{host}/api/{}", self.version)
        } else {
            format!("https://{host}/api/{}", self.version)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_default_base_url() {
        assert_eq!(
            ApiConfig::default().base_url(),
            "https://statsapi.mlb.com/api/v1"
        );
    }

    #[test]
    fn test_host_with_scheme() {
        let config = ApiConfig::default().with_host("http://127.0.0.1:4321/");
        assert_eq!(config.base_url(), "http://127.0.0.1:4321/api/v1");
    }

    #[test]
    fn test_env_overrides() {
        let config = ApiConfig::from_lookup(lookup(&[
            (HOST_ENV_VAR, "stats.example.com"),
            (VERSION_ENV_VAR, "v1.1"),
            (TIMEOUT_ENV_VAR, "3"),
        ]));

        assert_eq!(config.base_url(), "https://stats.example.com/api/v1.1");
        assert_eq!(config.timeout, Duration::from_secs(3));
    }

    #[test]
    fn test_blank_or_bad_env_values_are_ignored() {
        let config = ApiConfig::from_lookup(lookup(&[
            (HOST_ENV_VAR, "  "),
            (TIMEOUT_ENV_VAR, "soon"),
        ]));

        assert_eq!(config, ApiConfig::default());
    }
}
