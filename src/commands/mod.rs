//! Command implementations for the MLB Stats CLI

pub mod common;
pub mod decode;
pub mod lookup;
pub mod stats;

use crate::{api::Mlb, core::ApiConfig, Result};

/// Build the client from `MLB_STATS_*` settings; a `--host` flag wins over them.
pub fn resolve_client(host: Option<String>) -> Result<Mlb> {
    Mlb::new(resolve_config(host))
}

pub fn resolve_config(host: Option<String>) -> ApiConfig {
    let config = ApiConfig::from_env();
    match host.filter(|h| !h.trim().is_empty()) {
        Some(host) => config.with_host(host.trim()),
        None => config,
    }
}
