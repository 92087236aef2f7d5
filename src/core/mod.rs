//! Core plumbing shared by the facade and the CLI.
//!
//! - `config`: where the Stats API lives, with environment overrides
//! - `http`: the single-attempt GET transport

pub mod config;
pub mod http;

pub use config::ApiConfig;
pub use http::{MlbResult, Transport};
