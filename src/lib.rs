//! MLB Stats API Library
//!
//! A typed Rust client for the public MLB Stats API: fetch people, teams,
//! sports, leagues, play-by-play feeds and statistics, and decode them into
//! records whose field contracts are checked at the boundary.
//!
//! ## Features
//!
//! - **Typed Records**: people, teams, play events and pitch data with mandatory fields enforced
//! - **Statistics Splits**: one record type per stat-type contract, chosen by group and stat type
//! - **Strict or Lenient Decoding**: fail on the first bad split, or keep it as an opaque record
//! - **Offline Decoding**: decode saved responses with no network access
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use mlb_stats::{api::StatsQuery, Mlb, StatGroup};
//!
//! # async fn example() -> mlb_stats::Result<()> {
//! let mlb = Mlb::from_env()?;
//! let query = StatsQuery::new(["season", "career"], [StatGroup::Hitting]).season(2022);
//! let stats = mlb.get_player_stats(664034, &query).await?;
//!
//! for split in stats.get(StatGroup::Hitting, "season").unwrap_or_default() {
//!     println!("{:?} {:?}", split.season(), split.stat_line());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! Point the client somewhere else (a mock server, a proxy) without code changes:
//! ```bash
//! export MLB_STATS_HOST=http://127.0.0.1:8080
//! export MLB_STATS_TIMEOUT_SECS=30
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod core;
pub mod error;
pub mod models;
pub mod stats;

// Re-export commonly used types
pub use api::{Mlb, StatsQuery};
pub use cli::types::{GamePk, PersonId, Season, SportId, TeamId};
pub use crate::core::config::{HOST_ENV_VAR, TIMEOUT_ENV_VAR, VERSION_ENV_VAR};
pub use error::{MlbError, Result, ShapeError, ShapeErrorKind};
pub use stats::{DecodePolicy, GroupedStats, Split, StatGroup};
