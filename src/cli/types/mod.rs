//! Type-safe wrappers for CLI arguments.

pub mod ids;
pub mod time;

pub use ids::{GamePk, PersonId, SportId, TeamId};
pub use time::Season;
