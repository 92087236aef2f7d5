//! Typed records for the MLB Stats API and the decoding boundary that builds them.

pub mod base;
pub mod decode;
pub mod game;
pub mod leaf;
pub mod people;
pub mod play;
pub mod teams;

pub use base::StatsBase;
pub use decode::{normalize_keys, Decode, Nested};
pub use game::{Game, Play, PlayAbout, PlayMatchup, PlayResult, Plays};
pub use leaf::{Chart, CodeDesc, Count, HitCoordinates, PitchBreak, PitchCoordinates, Zone};
pub use people::{Person, Position};
pub use play::{HitData, PitchData, PlayDetails, PlayEvent};
pub use teams::{League, Sport, Team};
