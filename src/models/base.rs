//! Context shared by every statistics split.

use super::decode::{Decode, Fields, Nested};
use super::people::Person;
use super::teams::{League, Sport, Team};
use crate::error::ShapeError;
use serde::Serialize;


/// Team, player, league and sport a split belongs to. Any of them may be
/// absent; a split with none of them is still valid.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StatsBase {
    pub team: Option<Team>,
    pub player: Option<Person>,
    pub league: Option<League>,
    pub sport: Option<Sport>,
}

impl StatsBase {
    /// Assemble a base from parts that may already be decoded.
    pub fn from_parts(
        team: Nested<Team>,
        player: Nested<Person>,
        league: Nested<League>,
        sport: Nested<Sport>,
    ) -> Result<Self, ShapeError> {
        Ok(Self {
            team: Team::from_nested(team).map_err(|e| e.within("team"))?,
            player: Person::from_nested(player).map_err(|e| e.within("player"))?,
            league: League::from_nested(league).map_err(|e| e.within("league"))?,
            sport: Sport::from_nested(sport).map_err(|e| e.within("sport"))?,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.team.is_none()
            && self.player.is_none()
            && self.league.is_none()
            && self.sport.is_none()
    }
}

impl Decode for StatsBase {
    const TYPE_NAME: &'static str = "StatsBase";

    fn decode_fields(f: &Fields<'_>) -> Result<Self, ShapeError> {
        Ok(Self {
            team: f.nested("team")?,
            player: f.nested("player")?,
            league: f.nested("league")?,
            sport: f.nested("sport")?,
        })
    }
}
