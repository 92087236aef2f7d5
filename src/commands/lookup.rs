//! Person, team, sport and league lookups

use tracing::warn;

use super::common::print_json;
use crate::{
    api::Mlb,
    cli::types::{PersonId, SportId, TeamId},
    Result,
};

/// Handle the person command
pub async fn handle_person(mlb: &Mlb, id: PersonId) -> Result<()> {
    let person = mlb.get_person(id.as_i64()).await?;
    if person.is_none() {
        warn!(%id, "no such person");
    }
    print_json(&person)
}

/// Handle the team command
pub async fn handle_team(mlb: &Mlb, id: TeamId) -> Result<()> {
    let team = mlb.get_team(id.as_i64()).await?;
    if team.is_none() {
        warn!(%id, "no such team");
    }
    print_json(&team)
}

/// Handle the sports command: all sports, or one sport's players.
pub async fn handle_sports(mlb: &Mlb, players: Option<SportId>) -> Result<()> {
    match players {
        Some(sport) => print_json(&mlb.get_people(sport.as_i64()).await?),
        None => print_json(&mlb.get_sports().await?),
    }
}

pub async fn handle_leagues(mlb: &Mlb, id: Option<i64>) -> Result<()> {
    match id {
        Some(id) => print_json(&mlb.get_league(id).await?),
        None => print_json(&mlb.get_leagues().await?),
    }
}

/// What the find command is resolving.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FindTarget {
    Player { full_name: String, sport: SportId },
    Team(String),
    Sport(String),
}

impl FindTarget {
    /// Pick the target from the mutually exclusive name flags.
    pub fn from_flags(
        player: Option<String>,
        team: Option<String>,
        sport_name: Option<String>,
        sport: SportId,
    ) -> Option<Self> {
        match (player, team, sport_name) {
            (Some(full_name), _, _) => Some(Self::Player { full_name, sport }),
            (None, Some(team), _) => Some(Self::Team(team)),
            (None, None, Some(name)) => Some(Self::Sport(name)),
            (None, None, None) => None,
        }
    }
}

/// Handle the find command, printing the matching IDs
pub async fn handle_find(mlb: &Mlb, target: FindTarget) -> Result<()> {
    let ids = match &target {
        FindTarget::Player { full_name, sport } => {
            mlb.get_people_id(full_name, sport.as_i64()).await?
        }
        FindTarget::Team(name) => mlb.get_team_id(name).await?,
        FindTarget::Sport(name) => mlb.get_sport_id(name).await?,
    };
    if ids.is_empty() {
        warn!(?target, "no matches");
    }
    print_json(&ids)
}
