//! Player, team and game stats commands

use tracing::{debug, warn};

use super::common::{print_json, stats_query};
use crate::{
    api::Mlb,
    cli::{
        types::{GamePk, PersonId, TeamId},
        StatsArgs,
    },
    stats::GroupedStats,
    Result,
};

fn report(stats: &GroupedStats) {
    if stats.is_empty() {
        warn!("no stats returned");
        return;
    }
    for group in stats.groups() {
        if let Some(types) = stats.group(group) {
            for (tag, splits) in types {
                let opaque = splits.iter().filter(|s| s.is_opaque()).count();
                debug!(%group, stat_type = %tag, splits = splits.len(), opaque, "decoded");
            }
        }
    }
}

/// Handle the player stats command
pub async fn handle_player_stats(mlb: &Mlb, id: PersonId, args: &StatsArgs) -> Result<()> {
    let stats = mlb.get_player_stats(id.as_i64(), &stats_query(args)).await?;
    report(&stats);
    print_json(&stats)
}

/// Handle the team stats command
pub async fn handle_team_stats(mlb: &Mlb, id: TeamId, args: &StatsArgs) -> Result<()> {
    let stats = mlb.get_team_stats(id.as_i64(), &stats_query(args)).await?;
    report(&stats);
    print_json(&stats)
}

pub async fn handle_game_stats(mlb: &Mlb, person: PersonId, game: GamePk) -> Result<()> {
    let stats = mlb
        .get_players_stats_for_game(person.as_i64(), game.as_i64())
        .await?;
    report(&stats);
    print_json(&stats)
}

/// Handle the plays command
pub async fn handle_plays(mlb: &Mlb, game: GamePk) -> Result<()> {
    let plays = mlb.get_game_play_by_play(game.as_i64()).await?;
    match &plays {
        Some(plays) => debug!(%game, plays = plays.all_plays.len(), "play-by-play"),
        None => warn!(%game, "no play-by-play feed"),
    }
    print_json(&plays)
}
