//! CLI argument definitions and parsing.

pub mod types;

use crate::{core::config::HOST_ENV_VAR, stats::StatGroup};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use types::{GamePk, PersonId, Season, SportId, TeamId};

/// Stat types and groups shared by the player and team stats commands
#[derive(Debug, Args)]
pub struct StatsArgs {
    /// Stat group (repeatable): `-g hitting -g pitching`.
    #[clap(short = 'g', long = "group", required = true)]
    pub groups: Vec<StatGroup>,

    /// Stat type (repeatable): `-t season -t career`.
    #[clap(short = 't', long = "type", required = true)]
    pub stat_types: Vec<String>,

    /// Season year (e.g. 2022).
    #[clap(long, short)]
    pub season: Option<Season>,

    /// Keep splits that do not match their contract as opaque records instead of failing.
    #[clap(long)]
    pub lenient: bool,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Look up one person by ID
    Person {
        #[clap(long)]
        id: PersonId,
    },

    /// Look up one team by ID
    Team {
        #[clap(long)]
        id: TeamId,
    },

    /// List every sport, or the players of one sport with `--players`
    Sports {
        /// List the players of this sport instead.
        #[clap(long)]
        players: Option<SportId>,
    },

    /// List every league, or look up one with `--id`
    Leagues {
        #[clap(long)]
        id: Option<i64>,
    },

    /// Resolve player, team or sport names to IDs
    Find {
        /// Full name of a player.
        #[clap(long, conflicts_with_all = ["team", "sport_name"])]
        player: Option<String>,

        /// Full name of an MLB team.
        #[clap(long, conflicts_with = "sport_name")]
        team: Option<String>,

        /// Name of a sport.
        #[clap(long)]
        sport_name: Option<String>,

        /// Sport whose rosters are searched for `--player`.
        #[clap(long, default_value_t = SportId::default())]
        sport: SportId,
    },

    /// Get a player's stats.
    ///
    /// Queries `/people/{id}/stats?stats=..&group=..` and decodes each split
    /// into the record type registered for its stat type and group.
    PlayerStats {
        #[clap(long)]
        id: PersonId,

        #[clap(flatten)]
        stats: StatsArgs,
    },

    /// Get a team's stats
    TeamStats {
        #[clap(long)]
        id: TeamId,

        #[clap(flatten)]
        stats: StatsArgs,
    },

    /// Get one player's stats for one game
    GameStats {
        #[clap(long)]
        person: PersonId,

        #[clap(long)]
        game: GamePk,
    },

    /// Get the play-by-play feed of a game
    Plays {
        #[clap(long)]
        game: GamePk,
    },

    /// Decode a saved stats response without touching the network
    Decode {
        /// Path to a JSON file holding a `{"stats": [...]}` response.
        #[clap(long)]
        file: PathBuf,

        #[clap(long)]
        lenient: bool,
    },
}

#[derive(Debug, Parser)]
#[clap(name = "mlb-stats", about = "Typed MLB Stats API client", version)]
pub struct MlbCli {
    /// Stats API host, optionally with a scheme.
    #[clap(long, global = true, env = HOST_ENV_VAR)]
    pub host: Option<String>,

    /// Log requests and decode fallbacks at debug level.
    #[clap(long, short, global = true)]
    pub verbose: bool,

    #[clap(subcommand)]
    pub command: Commands,
}
