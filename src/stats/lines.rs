//! Flat stat blocks, one per stat group and detail level.
//!
//! Counting stats are integers; rate stats (`avg`, `era`, percentages...) are
//! kept as the strings the API formats them as (`".287"`, `"-.--"`).

use super::group::StatGroup;
use crate::error::ShapeError;
use crate::models::decode::{empty_as_none, flat_decode, Decode, Fields};
use crate::models::{Position, Zone};
use serde::{Deserialize, Serialize};

/// Declares a stat block whose fields are all optional, with the API key each reads from.
macro_rules! stat_block {
    ($(#[$meta:meta])* $name:ident { $($field:ident: $ty:ty = $key:literal),* $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
        pub struct $name {
            $(
                #[serde(rename = $key, skip_serializing_if = "Option::is_none")]
                pub $field: Option<$ty>,
            )*
        }

        flat_decode!($name, []);
    };
}

stat_block! {
    /// Standard batting line.
    HittingStats {
        games_played: i64 = "gamesplayed",
        plate_appearances: i64 = "plateappearances",
        at_bats: i64 = "atbats",
        runs: i64 = "runs",
        hits: i64 = "hits",
        doubles: i64 = "doubles",
        triples: i64 = "triples",
        home_runs: i64 = "homeruns",
        rbi: i64 = "rbi",
        strikeouts: i64 = "strikeouts",
        base_on_balls: i64 = "baseonballs",
        intentional_walks: i64 = "intentionalwalks",
        hit_by_pitch: i64 = "hitbypitch",
        stolen_bases: i64 = "stolenbases",
        caught_stealing: i64 = "caughtstealing",
        ground_outs: i64 = "groundouts",
        air_outs: i64 = "airouts",
        ground_into_double_play: i64 = "groundintodoubleplay",
        number_of_pitches: i64 = "numberofpitches",
        total_bases: i64 = "totalbases",
        left_on_base: i64 = "leftonbase",
        sac_bunts: i64 = "sacbunts",
        sac_flies: i64 = "sacflies",
        catchers_interference: i64 = "catchersinterference",
        avg: String = "avg",
        obp: String = "obp",
        slg: String = "slg",
        ops: String = "ops",
        babip: String = "babip",
        stolen_base_percentage: String = "stolenbasepercentage",
        ground_outs_to_air_outs: String = "groundoutstoairouts",
        at_bats_per_home_run: String = "atbatsperhomerun",
    }
}

stat_block! {
    /// Batted ball and plate discipline breakdown for hitters.
    AdvancedHittingStats {
        plate_appearances: i64 = "plateappearances",
        total_bases: i64 = "totalbases",
        left_on_base: i64 = "leftonbase",
        sac_bunts: i64 = "sacbunts",
        sac_flies: i64 = "sacflies",
        extra_base_hits: i64 = "extrabasehits",
        hit_by_pitch: i64 = "hitbypitch",
        gidp: i64 = "gidp",
        gidp_opp: i64 = "gidpopp",
        number_of_pitches: i64 = "numberofpitches",
        reached_on_error: i64 = "reachedonerror",
        walkoffs: i64 = "walkoffs",
        fly_outs: i64 = "flyouts",
        pop_outs: i64 = "popouts",
        line_outs: i64 = "lineouts",
        ground_outs: i64 = "groundouts",
        fly_hits: i64 = "flyhits",
        pop_hits: i64 = "pophits",
        line_hits: i64 = "linehits",
        ground_hits: i64 = "groundhits",
        total_swings: i64 = "totalswings",
        swing_and_misses: i64 = "swingandmisses",
        balls_in_play: i64 = "ballsinplay",
        babip: String = "babip",
        iso: String = "iso",
        pitches_per_plate_appearance: String = "pitchesperplateappearance",
        walks_per_plate_appearance: String = "walksperplateappearance",
        strikeouts_per_plate_appearance: String = "strikeoutsperplateappearance",
        home_runs_per_plate_appearance: String = "homerunsperplateappearance",
        walks_per_strikeout: String = "walksperstrikeout",
    }
}

stat_block! {
    /// Standard pitching line.
    PitchingStats {
        games_played: i64 = "gamesplayed",
        games_started: i64 = "gamesstarted",
        games_pitched: i64 = "gamespitched",
        games_finished: i64 = "gamesfinished",
        complete_games: i64 = "completegames",
        shutouts: i64 = "shutouts",
        wins: i64 = "wins",
        losses: i64 = "losses",
        saves: i64 = "saves",
        save_opportunities: i64 = "saveopportunities",
        holds: i64 = "holds",
        blown_saves: i64 = "blownsaves",
        outs: i64 = "outs",
        batters_faced: i64 = "battersfaced",
        at_bats: i64 = "atbats",
        runs: i64 = "runs",
        earned_runs: i64 = "earnedruns",
        hits: i64 = "hits",
        doubles: i64 = "doubles",
        triples: i64 = "triples",
        home_runs: i64 = "homeruns",
        strikeouts: i64 = "strikeouts",
        base_on_balls: i64 = "baseonballs",
        intentional_walks: i64 = "intentionalwalks",
        hit_by_pitch: i64 = "hitbypitch",
        hit_batsmen: i64 = "hitbatsmen",
        ground_outs: i64 = "groundouts",
        air_outs: i64 = "airouts",
        ground_into_double_play: i64 = "groundintodoubleplay",
        number_of_pitches: i64 = "numberofpitches",
        strikes: i64 = "strikes",
        balks: i64 = "balks",
        wild_pitches: i64 = "wildpitches",
        pickoffs: i64 = "pickoffs",
        stolen_bases: i64 = "stolenbases",
        caught_stealing: i64 = "caughtstealing",
        total_bases: i64 = "totalbases",
        sac_bunts: i64 = "sacbunts",
        sac_flies: i64 = "sacflies",
        catchers_interference: i64 = "catchersinterference",
        inherited_runners: i64 = "inheritedrunners",
        inherited_runners_scored: i64 = "inheritedrunnersscored",
        innings_pitched: String = "inningspitched",
        era: String = "era",
        whip: String = "whip",
        avg: String = "avg",
        obp: String = "obp",
        slg: String = "slg",
        ops: String = "ops",
        stolen_base_percentage: String = "stolenbasepercentage",
        strike_percentage: String = "strikepercentage",
        win_percentage: String = "winpercentage",
        ground_outs_to_air_outs: String = "groundoutstoairouts",
        pitches_per_inning: String = "pitchesperinning",
        strikeout_walk_ratio: String = "strikeoutwalkratio",
        strikeouts_per_9_inn: String = "strikeoutsper9inn",
        walks_per_9_inn: String = "walksper9inn",
        hits_per_9_inn: String = "hitsper9inn",
        runs_scored_per_9: String = "runsscoredper9",
        home_runs_per_9: String = "homerunsper9",
    }
}

stat_block! {
    /// Batted ball, plate discipline and inherited runner breakdown for pitchers.
    AdvancedPitchingStats {
        batters_faced: i64 = "battersfaced",
        stolen_bases: i64 = "stolenbases",
        caught_stealing: i64 = "caughtstealing",
        quality_starts: i64 = "qualitystarts",
        games_finished: i64 = "gamesfinished",
        doubles: i64 = "doubles",
        triples: i64 = "triples",
        gidp: i64 = "gidp",
        gidp_opp: i64 = "gidpopp",
        wild_pitches: i64 = "wildpitches",
        balks: i64 = "balks",
        pickoffs: i64 = "pickoffs",
        total_swings: i64 = "totalswings",
        swing_and_misses: i64 = "swingandmisses",
        balls_in_play: i64 = "ballsinplay",
        run_support: i64 = "runsupport",
        fly_outs: i64 = "flyouts",
        pop_outs: i64 = "popouts",
        line_outs: i64 = "lineouts",
        ground_outs: i64 = "groundouts",
        fly_hits: i64 = "flyhits",
        pop_hits: i64 = "pophits",
        line_hits: i64 = "linehits",
        ground_hits: i64 = "groundhits",
        inherited_runners: i64 = "inheritedrunners",
        inherited_runners_scored: i64 = "inheritedrunnersscored",
        bequeathed_runners: i64 = "bequeathedrunners",
        bequeathed_runners_scored: i64 = "bequeathedrunnersscored",
        winning_percentage: String = "winningpercentage",
        runs_scored_per_9: String = "runsscoredper9",
        babip: String = "babip",
        obp: String = "obp",
        slg: String = "slg",
        ops: String = "ops",
        iso: String = "iso",
        strikeouts_per_9: String = "strikeoutsper9",
        base_on_balls_per_9: String = "baseonballsper9",
        home_runs_per_9: String = "homerunsper9",
        hits_per_9: String = "hitsper9",
        strikeouts_to_walks: String = "strikesoutstowalks",
        strike_percentage: String = "strikepercentage",
        pitches_per_inning: String = "pitchesperinning",
        pitches_per_plate_appearance: String = "pitchesperplateappearance",
        walks_per_plate_appearance: String = "walksperplateappearance",
        strikeouts_per_plate_appearance: String = "strikeoutsperplateappearance",
        home_runs_per_plate_appearance: String = "homerunsperplateappearance",
        walks_per_strikeout: String = "walksperstrikeout",
    }
}

stat_block! {
    CatchingStats {
        games_played: i64 = "gamesplayed",
        runs: i64 = "runs",
        home_runs: i64 = "homeruns",
        strikeouts: i64 = "strikeouts",
        base_on_balls: i64 = "baseonballs",
        intentional_walks: i64 = "intentionalwalks",
        hits: i64 = "hits",
        hit_by_pitch: i64 = "hitbypitch",
        at_bats: i64 = "atbats",
        caught_stealing: i64 = "caughtstealing",
        stolen_bases: i64 = "stolenbases",
        ground_outs: i64 = "groundouts",
        air_outs: i64 = "airouts",
        earned_runs: i64 = "earnedruns",
        batters_faced: i64 = "battersfaced",
        games_pitched: i64 = "gamespitched",
        hit_batsmen: i64 = "hitbatsmen",
        wild_pitches: i64 = "wildpitches",
        pickoffs: i64 = "pickoffs",
        total_bases: i64 = "totalbases",
        sac_bunts: i64 = "sacbunts",
        sac_flies: i64 = "sacflies",
        passed_ball: i64 = "passedball",
        catchers_interference: i64 = "catchersinterference",
        avg: String = "avg",
        obp: String = "obp",
        slg: String = "slg",
        ops: String = "ops",
        stolen_base_percentage: String = "stolenbasepercentage",
        strikeout_walk_ratio: String = "strikeoutwalkratio",
        innings_pitched: String = "inningspitched",
    }
}

/// Defensive line. `position` is only set when the split is broken down by position.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldingStats {
    #[serde(default, deserialize_with = "empty_as_none")]
    pub position: Option<Position>,
    #[serde(rename = "gamesplayed")]
    pub games_played: Option<i64>,
    #[serde(rename = "gamesstarted")]
    pub games_started: Option<i64>,
    pub games: Option<i64>,
    pub assists: Option<i64>,
    #[serde(rename = "putouts")]
    pub put_outs: Option<i64>,
    pub errors: Option<i64>,
    pub chances: Option<i64>,
    #[serde(rename = "doubleplays")]
    pub double_plays: Option<i64>,
    #[serde(rename = "tripleplays")]
    pub triple_plays: Option<i64>,
    #[serde(rename = "throwingerrors")]
    pub throwing_errors: Option<i64>,
    #[serde(rename = "caughtstealing")]
    pub caught_stealing: Option<i64>,
    #[serde(rename = "stolenbases")]
    pub stolen_bases: Option<i64>,
    #[serde(rename = "passedball")]
    pub passed_ball: Option<i64>,
    pub fielding: Option<String>,
    pub innings: Option<String>,
    #[serde(rename = "rangefactorpergame")]
    pub range_factor_per_game: Option<String>,
    #[serde(rename = "rangefactorper9inn")]
    pub range_factor_per_9_inn: Option<String>,
}

flat_decode!(FieldingStats, []);

/// Wins above replacement and its components.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sabermetrics {
    pub war: f64,
    pub woba: Option<f64>,
    #[serde(rename = "wraa")]
    pub w_raa: Option<f64>,
    #[serde(rename = "wrc")]
    pub w_rc: Option<f64>,
    #[serde(rename = "wrcplus")]
    pub w_rc_plus: Option<f64>,
    pub rar: Option<f64>,
    pub fip: Option<f64>,
    #[serde(rename = "fipminus")]
    pub fip_minus: Option<f64>,
    pub xfip: Option<f64>,
    #[serde(rename = "ra9war")]
    pub ra9_war: Option<f64>,
    pub batting: Option<f64>,
    pub fielding: Option<f64>,
    #[serde(rename = "baserunning")]
    pub base_running: Option<f64>,
    pub positional: Option<f64>,
    pub replacement: Option<f64>,
    pub spd: Option<f64>,
    pub ubr: Option<f64>,
    pub wsb: Option<f64>,
}

flat_decode!(Sabermetrics, ["war"]);

/// Statcast expected outcomes, formatted as the API sends them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpectedStatistics {
    pub avg: String,
    pub slg: String,
    pub woba: String,
    #[serde(rename = "wobacon")]
    pub woba_con: String,
}

flat_decode!(ExpectedStatistics, ["avg", "slg", "woba", "wobacon"]);

/// Hot/cold zone grid for one metric (`onBasePercentage`, `exitVelocity`...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ZoneGrid {
    pub name: String,
    pub zones: Vec<Zone>,
}

impl Decode for ZoneGrid {
    const TYPE_NAME: &'static str = "ZoneGrid";

    fn decode_fields(f: &Fields<'_>) -> Result<Self, ShapeError> {
        Ok(Self {
            name: f.required("name")?,
            zones: f.list("zones")?,
        })
    }
}

/// Standard stat line, typed by the group it was requested for.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum StatLine {
    Hitting(HittingStats),
    Pitching(PitchingStats),
    Fielding(FieldingStats),
    Catching(CatchingStats),
}

impl StatLine {
    pub fn decode(group: StatGroup, f: &Fields<'_>) -> Result<Self, ShapeError> {
        let map = f.object();
        Ok(match group {
            StatGroup::Hitting => StatLine::Hitting(HittingStats::decode_object(map)?),
            StatGroup::Pitching => StatLine::Pitching(PitchingStats::decode_object(map)?),
            StatGroup::Fielding => StatLine::Fielding(FieldingStats::decode_object(map)?),
            StatGroup::Catching => StatLine::Catching(CatchingStats::decode_object(map)?),
        })
    }

    pub fn group(&self) -> StatGroup {
        match self {
            StatLine::Hitting(_) => StatGroup::Hitting,
            StatLine::Pitching(_) => StatGroup::Pitching,
            StatLine::Fielding(_) => StatGroup::Fielding,
            StatLine::Catching(_) => StatGroup::Catching,
        }
    }

    pub fn hitting(&self) -> Option<&HittingStats> {
        match self {
            StatLine::Hitting(stats) => Some(stats),
            _ => None,
        }
    }

    pub fn pitching(&self) -> Option<&PitchingStats> {
        match self {
            StatLine::Pitching(stats) => Some(stats),
            _ => None,
        }
    }

    pub fn fielding(&self) -> Option<&FieldingStats> {
        match self {
            StatLine::Fielding(stats) => Some(stats),
            _ => None,
        }
    }

    pub fn catching(&self) -> Option<&CatchingStats> {
        match self {
            StatLine::Catching(stats) => Some(stats),
            _ => None,
        }
    }
}

/// Advanced stat line. Only hitting and pitching have one.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AdvancedLine {
    Hitting(AdvancedHittingStats),
    Pitching(AdvancedPitchingStats),
}

impl AdvancedLine {
    pub fn decode(group: StatGroup, f: &Fields<'_>) -> Result<Self, ShapeError> {
        let map = f.object();
        match group {
            StatGroup::Hitting => Ok(AdvancedLine::Hitting(
                AdvancedHittingStats::decode_object(map)?,
            )),
            StatGroup::Pitching => Ok(AdvancedLine::Pitching(
                AdvancedPitchingStats::decode_object(map)?,
            )),
            other => Err(ShapeError::invalid(
                f.type_name(),
                "",
                format!("no advanced stat line for group {other}"),
            )),
        }
    }

    pub fn hitting(&self) -> Option<&AdvancedHittingStats> {
        match self {
            AdvancedLine::Hitting(stats) => Some(stats),
            AdvancedLine::Pitching(_) => None,
        }
    }

    pub fn pitching(&self) -> Option<&AdvancedPitchingStats> {
        match self {
            AdvancedLine::Pitching(stats) => Some(stats),
            AdvancedLine::Hitting(_) => None,
        }
    }
}
