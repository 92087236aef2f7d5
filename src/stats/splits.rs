//! The closed family of split shapes.
//!
//! Each struct is one field contract: a [`StatsBase`] plus the fields that
//! stat type carries. Decoding happens against the merged split mapping (see
//! [`super::registry::merge_split`]), so a field can come from the envelope,
//! from `stat`, or from `stat.play`.

use super::group::StatGroup;
use super::lines::{AdvancedLine, ExpectedStatistics, Sabermetrics, StatLine, ZoneGrid};
use crate::error::ShapeError;
use crate::models::decode::{normalize_keys, Decode, Fields, Object};
use crate::models::{
    Chart, CodeDesc, Count, Game, HitData, Person, PitchData, PlayDetails, Position, StatsBase,
    Team,
};
use serde::Serialize;
use serde_json::Value;

/// A split contract that can be decoded for a given stat group.
pub trait SplitShape: Sized + Into<Split> {
    const NAME: &'static str;

    fn decode(group: StatGroup, f: &Fields<'_>) -> Result<Self, ShapeError>;
}

fn base(f: &Fields<'_>) -> Result<StatsBase, ShapeError> {
    StatsBase::decode_fields(f)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasonSplit {
    #[serde(flatten)]
    pub base: StatsBase,
    pub season: String,
    pub game_type: Option<String>,
    pub num_teams: Option<u32>,
    pub stat: StatLine,
}

impl SplitShape for SeasonSplit {
    const NAME: &'static str = "SeasonSplit";

    fn decode(group: StatGroup, f: &Fields<'_>) -> Result<Self, ShapeError> {
        Ok(Self {
            base: base(f)?,
            season: f.required("season")?,
            game_type: f.optional("gametype")?,
            num_teams: f.optional("numteams")?,
            stat: StatLine::decode(group, f)?,
        })
    }
}

/// Career totals. `season` is set on some endpoints but not guaranteed.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerSplit {
    #[serde(flatten)]
    pub base: StatsBase,
    pub season: Option<String>,
    pub game_type: Option<String>,
    pub num_teams: Option<u32>,
    pub stat: StatLine,
}

impl SplitShape for CareerSplit {
    const NAME: &'static str = "CareerSplit";

    fn decode(group: StatGroup, f: &Fields<'_>) -> Result<Self, ShapeError> {
        Ok(Self {
            base: base(f)?,
            season: f.optional("season")?,
            game_type: f.optional("gametype")?,
            num_teams: f.optional("numteams")?,
            stat: StatLine::decode(group, f)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasonAdvancedSplit {
    #[serde(flatten)]
    pub base: StatsBase,
    pub season: String,
    pub game_type: Option<String>,
    pub num_teams: Option<u32>,
    pub stat: AdvancedLine,
}

impl SplitShape for SeasonAdvancedSplit {
    const NAME: &'static str = "SeasonAdvancedSplit";

    fn decode(group: StatGroup, f: &Fields<'_>) -> Result<Self, ShapeError> {
        Ok(Self {
            base: base(f)?,
            season: f.required("season")?,
            game_type: f.optional("gametype")?,
            num_teams: f.optional("numteams")?,
            stat: AdvancedLine::decode(group, f)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerAdvancedSplit {
    #[serde(flatten)]
    pub base: StatsBase,
    pub season: Option<String>,
    pub game_type: Option<String>,
    pub num_teams: Option<u32>,
    pub stat: AdvancedLine,
}

impl SplitShape for CareerAdvancedSplit {
    const NAME: &'static str = "CareerAdvancedSplit";

    fn decode(group: StatGroup, f: &Fields<'_>) -> Result<Self, ShapeError> {
        Ok(Self {
            base: base(f)?,
            season: f.optional("season")?,
            game_type: f.optional("gametype")?,
            num_teams: f.optional("numteams")?,
            stat: AdvancedLine::decode(group, f)?,
        })
    }
}

/// One game of a game log. `game` and `opponent` are optional: the API sends
/// `{}` for them on some minor league logs.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameLogSplit {
    #[serde(flatten)]
    pub base: StatsBase,
    pub is_home: bool,
    pub is_win: bool,
    pub date: String,
    pub season: Option<String>,
    pub game_type: Option<String>,
    pub game: Option<Game>,
    pub opponent: Option<Team>,
    pub positions_played: Vec<Position>,
    pub stat: StatLine,
}

impl SplitShape for GameLogSplit {
    const NAME: &'static str = "GameLogSplit";

    fn decode(group: StatGroup, f: &Fields<'_>) -> Result<Self, ShapeError> {
        Ok(Self {
            base: base(f)?,
            is_home: f.required("ishome")?,
            is_win: f.required("iswin")?,
            date: f.required("date")?,
            season: f.optional("season")?,
            game_type: f.optional("gametype")?,
            game: f.nested("game")?,
            opponent: f.nested("opponent")?,
            positions_played: f.list("positionsplayed")?,
            stat: StatLine::decode(group, f)?,
        })
    }
}

/// One pitch or play from a play log / pitch log.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayLogSplit {
    #[serde(flatten)]
    pub base: StatsBase,
    pub season: String,
    pub date: String,
    pub is_home: bool,
    pub details: PlayDetails,
    pub count: Count,
    pub game_type: Option<String>,
    pub game: Option<Game>,
    pub opponent: Option<Team>,
    pub batter: Option<Person>,
    pub pitcher: Option<Person>,
    pub play_id: Option<String>,
    pub pitch_number: Option<u32>,
    pub at_bat_number: Option<u32>,
    pub is_pitch: Option<bool>,
    pub pitch_data: Option<PitchData>,
    pub hit_data: Option<HitData>,
}

impl SplitShape for PlayLogSplit {
    const NAME: &'static str = "PlayLogSplit";

    fn decode(_group: StatGroup, f: &Fields<'_>) -> Result<Self, ShapeError> {
        Ok(Self {
            base: base(f)?,
            season: f.required("season")?,
            date: f.required("date")?,
            is_home: f.required("ishome")?,
            details: f.nested_required("details")?,
            count: f.nested_required("count")?,
            game_type: f.optional("gametype")?,
            game: f.nested("game")?,
            opponent: f.nested("opponent")?,
            batter: f.nested("batter")?,
            pitcher: f.nested("pitcher")?,
            play_id: f.optional("playid")?,
            pitch_number: f.optional("pitchnumber")?,
            at_bat_number: f.optional("atbatnumber")?,
            is_pitch: f.optional("ispitch")?,
            pitch_data: f.nested("pitchdata")?,
            hit_data: f.nested("hitdata")?,
        })
    }
}

/// Date range, last-N-games and ranking splits.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RangeSplit {
    #[serde(flatten)]
    pub base: StatsBase,
    pub season: Option<String>,
    pub game_type: Option<String>,
    pub num_teams: Option<u32>,
    pub day_of_week: Option<u32>,
    pub rank: Option<u32>,
    pub stat: StatLine,
}

impl SplitShape for RangeSplit {
    const NAME: &'static str = "RangeSplit";

    fn decode(group: StatGroup, f: &Fields<'_>) -> Result<Self, ShapeError> {
        Ok(Self {
            base: base(f)?,
            season: f.optional("season")?,
            game_type: f.optional("gametype")?,
            num_teams: f.optional("numteams")?,
            day_of_week: f.optional("dayofweek")?,
            rank: f.optional("rank")?,
            stat: StatLine::decode(group, f)?,
        })
    }
}

/// Head-to-head splits against a player or team.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VsOpponentSplit {
    #[serde(flatten)]
    pub base: StatsBase,
    pub season: Option<String>,
    pub game_type: Option<String>,
    pub num_teams: Option<u32>,
    pub opponent: Option<Team>,
    pub batter: Option<Person>,
    pub pitcher: Option<Person>,
    pub stat: StatLine,
}

impl SplitShape for VsOpponentSplit {
    const NAME: &'static str = "VsOpponentSplit";

    fn decode(group: StatGroup, f: &Fields<'_>) -> Result<Self, ShapeError> {
        Ok(Self {
            base: base(f)?,
            season: f.optional("season")?,
            game_type: f.optional("gametype")?,
            num_teams: f.optional("numteams")?,
            opponent: f.nested("opponent")?,
            batter: f.nested("batter")?,
            pitcher: f.nested("pitcher")?,
            stat: StatLine::decode(group, f)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ByMonthSplit {
    #[serde(flatten)]
    pub base: StatsBase,
    pub month: u32,
    pub season: Option<String>,
    pub game_type: Option<String>,
    pub stat: StatLine,
}

impl SplitShape for ByMonthSplit {
    const NAME: &'static str = "ByMonthSplit";

    fn decode(group: StatGroup, f: &Fields<'_>) -> Result<Self, ShapeError> {
        Ok(Self {
            base: base(f)?,
            month: f.required("month")?,
            season: f.optional("season")?,
            game_type: f.optional("gametype")?,
            stat: StatLine::decode(group, f)?,
        })
    }
}

/// `day_of_week` runs 1 (Sunday) to 7.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ByDayOfWeekSplit {
    #[serde(flatten)]
    pub base: StatsBase,
    pub day_of_week: u32,
    pub season: Option<String>,
    pub game_type: Option<String>,
    pub stat: StatLine,
}

impl SplitShape for ByDayOfWeekSplit {
    const NAME: &'static str = "ByDayOfWeekSplit";

    fn decode(group: StatGroup, f: &Fields<'_>) -> Result<Self, ShapeError> {
        Ok(Self {
            base: base(f)?,
            day_of_week: f.required("dayofweek")?,
            season: f.optional("season")?,
            game_type: f.optional("gametype")?,
            stat: StatLine::decode(group, f)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeAndAwaySplit {
    #[serde(flatten)]
    pub base: StatsBase,
    pub is_home: bool,
    pub season: String,
    pub game_type: Option<String>,
    pub stat: StatLine,
}

impl SplitShape for HomeAndAwaySplit {
    const NAME: &'static str = "HomeAndAwaySplit";

    fn decode(group: StatGroup, f: &Fields<'_>) -> Result<Self, ShapeError> {
        Ok(Self {
            base: base(f)?,
            is_home: f.required("ishome")?,
            season: f.required("season")?,
            game_type: f.optional("gametype")?,
            stat: StatLine::decode(group, f)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WinLossSplit {
    #[serde(flatten)]
    pub base: StatsBase,
    pub is_win: bool,
    pub season: String,
    pub game_type: Option<String>,
    pub stat: StatLine,
}

impl SplitShape for WinLossSplit {
    const NAME: &'static str = "WinLossSplit";

    fn decode(group: StatGroup, f: &Fields<'_>) -> Result<Self, ShapeError> {
        Ok(Self {
            base: base(f)?,
            is_win: f.required("iswin")?,
            season: f.required("season")?,
            game_type: f.optional("gametype")?,
            stat: StatLine::decode(group, f)?,
        })
    }
}

/// A batter/pitcher pairing. Hitting payloads carry `fieldingteam`, pitching
/// payloads `battingteam`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OpponentsFacedSplit {
    #[serde(flatten)]
    pub base: StatsBase,
    pub group: String,
    pub batter: Person,
    pub pitcher: Person,
    pub batting_team: Option<Team>,
    pub fielding_team: Option<Team>,
    pub game_type: Option<String>,
}

impl SplitShape for OpponentsFacedSplit {
    const NAME: &'static str = "OpponentsFacedSplit";

    fn decode(_group: StatGroup, f: &Fields<'_>) -> Result<Self, ShapeError> {
        Ok(Self {
            base: base(f)?,
            group: f.required("group")?,
            batter: f.nested_required("batter")?,
            pitcher: f.nested_required("pitcher")?,
            batting_team: f.nested("battingteam")?,
            fielding_team: f.nested("fieldingteam")?,
            game_type: f.optional("gametype")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SabermetricsSplit {
    #[serde(flatten)]
    pub base: StatsBase,
    pub season: Option<String>,
    pub game_type: Option<String>,
    pub num_teams: Option<u32>,
    pub stat: Sabermetrics,
}

impl SplitShape for SabermetricsSplit {
    const NAME: &'static str = "SabermetricsSplit";

    fn decode(_group: StatGroup, f: &Fields<'_>) -> Result<Self, ShapeError> {
        Ok(Self {
            base: base(f)?,
            season: f.optional("season")?,
            game_type: f.optional("gametype")?,
            num_teams: f.optional("numteams")?,
            stat: Sabermetrics::decode_object(f.object())?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpectedStatisticsSplit {
    #[serde(flatten)]
    pub base: StatsBase,
    pub season: Option<String>,
    pub game_type: Option<String>,
    pub stat: ExpectedStatistics,
}

impl SplitShape for ExpectedStatisticsSplit {
    const NAME: &'static str = "ExpectedStatisticsSplit";

    fn decode(_group: StatGroup, f: &Fields<'_>) -> Result<Self, ShapeError> {
        Ok(Self {
            base: base(f)?,
            season: f.optional("season")?,
            game_type: f.optional("gametype")?,
            stat: ExpectedStatistics::decode_object(f.object())?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SprayChartSplit {
    #[serde(flatten)]
    pub base: StatsBase,
    pub batter: Option<Person>,
    pub season: Option<String>,
    pub game_type: Option<String>,
    pub stat: Chart,
}

impl SplitShape for SprayChartSplit {
    const NAME: &'static str = "SprayChartSplit";

    fn decode(_group: StatGroup, f: &Fields<'_>) -> Result<Self, ShapeError> {
        Ok(Self {
            base: base(f)?,
            batter: f.nested("batter")?,
            season: f.optional("season")?,
            game_type: f.optional("gametype")?,
            stat: Chart::decode_object(f.object())?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HotColdZonesSplit {
    #[serde(flatten)]
    pub base: StatsBase,
    pub season: Option<String>,
    pub game_type: Option<String>,
    pub stat: ZoneGrid,
}

impl SplitShape for HotColdZonesSplit {
    const NAME: &'static str = "HotColdZonesSplit";

    fn decode(_group: StatGroup, f: &Fields<'_>) -> Result<Self, ShapeError> {
        Ok(Self {
            base: base(f)?,
            season: f.optional("season")?,
            game_type: f.optional("gametype")?,
            stat: ZoneGrid::decode_object(f.object())?,
        })
    }
}

/// Usage and velocity for one pitch type.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PitchArsenalSplit {
    #[serde(flatten)]
    pub base: StatsBase,
    #[serde(rename = "type")]
    pub pitch_type: CodeDesc,
    pub percentage: Option<f64>,
    pub count: Option<u32>,
    pub total_pitches: Option<u32>,
    pub average_speed: Option<f64>,
    pub season: Option<String>,
}

impl SplitShape for PitchArsenalSplit {
    const NAME: &'static str = "PitchArsenalSplit";

    fn decode(_group: StatGroup, f: &Fields<'_>) -> Result<Self, ShapeError> {
        Ok(Self {
            base: base(f)?,
            pitch_type: f.nested_required("type")?,
            percentage: f.optional("percentage")?,
            count: f.optional("count")?,
            total_pitches: f.optional("totalpitches")?,
            average_speed: f.optional("averagespeed")?,
            season: f.optional("season")?,
        })
    }
}

/// Fallback for stat types without a registered shape: the base plus the
/// split exactly as received (keys normalized, `stat` still nested).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OpaqueSplit {
    #[serde(flatten)]
    pub base: StatsBase,
    pub stat_type: String,
    pub fields: Object,
}

impl OpaqueSplit {
    /// Look a field up by its API name, in any casing. `stat.play` is
    /// searched first, then `stat`, then the envelope.
    pub fn get(&self, key: &str) -> Option<&Value> {
        let key = key.to_lowercase();
        let stat = self.fields.get("stat").and_then(Value::as_object);
        let play = stat.and_then(|s| s.get("play")).and_then(Value::as_object);

        [play, stat, Some(&self.fields)]
            .into_iter()
            .flatten()
            .find_map(|layer| layer.get(&key))
    }

    /// Top-level keys of the envelope.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Build from a normalized split envelope. A base that fails to decode
    /// is left empty; every layer of the envelope stays in `fields`.
    pub fn from_envelope(stat_type: &str, envelope: Object) -> Self {
        let merged = super::registry::merge_split(envelope.clone());
        let base = StatsBase::decode_object(&merged).unwrap_or_default();
        Self {
            base,
            stat_type: stat_type.to_string(),
            fields: envelope,
        }
    }

    /// Build straight from a raw split payload.
    pub fn from_raw(stat_type: &str, raw: &Value) -> Self {
        let envelope = match normalize_keys(raw.clone()) {
            Value::Object(map) => map,
            other => {
                let mut map = Object::new();
                map.insert("value".to_string(), other);
                map
            }
        };
        Self::from_envelope(stat_type, envelope)
    }
}

/// One decoded split.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "shape")]
pub enum Split {
    Season(SeasonSplit),
    Career(CareerSplit),
    SeasonAdvanced(SeasonAdvancedSplit),
    CareerAdvanced(CareerAdvancedSplit),
    GameLog(GameLogSplit),
    PlayLog(PlayLogSplit),
    Range(RangeSplit),
    VsOpponent(VsOpponentSplit),
    ByMonth(ByMonthSplit),
    ByDayOfWeek(ByDayOfWeekSplit),
    HomeAndAway(HomeAndAwaySplit),
    WinLoss(WinLossSplit),
    OpponentsFaced(OpponentsFacedSplit),
    Sabermetrics(SabermetricsSplit),
    ExpectedStatistics(ExpectedStatisticsSplit),
    SprayChart(SprayChartSplit),
    HotColdZones(HotColdZonesSplit),
    PitchArsenal(PitchArsenalSplit),
    Opaque(OpaqueSplit),
}

macro_rules! split_variants {
    ($($variant:ident($ty:ty)),* $(,)?) => {
        $(
            impl From<$ty> for Split {
                fn from(split: $ty) -> Self {
                    Split::$variant(split)
                }
            }
        )*

        impl Split {
            pub fn base(&self) -> &StatsBase {
                match self {
                    $(Split::$variant(split) => &split.base,)*
                }
            }

            /// Name of the contract this split was decoded with.
            pub fn shape_name(&self) -> &'static str {
                match self {
                    $(Split::$variant(_) => stringify!($ty),)*
                }
            }
        }
    };
}

split_variants! {
    Season(SeasonSplit),
    Career(CareerSplit),
    SeasonAdvanced(SeasonAdvancedSplit),
    CareerAdvanced(CareerAdvancedSplit),
    GameLog(GameLogSplit),
    PlayLog(PlayLogSplit),
    Range(RangeSplit),
    VsOpponent(VsOpponentSplit),
    ByMonth(ByMonthSplit),
    ByDayOfWeek(ByDayOfWeekSplit),
    HomeAndAway(HomeAndAwaySplit),
    WinLoss(WinLossSplit),
    OpponentsFaced(OpponentsFacedSplit),
    Sabermetrics(SabermetricsSplit),
    ExpectedStatistics(ExpectedStatisticsSplit),
    SprayChart(SprayChartSplit),
    HotColdZones(HotColdZonesSplit),
    PitchArsenal(PitchArsenalSplit),
    Opaque(OpaqueSplit),
}

impl Split {
    pub fn is_opaque(&self) -> bool {
        matches!(self, Split::Opaque(_))
    }

    /// The season the split covers, when the shape has one.
    pub fn season(&self) -> Option<&str> {
        match self {
            Split::Season(s) => Some(&s.season),
            Split::SeasonAdvanced(s) => Some(&s.season),
            Split::PlayLog(s) => Some(&s.season),
            Split::Career(s) => s.season.as_deref(),
            Split::CareerAdvanced(s) => s.season.as_deref(),
            Split::GameLog(s) => s.season.as_deref(),
            Split::Range(s) => s.season.as_deref(),
            Split::VsOpponent(s) => s.season.as_deref(),
            Split::ByMonth(s) => s.season.as_deref(),
            Split::ByDayOfWeek(s) => s.season.as_deref(),
            Split::HomeAndAway(s) => Some(&s.season),
            Split::WinLoss(s) => Some(&s.season),
            Split::Sabermetrics(s) => s.season.as_deref(),
            Split::ExpectedStatistics(s) => s.season.as_deref(),
            Split::SprayChart(s) => s.season.as_deref(),
            Split::HotColdZones(s) => s.season.as_deref(),
            Split::PitchArsenal(s) => s.season.as_deref(),
            Split::OpponentsFaced(_) => None,
            Split::Opaque(s) => s.get("season").and_then(Value::as_str),
        }
    }

    /// The standard stat line, for shapes that carry one.
    pub fn stat_line(&self) -> Option<&StatLine> {
        match self {
            Split::Season(s) => Some(&s.stat),
            Split::Career(s) => Some(&s.stat),
            Split::GameLog(s) => Some(&s.stat),
            Split::Range(s) => Some(&s.stat),
            Split::VsOpponent(s) => Some(&s.stat),
            Split::ByMonth(s) => Some(&s.stat),
            Split::ByDayOfWeek(s) => Some(&s.stat),
            Split::HomeAndAway(s) => Some(&s.stat),
            Split::WinLoss(s) => Some(&s.stat),
            _ => None,
        }
    }
}
