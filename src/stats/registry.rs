//! Stat type registry and split dispatch.
//!
//! One table maps every `(group, stat type)` pair the client understands to
//! the split contract that decodes it. Anything not in the table decodes to
//! [`OpaqueSplit`].

use super::group::StatGroup;
use super::splits::*;
use crate::error::ShapeError;
use crate::models::decode::{json_kind, normalize_keys, Fields, Object};
use once_cell::sync::Lazy;
use serde_json::Value;
use std::collections::{BTreeMap, HashMap};
use tracing::warn;


type Build = fn(StatGroup, &Object) -> Result<Split, ShapeError>;

/// A registered split contract.
#[derive(Clone, Copy)]
pub struct Shape {
    pub name: &'static str,
    build: Build,
}

impl Shape {
    fn of<S: SplitShape>() -> Self {
        Self {
            name: S::NAME,
            build: |group, map| S::decode(group, &Fields::new(S::NAME, map)).map(Into::into),
        }
    }
}

impl std::fmt::Debug for Shape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Shape").field("name", &self.name).finish()
    }
}

const ALL: &[StatGroup] = &StatGroup::ALL;
const HIT_PITCH: &[StatGroup] = &[StatGroup::Hitting, StatGroup::Pitching];
const HITTING: &[StatGroup] = &[StatGroup::Hitting];

type Entry = (Shape, &'static [&'static str], &'static [StatGroup]);

fn entry(shape: Shape, tags: &'static [&'static str], groups: &'static [StatGroup]) -> Entry {
    (shape, tags, groups)
}

fn table() -> Vec<Entry> {
    vec![
        entry(
            Shape::of::<SeasonSplit>(),
            &["season", "statsSingleSeason", "yearByYear", "yearByYearPlayoffs"],
            ALL,
        ),
        entry(
            Shape::of::<CareerSplit>(),
            &["career", "careerPlayoffs", "careerRegularSeason"],
            ALL,
        ),
        entry(
            Shape::of::<SeasonAdvancedSplit>(),
            &["seasonAdvanced", "statsSingleSeasonAdvanced", "yearByYearAdvanced"],
            HIT_PITCH,
        ),
        entry(
            Shape::of::<CareerAdvancedSplit>(),
            &["careerAdvanced", "byDateRangeAdvanced"],
            HIT_PITCH,
        ),
        entry(Shape::of::<GameLogSplit>(), &["gameLog"], ALL),
        entry(Shape::of::<PlayLogSplit>(), &["playLog", "pitchLog"], HIT_PITCH),
        entry(
            Shape::of::<RangeSplit>(),
            &["byDateRange", "lastXGames", "rankings", "rankingsByYear"],
            ALL,
        ),
        entry(
            Shape::of::<VsOpponentSplit>(),
            &["vsPlayer", "vsPlayerTotal", "vsPlayer5Y", "vsTeam", "vsTeamTotal", "vsTeam5Y"],
            HIT_PITCH,
        ),
        entry(Shape::of::<ByMonthSplit>(), &["byMonth", "byMonthPlayoffs"], ALL),
        entry(Shape::of::<ByDayOfWeekSplit>(), &["byDayOfWeek", "byDayOfWeekPlayoffs"], ALL),
        entry(Shape::of::<HomeAndAwaySplit>(), &["homeAndAway", "homeAndAwayPlayoffs"], ALL),
        entry(Shape::of::<WinLossSplit>(), &["winLoss", "winLossPlayoffs"], ALL),
        entry(Shape::of::<OpponentsFacedSplit>(), &["opponentsFaced"], HIT_PITCH),
        entry(Shape::of::<SabermetricsSplit>(), &["sabermetrics"], HIT_PITCH),
        entry(Shape::of::<ExpectedStatisticsSplit>(), &["expectedStatistics"], HIT_PITCH),
        entry(Shape::of::<SprayChartSplit>(), &["sprayChart"], HITTING),
        entry(Shape::of::<HotColdZonesSplit>(), &["hotColdZones"], HIT_PITCH),
        entry(Shape::of::<PitchArsenalSplit>(), &["pitchArsenal"], HIT_PITCH),
    ]
}

static REGISTRY: Lazy<HashMap<(StatGroup, String), Shape>> = Lazy::new(|| {
    let mut registry = HashMap::new();
    for (shape, tags, groups) in table() {
        for &group in groups {
            for tag in tags {
                registry.entry((group, normalize_tag(tag))).or_insert(shape);
            }
        }
    }
    registry
});

/// Canonical form of a stat type tag: lower-case, whitespace removed.
pub fn normalize_tag(tag: &str) -> String {
    tag.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

pub fn lookup(group: StatGroup, stat_type: &str) -> Option<Shape> {
    REGISTRY.get(&(group, normalize_tag(stat_type))).copied()
}

/// Every normalized tag registered for `group`, sorted.
pub fn registered_tags(group: StatGroup) -> Vec<String> {
    let mut tags: Vec<String> = REGISTRY
        .keys()
        .filter(|(g, _)| *g == group)
        .map(|(_, tag)| tag.clone())
        .collect();
    tags.sort();
    tags
}

/// Flatten a normalized split: `stat` over the envelope, then `stat.play`
/// over both. The envelope keys, `stat` included, are kept.
pub fn merge_split(envelope: Object) -> Object {
    let mut merged = envelope;
    let stat = match merged.get("stat") {
        Some(Value::Object(stat)) => stat.clone(),
        _ => return merged,
    };

    let play = match stat.get("play") {
        Some(Value::Object(play)) => Some(play.clone()),
        _ => None,
    };
    merged.extend(stat);
    if let Some(play) = play {
        merged.extend(play);
    }
    merged
}

/// Decode one raw split for the given group and stat type.
///
/// Unregistered stat types yield [`Split::Opaque`]. A registered contract
/// whose mandatory fields are missing after the merge fails with a
/// [`ShapeError`] tagged with the stat type.
pub fn select_variant(
    group: StatGroup,
    stat_type: &str,
    payload: &Value,
) -> Result<Split, ShapeError> {
    let tag = normalize_tag(stat_type);
    let envelope = match normalize_keys(payload.clone()) {
        Value::Object(map) => map,
        other => {
            return Err(ShapeError::invalid(
                "Split",
                "",
                format!("expected an object, found {}", json_kind(&other)),
            )
            .with_stat_type(tag))
        }
    };
    match lookup(group, &tag) {
        Some(shape) => {
            let merged = merge_split(envelope);
            (shape.build)(group, &merged).map_err(|e| e.with_stat_type(tag))
        }
        None => Ok(Split::Opaque(OpaqueSplit::from_envelope(&tag, envelope))),
    }
}

/// What to do when a split does not match its registered contract.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DecodePolicy {
    /// Fail the whole decode on the first bad split.
    #[default]
    Strict,
    /// Log the failure and keep the split as [`Split::Opaque`].
    Lenient,
}

/// Decode every split of one stat group, keyed by normalized stat type.
/// Splits keep the order they arrived in.
pub fn decode_group(
    group: StatGroup,
    splits_by_type: &Object,
    policy: DecodePolicy,
) -> Result<BTreeMap<String, Vec<Split>>, ShapeError> {
    let mut decoded: BTreeMap<String, Vec<Split>> = BTreeMap::new();

    for (stat_type, splits) in splits_by_type {
        let tag = normalize_tag(stat_type);
        let splits: &[Value] = match splits {
            Value::Array(items) => items,
            Value::Null => &[],
            other => {
                return Err(ShapeError::invalid(
                    "Split",
                    "splits",
                    format!("expected an array, found {}", json_kind(other)),
                )
                .with_stat_type(tag))
            }
        };

        let bucket = decoded.entry(tag.clone()).or_default();
        for raw in splits {
            match select_variant(group, &tag, raw) {
                Ok(split) => bucket.push(split),
                Err(e) if policy == DecodePolicy::Lenient => {
                    warn!(group = %group, stat_type = %tag, error = %e, "keeping split as opaque");
                    bucket.push(Split::Opaque(OpaqueSplit::from_raw(&tag, raw)));
                }
                Err(e) => return Err(e),
            }
        }
    }

    Ok(decoded)
}
