//! Statistics: groups, stat lines, split shapes and the dispatch between them.

pub mod group;
pub mod lines;
pub mod registry;
pub mod splits;

pub use group::StatGroup;
pub use lines::{AdvancedLine, StatLine};
pub use registry::{decode_group, normalize_tag, select_variant, DecodePolicy};
pub use splits::{OpaqueSplit, Split};

use crate::error::ShapeError;
use crate::models::decode::{normalize_keys, Object};
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;
use tracing::warn;


/// Decoded splits of a stats response, by group then normalized stat type.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct GroupedStats(BTreeMap<StatGroup, BTreeMap<String, Vec<Split>>>);

impl GroupedStats {
    /// Decode a `{"stats": [envelope, ...]}` response.
    ///
    /// Each envelope names its group and stat type under `group.displayName`
    /// and `type.displayName`. Envelopes without a recognised group or a
    /// stat type are skipped with a warning.
    pub fn from_response(response: &Value, policy: DecodePolicy) -> Result<Self, ShapeError> {
        let response = normalize_keys(response.clone());
        let envelopes = match response.get("stats") {
            Some(Value::Array(envelopes)) => envelopes.as_slice(),
            _ => return Ok(Self::default()),
        };

        let mut grouped = Self::default();
        for envelope in envelopes {
            let Some(group) = display_name(envelope, "group") else {
                warn!("skipping stats envelope without a group");
                continue;
            };
            let group = match group.parse::<StatGroup>() {
                Ok(group) => group,
                Err(_) => {
                    warn!(group, "skipping stats envelope for unknown group");
                    continue;
                }
            };
            let Some(stat_type) = display_name(envelope, "type") else {
                warn!(%group, "skipping stats envelope without a stat type");
                continue;
            };

            let mut by_type = Object::new();
            by_type.insert(
                stat_type.to_string(),
                envelope.get("splits").cloned().unwrap_or(Value::Null),
            );
            grouped.extend(group, decode_group(group, &by_type, policy)?);
        }

        Ok(grouped)
    }

    fn extend(&mut self, group: StatGroup, decoded: BTreeMap<String, Vec<Split>>) {
        let types = self.0.entry(group).or_default();
        for (tag, splits) in decoded {
            types.entry(tag).or_default().extend(splits);
        }
    }

    /// Splits for one group and stat type; the tag is matched in any casing.
    pub fn get(&self, group: StatGroup, stat_type: &str) -> Option<&[Split]> {
        self.0
            .get(&group)?
            .get(&normalize_tag(stat_type))
            .map(Vec::as_slice)
    }

    pub fn group(&self, group: StatGroup) -> Option<&BTreeMap<String, Vec<Split>>> {
        self.0.get(&group)
    }

    pub fn groups(&self) -> impl Iterator<Item = StatGroup> + '_ {
        self.0.keys().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.values().all(BTreeMap::is_empty)
    }
}

/// `{"group": {"displayName": "hitting"}}` or a bare `{"group": "hitting"}`.
fn display_name<'a>(envelope: &'a Value, key: &str) -> Option<&'a str> {
    match envelope.get(key)? {
        Value::String(name) => Some(name),
        Value::Object(map) => map.get("displayname")?.as_str(),
        _ => None,
    }
}
