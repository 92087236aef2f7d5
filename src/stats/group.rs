//! Stat groups.

use crate::error::{MlbError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Broad statistics category a split belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatGroup {
    Hitting,
    Pitching,
    Fielding,
    Catching,
}

impl StatGroup {
    pub const ALL: [StatGroup; 4] = [
        StatGroup::Hitting,
        StatGroup::Pitching,
        StatGroup::Fielding,
        StatGroup::Catching,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StatGroup::Hitting => "hitting",
            StatGroup::Pitching => "pitching",
            StatGroup::Fielding => "fielding",
            StatGroup::Catching => "catching",
        }
    }
}

impl fmt::Display for StatGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StatGroup {
    type Err = MlbError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "hitting" => Ok(StatGroup::Hitting),
            "pitching" => Ok(StatGroup::Pitching),
            "fielding" => Ok(StatGroup::Fielding),
            "catching" => Ok(StatGroup::Catching),
            _ => Err(MlbError::InvalidStatGroup {
                group: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("Hitting".parse::<StatGroup>().unwrap(), StatGroup::Hitting);
        assert_eq!(" PITCHING ".parse::<StatGroup>().unwrap(), StatGroup::Pitching);
    }

    #[test]
    fn test_parse_unknown_group() {
        let err = "bowling".parse::<StatGroup>().unwrap_err();
        assert!(matches!(err, MlbError::InvalidStatGroup { .. }));
    }

    #[test]
    fn test_display_round_trips() {
        for group in StatGroup::ALL {
            assert_eq!(group.to_string().parse::<StatGroup>().unwrap(), group);
        }
    }
}
