//! Team, league and sport records.

use super::decode::{Decode, Fields};
use crate::error::ShapeError;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Sport {
    pub id: i64,
    pub link: Option<String>,
    pub name: Option<String>,
    pub code: Option<String>,
    pub abbreviation: Option<String>,
    pub sort_order: Option<i64>,
    pub active_status: Option<bool>,
}

impl Decode for Sport {
    const TYPE_NAME: &'static str = "Sport";

    fn decode_fields(f: &Fields<'_>) -> Result<Self, ShapeError> {
        Ok(Self {
            id: f.required("id")?,
            link: f.optional("link")?,
            name: f.optional("name")?,
            code: f.optional("code")?,
            abbreviation: f.optional("abbreviation")?,
            sort_order: f.optional("sortorder")?,
            active_status: f.optional("activestatus")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct League {
    pub id: i64,
    pub link: Option<String>,
    pub name: Option<String>,
    pub abbreviation: Option<String>,
    pub name_short: Option<String>,
    pub season: Option<String>,
    pub has_wild_card: Option<bool>,
}

impl Decode for League {
    const TYPE_NAME: &'static str = "League";

    fn decode_fields(f: &Fields<'_>) -> Result<Self, ShapeError> {
        Ok(Self {
            id: f.required("id")?,
            link: f.optional("link")?,
            name: f.optional("name")?,
            abbreviation: f.optional("abbreviation")?,
            name_short: f.optional("nameshort")?,
            season: f.optional("season")?,
            has_wild_card: f.optional("haswildcard")?,
        })
    }
}

/// A club. `league` and `sport` are only present on hydrated payloads.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub id: i64,
    pub name: Option<String>,
    pub link: Option<String>,
    pub abbreviation: Option<String>,
    pub team_name: Option<String>,
    pub location_name: Option<String>,
    pub short_name: Option<String>,
    pub franchise_name: Option<String>,
    pub club_name: Option<String>,
    pub first_year_of_play: Option<String>,
    pub season: Option<u32>,
    pub active: Option<bool>,
    pub league: Option<League>,
    pub sport: Option<Sport>,
}

impl Decode for Team {
    const TYPE_NAME: &'static str = "Team";

    fn decode_fields(f: &Fields<'_>) -> Result<Self, ShapeError> {
        Ok(Self {
            id: f.required("id")?,
            name: f.optional("name")?,
            link: f.optional("link")?,
            abbreviation: f.optional("abbreviation")?,
            team_name: f.optional("teamname")?,
            location_name: f.optional("locationname")?,
            short_name: f.optional("shortname")?,
            franchise_name: f.optional("franchisename")?,
            club_name: f.optional("clubname")?,
            first_year_of_play: f.optional("firstyearofplay")?,
            season: f.optional("season")?,
            active: f.optional("active")?,
            league: f.nested("league")?,
            sport: f.nested("sport")?,
        })
    }
}
