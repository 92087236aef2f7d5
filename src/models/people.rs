//! Players, coaches and umpires.

use super::decode::{Decode, Fields};
use super::leaf::CodeDesc;
use super::teams::Team;
use crate::error::ShapeError;
use serde::{Deserialize, Serialize};

/// A fielding position (`{"code": "6", "abbreviation": "SS", ...}`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub code: String,
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub abbreviation: Option<String>,
}

impl Decode for Position {
    const TYPE_NAME: &'static str = "Position";

    fn decode_fields(f: &Fields<'_>) -> Result<Self, ShapeError> {
        Ok(Self {
            code: f.required("code")?,
            name: f.optional("name")?,
            kind: f.optional("type")?,
            abbreviation: f.optional("abbreviation")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    pub id: i64,
    pub full_name: String,
    pub link: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub use_name: Option<String>,
    pub boxscore_name: Option<String>,
    pub nick_name: Option<String>,
    pub primary_number: Option<String>,
    pub birth_date: Option<String>,
    pub birth_city: Option<String>,
    pub birth_country: Option<String>,
    pub current_age: Option<u32>,
    pub height: Option<String>,
    pub weight: Option<u32>,
    pub active: Option<bool>,
    pub mlb_debut_date: Option<String>,
    pub draft_year: Option<u32>,
    pub strike_zone_top: Option<f64>,
    pub strike_zone_bottom: Option<f64>,
    pub primary_position: Option<Position>,
    pub pitch_hand: Option<CodeDesc>,
    pub bat_side: Option<CodeDesc>,
    pub current_team: Option<Team>,
}

impl Person {
    /// Case-insensitive match against the full name, accented letters included.
    pub fn is_named(&self, name: &str) -> bool {
        self.full_name.to_lowercase() == name.trim().to_lowercase()
    }
}

impl Decode for Person {
    const TYPE_NAME: &'static str = "Person";

    fn decode_fields(f: &Fields<'_>) -> Result<Self, ShapeError> {
        Ok(Self {
            id: f.required("id")?,
            full_name: f.required("fullname")?,
            link: f.optional("link")?,
            first_name: f.optional("firstname")?,
            last_name: f.optional("lastname")?,
            use_name: f.optional("usename")?,
            boxscore_name: f.optional("boxscorename")?,
            nick_name: f.optional("nickname")?,
            primary_number: f.optional("primarynumber")?,
            birth_date: f.optional("birthdate")?,
            birth_city: f.optional("birthcity")?,
            birth_country: f.optional("birthcountry")?,
            current_age: f.optional("currentage")?,
            height: f.optional("height")?,
            weight: f.optional("weight")?,
            active: f.optional("active")?,
            mlb_debut_date: f.optional("mlbdebutdate")?,
            draft_year: f.optional("draftyear")?,
            strike_zone_top: f.optional("strikezonetop")?,
            strike_zone_bottom: f.optional("strikezonebottom")?,
            primary_position: f.nested("primaryposition")?,
            pitch_hand: f.nested("pitchhand")?,
            bat_side: f.nested("batside")?,
            current_team: f.nested("currentteam")?,
        })
    }
}
