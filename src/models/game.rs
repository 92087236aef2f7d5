//! Game references and the play-by-play feed.

use super::decode::{Decode, Fields};
use super::leaf::{CodeDesc, Count};
use super::people::Person;
use super::play::PlayEvent;
use crate::error::ShapeError;
use serde::Serialize;

/// A game as referenced from logs and schedules.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    pub game_pk: i64,
    pub link: Option<String>,
    pub game_number: Option<u32>,
    pub day_night: Option<String>,
}

impl Decode for Game {
    const TYPE_NAME: &'static str = "Game";

    fn decode_fields(f: &Fields<'_>) -> Result<Self, ShapeError> {
        Ok(Self {
            game_pk: f.required("gamepk")?,
            link: f.optional("link")?,
            game_number: f.optional("gamenumber")?,
            day_night: f.optional("daynight")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayResult {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub event: Option<String>,
    pub event_type: Option<String>,
    pub description: Option<String>,
    pub rbi: Option<i64>,
    pub away_score: Option<i64>,
    pub home_score: Option<i64>,
    pub is_out: Option<bool>,
}

impl Decode for PlayResult {
    const TYPE_NAME: &'static str = "PlayResult";

    fn decode_fields(f: &Fields<'_>) -> Result<Self, ShapeError> {
        Ok(Self {
            kind: f.optional("type")?,
            event: f.optional("event")?,
            event_type: f.optional("eventtype")?,
            description: f.optional("description")?,
            rbi: f.optional("rbi")?,
            away_score: f.optional("awayscore")?,
            home_score: f.optional("homescore")?,
            is_out: f.optional("isout")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayAbout {
    pub at_bat_index: u32,
    pub inning: u32,
    pub half_inning: Option<String>,
    pub is_top_inning: Option<bool>,
    pub is_complete: Option<bool>,
    pub is_scoring_play: Option<bool>,
    pub has_review: Option<bool>,
    pub has_out: Option<bool>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
}

impl Decode for PlayAbout {
    const TYPE_NAME: &'static str = "PlayAbout";

    fn decode_fields(f: &Fields<'_>) -> Result<Self, ShapeError> {
        Ok(Self {
            at_bat_index: f.required("atbatindex")?,
            inning: f.required("inning")?,
            half_inning: f.optional("halfinning")?,
            is_top_inning: f.optional("istopinning")?,
            is_complete: f.optional("iscomplete")?,
            is_scoring_play: f.optional("isscoringplay")?,
            has_review: f.optional("hasreview")?,
            has_out: f.optional("hasout")?,
            start_time: f.optional("starttime")?,
            end_time: f.optional("endtime")?,
        })
    }
}

/// Who faced whom in a plate appearance.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayMatchup {
    pub batter: Person,
    pub pitcher: Person,
    pub bat_side: Option<CodeDesc>,
    pub pitch_hand: Option<CodeDesc>,
}

impl Decode for PlayMatchup {
    const TYPE_NAME: &'static str = "PlayMatchup";

    fn decode_fields(f: &Fields<'_>) -> Result<Self, ShapeError> {
        Ok(Self {
            batter: f.nested_required("batter")?,
            pitcher: f.nested_required("pitcher")?,
            bat_side: f.nested("batside")?,
            pitch_hand: f.nested("pitchhand")?,
        })
    }
}

/// One plate appearance and the events inside it, in the order they happened.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Play {
    pub result: PlayResult,
    pub about: PlayAbout,
    pub count: Option<Count>,
    pub matchup: Option<PlayMatchup>,
    pub play_events: Vec<PlayEvent>,
    pub play_end_time: Option<String>,
}

impl Decode for Play {
    const TYPE_NAME: &'static str = "Play";

    fn decode_fields(f: &Fields<'_>) -> Result<Self, ShapeError> {
        Ok(Self {
            result: f.nested_required("result")?,
            about: f.nested_required("about")?,
            count: f.nested("count")?,
            matchup: f.nested("matchup")?,
            play_events: f.list("playevents")?,
            play_end_time: f.optional("playendtime")?,
        })
    }
}

/// The `game/{gamePk}/playByPlay` feed.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Plays {
    pub all_plays: Vec<Play>,
    pub current_play: Option<Play>,
    pub scoring_plays: Vec<u32>,
}

impl Plays {
    /// Plays that changed the score, resolved against `all_plays`.
    pub fn scoring(&self) -> impl Iterator<Item = &Play> {
        self.scoring_plays
            .iter()
            .filter_map(|&i| self.all_plays.get(i as usize))
    }
}

impl Decode for Plays {
    const TYPE_NAME: &'static str = "Plays";

    fn decode_fields(f: &Fields<'_>) -> Result<Self, ShapeError> {
        Ok(Self {
            all_plays: f.list("allplays")?,
            current_play: f.nested("currentplay")?,
            scoring_plays: f.optional("scoringplays")?.unwrap_or_default(),
        })
    }
}
