//! Pitch-level records: pitch and batted ball tracking, play details and play events.

use super::decode::{Decode, Fields};
use super::leaf::{CodeDesc, Count, HitCoordinates, PitchBreak, PitchCoordinates};
use super::people::{Person, Position};
use crate::error::ShapeError;
use serde::Serialize;

/// Pitch tracking for a single pitch.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PitchData {
    pub strike_zone_top: f64,
    pub strike_zone_bottom: f64,
    pub start_speed: Option<f64>,
    pub end_speed: Option<f64>,
    pub zone: Option<f64>,
    pub type_confidence: Option<f64>,
    pub plate_time: Option<f64>,
    pub extension: Option<f64>,
    pub coordinates: Option<PitchCoordinates>,
    pub breaks: Option<PitchBreak>,
}

impl Decode for PitchData {
    const TYPE_NAME: &'static str = "PitchData";

    fn decode_fields(f: &Fields<'_>) -> Result<Self, ShapeError> {
        Ok(Self {
            strike_zone_top: f.required("strikezonetop")?,
            strike_zone_bottom: f.required("strikezonebottom")?,
            start_speed: f.optional("startspeed")?,
            end_speed: f.optional("endspeed")?,
            zone: f.optional("zone")?,
            type_confidence: f.optional("typeconfidence")?,
            plate_time: f.optional("platetime")?,
            extension: f.optional("extension")?,
            coordinates: f.nested("coordinates")?,
            breaks: f.nested("breaks")?,
        })
    }
}

/// Batted ball tracking. Every field is optional: bunts and foul tips often
/// arrive with nothing but a trajectory.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HitData {
    pub launch_speed: Option<f64>,
    pub launch_angle: Option<f64>,
    pub total_distance: Option<f64>,
    pub trajectory: Option<String>,
    pub hardness: Option<String>,
    pub location: Option<String>,
    pub coordinates: Option<HitCoordinates>,
}

impl Decode for HitData {
    const TYPE_NAME: &'static str = "HitData";

    fn decode_fields(f: &Fields<'_>) -> Result<Self, ShapeError> {
        Ok(Self {
            launch_speed: f.optional("launchspeed")?,
            launch_angle: f.optional("launchangle")?,
            total_distance: f.optional("totaldistance")?,
            trajectory: f.optional("trajectory")?,
            hardness: f.optional("hardness")?,
            location: f.optional("location")?,
            coordinates: f.nested("coordinates")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayDetails {
    pub call: Option<CodeDesc>,
    #[serde(rename = "type")]
    pub pitch_type: Option<CodeDesc>,
    pub bat_side: Option<CodeDesc>,
    pub pitch_hand: Option<CodeDesc>,
    pub description: Option<String>,
    pub event: Option<String>,
    pub event_type: Option<String>,
    pub code: Option<String>,
    pub ball_color: Option<String>,
    pub trail_color: Option<String>,
    pub is_in_play: Option<bool>,
    pub is_strike: Option<bool>,
    pub is_ball: Option<bool>,
    pub is_out: Option<bool>,
    pub is_base_hit: Option<bool>,
    pub is_at_bat: Option<bool>,
    pub is_plate_appearance: Option<bool>,
    pub is_scoring_play: Option<bool>,
    pub runner_going: Option<bool>,
    pub has_review: Option<bool>,
    pub from_catcher: Option<bool>,
    pub away_score: Option<i64>,
    pub home_score: Option<i64>,
}

impl Decode for PlayDetails {
    const TYPE_NAME: &'static str = "PlayDetails";

    fn decode_fields(f: &Fields<'_>) -> Result<Self, ShapeError> {
        Ok(Self {
            call: f.nested("call")?,
            pitch_type: f.nested("type")?,
            bat_side: f.nested("batside")?,
            pitch_hand: f.nested("pitchhand")?,
            description: f.optional("description")?,
            event: f.optional("event")?,
            event_type: f.optional("eventtype")?,
            code: f.optional("code")?,
            ball_color: f.optional("ballcolor")?,
            trail_color: f.optional("trailcolor")?,
            is_in_play: f.optional("isinplay")?,
            is_strike: f.optional("isstrike")?,
            is_ball: f.optional("isball")?,
            is_out: f.optional("isout")?,
            is_base_hit: f.optional("isbasehit")?,
            is_at_bat: f.optional("isatbat")?,
            is_plate_appearance: f.optional("isplateappearance")?,
            is_scoring_play: f.optional("isscoringplay")?,
            runner_going: f.optional("runnergoing")?,
            has_review: f.optional("hasreview")?,
            from_catcher: f.optional("fromcatcher")?,
            away_score: f.optional("awayscore")?,
            home_score: f.optional("homescore")?,
        })
    }
}

/// One event inside a plate appearance: a pitch, a pickoff, a substitution...
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayEvent {
    pub details: PlayDetails,
    pub index: u32,
    pub is_pitch: bool,
    #[serde(rename = "type")]
    pub kind: String,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub play_id: Option<String>,
    pub pitch_number: Option<u32>,
    pub action_play_id: Option<String>,
    pub is_base_running_play: Option<bool>,
    pub is_substitution: Option<bool>,
    pub batting_order: Option<String>,
    pub count: Option<Count>,
    pub pitch_data: Option<PitchData>,
    pub hit_data: Option<HitData>,
    pub player: Option<Person>,
    pub position: Option<Position>,
    pub replaced_player: Option<Person>,
}

impl Decode for PlayEvent {
    const TYPE_NAME: &'static str = "PlayEvent";

    fn decode_fields(f: &Fields<'_>) -> Result<Self, ShapeError> {
        Ok(Self {
            details: f.nested_required("details")?,
            index: f.required("index")?,
            is_pitch: f.required("ispitch")?,
            kind: f.required("type")?,
            start_time: f.optional("starttime")?,
            end_time: f.optional("endtime")?,
            play_id: f.optional("playid")?,
            pitch_number: f.optional("pitchnumber")?,
            action_play_id: f.optional("actionplayid")?,
            is_base_running_play: f.optional("isbaserunningplay")?,
            is_substitution: f.optional("issubstitution")?,
            batting_order: f.optional("battingorder")?,
            count: f.nested("count")?,
            pitch_data: f.nested("pitchdata")?,
            hit_data: f.nested("hitdata")?,
            player: f.nested("player")?,
            position: f.nested("position")?,
            replaced_player: f.nested("replacedplayer")?,
        })
    }
}
