//! Leaf value objects: flat records with no nested decoding.
//!
//! Optional fields decode to `None` when the API leaves them out, so an
//! omitted value can always be told apart from a real zero.

use super::decode::flat_decode;
use serde::{Deserialize, Serialize};

/// A code with its human readable description (`{"code": "R", "description": "Right"}`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeDesc {
    pub code: String,
    pub description: Option<String>,
}

flat_decode!(CodeDesc, ["code"]);

/// Ball/strike/out count, plus base and inning state when the endpoint sends it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Count {
    pub balls: u32,
    pub outs: u32,
    pub strikes: u32,
    pub inning: Option<u32>,
    #[serde(rename = "istopinning")]
    pub is_top_inning: Option<bool>,
    #[serde(rename = "runneron1b")]
    pub runner_on_1b: Option<bool>,
    #[serde(rename = "runneron2b")]
    pub runner_on_2b: Option<bool>,
    #[serde(rename = "runneron3b")]
    pub runner_on_3b: Option<bool>,
}

flat_decode!(Count, ["balls", "outs", "strikes"]);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PitchBreak {
    #[serde(rename = "breakangle")]
    pub break_angle: f64,
    #[serde(rename = "breaklength")]
    pub break_length: f64,
    #[serde(rename = "breaky")]
    pub break_y: f64,
    #[serde(rename = "breakvertical")]
    pub break_vertical: Option<f64>,
    #[serde(rename = "breakverticalinduced")]
    pub break_vertical_induced: Option<f64>,
    #[serde(rename = "breakhorizontal")]
    pub break_horizontal: Option<f64>,
    #[serde(rename = "spinrate")]
    pub spin_rate: Option<f64>,
    #[serde(rename = "spindirection")]
    pub spin_direction: Option<f64>,
}

flat_decode!(PitchBreak, ["breakangle", "breaklength", "breaky"]);

/// Pitch trajectory: release point, velocity, acceleration and plate location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PitchCoordinates {
    pub ax: f64,
    pub ay: f64,
    pub az: f64,
    pub pfxx: f64,
    pub pfxz: f64,
    pub px: f64,
    pub pz: f64,
    pub vx0: f64,
    pub vy0: f64,
    pub vz0: f64,
    pub x0: f64,
    pub y0: f64,
    pub z0: f64,
    pub x: Option<f64>,
    pub y: Option<f64>,
}

flat_decode!(
    PitchCoordinates,
    ["ax", "ay", "az", "pfxx", "pfxz", "px", "pz", "vx0", "vy0", "vz0", "x0", "y0", "z0"]
);

/// Where a batted ball landed, in spray chart pixels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HitCoordinates {
    #[serde(rename = "coordx")]
    pub coord_x: f64,
    #[serde(rename = "coordy")]
    pub coord_y: f64,
}

impl HitCoordinates {
    pub fn x(&self) -> f64 {
        self.coord_x
    }

    pub fn y(&self) -> f64 {
        self.coord_y
    }
}

flat_decode!(HitCoordinates, ["coordx", "coordy"]);

/// One cell of a hot/cold zone grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Zone {
    pub zone: String,
    pub color: Option<String>,
    pub temp: Option<String>,
    pub value: Option<String>,
}

flat_decode!(Zone, ["zone"]);

/// Spray chart distribution, as percentages per outfield sector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chart {
    #[serde(rename = "leftfield")]
    pub left_field: f64,
    #[serde(rename = "leftcenterfield")]
    pub left_center_field: f64,
    #[serde(rename = "centerfield")]
    pub center_field: f64,
    #[serde(rename = "rightcenterfield")]
    pub right_center_field: f64,
    #[serde(rename = "rightfield")]
    pub right_field: f64,
}

flat_decode!(
    Chart,
    ["centerfield", "leftcenterfield", "leftfield", "rightcenterfield", "rightfield"]
);
