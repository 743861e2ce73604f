use crate::types::dimension::Dimension;
use crate::types::routes::RouteId;
use serde::{Deserialize, Serialize};

pub type Score = f32;

pub fn round1(value: Score) -> Score {
    (value * 10.0).round() / 10.0
}

/// Total mapping from dimension to an optional 0-100 score. A `None`
/// entry means the dimension's three questions were not all answered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DimensionScores {
    #[serde(rename = "TB", default, skip_serializing_if = "Option::is_none")]
    pub tb: Option<Score>,
    #[serde(rename = "LS", default, skip_serializing_if = "Option::is_none")]
    pub ls: Option<Score>,
    #[serde(rename = "TI", default, skip_serializing_if = "Option::is_none")]
    pub ti: Option<Score>,
    #[serde(rename = "GO", default, skip_serializing_if = "Option::is_none")]
    pub go: Option<Score>,
    #[serde(rename = "AI", default, skip_serializing_if = "Option::is_none")]
    pub ai: Option<Score>,
    #[serde(rename = "DM", default, skip_serializing_if = "Option::is_none")]
    pub dm: Option<Score>,
    #[serde(rename = "CC", default, skip_serializing_if = "Option::is_none")]
    pub cc: Option<Score>,
    #[serde(rename = "CR", default, skip_serializing_if = "Option::is_none")]
    pub cr: Option<Score>,
}

impl DimensionScores {
    pub fn get(&self, dimension: Dimension) -> Option<Score> {
        match dimension {
            Dimension::TB => self.tb,
            Dimension::LS => self.ls,
            Dimension::TI => self.ti,
            Dimension::GO => self.go,
            Dimension::AI => self.ai,
            Dimension::DM => self.dm,
            Dimension::CC => self.cc,
            Dimension::CR => self.cr,
        }
    }

    pub fn set(&mut self, dimension: Dimension, score: Score) {
        let slot = match dimension {
            Dimension::TB => &mut self.tb,
            Dimension::LS => &mut self.ls,
            Dimension::TI => &mut self.ti,
            Dimension::GO => &mut self.go,
            Dimension::AI => &mut self.ai,
            Dimension::DM => &mut self.dm,
            Dimension::CC => &mut self.cc,
            Dimension::CR => &mut self.cr,
        };
        *slot = Some(score);
    }

    /// Score with absent entries defaulting to 0. Used wherever a
    /// partial set must still produce a deterministic number.
    pub fn get_or_zero(&self, dimension: Dimension) -> Score {
        self.get(dimension).unwrap_or(0.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Dimension, Option<Score>)> + '_ {
        Dimension::ALL.into_iter().map(|dim| (dim, self.get(dim)))
    }
}

/// Per-route weighted fit scores, present only on the weighted path.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RouteScores {
    #[serde(rename = "T1")]
    pub t1: Score,
    #[serde(rename = "T2")]
    pub t2: Score,
    #[serde(rename = "T3")]
    pub t3: Score,
    #[serde(rename = "T4")]
    pub t4: Score,
    #[serde(rename = "T5")]
    pub t5: Score,
}

impl RouteScores {
    pub fn get(&self, route: RouteId) -> Score {
        match route {
            RouteId::T1 => self.t1,
            RouteId::T2 => self.t2,
            RouteId::T3 => self.t3,
            RouteId::T4 => self.t4,
            RouteId::T5 => self.t5,
        }
    }
}

/// The routing outcome surfaced to callers: either a direct gate match
/// (no numeric route scores) or a weighted ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteDecision {
    pub main_route: RouteId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_route: Option<RouteId>,
    pub is_direct: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scores: Option<RouteScores>,
    pub explanation: String,
    pub share_text: String,
}

/// Full output of one scoring pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assessment {
    pub dimension_scores: DimensionScores,
    pub result: RouteDecision,
}

/// Persisted result shape: what a session stores and reloads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedResult {
    pub dimension_scores: DimensionScores,
    pub final_result: RouteDecision,
    pub timestamp: String,
}
