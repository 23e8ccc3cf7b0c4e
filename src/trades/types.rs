use serde::{Deserialize, Serialize};

use crate::domain::{PlayerId, RosterId, Week};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Grade {
    Favorable,
    Unfavorable,
    /// Not enough weeks observed since the trade
    Pending,
}

impl Grade {
    pub fn as_str(&self) -> &str {
        match self {
            Grade::Favorable => "favorable",
            Grade::Unfavorable => "unfavorable",
            Grade::Pending => "pending",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerPoints {
    pub player_id: PlayerId,
    pub name: String,
    pub points: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValuedPick {
    pub season: String,
    pub round: u32,
    pub label: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeGrade {
    pub transaction_id: String,
    pub roster_id: RosterId,
    pub season_id: String,
    pub week: Week,
    pub grade: Grade,
    pub player_differential: f64,
    pub pick_value: f64,
    pub total_differential: f64,
    pub weeks_analyzed: u32,
    pub acquired: Vec<PlayerPoints>,
    pub lost: Vec<PlayerPoints>,
    pub picks_received: Vec<ValuedPick>,
    pub picks_given: Vec<ValuedPick>,
}

/// Aggregate over a roster's graded trades
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeSummary {
    pub total: usize,
    pub favorable: usize,
    pub unfavorable: usize,
    pub pending: usize,
    /// Sum of total differentials over favorable and unfavorable trades
    pub net_differential: f64,
}
