use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::{MatchupRecord, RosterId, Week};

/// Matchup records of a season keyed by week, ascending
pub type WeekGroups<'a> = BTreeMap<Week, Vec<&'a MatchupRecord>>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyRank {
    pub week: Week,
    pub rank: usize,
    pub points: f64,
}

/// Raw per-roster metrics over some window of weeks
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RosterMetrics {
    pub weekly_points: Vec<f64>,
    pub record: Record,
    pub expected_wins: f64,
    pub consistency: f64,
    pub strength_of_schedule: f64,
    pub should_be: ShouldBeRecord,
}

impl RosterMetrics {
    pub fn points_for(&self) -> f64 {
        self.weekly_points.iter().sum()
    }

    pub fn average_points(&self) -> f64 {
        if self.weekly_points.is_empty() {
            0.0
        } else {
            self.points_for() / self.weekly_points.len() as f64
        }
    }

    pub fn luck_index(&self) -> f64 {
        self.record.wins as f64 - self.expected_wins
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub wins: u32,
    pub losses: u32,
    pub ties: u32,
}

/// Record against the weekly median; median ties count as neither
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShouldBeRecord {
    pub wins: u32,
    pub losses: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PowerRankingRow {
    pub roster_id: RosterId,
    pub team_name: String,
    pub power_rank: usize,
    pub power_score: f64,
    pub wins: u32,
    pub losses: u32,
    pub ties: u32,
    pub points_for: f64,
    pub average_points: f64,
    pub expected_wins: f64,
    pub luck_index: f64,
    pub consistency_score: f64,
    pub strength_of_schedule: f64,
    pub should_be_wins: u32,
    pub should_be_losses: u32,
    pub weeks_played: usize,
    pub weekly_ranks: Vec<WeeklyRank>,
}
