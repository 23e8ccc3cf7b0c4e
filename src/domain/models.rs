use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub type RosterId = i32;
pub type MatchupId = i32;
pub type PlayerId = String;
pub type Week = u32;

/// One roster's result for one week, as exported by the league provider
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchupRecord {
    pub roster_id: RosterId,
    /// Groups the two opposing rosters of a week; absent on a bye
    #[serde(default)]
    pub matchup_id: Option<MatchupId>,
    pub week: Week,
    #[serde(default)]
    pub points: Option<f64>,
}

impl MatchupRecord {
    pub fn points_or_zero(&self) -> f64 {
        self.points.unwrap_or(0.0)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterRecord {
    pub roster_id: RosterId,
    #[serde(default)]
    pub team_name: Option<String>,
}

impl RosterRecord {
    pub fn display_name(&self) -> String {
        self.team_name
            .as_ref()
            .filter(|name| !name.trim().is_empty())
            .cloned()
            .unwrap_or_else(|| format!("Team {}", self.roster_id))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionType {
    Trade,
    Waiver,
    FreeAgent,
    Commissioner,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionStatus {
    Complete,
    Pending,
    Failed,
    #[serde(other)]
    Other,
}

/// A draft pick changing hands as part of a transaction
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftPickTrade {
    /// Draft year, string-encoded ("2025")
    pub season: String,
    /// Rounds 1-6 are keeper slots; 7 and above can be traded
    pub round: u32,
    pub roster_id: RosterId,
    pub previous_owner_id: RosterId,
    pub owner_id: RosterId,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub transaction_id: String,
    pub season_id: String,
    pub week: Week,
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    pub status: TransactionStatus,
    #[serde(default)]
    pub roster_ids: Vec<RosterId>,
    /// player -> roster receiving the player
    #[serde(default)]
    pub adds: HashMap<PlayerId, RosterId>,
    /// player -> roster giving the player up
    #[serde(default)]
    pub drops: HashMap<PlayerId, RosterId>,
    #[serde(default)]
    pub draft_picks: Vec<DraftPickTrade>,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub created_at: DateTime<Utc>,
}

impl Transaction {
    pub fn is_completed_trade(&self) -> bool {
        self.transaction_type == TransactionType::Trade
            && self.status == TransactionStatus::Complete
    }

    pub fn involves(&self, roster_id: RosterId) -> bool {
        self.roster_ids.contains(&roster_id)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerWeeklyPoints {
    pub player_id: PlayerId,
    pub week: Week,
    pub season_id: String,
    pub points: f64,
}

/// A kept player's season total
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeeperRecord {
    pub roster_id: RosterId,
    pub player_id: PlayerId,
    pub season_points: f64,
}

/// Everything the engine needs for one league-season, as exported by ingestion
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LeagueSnapshot {
    pub season_id: String,
    pub current_week: Week,
    pub rosters: Vec<RosterRecord>,
    pub matchups: Vec<MatchupRecord>,
    pub transactions: Vec<Transaction>,
    pub player_points: Vec<PlayerWeeklyPoints>,
    /// player id -> display name
    pub players: HashMap<PlayerId, String>,
    pub keepers: Vec<KeeperRecord>,
}

impl LeagueSnapshot {
    pub fn find_roster(&self, roster_id: RosterId) -> Option<&RosterRecord> {
        self.rosters.iter().find(|r| r.roster_id == roster_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_fallback() {
        let named = RosterRecord { roster_id: 3, team_name: Some("Gridiron Gang".to_string()) };
        let unnamed = RosterRecord { roster_id: 7, team_name: None };
        let blank = RosterRecord { roster_id: 9, team_name: Some("  ".to_string()) };

        assert_eq!(named.display_name(), "Gridiron Gang");
        assert_eq!(unnamed.display_name(), "Team 7");
        assert_eq!(blank.display_name(), "Team 9");
    }

    #[test]
    fn test_transaction_deserializes_provider_shape() {
        let json = r#"{
            "transactionId": "tx-1",
            "seasonId": "2024",
            "week": 5,
            "type": "trade",
            "status": "complete",
            "rosterIds": [1, 2],
            "adds": {"4034": 1},
            "drops": {"4034": 2},
            "draftPicks": [
                {"season": "2025", "round": 7, "rosterId": 2, "previousOwnerId": 2, "ownerId": 1}
            ],
            "createdAt": 1727740800000
        }"#;

        let tx: Transaction = serde_json::from_str(json).unwrap();

        assert!(tx.is_completed_trade());
        assert!(tx.involves(2));
        assert!(!tx.involves(3));
        assert_eq!(tx.adds.get("4034"), Some(&1));
        assert_eq!(tx.draft_picks[0].owner_id, 1);
        assert_eq!(tx.created_at.timestamp_millis(), 1727740800000);
    }

    #[test]
    fn test_unknown_transaction_kind_maps_to_other() {
        let json = r#"{
            "transactionId": "tx-2",
            "seasonId": "2024",
            "week": 2,
            "type": "keeper_swap",
            "status": "vetoed",
            "createdAt": 0
        }"#;

        let tx: Transaction = serde_json::from_str(json).unwrap();

        assert_eq!(tx.transaction_type, TransactionType::Other);
        assert_eq!(tx.status, TransactionStatus::Other);
        assert!(tx.adds.is_empty());
        assert!(tx.draft_picks.is_empty());
    }

    #[test]
    fn test_matchup_with_missing_points_defaults_to_zero() {
        let json = r#"{"rosterId": 4, "week": 1}"#;
        let record: MatchupRecord = serde_json::from_str(json).unwrap();

        assert_eq!(record.matchup_id, None);
        assert_eq!(record.points_or_zero(), 0.0);
    }
}
