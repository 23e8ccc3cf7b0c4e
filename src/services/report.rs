use anyhow::{Context, Result};
use log::info;
use std::path::Path;

use crate::config::settings::AppConfig;
use crate::domain::{LeagueSnapshot, RosterId, Week};
use crate::errors::unknown_roster_context;
use crate::keepers::{self, KeeperReport};
use crate::ranking::{self, PowerRankingRow};
use crate::snapshot;
use crate::trades::{self, TradeContext, TradeGrade, TradeSummary};

/// Runs the analytics engine over one loaded league snapshot
pub struct ReportService {
    config: AppConfig,
    snapshot: LeagueSnapshot,
}

impl ReportService {
    pub fn new(config: AppConfig, snapshot: LeagueSnapshot) -> Self {
        Self { config, snapshot }
    }

    pub fn from_file(config: AppConfig, snapshot_path: &Path) -> Result<Self> {
        let snapshot = snapshot::load_snapshot(snapshot_path)?;
        Ok(Self::new(config, snapshot))
    }

    pub fn power_rankings(&self) -> Vec<PowerRankingRow> {
        info!("=== Power Rankings: season {} ===", self.snapshot.season_id);

        ranking::calculate_power_rankings(
            &self.snapshot.matchups,
            &self.snapshot.rosters,
            &self.config.ranking,
        )
    }

    /// Grades the roster's trades as of `current_week`/`current_season`,
    /// defaulting to the snapshot's own clock
    pub fn roster_trades(
        &self,
        roster_id: RosterId,
        current_week: Option<Week>,
        current_season: Option<&str>,
    ) -> Result<(Vec<TradeGrade>, TradeSummary)> {
        self.ensure_roster(roster_id)?;

        let context = TradeContext {
            player_points: &self.snapshot.player_points,
            player_names: &self.snapshot.players,
            current_week: current_week.unwrap_or(self.snapshot.current_week),
            current_season: current_season.unwrap_or(self.snapshot.season_id.as_str()),
        };
        info!(
            "=== Trade Grades: roster {} as of week {} of {} ===",
            roster_id, context.current_week, context.current_season
        );

        let grades = trades::grade_roster_trades(
            &self.snapshot.transactions,
            roster_id,
            &context,
            &self.config.trades,
        );
        let summary = trades::summarize_trades(&grades);
        Ok((grades, summary))
    }

    pub fn keeper_report(&self, roster_id: RosterId) -> Result<KeeperReport> {
        self.ensure_roster(roster_id)?;
        Ok(keepers::roster_keeper_report(&self.snapshot.keepers, roster_id))
    }

    pub fn team_name(&self, roster_id: RosterId) -> String {
        self.snapshot
            .find_roster(roster_id)
            .map(|r| r.display_name())
            .unwrap_or_else(|| format!("Team {}", roster_id))
    }

    fn ensure_roster(&self, roster_id: RosterId) -> Result<()> {
        self.snapshot
            .find_roster(roster_id)
            .map(|_| ())
            .with_context(|| unknown_roster_context(roster_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::parse_snapshot;
    use crate::trades::Grade;

    fn service() -> ReportService {
        let json = r#"{
            "seasonId": "2024",
            "currentWeek": 10,
            "rosters": [{"rosterId": 1, "teamName": "Alpha"}, {"rosterId": 2}],
            "matchups": [
                {"rosterId": 1, "matchupId": 1, "week": 1, "points": 110},
                {"rosterId": 2, "matchupId": 1, "week": 1, "points": 90},
                {"rosterId": 1, "matchupId": 1, "week": 2, "points": 95},
                {"rosterId": 2, "matchupId": 1, "week": 2, "points": 105}
            ],
            "transactions": [{
                "transactionId": "t1", "seasonId": "2024", "week": 2,
                "type": "trade", "status": "complete", "rosterIds": [1, 2],
                "adds": {"p1": 1}, "drops": {"p1": 2},
                "createdAt": 1700000000000
            }],
            "playerPoints": [
                {"playerId": "p1", "week": 3, "seasonId": "2024", "points": 12.5},
                {"playerId": "p1", "week": 4, "seasonId": "2024", "points": 7.5}
            ],
            "players": {"p1": "Flex Guy"},
            "keepers": [
                {"rosterId": 1, "playerId": "k1", "seasonPoints": 180},
                {"rosterId": 2, "playerId": "k2", "seasonPoints": 120}
            ]
        }"#;
        ReportService::new(AppConfig::new(), parse_snapshot(json).unwrap())
    }

    #[test]
    fn test_power_rankings_cover_every_roster() {
        let rows = service().power_rankings();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows.iter().map(|r| r.power_rank).sum::<usize>(), 3);
    }

    #[test]
    fn test_trades_use_snapshot_clock_by_default() {
        let (grades, summary) = service().roster_trades(1, None, None).unwrap();

        assert_eq!(grades.len(), 1);
        assert_eq!(grades[0].weeks_analyzed, 4);
        assert_eq!(grades[0].grade, Grade::Favorable);
        assert_eq!(grades[0].acquired[0].name, "Flex Guy");
        assert_eq!(summary.favorable, 1);
    }

    #[test]
    fn test_trades_with_earlier_clock_are_pending() {
        let (grades, summary) = service().roster_trades(2, Some(4), Some("2024")).unwrap();

        assert_eq!(grades[0].grade, Grade::Pending);
        assert_eq!(grades[0].player_differential, -20.0);
        assert_eq!(summary.pending, 1);
    }

    #[test]
    fn test_unknown_roster_is_an_error() {
        let err = service().roster_trades(7, None, None).unwrap_err();
        assert!(err.to_string().contains("Roster 7 not found"));
        assert!(service().keeper_report(7).is_err());
    }

    #[test]
    fn test_keeper_report() {
        let report = service().keeper_report(1).unwrap();

        assert_eq!(report.league_average, 150.0);
        assert_eq!(report.success_rate, 100.0);
    }
}
