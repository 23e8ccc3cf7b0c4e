use serde::{Deserialize, Serialize};

use crate::domain::{KeeperRecord, RosterId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeeperReport {
    pub roster_id: RosterId,
    pub keepers: usize,
    pub above_average: usize,
    pub league_average: f64,
    /// Percentage, 0-100
    pub success_rate: f64,
}

/// Share of kept players whose season total beat the league keeper average, as a percentage
pub fn keeper_success_rate(kept_totals: &[f64], league_average: f64) -> f64 {
    if kept_totals.is_empty() {
        return 0.0;
    }

    let above = count_above(kept_totals, league_average);
    above as f64 / kept_totals.len() as f64 * 100.0
}

/// Mean season points over every keeper in the league
pub fn league_keeper_average(keepers: &[KeeperRecord]) -> f64 {
    if keepers.is_empty() {
        return 0.0;
    }

    keepers.iter().map(|k| k.season_points).sum::<f64>() / keepers.len() as f64
}

pub fn roster_keeper_report(keepers: &[KeeperRecord], roster_id: RosterId) -> KeeperReport {
    let league_average = league_keeper_average(keepers);
    let kept_totals: Vec<f64> = keepers
        .iter()
        .filter(|k| k.roster_id == roster_id)
        .map(|k| k.season_points)
        .collect();

    KeeperReport {
        roster_id,
        keepers: kept_totals.len(),
        above_average: count_above(&kept_totals, league_average),
        league_average,
        success_rate: keeper_success_rate(&kept_totals, league_average),
    }
}

fn count_above(totals: &[f64], average: f64) -> usize {
    totals.iter().filter(|&&total| total > average).count()
}
