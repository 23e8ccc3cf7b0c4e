use log::debug;
use std::collections::HashMap;

use crate::config::TrendWeights;
use crate::domain::RosterId;

use super::grouping::{find_entry, window_through};
use super::metrics::compute_roster_metrics;
use super::types::{RosterMetrics, WeekGroups, WeeklyRank};

/// Rank trajectory per roster. Week `w` ranks rosters by their standings through `w`,
/// among the rosters that have a record in `w`.
pub fn calculate_weekly_ranks(
    groups: &WeekGroups,
    roster_ids: &[RosterId],
    weights: &TrendWeights,
) -> HashMap<RosterId, Vec<WeeklyRank>> {
    let mut trajectories: HashMap<RosterId, Vec<WeeklyRank>> = HashMap::new();

    for (&week, entries) in groups {
        let window = window_through(groups, week);

        let present: Vec<(RosterId, f64)> = roster_ids
            .iter()
            .filter_map(|&id| find_entry(entries, id).map(|m| (id, m.points_or_zero())))
            .collect();

        let metrics: Vec<RosterMetrics> = present
            .iter()
            .map(|&(id, _)| compute_roster_metrics(id, &window))
            .collect();

        let max_consistency = max_consistency(&metrics);

        let mut scored: Vec<(RosterId, f64, f64)> = present
            .iter()
            .zip(&metrics)
            .map(|(&(id, points), m)| (id, points, trend_score(m, max_consistency, weights)))
            .collect();

        // Stable: equal scores keep roster-list order
        scored.sort_by(|a, b| b.2.total_cmp(&a.2));

        debug!("Week {}: ranked {} rosters", week, scored.len());

        for (idx, (id, points, _)) in scored.into_iter().enumerate() {
            trajectories.entry(id).or_default().push(WeeklyRank {
                week,
                rank: idx + 1,
                points,
            });
        }
    }

    trajectories
}

fn max_consistency(metrics: &[RosterMetrics]) -> f64 {
    metrics
        .iter()
        .map(|m| m.consistency)
        .fold(0.0_f64, f64::max)
        .max(1.0)
}

pub fn trend_score(metrics: &RosterMetrics, max_consistency: f64, weights: &TrendWeights) -> f64 {
    let normalized_consistency = 1.0 - metrics.consistency / max_consistency;

    weights.wins * metrics.record.wins as f64
        + weights.average_points * metrics.average_points()
        + weights.expected_wins * metrics.expected_wins
        + weights.consistency * normalized_consistency
}
