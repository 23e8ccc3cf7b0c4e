use log::info;

use crate::config::{PowerScoreWeights, RankingSettings};
use crate::domain::{MatchupRecord, RosterId, RosterRecord};

use super::grouping::group_by_week;
use super::metrics::compute_roster_metrics;
use super::trend::calculate_weekly_ranks;
use super::types::{PowerRankingRow, RosterMetrics, WeeklyRank};

/// Builds the power rankings report: one row per roster, best first
pub fn calculate_power_rankings(
    matchups: &[MatchupRecord],
    rosters: &[RosterRecord],
    settings: &RankingSettings,
) -> Vec<PowerRankingRow> {
    info!(
        "Calculating power rankings for {} rosters from {} matchup records",
        rosters.len(),
        matchups.len()
    );

    if rosters.is_empty() {
        return Vec::new();
    }

    // 1. Group season by week
    let groups = group_by_week(matchups);
    info!("Found {} weeks with data", groups.len());

    // 2. Per-roster metrics over the whole season
    let metrics: Vec<RosterMetrics> = rosters
        .iter()
        .map(|r| compute_roster_metrics(r.roster_id, &groups))
        .collect();

    // 3. Composite scores
    let maxima = LeagueMaxima::from_metrics(&metrics);
    let scores: Vec<f64> = metrics
        .iter()
        .map(|m| power_score(m, &maxima, &settings.power))
        .collect();

    // 4. Week-by-week trajectories
    let roster_ids: Vec<RosterId> = rosters.iter().map(|r| r.roster_id).collect();
    let mut trajectories = calculate_weekly_ranks(&groups, &roster_ids, &settings.trend);

    // 5. Assemble, order and rank
    let mut rows: Vec<PowerRankingRow> = rosters
        .iter()
        .zip(metrics)
        .zip(scores)
        .map(|((roster, m), score)| {
            let weekly_ranks = trajectories.remove(&roster.roster_id).unwrap_or_default();
            build_row(roster, m, score, weekly_ranks)
        })
        .collect();

    rows.sort_by(|a, b| b.power_score.total_cmp(&a.power_score));
    for (idx, row) in rows.iter_mut().enumerate() {
        row.power_rank = idx + 1;
    }

    info!("Power rankings complete");
    rows
}

/// League-wide maxima used as normalization denominators, floored at 1
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LeagueMaxima {
    pub wins: f64,
    pub average_points: f64,
    pub expected_wins: f64,
    pub consistency: f64,
}

impl LeagueMaxima {
    pub fn from_metrics(metrics: &[RosterMetrics]) -> Self {
        Self {
            wins: floored_max(metrics.iter().map(|m| m.record.wins as f64)),
            average_points: floored_max(metrics.iter().map(RosterMetrics::average_points)),
            expected_wins: floored_max(metrics.iter().map(|m| m.expected_wins)),
            consistency: floored_max(metrics.iter().map(|m| m.consistency)),
        }
    }
}

fn floored_max(values: impl Iterator<Item = f64>) -> f64 {
    values.fold(0.0_f64, f64::max).max(1.0)
}

/// Weighted sum of the normalized metrics; consistency is inverted so steadier scores higher.
/// A roster with no weeks played earns no consistency credit and scores 0.
pub fn power_score(metrics: &RosterMetrics, maxima: &LeagueMaxima, weights: &PowerScoreWeights) -> f64 {
    let wins = metrics.record.wins as f64 / maxima.wins;
    let average_points = metrics.average_points() / maxima.average_points;
    let expected_wins = metrics.expected_wins / maxima.expected_wins;
    let consistency = if metrics.weekly_points.is_empty() {
        0.0
    } else {
        1.0 - metrics.consistency / maxima.consistency
    };

    weights.wins * wins
        + weights.average_points * average_points
        + weights.expected_wins * expected_wins
        + weights.consistency * consistency
}

fn build_row(
    roster: &RosterRecord,
    metrics: RosterMetrics,
    power_score: f64,
    weekly_ranks: Vec<WeeklyRank>,
) -> PowerRankingRow {
    PowerRankingRow {
        roster_id: roster.roster_id,
        team_name: roster.display_name(),
        power_rank: 0, // assigned after sorting
        power_score,
        wins: metrics.record.wins,
        losses: metrics.record.losses,
        ties: metrics.record.ties,
        points_for: metrics.points_for(),
        average_points: metrics.average_points(),
        expected_wins: metrics.expected_wins,
        luck_index: metrics.luck_index(),
        consistency_score: metrics.consistency,
        strength_of_schedule: metrics.strength_of_schedule,
        should_be_wins: metrics.should_be.wins,
        should_be_losses: metrics.should_be.losses,
        weeks_played: metrics.weekly_points.len(),
        weekly_ranks,
    }
}
