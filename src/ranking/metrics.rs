use ndarray::Array1;

use crate::domain::{MatchupRecord, RosterId};

use super::grouping::{find_entry, find_opponent, weekly_points};
use super::types::{Record, RosterMetrics, ShouldBeRecord, WeekGroups};

/// Runs every per-roster calculator over the given weeks
pub fn compute_roster_metrics(roster_id: RosterId, groups: &WeekGroups) -> RosterMetrics {
    let weekly_points = weekly_points(roster_id, groups);
    let consistency = consistency_score(&weekly_points);

    RosterMetrics {
        record: actual_record(roster_id, groups),
        expected_wins: expected_wins(roster_id, groups),
        consistency,
        strength_of_schedule: strength_of_schedule(roster_id, groups),
        should_be: should_be_record(roster_id, groups),
        weekly_points,
    }
}

/// Win/loss/tie against the matchup-linked opponent
pub fn actual_record(roster_id: RosterId, groups: &WeekGroups) -> Record {
    let mut record = Record::default();

    for entries in groups.values() {
        let Some(entry) = find_entry(entries, roster_id) else {
            continue;
        };
        let Some(opponent) = find_opponent(entries, entry) else {
            continue;
        };

        let points = entry.points_or_zero();
        let opponent_points = opponent.points_or_zero();

        if points > opponent_points {
            record.wins += 1;
        } else if points < opponent_points {
            record.losses += 1;
        } else {
            record.ties += 1;
        }
    }

    record
}

/// Schedule-independent wins: the share of the league beaten each week, summed
pub fn expected_wins(roster_id: RosterId, groups: &WeekGroups) -> f64 {
    groups
        .values()
        .filter_map(|entries| weekly_expected_wins(roster_id, entries))
        .sum()
}

fn weekly_expected_wins(roster_id: RosterId, entries: &[&MatchupRecord]) -> Option<f64> {
    let points = find_entry(entries, roster_id)?.points_or_zero();

    let others: Vec<f64> = entries
        .iter()
        .filter(|m| m.roster_id != roster_id)
        .map(|m| m.points_or_zero())
        .collect();

    if others.is_empty() {
        return None;
    }

    let beaten: f64 = others.iter().map(|&other| compare_for_expected(points, other)).sum();
    Some(beaten / others.len() as f64)
}

fn compare_for_expected(points: f64, other: f64) -> f64 {
    if points > other {
        1.0
    } else if points == other {
        0.5
    } else {
        0.0
    }
}

/// Population standard deviation of weekly points; lower is steadier
pub fn consistency_score(weekly_points: &[f64]) -> f64 {
    if weekly_points.is_empty() {
        return 0.0;
    }

    Array1::from(weekly_points.to_vec()).std(0.0)
}

/// Mean points scored by the roster's actual opponents
pub fn strength_of_schedule(roster_id: RosterId, groups: &WeekGroups) -> f64 {
    let opponent_points: Array1<f64> = groups
        .values()
        .filter_map(|entries| {
            let entry = find_entry(entries, roster_id)?;
            find_opponent(entries, entry)
        })
        .map(MatchupRecord::points_or_zero)
        .collect();

    opponent_points.mean().unwrap_or(0.0)
}

/// Record against each week's league median
pub fn should_be_record(roster_id: RosterId, groups: &WeekGroups) -> ShouldBeRecord {
    let mut record = ShouldBeRecord::default();

    for entries in groups.values() {
        let Some(entry) = find_entry(entries, roster_id) else {
            continue;
        };

        let week_points: Vec<f64> = entries.iter().map(|m| m.points_or_zero()).collect();
        let Some(week_median) = median(&week_points) else {
            continue;
        };

        let points = entry.points_or_zero();
        if points > week_median {
            record.wins += 1;
        } else if points < week_median {
            record.losses += 1;
        }
    }

    record
}

pub fn median(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        Some((sorted[mid - 1] + sorted[mid]) / 2.0)
    } else {
        Some(sorted[mid])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Week;
    use crate::ranking::grouping::group_by_week;

    const EPSILON: f64 = 1e-9;

    fn record(roster_id: RosterId, matchup_id: Option<i32>, week: Week, points: f64) -> MatchupRecord {
        MatchupRecord { roster_id, matchup_id, week, points: Some(points) }
    }

    /// A [100, 110, 90] vs B [95, 95, 95], paired every week
    fn head_to_head() -> Vec<MatchupRecord> {
        vec![
            record(1, Some(1), 1, 100.0),
            record(2, Some(1), 1, 95.0),
            record(1, Some(1), 2, 110.0),
            record(2, Some(1), 2, 95.0),
            record(1, Some(1), 3, 90.0),
            record(2, Some(1), 3, 95.0),
        ]
    }

    #[test]
    fn test_head_to_head_season() {
        let matchups = head_to_head();
        let groups = group_by_week(&matchups);

        let metrics = compute_roster_metrics(1, &groups);

        assert!((metrics.expected_wins - 2.0).abs() < EPSILON);
        assert_eq!(metrics.record, Record { wins: 2, losses: 1, ties: 0 });
        assert!((metrics.consistency - 8.164_965_809).abs() < 1e-6);
        assert!((metrics.strength_of_schedule - 95.0).abs() < EPSILON);
        assert!((metrics.luck_index() - 0.0).abs() < EPSILON);
    }

    #[test]
    fn test_expected_wins_counts_every_roster_and_halves_ties() {
        let matchups = vec![
            record(1, Some(1), 1, 100.0),
            record(2, Some(1), 1, 100.0),
            record(3, Some(2), 1, 80.0),
            record(4, Some(2), 1, 120.0),
        ];
        let groups = group_by_week(&matchups);

        // beats 3, ties 2, loses to 4: (1 + 0.5) / 3
        assert!((expected_wins(1, &groups) - 0.5).abs() < EPSILON);
        assert!((expected_wins(4, &groups) - 1.0).abs() < EPSILON);
        assert!((expected_wins(3, &groups) - 0.0).abs() < EPSILON);
    }

    #[test]
    fn test_expected_wins_ceiling_for_weekly_top_scorer() {
        let mut matchups = Vec::new();
        for week in 1..=5 {
            matchups.push(record(1, Some(1), week, 150.0));
            matchups.push(record(2, Some(1), week, 100.0));
            matchups.push(record(3, Some(2), week, 90.0));
            matchups.push(record(4, Some(2), week, 140.0));
        }
        let groups = group_by_week(&matchups);

        assert!((expected_wins(1, &groups) - 5.0).abs() < EPSILON);
    }

    #[test]
    fn test_actual_record_counts_ties_and_skips_byes() {
        let matchups = vec![
            record(1, Some(1), 1, 100.0),
            record(2, Some(1), 1, 100.0),
            record(1, None, 2, 130.0),
            record(2, None, 2, 70.0),
        ];
        let groups = group_by_week(&matchups);

        assert_eq!(actual_record(1, &groups), Record { wins: 0, losses: 0, ties: 1 });
        assert_eq!(strength_of_schedule(1, &groups), 100.0);
    }

    #[test]
    fn test_missing_opponent_points_default_to_zero() {
        let matchups = vec![
            record(1, Some(1), 1, 50.0),
            MatchupRecord { roster_id: 2, matchup_id: Some(1), week: 1, points: None },
        ];
        let groups = group_by_week(&matchups);

        assert_eq!(actual_record(1, &groups).wins, 1);
        assert_eq!(actual_record(2, &groups).losses, 1);
        assert_eq!(strength_of_schedule(1, &groups), 0.0);
    }

    #[test]
    fn test_should_be_record_ignores_median_ties() {
        // Odd count: the middle roster sits exactly on the median
        let matchups = vec![
            record(1, Some(1), 1, 120.0),
            record(2, Some(1), 1, 100.0),
            record(3, None, 1, 80.0),
        ];
        let groups = group_by_week(&matchups);

        assert_eq!(should_be_record(1, &groups), ShouldBeRecord { wins: 1, losses: 0 });
        assert_eq!(should_be_record(2, &groups), ShouldBeRecord { wins: 0, losses: 0 });
        assert_eq!(should_be_record(3, &groups), ShouldBeRecord { wins: 0, losses: 1 });
    }

    #[test]
    fn test_median_averages_middle_pair() {
        assert_eq!(median(&[90.0, 100.0, 80.0, 120.0]), Some(95.0));
        assert_eq!(median(&[3.0]), Some(3.0));
        assert_eq!(median(&[]), None);
    }

    #[test]
    fn test_roster_without_data_is_all_zero() {
        let matchups = head_to_head();
        let groups = group_by_week(&matchups);

        let metrics = compute_roster_metrics(99, &groups);

        assert!(metrics.weekly_points.is_empty());
        assert_eq!(metrics.record, Record::default());
        assert_eq!(metrics.expected_wins, 0.0);
        assert_eq!(metrics.consistency, 0.0);
        assert_eq!(metrics.strength_of_schedule, 0.0);
        assert_eq!(metrics.average_points(), 0.0);
    }

    #[test]
    fn test_consistency_of_flat_scoring_is_zero() {
        assert_eq!(consistency_score(&[95.0, 95.0, 95.0]), 0.0);
        assert_eq!(consistency_score(&[]), 0.0);
    }
}
