use crate::domain::{MatchupRecord, RosterId, Week};

use super::types::WeekGroups;

pub fn group_by_week(matchups: &[MatchupRecord]) -> WeekGroups<'_> {
    let mut groups = WeekGroups::new();

    for record in matchups {
        groups.entry(record.week).or_default().push(record);
    }

    groups
}

/// Restricts the groups to weeks up to and including `last_week`
pub fn window_through<'a>(groups: &WeekGroups<'a>, last_week: Week) -> WeekGroups<'a> {
    groups
        .range(..=last_week)
        .map(|(&week, entries)| (week, entries.clone()))
        .collect()
}

pub fn find_entry<'a>(entries: &[&'a MatchupRecord], roster_id: RosterId) -> Option<&'a MatchupRecord> {
    entries.iter().copied().find(|m| m.roster_id == roster_id)
}

/// The other roster sharing `entry`'s matchup id that week
pub fn find_opponent<'a>(
    entries: &[&'a MatchupRecord],
    entry: &MatchupRecord,
) -> Option<&'a MatchupRecord> {
    let matchup_id = entry.matchup_id?;

    entries
        .iter()
        .copied()
        .find(|m| m.matchup_id == Some(matchup_id) && m.roster_id != entry.roster_id)
}

/// Points of `roster_id` for every week it has a record, in week order
pub fn weekly_points(roster_id: RosterId, groups: &WeekGroups) -> Vec<f64> {
    groups
        .values()
        .filter_map(|entries| find_entry(entries, roster_id))
        .map(MatchupRecord::points_or_zero)
        .collect()
}
