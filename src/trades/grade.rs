use log::{debug, info};
use std::cmp::Ordering;
use std::collections::HashMap;
use std::ops::RangeInclusive;

use crate::config::TradeSettings;
use crate::domain::{DraftPickTrade, PlayerId, PlayerWeeklyPoints, RosterId, Transaction, Week};

use super::pick_value::{pick_round_label, pick_value};
use super::types::{Grade, PlayerPoints, TradeGrade, TradeSummary, ValuedPick};

/// Scoring history and clock a trade is judged against
#[derive(Debug, Clone, Copy)]
pub struct TradeContext<'a> {
    pub player_points: &'a [PlayerWeeklyPoints],
    pub player_names: &'a HashMap<PlayerId, String>,
    pub current_week: Week,
    pub current_season: &'a str,
}

/// Grades one side of a trade: post-trade points of players moved plus value of picks moved
pub fn calculate_trade_grade(
    transaction: &Transaction,
    roster_id: RosterId,
    context: &TradeContext,
    settings: &TradeSettings,
) -> TradeGrade {
    let weeks_analyzed = observation_weeks(transaction, context, settings);
    let window = transaction.week.saturating_add(1)..=transaction.week.saturating_add(weeks_analyzed);

    let acquired = score_players(
        players_moved(&transaction.adds, roster_id),
        &transaction.season_id,
        &window,
        context,
    );
    let lost = score_players(
        players_moved(&transaction.drops, roster_id),
        &transaction.season_id,
        &window,
        context,
    );

    let picks_received = value_picks(
        transaction.draft_picks.iter().filter(|p| is_received(p, roster_id)),
        settings,
    );
    let picks_given = value_picks(
        transaction.draft_picks.iter().filter(|p| is_given(p, roster_id)),
        settings,
    );

    let player_differential = total_points(&acquired) - total_points(&lost);
    let pick_value = total_value(&picks_received) - total_value(&picks_given);
    let total_differential = player_differential + pick_value;
    let grade = decide_grade(total_differential, weeks_analyzed, settings);

    debug!(
        "Trade {} for roster {}: {} over {} weeks ({:+.1})",
        transaction.transaction_id,
        roster_id,
        grade.as_str(),
        weeks_analyzed,
        total_differential
    );

    TradeGrade {
        transaction_id: transaction.transaction_id.clone(),
        roster_id,
        season_id: transaction.season_id.clone(),
        week: transaction.week,
        grade,
        player_differential,
        pick_value,
        total_differential,
        weeks_analyzed,
        acquired,
        lost,
        picks_received,
        picks_given,
    }
}

/// Grades every completed trade the roster took part in, newest first
pub fn grade_roster_trades(
    transactions: &[Transaction],
    roster_id: RosterId,
    context: &TradeContext,
    settings: &TradeSettings,
) -> Vec<TradeGrade> {
    let mut trades: Vec<&Transaction> = transactions
        .iter()
        .filter(|t| t.is_completed_trade() && t.involves(roster_id))
        .collect();

    info!("Grading {} trades for roster {}", trades.len(), roster_id);

    trades.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    trades
        .into_iter()
        .map(|t| calculate_trade_grade(t, roster_id, context, settings))
        .collect()
}

pub fn summarize_trades(grades: &[TradeGrade]) -> TradeSummary {
    let mut summary = TradeSummary {
        total: grades.len(),
        ..Default::default()
    };

    for grade in grades {
        match grade.grade {
            Grade::Favorable => summary.favorable += 1,
            Grade::Unfavorable => summary.unfavorable += 1,
            Grade::Pending => {
                summary.pending += 1;
                continue;
            }
        }
        summary.net_differential += grade.total_differential;
    }

    summary
}

/// Weeks after the trade that can be observed. Past seasons are complete.
/// In the current season we cannot look past the current week; a later season
/// has nothing to observe yet.
pub fn observation_weeks(transaction: &Transaction, context: &TradeContext, settings: &TradeSettings) -> u32 {
    let full_window = settings.observation_weeks;

    match compare_seasons(&transaction.season_id, context.current_season) {
        Ordering::Less => full_window,
        Ordering::Greater => 0,
        Ordering::Equal => context
            .current_week
            .saturating_sub(transaction.week)
            .min(full_window),
    }
}

/// Orders seasons by year; ids that are not years only compare as equal or prior
fn compare_seasons(trade_season: &str, current_season: &str) -> Ordering {
    if trade_season == current_season {
        return Ordering::Equal;
    }

    match (trade_season.trim().parse::<i32>(), current_season.trim().parse::<i32>()) {
        (Ok(trade), Ok(current)) => trade.cmp(&current),
        _ => Ordering::Less,
    }
}

pub fn decide_grade(total_differential: f64, weeks_analyzed: u32, settings: &TradeSettings) -> Grade {
    if weeks_analyzed < settings.observation_weeks {
        Grade::Pending
    } else if total_differential >= 0.0 {
        Grade::Favorable
    } else {
        Grade::Unfavorable
    }
}

fn players_moved(moves: &HashMap<PlayerId, RosterId>, roster_id: RosterId) -> Vec<&PlayerId> {
    let mut players: Vec<&PlayerId> = moves
        .iter()
        .filter(|&(_, &target)| target == roster_id)
        .map(|(player, _)| player)
        .collect();
    players.sort();
    players
}

fn score_players(
    players: Vec<&PlayerId>,
    season_id: &str,
    window: &RangeInclusive<Week>,
    context: &TradeContext,
) -> Vec<PlayerPoints> {
    players
        .into_iter()
        .map(|player_id| PlayerPoints {
            player_id: player_id.clone(),
            name: player_name(player_id, context.player_names),
            points: points_in_window(player_id, season_id, window, context.player_points),
        })
        .collect()
}

fn points_in_window(
    player_id: &str,
    season_id: &str,
    window: &RangeInclusive<Week>,
    history: &[PlayerWeeklyPoints],
) -> f64 {
    history
        .iter()
        .filter(|p| p.player_id == player_id && p.season_id == season_id && window.contains(&p.week))
        .map(|p| p.points)
        .sum()
}

fn player_name(player_id: &str, names: &HashMap<PlayerId, String>) -> String {
    names
        .get(player_id)
        .cloned()
        .unwrap_or_else(|| format!("Player {}", player_id))
}

fn is_received(pick: &DraftPickTrade, roster_id: RosterId) -> bool {
    pick.owner_id == roster_id && pick.previous_owner_id != roster_id
}

fn is_given(pick: &DraftPickTrade, roster_id: RosterId) -> bool {
    pick.previous_owner_id == roster_id && pick.owner_id != roster_id
}

fn value_picks<'a>(
    picks: impl Iterator<Item = &'a DraftPickTrade>,
    settings: &TradeSettings,
) -> Vec<ValuedPick> {
    picks
        .map(|pick| ValuedPick {
            season: pick.season.clone(),
            round: pick.round,
            label: pick_round_label(pick.round),
            value: pick_value(pick.round, settings),
        })
        .collect()
}

fn total_points(players: &[PlayerPoints]) -> f64 {
    players.iter().map(|p| p.points).sum()
}

fn total_value(picks: &[ValuedPick]) -> f64 {
    picks.iter().map(|p| p.value).sum()
}
