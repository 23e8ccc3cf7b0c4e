use colored::{ColoredString, Colorize};
use std::fmt::{self, Write};

use crate::keepers::KeeperReport;
use crate::ranking::PowerRankingRow;
use crate::trades::{Grade, PlayerPoints, TradeGrade, TradeSummary, ValuedPick};

pub fn render_power_rankings(rows: &[PowerRankingRow]) -> Result<String, fmt::Error> {
    let mut out = String::new();

    writeln!(
        out,
        "{}",
        format!(
            "{:>4}  {:<24} {:>7} {:>8} {:>7} {:>7} {:>6} {:>7} {:>7} {:>7}  {}",
            "Rank", "Team", "Score", "Record", "Avg", "xW", "Luck", "StdDev", "SOS", "Median", "Trend"
        )
        .bold()
    )?;

    for row in rows {
        let record = format!("{}-{}-{}", row.wins, row.losses, row.ties);
        let should_be = format!("{}-{}", row.should_be_wins, row.should_be_losses);
        let trend = row
            .weekly_ranks
            .iter()
            .map(|w| w.rank.to_string())
            .collect::<Vec<_>>()
            .join(" ");

        writeln!(
            out,
            "{:>4}  {:<24} {:>7.3} {:>8} {:>7.1} {:>7.2} {} {:>7.1} {:>7.1} {:>7}  {}",
            row.power_rank,
            truncate(&row.team_name, 24),
            row.power_score,
            record,
            row.average_points,
            row.expected_wins,
            luck(row.luck_index),
            row.consistency_score,
            row.strength_of_schedule,
            should_be,
            trend.dimmed()
        )?;
    }

    Ok(out)
}

pub fn render_trades(
    team_name: &str,
    grades: &[TradeGrade],
    summary: &TradeSummary,
) -> Result<String, fmt::Error> {
    let mut out = String::new();

    writeln!(out, "{}", format!("Trades for {}", team_name).bold())?;

    if grades.is_empty() {
        writeln!(out, "  No completed trades")?;
        return Ok(out);
    }

    for grade in grades {
        writeln!(
            out,
            "\n  {} (week {}, {}) {}  total {:+.1} over {} weeks",
            grade.transaction_id,
            grade.week,
            grade.season_id,
            grade_label(grade.grade),
            grade.total_differential,
            grade.weeks_analyzed
        )?;
        write_players(&mut out, "+", &grade.acquired)?;
        write_players(&mut out, "-", &grade.lost)?;
        write_picks(&mut out, "+", &grade.picks_received)?;
        write_picks(&mut out, "-", &grade.picks_given)?;
    }

    writeln!(
        out,
        "\n  {} favorable, {} unfavorable, {} pending; net {:+.1}",
        summary.favorable, summary.unfavorable, summary.pending, summary.net_differential
    )?;

    Ok(out)
}

pub fn render_keepers(team_name: &str, report: &KeeperReport) -> String {
    format!(
        "{}\n  {} of {} keepers above the league average of {:.1} ({:.0}%)\n",
        format!("Keepers for {}", team_name).bold(),
        report.above_average,
        report.keepers,
        report.league_average,
        report.success_rate
    )
}

fn write_players(out: &mut String, sign: &str, players: &[PlayerPoints]) -> fmt::Result {
    for player in players {
        writeln!(out, "    {} {:<28} {:>7.1} pts", sign, player.name, player.points)?;
    }
    Ok(())
}

fn write_picks(out: &mut String, sign: &str, picks: &[ValuedPick]) -> fmt::Result {
    for pick in picks {
        writeln!(
            out,
            "    {} {} {:<19} {:>7.1} value",
            sign, pick.season, pick.label, pick.value
        )?;
    }
    Ok(())
}

fn grade_label(grade: Grade) -> ColoredString {
    match grade {
        Grade::Favorable => grade.as_str().green(),
        Grade::Unfavorable => grade.as_str().red(),
        Grade::Pending => grade.as_str().yellow(),
    }
}

fn luck(value: f64) -> ColoredString {
    let text = format!("{:>+6.2}", value);
    if value > 0.0 {
        text.yellow()
    } else if value < 0.0 {
        text.cyan()
    } else {
        text.normal()
    }
}

fn truncate(name: &str, width: usize) -> String {
    if name.chars().count() <= width {
        name.to_string()
    } else {
        let mut short: String = name.chars().take(width - 1).collect();
        short.push('…');
        short
    }
}
