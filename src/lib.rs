pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod keepers;
pub mod ranking;
pub mod services;
pub mod snapshot;
pub mod trades;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use cli::Cli;
use serde::Serialize;
use std::io;
use std::path::Path;

use crate::cli::Command;
use crate::config::settings::AppConfig;
use crate::services::render;
use crate::services::ReportService;

pub fn interpret() -> Command {
    let cli = Cli::parse();
    cli.command
}

pub fn handle_rank(snapshot: &Path, config: Option<&Path>, json: bool) -> Result<()> {
    let config = AppConfig::load(config)?;
    let service = ReportService::from_file(config, snapshot)?;

    let rows = service.power_rankings();
    if json {
        print_json(&rows)
    } else {
        print!("{}", render::render_power_rankings(&rows)?);
        Ok(())
    }
}

pub fn handle_trades(
    snapshot: &Path,
    roster_id: i32,
    week: Option<u32>,
    season: Option<&str>,
    config: Option<&Path>,
    json: bool,
) -> Result<()> {
    let config = AppConfig::load(config)?;
    let service = ReportService::from_file(config, snapshot)?;

    let (grades, summary) = service.roster_trades(roster_id, week, season)?;
    if json {
        print_json(&serde_json::json!({ "trades": grades, "summary": summary }))
    } else {
        let team_name = service.team_name(roster_id);
        print!("{}", render::render_trades(&team_name, &grades, &summary)?);
        Ok(())
    }
}

pub fn handle_keepers(snapshot: &Path, roster_id: i32, json: bool) -> Result<()> {
    let service = ReportService::from_file(AppConfig::new(), snapshot)?;

    let report = service.keeper_report(roster_id)?;
    if json {
        print_json(&report)
    } else {
        let team_name = service.team_name(roster_id);
        print!("{}", render::render_keepers(&team_name, &report));
        Ok(())
    }
}

pub fn handle_completions(shell: Shell) -> Result<()> {
    let mut command = Cli::command();
    let name = command.get_name().to_string();
    clap_complete::generate(shell, &mut command, name, &mut io::stdout());
    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
