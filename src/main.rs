use anyhow::Result;

use league_analytics::cli::Command;
use league_analytics::{handle_completions, handle_keepers, handle_rank, handle_trades, interpret};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let command = interpret();
    execute_command(&command)
}

fn execute_command(command: &Command) -> Result<()> {
    match command {
        Command::Rank { snapshot, config, json } => handle_rank(snapshot, config.as_deref(), *json),
        Command::Trades { snapshot, roster, week, season, config, json } => handle_trades(
            snapshot,
            *roster,
            *week,
            season.as_deref(),
            config.as_deref(),
            *json,
        ),
        Command::Keepers { snapshot, roster, json } => handle_keepers(snapshot, *roster, *json),
        Command::Completions { shell } => handle_completions(*shell),
    }
}
