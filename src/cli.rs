use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "league-analytics: power rankings and trade grades for a fantasy league")]
pub struct Cli {
    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// Rank every roster by power score
    Rank {
        /// League snapshot exported by ingestion (JSON)
        #[arg(short, long)]
        snapshot: PathBuf,
        /// Optional JSON file overriding weights and pick values
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Grade every completed trade of a roster
    Trades {
        /// League snapshot exported by ingestion (JSON)
        #[arg(short, long)]
        snapshot: PathBuf,
        /// Roster to evaluate
        #[arg(short, long)]
        roster: i32,
        /// Current week (defaults to the snapshot's current week)
        #[arg(short, long)]
        week: Option<u32>,
        /// Current season (defaults to the snapshot's season)
        #[arg(long)]
        season: Option<String>,
        /// Optional JSON file overriding weights and pick values
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Keeper success rate of a roster
    Keepers {
        /// League snapshot exported by ingestion (JSON)
        #[arg(short, long)]
        snapshot: PathBuf,
        /// Roster to evaluate
        #[arg(short, long)]
        roster: i32,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Print a shell completion script
    Completions {
        shell: Shell,
    },
}
