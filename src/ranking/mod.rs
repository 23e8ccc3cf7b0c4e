pub mod grouping;
pub mod metrics;
pub mod power_score;
pub mod trend;
pub mod types;

pub use power_score::calculate_power_rankings;
pub use trend::calculate_weekly_ranks;
pub use types::{PowerRankingRow, Record, RosterMetrics, ShouldBeRecord, WeeklyRank};
