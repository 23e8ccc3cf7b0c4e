pub mod settings;

pub use settings::{AppConfig, PowerScoreWeights, RankingSettings, TradeSettings, TrendWeights};
