pub mod grade;
pub mod pick_value;
pub mod types;

pub use grade::{calculate_trade_grade, grade_roster_trades, summarize_trades, TradeContext};
pub use pick_value::{pick_round_label, pick_value};
pub use types::{Grade, PlayerPoints, TradeGrade, TradeSummary, ValuedPick};
