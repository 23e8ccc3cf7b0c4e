use crate::config::TradeSettings;

/// Rounds up to this one are keeper slots and never traded
pub const LAST_KEEPER_ROUND: u32 = 6;

pub fn pick_value(round: u32, settings: &TradeSettings) -> f64 {
    settings
        .pick_values
        .get(&round)
        .copied()
        .unwrap_or(settings.default_pick_value)
}

/// Display name of a round: the first tradeable round is the "1st round"
pub fn pick_round_label(round: u32) -> String {
    if round <= LAST_KEEPER_ROUND {
        return format!("Keeper round {}", round);
    }

    match round - LAST_KEEPER_ROUND {
        1 => "1st round".to_string(),
        2 => "2nd round".to_string(),
        3 => "3rd round".to_string(),
        n @ 4..=6 => format!("{}th round", n),
        _ => "7th+ round".to_string(),
    }
}
