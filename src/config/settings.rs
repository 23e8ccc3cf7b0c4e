use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::errors::config_context;

/// Weights of the end-of-season power score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PowerScoreWeights {
    pub wins: f64,
    pub average_points: f64,
    pub expected_wins: f64,
    pub consistency: f64,
}

impl Default for PowerScoreWeights {
    fn default() -> Self {
        Self {
            wins: 0.35,
            average_points: 0.30,
            expected_wins: 0.20,
            consistency: 0.15,
        }
    }
}

/// Weights of the lighter week-by-week ordering score.
/// Average points enter unnormalized, hence the tiny coefficient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrendWeights {
    pub wins: f64,
    pub average_points: f64,
    pub expected_wins: f64,
    pub consistency: f64,
}

impl Default for TrendWeights {
    fn default() -> Self {
        Self {
            wins: 0.35,
            average_points: 0.003,
            expected_wins: 0.20,
            consistency: 0.10,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RankingSettings {
    pub power: PowerScoreWeights,
    pub trend: TrendWeights,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TradeSettings {
    /// Weeks after the trade that must be observed before grading
    pub observation_weeks: u32,
    /// Draft round -> pick value
    pub pick_values: BTreeMap<u32, f64>,
    /// Value of any round missing from `pick_values`
    pub default_pick_value: f64,
}

impl Default for TradeSettings {
    fn default() -> Self {
        Self {
            observation_weeks: 4,
            pick_values: BTreeMap::from([
                (7, 30.0),
                (8, 20.0),
                (9, 12.0),
                (10, 12.0),
                (11, 6.0),
                (12, 6.0),
            ]),
            default_pick_value: 3.0,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub ranking: RankingSettings,
    pub trades: TradeSettings,
}

impl AppConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads overrides from a JSON file; anything the file leaves out keeps its default.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::new());
        };

        let json = fs::read_to_string(path).with_context(|| config_context("read", path))?;
        Self::from_json(&json).with_context(|| config_context("parse", path))
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let config = serde_json::from_str(json)?;
        Ok(config)
    }
}
