use anyhow::{Context, Result};
use log::info;
use std::fs;
use std::path::Path;

use crate::domain::LeagueSnapshot;
use crate::errors::snapshot_context;

/// Reads a league snapshot exported by the ingestion layer
pub fn load_snapshot(path: &Path) -> Result<LeagueSnapshot> {
    if !path.exists() {
        anyhow::bail!("League snapshot not found: {}", path.display());
    }

    let json = fs::read_to_string(path).with_context(|| snapshot_context("read", path))?;
    let snapshot = parse_snapshot(&json).with_context(|| snapshot_context("parse", path))?;

    info!(
        "Loaded snapshot {}: season {}, {} rosters, {} matchups, {} transactions",
        path.display(),
        snapshot.season_id,
        snapshot.rosters.len(),
        snapshot.matchups.len(),
        snapshot.transactions.len()
    );
    Ok(snapshot)
}

pub fn parse_snapshot(json: &str) -> Result<LeagueSnapshot> {
    serde_json::from_str(json).with_context(|| {
        format!(
            "Invalid snapshot JSON. First 200 chars: {}",
            json.chars().take(200).collect::<String>()
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_snapshot() {
        let json = r#"{
            "seasonId": "2024",
            "currentWeek": 9,
            "rosters": [{"rosterId": 1, "teamName": "Alpha"}, {"rosterId": 2}],
            "matchups": [
                {"rosterId": 1, "matchupId": 1, "week": 1, "points": 101.5},
                {"rosterId": 2, "matchupId": 1, "week": 1, "points": null}
            ],
            "players": {"4034": "Some Back"}
        }"#;

        let snapshot = parse_snapshot(json).unwrap();

        assert_eq!(snapshot.season_id, "2024");
        assert_eq!(snapshot.current_week, 9);
        assert_eq!(snapshot.rosters.len(), 2);
        assert_eq!(snapshot.matchups[1].points, None);
        assert!(snapshot.transactions.is_empty());
        assert!(snapshot.keepers.is_empty());
        assert_eq!(snapshot.find_roster(2).map(|r| r.display_name()), Some("Team 2".to_string()));
    }

    #[test]
    fn test_malformed_snapshot_reports_preview() {
        let err = parse_snapshot("{\"rosters\": 5}").unwrap_err();
        assert!(format!("{:#}", err).contains("Invalid snapshot JSON"));
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let err = load_snapshot(Path::new("does/not/exist.json")).unwrap_err();
        assert!(err.to_string().contains("not found"));
    }
}
