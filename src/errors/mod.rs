use std::path::Path;

/// Add context to snapshot errors
pub fn snapshot_context(operation: &str, path: &Path) -> String {
    format!("Failed to {} league snapshot: {}", operation, path.display())
}

/// Add context to config errors
pub fn config_context(operation: &str, path: &Path) -> String {
    format!("Failed to {} config file: {}", operation, path.display())
}

/// Add context to lookups of a roster the snapshot does not know
pub fn unknown_roster_context(roster_id: i32) -> String {
    format!("Roster {} not found in snapshot", roster_id)
}
