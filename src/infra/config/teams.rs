use std::path::Path;

use anyhow::{Context, Result};

use crate::domain::entities::dataset::Team;

/// Parses the static team roster: a JSON array of `{ key, name, ids }`
/// records. Key uniqueness across the list is the config author's
/// responsibility.
pub fn load_teams_json(text: &str) -> Result<Vec<Team>> {
    serde_json::from_str(text).context("failed to parse team configuration")
}

/// Reads team configuration from disk; meant to run once at startup.
pub fn load_teams_file(path: &Path) -> Result<Vec<Team>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read team configuration: {}", path.display()))?;
    load_teams_json(&text)
}
