use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

use super::types::{EngagementHistory, IntakeRecord};

/// Parse a submission document. `.json` files go through serde_json,
/// everything else is treated as YAML.
fn load_document<T: DeserializeOwned>(path: &Path, what: &str) -> Result<T> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {} file at {}", what, path.display()))?;

    let is_json = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("json"));

    if is_json {
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse {}: invalid JSON in {}", what, path.display()))
    } else {
        serde_saphyr::from_str(&content)
            .with_context(|| format!("Failed to parse {}: invalid YAML in {}", what, path.display()))
    }
}

/// Load an intake submission from a YAML or JSON file
pub fn load_intake(path: &Path) -> Result<IntakeRecord> {
    load_document(path, "intake")
}

/// Load an engagement history from a YAML or JSON file
pub fn load_engagement(path: &Path) -> Result<EngagementHistory> {
    load_document(path, "engagement")
}
