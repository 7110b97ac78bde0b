use anyhow::{Context, Result};
use atomic_write_file::AtomicWriteFile;
use std::fs;
use std::io::Write;
use std::path::Path;

use super::Config;
use crate::scoring::{PartialScoringConfig, ScoringConfig};

const HEADER: &str = "\
# lead-triage configuration
#
# scoring.weights should sum to 1.0; they are not renormalized.
# scoring.thresholds are minimum scores for the hot, warm and cold tiers.
";

/// Write a config file containing the default scoring configuration.
///
/// Refuses to replace an existing file unless `force` is set.
pub fn write_default_config(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        anyhow::bail!(
            "Config file already exists at {} (use --force to overwrite)",
            path.display()
        );
    }

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory at {}", parent.display())
            })?;
        }
    }

    let defaults = ScoringConfig::default();
    let config = Config {
        scoring: Some(PartialScoringConfig {
            weights: Some(defaults.weights),
            thresholds: Some(defaults.thresholds),
            version: Some(defaults.version),
        }),
        store_path: None,
    };
    let yaml = serde_saphyr::to_string(&config).context("Failed to serialize config")?;

    let mut file = AtomicWriteFile::open(path)
        .with_context(|| format!("Failed to open atomic write file at {}", path.display()))?;
    file.write_all(HEADER.as_bytes())
        .and_then(|_| file.write_all(yaml.as_bytes()))
        .context("Failed to write config")?;
    file.commit().context("Failed to save config")?;

    Ok(())
}
