use super::types::{ResultStore, STORE_VERSION};
use anyhow::{Context, Result};
use atomic_write_file::AtomicWriteFile;
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use tracing::info;

/// Get the default store file path (~/.config/lead-triage/scores.json)
pub fn default_store_path() -> Result<PathBuf> {
    Ok(crate::config::get_config_dir()?.join("scores.json"))
}

/// Load stored results from a JSON file
///
/// If the file doesn't exist, returns a new empty store.
/// If the file exists but has an unsupported version, returns an error.
pub fn load_store(path: &Path) -> Result<ResultStore> {
    if !path.exists() {
        return Ok(ResultStore::new());
    }

    let file = File::open(path)
        .with_context(|| format!("Failed to open score store at {}", path.display()))?;

    let store: ResultStore =
        serde_json::from_reader(file).context("Failed to load score store")?;

    if store.version != STORE_VERSION {
        anyhow::bail!("Unsupported score store version: {}", store.version);
    }

    Ok(store)
}

/// Save stored results to a JSON file atomically
///
/// Creates the parent directory if it doesn't exist.
pub fn save_store(path: &Path, store: &ResultStore) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory at {}", parent.display()))?;
        }
    }

    let mut file = AtomicWriteFile::open(path)
        .with_context(|| format!("Failed to open atomic write file at {}", path.display()))?;

    serde_json::to_writer_pretty(&mut file, store).context("Failed to serialize score store")?;

    file.commit().context("Failed to save score store")?;

    info!(path = %path.display(), leads = store.len(), "saved score store");
    Ok(())
}
