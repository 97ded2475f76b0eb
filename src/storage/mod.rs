//! Profile and report file I/O.
//!
//! Profiles are stored as single JSON documents, loaded and saved only on
//! explicit request; the engine itself never touches the filesystem.

use std::fs;
use std::path::Path;

use thiserror::Error;
use tracing::debug;

use crate::models::PlayerProfile;

/// Storage errors.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse profile: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Load a player profile from a JSON file.
pub fn load_profile(path: &Path) -> Result<PlayerProfile, StorageError> {
    let contents = fs::read_to_string(path)?;
    let profile = serde_json::from_str(&contents)?;
    debug!("Loaded profile from {:?}", path);
    Ok(profile)
}

/// Save a player profile as pretty-printed JSON.
pub fn save_profile(path: &Path, profile: &PlayerProfile) -> Result<(), StorageError> {
    ensure_parent(path)?;
    let mut contents = serde_json::to_string_pretty(profile)?;
    contents.push('\n');
    fs::write(path, contents)?;
    debug!("Saved profile to {:?}", path);
    Ok(())
}

/// Write a rendered report to a file.
pub fn export_report(path: &Path, report: &str) -> Result<(), StorageError> {
    ensure_parent(path)?;
    fs::write(path, report)?;
    debug!("Exported report to {:?}", path);
    Ok(())
}

fn ensure_parent(path: &Path) -> Result<(), StorageError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}
