//! Programme file I/O
//!
//! The JSON files are the source of truth; any record that fails to
//! deserialize (unparseable timestamp, missing required field) aborts the
//! run with the offending file named.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use maraton_core::{Artist, Performance};

pub fn load_performances(path: &Path) -> Result<Vec<Performance>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read performances file: {:?}", path))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse performances file: {:?}", path))
}

pub fn load_artists(path: &Path) -> Result<Vec<Artist>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read artists file: {:?}", path))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse artists file: {:?}", path))
}

pub fn save_performances(path: &Path, performances: &[Performance]) -> Result<()> {
    let content = serde_json::to_string_pretty(performances)
        .context("Failed to serialize performances")?;
    fs::write(path, content)
        .with_context(|| format!("Failed to write performances file: {:?}", path))
}

pub fn save_artists(path: &Path, artists: &[Artist]) -> Result<()> {
    let content =
        serde_json::to_string_pretty(artists).context("Failed to serialize artists")?;
    fs::write(path, content).with_context(|| format!("Failed to write artists file: {:?}", path))
}
