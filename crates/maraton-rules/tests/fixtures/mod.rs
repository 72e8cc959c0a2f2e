//! Test fixture loader for programme data
//!
//! Provides easy access to the JSON fixtures stored next to this module.

use std::path::PathBuf;

use maraton_core::{Artist, Performance};
use maraton_rules::Schedule;

fn fixture_path(name: &str) -> PathBuf {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("fixtures");
    path.push(format!("{}.json", name));
    path
}

pub fn load_performances(name: &str) -> Vec<Performance> {
    let path = fixture_path(name);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", name, e))
}

pub fn load_artists(name: &str) -> Vec<Artist> {
    let path = fixture_path(name);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", name, e))
}

/// Available test schedules
pub struct Fixtures;

impl Fixtures {
    /// Every rule violated at least once.
    pub fn seeded() -> Schedule {
        Schedule {
            performances: load_performances("performances_seeded"),
            artists: load_artists("artists_seeded"),
        }
    }

    /// Well-formed programme data.
    pub fn clean() -> Schedule {
        Schedule {
            performances: load_performances("performances_clean"),
            artists: load_artists("artists_clean"),
        }
    }
}
