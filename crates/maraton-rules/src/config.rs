//! Per-run configuration for the rule battery

use chrono::Duration;

/// Tunables for the consistency rules.
///
/// The defaults carry the reference programme data. Marker strings are
/// matched as substrings of ids, mirroring how the source data tags these
/// slots.
#[derive(Debug, Clone)]
pub struct ValidatorConfig {
    /// Id substring marking an intentionally long continuous block,
    /// exempt from the maximum-duration rule.
    pub long_block_marker: String,
    /// Artist-id substring marking the daily tombola slot.
    pub tombola_marker: String,
    /// Stage carrying remote broadcasts.
    pub caravan_stage: String,
    /// Caption every remote-broadcast performance must carry.
    pub caravan_caption: String,
    /// Stages exempt from the closing-set floor.
    pub closing_exempt_stages: Vec<String>,
    /// Maximum set length.
    pub max_set: Duration,
    /// Minimum length of the last set of a day on a non-exempt stage.
    pub closing_floor: Duration,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            long_block_marker: "heti-betevo".to_string(),
            tombola_marker: "tombola".to_string(),
            caravan_stage: "tilos-caravan-studio".to_string(),
            caravan_caption: "Élő közvetítés a Dürer Kertből".to_string(),
            closing_exempt_stages: vec![
                "kerti-szinpad".to_string(),
                "bogracs".to_string(),
                "etc".to_string(),
                "tilos-caravan-studio".to_string(),
            ],
            max_set: Duration::hours(5),
            closing_floor: Duration::hours(2),
        }
    }
}

impl ValidatorConfig {
    pub fn is_closing_exempt(&self, stage_id: &str) -> bool {
        self.closing_exempt_stages.iter().any(|s| s == stage_id)
    }
}
