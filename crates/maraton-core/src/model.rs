//! Performance and artist records as stored in the programme JSON files

use std::collections::BTreeMap;

use chrono::{DateTime, Duration, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// One scheduled set in the programme.
///
/// Only the fields the consistency rules interpret are typed; everything
/// else the source files carry survives a load/repair/save round trip
/// through `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Performance {
    pub id: String,
    pub artist_id: String,
    pub day_id: String,
    pub stage_id: String,
    pub start_time: DateTime<FixedOffset>,
    pub end_time: DateTime<FixedOffset>,
    pub description: String,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl Performance {
    /// Set length, possibly negative for broken source data.
    pub fn duration(&self) -> Duration {
        self.end_time - self.start_time
    }

    /// 1-based festival-day index encoded in `day_id` (`day-<n>`).
    pub fn day_index(&self) -> Result<u32, CoreError> {
        self.day_id
            .strip_prefix("day-")
            .and_then(|n| n.parse().ok())
            .ok_or_else(|| CoreError::InvalidDayId(self.day_id.clone()))
    }
}

/// An artist record. The rules only interpret `id`; `name`, `description`
/// and `image` are typed for the enrichment passes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Artist {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}
