//! The nine consistency rules
//!
//! Each rule is a pure function over the loaded collections: it reads,
//! reports, and for the repairing rules returns [`Repair`](crate::Repair)
//! values instead of mutating shared state. The orchestrator in
//! [`validator`](crate::validator) decides when repairs are folded back.

mod integrity;
mod timing;

pub use integrity::{
    artist_references, caravan_caption, duplicate_artists, duplicate_performances,
    tombola_coverage,
};
pub use timing::{closing_sets, day_assignment, id_prefix, max_duration};

use chrono::Duration;

/// Fractional hours, the way the diagnostics print them.
pub(crate) fn hours(duration: Duration) -> f64 {
    duration.num_seconds() as f64 / 3600.0
}

#[cfg(test)]
pub(crate) mod testutil {
    use chrono::DateTime;
    use maraton_core::{Artist, Performance};

    pub fn perf(
        id: &str,
        artist_id: &str,
        day_id: &str,
        stage_id: &str,
        start: &str,
        end: &str,
    ) -> Performance {
        Performance {
            id: id.to_string(),
            artist_id: artist_id.to_string(),
            day_id: day_id.to_string(),
            stage_id: stage_id.to_string(),
            start_time: DateTime::parse_from_rfc3339(start).unwrap(),
            end_time: DateTime::parse_from_rfc3339(end).unwrap(),
            description: String::new(),
            extra: Default::default(),
        }
    }

    pub fn artist(id: &str, name: &str) -> Artist {
        Artist {
            id: id.to_string(),
            name: name.to_string(),
            description: None,
            image: None,
            extra: Default::default(),
        }
    }
}
