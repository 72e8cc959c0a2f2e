//! Performance id parsing (`MM-DD-<slug>`)
//!
//! Programme ids carry their calendar date in a fixed-width `MM-DD-` prefix
//! followed by a human-readable slug (`06-07-dj-x`). This module is the
//! single place that knows about that positional format, replacing raw
//! substring slicing at the call sites.
//!
//! ## Usage
//!
//! ```ignore
//! let id = PerformanceId::parse("06-07-dj-x")?;
//! assert_eq!(id.date_prefix(), "06-07");
//! assert_eq!(id.slug(), "dj-x");
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// A parsed performance id
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PerformanceId {
    /// Calendar month encoded in the prefix
    month: u32,
    /// Calendar day-of-month encoded in the prefix
    day: u32,
    /// Human identifier after the date prefix
    slug: String,
}

/// Errors that can occur during performance-id parsing
#[derive(Debug, Clone, thiserror::Error)]
pub enum PerformanceIdError {
    #[error("Empty performance id")]
    Empty,

    #[error("Performance id has no MM-DD- date prefix: {0}")]
    MissingDatePrefix(String),

    #[error("Performance id encodes an out-of-range date: {0}")]
    DateOutOfRange(String),
}

impl PerformanceId {
    /// Parse a performance id of the form `MM-DD-<slug>`.
    pub fn parse(id: &str) -> Result<Self, PerformanceIdError> {
        if id.is_empty() {
            return Err(PerformanceIdError::Empty);
        }

        // The date prefix is a fixed six-byte slot: two digits, dash, two
        // digits, dash. The dash checks also guarantee the byte ranges
        // below fall on character boundaries.
        let bytes = id.as_bytes();
        if bytes.len() < 6
            || bytes[2] != b'-'
            || bytes[5] != b'-'
            || ![0, 1, 3, 4].iter().all(|&i| bytes[i].is_ascii_digit())
        {
            return Err(PerformanceIdError::MissingDatePrefix(id.to_string()));
        }

        let month = u32::from(bytes[0] - b'0') * 10 + u32::from(bytes[1] - b'0');
        let day = u32::from(bytes[3] - b'0') * 10 + u32::from(bytes[4] - b'0');

        if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
            return Err(PerformanceIdError::DateOutOfRange(id.to_string()));
        }

        Ok(Self {
            month,
            day,
            slug: id[6..].to_string(),
        })
    }

    /// Calendar month encoded in the prefix
    pub fn month(&self) -> u32 {
        self.month
    }

    /// Calendar day-of-month encoded in the prefix
    pub fn day(&self) -> u32 {
        self.day
    }

    /// Human identifier after the date prefix
    pub fn slug(&self) -> &str {
        &self.slug
    }

    /// The zero-padded `MM-DD` prefix
    pub fn date_prefix(&self) -> String {
        format!("{:02}-{:02}", self.month, self.day)
    }

    /// The same slug moved to another calendar date
    pub fn with_date(&self, month: u32, day: u32) -> Self {
        Self {
            month,
            day,
            slug: self.slug.clone(),
        }
    }
}

impl fmt::Display for PerformanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}-{:02}-{}", self.month, self.day, self.slug)
    }
}
