//! Civil-day arithmetic relative to the festival epoch
//!
//! Festival days run past midnight: a set starting at 01:30 still belongs
//! to the programming day that began the previous afternoon. Everything
//! here computes in the epoch's fixed UTC offset, so the results do not
//! depend on the host timezone or locale.

use chrono::{DateTime, Datelike, Duration, FixedOffset, NaiveDate, Timelike};

use crate::error::CoreError;

/// Local hour below which a start time is attributed to the previous
/// festival day.
pub const MORNING_CUTOFF_HOUR: u32 = 8;

/// The festival's day-numbering scheme, anchored at the civil start
/// instant of day 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FestivalCalendar {
    epoch: DateTime<FixedOffset>,
}

impl FestivalCalendar {
    pub fn new(epoch: DateTime<FixedOffset>) -> Self {
        Self { epoch }
    }

    /// Parse an RFC 3339 epoch, e.g. `2025-06-06T08:00:00+02:00`.
    pub fn from_rfc3339(epoch: &str) -> Result<Self, CoreError> {
        DateTime::parse_from_rfc3339(epoch)
            .map(Self::new)
            .map_err(|_| CoreError::InvalidEpoch(epoch.to_string()))
    }

    pub fn epoch(&self) -> DateTime<FixedOffset> {
        self.epoch
    }

    /// The festival's civil UTC offset.
    pub fn offset(&self) -> FixedOffset {
        *self.epoch.offset()
    }

    /// Local hour-of-day of a start time in the festival's offset.
    pub fn local_hour(&self, at: DateTime<FixedOffset>) -> u32 {
        at.with_timezone(&self.offset()).hour()
    }

    /// 1-based festival-day index a start time belongs to.
    ///
    /// Starts before [`MORNING_CUTOFF_HOUR`] count towards the previous
    /// day's programme.
    pub fn festival_day_for(&self, start: DateTime<FixedOffset>) -> i64 {
        let local = start.with_timezone(&self.offset());
        let days = (local.date_naive() - self.epoch.date_naive()).num_days();
        if local.hour() < MORNING_CUTOFF_HOUR {
            days
        } else {
            days + 1
        }
    }

    /// The `day-<n>` id a start time should carry.
    pub fn expected_day_id(&self, start: DateTime<FixedOffset>) -> String {
        format!("day-{}", self.festival_day_for(start))
    }

    /// Calendar date of a 1-based festival day.
    pub fn date_of_day(&self, day_index: u32) -> NaiveDate {
        self.epoch.date_naive() + Duration::days(i64::from(day_index) - 1)
    }

    /// The zero-padded `MM-DD` id prefix implied by a festival-day index.
    pub fn id_prefix_for_day(&self, day_index: u32) -> String {
        let date = self.date_of_day(day_index);
        format!("{:02}-{:02}", date.month(), date.day())
    }
}
