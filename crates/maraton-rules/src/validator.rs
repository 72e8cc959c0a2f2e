//! The batch orchestrator
//!
//! One run is an isolated pass over a fresh snapshot of the data: rules
//! execute in a fixed order, each rule's repairs are folded into the owned
//! collections before the next rule reads them, and the findings of all
//! rules are aggregated into one [`RunReport`]. No rule's violations
//! suppress another rule's execution.

use maraton_core::{Artist, FestivalCalendar, Performance};
use tracing::debug;

use crate::config::ValidatorConfig;
use crate::repair;
use crate::report::RunReport;
use crate::rules;

/// The two collections a run operates on, owned for the duration of the
/// batch.
#[derive(Debug, Clone)]
pub struct Schedule {
    pub performances: Vec<Performance>,
    pub artists: Vec<Artist>,
}

/// Runs the rule battery and applies the repairing rules' fixes.
#[derive(Debug, Clone)]
pub struct ScheduleValidator {
    calendar: FestivalCalendar,
    config: ValidatorConfig,
}

impl ScheduleValidator {
    pub fn new(calendar: FestivalCalendar) -> Self {
        Self::with_config(calendar, ValidatorConfig::default())
    }

    pub fn with_config(calendar: FestivalCalendar, config: ValidatorConfig) -> Self {
        Self { calendar, config }
    }

    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// Run every rule over the schedule.
    ///
    /// The id-prefix repair lands before the max-duration rule reads the
    /// ids, so the long-block marker is tested against rewritten ids.
    pub fn run(&self, schedule: &mut Schedule) -> RunReport {
        let mut report = RunReport::new();

        report.extend(rules::day_assignment(
            &schedule.performances,
            &self.calendar,
        ));

        let (findings, repairs) = rules::id_prefix(&schedule.performances, &self.calendar);
        report.extend(findings);
        repair::apply(&mut schedule.performances, &repairs);

        report.extend(rules::max_duration(&schedule.performances, &self.config));

        let (findings, repairs) = rules::closing_sets(&schedule.performances, &self.config);
        report.extend(findings);
        repair::apply(&mut schedule.performances, &repairs);

        report.extend(rules::artist_references(
            &schedule.performances,
            &schedule.artists,
        ));

        let (findings, repairs) = rules::caravan_caption(&schedule.performances, &self.config);
        report.extend(findings);
        repair::apply(&mut schedule.performances, &repairs);

        report.extend(rules::duplicate_performances(&schedule.performances));
        report.extend(rules::duplicate_artists(&schedule.artists));
        report.extend(rules::tombola_coverage(
            &schedule.performances,
            &self.config,
        ));

        debug!(
            findings = report.findings().len(),
            violations = report.violation_count(),
            "rule battery finished"
        );

        report
    }
}
