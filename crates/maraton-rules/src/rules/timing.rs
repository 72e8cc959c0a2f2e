//! Rules over start/end times and the id date prefix

use std::collections::BTreeMap;

use maraton_core::{FestivalCalendar, Performance, PerformanceId};
use maraton_core::calendar::MORNING_CUTOFF_HOUR;

use super::hours;
use crate::config::ValidatorConfig;
use crate::repair::{Repair, RepairAction};
use crate::report::{Finding, RuleId};

/// Rule 1: the `day_id` must match the festival day derived from the start
/// time. Pure check, never repaired.
pub fn day_assignment(
    performances: &[Performance],
    calendar: &FestivalCalendar,
) -> Vec<Finding> {
    let mut findings = Vec::new();
    for performance in performances {
        let expected = calendar.expected_day_id(performance.start_time);
        if expected == performance.day_id {
            continue;
        }
        let kind = if calendar.local_hour(performance.start_time) < MORNING_CUTOFF_HOUR {
            "Morning performance"
        } else {
            "Performance"
        };
        findings.push(
            Finding::violation(
                RuleId::DayAssignment,
                format!(
                    "{} {} is not on the correct day: {} (should be {})",
                    kind, performance.id, performance.day_id, expected
                ),
            )
            .affecting(&performance.id),
        );
    }
    findings
}

/// Rule 2: the id's `MM-DD` prefix must match the date implied by
/// `day_id`. Mismatches are repaired, keeping the slug.
pub fn id_prefix(
    performances: &[Performance],
    calendar: &FestivalCalendar,
) -> (Vec<Finding>, Vec<Repair>) {
    let mut findings = Vec::new();
    let mut repairs = Vec::new();
    for (index, performance) in performances.iter().enumerate() {
        let day_index = match performance.day_index() {
            Ok(n) => n,
            Err(_) => {
                findings.push(
                    Finding::violation(
                        RuleId::IdPrefix,
                        format!(
                            "Performance {} has an unrecognized day id: {}",
                            performance.id, performance.day_id
                        ),
                    )
                    .affecting(&performance.id),
                );
                continue;
            }
        };
        let expected = calendar.id_prefix_for_day(day_index);
        let rewritten = match PerformanceId::parse(&performance.id) {
            Ok(id) if id.date_prefix() == expected => continue,
            Ok(id) => format!("{}-{}", expected, id.slug()),
            // No recognizable date slot; splice the prefix over the first
            // five characters, like the ids are laid out.
            Err(_) => splice_prefix(&performance.id, &expected),
        };
        findings.push(
            Finding::violation(
                RuleId::IdPrefix,
                format!(
                    "Performance {} does not carry the date of {}: expected prefix {}",
                    performance.id, performance.day_id, expected
                ),
            )
            .affecting(&performance.id),
        );
        repairs.push(Repair {
            index,
            action: RepairAction::SetId(rewritten),
        });
    }
    (findings, repairs)
}

fn splice_prefix(id: &str, prefix: &str) -> String {
    let tail = id
        .char_indices()
        .nth(5)
        .map(|(i, _)| &id[i..])
        .unwrap_or("");
    format!("{}{}", prefix, tail)
}

/// Rule 3: no set longer than the maximum, unless its id carries the
/// long-block marker. Runs after the id repair so the marker test sees
/// rewritten ids. Never repaired.
pub fn max_duration(performances: &[Performance], config: &ValidatorConfig) -> Vec<Finding> {
    performances
        .iter()
        .filter(|p| p.duration() > config.max_set && !p.id.contains(&config.long_block_marker))
        .map(|p| {
            Finding::violation(
                RuleId::MaxDuration,
                format!(
                    "Performance {} is longer than {} hours: {} hours",
                    p.id,
                    config.max_set.num_hours(),
                    hours(p.duration())
                ),
            )
            .affecting(&p.id)
        })
        .collect()
}

/// Rule 4: the latest-starting set of each day on each non-exempt stage
/// must run at least the closing floor; shorter ones get their end time
/// pushed out.
pub fn closing_sets(
    performances: &[Performance],
    config: &ValidatorConfig,
) -> (Vec<Finding>, Vec<Repair>) {
    let mut groups: BTreeMap<(&str, &str), Vec<usize>> = BTreeMap::new();
    for (index, performance) in performances.iter().enumerate() {
        groups
            .entry((performance.day_id.as_str(), performance.stage_id.as_str()))
            .or_default()
            .push(index);
    }

    let mut findings = Vec::new();
    let mut repairs = Vec::new();
    for ((day_id, stage_id), indices) in groups {
        if config.is_closing_exempt(stage_id) {
            continue;
        }
        // Last maximum wins on ties, like a stable sort by start time.
        let Some(closing) = indices
            .into_iter()
            .max_by_key(|&i| performances[i].start_time)
        else {
            continue;
        };
        let performance = &performances[closing];
        if performance.duration() >= config.closing_floor {
            continue;
        }
        let day = day_id.strip_prefix("day-").unwrap_or(day_id);
        findings.push(
            Finding::violation(
                RuleId::ClosingSet,
                format!(
                    "Performance {} on stage {} on day {} is not long enough: {} hours",
                    performance.id,
                    stage_id,
                    day,
                    hours(performance.duration())
                ),
            )
            .affecting(&performance.id),
        );
        repairs.push(Repair {
            index: closing,
            action: RepairAction::SetEndTime(performance.start_time + config.closing_floor),
        });
    }
    (findings, repairs)
}
