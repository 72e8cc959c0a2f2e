//! Cross-reference, uniqueness and coverage rules

use std::collections::{HashMap, HashSet};

use maraton_core::{Artist, Performance};

use crate::config::ValidatorConfig;
use crate::repair::{Repair, RepairAction};
use crate::report::{Finding, RuleId};

/// Rule 5: artist references must be total in both directions. Never
/// repaired; a miss means missing source data.
pub fn artist_references(performances: &[Performance], artists: &[Artist]) -> Vec<Finding> {
    let known: HashSet<&str> = artists.iter().map(|a| a.id.as_str()).collect();
    let referenced: HashSet<&str> = performances.iter().map(|p| p.artist_id.as_str()).collect();

    let mut findings = Vec::new();

    let mut seen = HashSet::new();
    let missing: Vec<&str> = performances
        .iter()
        .map(|p| p.artist_id.as_str())
        .filter(|id| !known.contains(id) && seen.insert(*id))
        .collect();
    if !missing.is_empty() {
        findings.push(
            Finding::violation(
                RuleId::ArtistReferences,
                format!(
                    "Artists referenced by performances but missing from the artist list: {}",
                    missing.join(", ")
                ),
            )
            .with_affected(missing),
        );
    }

    let unreferenced: Vec<&str> = artists
        .iter()
        .map(|a| a.id.as_str())
        .filter(|id| !referenced.contains(id))
        .collect();
    if !unreferenced.is_empty() {
        findings.push(
            Finding::violation(
                RuleId::ArtistReferences,
                format!(
                    "Artists never referenced by any performance: {}",
                    unreferenced.join(", ")
                ),
            )
            .with_affected(unreferenced),
        );
    }

    findings
}

/// Rule 6: every remote-broadcast performance carries the canonical
/// caption; offenders get it written back verbatim.
pub fn caravan_caption(
    performances: &[Performance],
    config: &ValidatorConfig,
) -> (Vec<Finding>, Vec<Repair>) {
    let offenders: Vec<usize> = performances
        .iter()
        .enumerate()
        .filter(|(_, p)| {
            p.stage_id == config.caravan_stage && !p.description.contains(&config.caravan_caption)
        })
        .map(|(index, _)| index)
        .collect();

    if offenders.is_empty() {
        return (Vec::new(), Vec::new());
    }

    let ids: Vec<&str> = offenders
        .iter()
        .map(|&i| performances[i].id.as_str())
        .collect();
    let findings = vec![Finding::violation(
        RuleId::CaravanCaption,
        format!(
            "Caravan programmes missing the broadcast caption: {}",
            ids.join(", ")
        ),
    )
    .with_affected(ids)];

    let repairs = offenders
        .into_iter()
        .map(|index| Repair {
            index,
            action: RepairAction::SetDescription(config.caravan_caption.clone()),
        })
        .collect();

    (findings, repairs)
}

/// Rule 7: performance ids are unique. Each colliding id is reported once,
/// in first-encounter order.
pub fn duplicate_performances(performances: &[Performance]) -> Vec<Finding> {
    duplicates(
        performances.iter().map(|p| p.id.as_str()),
        RuleId::DuplicatePerformances,
        "Duplicate performance id",
    )
}

/// Rule 8: artist ids are unique, same reporting policy.
pub fn duplicate_artists(artists: &[Artist]) -> Vec<Finding> {
    duplicates(
        artists.iter().map(|a| a.id.as_str()),
        RuleId::DuplicateArtists,
        "Duplicate artist id",
    )
}

fn duplicates<'a>(
    ids: impl Iterator<Item = &'a str>,
    rule: RuleId,
    label: &str,
) -> Vec<Finding> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut order: Vec<&str> = Vec::new();
    for id in ids {
        let count = counts.entry(id).or_insert(0);
        if *count == 0 {
            order.push(id);
        }
        *count += 1;
    }
    order
        .into_iter()
        .filter(|id| counts[id] > 1)
        .map(|id| {
            Finding::violation(rule, format!("{}: {} ({} occurrences)", label, id, counts[id]))
                .affecting(id)
        })
        .collect()
}

/// Rule 9: every festival day has exactly one tombola slot. Days without
/// one are violations; days with several are flagged as warnings.
pub fn tombola_coverage(performances: &[Performance], config: &ValidatorConfig) -> Vec<Finding> {
    let mut seen = HashSet::new();
    let days: Vec<&str> = performances
        .iter()
        .map(|p| p.day_id.as_str())
        .filter(|day| seen.insert(*day))
        .collect();

    let mut per_day: HashMap<&str, usize> = HashMap::new();
    for performance in performances {
        if performance.artist_id.contains(&config.tombola_marker) {
            *per_day.entry(performance.day_id.as_str()).or_insert(0) += 1;
        }
    }

    let mut findings = Vec::new();

    let missing: Vec<&str> = days
        .iter()
        .copied()
        .filter(|day| !per_day.contains_key(day))
        .collect();
    if !missing.is_empty() {
        findings.push(
            Finding::violation(
                RuleId::TombolaCoverage,
                format!("Not every day has a tombola: {}", missing.join(", ")),
            )
            .with_affected(missing),
        );
    }

    for day in days {
        if let Some(&count) = per_day.get(day) {
            if count > 1 {
                findings.push(
                    Finding::warning(
                        RuleId::TombolaCoverage,
                        format!("Day {} has {} tombola slots", day, count),
                    )
                    .affecting(day),
                );
            }
        }
    }

    findings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::testutil::{artist, perf};
    use pretty_assertions::assert_eq;

    fn slot(id: &str, artist_id: &str, day_id: &str, stage_id: &str) -> Performance {
        perf(
            id,
            artist_id,
            day_id,
            stage_id,
            "2025-06-07T20:00:00+02:00",
            "2025-06-07T22:00:00+02:00",
        )
    }

    #[test]
    fn artist_references_pass_on_well_formed_data() {
        let performances = vec![slot("06-07-a", "dj-a", "day-2", "fo-szinpad")];
        let artists = vec![artist("dj-a", "DJ A")];
        assert!(artist_references(&performances, &artists).is_empty());
    }

    #[test]
    fn artist_references_report_both_directions() {
        let performances = vec![
            slot("06-07-a", "dj-a", "day-2", "fo-szinpad"),
            slot("06-07-b", "ghost", "day-2", "fo-szinpad"),
            slot("06-07-c", "ghost", "day-2", "etc"),
        ];
        let artists = vec![artist("dj-a", "DJ A"), artist("dj-y", "DJ Y")];

        let findings = artist_references(&performances, &artists);
        assert_eq!(findings.len(), 2);
        // One entry per unknown artist id, not per performance.
        assert_eq!(findings[0].affected, vec!["ghost".to_string()]);
        assert_eq!(findings[1].affected, vec!["dj-y".to_string()]);
    }

    #[test]
    fn caravan_caption_is_replaced_not_appended() {
        let config = ValidatorConfig::default();
        let mut with_caption = slot("06-07-radio", "radio", "day-2", "tilos-caravan-studio");
        with_caption.description = format!("{} - du 14h", config.caravan_caption);
        let mut wrong = slot("06-07-talk", "talk", "day-2", "tilos-caravan-studio");
        wrong.description = "Random text".to_string();
        let elsewhere = slot("06-07-live", "live", "day-2", "fo-szinpad");

        let mut performances = vec![with_caption, wrong, elsewhere];
        let (findings, repairs) = caravan_caption(&performances, &config);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].affected, vec!["06-07-talk".to_string()]);

        crate::repair::apply(&mut performances, &repairs);
        assert_eq!(performances[1].description, config.caravan_caption);
        // Containing the caption is enough; no rewrite.
        assert!(performances[0].description.ends_with("du 14h"));
    }

    #[test]
    fn duplicate_performances_report_once_per_id() {
        let performances = vec![
            slot("06-07-dup", "a", "day-2", "fo-szinpad"),
            slot("06-07-dup", "b", "day-2", "etc"),
            slot("06-07-dup", "c", "day-2", "etc"),
            slot("06-07-solo", "d", "day-2", "etc"),
        ];
        let findings = duplicate_performances(&performances);
        assert_eq!(findings.len(), 1);
        assert!(findings[0].message.contains("06-07-dup"));
        assert!(findings[0].message.contains("3 occurrences"));
    }

    #[test]
    fn duplicate_artists_report_once_per_id() {
        let artists = vec![
            artist("dj-a", "DJ A"),
            artist("dj-b", "DJ B"),
            artist("dj-a", "DJ A again"),
        ];
        let findings = duplicate_artists(&artists);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].affected, vec!["dj-a".to_string()]);
    }

    #[test]
    fn tombola_coverage_reports_missing_days() {
        let config = ValidatorConfig::default();
        let performances = vec![
            slot("06-06-t", "tombola-1", "day-1", "fo-szinpad"),
            slot("06-07-x", "dj-x", "day-2", "fo-szinpad"),
        ];
        let findings = tombola_coverage(&performances, &config);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].affected, vec!["day-2".to_string()]);
    }

    #[test]
    fn tombola_coverage_flags_doubled_days_as_warnings() {
        let config = ValidatorConfig::default();
        let performances = vec![
            slot("06-06-t1", "tombola-1", "day-1", "fo-szinpad"),
            slot("06-06-t2", "tombola-2", "day-1", "etc"),
        ];
        let findings = tombola_coverage(&performances, &config);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].severity, crate::Severity::Warning);
        assert!(findings[0].message.contains("2 tombola slots"));
    }

    #[test]
    fn tombola_coverage_is_quiet_when_each_day_has_one() {
        let config = ValidatorConfig::default();
        let performances = vec![
            slot("06-06-t", "tombola-1", "day-1", "fo-szinpad"),
            slot("06-07-t", "tombola-2", "day-2", "fo-szinpad"),
        ];
        assert!(tombola_coverage(&performances, &config).is_empty());
    }
}
