//! Structured findings produced by the rule battery
//!
//! Every violation becomes a [`Finding`]; the human-readable diagnostic
//! line the tool prints is its `Display`. A run's findings are collected
//! into a [`RunReport`] so tests and callers can assert on them instead of
//! scraping output.

use std::fmt;

use serde::Serialize;

/// Severity of a finding
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Informational - does not fail the run
    Info,
    /// Suspicious but tolerated
    Warning,
    /// Data inconsistency - fails the run
    Violation,
}

/// The rule that produced a finding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RuleId {
    DayAssignment,
    IdPrefix,
    MaxDuration,
    ClosingSet,
    ArtistReferences,
    CaravanCaption,
    DuplicatePerformances,
    DuplicateArtists,
    TombolaCoverage,
}

impl RuleId {
    pub fn name(&self) -> &'static str {
        match self {
            RuleId::DayAssignment => "day-assignment",
            RuleId::IdPrefix => "id-prefix",
            RuleId::MaxDuration => "max-duration",
            RuleId::ClosingSet => "closing-set",
            RuleId::ArtistReferences => "artist-references",
            RuleId::CaravanCaption => "caravan-caption",
            RuleId::DuplicatePerformances => "duplicate-performances",
            RuleId::DuplicateArtists => "duplicate-artists",
            RuleId::TombolaCoverage => "tombola-coverage",
        }
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single finding
#[derive(Debug, Clone, Serialize)]
pub struct Finding {
    pub rule: RuleId,
    pub severity: Severity,
    pub message: String,
    /// Ids of the affected records (performance or artist ids)
    pub affected: Vec<String>,
}

impl Finding {
    pub fn violation(rule: RuleId, message: impl Into<String>) -> Self {
        Self {
            rule,
            severity: Severity::Violation,
            message: message.into(),
            affected: Vec::new(),
        }
    }

    pub fn warning(rule: RuleId, message: impl Into<String>) -> Self {
        Self {
            rule,
            severity: Severity::Warning,
            message: message.into(),
            affected: Vec::new(),
        }
    }

    pub fn affecting(mut self, id: impl Into<String>) -> Self {
        self.affected.push(id.into());
        self
    }

    pub fn with_affected<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.affected.extend(ids.into_iter().map(Into::into));
        self
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let severity = match self.severity {
            Severity::Info => "INFO",
            Severity::Warning => "WARN",
            Severity::Violation => "ERROR",
        };
        write!(f, "[{}] {}: {}", severity, self.rule, self.message)
    }
}

/// All findings of one batch run
#[derive(Debug, Default, Serialize)]
pub struct RunReport {
    findings: Vec<Finding>,
}

impl RunReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, finding: Finding) {
        self.findings.push(finding);
    }

    pub fn extend(&mut self, findings: impl IntoIterator<Item = Finding>) {
        self.findings.extend(findings);
    }

    pub fn findings(&self) -> &[Finding] {
        &self.findings
    }

    pub fn is_clean(&self) -> bool {
        self.findings.is_empty()
    }

    pub fn has_violations(&self) -> bool {
        self.findings
            .iter()
            .any(|f| f.severity == Severity::Violation)
    }

    pub fn violation_count(&self) -> usize {
        self.findings
            .iter()
            .filter(|f| f.severity == Severity::Violation)
            .count()
    }

    /// Findings produced by one rule, in report order.
    pub fn of_rule(&self, rule: RuleId) -> impl Iterator<Item = &Finding> {
        self.findings.iter().filter(move |f| f.rule == rule)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finding_display() {
        let finding = Finding::violation(RuleId::MaxDuration, "Performance x runs 6 hours")
            .affecting("06-07-x");
        let line = finding.to_string();
        assert!(line.contains("ERROR"));
        assert!(line.contains("max-duration"));
        assert!(line.contains("6 hours"));
    }

    #[test]
    fn test_report_counts_violations_only() {
        let mut report = RunReport::new();
        report.add(Finding::warning(RuleId::IdPrefix, "odd id"));
        assert!(!report.has_violations());
        assert!(!report.is_clean());

        report.add(Finding::violation(RuleId::IdPrefix, "wrong prefix"));
        assert!(report.has_violations());
        assert_eq!(report.violation_count(), 1);
        assert_eq!(report.of_rule(RuleId::IdPrefix).count(), 2);
    }
}
