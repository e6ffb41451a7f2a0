pub mod finding;
pub mod formatter;

pub use finding::*;
pub use formatter::*;

use serde::Serialize;

/// Counts per severity bucket, precomputed for report consumers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReportSummary {
    pub total: usize,
    pub critical: usize,
    pub high: usize,
    pub warnings: usize,
}

/// The aggregate outcome of one validation run. Reports are plain data:
/// constructed once, never mutated, and safe to serialize as-is for the
/// deployment gate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    /// No critical issue was found.
    pub valid: bool,
    /// Deployment gate, always equal to `valid`. Kept separate so clients do
    /// not have to know which severities block.
    pub can_deploy: bool,
    /// At least one high-severity issue or one warning is present.
    pub should_warn: bool,
    pub issues: Vec<Finding>,
    pub warnings: Vec<Finding>,
    pub summary: ReportSummary,
}

impl ValidationReport {
    /// Derives the aggregate verdict from the collected findings.
    pub fn from_findings(issues: Vec<Finding>, warnings: Vec<Finding>) -> Self {
        let critical = issues
            .iter()
            .filter(|issue| issue.severity == Severity::Critical)
            .count();
        let high = issues
            .iter()
            .filter(|issue| issue.severity == Severity::High)
            .count();

        let valid = critical == 0;
        let should_warn = high > 0 || !warnings.is_empty();
        let summary = ReportSummary {
            total: issues.len() + warnings.len(),
            critical,
            high,
            warnings: warnings.len(),
        };

        Self {
            valid,
            can_deploy: valid,
            should_warn,
            issues,
            warnings,
            summary,
        }
    }

    /// True when the run produced no findings at all.
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty() && self.warnings.is_empty()
    }
}
