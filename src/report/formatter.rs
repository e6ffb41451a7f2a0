use super::{Finding, ValidationReport};

/// Formats validation reports into human-readable strings
pub struct ReportFormatter;

impl ReportFormatter {
    /// Format a full report: verdict first, then blocking issues, then
    /// advisories, then the severity counts.
    pub fn format_report(report: &ValidationReport) -> String {
        let mut result = String::new();

        if report.can_deploy {
            result.push_str("Workflow is deployable.\n");
        } else {
            result.push_str("Workflow cannot be deployed.\n");
        }

        if !report.issues.is_empty() {
            result.push_str(&format!("\nIssues ({}):\n", report.issues.len()));
            for issue in &report.issues {
                result.push_str(&Self::format_finding(issue));
            }
        }

        if !report.warnings.is_empty() {
            result.push_str(&format!("\nWarnings ({}):\n", report.warnings.len()));
            for warning in &report.warnings {
                result.push_str(&Self::format_finding(warning));
            }
        }

        result.push_str(&format!(
            "\nSummary: {} finding(s), {} critical, {} high, {} warning(s)\n",
            report.summary.total,
            report.summary.critical,
            report.summary.high,
            report.summary.warnings
        ));

        result
    }

    /// Format a single finding as an indented block.
    pub fn format_finding(finding: &Finding) -> String {
        let mut result = String::new();

        let location = match &finding.node_id {
            Some(node_id) => format!(" (node {})", node_id),
            None => String::new(),
        };
        result.push_str(&format!(
            "  [{}] {}{}\n",
            finding.severity, finding.message, location
        ));
        result.push_str(&format!("        {}\n", finding.description));

        if let Some(fix) = &finding.fix {
            result.push_str(&format!("        fix: {}\n", fix));
        }
        if let Some(alternative) = &finding.alternative {
            result.push_str(&format!("        alternative: {}\n", alternative));
        }
        if !finding.dependencies.is_empty() {
            result.push_str(&format!(
                "        dependencies: {}\n",
                finding.dependencies.join(", ")
            ));
        }
        for step in &finding.setup_steps {
            result.push_str(&format!("        - {}\n", step));
        }
        if finding.can_auto_fix == Some(true) {
            result.push_str("        (auto-fixable)\n");
        }

        result
    }
}
