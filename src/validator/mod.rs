use ahash::AHashMap;
use itertools::Itertools;

mod cycles;
pub mod rules;
mod structure;

pub use rules::NodeRule;

use crate::capability::{CapabilityIndex, CapabilitySnapshot, assess};
use crate::report::{Category, Finding, FindingKind, Severity, ValidationReport};
use crate::workflow::WorkflowDefinition;
use rules::{create_rule_by_name, register_default_rules};

/// The validation engine. Holds the per-type rule registry and nothing else,
/// so one instance can validate any number of workflows.
pub struct Validator {
    registry: AHashMap<String, Box<dyn NodeRule>>,
}

pub struct ValidatorBuilder {
    registry: AHashMap<String, Box<dyn NodeRule>>,
}

impl ValidatorBuilder {
    pub fn new() -> Self {
        let mut registry: AHashMap<String, Box<dyn NodeRule>> = AHashMap::new();
        register_default_rules(&mut registry);
        Self { registry }
    }

    /// Maps a custom editor type name onto one of the built-in rules.
    pub fn with_type_mapping(mut self, user_type_name: &str, shinsa_type_name: &str) -> Self {
        if let Some(rule) = create_rule_by_name(shinsa_type_name) {
            self.registry.insert(user_type_name.to_string(), rule);
        }
        self
    }

    /// Registers a rule for a node type, replacing any built-in rule for the
    /// same type.
    pub fn with_custom_rule(mut self, rule: Box<dyn NodeRule>) -> Self {
        self.registry.insert(rule.node_type().to_string(), rule);
        self
    }

    pub fn build(self) -> Validator {
        Validator {
            registry: self.registry,
        }
    }
}

impl Default for ValidatorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Validator {
    pub fn builder() -> ValidatorBuilder {
        ValidatorBuilder::new()
    }

    /// A validator with the default rule set.
    pub fn new() -> Self {
        ValidatorBuilder::new().build()
    }

    /// Validates a workflow against an optional capability snapshot and
    /// returns the full report.
    ///
    /// The passes run in a fixed order: structural checks, cycle detection,
    /// capability resolution, then the per-node rules. An empty graph
    /// short-circuits to a single critical issue. Passing `None` for the
    /// snapshot skips capability resolution entirely, so a workflow is never
    /// blocked just because the registry could not be reached.
    ///
    /// Validation never fails: malformed node data shows up as findings in
    /// the report, not as an error from this call.
    pub fn validate(
        &self,
        workflow: &WorkflowDefinition,
        status: Option<&CapabilitySnapshot>,
    ) -> ValidationReport {
        if workflow.nodes.is_empty() {
            return ValidationReport::from_findings(
                vec![structure::empty_workflow_issue()],
                Vec::new(),
            );
        }

        let mut issues = Vec::new();
        let mut warnings = Vec::new();

        structure::check_structure(workflow, &mut issues, &mut warnings);

        for members in cycles::find_cycles(workflow) {
            warnings.push(cycle_warning(members));
        }

        if let Some(snapshot) = status {
            let index = CapabilityIndex::from_snapshot(snapshot);
            for node in &workflow.nodes {
                // Sticky notes are annotations, not components.
                if node.node_type == "default" {
                    continue;
                }
                if let Some(record) = index.resolve(node) {
                    if let Some(finding) = assess(node, record) {
                        route(finding, &mut issues, &mut warnings);
                    }
                }
            }
        }

        for node in &workflow.nodes {
            if let Some(rule) = self.registry.get(&node.node_type) {
                for finding in rule.check(node) {
                    route(finding, &mut issues, &mut warnings);
                }
            }
        }

        ValidationReport::from_findings(issues, warnings)
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::new()
    }
}

fn route(finding: Finding, issues: &mut Vec<Finding>, warnings: &mut Vec<Finding>) {
    match finding.kind {
        FindingKind::Error => issues.push(finding),
        FindingKind::Warning => warnings.push(finding),
    }
}

fn cycle_warning(members: Vec<String>) -> Finding {
    let mut path = members.iter().join(" -> ");
    if let Some(first) = members.first() {
        path.push_str(" -> ");
        path.push_str(first);
    }

    Finding::warning(
        Severity::Medium,
        Category::Flow,
        "Feedback loop detected",
        format!(
            "Nodes form a loop: {}. Loops are allowed for retry-style patterns but will re-trigger forever when unintended.",
            path
        ),
    )
    .with_fix("Break the loop if it is not intentional")
    .with_cycle(members)
}
