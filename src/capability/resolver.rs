use ahash::AHashMap;

use super::alternatives::alternative_for;
use super::snapshot::{CapabilityCategory, CapabilityRecord, CapabilitySnapshot, CapabilityState};
use crate::report::{Category, Finding, Severity};
use crate::workflow::WorkflowNodeDefinition;

/// A flattened view of a capability snapshot: one map from `(category, key)`
/// to record, built once per validation call so per-node resolution is a
/// couple of hash lookups instead of a walk over seven maps.
pub struct CapabilityIndex<'a> {
    entries: AHashMap<(CapabilityCategory, &'a str), &'a CapabilityRecord>,
}

impl<'a> CapabilityIndex<'a> {
    pub fn from_snapshot(snapshot: &'a CapabilitySnapshot) -> Self {
        let mut entries = AHashMap::new();
        for category in CapabilityCategory::ALL {
            for (key, record) in snapshot.category(category) {
                entries.insert((category, key.as_str()), record);
            }
        }
        Self { entries }
    }

    /// Resolves the capability record governing a node. Categories are probed
    /// in their fixed order; within each category the node-specific id (the
    /// selected model or action type) is preferred over the bare node type.
    /// `None` means the registry does not track this node, which callers must
    /// treat as usable.
    pub fn resolve(&self, node: &WorkflowNodeDefinition) -> Option<&'a CapabilityRecord> {
        let specific = specific_capability_id(node);
        for category in CapabilityCategory::ALL {
            if let Some(id) = specific {
                if let Some(record) = self.entries.get(&(category, id)) {
                    return Some(record);
                }
            }
            if let Some(record) = self.entries.get(&(category, node.node_type.as_str())) {
                return Some(record);
            }
        }
        None
    }
}

/// The id a node is tracked under in the registry: the selected model for
/// model nodes, the action type for action nodes, otherwise the node type.
pub fn capability_id(node: &WorkflowNodeDefinition) -> &str {
    specific_capability_id(node).unwrap_or(&node.node_type)
}

fn specific_capability_id(node: &WorkflowNodeDefinition) -> Option<&str> {
    match node.node_type.as_str() {
        "model" => node.data_str("modelId"),
        "action" => node.data_str("actionType"),
        _ => None,
    }
}

/// Turns a resolved record into a finding, or `None` when the component is
/// usable as-is. `Ready` and satisfied `NeedsConfig` produce nothing; the
/// node type never changes which rule applies, only the reported wording.
pub fn assess(node: &WorkflowNodeDefinition, record: &CapabilityRecord) -> Option<Finding> {
    match record.status {
        CapabilityState::NotImplemented => Some(not_implemented_finding(node, record)),
        CapabilityState::NeedsConfig if !record.dependencies_met => {
            Some(needs_setup_finding(node, record))
        }
        CapabilityState::Beta => Some(beta_finding(node, record)),
        CapabilityState::Ready | CapabilityState::NeedsConfig => None,
    }
}

fn not_implemented_finding(node: &WorkflowNodeDefinition, record: &CapabilityRecord) -> Finding {
    let id = capability_id(node);
    let description = if record.message.is_empty() {
        format!("The '{}' component is not available in this build.", id)
    } else {
        record.message.clone()
    };

    Finding::issue(
        Severity::Critical,
        Category::Implementation,
        format!("{} is not implemented", node.display_name()),
        description,
    )
    .for_node(node)
    .with_fix("Replace this node with a supported alternative")
    .with_alternative(alternative_for(id))
}

fn needs_setup_finding(node: &WorkflowNodeDefinition, record: &CapabilityRecord) -> Finding {
    let description = if record.message.is_empty() {
        format!(
            "Dependencies for '{}' are missing on this deployment.",
            capability_id(node)
        )
    } else {
        record.message.clone()
    };

    let installable = record
        .setup_steps
        .iter()
        .any(|step| step.starts_with("Install:"));

    Finding::issue(
        Severity::High,
        Category::Dependencies,
        format!("{} requires additional setup", node.display_name()),
        description,
    )
    .for_node(node)
    .with_fix("Complete the setup steps for this component")
    .with_dependencies(record.dependencies.clone())
    .with_setup_steps(record.setup_steps.clone())
    .with_auto_fix(installable)
}

fn beta_finding(node: &WorkflowNodeDefinition, record: &CapabilityRecord) -> Finding {
    let description = if record.message.is_empty() {
        "This component is still being tested and may behave unpredictably.".to_string()
    } else {
        record.message.clone()
    };

    Finding::warning(
        Severity::Medium,
        Category::Stability,
        format!("{} is in beta", node.display_name()),
        description,
    )
    .for_node(node)
}
