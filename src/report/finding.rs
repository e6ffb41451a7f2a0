use std::fmt;

use serde::Serialize;

use crate::workflow::WorkflowNodeDefinition;

/// Whether a finding blocks deployment decisions or merely advises.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FindingKind {
    Error,
    Warning,
}

/// How serious a finding is. Variants are declared in ascending order so the
/// derived `Ord` ranks `Critical` above everything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

/// The validation area a finding belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Workflow,
    Connectivity,
    Implementation,
    Dependencies,
    Stability,
    Configuration,
    Flow,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
            Severity::Critical => "critical",
        };
        write!(f, "{}", text)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Category::Workflow => "workflow",
            Category::Connectivity => "connectivity",
            Category::Implementation => "implementation",
            Category::Dependencies => "dependencies",
            Category::Stability => "stability",
            Category::Configuration => "configuration",
            Category::Flow => "flow",
        };
        write!(f, "{}", text)
    }
}

/// A single validation finding. Both classification axes are always explicit
/// so consumers can filter without re-deriving semantics, and the optional
/// payload fields are omitted from JSON when empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Finding {
    #[serde(rename = "type")]
    pub kind: FindingKind,
    pub severity: Severity,
    pub category: Category,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_name: Option<String>,
    pub message: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alternative: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub dependencies: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub setup_steps: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_auto_fix: Option<bool>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub cycle: Vec<String>,
}

impl Finding {
    /// Starts a blocking-axis finding (`type: "error"`).
    pub fn issue(
        severity: Severity,
        category: Category,
        message: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self::new(FindingKind::Error, severity, category, message, description)
    }

    /// Starts an advisory finding (`type: "warning"`).
    pub fn warning(
        severity: Severity,
        category: Category,
        message: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self::new(FindingKind::Warning, severity, category, message, description)
    }

    fn new(
        kind: FindingKind,
        severity: Severity,
        category: Category,
        message: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            severity,
            category,
            node_id: None,
            node_name: None,
            message: message.into(),
            description: description.into(),
            fix: None,
            alternative: None,
            dependencies: Vec::new(),
            setup_steps: Vec::new(),
            can_auto_fix: None,
            cycle: Vec::new(),
        }
    }

    /// Attributes the finding to a node, recording both its id and the name
    /// it shows under on the canvas.
    pub fn for_node(mut self, node: &WorkflowNodeDefinition) -> Self {
        self.node_id = Some(node.id.clone());
        self.node_name = Some(node.display_name());
        self
    }

    pub fn with_fix(mut self, fix: impl Into<String>) -> Self {
        self.fix = Some(fix.into());
        self
    }

    pub fn with_alternative(mut self, alternative: impl Into<String>) -> Self {
        self.alternative = Some(alternative.into());
        self
    }

    pub fn with_dependencies(mut self, dependencies: Vec<String>) -> Self {
        self.dependencies = dependencies;
        self
    }

    pub fn with_setup_steps(mut self, setup_steps: Vec<String>) -> Self {
        self.setup_steps = setup_steps;
        self
    }

    pub fn with_auto_fix(mut self, can_auto_fix: bool) -> Self {
        self.can_auto_fix = Some(can_auto_fix);
        self
    }

    pub fn with_cycle(mut self, members: Vec<String>) -> Self {
        self.cycle = members;
        self
    }

    /// Only critical findings block deployment.
    pub fn is_blocking(&self) -> bool {
        self.severity == Severity::Critical
    }
}
