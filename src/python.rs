use crate::capability::CapabilitySnapshot;
use crate::report::{Finding, FindingKind, ValidationReport};
use crate::validator::Validator;
use crate::workflow::WorkflowDefinition;
use pyo3::prelude::*;
use pyo3::types::PyDict;

impl<'py> IntoPyObject<'py> for Finding {
    type Target = PyDict;
    type Output = Bound<'py, Self::Target>;
    type Error = std::convert::Infallible;

    fn into_pyobject(self, py: Python<'py>) -> Result<Self::Output, Self::Error> {
        let dict = PyDict::new(py);

        let kind = match self.kind {
            FindingKind::Error => "error",
            FindingKind::Warning => "warning",
        };
        dict.set_item("type", kind).unwrap();
        dict.set_item("severity", self.severity.to_string()).unwrap();
        dict.set_item("category", self.category.to_string()).unwrap();

        // Handle Option fields - convert to Python None if None, otherwise convert the value
        match self.node_id {
            Some(node_id) => dict.set_item("nodeId", node_id).unwrap(),
            None => dict.set_item("nodeId", py.None()).unwrap(),
        }
        match self.node_name {
            Some(node_name) => dict.set_item("nodeName", node_name).unwrap(),
            None => dict.set_item("nodeName", py.None()).unwrap(),
        }

        dict.set_item("message", self.message).unwrap();
        dict.set_item("description", self.description).unwrap();

        // Optional payload fields are only present when they carry data,
        // matching the JSON serialization.
        if let Some(fix) = self.fix {
            dict.set_item("fix", fix).unwrap();
        }
        if let Some(alternative) = self.alternative {
            dict.set_item("alternative", alternative).unwrap();
        }
        if !self.dependencies.is_empty() {
            dict.set_item("dependencies", self.dependencies).unwrap();
        }
        if !self.setup_steps.is_empty() {
            dict.set_item("setupSteps", self.setup_steps).unwrap();
        }
        if let Some(can_auto_fix) = self.can_auto_fix {
            dict.set_item("canAutoFix", can_auto_fix).unwrap();
        }
        if !self.cycle.is_empty() {
            dict.set_item("cycle", self.cycle).unwrap();
        }

        Ok(dict)
    }
}

impl<'py> IntoPyObject<'py> for ValidationReport {
    type Target = PyDict;
    type Output = Bound<'py, Self::Target>;
    type Error = std::convert::Infallible;

    fn into_pyobject(self, py: Python<'py>) -> Result<Self::Output, Self::Error> {
        let summary = PyDict::new(py);
        summary.set_item("total", self.summary.total).unwrap();
        summary.set_item("critical", self.summary.critical).unwrap();
        summary.set_item("high", self.summary.high).unwrap();
        summary.set_item("warnings", self.summary.warnings).unwrap();

        let dict = PyDict::new(py);
        dict.set_item("valid", self.valid).unwrap();
        dict.set_item("canDeploy", self.can_deploy).unwrap();
        dict.set_item("shouldWarn", self.should_warn).unwrap();
        dict.set_item("issues", self.issues).unwrap();
        dict.set_item("warnings", self.warnings).unwrap();
        dict.set_item("summary", summary).unwrap();

        Ok(dict)
    }
}

/// A rule-based workflow graph validator.
///
/// This class holds the per-node-type rule registry. One instance can
/// validate any number of workflow graphs against optional capability
/// snapshots; validation itself never raises.
#[pyclass(name = "Shinsa")]
struct ShinsaPy {
    validator: Validator,
}

#[pymethods]
impl ShinsaPy {
    /// Initializes the validator with the default rule set.
    ///
    /// Returns:
    ///     Shinsa: An initialized instance of the Shinsa validator.
    #[new]
    fn new() -> Self {
        ShinsaPy {
            validator: Validator::new(),
        }
    }

    /// Validates a workflow graph and returns the full report.
    ///
    /// The workflow is checked structurally (missing inputs, disconnected
    /// nodes, feedback loops), against the capability snapshot when one is
    /// provided, and against the per-node configuration rules.
    ///
    /// Args:
    ///     workflow_json (str): A string containing the canvas editor's JSON
    ///         export, with `nodes` and `edges` arrays.
    ///     status_json (str | None): A string containing the capability
    ///         registry's JSON snapshot. Pass None to skip capability
    ///         checks; the workflow is then assumed runnable.
    ///
    /// Returns:
    ///     dict: The validation report with the keys:
    ///         - "valid" (bool): No critical issue was found.
    ///         - "canDeploy" (bool): Deployment gate, equal to "valid".
    ///         - "shouldWarn" (bool): A high issue or any warning is present.
    ///         - "issues" (list[dict]): Blocking-axis findings.
    ///         - "warnings" (list[dict]): Advisory findings.
    ///         - "summary" (dict): Counts per severity bucket.
    ///
    /// Raises:
    ///     ValueError: If either JSON string cannot be parsed. Malformed
    ///         node data inside a parseable graph never raises; it shows up
    ///         as findings in the report instead.
    #[pyo3(signature = (workflow_json, status_json=None))]
    fn validate(&self, workflow_json: &str, status_json: Option<&str>) -> PyResult<ValidationReport> {
        let workflow = WorkflowDefinition::from_canvas_json(workflow_json)
            .map_err(|e| PyErr::new::<pyo3::exceptions::PyValueError, _>(e.to_string()))?;

        let snapshot = match status_json {
            Some(json) => Some(
                CapabilitySnapshot::from_json(json)
                    .map_err(|e| PyErr::new::<pyo3::exceptions::PyValueError, _>(e.to_string()))?,
            ),
            None => None,
        };

        Ok(self.validator.validate(&workflow, snapshot.as_ref()))
    }
}

/// A rule-based workflow graph validation engine.
///
/// This module provides Python bindings to the Shinsa Rust library, allowing
/// canvas workflow exports to be checked for structural problems, missing
/// configuration, and unavailable components before deployment.
#[pymodule]
fn shinsa(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<ShinsaPy>()?;
    Ok(())
}
