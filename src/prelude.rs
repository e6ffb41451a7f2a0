//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and traits from the shinsa crate.
//! Import this module to get access to the core functionality without having to import
//! each type individually.
//!
//! # Example
//!
//! ```rust,no_run
//! // Use the prelude to get easy access to all the core types.
//! use shinsa::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! // Load the canvas export and the capability snapshot
//! let workflow_json = std::fs::read_to_string("path/to/workflow.json")?;
//! let status_json = std::fs::read_to_string("path/to/status.json")?;
//!
//! let workflow = CanvasWorkflow::from_json(&workflow_json)?.into_workflow()?;
//! let snapshot = CapabilitySnapshot::from_json(&status_json)?;
//!
//! // Validate and inspect the report
//! let report = Validator::new().validate(&workflow, Some(&snapshot));
//!
//! println!("{}", ReportFormatter::format_report(&report));
//! # Ok(())
//! # }
//! ```

// Core validation
pub use crate::validator::{NodeRule, Validator, ValidatorBuilder};

// Workflow model and conversion
pub use crate::workflow::{
    IntoWorkflow, WorkflowDefinition, WorkflowEdgeDefinition, WorkflowNodeDefinition,
};

// Canvas wire format
pub use crate::canvas::{CanvasEdge, CanvasNode, CanvasWorkflow};

// Capability snapshot types
pub use crate::capability::{
    CapabilityIndex, CapabilityRecord, CapabilitySnapshot, CapabilityState,
};

// Report types
pub use crate::report::{
    Category, Finding, FindingKind, ReportSummary, Severity, ValidationReport,
};

// Error types
pub use crate::error::{ParseError, WorkflowConversionError};

// Report formatting
pub use crate::report::ReportFormatter;

// Standard library re-exports commonly used with this crate
pub use std::collections::HashMap;
pub use std::path::Path;

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
