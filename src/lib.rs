//! # Shinsa - Workflow Graph Validation Engine
//!
//! **Shinsa** is a rule-based validation engine for node-graph vision pipelines.
//! It takes the graph a user has drawn on a canvas editor (cameras and other
//! inputs feeding AI models, zone filters, and actions), checks it against a
//! snapshot of what the deployment can actually run, and produces a structured
//! report that tells the caller whether the workflow may be deployed and what
//! needs attention first.
//!
//! ## Core Workflow
//!
//! The engine is designed to be format-agnostic. It operates on a canonical
//! internal model of a "workflow definition." The primary workflow is:
//!
//! 1.  **Load Your Graph**: Parse your editor's export into your own Rust structs, or use the bundled [`canvas`] types for the stock canvas format.
//! 2.  **Convert to Shinsa's Model**: Implement the `IntoWorkflow` trait for your structs to provide a translation layer into Shinsa's `WorkflowDefinition`.
//! 3.  **Validate**: Build a `Validator` (optionally registering custom node rules) and run it against the workflow plus an optional `CapabilitySnapshot`.
//! 4.  **Act on the Report**: Gate deployment on `can_deploy`, surface `issues` and `warnings` to the user, and use the per-finding fix hints.
//!
//! ## Quick Start
//!
//! The following example validates a small camera pipeline straight from the
//! canvas JSON format.
//!
//! ```rust,no_run
//! use shinsa::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let workflow_json = r#"{
//!         "nodes": [
//!             {"id": "camera-1", "type": "camera", "data": {"cameraId": "cam-0"}},
//!             {"id": "model-1", "type": "model", "data": {"modelId": "yolov8n"}},
//!             {"id": "action-1", "type": "action", "data": {"actionType": "webhook", "config": {"url": "http://localhost/hook"}}}
//!         ],
//!         "edges": [
//!             {"source": "camera-1", "target": "model-1"},
//!             {"source": "model-1", "target": "action-1"}
//!         ]
//!     }"#;
//!
//!     // 1. Parse the canvas export and convert it to the canonical model.
//!     let workflow = CanvasWorkflow::from_json(workflow_json)?.into_workflow()?;
//!
//!     // 2. Load the capability snapshot if one is available. `None` means
//!     //    every component is assumed usable.
//!     let status_json = std::fs::read_to_string("status.json")?;
//!     let snapshot = CapabilitySnapshot::from_json(&status_json)?;
//!
//!     // 3. Run the validator.
//!     let validator = Validator::new();
//!     let report = validator.validate(&workflow, Some(&snapshot));
//!
//!     // 4. Gate deployment on the verdict.
//!     if report.can_deploy {
//!         println!("Workflow is deployable");
//!     } else {
//!         print!("{}", ReportFormatter::format_report(&report));
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod canvas;
pub mod capability;
pub mod error;
pub mod prelude;
pub mod report;
pub mod validator;
pub mod workflow;

#[cfg(feature = "python-bindings")]
mod python;
