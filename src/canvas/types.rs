use serde::Deserialize;

use crate::error::{ParseError, WorkflowConversionError};
use crate::workflow::{
    IntoWorkflow, WorkflowDefinition, WorkflowEdgeDefinition, WorkflowNodeDefinition,
};

/// A node as serialized by the canvas editor. Layout fields such as
/// `position` are ignored; only identity, type, and configuration survive.
#[derive(Debug, Deserialize, Clone)]
pub struct CanvasNode {
    pub id: String,
    #[serde(rename = "type")]
    pub node_type: String,
    #[serde(default)]
    pub data: serde_json::Map<String, serde_json::Value>,
}

/// A canvas edge connecting two nodes. Handle ids are accepted but play no
/// role during validation.
#[derive(Debug, Deserialize, Clone)]
pub struct CanvasEdge {
    pub source: String,
    pub target: String,
    #[serde(default)]
    #[serde(alias = "sourceHandle")]
    pub source_handle: Option<String>,
    #[serde(default)]
    #[serde(alias = "targetHandle")]
    pub target_handle: Option<String>,
}

/// Complete canvas workflow structure
#[derive(Debug, Deserialize, Clone)]
pub struct CanvasWorkflow {
    pub nodes: Vec<CanvasNode>,
    pub edges: Vec<CanvasEdge>,
}

impl CanvasWorkflow {
    /// Parses a workflow from the canvas editor's JSON export.
    pub fn from_json(json: &str) -> Result<Self, ParseError> {
        serde_json::from_str(json).map_err(|e| ParseError::InvalidWorkflowJson(e.to_string()))
    }
}

impl WorkflowDefinition {
    /// Decodes a canvas export and converts it to the canonical model in one
    /// call. Conversion failures surface as parse errors since the caller
    /// handed over one opaque JSON document.
    pub fn from_canvas_json(json: &str) -> Result<WorkflowDefinition, ParseError> {
        CanvasWorkflow::from_json(json)?
            .into_workflow()
            .map_err(|e| ParseError::InvalidWorkflowJson(e.to_string()))
    }
}

impl IntoWorkflow for CanvasWorkflow {
    fn into_workflow(self) -> Result<WorkflowDefinition, WorkflowConversionError> {
        let nodes = self
            .nodes
            .into_iter()
            .map(|node| WorkflowNodeDefinition {
                id: node.id,
                node_type: node.node_type,
                data: node.data,
            })
            .collect();

        let edges = self
            .edges
            .into_iter()
            .map(|edge| WorkflowEdgeDefinition {
                source: edge.source,
                target: edge.target,
            })
            .collect();

        Ok(WorkflowDefinition { nodes, edges })
    }
}
