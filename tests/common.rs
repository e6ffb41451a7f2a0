//! Common test utilities for building workflow graphs and capability snapshots.
use serde_json::{Value, json};
use shinsa::prelude::*;

/// Creates a node with the given data payload.
#[allow(dead_code)]
pub fn node(id: &str, node_type: &str, data: Value) -> WorkflowNodeDefinition {
    WorkflowNodeDefinition {
        id: id.to_string(),
        node_type: node_type.to_string(),
        data: data.as_object().cloned().unwrap_or_default(),
    }
}

#[allow(dead_code)]
pub fn edge(source: &str, target: &str) -> WorkflowEdgeDefinition {
    WorkflowEdgeDefinition {
        source: source.to_string(),
        target: target.to_string(),
    }
}

#[allow(dead_code)]
pub fn workflow(
    nodes: Vec<WorkflowNodeDefinition>,
    edges: Vec<WorkflowEdgeDefinition>,
) -> WorkflowDefinition {
    WorkflowDefinition { nodes, edges }
}

/// Creates a fully configured camera -> model -> action pipeline that
/// validates without findings.
#[allow(dead_code)]
pub fn camera_pipeline() -> WorkflowDefinition {
    workflow(
        vec![
            node("camera-1", "camera", json!({"cameraId": "cam-0"})),
            node("model-1", "model", json!({"modelId": "yolov8n", "confidence": 0.5})),
            node(
                "action-1",
                "action",
                json!({"actionType": "webhook", "config": {"url": "http://localhost/hook"}}),
            ),
        ],
        vec![edge("camera-1", "model-1"), edge("model-1", "action-1")],
    )
}

/// Creates a snapshot that marks every component of `camera_pipeline` ready.
#[allow(dead_code)]
pub fn ready_snapshot() -> CapabilitySnapshot {
    let mut snapshot = CapabilitySnapshot::default();
    snapshot
        .models
        .insert("yolov8n".to_string(), CapabilityRecord::ready());
    snapshot
        .inputs
        .insert("camera".to_string(), CapabilityRecord::ready());
    snapshot
        .actions
        .insert("webhook".to_string(), CapabilityRecord::ready());
    snapshot
}

#[allow(dead_code)]
pub fn messages(findings: &[Finding]) -> Vec<&str> {
    findings
        .iter()
        .map(|finding| finding.message.as_str())
        .collect()
}
