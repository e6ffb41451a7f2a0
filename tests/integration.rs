//! End-to-end tests: canvas JSON in, validation report out.
mod common;
use common::*;
use serde_json::json;
use shinsa::prelude::*;

/// A fully configured export straight from the canvas editor, including the
/// layout fields validation is supposed to ignore.
const CLEAN_WORKFLOW: &str = r#"{
    "nodes": [
        {"id": "camera-1", "type": "camera", "position": {"x": 0, "y": 0},
         "data": {"cameraId": "cam-0", "label": "Lobby Camera"}},
        {"id": "model-1", "type": "model", "position": {"x": 240, "y": 0},
         "data": {"modelId": "yolov8n", "confidence": 0.6}},
        {"id": "zone-1", "type": "zone", "position": {"x": 480, "y": 0},
         "data": {"polygon": [[0, 0], [100, 0], [50, 80]]}},
        {"id": "action-1", "type": "action", "position": {"x": 720, "y": 0},
         "data": {"actionType": "webhook", "config": {"url": "http://localhost/hook"}}}
    ],
    "edges": [
        {"id": "e1", "source": "camera-1", "target": "model-1", "sourceHandle": "out"},
        {"id": "e2", "source": "model-1", "target": "zone-1"},
        {"id": "e3", "source": "zone-1", "target": "action-1", "targetHandle": "in"}
    ]
}"#;

const READY_STATUS: &str = r#"{
    "models": {
        "yolov8n": {"status": "ready"}
    },
    "inputs": {
        "camera": {"status": "ready"}
    },
    "processing": {
        "zone": {"status": "ready"}
    },
    "actions": {
        "webhook": {"status": "ready"}
    }
}"#;

/// The same pipeline after swapping in an unported model and an unconfigured
/// email action, plus a sticky note floating on the canvas.
const MIXED_WORKFLOW: &str = r#"{
    "nodes": [
        {"id": "camera-1", "type": "camera", "data": {"cameraId": "cam-0"}},
        {"id": "model-1", "type": "model", "data": {"modelId": "crowd-counter-v1"}},
        {"id": "zone-1", "type": "zone", "data": {"polygon": [[0, 0], [1, 1]]}},
        {"id": "action-1", "type": "action", "data": {"actionType": "email", "config": {}}},
        {"id": "note-1", "type": "default", "data": {"label": "rollout plan"}}
    ],
    "edges": [
        {"source": "camera-1", "target": "model-1"},
        {"source": "model-1", "target": "zone-1"},
        {"source": "zone-1", "target": "action-1"}
    ]
}"#;

const MIXED_STATUS: &str = r#"{
    "models": {
        "crowd-counter-v1": {"status": "notImplemented", "message": "Crowd counting is not ported yet"}
    },
    "inputs": {
        "camera": {"status": "ready"}
    },
    "actions": {
        "email": {
            "status": "needsConfig",
            "dependenciesMet": false,
            "dependencies": ["smtp server"],
            "setupSteps": ["Install: pip install aiosmtplib", "Set SMTP_HOST in the environment"]
        }
    }
}"#;

fn parse(workflow_json: &str) -> WorkflowDefinition {
    CanvasWorkflow::from_json(workflow_json)
        .expect("workflow should parse")
        .into_workflow()
        .expect("workflow should convert")
}

#[test]
fn test_clean_pipeline_deploys() {
    let graph = parse(CLEAN_WORKFLOW);
    let snapshot = CapabilitySnapshot::from_json(READY_STATUS).expect("status should parse");

    let report = Validator::new().validate(&graph, Some(&snapshot));

    assert!(report.is_clean(), "got: {:?}", messages(&report.issues));
    assert!(report.valid);
    assert!(report.can_deploy);
    assert!(!report.should_warn);
    assert_eq!(report.summary.total, 0);
}

#[test]
fn test_clean_pipeline_deploys_without_snapshot() {
    let graph = parse(CLEAN_WORKFLOW);
    let report = Validator::new().validate(&graph, None);
    assert!(report.is_clean(), "got: {:?}", messages(&report.issues));
}

#[test]
fn test_unconfigured_model_reports_one_issue() {
    // A camera wired into a blank model: one configuration issue, and the
    // wiring itself must not be blamed.
    let graph = workflow(
        vec![
            node("camera-1", "camera", json!({"cameraId": "cam-0"})),
            node("model-1", "model", json!({})),
        ],
        vec![edge("camera-1", "model-1")],
    );

    let report = Validator::new().validate(&graph, None);

    assert_eq!(report.issues.len(), 1, "got: {:?}", messages(&report.issues));
    assert_eq!(report.issues[0].message, "No model selected");
    assert_eq!(report.issues[0].severity, Severity::High);
    assert_eq!(report.issues[0].category, Category::Configuration);
    assert!(
        report
            .warnings
            .iter()
            .all(|warning| warning.category != Category::Connectivity),
        "got: {:?}",
        messages(&report.warnings)
    );
    assert!(report.valid);
    assert!(report.can_deploy);
    assert!(report.should_warn);
}

#[test]
fn test_mixed_findings_end_to_end() {
    let graph = parse(MIXED_WORKFLOW);
    let snapshot = CapabilitySnapshot::from_json(MIXED_STATUS).expect("status should parse");

    let report = Validator::new().validate(&graph, Some(&snapshot));

    assert_eq!(
        messages(&report.issues),
        vec![
            "AI Model is not implemented",
            "Action requires additional setup",
            "Zone polygon is incomplete",
            "Email recipient not set",
        ]
    );
    assert!(report.warnings.is_empty(), "got: {:?}", messages(&report.warnings));

    let unported = &report.issues[0];
    assert_eq!(unported.severity, Severity::Critical);
    assert_eq!(unported.description, "Crowd counting is not ported yet");
    assert_eq!(
        unported.alternative.as_deref(),
        Some("Use YOLOv8 person detection with zone counting instead")
    );

    let setup = &report.issues[1];
    assert_eq!(setup.dependencies, vec!["smtp server".to_string()]);
    assert_eq!(setup.can_auto_fix, Some(true));

    assert!(!report.valid);
    assert!(!report.can_deploy);
    assert!(report.should_warn);
    assert_eq!(report.summary.total, 4);
    assert_eq!(report.summary.critical, 1);
    assert_eq!(report.summary.high, 3);
    assert_eq!(report.summary.warnings, 0);
}

#[test]
fn test_reports_are_reproducible() {
    let graph = parse(MIXED_WORKFLOW);
    let snapshot = CapabilitySnapshot::from_json(MIXED_STATUS).expect("status should parse");

    let validator = Validator::new();
    let first = validator.validate(&graph, Some(&snapshot));
    let second = validator.validate(&graph, Some(&snapshot));
    assert_eq!(first, second);

    // A fresh validator must produce the same report too.
    let third = Validator::new().validate(&graph, Some(&snapshot));
    assert_eq!(first, third);
}

#[test]
fn test_report_serializes_with_camel_case_keys() {
    let graph = parse(MIXED_WORKFLOW);
    let snapshot = CapabilitySnapshot::from_json(MIXED_STATUS).expect("status should parse");
    let report = Validator::new().validate(&graph, Some(&snapshot));

    let value = serde_json::to_value(&report).expect("report should serialize");

    for key in ["valid", "canDeploy", "shouldWarn", "issues", "warnings", "summary"] {
        assert!(value.get(key).is_some(), "missing key: {}", key);
    }
    assert_eq!(value["canDeploy"], json!(false));
    assert_eq!(value["summary"]["critical"], json!(1));

    let issues = value["issues"].as_array().expect("issues should be an array");
    assert_eq!(issues[0]["type"], json!("error"));
    assert_eq!(issues[0]["severity"], json!("critical"));
    assert_eq!(issues[0]["category"], json!("implementation"));
    assert_eq!(issues[0]["nodeId"], json!("model-1"));
    assert_eq!(issues[0]["nodeName"], json!("AI Model"));
    assert!(issues[0].get("alternative").is_some());

    let setup = &issues[1];
    assert_eq!(setup["category"], json!("dependencies"));
    assert_eq!(setup["canAutoFix"], json!(true));
    assert_eq!(
        setup["setupSteps"],
        json!(["Install: pip install aiosmtplib", "Set SMTP_HOST in the environment"])
    );
}

#[test]
fn test_empty_canvas_export_is_blocked() {
    let graph = parse(r#"{"nodes": [], "edges": []}"#);
    let snapshot = CapabilitySnapshot::from_json(READY_STATUS).expect("status should parse");

    let report = Validator::new().validate(&graph, Some(&snapshot));

    assert!(!report.can_deploy);
    assert_eq!(messages(&report.issues), vec!["Workflow is empty"]);
}

#[test]
fn test_invalid_workflow_json_is_rejected() {
    let result = CanvasWorkflow::from_json("{ nodes: oops");
    let error = result.expect_err("malformed JSON should be rejected");
    assert!(matches!(error, ParseError::InvalidWorkflowJson(_)));
    assert!(error.to_string().starts_with("Failed to parse workflow JSON:"));
}

#[test]
fn test_invalid_status_json_is_rejected() {
    let result = CapabilitySnapshot::from_json("[1, 2, 3]");
    let error = result.expect_err("a JSON array is not a snapshot");
    assert!(matches!(error, ParseError::InvalidStatusJson(_)));
    assert!(error.to_string().starts_with("Failed to parse capability status JSON:"));
}

#[test]
fn test_one_call_decode_matches_two_step() {
    let graph = WorkflowDefinition::from_canvas_json(CLEAN_WORKFLOW).expect("decode should work");
    let one_call = Validator::new().validate(&graph, None);
    let two_step = Validator::new().validate(&parse(CLEAN_WORKFLOW), None);
    assert_eq!(one_call, two_step);

    let error = WorkflowDefinition::from_canvas_json("{").expect_err("truncated JSON fails");
    assert!(matches!(error, ParseError::InvalidWorkflowJson(_)));
}

#[test]
fn test_canvas_layout_fields_are_ignored() {
    // Position and handle ids vary as nodes are dragged around; reports must
    // not change with them.
    let moved = CLEAN_WORKFLOW.replace("\"x\": 240", "\"x\": 9000");
    let report_a = Validator::new().validate(&parse(CLEAN_WORKFLOW), None);
    let report_b = Validator::new().validate(&parse(&moved), None);
    assert_eq!(report_a, report_b);
}
