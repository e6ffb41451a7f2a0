//! Unit tests for core Shinsa types.
mod common;
use common::*;
use serde_json::json;
use shinsa::prelude::*;

#[test]
fn test_severity_ordering() {
    assert!(Severity::Critical > Severity::High);
    assert!(Severity::High > Severity::Medium);
    assert!(Severity::Medium > Severity::Low);
}

#[test]
fn test_severity_and_category_display() {
    assert_eq!(format!("{}", Severity::Critical), "critical");
    assert_eq!(format!("{}", Severity::Low), "low");
    assert_eq!(format!("{}", Category::Configuration), "configuration");
    assert_eq!(format!("{}", Category::Flow), "flow");
}

#[test]
fn test_display_name_prefers_label() {
    let labeled = node("n1", "camera", json!({"label": "Lobby Cam"}));
    assert_eq!(labeled.display_name(), "Lobby Cam");

    let unlabeled = node("n2", "camera", json!({}));
    assert_eq!(unlabeled.display_name(), "Camera");

    // An empty label falls back to the type default too.
    let blank_label = node("n3", "videoInput", json!({"label": ""}));
    assert_eq!(blank_label.display_name(), "Video Input");

    // Unknown types fall back to the raw type string.
    let unknown = node("n4", "customSensor", json!({}));
    assert_eq!(unknown.display_name(), "customSensor");
}

#[test]
fn test_node_data_accessors() {
    let action = node(
        "a1",
        "action",
        json!({"actionType": "email", "config": {"to": "ops@example.com"}}),
    );
    assert_eq!(action.data_str("actionType"), Some("email"));
    assert_eq!(action.config_str("to"), Some("ops@example.com"));
    assert_eq!(action.config_str("url"), None);
    assert_eq!(action.data_str("missing"), None);
}

#[test]
fn test_finding_serialization_shape() {
    let finding = Finding::issue(
        Severity::High,
        Category::Configuration,
        "No model selected",
        "This node cannot produce detections until a model is chosen.",
    )
    .for_node(&node("model-1", "model", json!({})))
    .with_fix("Pick a model in the node settings");

    let value = serde_json::to_value(&finding).expect("finding should serialize");

    assert_eq!(value["type"], "error");
    assert_eq!(value["severity"], "high");
    assert_eq!(value["category"], "configuration");
    assert_eq!(value["nodeId"], "model-1");
    assert_eq!(value["nodeName"], "AI Model");

    // Empty payload fields are omitted entirely.
    let object = value.as_object().expect("finding serializes to an object");
    assert!(!object.contains_key("alternative"));
    assert!(!object.contains_key("dependencies"));
    assert!(!object.contains_key("setupSteps"));
    assert!(!object.contains_key("canAutoFix"));
    assert!(!object.contains_key("cycle"));
}

#[test]
fn test_report_aggregation() {
    let critical = Finding::issue(Severity::Critical, Category::Workflow, "c", "d");
    let high = Finding::issue(Severity::High, Category::Configuration, "h", "d");
    let warning = Finding::warning(Severity::Low, Category::Connectivity, "w", "d");

    let report =
        ValidationReport::from_findings(vec![critical.clone(), high.clone()], vec![warning]);
    assert!(!report.valid);
    assert!(!report.can_deploy);
    assert!(report.should_warn);
    assert_eq!(report.summary.total, 3);
    assert_eq!(report.summary.critical, 1);
    assert_eq!(report.summary.high, 1);
    assert_eq!(report.summary.warnings, 1);

    // High issues alone warn but do not block.
    let report = ValidationReport::from_findings(vec![high], vec![]);
    assert!(report.valid);
    assert!(report.can_deploy);
    assert!(report.should_warn);

    // Criticals block even without warnings.
    let report = ValidationReport::from_findings(vec![critical], vec![]);
    assert!(!report.can_deploy);
    assert!(critical_blocks(&report));
}

fn critical_blocks(report: &ValidationReport) -> bool {
    report.issues.iter().any(|issue| issue.is_blocking())
}

#[test]
fn test_capability_record_defaults() {
    let json = r#"{"status": "notImplemented"}"#;
    let record: CapabilityRecord = serde_json::from_str(json).expect("minimal record parses");
    assert_eq!(record.status, CapabilityState::NotImplemented);
    assert!(record.message.is_empty());
    assert!(!record.dependencies_met);
    assert!(record.dependencies.is_empty());
    assert!(record.setup_steps.is_empty());
}

#[test]
fn test_capability_snapshot_parsing() {
    let json = r#"{
        "models": {
            "yolov8n": {"status": "ready"},
            "license-plate-v1": {
                "status": "needsConfig",
                "dependenciesMet": false,
                "dependencies": ["easyocr"],
                "setupSteps": ["Install: pip install easyocr"]
            }
        },
        "actions": {
            "telegram": {"status": "notImplemented", "message": "Not wired up yet"}
        }
    }"#;

    let snapshot = CapabilitySnapshot::from_json(json).expect("snapshot parses");
    assert_eq!(snapshot.models.len(), 2);
    assert_eq!(snapshot.actions.len(), 1);
    assert_eq!(
        snapshot.models["license-plate-v1"].status,
        CapabilityState::NeedsConfig
    );
    assert_eq!(
        snapshot.models["license-plate-v1"].setup_steps,
        vec!["Install: pip install easyocr".to_string()]
    );
}

#[test]
fn test_error_display() {
    let err = ParseError::InvalidWorkflowJson("expected value at line 1".to_string());
    assert!(err.to_string().contains("workflow JSON"));
    assert!(err.to_string().contains("line 1"));

    let err = ParseError::InvalidStatusJson("bad".to_string());
    assert!(err.to_string().contains("capability status"));

    let err = WorkflowConversionError::InvalidDefinition("missing nodes".to_string());
    assert!(err.to_string().contains("missing nodes"));
}

#[test]
fn test_report_formatter_output() {
    let report = Validator::new().validate(&workflow(vec![], vec![]), None);
    let text = ReportFormatter::format_report(&report);

    assert!(text.contains("Workflow cannot be deployed."));
    assert!(text.contains("[critical] Workflow is empty"));
    assert!(text.contains("Summary: 1 finding(s), 1 critical, 0 high, 0 warning(s)"));

    let report = Validator::new().validate(&camera_pipeline(), None);
    let text = ReportFormatter::format_report(&report);
    assert!(text.contains("Workflow is deployable."));
}

#[test]
fn test_workflow_dot_export() {
    let dot = camera_pipeline().to_dot();
    assert!(dot.starts_with("digraph Workflow {"));
    assert!(dot.contains("\"camera-1\""));
    assert!(dot.contains("\"camera-1\" -> \"model-1\";"));
    assert!(dot.contains("Camera\\n(camera)"));
}

#[test]
fn test_prelude_import_completeness() {
    // Verify that the prelude exports work correctly
    let _validator: Option<Validator> = None;
    let _builder: Option<ValidatorBuilder> = None;
    let _workflow: Option<WorkflowDefinition> = None;
    let _canvas: Option<CanvasWorkflow> = None;
    let _snapshot: Option<CapabilitySnapshot> = None;
    let _finding: Option<Finding> = None;
    let _report: Option<ValidationReport> = None;
    let _hashmap: HashMap<String, f64> = HashMap::new();

    // Test Result alias
    let _result: Result<String> = Ok("test".to_string());

    println!("All prelude types are accessible");
}
