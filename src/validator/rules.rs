use ahash::AHashMap;
use serde_json::Value;

use crate::report::{Category, Finding, Severity};
use crate::workflow::WorkflowNodeDefinition;

/// Defines the contract for checking one node type's configuration.
///
/// Implementations inspect a single node in isolation; graph-wide concerns
/// such as connectivity belong to the structural checks instead. Returning
/// an empty vec means the node is configured correctly.
pub trait NodeRule: Send + Sync {
    fn node_type(&self) -> &str;
    fn check(&self, node: &WorkflowNodeDefinition) -> Vec<Finding>;
}

/// True when a string field is absent or has been cleared in the editor.
fn missing(value: Option<&str>) -> bool {
    value.is_none_or(|text| text.is_empty())
}

struct ModelRule;
impl NodeRule for ModelRule {
    fn node_type(&self) -> &str {
        "model"
    }
    fn check(&self, node: &WorkflowNodeDefinition) -> Vec<Finding> {
        let mut findings = Vec::new();

        if missing(node.data_str("modelId")) {
            findings.push(
                Finding::issue(
                    Severity::High,
                    Category::Configuration,
                    "No model selected",
                    "This node cannot produce detections until a model is chosen.",
                )
                .for_node(node)
                .with_fix("Pick a model in the node settings"),
            );
        }

        if let Some(confidence) = node.data_value("confidence").and_then(Value::as_f64) {
            if !(0.0..=1.0).contains(&confidence) {
                findings.push(
                    Finding::warning(
                        Severity::Low,
                        Category::Configuration,
                        format!("Confidence {} is out of range", confidence),
                        "Confidence thresholds must be between 0 and 1.",
                    )
                    .for_node(node)
                    .with_fix("Set a confidence between 0 and 1"),
                );
            }
        }

        findings
    }
}

struct CameraRule;
impl NodeRule for CameraRule {
    fn node_type(&self) -> &str {
        "camera"
    }
    fn check(&self, node: &WorkflowNodeDefinition) -> Vec<Finding> {
        if missing(node.data_str("cameraId")) {
            return vec![
                Finding::issue(
                    Severity::High,
                    Category::Configuration,
                    "No camera selected",
                    "This input cannot capture frames until a camera is assigned.",
                )
                .for_node(node)
                .with_fix("Select a camera in the node settings"),
            ];
        }
        Vec::new()
    }
}

struct ZoneRule;
impl NodeRule for ZoneRule {
    fn node_type(&self) -> &str {
        "zone"
    }
    fn check(&self, node: &WorkflowNodeDefinition) -> Vec<Finding> {
        let points = node
            .data_value("polygon")
            .and_then(Value::as_array)
            .map_or(0, Vec::len);

        if points < 3 {
            return vec![
                Finding::issue(
                    Severity::High,
                    Category::Configuration,
                    "Zone polygon is incomplete",
                    "A detection zone needs at least 3 points to enclose an area.",
                )
                .for_node(node)
                .with_fix("Draw the zone on the camera preview"),
            ];
        }
        Vec::new()
    }
}

struct ActionRule;
impl NodeRule for ActionRule {
    fn node_type(&self) -> &str {
        "action"
    }
    fn check(&self, node: &WorkflowNodeDefinition) -> Vec<Finding> {
        let mut findings = Vec::new();

        match node.data_str("actionType") {
            None | Some("") => {
                findings.push(
                    Finding::issue(
                        Severity::High,
                        Category::Configuration,
                        "No action type selected",
                        "This node does nothing until an action type is chosen.",
                    )
                    .for_node(node)
                    .with_fix("Choose what this action should do"),
                );
            }
            Some("email") => {
                if missing(node.config_str("to")) {
                    findings.push(
                        Finding::issue(
                            Severity::High,
                            Category::Configuration,
                            "Email recipient not set",
                            "Email actions need a destination address.",
                        )
                        .for_node(node)
                        .with_fix("Add a recipient address in the action settings"),
                    );
                }
            }
            Some("webhook") => {
                if missing(node.config_str("url")) {
                    findings.push(
                        Finding::issue(
                            Severity::High,
                            Category::Configuration,
                            "Webhook URL not set",
                            "Webhook actions need an endpoint to call.",
                        )
                        .for_node(node)
                        .with_fix("Add the endpoint URL in the action settings"),
                    );
                }
            }
            // Other action types carry no required configuration.
            Some(_) => {}
        }

        findings
    }
}

struct YoutubeRule;
impl NodeRule for YoutubeRule {
    fn node_type(&self) -> &str {
        "youtube"
    }
    fn check(&self, node: &WorkflowNodeDefinition) -> Vec<Finding> {
        if missing(node.data_str("youtubeUrl")) {
            return vec![
                Finding::issue(
                    Severity::High,
                    Category::Configuration,
                    "YouTube URL not set",
                    "This input cannot pull a stream without a video URL.",
                )
                .for_node(node)
                .with_fix("Paste the video or stream URL into the node"),
            ];
        }
        Vec::new()
    }
}

/// Registers the rule for every node type the canvas ships with.
pub(super) fn register_default_rules(registry: &mut AHashMap<String, Box<dyn NodeRule>>) {
    registry.insert("model".to_string(), Box::new(ModelRule));
    registry.insert("camera".to_string(), Box::new(CameraRule));
    registry.insert("zone".to_string(), Box::new(ZoneRule));
    registry.insert("action".to_string(), Box::new(ActionRule));
    registry.insert("youtube".to_string(), Box::new(YoutubeRule));
}

/// Creates a built-in rule by its node type name, for type aliasing.
pub(super) fn create_rule_by_name(name: &str) -> Option<Box<dyn NodeRule>> {
    match name {
        "model" => Some(Box::new(ModelRule)),
        "camera" => Some(Box::new(CameraRule)),
        "zone" => Some(Box::new(ZoneRule)),
        "action" => Some(Box::new(ActionRule)),
        "youtube" => Some(Box::new(YoutubeRule)),
        _ => None,
    }
}
