use serde_json::{Map, Value};

/// The complete, canonical definition of a workflow graph, ready for validation.
/// This is the target structure for any custom editor format conversion.
#[derive(Debug, Clone, Default)]
pub struct WorkflowDefinition {
    pub nodes: Vec<WorkflowNodeDefinition>,
    pub edges: Vec<WorkflowEdgeDefinition>,
}

/// Defines a single node (an input source, model, filter, or action) in the pipeline graph.
#[derive(Debug, Clone)]
pub struct WorkflowNodeDefinition {
    pub id: String,
    pub node_type: String,
    /// The free-form configuration payload attached by the editor.
    pub data: Map<String, Value>,
}

/// Defines a directed connection between two nodes, by node id.
#[derive(Debug, Clone)]
pub struct WorkflowEdgeDefinition {
    pub source: String,
    pub target: String,
}

impl WorkflowDefinition {
    /// Looks up a node by its id.
    pub fn node(&self, id: &str) -> Option<&WorkflowNodeDefinition> {
        self.nodes.iter().find(|node| node.id == id)
    }
}

impl WorkflowNodeDefinition {
    pub fn new(id: impl Into<String>, node_type: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            node_type: node_type.into(),
            data: Map::new(),
        }
    }

    /// Returns a raw value from the node's data payload.
    pub fn data_value(&self, key: &str) -> Option<&Value> {
        self.data.get(key)
    }

    /// Returns a string field from the node's data payload.
    pub fn data_str(&self, key: &str) -> Option<&str> {
        self.data.get(key).and_then(Value::as_str)
    }

    /// Returns a raw value from the nested `data.config` object.
    pub fn config_value(&self, key: &str) -> Option<&Value> {
        self.data.get("config")?.get(key)
    }

    /// Returns a string field from the nested `data.config` object.
    pub fn config_str(&self, key: &str) -> Option<&str> {
        self.config_value(key).and_then(Value::as_str)
    }

    /// The label assigned in the editor, if any.
    pub fn label(&self) -> Option<&str> {
        self.data_str("label").filter(|label| !label.is_empty())
    }

    /// The name used when reporting on this node: the editor label when one
    /// is set, otherwise a readable default for the node type.
    pub fn display_name(&self) -> String {
        if let Some(label) = self.label() {
            return label.to_string();
        }
        default_display_name(&self.node_type)
            .unwrap_or(&self.node_type)
            .to_string()
    }
}

fn default_display_name(node_type: &str) -> Option<&'static str> {
    let name = match node_type {
        "camera" => "Camera",
        "videoInput" => "Video Input",
        "youtube" => "YouTube Stream",
        "droneInput" => "Drone Input",
        "model" => "AI Model",
        "zone" => "Detection Zone",
        "action" => "Action",
        "droneAction" => "Drone Action",
        "dataPreview" => "Data Preview",
        "debug" => "Debug Console",
        "linkOut" => "Link Out",
        "default" => "Note",
        _ => return None,
    };
    Some(name)
}
