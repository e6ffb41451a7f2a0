use super::definition::WorkflowDefinition;
use crate::error::WorkflowConversionError;

/// A trait for custom editor models that can be converted into a Shinsa `WorkflowDefinition`.
///
/// This is the primary extension point for making Shinsa format-agnostic. By implementing
/// this trait on your own graph structs, you provide a translation layer that
/// allows the Shinsa validator to process your custom workflow format.
///
/// # Example
///
/// ```rust,no_run
/// use shinsa::prelude::*;
/// use shinsa::error::WorkflowConversionError;
///
/// // 1. Define your custom structs for parsing your format.
/// struct MyCustomNode { id: String, kind: String }
/// struct MyCustomWorkflow { nodes: Vec<MyCustomNode> }
///
/// // 2. Implement `IntoWorkflow` for your top-level struct.
/// impl IntoWorkflow for MyCustomWorkflow {
///     fn into_workflow(self) -> std::result::Result<WorkflowDefinition, WorkflowConversionError> {
///         let mut shinsa_nodes = Vec::new();
///         for node in self.nodes {
///             // Your logic to convert `MyCustomNode` into `WorkflowNodeDefinition`
///             let shinsa_node = WorkflowNodeDefinition {
///                 id: node.id,
///                 node_type: node.kind, // Map the type name
///                 // ... fill in the configuration payload ...
/// #                data: serde_json::Map::new(),
///             };
///             shinsa_nodes.push(shinsa_node);
///         }
///
///         Ok(WorkflowDefinition {
///             nodes: shinsa_nodes,
///             edges: vec![], // Convert your edges here as well
///         })
///     }
/// }
/// ```
pub trait IntoWorkflow {
    /// Consumes the object and converts it into a Shinsa-compatible workflow graph.
    fn into_workflow(self) -> Result<WorkflowDefinition, WorkflowConversionError>;
}
