use ahash::{AHashMap, AHashSet};
use itertools::Itertools;
use std::collections::VecDeque;

use crate::report::{Category, Finding, Severity};
use crate::workflow::WorkflowDefinition;

/// Node types that produce frames or telemetry for the rest of the pipeline.
const INPUT_SOURCE_TYPES: [&str; 4] = ["camera", "videoInput", "youtube", "droneInput"];

/// Node types that consume results at the end of a pipeline.
const SINK_TYPES: [&str; 5] = ["action", "dataPreview", "debug", "linkOut", "droneAction"];

/// Frame-producing inputs whose downstream branch is expected to reach a
/// model and eventually a sink.
const PIPELINE_ROOTS: [&str; 3] = ["camera", "videoInput", "youtube"];

/// The one finding an empty graph produces; validation stops after it.
pub(super) fn empty_workflow_issue() -> Finding {
    Finding::issue(
        Severity::Critical,
        Category::Workflow,
        "Workflow is empty",
        "There are no nodes to validate; an empty workflow cannot be deployed.",
    )
    .with_fix("Add nodes from the palette to build a pipeline")
}

/// Runs every structural check over the graph. Issues and warnings are
/// appended in a fixed order so repeated runs produce identical reports.
pub(super) fn check_structure(
    workflow: &WorkflowDefinition,
    issues: &mut Vec<Finding>,
    warnings: &mut Vec<Finding>,
) {
    check_duplicate_ids(workflow, issues);
    check_edge_references(workflow, issues);
    check_input_presence(workflow, issues);
    check_disconnected_nodes(workflow, warnings);
    check_sink_presence(workflow, warnings);
    check_pipeline_flow(workflow, warnings);
}

fn check_duplicate_ids(workflow: &WorkflowDefinition, issues: &mut Vec<Finding>) {
    for id in workflow.nodes.iter().map(|node| node.id.as_str()).duplicates() {
        issues.push(
            Finding::issue(
                Severity::High,
                Category::Workflow,
                format!("Duplicate node id '{}'", id),
                "Two or more nodes share this id, so the runtime cannot address them reliably.",
            )
            .with_fix("Delete and re-add one of the duplicated nodes"),
        );
    }
}

fn check_edge_references(workflow: &WorkflowDefinition, issues: &mut Vec<Finding>) {
    let known_ids: AHashSet<&str> = workflow.nodes.iter().map(|node| node.id.as_str()).collect();

    for edge in &workflow.edges {
        for endpoint in [edge.source.as_str(), edge.target.as_str()] {
            if !known_ids.contains(endpoint) {
                issues.push(
                    Finding::issue(
                        Severity::High,
                        Category::Connectivity,
                        format!("Connection references missing node '{}'", endpoint),
                        "An edge points at a node that is not part of this workflow.",
                    )
                    .with_fix("Remove the dangling connection"),
                );
            }
        }
    }
}

fn check_input_presence(workflow: &WorkflowDefinition, issues: &mut Vec<Finding>) {
    let has_input = workflow
        .nodes
        .iter()
        .any(|node| INPUT_SOURCE_TYPES.contains(&node.node_type.as_str()));

    if !has_input {
        issues.push(
            Finding::issue(
                Severity::High,
                Category::Workflow,
                "No input source",
                "Every pipeline needs a camera, video file, YouTube stream, or drone input to produce frames.",
            )
            .with_fix("Add an input node from the palette"),
        );
    }
}

fn check_disconnected_nodes(workflow: &WorkflowDefinition, warnings: &mut Vec<Finding>) {
    let mut connected: AHashSet<&str> = AHashSet::new();
    for edge in &workflow.edges {
        connected.insert(edge.source.as_str());
        connected.insert(edge.target.as_str());
    }

    for node in &workflow.nodes {
        // Sticky notes are allowed to float freely on the canvas.
        if node.node_type == "default" {
            continue;
        }
        if !connected.contains(node.id.as_str()) {
            warnings.push(
                Finding::warning(
                    Severity::Low,
                    Category::Connectivity,
                    format!("{} is not connected", node.display_name()),
                    "Disconnected nodes are ignored at runtime.",
                )
                .for_node(node)
                .with_fix("Connect this node to the pipeline or remove it"),
            );
        }
    }
}

fn check_sink_presence(workflow: &WorkflowDefinition, warnings: &mut Vec<Finding>) {
    let has_sink = workflow
        .nodes
        .iter()
        .any(|node| SINK_TYPES.contains(&node.node_type.as_str()));

    if !has_sink {
        warnings.push(
            Finding::warning(
                Severity::Low,
                Category::Workflow,
                "No action or output node",
                "Without an action or output node the pipeline produces results nobody sees.",
            )
            .with_fix("Add an action or data preview node"),
        );
    }
}

fn check_pipeline_flow(workflow: &WorkflowDefinition, warnings: &mut Vec<Finding>) {
    let mut adjacency: AHashMap<&str, Vec<&str>> = AHashMap::new();
    for edge in &workflow.edges {
        adjacency
            .entry(edge.source.as_str())
            .or_default()
            .push(edge.target.as_str());
    }

    let types_by_id: AHashMap<&str, &str> = workflow
        .nodes
        .iter()
        .map(|node| (node.id.as_str(), node.node_type.as_str()))
        .collect();

    for root in workflow
        .nodes
        .iter()
        .filter(|node| PIPELINE_ROOTS.contains(&node.node_type.as_str()))
    {
        if !adjacency.contains_key(root.id.as_str()) {
            warnings.push(
                Finding::warning(
                    Severity::Low,
                    Category::Connectivity,
                    format!("{} has no outgoing connections", root.display_name()),
                    "Frames from this input never reach a model or action.",
                )
                .for_node(root)
                .with_fix("Connect this input to a model node"),
            );
            continue;
        }

        let reached = reachable_types(root.id.as_str(), &adjacency, &types_by_id);

        if !reached.contains("model") {
            warnings.push(
                Finding::warning(
                    Severity::Low,
                    Category::Flow,
                    format!("Pipeline from {} never reaches a model", root.display_name()),
                    "No detections can be produced on this branch.",
                )
                .for_node(root)
                .with_fix("Connect a model node downstream of this input"),
            );
        }

        let reaches_sink = SINK_TYPES
            .iter()
            .any(|sink_type| reached.contains(sink_type));
        if !reaches_sink {
            warnings.push(
                Finding::warning(
                    Severity::Low,
                    Category::Flow,
                    format!("Pipeline from {} has no action or output", root.display_name()),
                    "Results from this branch are computed and then dropped.",
                )
                .for_node(root)
                .with_fix("Finish the branch with an action or output node"),
            );
        }
    }
}

/// Breadth-first walk downstream of `start`, collecting the node types seen.
fn reachable_types<'a>(
    start: &'a str,
    adjacency: &AHashMap<&'a str, Vec<&'a str>>,
    types_by_id: &AHashMap<&'a str, &'a str>,
) -> AHashSet<&'a str> {
    let mut reached: AHashSet<&str> = AHashSet::new();
    let mut visited: AHashSet<&str> = AHashSet::new();
    let mut queue: VecDeque<&str> = VecDeque::new();

    visited.insert(start);
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        if let Some(neighbors) = adjacency.get(current) {
            for &next in neighbors {
                if visited.insert(next) {
                    if let Some(node_type) = types_by_id.get(next) {
                        reached.insert(node_type);
                    }
                    queue.push_back(next);
                }
            }
        }
    }

    reached
}
