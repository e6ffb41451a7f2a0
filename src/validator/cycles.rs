use ahash::{AHashMap, AHashSet};

use crate::workflow::WorkflowDefinition;

/// Finds every distinct cycle in the graph, reported as the display names of
/// the member nodes in traversal order, starting at the revisited node.
///
/// The walk is an iterative depth-first search over an explicit frame stack
/// (node plus next-neighbor cursor), so pathological chain depth cannot
/// overflow the call stack. Cycles discovered from different roots are
/// de-duplicated by membership, which also collapses rotations of the same
/// loop.
pub(super) fn find_cycles(workflow: &WorkflowDefinition) -> Vec<Vec<String>> {
    let mut adjacency: AHashMap<&str, Vec<&str>> = AHashMap::new();
    for edge in &workflow.edges {
        adjacency
            .entry(edge.source.as_str())
            .or_default()
            .push(edge.target.as_str());
    }

    let names_by_id: AHashMap<&str, String> = workflow
        .nodes
        .iter()
        .map(|node| (node.id.as_str(), node.display_name()))
        .collect();

    let mut visited: AHashSet<&str> = AHashSet::new();
    let mut seen_memberships: AHashSet<Vec<&str>> = AHashSet::new();
    let mut cycles: Vec<Vec<String>> = Vec::new();

    for root in workflow.nodes.iter().map(|node| node.id.as_str()) {
        if visited.contains(root) {
            continue;
        }
        visited.insert(root);

        // Each frame is (node, cursor into its outgoing edges).
        let mut stack: Vec<(&str, usize)> = vec![(root, 0)];
        let mut path: Vec<&str> = vec![root];
        let mut on_path: AHashSet<&str> = AHashSet::new();
        on_path.insert(root);

        while let Some(&(node, cursor)) = stack.last() {
            let neighbors = adjacency.get(node).map(Vec::as_slice).unwrap_or(&[]);

            if cursor >= neighbors.len() {
                stack.pop();
                path.pop();
                on_path.remove(node);
                continue;
            }
            if let Some(frame) = stack.last_mut() {
                frame.1 += 1;
            }

            let next = neighbors[cursor];
            if on_path.contains(next) {
                // The cycle is the path suffix starting at the revisited
                // node. The closing edge is not descended, so loops inside
                // an already-reported loop are not re-reported here.
                let start = path.iter().position(|&id| id == next).unwrap_or(0);
                let members: Vec<&str> = path[start..].to_vec();

                let mut membership = members.clone();
                membership.sort_unstable();
                if seen_memberships.insert(membership) {
                    cycles.push(
                        members
                            .iter()
                            .map(|&id| {
                                names_by_id
                                    .get(id)
                                    .cloned()
                                    .unwrap_or_else(|| id.to_string())
                            })
                            .collect(),
                    );
                }
            } else if !visited.contains(next) {
                visited.insert(next);
                on_path.insert(next);
                path.push(next);
                stack.push((next, 0));
            }
        }
    }

    cycles
}
