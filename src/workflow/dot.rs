use super::definition::WorkflowDefinition;

impl WorkflowDefinition {
    /// Renders the graph as a Graphviz DOT digraph, useful for debugging
    /// workflows outside of the canvas editor.
    pub fn to_dot(&self) -> String {
        let mut output = String::new();

        output.push_str("digraph Workflow {\n");
        output.push_str("  rankdir=LR;\n");
        output.push_str("  node [shape=box, style=\"filled,rounded\", fontname=\"Helvetica\", fontsize=10];\n");
        output.push('\n');

        // Color mapping for the node families on the canvas
        let color_map = [
            ("camera", "#4CAF50"),
            ("videoInput", "#4CAF50"),
            ("youtube", "#4CAF50"),
            ("droneInput", "#4CAF50"),
            ("model", "#2196F3"),
            ("zone", "#00BCD4"),
            ("action", "#FF9800"),
            ("droneAction", "#FF9800"),
            ("dataPreview", "#9C27B0"),
            ("debug", "#9C27B0"),
            ("linkOut", "#9C27B0"),
        ];

        for node in &self.nodes {
            let color = color_map
                .iter()
                .find(|(node_type, _)| node.node_type == *node_type)
                .map(|(_, color)| *color)
                .unwrap_or("#9E9E9E");

            output.push_str(&format!(
                "  \"{}\" [label=\"{}\\n({})\", fillcolor=\"{}\"];\n",
                escape(&node.id),
                escape(&node.display_name()),
                escape(&node.node_type),
                color
            ));
        }

        output.push('\n');
        for edge in &self.edges {
            output.push_str(&format!(
                "  \"{}\" -> \"{}\";\n",
                escape(&edge.source),
                escape(&edge.target)
            ));
        }

        output.push_str("}\n");
        output
    }
}

fn escape(text: &str) -> String {
    text.replace('\\', "\\\\").replace('"', "\\\"")
}
