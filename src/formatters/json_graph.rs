use anyhow::Result;
use serde::Serialize;
use std::fs;
use std::path::Path;

use crate::core::DependencyGraph;

#[derive(Serialize)]
struct GraphDocument {
    nodes: Vec<GraphNode>,
    links: Vec<GraphLink>,
}

#[derive(Serialize)]
struct GraphNode {
    id: String,
}

#[derive(Serialize)]
struct GraphLink {
    source: String,
    target: String,
}

/// Serializes the resolved graph as an indented node/link JSON document,
/// the shape force-directed visualization tools expect.
pub struct JsonGraphFormatter;

impl JsonGraphFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Overwrites any existing file at `output_path` without warning.
    pub fn format_to_file(&self, graph: &DependencyGraph, output_path: &Path) -> Result<()> {
        let json_content = self.format_graph(graph)?;
        fs::write(output_path, json_content)?;
        Ok(())
    }

    pub fn format_graph(&self, graph: &DependencyGraph) -> Result<String> {
        let nodes = graph
            .node_weights()
            .map(|node| GraphNode {
                id: node.id.clone(),
            })
            .collect();

        let links = graph
            .edge_weights()
            .map(|edge| GraphLink {
                source: edge.source_id.clone(),
                target: edge.target_id.clone(),
            })
            .collect();

        Ok(serde_json::to_string_pretty(&GraphDocument {
            nodes,
            links,
        })?)
    }
}

impl Default for JsonGraphFormatter {
    fn default() -> Self {
        Self::new()
    }
}
