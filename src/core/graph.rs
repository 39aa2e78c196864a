use petgraph::{graph::NodeIndex, Directed, Graph};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// A scanned source file, identified by its root-relative path.
    File,
    /// An import that matched no scanned file, kept verbatim.
    External,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Node {
    pub id: String,
    pub kind: NodeKind,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Edge {
    pub source_id: String,
    pub target_id: String,
}

pub type DependencyGraph = Graph<Node, Edge, Directed>;

/// Accumulates dependency edges during resolution and hands back an
/// immutable graph snapshot. Nodes are interned on first sight, so a file
/// with no qualifying imports never appears unless some other file's edge
/// targets it.
pub struct GraphBuilder {
    graph: DependencyGraph,
    node_map: HashMap<String, NodeIndex>,
    seen_edges: HashSet<(NodeIndex, NodeIndex)>,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self {
            graph: Graph::new(),
            node_map: HashMap::new(),
            seen_edges: HashSet::new(),
        }
    }

    fn intern(&mut self, id: &str, kind: NodeKind) -> NodeIndex {
        if let Some(&index) = self.node_map.get(id) {
            return index;
        }
        let index = self.graph.add_node(Node {
            id: id.to_string(),
            kind,
        });
        self.node_map.insert(id.to_string(), index);
        index
    }

    /// Adds one source → target edge. The source is always a scanned file;
    /// the target's kind says whether resolution found a file or kept the
    /// import string. Duplicate pairs collapse; returns whether the edge
    /// was new.
    pub fn add_dependency(&mut self, source: &str, target: &str, target_kind: NodeKind) -> bool {
        let source_index = self.intern(source, NodeKind::File);
        let target_index = self.intern(target, target_kind);

        if !self.seen_edges.insert((source_index, target_index)) {
            return false;
        }

        self.graph.add_edge(
            source_index,
            target_index,
            Edge {
                source_id: source.to_string(),
                target_id: target.to_string(),
            },
        );
        true
    }

    pub fn build(self) -> DependencyGraph {
        self.graph
    }
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}
