use std::collections::HashMap;

use petgraph::graph::{EdgeIndex, Graph, NodeIndex};
use petgraph::{Directed, EdgeType, Undirected};

use super::types::{EdgeData, NetworkGraph, NodeData};

/// Builder for graphs addressed by node name
///
/// Nodes are created on first mention, so edges can be added before their
/// endpoints. Adding a node whose name already exists merges its attributes
/// into the existing node.
pub struct GraphBuilder<Ty: EdgeType = Directed> {
    graph: NetworkGraph<Ty>,
    indices: HashMap<String, NodeIndex>,
}

impl GraphBuilder<Directed> {
    pub fn directed() -> Self {
        Self::new()
    }
}

impl GraphBuilder<Undirected> {
    pub fn undirected() -> Self {
        Self::new()
    }
}

impl<Ty: EdgeType> Default for GraphBuilder<Ty> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Ty: EdgeType> GraphBuilder<Ty> {
    pub fn new() -> Self {
        Self {
            graph: Graph::default(),
            indices: HashMap::new(),
        }
    }

    /// Add a node, or merge attributes into the node of the same name
    pub fn add_node(&mut self, node: NodeData) -> NodeIndex {
        if let Some(&idx) = self.indices.get(node.name()) {
            self.graph[idx].attributes.extend(node.attributes);
            return idx;
        }

        let name = node.name().to_string();
        let idx = self.graph.add_node(node);
        self.indices.insert(name, idx);
        idx
    }

    pub fn add_edge(&mut self, source: &str, target: &str, edge: EdgeData) -> EdgeIndex {
        let a = self.add_node(NodeData::new(source));
        let b = self.add_node(NodeData::new(target));
        self.graph.add_edge(a, b, edge)
    }

    pub fn with_node(mut self, node: NodeData) -> Self {
        self.add_node(node);
        self
    }

    pub fn with_edge(mut self, source: &str, target: &str) -> Self {
        self.add_edge(source, target, EdgeData::new());
        self
    }

    pub fn with_edge_data(mut self, source: &str, target: &str, edge: EdgeData) -> Self {
        self.add_edge(source, target, edge);
        self
    }

    pub fn node_index(&self, name: &str) -> Option<NodeIndex> {
        self.indices.get(name).copied()
    }

    pub fn build(self) -> NetworkGraph<Ty> {
        self.graph
    }
}
