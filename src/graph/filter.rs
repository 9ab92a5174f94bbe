//! Self-loop and orphan filtering

use petgraph::EdgeType;
use tracing::debug;

use super::types::NetworkGraph;

/// Decides which parts of a graph are drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GraphFilter {
    show_orphans: bool,
    show_self_loops: bool,
}

impl Default for GraphFilter {
    fn default() -> Self {
        Self::new(true, true)
    }
}

impl GraphFilter {
    pub fn new(show_orphans: bool, show_self_loops: bool) -> Self {
        Self {
            show_orphans,
            show_self_loops,
        }
    }

    pub fn show_orphans(&self) -> bool {
        self.show_orphans
    }

    pub fn show_self_loops(&self) -> bool {
        self.show_self_loops
    }

    /// Whether `apply` would return the graph unchanged
    pub fn is_noop(&self) -> bool {
        self.show_orphans && self.show_self_loops
    }

    /// Return a filtered copy of `graph`; the input is never modified.
    ///
    /// Self-loops are removed first, so a node whose only edges were
    /// self-loops counts as an orphan when orphans are hidden.
    pub fn apply<Ty: EdgeType>(&self, graph: &NetworkGraph<Ty>) -> NetworkGraph<Ty> {
        let mut filtered = graph.clone();

        if !self.show_self_loops {
            filtered.retain_edges(|g, e| g.edge_endpoints(e).is_some_and(|(a, b)| a != b));
        }

        if !self.show_orphans {
            filtered.retain_nodes(|g, n| g.neighbors_undirected(n).next().is_some());
        }

        debug!(
            nodes_removed = graph.node_count() - filtered.node_count(),
            edges_removed = graph.edge_count() - filtered.edge_count(),
            "filtered graph"
        );

        filtered
    }
}

/// Self-loop edges of a graph
pub fn self_loop_count<Ty: EdgeType>(graph: &NetworkGraph<Ty>) -> usize {
    graph
        .edge_indices()
        .filter_map(|e| graph.edge_endpoints(e))
        .filter(|(a, b)| a == b)
        .count()
}

/// Nodes without any incident edge
pub fn isolated_nodes<Ty: EdgeType>(graph: &NetworkGraph<Ty>) -> Vec<String> {
    graph
        .node_indices()
        .filter(|&n| graph.neighbors_undirected(n).next().is_none())
        .map(|n| graph[n].name().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{GraphBuilder, NodeData};

    fn sample() -> NetworkGraph {
        GraphBuilder::directed()
            .with_edge("a", "b")
            .with_edge("c", "c")
            .with_node(NodeData::new("lonely"))
            .build()
    }

    #[test]
    fn test_default_filter_keeps_everything() {
        let graph = sample();
        let filtered = GraphFilter::default().apply(&graph);

        assert_eq!(filtered.node_count(), 4);
        assert_eq!(filtered.edge_count(), 2);
    }

    #[test]
    fn test_hide_orphans_keeps_self_loop_nodes() {
        let graph = sample();
        let filtered = GraphFilter::new(false, true).apply(&graph);

        let mut names: Vec<_> = filtered.node_weights().map(|n| n.name()).collect();
        names.sort();
        assert_eq!(names, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_hide_self_loops_and_orphans() {
        let graph = sample();
        let filtered = GraphFilter::new(false, false).apply(&graph);

        let mut names: Vec<_> = filtered.node_weights().map(|n| n.name()).collect();
        names.sort();
        assert_eq!(names, vec!["a", "b"]);
        assert_eq!(self_loop_count(&filtered), 0);
    }

    #[test]
    fn test_filter_does_not_touch_input() {
        let graph = sample();
        let _ = GraphFilter::new(false, false).apply(&graph);

        assert_eq!(graph.node_count(), 4);
        assert_eq!(graph.edge_count(), 2);
        assert_eq!(self_loop_count(&graph), 1);
        assert_eq!(isolated_nodes(&graph), vec!["lonely".to_string()]);
    }
}
