//! Node-link JSON input
//!
//! Reads the common node-link layout:
//!
//! ```json
//! {
//!   "directed": true,
//!   "nodes": [{"id": "a", "kind": "hub"}, {"id": "b"}],
//!   "links": [{"source": "a", "target": "b", "weight": 2.5}],
//!   "positions": {"a": [0.0, 0.0], "b": [1.0, 0.5]}
//! }
//! ```
//!
//! Every key other than `id` (nodes) or `source`/`target` (links) becomes an
//! attribute. `edges` is accepted as an alias of `links`, and `positions` is
//! optional.

use std::collections::BTreeMap;
use std::path::Path;

use petgraph::EdgeType;
use serde::Deserialize;
use serde_json::{Map, Value};

use super::builder::GraphBuilder;
use super::types::{DiNetwork, EdgeData, NetworkGraph, NodeData, Positions, UnNetwork};
use crate::error::ChartError;
use crate::geometry::Point;

#[derive(Debug, Deserialize)]
struct NodeLinkDocument {
    #[serde(default)]
    directed: bool,
    #[serde(default)]
    nodes: Vec<Map<String, Value>>,
    #[serde(default, alias = "edges")]
    links: Vec<Map<String, Value>>,
    #[serde(default)]
    positions: Option<BTreeMap<String, [f64; 2]>>,
}

/// A graph whose directedness is only known at runtime
#[derive(Debug, Clone)]
pub enum LoadedGraph {
    Directed(DiNetwork),
    Undirected(UnNetwork),
}

impl LoadedGraph {
    pub fn is_directed(&self) -> bool {
        matches!(self, LoadedGraph::Directed(_))
    }

    pub fn node_count(&self) -> usize {
        match self {
            LoadedGraph::Directed(g) => g.node_count(),
            LoadedGraph::Undirected(g) => g.node_count(),
        }
    }

    pub fn edge_count(&self) -> usize {
        match self {
            LoadedGraph::Directed(g) => g.edge_count(),
            LoadedGraph::Undirected(g) => g.edge_count(),
        }
    }
}

/// Parsed node-link document
#[derive(Debug, Clone)]
pub struct NodeLinkGraph {
    pub graph: LoadedGraph,
    pub positions: Option<Positions>,
}

/// Read and parse a node-link JSON file
pub fn load_node_link(path: &Path) -> Result<NodeLinkGraph, ChartError> {
    let contents = std::fs::read_to_string(path).map_err(|source| ChartError::FileReadError {
        path: path.to_path_buf(),
        source,
    })?;
    parse_node_link(&contents)
}

pub fn parse_node_link(json: &str) -> Result<NodeLinkGraph, ChartError> {
    let document: NodeLinkDocument =
        serde_json::from_str(json).map_err(|e| ChartError::GraphInputError {
            message: e.to_string(),
        })?;

    let positions = document.positions.as_ref().map(|positions| {
        positions
            .iter()
            .map(|(name, [x, y])| (name.clone(), Point::new(*x, *y)))
            .collect::<Positions>()
    });

    let graph = if document.directed {
        LoadedGraph::Directed(build_graph(&document)?)
    } else {
        LoadedGraph::Undirected(build_graph(&document)?)
    };

    Ok(NodeLinkGraph { graph, positions })
}

fn build_graph<Ty: EdgeType>(document: &NodeLinkDocument) -> Result<NetworkGraph<Ty>, ChartError> {
    let mut builder = GraphBuilder::<Ty>::new();

    for (i, entry) in document.nodes.iter().enumerate() {
        let id = entry.get("id").ok_or_else(|| ChartError::GraphInputError {
            message: format!("node #{i} has no 'id'"),
        })?;
        let mut node = NodeData::new(identifier(id, "node id")?);
        node.attributes = entry
            .iter()
            .filter(|(key, _)| key.as_str() != "id")
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();
        builder.add_node(node);
    }

    for (i, entry) in document.links.iter().enumerate() {
        let endpoint = |key: &str| {
            entry
                .get(key)
                .ok_or_else(|| ChartError::GraphInputError {
                    message: format!("link #{i} has no '{key}'"),
                })
                .and_then(|v| identifier(v, key))
        };
        let source = endpoint("source")?;
        let target = endpoint("target")?;

        let mut edge = EdgeData::new();
        edge.attributes = entry
            .iter()
            .filter(|(key, _)| key.as_str() != "source" && key.as_str() != "target")
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();
        builder.add_edge(&source, &target, edge);
    }

    Ok(builder.build())
}

fn identifier(value: &Value, what: &str) -> Result<String, ChartError> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        other => Err(ChartError::GraphInputError {
            message: format!("{what} must be a string or number, got {other}"),
        }),
    }
}
