//! # Graph Model Module
//!
//! The attributed graph drawn by this crate, built on `petgraph::Graph`.
//!
//! ## Components
//!
//! - **NodeData / EdgeData**: node name and attributes, edge attributes
//! - **GraphBuilder**: builds graphs by node name
//! - **GraphFilter**: drops self-loops and orphaned nodes from a copy
//! - **Node-link input**: loads graphs (and optional positions) from JSON
//!
//! ## Example
//!
//! ```
//! use petgraph_vega::graph::{EdgeData, GraphBuilder, GraphFilter, NodeData};
//!
//! let graph = GraphBuilder::directed()
//!     .with_node(NodeData::new("core").with_attribute("size", 3))
//!     .with_edge_data("app", "core", EdgeData::new().with_attribute("weight", 0.5))
//!     .with_node(NodeData::new("unused"))
//!     .build();
//!
//! let visible = GraphFilter::new(false, true).apply(&graph);
//! assert_eq!(visible.node_count(), 2);
//! assert_eq!(graph.node_count(), 3);
//! ```

mod builder;
mod filter;
mod node_link;
mod types;

pub use builder::GraphBuilder;
pub use filter::{GraphFilter, isolated_nodes, self_loop_count};
pub use node_link::{LoadedGraph, NodeLinkGraph, load_node_link, parse_node_link};
pub use types::{
    Attributes, DiNetwork, EdgeData, NetworkGraph, NodeData, Positions, UnNetwork,
};
