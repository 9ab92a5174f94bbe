//! # petgraph-vega - Draw petgraph Graphs as Vega-Lite Charts
//!
//! petgraph-vega turns attributed graphs into flat record sets and stacks
//! them into a layered Vega-Lite chart: edges, arrowheads, nodes and
//! labels, each with its own marks and encodings. Rendering is left to any
//! Vega-Lite viewer.
//!
//! ## Main Components
//!
//! - **Graph**: attributed `petgraph` graphs, a builder, orphan and
//!   self-loop filters, and a node-link JSON loader
//! - **Layout**: force-directed and circular node placement, plus rescaling
//!   onto the chart's coordinate space
//! - **Projection**: graph and positions to edge, arrow and node records
//! - **Draw**: one function per layer and [`draw::draw_network`] for the
//!   whole composite
//! - **Chart**: in-memory layers serialised to Vega-Lite JSON
//!
//! ## Usage
//!
//! ### Drawing a Whole Network
//!
//! ```
//! use petgraph_vega::chart::LayerKind;
//! use petgraph_vega::draw::{LabelStyle, NetworkOptions, NodeStyle, draw_network};
//! use petgraph_vega::common::ConfigBuilder;
//! use petgraph_vega::graph::{GraphBuilder, NodeData};
//! use petgraph_vega::style::ColourStyle;
//!
//! # fn main() -> Result<(), petgraph_vega::error::ChartError> {
//! let graph = GraphBuilder::directed()
//!     .with_node(NodeData::new("A").with_attribute("rank", 1))
//!     .with_node(NodeData::new("B").with_attribute("rank", 2))
//!     .with_node(NodeData::new("C").with_attribute("rank", 3))
//!     .with_edge("A", "B")
//!     .with_edge("B", "C")
//!     .build();
//!
//! let options = NetworkOptions::builder()
//!     .with_nodes(NodeStyle::default().with_colour(ColourStyle::colour_map("rank", "viridis")))
//!     .with_labels(LabelStyle::default())
//!     .build()?;
//!
//! // No positions given: a force-directed layout is computed
//! let chart = draw_network(&graph, None, &options)?;
//!
//! assert_eq!(
//!     chart.kinds(),
//!     vec![LayerKind::Edges, LayerKind::Arrows, LayerKind::Nodes, LayerKind::Labels]
//! );
//! let spec = chart.to_vega_lite();
//! assert_eq!(spec["layer"].as_array().map(Vec::len), Some(4));
//! # Ok(())
//! # }
//! ```
//!
//! ### Restyling One Layer of an Existing Chart
//!
//! ```
//! use petgraph_vega::draw::{DrawInput, EdgeStyle, NetworkOptions, draw_edges, draw_network};
//! use petgraph_vega::graph::GraphBuilder;
//!
//! # fn main() -> Result<(), petgraph_vega::error::ChartError> {
//! let graph = GraphBuilder::undirected().with_edge("a", "b").build();
//! let chart = draw_network(&graph, None, &NetworkOptions::default())?;
//!
//! let redrawn = draw_edges(
//!     &DrawInput::over_chart(&chart),
//!     &EdgeStyle::default().with_colour("crimson").with_width(3.0),
//! )?;
//!
//! // The input chart is untouched; the redrawn one is returned
//! let updated = redrawn.chart.expect("drawn over a chart");
//! assert_ne!(updated, chart);
//! # Ok(())
//! # }
//! ```

pub mod chart;
pub mod cli;
pub mod commands;
pub mod common;
pub mod config;
pub mod constants;
pub mod draw;
pub mod error;
pub mod executors;
pub mod geometry;
pub mod graph;
pub mod layout;
pub mod projection;
pub mod style;
pub mod table;

// Main entry point for the library
pub fn run() -> miette::Result<()> {
    use clap::Parser;
    use tracing_subscriber::EnvFilter;

    use crate::cli::Cli;
    use crate::commands::execute_command;
    use crate::constants::env;

    let filter = EnvFilter::try_from_env(env::LOG_FILTER)
        .unwrap_or_else(|_| EnvFilter::new(env::DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    execute_command(cli.command)
}
