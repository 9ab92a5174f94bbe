//! Draw command executor

use console::style;
use miette::{Result, WrapErr};
use petgraph::EdgeType;
use tracing::warn;

use crate::chart::LayeredChart;
use crate::cli::LayoutKind;
use crate::common::ConfigBuilder;
use crate::config::DrawConfig;
use crate::draw::{
    Curve, EdgeStyle, LabelStyle, NetworkOptions, NodeStyle, draw_network_with_layout,
};
use crate::error::ChartError;
use crate::executors::{CommandExecutor, write_output};
use crate::graph::{
    Attributes, LoadedGraph, NetworkGraph, NodeLinkGraph, Positions, load_node_link,
};
use crate::layout::{CircularLayout, ForceLayout};
use crate::projection::{EDGE_COLUMNS, NODE_COLUMNS};
use crate::style::{ColourStyle, Style};
use crate::table::Table;

pub struct DrawExecutor;

impl CommandExecutor for DrawExecutor {
    type Config = DrawConfig;

    fn execute(config: Self::Config) -> Result<()> {
        eprintln!(
            "{} Drawing {}...",
            style("📊").cyan(),
            style(config.input.display()).bold()
        );

        let NodeLinkGraph { graph, positions } = load_node_link(&config.input)
            .wrap_err_with(|| format!("Failed to load graph from '{}'", config.input.display()))?;

        let chart = match &graph {
            LoadedGraph::Directed(g) => render(g, positions.as_ref(), &config),
            LoadedGraph::Undirected(g) => render(g, positions.as_ref(), &config),
        }
        .wrap_err("Failed to draw graph")?;

        let json = chart
            .to_json_string(config.pretty)
            .wrap_err("Failed to serialise chart")?;
        write_output(config.output.as_deref(), &json)?;

        if let Some(output_path) = &config.output {
            eprintln!(
                "{} Chart with {} layers written to {}",
                style("✓").green(),
                chart.layers().len(),
                style(output_path.display()).bold()
            );
        }

        Ok(())
    }
}

/// Draw `graph` with the options and layout of a draw command
pub fn render<Ty: EdgeType>(
    graph: &NetworkGraph<Ty>,
    positions: Option<&Positions>,
    config: &DrawConfig,
) -> Result<LayeredChart, ChartError> {
    let options = network_options(graph, config)?;
    match config.layout {
        LayoutKind::Force => {
            draw_network_with_layout(graph, positions, &options, &ForceLayout::default())
        }
        LayoutKind::Circular => {
            draw_network_with_layout(graph, positions, &options, &CircularLayout::default())
        }
    }
}

/// Records with only the attribute columns, enough to tell columns from
/// constants
fn attribute_table<'a>(
    generated: &[&str],
    attributes: impl Iterator<Item = &'a Attributes>,
) -> Table {
    let rows = attributes
        .map(|attrs| {
            attrs
                .iter()
                .map(|(key, value)| (key.clone(), value.clone()))
                .collect()
        })
        .collect();
    Table::from_rows(generated, rows)
}

fn network_options<Ty: EdgeType>(
    graph: &NetworkGraph<Ty>,
    config: &DrawConfig,
) -> Result<NetworkOptions, ChartError> {
    let nodes = attribute_table(NODE_COLUMNS, graph.node_weights().map(|n| n.attributes()));
    let edges = attribute_table(EDGE_COLUMNS, graph.edge_weights().map(|e| e.attributes()));
    let raw = &config.styles;

    let mut node_style = NodeStyle::default();
    match &raw.node_colour {
        Some(colour) => {
            node_style.colour = ColourStyle::parse_against(colour, raw.node_cmap.as_deref(), &nodes)
        }
        None if raw.node_cmap.is_some() => warn!("--node-cmap ignored without --node-colour"),
        None => {}
    }
    if let Some(size) = &raw.node_size {
        node_style.size = Style::parse_against("node_size", size, &nodes)?;
    }
    if let Some(shape) = &raw.node_shape {
        node_style.shape = Style::parse_against("node_shape", shape, &nodes)?;
    }

    let labels = raw
        .node_label
        .as_deref()
        .map(|label| Style::parse_against("node_label", label, &nodes))
        .transpose()?
        .map(|label| LabelStyle::default().with_label(label));

    let mut edge_style = EdgeStyle::default();
    match &raw.edge_colour {
        Some(colour) => {
            edge_style.colour = ColourStyle::parse_against(colour, raw.edge_cmap.as_deref(), &edges)
        }
        None if raw.edge_cmap.is_some() => warn!("--edge-cmap ignored without --edge-colour"),
        None => {}
    }
    if let Some(width) = &raw.edge_width {
        edge_style.width = Style::parse_against("edge_width", width, &edges)?;
    }
    if config.curved {
        edge_style = edge_style.curved(Curve::default());
    }

    let mut builder = NetworkOptions::builder()
        .with_show_orphans(config.show_orphans)
        .with_show_self_loops(config.show_self_loops)
        .with_nodes(node_style)
        .with_edges(edge_style)
        .with_width(config.width)
        .with_height(config.height);
    if let Some(labels) = labels {
        builder = builder.with_labels(labels);
    }
    builder.build()
}
