//! Whole-network composition

use std::borrow::Cow;

use petgraph::EdgeType;
use tracing::debug;

use super::{
    ArrowStyle, DrawInput, EdgeStyle, LabelStyle, NodeStyle, draw_arrows, draw_edges,
    draw_labels, draw_nodes,
};
use crate::chart::LayeredChart;
use crate::common::ConfigBuilder;
use crate::constants::chart;
use crate::error::ChartError;
use crate::graph::{GraphFilter, NetworkGraph, Positions};
use crate::layout::{ForceLayout, Layout, rescale};

#[derive(Debug, Clone, PartialEq)]
pub struct NetworkOptions {
    pub filter: GraphFilter,
    /// Nodes (and labels) to draw; overrides the node and label styles' own subset
    pub node_subset: Option<Vec<String>>,
    /// `source-target` pairs to draw; overrides the edge and arrow styles' own subset
    pub edge_subset: Option<Vec<String>>,
    pub nodes: NodeStyle,
    /// Labels are drawn only when set
    pub labels: Option<LabelStyle>,
    pub edges: EdgeStyle,
    /// Path geometry is taken from `edges`, and the edge tooltip is used
    /// when the arrows have none
    pub arrows: ArrowStyle,
    pub width: Option<f64>,
    pub height: Option<f64>,
}

impl Default for NetworkOptions {
    fn default() -> Self {
        Self {
            filter: GraphFilter::default(),
            node_subset: None,
            edge_subset: None,
            nodes: NodeStyle::default(),
            labels: None,
            edges: EdgeStyle::default(),
            arrows: ArrowStyle::default(),
            width: Some(chart::WIDTH),
            height: Some(chart::HEIGHT),
        }
    }
}

impl NetworkOptions {
    pub fn builder() -> NetworkOptionsBuilder {
        NetworkOptionsBuilder::new()
    }

    fn node_style(&self) -> NodeStyle {
        let mut style = self.nodes.clone();
        if self.node_subset.is_some() {
            style.subset = self.node_subset.clone();
        }
        style
    }

    fn label_style(&self) -> Option<LabelStyle> {
        self.labels.clone().map(|mut style| {
            if self.node_subset.is_some() {
                style.subset = self.node_subset.clone();
            }
            style
        })
    }

    fn edge_style(&self) -> EdgeStyle {
        let mut style = self.edges.clone();
        if self.edge_subset.is_some() {
            style.subset = self.edge_subset.clone();
        }
        style
    }

    fn arrow_style(&self) -> ArrowStyle {
        let mut style = self.arrows.clone();
        if self.edge_subset.is_some() {
            style.subset = self.edge_subset.clone();
        }
        if style.tooltip.is_none() {
            style.tooltip = self.edges.tooltip.clone();
        }
        style.path = self.edges.path_options();
        style
    }

    fn validate(&self) -> Result<(), ChartError> {
        if self.width.is_none() && self.height.is_none() {
            return Err(ChartError::InvalidChartSize {
                message: "width and height cannot both be unset".to_string(),
            });
        }
        self.nodes.validate()?;
        self.edges.validate()?;
        self.arrows.validate()?;
        if let Some(labels) = &self.labels {
            labels.validate()?;
        }
        Ok(())
    }
}

#[derive(Default)]
pub struct NetworkOptionsBuilder {
    filter: Option<GraphFilter>,
    node_subset: Option<Vec<String>>,
    edge_subset: Option<Vec<String>>,
    nodes: Option<NodeStyle>,
    labels: Option<LabelStyle>,
    edges: Option<EdgeStyle>,
    arrows: Option<ArrowStyle>,
    width: Option<Option<f64>>,
    height: Option<Option<f64>>,
}

impl NetworkOptionsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_filter(mut self, filter: GraphFilter) -> Self {
        self.filter = Some(filter);
        self
    }

    pub fn with_show_orphans(mut self, show_orphans: bool) -> Self {
        let current = self.filter.unwrap_or_default();
        self.filter = Some(GraphFilter::new(show_orphans, current.show_self_loops()));
        self
    }

    pub fn with_show_self_loops(mut self, show_self_loops: bool) -> Self {
        let current = self.filter.unwrap_or_default();
        self.filter = Some(GraphFilter::new(current.show_orphans(), show_self_loops));
        self
    }

    pub fn with_node_subset(mut self, names: Vec<String>) -> Self {
        self.node_subset = Some(names);
        self
    }

    pub fn with_edge_subset(mut self, pairs: Vec<String>) -> Self {
        self.edge_subset = Some(pairs);
        self
    }

    pub fn with_nodes(mut self, nodes: NodeStyle) -> Self {
        self.nodes = Some(nodes);
        self
    }

    pub fn with_labels(mut self, labels: LabelStyle) -> Self {
        self.labels = Some(labels);
        self
    }

    pub fn with_edges(mut self, edges: EdgeStyle) -> Self {
        self.edges = Some(edges);
        self
    }

    pub fn with_arrows(mut self, arrows: ArrowStyle) -> Self {
        self.arrows = Some(arrows);
        self
    }

    /// `None` derives the width from the layout's aspect ratio
    pub fn with_width(mut self, width: Option<f64>) -> Self {
        self.width = Some(width);
        self
    }

    /// `None` derives the height from the layout's aspect ratio
    pub fn with_height(mut self, height: Option<f64>) -> Self {
        self.height = Some(height);
        self
    }
}

impl ConfigBuilder for NetworkOptionsBuilder {
    type Config = NetworkOptions;

    fn build(self) -> Result<Self::Config, ChartError> {
        let defaults = NetworkOptions::default();
        let options = NetworkOptions {
            filter: self.filter.unwrap_or(defaults.filter),
            node_subset: self.node_subset,
            edge_subset: self.edge_subset,
            nodes: self.nodes.unwrap_or(defaults.nodes),
            labels: self.labels,
            edges: self.edges.unwrap_or(defaults.edges),
            arrows: self.arrows.unwrap_or(defaults.arrows),
            width: self.width.unwrap_or(defaults.width),
            height: self.height.unwrap_or(defaults.height),
        };
        options.validate()?;
        Ok(options)
    }
}

/// Draw a whole network, computing positions with the force layout when
/// none are given.
pub fn draw_network<Ty: EdgeType>(
    graph: &NetworkGraph<Ty>,
    positions: Option<&Positions>,
    options: &NetworkOptions,
) -> Result<LayeredChart, ChartError> {
    draw_network_with_layout(graph, positions, options, &ForceLayout::default())
}

/// Draw a whole network: edges, then arrows for directed graphs, then
/// nodes, then labels when requested.
///
/// Positions are rescaled so both axes share one unit and the result is
/// sized to the resolved width and height. Neither `graph` nor `positions`
/// is modified.
pub fn draw_network_with_layout<Ty: EdgeType, L: Layout>(
    graph: &NetworkGraph<Ty>,
    positions: Option<&Positions>,
    options: &NetworkOptions,
    layout: &L,
) -> Result<LayeredChart, ChartError> {
    options.validate()?;

    let graph: Cow<'_, NetworkGraph<Ty>> = if options.filter.is_noop() {
        Cow::Borrowed(graph)
    } else {
        Cow::Owned(options.filter.apply(graph))
    };
    if graph.node_count() == 0 && graph.edge_count() == 0 {
        return Err(ChartError::EmptyGraph);
    }

    let positions = match positions {
        Some(given) => graph
            .node_weights()
            .map(|node| {
                given
                    .get(node.name())
                    .map(|point| (node.name().to_string(), *point))
                    .ok_or_else(|| ChartError::MissingPosition {
                        node: node.name().to_string(),
                    })
            })
            .collect::<Result<Positions, ChartError>>()?,
        None => layout.layout(graph.as_ref()),
    };
    let (positions, size) = rescale(&positions, options.width, options.height)?;

    let input = DrawInput::graph(graph.as_ref()).with_positions(&positions);
    let mut layers = Vec::with_capacity(4);

    if graph.edge_count() > 0 {
        layers.push(draw_edges(&input, &options.edge_style())?.layer);
        if graph.is_directed() {
            layers.push(draw_arrows(&input, &options.arrow_style())?.layer);
        }
    }

    if graph.node_count() > 0 {
        layers.push(draw_nodes(&input, &options.node_style())?.layer);
        if let Some(labels) = options.label_style() {
            layers.push(draw_labels(&input, &labels)?.layer);
        }
    }

    debug!(
        layers = layers.len(),
        width = size.width,
        height = size.height,
        "drew network"
    );
    Ok(LayeredChart::new(layers, size.width, size.height))
}
