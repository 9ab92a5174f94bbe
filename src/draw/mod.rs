//! # Draw Module
//!
//! One function per layer plus the whole-network composition:
//!
//! - [`draw_edges`]: line marks along each edge's path
//! - [`draw_arrows`]: short line marks at the target end of each edge
//! - [`draw_nodes`]: point marks
//! - [`draw_labels`]: text marks at node positions
//! - [`draw_network`]: filters, lays out, rescales and stacks the above
//!
//! Layer functions read their records from a [`DrawInput`]. An explicit
//! layer wins over a composite chart, which wins over a graph:
//!
//! ```
//! use petgraph_vega::draw::{DrawInput, EdgeStyle, draw_edges};
//! use petgraph_vega::graph::GraphBuilder;
//! use petgraph_vega::geometry::Point;
//!
//! # fn main() -> Result<(), petgraph_vega::error::ChartError> {
//! let graph = GraphBuilder::directed().with_edge("a", "b").build();
//! let positions = [("a", Point::new(0.0, 0.0)), ("b", Point::new(1.0, 0.0))]
//!     .into_iter()
//!     .map(|(name, point)| (name.to_string(), point))
//!     .collect();
//!
//! let input = DrawInput::graph(&graph).with_positions(&positions);
//! let drawn = draw_edges(&input, &EdgeStyle::default())?;
//! assert_eq!(drawn.layer.data().len(), 2);
//! # Ok(())
//! # }
//! ```

mod arrows;
mod edges;
mod labels;
mod network;
mod nodes;

pub use arrows::{ArrowStyle, draw_arrows};
pub use edges::{Curve, EdgeStyle, draw_edges};
pub use labels::{LabelStyle, draw_labels};
pub use network::{NetworkOptions, NetworkOptionsBuilder, draw_network, draw_network_with_layout};
pub use nodes::{NodeStyle, draw_nodes};

use petgraph::{Directed, EdgeType};
use tracing::debug;

use crate::chart::{Chart, LayerKind, LayeredChart};
use crate::error::ChartError;
use crate::graph::{NetworkGraph, Positions};
use crate::layout::default_layout;
use crate::table::Table;

/// Where a layer function takes its records from
#[derive(Debug)]
pub struct DrawInput<'a, Ty: EdgeType = Directed> {
    graph: Option<&'a NetworkGraph<Ty>>,
    positions: Option<&'a Positions>,
    chart: Option<&'a LayeredChart>,
    layer: Option<&'a Chart>,
}

impl<Ty: EdgeType> Clone for DrawInput<'_, Ty> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<Ty: EdgeType> Copy for DrawInput<'_, Ty> {}

impl<Ty: EdgeType> Default for DrawInput<'_, Ty> {
    fn default() -> Self {
        Self {
            graph: None,
            positions: None,
            chart: None,
            layer: None,
        }
    }
}

impl<'a> DrawInput<'a> {
    /// Redraw the matching layer of an existing composite
    pub fn over_chart(chart: &'a LayeredChart) -> Self {
        Self::default().with_chart(chart)
    }

    /// Restyle an existing layer's records
    pub fn in_layer(layer: &'a Chart) -> Self {
        Self::default().with_layer(layer)
    }
}

impl<'a, Ty: EdgeType> DrawInput<'a, Ty> {
    /// Project records from a graph; positions default to a force layout
    pub fn graph(graph: &'a NetworkGraph<Ty>) -> Self {
        Self {
            graph: Some(graph),
            ..Self::default()
        }
    }

    pub fn with_positions(mut self, positions: &'a Positions) -> Self {
        self.positions = Some(positions);
        self
    }

    pub fn with_chart(mut self, chart: &'a LayeredChart) -> Self {
        self.chart = Some(chart);
        self
    }

    pub fn with_layer(mut self, layer: &'a Chart) -> Self {
        self.layer = Some(layer);
        self
    }

    /// Records for a layer of kind `kinds[0]`. A composite is searched for
    /// each of `kinds` in turn.
    fn resolve<F>(&self, kinds: &[LayerKind], project: F) -> Result<Resolved<'a>, ChartError>
    where
        F: FnOnce(&NetworkGraph<Ty>, &Positions) -> Result<Table, ChartError>,
    {
        if let Some(layer) = self.layer {
            return Ok(Resolved {
                table: layer.data().clone(),
                composite: None,
            });
        }

        if let Some(chart) = self.chart {
            let source = kinds
                .iter()
                .find_map(|kind| chart.layer(*kind))
                .ok_or_else(|| ChartError::LayerNotFound {
                    kind: kinds.first().map(ToString::to_string).unwrap_or_default(),
                })?;
            return Ok(Resolved {
                table: source.data().clone(),
                composite: Some(chart),
            });
        }

        if let Some(graph) = self.graph {
            let table = match self.positions {
                Some(positions) => project(graph, positions)?,
                None => {
                    debug!(
                        nodes = graph.node_count(),
                        "no positions given, running default layout"
                    );
                    let positions = default_layout(graph);
                    project(graph, &positions)?
                }
            };
            return Ok(Resolved {
                table,
                composite: None,
            });
        }

        Err(ChartError::MissingSource)
    }
}

struct Resolved<'a> {
    table: Table,
    composite: Option<&'a LayeredChart>,
}

impl Resolved<'_> {
    fn take_table(&mut self) -> Table {
        std::mem::take(&mut self.table)
    }

    /// Pair the new layer with a copy of the composite it was drawn over
    fn finish(self, layer: Chart) -> Result<Drawn, ChartError> {
        let chart = match self.composite {
            None => None,
            Some(composite) => Some(match composite.position_of(layer.kind()) {
                Some(index) => composite.with_layer(index, layer.clone())?,
                None => composite.with_appended_layer(layer.clone()),
            }),
        };
        Ok(Drawn { layer, chart })
    }
}

/// Result of drawing one layer
#[derive(Debug, Clone, PartialEq)]
pub struct Drawn {
    pub layer: Chart,
    /// Present when drawn over a composite: that composite with this layer
    /// in place of the old one
    pub chart: Option<LayeredChart>,
}

fn restrict(table: Table, column: &str, subset: Option<&[String]>) -> Table {
    match subset {
        Some(keep) => table.retain_matching(column, keep),
        None => table,
    }
}
