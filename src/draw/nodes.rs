use petgraph::EdgeType;
use tracing::debug;

use super::{DrawInput, Drawn, restrict};
use crate::chart::{EncodingBuilder, LayerKind, MarkType};
use crate::constants::{columns, nodes};
use crate::error::ChartError;
use crate::projection::node_table;
use crate::style::{ColourStyle, Style};

#[derive(Debug, Clone, PartialEq)]
pub struct NodeStyle {
    /// Node names to keep
    pub subset: Option<Vec<String>>,
    /// Mark area in square pixels
    pub size: Style<f64>,
    pub outline_width: Style<f64>,
    /// Vega-Lite point shape, e.g. `circle`, `square`, `triangle-up`
    pub shape: Style<String>,
    pub colour: ColourStyle,
    pub opacity: Style<f64>,
    pub tooltip: Option<Vec<String>>,
    pub legend: bool,
}

impl Default for NodeStyle {
    fn default() -> Self {
        Self {
            subset: None,
            size: Style::Fixed(nodes::SIZE),
            outline_width: Style::Fixed(nodes::OUTLINE_WIDTH),
            shape: Style::Fixed(nodes::SHAPE.to_string()),
            colour: ColourStyle::fixed(nodes::COLOUR),
            opacity: Style::Fixed(nodes::OPACITY),
            tooltip: None,
            legend: false,
        }
    }
}

impl NodeStyle {
    pub fn with_subset(mut self, names: Vec<String>) -> Self {
        self.subset = Some(names);
        self
    }

    pub fn with_size(mut self, size: impl Into<Style<f64>>) -> Self {
        self.size = size.into();
        self
    }

    pub fn with_outline_width(mut self, width: impl Into<Style<f64>>) -> Self {
        self.outline_width = width.into();
        self
    }

    pub fn with_shape(mut self, shape: impl Into<Style<String>>) -> Self {
        self.shape = shape.into();
        self
    }

    pub fn with_colour(mut self, colour: impl Into<ColourStyle>) -> Self {
        self.colour = colour.into();
        self
    }

    pub fn with_opacity(mut self, opacity: impl Into<Style<f64>>) -> Self {
        self.opacity = opacity.into();
        self
    }

    pub fn with_tooltip(mut self, columns: Vec<String>) -> Self {
        self.tooltip = Some(columns);
        self
    }

    pub fn with_legend(mut self, legend: bool) -> Self {
        self.legend = legend;
        self
    }

    pub(crate) fn validate(&self) -> Result<(), ChartError> {
        self.size.validate_non_negative("node_size")?;
        self.outline_width.validate_non_negative("outline_width")?;
        self.opacity.validate_opacity("node_opacity")
    }
}

/// Draw nodes as filled point marks
pub fn draw_nodes<Ty: EdgeType>(
    input: &DrawInput<'_, Ty>,
    style: &NodeStyle,
) -> Result<Drawn, ChartError> {
    style.validate()?;

    let mut resolved = input.resolve(&[LayerKind::Nodes], |graph, positions| {
        node_table(graph, positions)
    })?;
    let table = restrict(resolved.take_table(), columns::NODE, style.subset.as_deref());

    let mut builder = EncodingBuilder::new(LayerKind::Nodes, table, style.legend);
    builder
        .style("node_size", &style.size, "size", "size")?
        .style("outline_width", &style.outline_width, "strokeWidth", "strokeWidth")?
        .style("shape", &style.shape, "shape", "shape")?
        .colour("node_colour", &style.colour, "fill", "fill")?
        .style("node_opacity", &style.opacity, "opacity", "opacity")?
        .tooltip(style.tooltip.as_deref())?;

    debug!(rows = builder.data().len(), "drew node layer");
    resolved.finish(builder.build(MarkType::Point))
}
