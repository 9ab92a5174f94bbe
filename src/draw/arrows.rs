use petgraph::EdgeType;
use tracing::debug;

use super::{DrawInput, Drawn, restrict};
use crate::chart::{EncodingBuilder, LayerKind, MarkType};
use crate::constants::{arrows, columns};
use crate::error::ChartError;
use crate::projection::{ArrowOptions, EdgePathOptions, arrow_table};
use crate::style::{ColourStyle, Style};

#[derive(Debug, Clone, PartialEq)]
pub struct ArrowStyle {
    /// `source-target` pairs to keep
    pub subset: Option<Vec<String>>,
    pub width: Style<f64>,
    pub length: f64,
    /// Length as a fraction of each edge's length
    pub length_is_relative: bool,
    pub colour: ColourStyle,
    pub opacity: Style<f64>,
    pub tooltip: Option<Vec<String>>,
    pub legend: bool,
    /// Geometry of the edges the arrows sit on
    pub path: EdgePathOptions,
}

impl Default for ArrowStyle {
    fn default() -> Self {
        Self {
            subset: None,
            width: Style::Fixed(arrows::WIDTH),
            length: arrows::LENGTH,
            length_is_relative: arrows::LENGTH_IS_RELATIVE,
            colour: ColourStyle::fixed(arrows::COLOUR),
            opacity: Style::Fixed(arrows::OPACITY),
            tooltip: None,
            legend: false,
            path: EdgePathOptions::default(),
        }
    }
}

impl ArrowStyle {
    pub fn with_subset(mut self, pairs: Vec<String>) -> Self {
        self.subset = Some(pairs);
        self
    }

    pub fn with_width(mut self, width: impl Into<Style<f64>>) -> Self {
        self.width = width.into();
        self
    }

    pub fn with_length(mut self, length: f64, relative: bool) -> Self {
        self.length = length;
        self.length_is_relative = relative;
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

    pub fn with_path(mut self, path: EdgePathOptions) -> Self {
        self.path = path;
        self
    }

    fn options(&self) -> ArrowOptions {
        ArrowOptions {
            length: self.length,
            length_is_relative: self.length_is_relative,
            path: self.path.clone(),
        }
    }

    pub(crate) fn validate(&self) -> Result<(), ChartError> {
        self.width.validate_non_negative("arrow_width")?;
        self.opacity.validate_opacity("arrow_opacity")?;
        if !(self.length.is_finite() && self.length >= 0.0) {
            return Err(ChartError::invalid_style(
                "arrow_length",
                format!("expected a finite, non-negative number, got {}", self.length),
            ));
        }
        Ok(())
    }
}

/// Draw arrowheads as short line segments ending at each edge's target.
///
/// A width column is encoded on `size`; a constant width sets the stroke.
pub fn draw_arrows<Ty: EdgeType>(
    input: &DrawInput<'_, Ty>,
    style: &ArrowStyle,
) -> Result<Drawn, ChartError> {
    style.validate()?;

    let options = style.options();
    let mut resolved = input.resolve(&[LayerKind::Arrows], |graph, positions| {
        arrow_table(graph, positions, &options)
    })?;
    let table = restrict(resolved.take_table(), columns::PAIR, style.subset.as_deref());

    let mut builder = EncodingBuilder::new(LayerKind::Arrows, table, style.legend);
    builder
        .style("arrow_width", &style.width, "strokeWidth", "size")?
        .colour("arrow_colour", &style.colour, "color", "color")?
        .style("arrow_opacity", &style.opacity, "opacity", "opacity")?
        .tooltip(style.tooltip.as_deref())?
        .channel("detail", columns::EDGE)?;

    debug!(rows = builder.data().len(), "drew arrow layer");
    resolved.finish(builder.build(MarkType::Line))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;
    use crate::chart::Channel;
    use crate::geometry::Point;
    use crate::graph::{EdgeData, GraphBuilder, Positions};

    fn positions() -> Positions {
        [("a", 0.0, 0.0), ("b", 1.0, 0.0), ("c", 1.0, 1.0)]
            .into_iter()
            .map(|(n, x, y)| (n.to_string(), Point::new(x, y)))
            .collect()
    }

    #[test]
    fn test_default_arrows() {
        let graph = GraphBuilder::directed()
            .with_edge("a", "b")
            .with_edge("b", "c")
            .build();
        let pos = positions();

        let layer = draw_arrows(
            &DrawInput::graph(&graph).with_positions(&pos),
            &ArrowStyle::default(),
        )
        .unwrap()
        .layer;

        assert_eq!(layer.kind(), LayerKind::Arrows);
        assert_eq!(layer.data().len(), 4);
        assert_eq!(layer.mark_property("color"), Some(&json!("black")));
        assert_eq!(layer.mark_property("strokeWidth"), Some(&json!(2.0)));
        assert!(layer.encoding("order").is_none());
    }

    #[test]
    fn test_width_column_maps_to_size() {
        let graph = GraphBuilder::directed()
            .with_edge_data("a", "b", EdgeData::new().with_attribute("weight", 4))
            .build();
        let pos = positions();
        let style = ArrowStyle::default().with_width(Style::<f64>::column("weight"));

        let layer = draw_arrows(&DrawInput::graph(&graph).with_positions(&pos), &style)
            .unwrap()
            .layer;

        assert!(layer.mark_property("strokeWidth").is_none());
        let size = layer.encoding("size").and_then(Channel::field).unwrap();
        assert_eq!(size.field, "weight");
        assert_eq!(size.legend, Some(serde_json::Value::Null));
    }

    #[test]
    fn test_absolute_length() {
        let graph = GraphBuilder::directed().with_edge("a", "b").build();
        let pos: Positions = [("a", 0.0, 0.0), ("b", 10.0, 0.0)]
            .into_iter()
            .map(|(n, x, y)| (n.to_string(), Point::new(x, y)))
            .collect();
        let style = ArrowStyle::default().with_length(0.5, false);

        let layer = draw_arrows(&DrawInput::graph(&graph).with_positions(&pos), &style)
            .unwrap()
            .layer;

        let start = layer.data().rows()[0]["x"].as_f64().unwrap();
        assert!((start - 9.5).abs() < 1e-9);
    }

    #[test]
    fn test_negative_length_rejected() {
        assert!(ArrowStyle::default().with_length(-1.0, true).validate().is_err());
    }
}
