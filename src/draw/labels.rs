use petgraph::EdgeType;
use tracing::debug;

use super::{DrawInput, Drawn, restrict};
use crate::chart::{EncodingBuilder, LayerKind, MarkType};
use crate::constants::{columns, labels};
use crate::error::ChartError;
use crate::projection::node_table;
use crate::style::{ColourStyle, Style};

#[derive(Debug, Clone, PartialEq)]
pub struct LabelStyle {
    /// Node names to keep
    pub subset: Option<Vec<String>>,
    /// Text of each label; the node name by default
    pub label: Style<String>,
    pub font_size: Style<f64>,
    pub font_colour: ColourStyle,
}

impl Default for LabelStyle {
    fn default() -> Self {
        Self {
            subset: None,
            label: Style::column(columns::NODE),
            font_size: Style::Fixed(labels::FONT_SIZE),
            font_colour: ColourStyle::fixed(labels::FONT_COLOUR),
        }
    }
}

impl LabelStyle {
    pub fn with_subset(mut self, names: Vec<String>) -> Self {
        self.subset = Some(names);
        self
    }

    pub fn with_label(mut self, label: impl Into<Style<String>>) -> Self {
        self.label = label.into();
        self
    }

    pub fn with_font_size(mut self, size: impl Into<Style<f64>>) -> Self {
        self.font_size = size.into();
        self
    }

    pub fn with_font_colour(mut self, colour: impl Into<ColourStyle>) -> Self {
        self.font_colour = colour.into();
        self
    }

    pub(crate) fn validate(&self) -> Result<(), ChartError> {
        self.font_size.validate_non_negative("font_size")
    }
}

/// Draw node labels as text marks centred on each node.
///
/// Over a composite the labels layer is redrawn when present, otherwise
/// the labels are built from the nodes layer's records and added on top.
pub fn draw_labels<Ty: EdgeType>(
    input: &DrawInput<'_, Ty>,
    style: &LabelStyle,
) -> Result<Drawn, ChartError> {
    style.validate()?;

    let mut resolved = input.resolve(&[LayerKind::Labels, LayerKind::Nodes], |graph, positions| {
        node_table(graph, positions)
    })?;
    let table = restrict(resolved.take_table(), columns::NODE, style.subset.as_deref());

    let mut builder = EncodingBuilder::new(LayerKind::Labels, table, false);
    builder
        .mark_property("baseline", "middle")
        .style("label", &style.label, "text", "text")?
        .style("font_size", &style.font_size, "size", "size")?
        .colour("font_colour", &style.font_colour, "fill", "fill")?;

    debug!(rows = builder.data().len(), "drew label layer");
    resolved.finish(builder.build(MarkType::Text))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;
    use crate::chart::{Channel, LayeredChart};
    use crate::draw::{NodeStyle, draw_nodes};
    use crate::geometry::Point;
    use crate::graph::{GraphBuilder, NodeData, Positions};

    fn positions() -> Positions {
        [("a", 0.0, 0.0), ("b", 1.0, 1.0)]
            .into_iter()
            .map(|(n, x, y)| (n.to_string(), Point::new(x, y)))
            .collect()
    }

    #[test]
    fn test_labels_default_to_node_names() {
        let graph = GraphBuilder::undirected().with_edge("a", "b").build();
        let pos = positions();

        let layer = draw_labels(
            &DrawInput::graph(&graph).with_positions(&pos),
            &LabelStyle::default(),
        )
        .unwrap()
        .layer;

        assert_eq!(layer.kind(), LayerKind::Labels);
        assert_eq!(layer.mark_property("baseline"), Some(&json!("middle")));
        assert_eq!(layer.mark_property("size"), Some(&json!(15.0)));
        assert_eq!(layer.mark_property("fill"), Some(&json!("black")));
        let text = layer.encoding("text").and_then(Channel::field).unwrap();
        assert_eq!(text.field, "node");
    }

    #[test]
    fn test_font_size_column_never_has_legend() {
        let graph = GraphBuilder::undirected()
            .with_node(NodeData::new("a").with_attribute("degree", 3))
            .with_node(NodeData::new("b").with_attribute("degree", 1))
            .build();
        let pos = positions();
        let style = LabelStyle::default()
            .with_label("hello")
            .with_font_size(Style::<f64>::column("degree"));

        let layer = draw_labels(&DrawInput::graph(&graph).with_positions(&pos), &style)
            .unwrap()
            .layer;

        assert_eq!(layer.mark_property("text"), Some(&json!("hello")));
        let size = layer.encoding("size").and_then(Channel::field).unwrap();
        assert_eq!(size.legend, Some(serde_json::Value::Null));
    }

    #[test]
    fn test_labels_over_chart_are_added_on_top() {
        let graph = GraphBuilder::undirected().with_edge("a", "b").build();
        let pos = positions();
        let nodes = draw_nodes(
            &DrawInput::graph(&graph).with_positions(&pos),
            &NodeStyle::default(),
        )
        .unwrap()
        .layer;
        let chart = LayeredChart::new(vec![nodes], 500.0, 300.0);

        let drawn = draw_labels(&DrawInput::over_chart(&chart), &LabelStyle::default()).unwrap();
        let updated = drawn.chart.unwrap();

        assert_eq!(chart.kinds(), vec![LayerKind::Nodes]);
        assert_eq!(updated.kinds(), vec![LayerKind::Nodes, LayerKind::Labels]);

        let again = draw_labels(&DrawInput::over_chart(&updated), &LabelStyle::default())
            .unwrap()
            .chart
            .unwrap();
        assert_eq!(again.kinds(), vec![LayerKind::Nodes, LayerKind::Labels]);
    }
}
