use petgraph::EdgeType;
use tracing::debug;

use super::{DrawInput, Drawn, restrict};
use crate::chart::{EncodingBuilder, LayerKind, MarkType};
use crate::constants::{columns, edges, vega};
use crate::error::ChartError;
use crate::projection::{EdgePathOptions, edge_table};
use crate::style::{ColourStyle, Style};

/// Curved edges: control points plus the curve threaded through them
#[derive(Debug, Clone, PartialEq)]
pub struct Curve {
    /// `(along, across)` offsets relative to the edge vector
    pub control_points: Vec<(f64, f64)>,
    pub interpolation: String,
}

impl Default for Curve {
    fn default() -> Self {
        Self {
            control_points: vec![edges::CONTROL_POINT],
            interpolation: edges::INTERPOLATION.to_string(),
        }
    }
}

impl Curve {
    pub fn with_control_points(mut self, control_points: Vec<(f64, f64)>) -> Self {
        self.control_points = control_points;
        self
    }

    pub fn with_interpolation(mut self, interpolation: impl Into<String>) -> Self {
        self.interpolation = interpolation.into();
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EdgeStyle {
    /// `source-target` pairs to keep
    pub subset: Option<Vec<String>>,
    pub width: Style<f64>,
    pub colour: ColourStyle,
    pub opacity: Style<f64>,
    pub tooltip: Option<Vec<String>>,
    pub legend: bool,
    pub loop_radius: f64,
    pub loop_angle: f64,
    pub loop_n_points: usize,
    /// `None` draws straight edges
    pub curve: Option<Curve>,
}

impl Default for EdgeStyle {
    fn default() -> Self {
        Self {
            subset: None,
            width: Style::Fixed(edges::WIDTH),
            colour: ColourStyle::fixed(edges::COLOUR),
            opacity: Style::Fixed(edges::OPACITY),
            tooltip: None,
            legend: false,
            loop_radius: edges::LOOP_RADIUS,
            loop_angle: edges::LOOP_ANGLE,
            loop_n_points: edges::LOOP_N_POINTS,
            curve: None,
        }
    }
}

impl EdgeStyle {
    pub fn with_subset(mut self, pairs: Vec<String>) -> Self {
        self.subset = Some(pairs);
        self
    }

    pub fn with_width(mut self, width: impl Into<Style<f64>>) -> Self {
        self.width = width.into();
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

    pub fn with_loops(mut self, radius: f64, angle: f64, n_points: usize) -> Self {
        self.loop_radius = radius;
        self.loop_angle = angle;
        self.loop_n_points = n_points;
        self
    }

    pub fn curved(mut self, curve: Curve) -> Self {
        self.curve = Some(curve);
        self
    }

    /// Geometry the edge (and arrow) records are traced with
    pub fn path_options(&self) -> EdgePathOptions {
        EdgePathOptions {
            loop_radius: self.loop_radius,
            loop_angle: self.loop_angle,
            loop_n_points: self.loop_n_points,
            control_points: self.curve.as_ref().map(|c| c.control_points.clone()),
        }
    }

    pub(crate) fn validate(&self) -> Result<(), ChartError> {
        self.width.validate_non_negative("width")?;
        self.opacity.validate_opacity("opacity")?;
        if !(self.loop_radius.is_finite() && self.loop_radius >= 0.0) {
            return Err(ChartError::invalid_style(
                "loop_radius",
                format!("expected a finite, non-negative number, got {}", self.loop_radius),
            ));
        }
        if !self.loop_angle.is_finite() {
            return Err(ChartError::invalid_style("loop_angle", "must be finite"));
        }
        if self.loop_n_points < 2 {
            return Err(ChartError::invalid_style(
                "loop_n_points",
                format!("a self-loop needs at least 2 points, got {}", self.loop_n_points),
            ));
        }
        if let Some(curve) = &self.curve {
            if !vega::INTERPOLATIONS.contains(&curve.interpolation.as_str()) {
                return Err(ChartError::invalid_style(
                    "interpolation",
                    format!("unknown curve '{}'", curve.interpolation),
                ));
            }
            if curve
                .control_points
                .iter()
                .any(|(along, across)| !(along.is_finite() && across.is_finite()))
            {
                return Err(ChartError::invalid_style(
                    "control_points",
                    "offsets must be finite",
                ));
            }
        }
        Ok(())
    }
}

/// Draw edges as line marks, one line per edge traced through its rows in
/// `order`.
pub fn draw_edges<Ty: EdgeType>(
    input: &DrawInput<'_, Ty>,
    style: &EdgeStyle,
) -> Result<Drawn, ChartError> {
    style.validate()?;

    let options = style.path_options();
    let mut resolved = input.resolve(&[LayerKind::Edges], |graph, positions| {
        edge_table(graph, positions, &options)
    })?;
    let table = restrict(resolved.take_table(), columns::PAIR, style.subset.as_deref());

    let mut builder = EncodingBuilder::new(LayerKind::Edges, table, style.legend);
    builder
        .style("width", &style.width, "strokeWidth", "strokeWidth")?
        .colour("colour", &style.colour, "color", "color")?
        .style("opacity", &style.opacity, "opacity", "opacity")?
        .tooltip(style.tooltip.as_deref())?
        .channel("detail", columns::EDGE)?
        .channel("order", columns::ORDER)?;
    if let Some(curve) = &style.curve {
        builder.mark_property("interpolate", curve.interpolation.clone());
    }

    debug!(rows = builder.data().len(), "drew edge layer");
    resolved.finish(builder.build(MarkType::Line))
}
