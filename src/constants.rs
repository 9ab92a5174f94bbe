//! Default values for drawing
//!
//! Every style and option struct falls back to these when a value is not
//! given explicitly.

/// Vega-Lite output
pub mod vega {
    pub const SCHEMA: &str = "https://vega.github.io/schema/vega-lite/v5.json";

    /// Curve names accepted by the `interpolate` mark property
    pub const INTERPOLATIONS: &[&str] = &[
        "basis",
        "basis-open",
        "basis-closed",
        "bundle",
        "cardinal",
        "cardinal-open",
        "cardinal-closed",
        "catmull-rom",
        "linear",
        "linear-closed",
        "monotone",
        "natural",
        "step",
        "step-before",
        "step-after",
    ];
}

/// Edge and self-loop geometry
pub mod edges {
    pub const WIDTH: f64 = 1.0;
    pub const COLOUR: &str = "grey";
    pub const OPACITY: f64 = 1.0;
    pub const LOOP_RADIUS: f64 = 0.05;
    /// Degrees anticlockwise from the positive x axis; 90 draws loops above the node
    pub const LOOP_ANGLE: f64 = 90.0;
    pub const LOOP_N_POINTS: usize = 30;
    /// One control point halfway along the edge, a tenth of its length to the left
    pub const CONTROL_POINT: (f64, f64) = (0.5, 0.1);
    pub const INTERPOLATION: &str = "basis";
}

pub mod arrows {
    pub const WIDTH: f64 = 2.0;
    pub const LENGTH: f64 = 0.1;
    pub const LENGTH_IS_RELATIVE: bool = true;
    pub const COLOUR: &str = "black";
    pub const OPACITY: f64 = 1.0;
}

pub mod nodes {
    pub const SIZE: f64 = 400.0;
    pub const OUTLINE_WIDTH: f64 = 1.0;
    pub const SHAPE: &str = "circle";
    pub const COLOUR: &str = "teal";
    pub const OPACITY: f64 = 1.0;
}

pub mod labels {
    pub const FONT_SIZE: f64 = 15.0;
    pub const FONT_COLOUR: &str = "black";
}

pub mod chart {
    pub const WIDTH: f64 = 500.0;
    pub const HEIGHT: f64 = 300.0;
}

/// Force-directed layout tuning
pub mod layout {
    pub const ITERATIONS: usize = 300;
    pub const TIME_STEP: f32 = 0.035;
    pub const SEED_RADIUS: f64 = 100.0;
}

/// Column names generated by the record projectors
pub mod columns {
    pub const EDGE: &str = "edge";
    pub const ORDER: &str = "order";
    pub const SOURCE: &str = "source";
    pub const TARGET: &str = "target";
    pub const PAIR: &str = "pair";
    pub const NODE: &str = "node";
    pub const X: &str = "x";
    pub const Y: &str = "y";
}

/// Environment variables read by the CLI
pub mod env {
    pub const LOG_FILTER: &str = "PETGRAPH_VEGA_LOG";
    pub const DEFAULT_LOG_FILTER: &str = "warn";
}
