use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum ChartError {
    #[error("Invalid value for '{parameter}': {message}")]
    #[diagnostic(
        code(petgraph_vega::invalid_style),
        help("Pass either a constant of the expected kind or the name of a record column")
    )]
    InvalidStyle { parameter: String, message: String },

    #[error("Column '{column}' used for '{parameter}' does not exist in the {layer} records")]
    #[diagnostic(
        code(petgraph_vega::unknown_column),
        help("Use a node or edge attribute, or a generated column such as x, y, node or pair")
    )]
    UnknownColumn {
        parameter: String,
        column: String,
        layer: String,
    },

    #[error("Column '{column}' used with colour scheme '{scheme}' is non-numeric")]
    #[diagnostic(
        code(petgraph_vega::non_numeric_colour_map),
        help("Colour maps need a column of numbers; use ColourStyle::FromColumn for colour strings")
    )]
    NonNumericColourMap { column: String, scheme: String },

    #[error("One of a graph, a chart or a layer is required to draw")]
    #[diagnostic(
        code(petgraph_vega::missing_source),
        help("Build the input with DrawInput::graph, DrawInput::over_chart or DrawInput::in_layer")
    )]
    MissingSource,

    #[error("The graph does not contain any nodes or edges")]
    #[diagnostic(
        code(petgraph_vega::empty_graph),
        help("Check the show_orphans and show_self_loops filters")
    )]
    EmptyGraph,

    #[error("Invalid chart size: {message}")]
    #[diagnostic(
        code(petgraph_vega::invalid_chart_size),
        help("Set at least one of width and height; the other follows the graph's aspect ratio")
    )]
    InvalidChartSize { message: String },

    #[error("No position given for node '{node}'")]
    #[diagnostic(
        code(petgraph_vega::missing_position),
        help("Positions must cover every node of the graph, or be omitted to compute a layout")
    )]
    MissingPosition { node: String },

    #[error("Position of node '{node}' is not finite: ({x}, {y})")]
    #[diagnostic(
        code(petgraph_vega::invalid_position),
        help("Coordinates must be finite numbers; NaN and infinities cannot be placed on a chart")
    )]
    InvalidPosition { node: String, x: f64, y: f64 },

    #[error("The chart has no {kind} layer")]
    #[diagnostic(
        code(petgraph_vega::layer_not_found),
        help("Draw the layer from the graph instead, or pass the layer directly")
    )]
    LayerNotFound { kind: String },

    #[error("Layer index {index} is out of bounds for a chart with {len} layers")]
    #[diagnostic(code(petgraph_vega::layer_index))]
    LayerIndexOutOfBounds { index: usize, len: usize },

    #[error("Configuration error: {message}")]
    #[diagnostic(
        code(petgraph_vega::config_error),
        help("Check your command arguments and configuration")
    )]
    ConfigurationError { message: String },

    #[error("Invalid graph input: {message}")]
    #[diagnostic(
        code(petgraph_vega::graph_input),
        help("Input must be node-link JSON with 'nodes' and 'links' arrays")
    )]
    GraphInputError { message: String },

    #[error("Failed to read file '{path}'")]
    #[diagnostic(
        code(petgraph_vega::io_error),
        help("Check if the file exists and you have read permissions")
    )]
    FileReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON serialization error")]
    #[diagnostic(
        code(petgraph_vega::json_error),
        help("This is likely an internal error - please report it")
    )]
    Json(#[from] serde_json::Error),

    #[error("IO error")]
    #[diagnostic(
        code(petgraph_vega::io_error),
        help("Check file permissions and disk space")
    )]
    Io(#[from] std::io::Error),
}

impl ChartError {
    pub(crate) fn invalid_style(parameter: &str, message: impl Into<String>) -> Self {
        ChartError::InvalidStyle {
            parameter: parameter.to_string(),
            message: message.into(),
        }
    }
}
