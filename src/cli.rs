use clap::{Parser, Subcommand};

use crate::common::{InputArgs, LayoutArgs};

#[derive(Parser)]
#[command(
    name = "petgraph-vega",
    about = "Turn node-link graphs into layered Vega-Lite charts",
    long_about = "petgraph-vega reads a node-link JSON graph, lays it out (or uses the positions \
                  stored in the file) and writes a Vega-Lite specification with layers for \
                  edges, arrowheads, nodes and labels. Styling flags accept either a constant \
                  or the name of a node or edge attribute.",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Draw a graph as a layered Vega-Lite chart
    ///
    /// Style values that name an attribute are mapped from that attribute,
    /// anything else is used as a constant.
    #[command(
        long_about = "Draw the graph in INPUT as a Vega-Lite chart. Edges are drawn first, then \
                      arrowheads for directed graphs, then nodes and finally labels. Positions \
                      are rescaled so both axes share one unit; give only --width or only \
                      --height to have the other follow the layout's aspect ratio."
    )]
    Draw {
        #[command(flatten)]
        input: InputArgs,

        #[command(flatten)]
        layout: LayoutArgs,

        /// Chart width in pixels (500 when neither size is given)
        #[arg(long, env = "PETGRAPH_VEGA_WIDTH")]
        width: Option<f64>,

        /// Chart height in pixels (300 when neither size is given)
        #[arg(long, env = "PETGRAPH_VEGA_HEIGHT")]
        height: Option<f64>,

        /// Leave out nodes without any edges
        #[arg(long, env = "PETGRAPH_VEGA_HIDE_ORPHANS")]
        hide_orphans: bool,

        /// Leave out edges from a node to itself
        #[arg(long, env = "PETGRAPH_VEGA_HIDE_SELF_LOOPS")]
        hide_self_loops: bool,

        /// Draw edges as curves through one control point
        #[arg(long, env = "PETGRAPH_VEGA_CURVED")]
        curved: bool,

        /// Node fill colour or node attribute
        #[arg(long, env = "PETGRAPH_VEGA_NODE_COLOUR")]
        node_colour: Option<String>,

        /// Colour scheme for a numeric --node-colour attribute
        #[arg(long, env = "PETGRAPH_VEGA_NODE_CMAP")]
        node_cmap: Option<String>,

        /// Node area or node attribute
        #[arg(long, env = "PETGRAPH_VEGA_NODE_SIZE")]
        node_size: Option<String>,

        /// Point shape or node attribute
        #[arg(long, env = "PETGRAPH_VEGA_NODE_SHAPE")]
        node_shape: Option<String>,

        /// Label text or node attribute; labels are drawn only when set
        #[arg(long, env = "PETGRAPH_VEGA_NODE_LABEL")]
        node_label: Option<String>,

        /// Edge colour or edge attribute
        #[arg(long, env = "PETGRAPH_VEGA_EDGE_COLOUR")]
        edge_colour: Option<String>,

        /// Colour scheme for a numeric --edge-colour attribute
        #[arg(long, env = "PETGRAPH_VEGA_EDGE_CMAP")]
        edge_cmap: Option<String>,

        /// Edge stroke width or edge attribute
        #[arg(long, env = "PETGRAPH_VEGA_EDGE_WIDTH")]
        edge_width: Option<String>,

        /// Indent the JSON output
        #[arg(long, env = "PETGRAPH_VEGA_PRETTY")]
        pretty: bool,
    },

    /// Write the records a layer would be drawn from
    ///
    /// Useful to check which columns are available for styling.
    #[command(
        long_about = "Project the graph in INPUT onto the flat records used by one chart layer \
                      and write them as a JSON array. Positions are rescaled to the chart's \
                      coordinate space as for draw. Edge records hold one row per point along \
                      each edge, arrow records two rows per edge and node records one row per \
                      node, each with the node's or edge's attributes."
    )]
    Records {
        #[command(flatten)]
        input: InputArgs,

        #[command(flatten)]
        layout: LayoutArgs,

        /// Chart width in pixels (500 when neither size is given)
        #[arg(long, env = "PETGRAPH_VEGA_WIDTH")]
        width: Option<f64>,

        /// Chart height in pixels (300 when neither size is given)
        #[arg(long, env = "PETGRAPH_VEGA_HEIGHT")]
        height: Option<f64>,

        /// Which records to write
        #[arg(
            long,
            value_enum,
            default_value = "nodes",
            env = "PETGRAPH_VEGA_RECORDS"
        )]
        kind: RecordKind,

        /// Trace edges through one control point
        #[arg(long, env = "PETGRAPH_VEGA_CURVED")]
        curved: bool,

        /// Indent the JSON output
        #[arg(long, env = "PETGRAPH_VEGA_PRETTY")]
        pretty: bool,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, clap::ValueEnum)]
pub enum LayoutKind {
    Force,
    Circular,
}

#[derive(Clone, Copy, Debug, PartialEq, clap::ValueEnum)]
pub enum RecordKind {
    Edges,
    Arrows,
    Nodes,
}
