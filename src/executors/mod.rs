//! Command executors that handle the actual logic for each command

pub mod draw;
pub mod records;

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use miette::{IntoDiagnostic, Result, WrapErr};
use petgraph::EdgeType;

use crate::cli::LayoutKind;
use crate::graph::{NetworkGraph, Positions};
use crate::layout::{CircularLayout, ForceLayout, Layout};

/// Trait for command executors
pub trait CommandExecutor {
    type Config;

    /// Execute the command with the given configuration
    fn execute(config: Self::Config) -> Result<()>;
}

/// Positions stored with the graph, or computed with the chosen layout
pub(crate) fn resolve_positions<Ty: EdgeType>(
    graph: &NetworkGraph<Ty>,
    stored: Option<Positions>,
    layout: LayoutKind,
) -> Positions {
    match (stored, layout) {
        (Some(positions), _) => positions,
        (None, LayoutKind::Force) => ForceLayout::default().layout(graph),
        (None, LayoutKind::Circular) => CircularLayout::default().layout(graph),
    }
}

/// Write `contents` to `output`, or stdout when no path is given
pub(crate) fn write_output(output: Option<&Path>, contents: &str) -> Result<()> {
    let mut writer: Box<dyn Write> = if let Some(path) = output {
        Box::new(BufWriter::new(
            File::create(path)
                .into_diagnostic()
                .wrap_err_with(|| format!("Failed to create output file '{}'", path.display()))?,
        ))
    } else {
        Box::new(io::stdout())
    };

    writeln!(writer, "{contents}")
        .into_diagnostic()
        .wrap_err("Failed to write output")?;
    writer
        .flush()
        .into_diagnostic()
        .wrap_err("Failed to write output")
}
