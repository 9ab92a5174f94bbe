//! # Configuration Module
//!
//! Configuration structures for the petgraph-vega commands, each with a
//! builder whose `with_*` setters are validated by
//! [`ConfigBuilder::build`](crate::common::ConfigBuilder::build).
//!
//! ## Command Configurations
//!
//! - **DrawConfig**: input, layout, chart size, filters and the raw style
//!   values for the `draw` command
//! - **RecordsConfig**: input, layout, chart size and record kind for the
//!   `records` command
//!
//! ## Example
//!
//! ```
//! use petgraph_vega::cli::{LayoutKind, RecordKind};
//! use petgraph_vega::common::ConfigBuilder;
//! use petgraph_vega::config::RecordsConfig;
//!
//! let config = RecordsConfig::builder()
//!     .with_input("graph.json".into())
//!     .with_output(None)
//!     .with_layout(LayoutKind::Circular)
//!     .with_kind(RecordKind::Edges)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.kind, RecordKind::Edges);
//! ```

pub mod draw;
pub mod records;

pub use draw::DrawConfig;
pub use records::RecordsConfig;

use crate::constants::chart;
use crate::error::ChartError;

fn check_size(name: &str, value: Option<f64>) -> Result<(), ChartError> {
    match value {
        Some(v) if !(v.is_finite() && v > 0.0) => Err(ChartError::InvalidChartSize {
            message: format!("{name} must be a positive number, got {v}"),
        }),
        _ => Ok(()),
    }
}

/// Validated chart size; neither side given means the default chart
pub(crate) fn chart_size(
    width: Option<f64>,
    height: Option<f64>,
) -> Result<(Option<f64>, Option<f64>), ChartError> {
    check_size("width", width)?;
    check_size("height", height)?;

    Ok(match (width, height) {
        (None, None) => (Some(chart::WIDTH), Some(chart::HEIGHT)),
        sizes => sizes,
    })
}
