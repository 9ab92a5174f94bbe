//! # Chart Module
//!
//! In-memory Vega-Lite charts.
//!
//! - **Chart**: one layer (records, mark, encodings) tagged with its
//!   [`LayerKind`]
//! - **LayeredChart**: ordered layers plus the chart size; replacing a layer
//!   returns a new chart
//! - **EncodingBuilder**: resolves styles into mark properties or encodings
//!
//! `to_vega_lite` produces a `serde_json::Value` carrying the v5 schema URL,
//! ready to embed or write to disk.

mod encoding;
mod spec;

pub use encoding::EncodingBuilder;
pub use spec::{Channel, Chart, FieldDef, LayerKind, LayeredChart, Mark, MarkType};
