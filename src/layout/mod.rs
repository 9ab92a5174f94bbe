//! # Layout Module
//!
//! Node placement is pluggable through the [`Layout`] trait. Two providers
//! ship with the crate:
//!
//! - **ForceLayout**: force-directed simulation (the default)
//! - **CircularLayout**: nodes evenly spaced on a circle, in graph order
//!
//! [`rescale`] then maps any positions onto the chart's coordinate space so
//! that both axes share one unit.

mod circular;
mod force;
mod scale;

pub use circular::CircularLayout;
pub use force::ForceLayout;
pub use scale::{ChartSize, rescale};

use petgraph::EdgeType;

use crate::graph::{NetworkGraph, Positions};

/// Computes a position for every node of a graph
pub trait Layout {
    fn layout<Ty: EdgeType>(&self, graph: &NetworkGraph<Ty>) -> Positions;
}

/// Layout used when the caller gives no positions
pub fn default_layout<Ty: EdgeType>(graph: &NetworkGraph<Ty>) -> Positions {
    ForceLayout::default().layout(graph)
}
