use std::f64::consts::TAU;

use petgraph::EdgeType;

use super::Layout;
use crate::geometry::Point;
use crate::graph::{NetworkGraph, Positions};

/// Nodes evenly spaced on a circle, starting on the positive x axis
#[derive(Debug, Clone, Copy)]
pub struct CircularLayout {
    radius: f64,
    centre: Point,
}

impl Default for CircularLayout {
    fn default() -> Self {
        Self::new(1.0, Point::default())
    }
}

impl CircularLayout {
    pub fn new(radius: f64, centre: Point) -> Self {
        Self { radius, centre }
    }

    pub fn with_radius(radius: f64) -> Self {
        Self::new(radius, Point::default())
    }
}

impl Layout for CircularLayout {
    fn layout<Ty: EdgeType>(&self, graph: &NetworkGraph<Ty>) -> Positions {
        let n = graph.node_count();
        if n == 1 {
            return graph
                .node_weights()
                .map(|node| (node.name().to_string(), self.centre))
                .collect();
        }

        graph
            .node_weights()
            .enumerate()
            .map(|(i, node)| {
                let theta = TAU * i as f64 / n as f64;
                let offset = Point::new(theta.cos(), theta.sin()) * self.radius;
                (node.name().to_string(), self.centre + offset)
            })
            .collect()
    }
}
