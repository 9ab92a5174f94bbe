use std::collections::HashMap;

use force_graph::{
    EdgeData as SimulationEdge, ForceGraph, NodeData as SimulationNode, SimulationParameters,
};
use petgraph::EdgeType;
use petgraph::graph::NodeIndex;
use petgraph::visit::EdgeRef;
use tracing::{debug, warn};

use super::{CircularLayout, Layout};
use crate::constants::layout::{ITERATIONS, SEED_RADIUS, TIME_STEP};
use crate::geometry::Point;
use crate::graph::{NetworkGraph, Positions};

/// Force-directed layout
///
/// Nodes start on a circle and are then moved by a fixed number of
/// simulation steps: nodes repel each other, edges act as springs.
/// Self-loops are ignored by the simulation. The result is deterministic
/// for a given graph.
#[derive(Debug, Clone, Copy)]
pub struct ForceLayout {
    pub iterations: usize,
    pub time_step: f32,
    pub charge: f32,
    pub spring: f32,
    pub max_force: f32,
    pub node_speed: f32,
    pub damping: f32,
}

impl Default for ForceLayout {
    fn default() -> Self {
        Self {
            iterations: ITERATIONS,
            time_step: TIME_STEP,
            charge: 150.0,
            spring: 0.05,
            max_force: 100.0,
            node_speed: 3000.0,
            damping: 0.9,
        }
    }
}

impl ForceLayout {
    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    fn parameters(&self) -> SimulationParameters {
        SimulationParameters {
            force_charge: self.charge,
            force_spring: self.spring,
            force_max: self.max_force,
            node_speed: self.node_speed,
            damping_factor: self.damping,
        }
    }
}

impl Layout for ForceLayout {
    fn layout<Ty: EdgeType>(&self, graph: &NetworkGraph<Ty>) -> Positions {
        let seed = CircularLayout::with_radius(SEED_RADIUS).layout(graph);
        if graph.node_count() < 2 {
            return seed;
        }

        let mut simulation: ForceGraph<usize> = ForceGraph::new(self.parameters());
        let mut indices = HashMap::with_capacity(graph.node_count());

        for idx in graph.node_indices() {
            let start = seed[graph[idx].name()];
            let sim_idx = simulation.add_node(SimulationNode {
                x: start.x as f32,
                y: start.y as f32,
                mass: 10.0,
                is_anchor: false,
                user_data: idx.index(),
            });
            indices.insert(idx, sim_idx);
        }

        for edge in graph.edge_references() {
            if edge.source() == edge.target() {
                continue;
            }
            simulation.add_edge(
                indices[&edge.source()],
                indices[&edge.target()],
                SimulationEdge::default(),
            );
        }

        for _ in 0..self.iterations {
            simulation.update(self.time_step);
        }

        let mut positions = Positions::new();
        simulation.visit_nodes(|node| {
            let name = graph[NodeIndex::new(node.data.user_data)].name();
            positions.insert(
                name.to_string(),
                Point::new(f64::from(node.x()), f64::from(node.y())),
            );
        });

        if positions.values().any(|p| !p.is_finite()) {
            warn!("force layout diverged, falling back to circular positions");
            return seed;
        }

        debug!(
            nodes = positions.len(),
            iterations = self.iterations,
            "computed force layout"
        );
        positions
    }
}
