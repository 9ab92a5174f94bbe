//! Projection of graphs onto record sets
//!
//! Edges become one row per point along their drawn path, arrows two rows
//! per edge, nodes one row each. Every row carries a copy of its node's or
//! edge's attributes.

use std::collections::HashMap;

use petgraph::EdgeType;
use petgraph::visit::EdgeRef;
use serde_json::Value;
use tracing::{debug, warn};

use crate::constants::{arrows, columns, edges};
use crate::error::ChartError;
use crate::geometry::{self, Point};
use crate::graph::{Attributes, NetworkGraph, Positions};
use crate::table::{Record, Table};

/// Columns generated for edge and arrow rows
pub const EDGE_COLUMNS: &[&str] = &[
    columns::EDGE,
    columns::ORDER,
    columns::SOURCE,
    columns::TARGET,
    columns::PAIR,
    columns::X,
    columns::Y,
];

/// Columns generated for node rows
pub const NODE_COLUMNS: &[&str] = &[columns::NODE, columns::X, columns::Y];

/// How edge paths are traced
#[derive(Debug, Clone, PartialEq)]
pub struct EdgePathOptions {
    pub loop_radius: f64,
    /// Direction of self-loops in degrees
    pub loop_angle: f64,
    /// Points per self-loop, both visits of the node included
    pub loop_n_points: usize,
    /// Edge-relative control points; `None` draws straight edges
    pub control_points: Option<Vec<(f64, f64)>>,
}

impl Default for EdgePathOptions {
    fn default() -> Self {
        Self {
            loop_radius: edges::LOOP_RADIUS,
            loop_angle: edges::LOOP_ANGLE,
            loop_n_points: edges::LOOP_N_POINTS,
            control_points: None,
        }
    }
}

impl EdgePathOptions {
    pub fn curved(mut self, control_points: Vec<(f64, f64)>) -> Self {
        self.control_points = Some(control_points);
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ArrowOptions {
    pub length: f64,
    pub length_is_relative: bool,
    /// Must match the options the edges were drawn with
    pub path: EdgePathOptions,
}

impl Default for ArrowOptions {
    fn default() -> Self {
        Self {
            length: arrows::LENGTH,
            length_is_relative: arrows::LENGTH_IS_RELATIVE,
            path: EdgePathOptions::default(),
        }
    }
}

struct EdgePath<'a> {
    id: String,
    source: &'a str,
    target: &'a str,
    points: Vec<Point>,
    attributes: &'a Attributes,
}

impl EdgePath<'_> {
    fn pair(&self) -> String {
        format!("{}-{}", self.source, self.target)
    }

    fn record(&self, order: usize, point: Point) -> Record {
        let mut row = Record::new();
        row.insert(columns::EDGE.into(), Value::from(self.id.clone()));
        row.insert(columns::ORDER.into(), Value::from(order as u64));
        row.insert(columns::SOURCE.into(), Value::from(self.source));
        row.insert(columns::TARGET.into(), Value::from(self.target));
        row.insert(columns::PAIR.into(), Value::from(self.pair()));
        row.insert(columns::X.into(), Value::from(point.x));
        row.insert(columns::Y.into(), Value::from(point.y));
        copy_attributes(&mut row, self.attributes, EDGE_COLUMNS);
        row
    }
}

fn position(positions: &Positions, name: &str) -> Result<Point, ChartError> {
    positions
        .get(name)
        .copied()
        .ok_or_else(|| ChartError::MissingPosition {
            node: name.to_string(),
        })
}

fn copy_attributes(row: &mut Record, attributes: &Attributes, reserved: &[&str]) {
    for (key, value) in attributes {
        if reserved.contains(&key.as_str()) {
            warn!(attribute = %key, "attribute shadowed by a generated column and dropped");
            continue;
        }
        row.insert(key.clone(), value.clone());
    }
}

fn edge_paths<'a, Ty: EdgeType>(
    graph: &'a NetworkGraph<Ty>,
    positions: &Positions,
    options: &EdgePathOptions,
) -> Result<Vec<EdgePath<'a>>, ChartError> {
    let mut parallel: HashMap<(usize, usize), usize> = HashMap::new();
    let mut paths = Vec::with_capacity(graph.edge_count());

    for edge in graph.edge_references() {
        let source = graph[edge.source()].name();
        let target = graph[edge.target()].name();
        let from = position(positions, source)?;
        let to = position(positions, target)?;

        let seen = parallel
            .entry((edge.source().index(), edge.target().index()))
            .or_insert(0);
        let id = if *seen == 0 {
            format!("({source}, {target})")
        } else {
            format!("({source}, {target})#{seen}")
        };
        *seen += 1;

        let points = if edge.source() == edge.target() {
            geometry::self_loop_ring(
                from,
                options.loop_radius,
                options.loop_angle,
                options.loop_n_points,
            )?
        } else {
            match &options.control_points {
                Some(offsets) => {
                    let mut points = Vec::with_capacity(offsets.len() + 2);
                    points.push(from);
                    points.extend(geometry::control_points(from, to, offsets));
                    points.push(to);
                    points
                }
                None => vec![from, to],
            }
        };

        paths.push(EdgePath {
            id,
            source,
            target,
            points,
            attributes: edge.weight().attributes(),
        });
    }

    Ok(paths)
}

/// One row per point along every edge's path
pub fn edge_table<Ty: EdgeType>(
    graph: &NetworkGraph<Ty>,
    positions: &Positions,
    options: &EdgePathOptions,
) -> Result<Table, ChartError> {
    let rows: Vec<Record> = edge_paths(graph, positions, options)?
        .iter()
        .flat_map(|path| {
            path.points
                .iter()
                .enumerate()
                .map(move |(order, &point)| path.record(order, point))
        })
        .collect();

    debug!(edges = graph.edge_count(), rows = rows.len(), "projected edges");
    Ok(Table::from_rows(EDGE_COLUMNS, rows))
}

/// Two rows per edge: start and end of its arrowhead segment
pub fn arrow_table<Ty: EdgeType>(
    graph: &NetworkGraph<Ty>,
    positions: &Positions,
    options: &ArrowOptions,
) -> Result<Table, ChartError> {
    let rows: Vec<Record> = edge_paths(graph, positions, &options.path)?
        .iter()
        .flat_map(|path| {
            let segment =
                geometry::arrow_segment(&path.points, options.length, options.length_is_relative);
            segment
                .into_iter()
                .enumerate()
                .map(move |(order, point)| path.record(order, point))
        })
        .collect();

    debug!(edges = graph.edge_count(), rows = rows.len(), "projected arrows");
    Ok(Table::from_rows(EDGE_COLUMNS, rows))
}

/// One row per node
pub fn node_table<Ty: EdgeType>(
    graph: &NetworkGraph<Ty>,
    positions: &Positions,
) -> Result<Table, ChartError> {
    let rows = graph
        .node_weights()
        .map(|node| {
            let point = position(positions, node.name())?;
            let mut row = Record::new();
            row.insert(columns::NODE.into(), Value::from(node.name()));
            row.insert(columns::X.into(), Value::from(point.x));
            row.insert(columns::Y.into(), Value::from(point.y));
            copy_attributes(&mut row, node.attributes(), NODE_COLUMNS);
            Ok(row)
        })
        .collect::<Result<Vec<_>, ChartError>>()?;

    debug!(nodes = rows.len(), "projected nodes");
    Ok(Table::from_rows(NODE_COLUMNS, rows))
}
