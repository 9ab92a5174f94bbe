//! Records command executor

use console::style;
use miette::{IntoDiagnostic, Result, WrapErr};
use petgraph::EdgeType;

use crate::cli::RecordKind;
use crate::config::RecordsConfig;
use crate::constants::edges;
use crate::error::ChartError;
use crate::executors::{CommandExecutor, resolve_positions, write_output};
use crate::graph::{LoadedGraph, NetworkGraph, NodeLinkGraph, Positions, load_node_link};
use crate::layout::rescale;
use crate::projection::{ArrowOptions, EdgePathOptions, arrow_table, edge_table, node_table};
use crate::table::Table;

pub struct RecordsExecutor;

impl CommandExecutor for RecordsExecutor {
    type Config = RecordsConfig;

    fn execute(config: Self::Config) -> Result<()> {
        let NodeLinkGraph { graph, positions } = load_node_link(&config.input)
            .wrap_err_with(|| format!("Failed to load graph from '{}'", config.input.display()))?;

        let table = match graph {
            LoadedGraph::Directed(g) => project(&g, positions, &config),
            LoadedGraph::Undirected(g) => project(&g, positions, &config),
        }
        .wrap_err("Failed to project graph")?;

        let values = table.to_values();
        let json = if config.pretty {
            serde_json::to_string_pretty(&values)
        } else {
            serde_json::to_string(&values)
        }
        .into_diagnostic()
        .wrap_err("Failed to serialise records")?;
        write_output(config.output.as_deref(), &json)?;

        if let Some(output_path) = &config.output {
            eprintln!(
                "{} {} {:?} records written to {}",
                style("✓").green(),
                table.len(),
                config.kind,
                style(output_path.display()).bold()
            );
        }

        Ok(())
    }
}

/// The record set of one layer kind, in the chart's coordinate space
pub fn project<Ty: EdgeType>(
    graph: &NetworkGraph<Ty>,
    stored: Option<Positions>,
    config: &RecordsConfig,
) -> Result<Table, ChartError> {
    let positions = resolve_positions(graph, stored, config.layout);
    let (positions, _) = rescale(&positions, config.width, config.height)?;
    let mut path = EdgePathOptions::default();
    if config.curved {
        path = path.curved(vec![edges::CONTROL_POINT]);
    }

    match config.kind {
        RecordKind::Edges => edge_table(graph, &positions, &path),
        RecordKind::Arrows => arrow_table(
            graph,
            &positions,
            &ArrowOptions {
                path,
                ..ArrowOptions::default()
            },
        ),
        RecordKind::Nodes => node_table(graph, &positions),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::LayoutKind;
    use crate::common::ConfigBuilder;
    use crate::chart::LayerKind;
    use crate::draw::{NetworkOptions, draw_network};
    use crate::geometry::Point;
    use crate::graph::GraphBuilder;

    fn config(kind: RecordKind, curved: bool) -> RecordsConfig {
        RecordsConfig::builder()
            .with_input("unused.json".into())
            .with_output(None)
            .with_layout(LayoutKind::Circular)
            .with_kind(kind)
            .with_curved(curved)
            .build()
            .unwrap()
    }

    #[test]
    fn test_project_each_kind() {
        let graph = GraphBuilder::directed()
            .with_edge("a", "b")
            .with_edge("b", "c")
            .build();

        let edges = project(&graph, None, &config(RecordKind::Edges, false)).unwrap();
        let curved = project(&graph, None, &config(RecordKind::Edges, true)).unwrap();
        let arrows = project(&graph, None, &config(RecordKind::Arrows, true)).unwrap();
        let nodes = project(&graph, None, &config(RecordKind::Nodes, false)).unwrap();

        assert_eq!(edges.len(), 4);
        assert_eq!(curved.len(), 6);
        assert_eq!(arrows.len(), 4);
        assert_eq!(nodes.len(), 3);
    }

    #[test]
    fn test_records_share_the_drawn_coordinate_space() {
        let graph = GraphBuilder::directed()
            .with_edge("a", "b")
            .with_edge("b", "b")
            .build();
        let stored: Positions = [
            ("a".to_string(), Point::new(-40.0, 12.0)),
            ("b".to_string(), Point::new(38.0, -25.0)),
        ]
        .into_iter()
        .collect();

        let nodes =
            project(&graph, Some(stored.clone()), &config(RecordKind::Nodes, false)).unwrap();
        let chart = draw_network(&graph, Some(&stored), &NetworkOptions::default()).unwrap();
        let drawn = chart.layer(LayerKind::Nodes).unwrap().data();

        assert_eq!(nodes.rows(), drawn.rows());
        let xs: Vec<f64> = nodes.column("x").filter_map(|v| v.as_f64()).collect();
        assert!(xs.iter().all(|x| (0.0..=500.0 / 300.0).contains(x)));
    }
}
