//! Integration tests for petgraph-vega using the library interface

use petgraph_vega::chart::{LayerKind, LayeredChart};
use petgraph_vega::common::ConfigBuilder;
use petgraph_vega::draw::{
    DrawInput, EdgeStyle, LabelStyle, NetworkOptions, NodeStyle, draw_edges, draw_labels,
    draw_network, draw_network_with_layout, draw_nodes,
};
use petgraph_vega::error::ChartError;
use petgraph_vega::geometry::Point;
use petgraph_vega::graph::{EdgeData, GraphBuilder, NodeData, Positions};
use petgraph_vega::layout::CircularLayout;
use petgraph_vega::style::{ColourStyle, Style};
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

fn positions(entries: &[(&str, f64, f64)]) -> Positions {
    entries
        .iter()
        .map(|&(name, x, y)| (name.to_string(), Point::new(x, y)))
        .collect()
}

fn row_counts(chart: &LayeredChart) -> Vec<usize> {
    chart.layers().iter().map(|layer| layer.data().len()).collect()
}

#[test]
fn test_directed_chain_end_to_end() {
    let graph = GraphBuilder::directed()
        .with_edge("A", "B")
        .with_edge("B", "C")
        .build();
    let pos = positions(&[("A", 0.0, 0.0), ("B", 1.0, 1.0), ("C", 2.0, 0.0)]);

    let chart = draw_network(&graph, Some(&pos), &NetworkOptions::default()).unwrap();
    let spec = chart.to_vega_lite();

    assert_eq!(
        chart.kinds(),
        vec![LayerKind::Edges, LayerKind::Arrows, LayerKind::Nodes]
    );
    assert_eq!(row_counts(&chart), vec![4, 4, 3]);
    assert_eq!(
        spec["$schema"],
        json!("https://vega.github.io/schema/vega-lite/v5.json")
    );
    assert_eq!(spec["width"], json!(500.0));
    assert_eq!(spec["height"], json!(300.0));
    assert_eq!(spec["layer"][0]["mark"]["type"], json!("line"));
    assert_eq!(spec["layer"][1]["encoding"]["detail"]["field"], json!("edge"));
    assert_eq!(spec["layer"][2]["mark"]["type"], json!("point"));
    assert_eq!(spec["layer"][2]["mark"]["fill"], json!("teal"));
}

#[test]
fn test_undirected_self_loop_with_four_points() {
    let graph = GraphBuilder::undirected().with_edge("n", "n").build();
    let pos = positions(&[("n", 0.0, 0.0)]);
    let options = NetworkOptions::builder()
        .with_edges(EdgeStyle::default().with_loops(0.05, 90.0, 4))
        .build()
        .unwrap();

    let chart = draw_network(&graph, Some(&pos), &options).unwrap();

    assert_eq!(chart.kinds(), vec![LayerKind::Edges, LayerKind::Nodes]);
    assert_eq!(row_counts(&chart), vec![4, 1]);

    let edges = chart.layer(LayerKind::Edges).unwrap().data().rows();
    let node = &chart.layer(LayerKind::Nodes).unwrap().data().rows()[0];
    assert_eq!(edges[0]["x"], node["x"]);
    assert_eq!(edges[0]["y"], node["y"]);
    assert_eq!(edges[3]["x"], node["x"]);
    assert_eq!(edges[3]["y"], node["y"]);
}

#[test]
fn test_order_increases_within_each_edge() {
    let graph = GraphBuilder::directed()
        .with_edge("a", "b")
        .with_edge("b", "b")
        .with_edge("b", "c")
        .build();
    let pos = positions(&[("a", 0.0, 0.0), ("b", 1.0, 0.0), ("c", 2.0, 1.0)]);
    let style = EdgeStyle::default().curved(Default::default());

    let drawn = draw_edges(&DrawInput::graph(&graph).with_positions(&pos), &style).unwrap();

    let mut last: Option<(Value, u64)> = None;
    for row in drawn.layer.data().rows() {
        let order = row["order"].as_u64().unwrap();
        match &last {
            Some((edge, previous)) if *edge == row["edge"] => assert_eq!(order, previous + 1),
            _ => assert_eq!(order, 0),
        }
        last = Some((row["edge"].clone(), order));
    }
}

#[test]
fn test_hidden_orphans_and_self_loops() {
    let graph = GraphBuilder::undirected()
        .with_edge("a", "b")
        .with_edge("c", "c")
        .with_node(NodeData::new("lonely"))
        .build();
    let options = NetworkOptions::builder()
        .with_show_orphans(false)
        .with_show_self_loops(false)
        .with_labels(LabelStyle::default())
        .build()
        .unwrap();

    let chart =
        draw_network_with_layout(&graph, None, &options, &CircularLayout::default()).unwrap();

    let names: Vec<&Value> = chart
        .layer(LayerKind::Labels)
        .unwrap()
        .data()
        .column("node")
        .collect();
    assert_eq!(names, vec![&json!("a"), &json!("b")]);
    assert_eq!(graph.node_count(), 4);
    assert_eq!(graph.edge_count(), 2);
}

#[test]
fn test_colour_map_requires_numbers() {
    let graph = GraphBuilder::directed()
        .with_edge_data("a", "b", EdgeData::new().with_attribute("kind", "road"))
        .with_edge_data("b", "c", EdgeData::new().with_attribute("kind", "rail"))
        .with_node(NodeData::new("a").with_attribute("load", 0.5))
        .build();
    let pos = positions(&[("a", 0.0, 0.0), ("b", 1.0, 0.0), ("c", 0.0, 1.0)]);

    let strings = NetworkOptions::builder()
        .with_edges(
            EdgeStyle::default().with_colour(ColourStyle::colour_map("kind", "category10")),
        )
        .build()
        .unwrap();
    assert!(matches!(
        draw_network(&graph, Some(&pos), &strings),
        Err(ChartError::NonNumericColourMap { .. })
    ));

    let numbers = NetworkOptions::builder()
        .with_nodes(NodeStyle::default().with_colour(ColourStyle::colour_map("load", "reds")))
        .build()
        .unwrap();
    let chart = draw_network(&graph, Some(&pos), &numbers).unwrap();
    let spec = chart.to_vega_lite();
    assert_eq!(
        spec["layer"][2]["encoding"]["fill"],
        json!({
            "field": "load",
            "type": "quantitative",
            "scale": {"scheme": "reds"},
            "legend": null
        })
    );
    // Nodes without the attribute carry null
    assert_eq!(chart.layers()[2].data().rows()[1]["load"], Value::Null);
}

#[test]
fn test_rescaled_positions_match_chart_aspect() {
    let graph = GraphBuilder::undirected()
        .with_edge("a", "b")
        .with_edge("b", "c")
        .build();
    let pos = positions(&[("a", -5.0, 2.0), ("b", 5.0, 2.0), ("c", 0.0, 12.0)]);
    let options = NetworkOptions::builder()
        .with_width(Some(600.0))
        .with_height(Some(200.0))
        .build()
        .unwrap();

    let chart = draw_network(&graph, Some(&pos), &options).unwrap();

    let nodes = chart.layer(LayerKind::Nodes).unwrap().data();
    let xs: Vec<f64> = nodes.column("x").filter_map(Value::as_f64).collect();
    let ys: Vec<f64> = nodes.column("y").filter_map(Value::as_f64).collect();
    let span = |values: &[f64]| {
        values.iter().cloned().fold(f64::MIN, f64::max)
            - values.iter().cloned().fold(f64::MAX, f64::min)
    };
    let (x_span, y_span) = (span(&xs), span(&ys));
    assert!((x_span / y_span - 600.0 / 200.0).abs() < 1e-9);
}

#[test]
fn test_redraw_over_chart_keeps_original() {
    let graph = GraphBuilder::directed()
        .with_edge("a", "b")
        .with_node(NodeData::new("a").with_attribute("size", 100))
        .with_node(NodeData::new("b").with_attribute("size", 900))
        .build();
    let pos = positions(&[("a", 0.0, 0.0), ("b", 1.0, 1.0)]);
    let chart = draw_network(&graph, Some(&pos), &NetworkOptions::default()).unwrap();
    let before = chart.clone();

    let nodes = draw_nodes(
        &DrawInput::over_chart(&chart),
        &NodeStyle::default().with_size(Style::<f64>::column("size")),
    )
    .unwrap();
    let labels = draw_labels(
        &DrawInput::over_chart(nodes.chart.as_ref().unwrap()),
        &LabelStyle::default(),
    )
    .unwrap();

    assert_eq!(chart, before);
    let updated = nodes.chart.unwrap();
    assert_eq!(updated.kinds(), chart.kinds());
    assert!(updated.layer(LayerKind::Nodes).unwrap().encoding("size").is_some());
    assert_eq!(
        labels.chart.unwrap().kinds(),
        vec![
            LayerKind::Edges,
            LayerKind::Arrows,
            LayerKind::Nodes,
            LayerKind::Labels
        ]
    );
}

#[test]
fn test_restyle_single_layer() {
    let graph = GraphBuilder::undirected().with_edge("a", "b").build();
    let pos = positions(&[("a", 0.0, 0.0), ("b", 1.0, 1.0)]);
    let edges = draw_edges(
        &DrawInput::graph(&graph).with_positions(&pos),
        &EdgeStyle::default(),
    )
    .unwrap()
    .layer;

    let restyled = draw_edges(
        &DrawInput::in_layer(&edges),
        &EdgeStyle::default().with_opacity(0.25),
    )
    .unwrap();

    assert!(restyled.chart.is_none());
    assert_eq!(restyled.layer.data(), edges.data());
    assert_eq!(restyled.layer.mark_property("opacity"), Some(&json!(0.25)));
}

#[test]
fn test_unknown_tooltip_column() {
    let graph = GraphBuilder::undirected().with_edge("a", "b").build();
    let pos = positions(&[("a", 0.0, 0.0), ("b", 1.0, 1.0)]);

    let err = draw_nodes(
        &DrawInput::graph(&graph).with_positions(&pos),
        &NodeStyle::default().with_tooltip(vec!["node".into(), "missing".into()]),
    )
    .unwrap_err();

    assert!(matches!(err, ChartError::UnknownColumn { column, layer, .. }
        if column == "missing" && layer == "nodes"));
}
