use bmssp::graph::generators::{
    generate_barabasi_albert, generate_cycle, generate_grid, generate_integer_weighted,
    generate_path, generate_random_connected,
};
use bmssp::graph::{DirectedGraph, Graph, MutableGraph};
use bmssp::Dijkstra;
use ordered_float::OrderedFloat;

type W = OrderedFloat<f64>;

#[test]
fn test_add_and_remove_edges() {
    let mut graph: DirectedGraph<W> = DirectedGraph::new();
    assert_eq!(graph.add_vertex(), 0);
    assert_eq!(graph.add_vertex(), 1);

    assert!(graph.add_edge(0, 1, OrderedFloat(2.0)));
    assert!(!graph.add_edge(0, 5, OrderedFloat(1.0)));
    assert!(!graph.add_edge(1, 0, OrderedFloat(-1.0)));
    assert_eq!(graph.edge_count(), 1);

    // Re-adding replaces the weight
    assert!(graph.add_edge(0, 1, OrderedFloat(0.5)));
    assert_eq!(graph.edge_count(), 1);
    assert_eq!(graph.get_edge_weight(0, 1), Some(OrderedFloat(0.5)));

    assert!(graph.remove_edge(0, 1));
    assert!(!graph.remove_edge(0, 1));
    assert!(!graph.has_edge(0, 1));
    assert!(graph.validate_non_negative());
}

#[test]
fn test_from_edges_skips_invalid() {
    let graph: DirectedGraph<W> = DirectedGraph::from_edges(
        3,
        &[(0, 1, OrderedFloat(1.0)), (1, 9, OrderedFloat(1.0)), (2, 0, OrderedFloat(-3.0))],
    );
    assert_eq!(graph.vertex_count(), 3);
    assert_eq!(graph.edge_count(), 1);
    assert_eq!(graph.outgoing_edges(7).count(), 0);
}

#[test]
fn test_small_generators() {
    let path = generate_path(5, 1.0);
    assert_eq!(path.vertex_count(), 5);
    assert_eq!(path.edge_count(), 8);

    let cycle = generate_cycle(&[1.0, 2.0, 1.0, 5.0]);
    assert_eq!(cycle.edge_count(), 8);
    assert_eq!(cycle.get_edge_weight(0, 3), Some(OrderedFloat(5.0)));

    // 8-connected 3x3 grid
    let grid = generate_grid(3, 3);
    assert_eq!(grid.vertex_count(), 9);
    assert_eq!(grid.edge_count(), 40);
    assert_eq!(grid.get_edge_weight(0, 4), Some(OrderedFloat(1.4)));
}

#[test]
fn test_random_generators_are_connected_and_seeded() {
    let a = generate_random_connected(200, 800, 1.0..10.0, false, 3);
    let b = generate_random_connected(200, 800, 1.0..10.0, false, 3);
    assert_eq!(a.edge_count(), b.edge_count());
    for v in 0..200 {
        assert_eq!(a.outgoing_edges(v).collect::<Vec<_>>(), b.outgoing_edges(v).collect::<Vec<_>>());
    }

    let table = Dijkstra::new().run::<W, _>(&a, &[0]).unwrap();
    assert!((0..200).all(|v| table.is_reached(v)));

    let ints = generate_integer_weighted(100, 300, 4, true, 8);
    assert!(ints.validate_non_negative());
    for v in 0..100 {
        for (_, w) in ints.outgoing_edges(v) {
            assert_eq!(w.into_inner().fract(), 0.0);
            assert!(w <= OrderedFloat(4.0));
        }
    }
}

#[test]
fn test_barabasi_albert() {
    let graph = generate_barabasi_albert(100, 2, 1);
    assert_eq!(graph.vertex_count(), 100);
    assert!(graph.validate_non_negative());

    let table = Dijkstra::new().run::<W, _>(&graph, &[99]).unwrap();
    assert!((0..100).all(|v| table.is_reached(v)));
}
