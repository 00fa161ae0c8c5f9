use bmssp::graph::{Graph, MutableGraph};
use bmssp::{BmsspOutcome, Dijkstra, DirectedGraph, FastSSSP, ShortestPathAlgorithm, ShortestPathResult};
use colored::*;
use ordered_float::OrderedFloat;

type W = OrderedFloat<f64>;

fn main() -> bmssp::Result<()> {
    env_logger::init();

    // Create a simple directed graph
    let mut graph: DirectedGraph<W> = DirectedGraph::new();

    // Add vertices (0-4)
    for _ in 0..5 {
        graph.add_vertex();
    }

    graph.add_edge(0, 1, OrderedFloat(10.0));
    graph.add_edge(0, 2, OrderedFloat(5.0));
    graph.add_edge(1, 3, OrderedFloat(1.0));
    graph.add_edge(2, 1, OrderedFloat(3.0));
    graph.add_edge(2, 3, OrderedFloat(9.0));
    graph.add_edge(2, 4, OrderedFloat(2.0));
    graph.add_edge(3, 4, OrderedFloat(4.0));
    graph.add_edge(4, 0, OrderedFloat(7.0));
    graph.add_edge(4, 3, OrderedFloat(6.0));

    println!("{}", "--- BMSSP on a simple graph ---".bright_cyan().bold());
    println!("Graph has {} vertices and {} edges", graph.vertex_count(), graph.edge_count());

    let fast_sssp = FastSSSP::new();
    let outcome: BmsspOutcome<W> = fast_sssp.solve(&graph, &[0])?;
    println!(
        "Settled {:?} below boundary {}",
        outcome.settled,
        outcome.boundary.into_inner()
    );

    let result: ShortestPathResult<W> = fast_sssp.compute_shortest_paths(&graph, &[0])?;
    for v in 0..graph.vertex_count() {
        match result.distances[v] {
            Some(dist) => {
                let path = <FastSSSP as ShortestPathAlgorithm<W, DirectedGraph<W>>>::get_path(&fast_sssp, &result, v)
                    .unwrap_or_default();
                println!("  vertex {}: distance = {:.1}, path = {:?}", v, dist.into_inner(), path);
            }
            None => println!("  vertex {}: {}", v, "unreachable".bright_red()),
        }
    }

    // Bounded run: only vertices strictly closer than 6.0 are settled
    let bounded: BmsspOutcome<W> = FastSSSP::new().with_boundary(6.0).solve(&graph, &[0])?;
    println!(
        "\n{} boundary {} settles {:?}",
        "Bounded:".bright_yellow().bold(),
        bounded.boundary.into_inner(),
        bounded.settled
    );

    let baseline: ShortestPathResult<W> = Dijkstra::new().compute_shortest_paths(&graph, &[0])?;
    if baseline.distances == result.distances {
        println!("\n{}", "Distances match Dijkstra".bright_green().bold());
    } else {
        println!("\n{}", "Distances differ from Dijkstra".bright_red().bold());
    }

    Ok(())
}
