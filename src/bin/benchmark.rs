use std::time::{Duration, Instant};
use ordered_float::OrderedFloat;
use serde::Serialize;
use bmssp::graph::generators::generate_random_connected;
use bmssp::graph::{DirectedGraph, Graph};
use bmssp::{Dijkstra, FastSSSP, ShortestPathAlgorithm, ShortestPathResult};

type W = OrderedFloat<f64>;

/// One row of the report
#[derive(Debug, Serialize)]
struct BenchmarkRow {
    vertices: usize,
    edges: usize,
    reachable: usize,
    dijkstra_ms: f64,
    bmssp_ms: f64,
    speedup: f64,
    distances_agree: bool,
}

// Runs an algorithm from vertex 0 and times it
fn benchmark_algorithm<A>(
    algorithm: &A,
    graph: &DirectedGraph<W>,
) -> bmssp::Result<(ShortestPathResult<W>, Duration)>
where
    A: ShortestPathAlgorithm<W, DirectedGraph<W>>,
{
    let start = Instant::now();
    let result = algorithm.compute_shortest_paths(graph, &[0])?;
    Ok((result, start.elapsed()))
}

fn main() -> bmssp::Result<()> {
    env_logger::init();

    let mut json = false;
    let mut graph_sizes = Vec::new();
    for arg in std::env::args().skip(1) {
        if arg == "--json" {
            json = true;
        } else if let Ok(size) = arg.parse::<usize>() {
            graph_sizes.push(size);
        } else {
            eprintln!("usage: benchmark [--json] [SIZE...]");
            std::process::exit(2);
        }
    }
    if graph_sizes.is_empty() {
        graph_sizes = vec![1_000, 10_000, 50_000, 100_000];
    }

    // Edge factor: average number of edges per vertex
    let edge_factor = 4;

    let dijkstra = Dijkstra::new();
    let fast_sssp = FastSSSP::new();
    let mut rows = Vec::new();

    for &size in &graph_sizes {
        let graph = generate_random_connected(size, size * edge_factor, 1.0..100.0, false, 42);

        let (dijkstra_result, dijkstra_time) = benchmark_algorithm(&dijkstra, &graph)?;
        let (bmssp_result, bmssp_time) = benchmark_algorithm(&fast_sssp, &graph)?;

        let row = BenchmarkRow {
            vertices: graph.vertex_count(),
            edges: graph.edge_count(),
            reachable: dijkstra_result.distances.iter().filter(|d| d.is_some()).count(),
            dijkstra_ms: dijkstra_time.as_secs_f64() * 1000.0,
            bmssp_ms: bmssp_time.as_secs_f64() * 1000.0,
            speedup: dijkstra_time.as_secs_f64() / bmssp_time.as_secs_f64().max(f64::EPSILON),
            distances_agree: dijkstra_result.distances == bmssp_result.distances,
        };

        if !json {
            println!(
                "n={:<8} m={:<9} dijkstra {:>10.2} ms   bmssp {:>10.2} ms   {:.2}x   {}",
                row.vertices,
                row.edges,
                row.dijkstra_ms,
                row.bmssp_ms,
                row.speedup,
                if row.distances_agree { "ok" } else { "MISMATCH" }
            );
        }
        rows.push(row);
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
    }

    if rows.iter().any(|row| !row.distances_agree) {
        std::process::exit(1);
    }
    Ok(())
}
