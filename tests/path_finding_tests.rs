use bmssp::algorithm::dijkstra::Dijkstra;
use bmssp::algorithm::fast_sssp::FastSSSP;
use bmssp::algorithm::traits::{ShortestPathAlgorithm, ShortestPathResult};
use bmssp::graph::generators::{generate_grid, generate_path};
use bmssp::graph::DirectedGraph;
use bmssp::graph::{Graph, MutableGraph};
use ordered_float::OrderedFloat;
use std::collections::HashMap;

type W = OrderedFloat<f64>;

fn dijkstra_path(result: &ShortestPathResult<W>, target: usize) -> Option<Vec<usize>> {
    <Dijkstra as ShortestPathAlgorithm<W, DirectedGraph<W>>>::get_path(&Dijkstra::new(), result, target)
}

fn bmssp_path(result: &ShortestPathResult<W>, target: usize) -> Option<Vec<usize>> {
    <FastSSSP as ShortestPathAlgorithm<W, DirectedGraph<W>>>::get_path(&FastSSSP::new(), result, target)
}

// Checks that a path only uses existing edges and that its cost is the reported distance
fn assert_valid_path(graph: &DirectedGraph<W>, result: &ShortestPathResult<W>, path: &[usize]) {
    let target = path[path.len() - 1];
    let mut cost = OrderedFloat(0.0);
    for i in 1..path.len() {
        let weight = graph.get_edge_weight(path[i - 1], path[i]);
        assert!(weight.is_some(), "Path should only use existing edges");
        cost = cost + weight.unwrap();
    }
    assert_eq!(Some(cost), result.distances[target], "Path cost should equal the distance");
}

// Test that paths can be found in a simple grid
#[test]
fn test_path_finding_simple_grid() {
    let graph = generate_grid(10, 10);

    let source = 0; // Top-left corner (0,0)
    let target = 99; // Bottom-right corner (9,9)

    let dijkstra_result: ShortestPathResult<W> = Dijkstra::new().compute_shortest_paths(&graph, &[source]).unwrap();
    let fast_sssp_result: ShortestPathResult<W> = FastSSSP::new().compute_shortest_paths(&graph, &[source]).unwrap();

    assert!(dijkstra_result.distances[target].is_some(), "Dijkstra should find a path");
    assert_eq!(fast_sssp_result.distances, dijkstra_result.distances);

    let dijkstra_path = dijkstra_path(&dijkstra_result, target).expect("Dijkstra should construct a path");
    let fast_sssp_path = bmssp_path(&fast_sssp_result, target).expect("BMSSP should construct a path");

    assert_eq!(dijkstra_path[0], source, "Path should start at source");
    assert_eq!(fast_sssp_path[0], source, "Path should start at source");
    assert_eq!(fast_sssp_path[fast_sssp_path.len() - 1], target, "Path should end at target");

    assert_valid_path(&graph, &dijkstra_result, &dijkstra_path);
    assert_valid_path(&graph, &fast_sssp_result, &fast_sssp_path);
}

// Test path finding with obstacles
#[test]
fn test_path_finding_with_obstacles() {
    let mut graph = generate_grid(10, 10);

    // Create a wall of obstacles in the middle
    for y in 0..8 {
        let obstacle = y * 10 + 5; // Column 5

        let mut edges_to_remove = Vec::new();
        for v in 0..graph.vertex_count() {
            if graph.has_edge(v, obstacle) {
                edges_to_remove.push((v, obstacle));
            }
            if graph.has_edge(obstacle, v) {
                edges_to_remove.push((obstacle, v));
            }
        }

        for (from, to) in edges_to_remove {
            graph.remove_edge(from, to);
        }
    }

    let source = 0;
    let target = 99;

    let dijkstra_result: ShortestPathResult<W> = Dijkstra::new().compute_shortest_paths(&graph, &[source]).unwrap();
    let fast_sssp_result: ShortestPathResult<W> = FastSSSP::new().compute_shortest_paths(&graph, &[source]).unwrap();

    assert!(fast_sssp_result.distances[target].is_some(), "BMSSP should find a path around obstacles");
    assert_eq!(fast_sssp_result.distances, dijkstra_result.distances);
    assert!(fast_sssp_result.distances[5].is_none(), "Walled-off vertices stay unreached");

    let path = bmssp_path(&fast_sssp_result, target).expect("BMSSP should construct a path around obstacles");
    assert!(path.iter().all(|&v| v % 10 != 5 || v / 10 >= 8), "Path should avoid the wall");
    assert_valid_path(&graph, &fast_sssp_result, &path);
}

// Test the city pathfinding scenario
#[test]
fn test_city_pathfinding() {
    let width = 25;
    let height = 18;
    let mut graph = DirectedGraph::with_capacity(width * height);

    let mut buildings = vec![vec![false; width]; height];
    let building_positions = [
        (3, 3), (4, 3), (5, 3),
        (3, 4), (4, 4), (5, 4),
        (3, 5), (4, 5), (5, 5),
        (10, 10), (11, 10), (12, 10),
        (10, 11), (11, 11), (12, 11),
        (10, 12), (11, 12), (12, 12),
    ];
    for &(x, y) in &building_positions {
        buildings[y][x] = true;
    }

    // Connect walkable positions
    for y in 0..height {
        for x in 0..width {
            if buildings[y][x] {
                continue;
            }
            let vertex = y * width + x;
            let directions = [
                (0, -1, 1.0), (1, 0, 1.0), (0, 1, 1.0), (-1, 0, 1.0),
                (1, -1, 1.4), (1, 1, 1.4), (-1, 1, 1.4), (-1, -1, 1.4),
            ];

            for (dx, dy, cost) in directions {
                let nx = x as i32 + dx;
                let ny = y as i32 + dy;
                if nx >= 0 && ny >= 0 && nx < width as i32 && ny < height as i32 {
                    let (nx, ny) = (nx as usize, ny as usize);
                    if !buildings[ny][nx] {
                        graph.add_edge(vertex, ny * width + nx, OrderedFloat(cost));
                    }
                }
            }
        }
    }

    let locations = HashMap::from([
        ("home".to_string(), (0, 0)),
        ("work".to_string(), (20, 15)),
        ("gym".to_string(), (15, 8)),
        ("park".to_string(), (8, 12)),
    ]);

    for (from_name, &(fx, fy)) in &locations {
        let source = fy * width + fx;
        let result: ShortestPathResult<W> = FastSSSP::new().compute_shortest_paths(&graph, &[source]).unwrap();
        let expected: ShortestPathResult<W> = Dijkstra::new().compute_shortest_paths(&graph, &[source]).unwrap();
        assert_eq!(result.distances, expected.distances, "Distances from {}", from_name);

        for (to_name, &(tx, ty)) in &locations {
            if from_name == to_name {
                continue;
            }
            let target = ty * width + tx;

            assert!(result.distances[target].is_some(),
                   "Should find a path from {} to {}", from_name, to_name);

            let path = bmssp_path(&result, target);
            assert!(path.is_some(),
                   "Should construct a path from {} to {}", from_name, to_name);

            let path = path.unwrap();
            assert_eq!(path[0], source, "Path should start at source");
            assert_eq!(path[path.len() - 1], target, "Path should end at target");
            assert_valid_path(&graph, &result, &path);
        }
    }
}

#[test]
fn test_path_leads_to_nearest_source() {
    let graph = generate_path(9, 1.0);
    let result: ShortestPathResult<W> = FastSSSP::new().compute_shortest_paths(&graph, &[0, 8]).unwrap();

    assert_eq!(bmssp_path(&result, 2), Some(vec![0, 1, 2]));
    assert_eq!(bmssp_path(&result, 6), Some(vec![8, 7, 6]));
    assert_eq!(bmssp_path(&result, 8), Some(vec![8]));
    assert_eq!(result.sources, vec![0, 8]);
}

#[test]
fn test_no_path_to_unreached_vertex() {
    let mut graph: DirectedGraph<W> = DirectedGraph::with_capacity(3);
    graph.add_edge(0, 1, OrderedFloat(2.0));

    let result: ShortestPathResult<W> = FastSSSP::new().compute_shortest_paths(&graph, &[0]).unwrap();
    assert_eq!(bmssp_path(&result, 2), None);
    assert_eq!(bmssp_path(&result, 17), None);
}
