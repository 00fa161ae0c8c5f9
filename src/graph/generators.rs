use crate::graph::{DirectedGraph, MutableGraph};
use ordered_float::OrderedFloat;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashSet;
use std::ops::Range;

/// Path `0 - 1 - ... - (n-1)` with every edge inserted in both directions
pub fn generate_path(n: usize, weight: f64) -> DirectedGraph<OrderedFloat<f64>> {
    let mut graph = DirectedGraph::with_capacity(n);
    for v in 1..n {
        graph.add_undirected_edge(v - 1, v, OrderedFloat(weight));
    }
    graph
}

/// Undirected cycle where edge `i` joins `i` and `(i + 1) % weights.len()`
pub fn generate_cycle(weights: &[f64]) -> DirectedGraph<OrderedFloat<f64>> {
    let n = weights.len();
    let mut graph = DirectedGraph::with_capacity(n);
    for (i, &weight) in weights.iter().enumerate() {
        graph.add_undirected_edge(i, (i + 1) % n, OrderedFloat(weight));
    }
    graph
}

/// Generates a `width` x `height` grid with 8-connectivity.
///
/// Cardinal moves cost 1.0 and diagonal moves cost 1.4; vertex `(x, y)` has
/// index `y * width + x`.
pub fn generate_grid(width: usize, height: usize) -> DirectedGraph<OrderedFloat<f64>> {
    let mut graph = DirectedGraph::with_capacity(width * height);

    let directions = [
        (0, -1, 1.0), (1, 0, 1.0), (0, 1, 1.0), (-1, 0, 1.0),
        (1, -1, 1.4), (1, 1, 1.4), (-1, 1, 1.4), (-1, -1, 1.4),
    ];

    for y in 0..height {
        for x in 0..width {
            let vertex = y * width + x;
            for (dx, dy, cost) in directions {
                let nx = x as i64 + dx;
                let ny = y as i64 + dy;
                if nx >= 0 && ny >= 0 && nx < width as i64 && ny < height as i64 {
                    let neighbor = ny as usize * width + nx as usize;
                    graph.add_edge(vertex, neighbor, OrderedFloat(cost));
                }
            }
        }
    }

    graph
}

/// Generates a connected random graph with `n` vertices and about `m` edges.
///
/// A random spanning tree rooted at vertex 0 is laid down first, then extra
/// edges are added between random distinct endpoints. Weights are drawn from
/// `weight_range`. When `undirected` is set every edge is inserted both ways.
pub fn generate_random_connected(
    n: usize,
    m: usize,
    weight_range: Range<f64>,
    undirected: bool,
    seed: u64,
) -> DirectedGraph<OrderedFloat<f64>> {
    build_connected(n, m, undirected, seed, |rng| {
        if weight_range.start < weight_range.end {
            rng.gen_range(weight_range.clone())
        } else {
            weight_range.start
        }
    })
}

/// Random connected graph whose weights are small integers in `0..=max_weight`.
///
/// Zero weights and repeated distances make this the stress case for tie
/// handling.
pub fn generate_integer_weighted(
    n: usize,
    m: usize,
    max_weight: u32,
    undirected: bool,
    seed: u64,
) -> DirectedGraph<OrderedFloat<f64>> {
    build_connected(n, m, undirected, seed, |rng| {
        rng.gen_range(0..=max_weight) as f64
    })
}

/// Generates a Barabási-Albert scale-free graph with n vertices and m edges per new vertex
pub fn generate_barabasi_albert(n: usize, m: usize, seed: u64) -> DirectedGraph<OrderedFloat<f64>> {
    let m = m.max(1);
    let n = n.max(m + 1);

    let mut graph = DirectedGraph::with_capacity(m);
    let mut rng = StdRng::seed_from_u64(seed);

    // Complete graph on the first m vertices
    for i in 0..m {
        for j in 0..m {
            if i != j {
                graph.add_edge(i, j, OrderedFloat(rng.gen_range(1.0..100.0)));
            }
        }
    }

    // Degree of each vertex for preferential attachment
    let mut degrees = vec![m.saturating_sub(1).max(1); m];
    let mut total_degree: usize = degrees.iter().sum();

    for i in m..n {
        graph.add_vertex();
        let mut targets = HashSet::new();

        while targets.len() < m {
            let mut pick = rng.gen_range(0..total_degree);
            let mut target = 0;
            while target < i && pick >= degrees[target] {
                pick -= degrees[target];
                target += 1;
            }

            if target < i && targets.insert(target) {
                let weight = OrderedFloat(rng.gen_range(1.0..100.0));
                graph.add_undirected_edge(i, target, weight);
                degrees[target] += 1;
                total_degree += 1;
            }
        }

        degrees.push(m);
        total_degree += m;
    }

    graph
}

fn build_connected<F>(
    n: usize,
    m: usize,
    undirected: bool,
    seed: u64,
    mut sample_weight: F,
) -> DirectedGraph<OrderedFloat<f64>>
where
    F: FnMut(&mut StdRng) -> f64,
{
    let mut rng = StdRng::seed_from_u64(seed);
    let mut graph = DirectedGraph::with_capacity(n);

    for v in 1..n {
        let parent = rng.gen_range(0..v);
        let weight = sample_weight(&mut rng);
        connect(&mut graph, parent, v, weight, undirected);
    }

    if n > 1 {
        for _ in 0..m.saturating_sub(n - 1) {
            let u = rng.gen_range(0..n);
            let v = rng.gen_range(0..n);
            if u != v {
                let weight = sample_weight(&mut rng);
                connect(&mut graph, u, v, weight, undirected);
            }
        }
    }

    graph
}

fn connect(graph: &mut DirectedGraph<OrderedFloat<f64>>, u: usize, v: usize, weight: f64, undirected: bool) {
    if undirected {
        graph.add_undirected_edge(u, v, OrderedFloat(weight));
    } else {
        graph.add_edge(u, v, OrderedFloat(weight));
    }
}
