use std::collections::HashSet;
use std::fmt::Debug;
use num_traits::{Float, Zero};
use log::warn;

use crate::graph::Graph;
use crate::Result;

/// Result of a shortest path algorithm execution
#[derive(Debug, Clone)]
pub struct ShortestPathResult<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Distance from the nearest source to each vertex, `None` if unreached
    pub distances: Vec<Option<W>>,

    /// Predecessor vertices in the shortest path forest
    pub predecessors: Vec<Option<usize>>,

    /// Source vertices the search started from
    pub sources: Vec<usize>,
}

/// Trait for shortest path algorithms
pub trait ShortestPathAlgorithm<W, G>
where
    W: Float + Zero + Debug + Copy,
    G: Graph<W>,
{
    /// Compute shortest paths from a set of sources to all other vertices
    fn compute_shortest_paths(&self, graph: &G, sources: &[usize]) -> Result<ShortestPathResult<W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;

    /// Get the shortest path from its source to `target` as a sequence of vertices
    fn get_path(&self, result: &ShortestPathResult<W>, target: usize) -> Option<Vec<usize>> {
        if target >= result.predecessors.len() || result.distances[target].is_none() {
            return None;
        }

        let sources: HashSet<usize> = result.sources.iter().copied().collect();
        let mut visited = HashSet::new();
        let mut path = Vec::new();
        let mut current = target;

        while !sources.contains(&current) {
            if !visited.insert(current) {
                warn!("cycle in predecessor chain at vertex {}", current);
                return None;
            }

            path.push(current);
            current = result.predecessors[current]?;
        }

        path.push(current);
        path.reverse();
        Some(path)
    }
}
