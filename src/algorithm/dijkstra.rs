use std::fmt::Debug;
use num_traits::{Float, NumCast, Zero};
use log::debug;

use crate::algorithm::{DistanceTable, ShortestPathAlgorithm, ShortestPathResult};
use crate::data_structures::MinQueue;
use crate::graph::Graph;
use crate::{Error, Result};

/// Classic Dijkstra's algorithm, used as the baseline.
///
/// Runs from any number of sources and optionally stops at an exclusive
/// distance boundary: no distance at or above the boundary is ever written.
#[derive(Debug, Default, Clone)]
pub struct Dijkstra {
    boundary: Option<f64>,
}

impl Dijkstra {
    /// Creates a new unbounded Dijkstra instance
    pub fn new() -> Self {
        Dijkstra { boundary: None }
    }

    /// Only settle vertices at distance strictly below `boundary`
    pub fn with_boundary(boundary: f64) -> Self {
        Dijkstra {
            boundary: Some(boundary),
        }
    }

    pub fn boundary(&self) -> Option<f64> {
        self.boundary
    }

    /// Runs the search and returns the raw distance table
    pub fn run<W, G>(&self, graph: &G, sources: &[usize]) -> Result<DistanceTable<W>>
    where
        W: Float + Zero + Debug + Copy + Ord,
        G: Graph<W>,
    {
        if sources.is_empty() {
            return Err(Error::InvalidInput("source list is empty".to_string()));
        }
        let n = graph.vertex_count();
        if let Some(&source) = sources.iter().find(|&&s| s >= n) {
            return Err(Error::InvalidVertex(source));
        }

        let bound = match self.boundary {
            Some(b) => <W as NumCast>::from(b).unwrap_or_else(W::infinity),
            None => W::infinity(),
        };

        let mut queue = MinQueue::with_capacity(n);
        let mut table = if W::zero() < bound {
            for &source in sources {
                queue.push(source, W::zero());
            }
            DistanceTable::with_sources(n, sources)
        } else {
            DistanceTable::new(n)
        };

        let mut settled = 0usize;
        while let Some((u, dist_u)) = queue.pop() {
            // Stale entry
            if dist_u > table.distance(u) {
                continue;
            }
            settled += 1;

            for (v, weight) in graph.outgoing_edges(u) {
                let candidate = dist_u + weight;
                if candidate < table.distance(v) && table.relax(u, v, candidate, bound) {
                    queue.push(v, candidate);
                }
            }
        }

        debug!("dijkstra settled {} vertices from {} sources", settled, sources.len());
        Ok(table)
    }
}

impl<W, G> ShortestPathAlgorithm<W, G> for Dijkstra
where
    W: Float + Zero + Debug + Copy + Ord,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn compute_shortest_paths(&self, graph: &G, sources: &[usize]) -> Result<ShortestPathResult<W>> {
        let table = self.run::<W, G>(graph, sources)?;
        let distances = table.to_options();
        let (_, predecessors) = table.into_parts();

        Ok(ShortestPathResult {
            distances,
            predecessors,
            sources: sources.to_vec(),
        })
    }
}
