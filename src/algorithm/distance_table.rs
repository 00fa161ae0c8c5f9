use std::fmt::Debug;
use num_traits::{Float, Zero};

/// Tentative distances and predecessors for one run.
///
/// A single table is created per top-level run and passed by `&mut` through
/// every recursive call, pivot search and base case. Distances start at
/// +infinity and only ever decrease.
#[derive(Debug, Clone)]
pub struct DistanceTable<W>
where
    W: Float + Zero + Debug + Copy + Ord,
{
    distances: Vec<W>,
    predecessors: Vec<Option<usize>>,
}

impl<W> DistanceTable<W>
where
    W: Float + Zero + Debug + Copy + Ord,
{
    /// Creates a table for `vertex_count` vertices, all unreached
    pub fn new(vertex_count: usize) -> Self {
        DistanceTable {
            distances: vec![W::infinity(); vertex_count],
            predecessors: vec![None; vertex_count],
        }
    }

    /// Creates a table with every in-range source at distance zero
    pub fn with_sources(vertex_count: usize, sources: &[usize]) -> Self {
        let mut table = Self::new(vertex_count);
        for &source in sources {
            if source < vertex_count {
                table.distances[source] = W::zero();
            }
        }
        table
    }

    pub fn len(&self) -> usize {
        self.distances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }

    /// Current tentative distance (+infinity when unreached)
    #[inline]
    pub fn distance(&self, vertex: usize) -> W {
        self.distances[vertex]
    }

    #[inline]
    pub fn predecessor(&self, vertex: usize) -> Option<usize> {
        self.predecessors[vertex]
    }

    /// True once the vertex has a finite distance
    pub fn is_reached(&self, vertex: usize) -> bool {
        self.distances[vertex] < W::infinity()
    }

    /// Offers `candidate` as the distance of `to` through the edge `from -> to`.
    ///
    /// The write happens when `candidate < bound` and `candidate` is no larger
    /// than the current distance; equal candidates are accepted so tied
    /// vertices are rediscovered. The predecessor only changes on a strict
    /// improvement. Returns true if the write happened.
    pub fn relax(&mut self, from: usize, to: usize, candidate: W, bound: W) -> bool {
        if candidate >= bound {
            return false;
        }

        let current = self.distances[to];
        if candidate > current {
            return false;
        }

        if candidate < current {
            self.predecessors[to] = Some(from);
        }
        self.distances[to] = candidate;
        true
    }

    pub fn distances(&self) -> &[W] {
        &self.distances
    }

    pub fn predecessors(&self) -> &[Option<usize>] {
        &self.predecessors
    }

    /// Distances with unreached vertices mapped to `None`
    pub fn to_options(&self) -> Vec<Option<W>> {
        self.distances
            .iter()
            .map(|&d| if d < W::infinity() { Some(d) } else { None })
            .collect()
    }

    pub fn into_parts(self) -> (Vec<W>, Vec<Option<usize>>) {
        (self.distances, self.predecessors)
    }
}
