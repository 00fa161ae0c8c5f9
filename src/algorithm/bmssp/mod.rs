//! Bounded Multi-Source Shortest Path (BMSSP) recursion.
//!
//! A call at level `l` with boundary `B` and sources `S` finds pivots among
//! `S`, feeds them through a [`BatchHeap`] in ascending distance batches and
//! recurses one level down on each batch. It returns a boundary `B' <= B`
//! and every vertex whose shortest distance is now final and below `B'`.

mod base_case;
mod pivots;

use std::cmp;
use std::collections::BTreeSet;
use std::fmt::Debug;
use std::marker::PhantomData;
use num_traits::{Float, Zero};
use log::{debug, trace};

use crate::algorithm::DistanceTable;
use crate::config::{block_size, derive_parameters, work_cap};
use crate::data_structures::BatchHeap;
use crate::graph::Graph;
use crate::{Error, Result};

pub use base_case::base_case;
pub use pivots::{find_pivots, PivotSelection};

/// Result from a BMSSP call
#[derive(Debug, Clone, PartialEq)]
pub struct BmsspResult<W> {
    /// Finalized boundary, never above the boundary of the call
    pub new_bound: W,

    /// Settled vertices, ascending and without duplicates
    pub vertices: Vec<usize>,
}

/// Where a successful relaxation out of a finished sub-call goes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relaxation {
    /// At or above the pulled boundary: back into the batch heap
    Requeue,
    /// Between the sub-call boundary (inclusive) and the pulled boundary
    Prepend,
    /// Below the sub-call boundary: already covered by the sub-call
    Discard,
}

/// Buckets a relaxed distance against the boundary of the pulled batch and
/// the boundary the sub-call returned.
pub fn classify_relaxation<W: PartialOrd>(candidate: W, pulled_bound: W, sub_bound: W) -> Relaxation {
    if candidate >= pulled_bound {
        Relaxation::Requeue
    } else if candidate >= sub_bound {
        Relaxation::Prepend
    } else {
        Relaxation::Discard
    }
}

/// The recursive solver over one borrowed graph
#[derive(Debug)]
pub struct Bmssp<'g, W, G>
where
    W: Float + Zero + Debug + Copy + Ord,
    G: Graph<W>,
{
    graph: &'g G,

    /// Pivot depth and work-cap multiplier
    k: usize,

    /// Level scaling: block size and work cap grow by `2^t` per level
    t: usize,

    _weight_marker: PhantomData<W>,
}

impl<'g, W, G> Bmssp<'g, W, G>
where
    W: Float + Zero + Debug + Copy + Ord,
    G: Graph<W>,
{
    /// Creates a solver with `k` and `t` derived from the vertex count
    pub fn new(graph: &'g G) -> Self {
        let (k, t) = derive_parameters(graph.vertex_count());
        Self::with_params(graph, k, t)
    }

    /// Creates a solver with explicit parameters, each clamped to at least 1
    pub fn with_params(graph: &'g G, k: usize, t: usize) -> Self {
        Bmssp {
            graph,
            k: k.max(1),
            t: t.max(1),
            _weight_marker: PhantomData,
        }
    }

    pub fn k(&self) -> usize {
        self.k
    }

    pub fn t(&self) -> usize {
        self.t
    }

    /// Runs one BMSSP call at `level` with exclusive boundary `bound`.
    ///
    /// `table` must cover every vertex of the graph and already hold the
    /// distances of `sources`. Fails before touching the table if `sources`
    /// is empty or names a vertex outside the graph.
    pub fn execute(
        &self,
        level: usize,
        bound: W,
        sources: &[usize],
        table: &mut DistanceTable<W>,
    ) -> Result<BmsspResult<W>> {
        if sources.is_empty() {
            return Err(Error::InvalidInput("source list is empty".to_string()));
        }

        let n = self.graph.vertex_count();
        if let Some(&source) = sources.iter().find(|&&s| s >= n) {
            return Err(Error::InvalidVertex(source));
        }
        if table.len() != n {
            return Err(Error::InvalidInput(format!(
                "distance table covers {} vertices, graph has {}",
                table.len(),
                n
            )));
        }

        Ok(self.solve(level, bound, sources, table))
    }

    fn solve(
        &self,
        level: usize,
        bound: W,
        sources: &[usize],
        table: &mut DistanceTable<W>,
    ) -> BmsspResult<W> {
        debug!("bmssp: level {}, bound {:?}, {} sources", level, bound, sources.len());

        if level == 0 {
            return base_case(self.graph, bound, sources, table);
        }

        let PivotSelection { pivots, near } = find_pivots(self.graph, self.k, bound, sources, table);

        if pivots.is_empty() {
            let vertices: Vec<usize> = near
                .keys()
                .copied()
                .filter(|&v| table.distance(v) < bound)
                .collect();
            debug!("bmssp: level {} has no pivots, {} settled", level, vertices.len());
            return BmsspResult {
                new_bound: bound,
                vertices,
            };
        }

        let cap = work_cap(level, self.k, self.t);
        let mut batches = BatchHeap::new(block_size(level, self.t), bound);
        for &pivot in &pivots {
            batches.insert(pivot, table.distance(pivot));
        }

        let mut settled = BTreeSet::new();
        let mut last_sub_bound = bound;

        while settled.len() < cap && !batches.is_empty() {
            let (pulled_bound, batch) = batches.pull();
            trace!(
                "bmssp: level {} pulled {} vertices below {:?}",
                level,
                batch.len(),
                pulled_bound
            );

            let sub = self.solve(level - 1, pulled_bound, &batch, table);
            last_sub_bound = sub.new_bound;

            let mut staged = Vec::new();
            for &u in &sub.vertices {
                settled.insert(u);

                let dist_u = table.distance(u);
                for (v, weight) in self.graph.outgoing_edges(u) {
                    let candidate = dist_u + weight;
                    if !table.relax(u, v, candidate, bound) {
                        continue;
                    }
                    match classify_relaxation(candidate, pulled_bound, sub.new_bound) {
                        Relaxation::Requeue => batches.insert(v, candidate),
                        Relaxation::Prepend => staged.push((v, candidate)),
                        Relaxation::Discard => {}
                    }
                }
            }

            for &x in &batch {
                let dist_x = table.distance(x);
                if dist_x >= sub.new_bound && dist_x < pulled_bound {
                    staged.push((x, dist_x));
                }
            }
            batches.batch_prepend(staged);
        }

        let new_bound = cmp::min(last_sub_bound, bound);
        settled.extend(near.keys().copied().filter(|&v| table.distance(v) < new_bound));

        debug_assert!(new_bound <= bound);
        debug_assert!(settled.iter().all(|&v| table.distance(v) < new_bound));

        debug!(
            "bmssp: level {} done, bound {:?}, {} settled",
            level,
            new_bound,
            settled.len()
        );

        BmsspResult {
            new_bound,
            vertices: settled.into_iter().collect(),
        }
    }
}
