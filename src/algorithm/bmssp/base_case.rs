use std::cmp;
use std::collections::{BTreeSet, HashSet};
use std::fmt::Debug;
use num_traits::{Float, Zero};
use log::trace;

use crate::algorithm::bmssp::BmsspResult;
use crate::algorithm::DistanceTable;
use crate::data_structures::MinQueue;
use crate::graph::Graph;

/// Level-0 leaf of the recursion: bounded Dijkstra from each source.
///
/// Every source is searched on its own; the returned boundary is the
/// smallest of the per-source boundaries and the settled vertices are the
/// sorted union of the per-source results.
pub fn base_case<W, G>(
    graph: &G,
    bound: W,
    sources: &[usize],
    table: &mut DistanceTable<W>,
) -> BmsspResult<W>
where
    W: Float + Zero + Debug + Copy + Ord,
    G: Graph<W>,
{
    let mut new_bound = bound;
    let mut settled = BTreeSet::new();

    for &source in sources {
        let (source_bound, vertices) = bounded_search(graph, bound, source, table);
        new_bound = cmp::min(new_bound, source_bound);
        settled.extend(vertices);
    }

    trace!(
        "base case: {} sources, bound {:?} -> {:?}, {} settled",
        sources.len(),
        bound,
        new_bound,
        settled.len()
    );

    BmsspResult {
        new_bound,
        vertices: settled.into_iter().collect(),
    }
}

fn bounded_search<W, G>(
    graph: &G,
    bound: W,
    source: usize,
    table: &mut DistanceTable<W>,
) -> (W, Vec<usize>)
where
    W: Float + Zero + Debug + Copy + Ord,
    G: Graph<W>,
{
    let mut queue = MinQueue::new();
    let mut settled = HashSet::new();
    queue.push(source, table.distance(source));

    while let Some((u, dist_u)) = queue.pop() {
        // Stale, or a tie rediscovered after u was already settled
        if dist_u != table.distance(u) || settled.contains(&u) {
            continue;
        }
        if dist_u >= bound {
            queue.push(u, dist_u);
            break;
        }
        settled.insert(u);

        for (v, weight) in graph.outgoing_edges(u) {
            let candidate = dist_u + weight;
            if table.relax(u, v, candidate, bound) {
                queue.push(v, candidate);
            }
        }
    }

    let new_bound = match queue.peek() {
        Some((_, key)) => cmp::min(bound, key),
        None => bound,
    };

    (new_bound, settled.into_iter().collect())
}
