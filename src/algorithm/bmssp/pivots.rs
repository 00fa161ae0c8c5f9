use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::fmt::Debug;
use num_traits::{Float, Zero};
use log::trace;

use crate::algorithm::DistanceTable;
use crate::graph::Graph;

/// Outcome of a pivot search
#[derive(Debug, Clone)]
pub struct PivotSelection<W> {
    /// Sources that root a recursive sub-problem, ascending
    pub pivots: Vec<usize>,

    /// Sources plus every vertex the probe touched, with its distance at
    /// the time it was last touched
    pub near: BTreeMap<usize, W>,
}

/// Runs `k` rounds of bounded relaxation from `sources` and picks pivots.
///
/// If the probe touched more than `k` vertices per distinct source every source is a
/// pivot. Otherwise the pivots are the sources whose subtree in the probe's
/// predecessor forest holds at least `k` vertices.
pub fn find_pivots<W, G>(
    graph: &G,
    k: usize,
    bound: W,
    sources: &[usize],
    table: &mut DistanceTable<W>,
) -> PivotSelection<W>
where
    W: Float + Zero + Debug + Copy + Ord,
    G: Graph<W>,
{
    let roots: Vec<usize> = sources.iter().copied().collect::<BTreeSet<_>>().into_iter().collect();

    let mut near: BTreeMap<usize, W> = roots.iter().map(|&s| (s, table.distance(s))).collect();
    let mut parent: HashMap<usize, usize> = HashMap::new();
    let mut frontier = roots.clone();

    for _ in 0..k {
        if frontier.is_empty() {
            break;
        }

        let mut next = Vec::new();
        let mut in_next = HashSet::new();

        for &u in &frontier {
            let dist_u = table.distance(u);
            for (v, weight) in graph.outgoing_edges(u) {
                let candidate = dist_u + weight;
                let improves = candidate < table.distance(v) || !near.contains_key(&v);
                if table.relax(u, v, candidate, bound) {
                    // A tie back into the probed set keeps the existing parent
                    if improves {
                        parent.insert(v, u);
                    }
                    near.insert(v, candidate);
                    if in_next.insert(v) {
                        next.push(v);
                    }
                }
            }
        }

        frontier = next;
    }

    if near.len() > k.saturating_mul(roots.len()) {
        trace!(
            "pivots: probe touched {} vertices from {} sources, keeping all",
            near.len(),
            roots.len()
        );
        return PivotSelection { pivots: roots, near };
    }

    let mut children: HashMap<usize, Vec<usize>> = HashMap::new();
    for (&v, &u) in &parent {
        if u != v && near.contains_key(&u) && near.contains_key(&v) {
            children.entry(u).or_default().push(v);
        }
    }

    let root_count = roots.len();
    let mut sizes = HashMap::new();
    let pivots: Vec<usize> = roots
        .into_iter()
        .filter(|&root| subtree_size(root, &children, &mut sizes) >= k)
        .collect();

    trace!("pivots: {} of {} sources root a large subtree", pivots.len(), root_count);
    PivotSelection { pivots, near }
}

/// Size of the subtree under `root`, memoised in `sizes`.
///
/// A first discovery along a zero-weight tie can still close a cycle in the
/// forest; an edge back to a vertex still on the DFS path contributes nothing.
fn subtree_size(
    root: usize,
    children: &HashMap<usize, Vec<usize>>,
    sizes: &mut HashMap<usize, usize>,
) -> usize {
    if let Some(&size) = sizes.get(&root) {
        return size;
    }

    let mut on_path = HashSet::new();
    let mut stack = vec![(root, false)];

    while let Some((vertex, expanded)) = stack.pop() {
        let kids = children.get(&vertex).map(Vec::as_slice).unwrap_or(&[]);

        if expanded {
            on_path.remove(&vertex);
            let size = 1 + kids
                .iter()
                .map(|child| sizes.get(child).copied().unwrap_or(0))
                .sum::<usize>();
            sizes.insert(vertex, size);
            continue;
        }

        if sizes.contains_key(&vertex) || !on_path.insert(vertex) {
            continue;
        }

        stack.push((vertex, true));
        for &child in kids {
            if !sizes.contains_key(&child) && !on_path.contains(&child) {
                stack.push((child, false));
            }
        }
    }

    sizes.get(&root).copied().unwrap_or(1)
}
