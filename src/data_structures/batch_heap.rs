use std::collections::HashMap;
use std::fmt::Debug;
use num_traits::{Float, Zero};

use crate::data_structures::IndexedHeap;

/// Ordered batch structure feeding one recursive BMSSP call.
///
/// Supports:
/// - Insert: add a vertex, or lower its key, in O(log n)
/// - BatchPrepend: insert a batch of entries, keeping the minimum key per vertex
/// - Pull: remove at least `block_size` of the smallest entries (or all of
///   them) together with a boundary separating them from what remains
///
/// Keys at or above the upper bound are never stored. An equal-key group is
/// never split across two pulls, so every key returned by a pull is strictly
/// below the boundary it reports.
#[derive(Debug, Clone)]
pub struct BatchHeap<W>
where
    W: Float + Zero + Debug + Copy + Ord,
{
    /// Minimum number of entries removed by one pull
    block_size: usize,

    /// Exclusive upper bound on stored keys
    upper_bound: W,

    heap: IndexedHeap<W>,
}

impl<W> BatchHeap<W>
where
    W: Float + Zero + Debug + Copy + Ord,
{
    /// Creates an empty structure with the given block size and upper bound
    pub fn new(block_size: usize, upper_bound: W) -> Self {
        BatchHeap {
            block_size: block_size.max(1),
            upper_bound,
            heap: IndexedHeap::new(),
        }
    }

    pub fn block_size(&self) -> usize {
        self.block_size
    }

    pub fn upper_bound(&self) -> W {
        self.upper_bound
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Returns the resident key of a vertex
    pub fn get(&self, vertex: usize) -> Option<W> {
        self.heap.key(vertex)
    }

    /// Inserts `vertex` with `key`.
    ///
    /// Keys at or above the upper bound are ignored. A resident vertex only
    /// moves if the new key is strictly smaller.
    pub fn insert(&mut self, vertex: usize, key: W) {
        if key >= self.upper_bound {
            return;
        }
        self.heap.push_or_decrease(vertex, key);
    }

    /// Inserts a batch, keeping only the smallest key seen for each vertex
    pub fn batch_prepend(&mut self, entries: Vec<(usize, W)>) {
        if entries.is_empty() {
            return;
        }

        let mut smallest: HashMap<usize, W> = HashMap::with_capacity(entries.len());
        for (vertex, key) in entries {
            smallest
                .entry(vertex)
                .and_modify(|current| {
                    if key < *current {
                        *current = key;
                    }
                })
                .or_insert(key);
        }

        for (vertex, key) in smallest {
            self.insert(vertex, key);
        }
    }

    /// Removes the next batch of smallest entries.
    ///
    /// Pops at least `block_size` entries (fewer only if the structure runs
    /// dry) and keeps popping while the next key equals the last one
    /// removed. Returns the smallest key still resident, or the upper bound
    /// once empty, together with the removed vertices in key order.
    ///
    /// With block size 2 and keys `[0, 1, 1]` all three entries come out
    /// together, so no returned key equals the returned boundary.
    pub fn pull(&mut self) -> (W, Vec<usize>) {
        let mut batch = Vec::with_capacity(self.block_size.min(self.heap.len()));

        let Some((first, mut last_key)) = self.heap.pop() else {
            return (self.upper_bound, batch);
        };
        batch.push(first);

        while let Some((_, next_key)) = self.heap.peek() {
            if batch.len() >= self.block_size && next_key != last_key {
                break;
            }
            if let Some((vertex, key)) = self.heap.pop() {
                batch.push(vertex);
                last_key = key;
            }
        }

        let next_boundary = match self.heap.peek() {
            Some((_, key)) if key < self.upper_bound => key,
            _ => self.upper_bound,
        };

        (next_boundary, batch)
    }
}
