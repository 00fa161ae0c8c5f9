use std::collections::HashMap;
use std::fmt::Debug;

/// Binary min-heap over vertices that knows where each vertex lives.
///
/// Every vertex has at most one resident entry. Lowering a resident key
/// rebalances the entry in place (O(log n)) instead of pushing a duplicate,
/// so the resident keys always reflect the current priorities. Equal keys
/// are ordered by vertex id.
#[derive(Debug, Clone)]
pub struct IndexedHeap<K>
where
    K: Copy + Ord + Debug,
{
    /// Heap-ordered `(key, vertex)` entries
    entries: Vec<(K, usize)>,

    /// vertex -> index into `entries`
    slots: HashMap<usize, usize>,
}

impl<K> Default for IndexedHeap<K>
where
    K: Copy + Ord + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K> IndexedHeap<K>
where
    K: Copy + Ord + Debug,
{
    pub fn new() -> Self {
        IndexedHeap {
            entries: Vec::new(),
            slots: HashMap::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        IndexedHeap {
            entries: Vec::with_capacity(capacity),
            slots: HashMap::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, vertex: usize) -> bool {
        self.slots.contains_key(&vertex)
    }

    /// Current key of a resident vertex
    pub fn key(&self, vertex: usize) -> Option<K> {
        self.slots.get(&vertex).map(|&slot| self.entries[slot].0)
    }

    /// Inserts `vertex`, or lowers its key if it is already resident with a
    /// larger one. Returns false when the heap was left unchanged.
    pub fn push_or_decrease(&mut self, vertex: usize, key: K) -> bool {
        match self.slots.get(&vertex) {
            Some(&slot) => {
                if key >= self.entries[slot].0 {
                    return false;
                }
                self.entries[slot].0 = key;
                self.sift_up(slot);
            }
            None => {
                let slot = self.entries.len();
                self.entries.push((key, vertex));
                self.slots.insert(vertex, slot);
                self.sift_up(slot);
            }
        }
        true
    }

    /// Smallest entry as `(vertex, key)`
    pub fn peek(&self) -> Option<(usize, K)> {
        self.entries.first().map(|&(key, vertex)| (vertex, key))
    }

    /// Removes and returns the smallest entry as `(vertex, key)`
    pub fn pop(&mut self) -> Option<(usize, K)> {
        if self.entries.is_empty() {
            return None;
        }

        let last = self.entries.len() - 1;
        self.swap(0, last);
        let (key, vertex) = self.entries.pop()?;
        self.slots.remove(&vertex);

        if !self.entries.is_empty() {
            self.sift_down(0);
        }
        Some((vertex, key))
    }

    fn sift_up(&mut self, mut slot: usize) {
        while slot > 0 {
            let parent = (slot - 1) / 2;
            if self.entries[slot] >= self.entries[parent] {
                break;
            }
            self.swap(slot, parent);
            slot = parent;
        }
    }

    fn sift_down(&mut self, mut slot: usize) {
        let len = self.entries.len();
        loop {
            let left = 2 * slot + 1;
            let right = left + 1;
            let mut smallest = slot;

            if left < len && self.entries[left] < self.entries[smallest] {
                smallest = left;
            }
            if right < len && self.entries[right] < self.entries[smallest] {
                smallest = right;
            }
            if smallest == slot {
                break;
            }

            self.swap(slot, smallest);
            slot = smallest;
        }
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.entries.swap(a, b);
        self.slots.insert(self.entries[a].1, a);
        self.slots.insert(self.entries[b].1, b);
    }
}
