//! Fibonacci Heap implementation
//!
//! A Fibonacci heap is a data structure for priority queue operations with:
//! - O(1) amortized insert, decrease_key, and meld
//! - O(log n) amortized delete_min and delete
//!
//! The structure consists of a collection of heap-ordered trees. Roots are linked
//! in a circular doubly linked list, and so is every group of siblings. The heap
//! keeps the entry point into the root list, the minimum root, and the counters
//! the potential `trees + 2 * marked` is computed from.
//!
//! Only `delete_min` (and `delete`, which ends in it) repairs the structure
//! globally; every other mutation touches O(1) nodes, or a chain of marked
//! ancestors whose length is paid for by earlier markings.

use crate::arena::NodeArena;
use crate::error::HeapError;
use crate::forest::{descendants, ring, Forest, Roots};
use crate::kmin;
use crate::metrics::Metrics;
use crate::node::{Key, Node, NodeId};
use crate::render;
use log::debug;
use std::fmt;

/// Fibonacci Heap over [`Key`]s
///
/// # Example
///
/// ```rust
/// use fibheap::FibonacciHeap;
///
/// let mut heap = FibonacciHeap::new();
/// let node = heap.insert(5);
/// heap.insert(3);
/// heap.decrease_key(node, 4).unwrap();
/// assert_eq!(heap.find_min(), Some(node));
/// assert_eq!(heap.min_key(), Some(1));
/// ```
pub struct FibonacciHeap {
    arena: NodeArena,
    roots: Roots,
}

impl Drop for FibonacciHeap {
    fn drop(&mut self) {
        // A private arena goes away with us; the thread arena must lose our nodes.
        if self.roots.first.is_none() || !self.arena.is_shared() {
            return;
        }
        if let Some(mut slots) = self.arena.try_slots_mut() {
            for id in descendants(&slots, self.roots.first) {
                slots.remove(id);
            }
        }
    }
}

impl Default for FibonacciHeap {
    fn default() -> Self {
        Self::new()
    }
}

impl FibonacciHeap {
    /// Creates an empty heap.
    ///
    /// All heaps of a thread allocate from the same arena, so any two of them
    /// meld in O(1) and handles never collide.
    pub fn new() -> Self {
        FibonacciHeap {
            arena: NodeArena::thread_default(),
            roots: Roots::default(),
        }
    }

    /// An empty heap with an arena of its own.
    ///
    /// Used for scratch heaps that must allocate while the thread arena is
    /// borrowed. Such a heap must never be melded with a thread-arena heap.
    pub(crate) fn with_private_arena() -> Self {
        FibonacciHeap {
            arena: NodeArena::new(),
            roots: Roots::default(),
        }
    }

    /// The arena holding this heap's nodes.
    pub fn arena(&self) -> &NodeArena {
        &self.arena
    }

    fn with_forest<R>(&mut self, f: impl FnOnce(&mut Forest<'_>) -> R) -> R {
        let mut slots = self.arena.slots_mut();
        let mut forest = Forest {
            nodes: &mut *slots,
            roots: &mut self.roots,
        };
        f(&mut forest)
    }

    pub fn is_empty(&self) -> bool {
        self.roots.first.is_none()
    }

    /// Number of nodes in the heap.
    pub fn len(&self) -> usize {
        self.roots.size
    }

    /// Number of trees in the root list.
    pub fn trees(&self) -> usize {
        self.roots.trees
    }

    /// Number of marked nodes.
    pub fn marked(&self) -> usize {
        self.roots.marked
    }

    /// `trees + 2 * marked`
    pub fn potential(&self) -> usize {
        self.roots.trees + 2 * self.roots.marked
    }

    /// Inserts `key` as a new single-node tree and returns its handle.
    ///
    /// # Time Complexity
    /// O(1) worst case.
    pub fn insert(&mut self, key: Key) -> NodeId {
        self.with_forest(|forest| {
            let id = forest.nodes.insert_with_key(|id| Node::new(id, key));
            forest.roots.size += 1;
            forest.insert_root(id);
            id
        })
    }

    /// Handle of the node holding the minimum key, `None` if empty.
    pub fn find_min(&self) -> Option<NodeId> {
        self.roots.min
    }

    pub fn min_key(&self) -> Option<Key> {
        let min = self.roots.min?;
        self.arena.slots().get(min).map(Node::key)
    }

    /// Removes the minimum node and returns its key.
    ///
    /// Promotes the children of the minimum to roots and consolidates.
    /// Returns `None` on an empty heap.
    ///
    /// # Time Complexity
    /// O(log n) amortized, O(n) worst case.
    pub fn delete_min(&mut self) -> Option<Key> {
        if self.is_empty() {
            return None;
        }
        self.with_forest(|forest| forest.delete_min())
    }

    /// Decreases the key of `node` by `delta`.
    ///
    /// `node` must belong to this heap; a node of another heap sharing the
    /// arena is not detected.
    ///
    /// # Errors
    /// - [`HeapError::NegativeDelta`] if `delta < 0`; the heap is unchanged.
    /// - [`HeapError::KeyUnderflow`] if the new key is below `Key::MIN`.
    /// - [`HeapError::InvalidHandle`] if the node was already removed.
    ///
    /// # Time Complexity
    /// O(1) amortized, O(log n) worst case.
    pub fn decrease_key(&mut self, node: NodeId, delta: Key) -> Result<(), HeapError> {
        self.with_forest(|forest| forest.decrease_key(node, delta))
    }

    /// Removes `node` from the heap and returns its key.
    ///
    /// Runs the cut path as though the key had become smaller than every
    /// other key, then deletes the minimum. The same ownership contract as
    /// [`decrease_key`](Self::decrease_key) applies.
    ///
    /// # Errors
    /// [`HeapError::InvalidHandle`] if the node was already removed.
    pub fn delete(&mut self, node: NodeId) -> Result<Key, HeapError> {
        self.with_forest(|forest| {
            forest.detach_as_min(node)?;
            forest.delete_min().ok_or(HeapError::InvalidHandle)
        })
    }

    /// Melds `other` into this heap.
    ///
    /// The root lists are spliced; no node is created, copied or destroyed,
    /// and every handle obtained from `other` now refers to the same node in
    /// this heap. Link and cut counters of `other` are added to this heap's
    /// counters.
    ///
    /// # Time Complexity
    /// O(1) worst case.
    pub fn meld(&mut self, mut other: FibonacciHeap) {
        debug_assert!(self.arena.ptr_eq(&other.arena));
        let theirs = std::mem::take(&mut other.roots);
        debug!("meld {} nodes into {}", theirs.size, self.roots.size);
        self.with_forest(|forest| forest.absorb(theirs));
    }

    /// Number of roots of each rank: entry `i` counts roots of rank `i`.
    ///
    /// Empty for an empty heap; otherwise its length is the largest root
    /// rank plus one.
    pub fn counters_rep(&self) -> Vec<usize> {
        let Some(first) = self.roots.first else {
            return Vec::new();
        };
        let slots = self.arena.slots();
        let mut counts = Vec::new();
        for id in ring(&slots, first) {
            let rank = slots[id].rank as usize;
            if rank >= counts.len() {
                counts.resize(rank + 1, 0);
            }
            counts[rank] += 1;
        }
        counts
    }

    /// The `k` smallest keys in non-decreasing order; see [`kmin::k_min`].
    pub fn k_min(&self, k: usize) -> Vec<Key> {
        kmin::k_min(self, k)
    }

    pub fn metrics(&self) -> Metrics {
        self.roots.metrics
    }

    /// Links performed since creation or the last [`reset_metrics`](Self::reset_metrics).
    pub fn total_links(&self) -> u64 {
        self.roots.metrics.links
    }

    /// Cuts performed since creation or the last [`reset_metrics`](Self::reset_metrics).
    pub fn total_cuts(&self) -> u64 {
        self.roots.metrics.cuts
    }

    pub fn reset_metrics(&mut self) {
        self.roots.metrics.reset();
    }

    // ------------------------------------------------------------------
    // Read-only traversal
    // ------------------------------------------------------------------

    /// Entry point into the root list.
    pub fn first(&self) -> Option<NodeId> {
        self.roots.first
    }

    /// Snapshot of a node's fields, `None` if the handle is stale.
    pub fn node(&self, id: NodeId) -> Option<Node> {
        self.arena.slots().get(id).copied()
    }

    pub fn key(&self, id: NodeId) -> Option<Key> {
        self.node(id).map(|node| node.key)
    }

    /// Roots in list order, starting at [`first`](Self::first).
    pub fn roots(&self) -> Vec<NodeId> {
        match self.roots.first {
            Some(first) => ring(&self.arena.slots(), first).collect(),
            None => Vec::new(),
        }
    }

    /// Direct children of `id` in list order.
    pub fn children(&self, id: NodeId) -> Vec<NodeId> {
        let slots = self.arena.slots();
        match slots.get(id).and_then(|node| node.child) {
            Some(child) => ring(&slots, child).collect(),
            None => Vec::new(),
        }
    }
}

impl Extend<Key> for FibonacciHeap {
    fn extend<I: IntoIterator<Item = Key>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl FromIterator<Key> for FibonacciHeap {
    fn from_iter<I: IntoIterator<Item = Key>>(iter: I) -> Self {
        let mut heap = FibonacciHeap::new();
        heap.extend(iter);
        heap
    }
}

impl fmt::Debug for FibonacciHeap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FibonacciHeap")
            .field("len", &self.roots.size)
            .field("trees", &self.roots.trees)
            .field("marked", &self.roots.marked)
            .field("min", &self.min_key())
            .field("metrics", &self.roots.metrics)
            .finish()
    }
}

impl fmt::Display for FibonacciHeap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render::write_tree(f, self, false)
    }
}
