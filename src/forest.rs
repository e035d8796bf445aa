//! Mutable view over one heap's trees.
//!
//! A [`Forest`] pairs the arena slots with the root bookkeeping of a single
//! heap for the duration of one operation. The structural procedures
//! (consolidation, cuts) are implemented on it in their own modules.

use crate::arena::Slots;
use crate::metrics::Metrics;
use crate::node::{Key, NodeId};

/// Root-level state of one heap.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct Roots {
    /// Entry point into the root ring
    pub(crate) first: Option<NodeId>,
    /// Root holding the minimum key
    pub(crate) min: Option<NodeId>,
    pub(crate) size: usize,
    pub(crate) trees: usize,
    /// Marked non-root nodes
    pub(crate) marked: usize,
    pub(crate) metrics: Metrics,
}

pub(crate) struct Forest<'a> {
    pub(crate) nodes: &'a mut Slots,
    pub(crate) roots: &'a mut Roots,
}

/// Iterator over a circular list, starting at `start` and stopping before it
/// comes around again.
pub(crate) struct Ring<'a> {
    nodes: &'a Slots,
    start: NodeId,
    cur: Option<NodeId>,
}

impl Iterator for Ring<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let cur = self.cur?;
        let next = self.nodes[cur].next;
        self.cur = (next != self.start).then_some(next);
        Some(cur)
    }
}

pub(crate) fn ring(nodes: &Slots, start: NodeId) -> Ring<'_> {
    Ring {
        nodes,
        start,
        cur: Some(start),
    }
}

/// Every node of the trees whose roots form the ring at `first`.
pub(crate) fn descendants(nodes: &Slots, first: Option<NodeId>) -> Vec<NodeId> {
    let mut out = Vec::new();
    let mut pending: Vec<NodeId> = first.into_iter().collect();
    while let Some(start) = pending.pop() {
        for id in ring(nodes, start) {
            out.push(id);
            if let Some(child) = nodes[id].child {
                pending.push(child);
            }
        }
    }
    out
}

impl Forest<'_> {
    pub(crate) fn key(&self, id: NodeId) -> Key {
        self.nodes[id].key
    }

    /// Join the ring holding `b` into the ring holding `a`, right after `a`.
    pub(crate) fn splice(&mut self, a: NodeId, b: NodeId) {
        let a_next = self.nodes[a].next;
        let b_prev = self.nodes[b].prev;
        self.nodes[a].next = b;
        self.nodes[b].prev = a;
        self.nodes[b_prev].next = a_next;
        self.nodes[a_next].prev = b_prev;
    }

    /// Remove `id` from its ring and leave it as a ring of one.
    pub(crate) fn unlink(&mut self, id: NodeId) {
        let (prev, next) = (self.nodes[id].prev, self.nodes[id].next);
        self.nodes[prev].next = next;
        self.nodes[next].prev = prev;
        self.isolate(id);
    }

    pub(crate) fn isolate(&mut self, id: NodeId) {
        let node = &mut self.nodes[id];
        node.next = id;
        node.prev = id;
    }

    /// Add a parentless, unmarked node as the new first root.
    pub(crate) fn insert_root(&mut self, id: NodeId) {
        self.isolate(id);
        self.roots.trees += 1;
        match (self.roots.first, self.roots.min) {
            (Some(first), Some(min)) => {
                if self.key(id) < self.key(min) {
                    self.roots.min = Some(id);
                }
                let last = self.nodes[first].prev;
                self.splice(last, id);
            }
            _ => self.roots.min = Some(id),
        }
        self.roots.first = Some(id);
    }

    /// Empty the root bookkeeping; counters survive.
    pub(crate) fn clear(&mut self) {
        let metrics = self.roots.metrics;
        *self.roots = Roots {
            metrics,
            ..Roots::default()
        };
    }

    /// Remove the minimum root, promote its children and consolidate.
    pub(crate) fn delete_min(&mut self) -> Option<Key> {
        let min = self.roots.min?;
        let removed = self.nodes.remove(min)?;
        self.roots.size -= 1;
        if self.roots.size == 0 {
            self.clear();
            return Some(removed.key);
        }

        if let Some(child) = removed.child {
            let children: Vec<NodeId> = ring(self.nodes, child).collect();
            for id in children {
                let node = &mut self.nodes[id];
                if node.marked {
                    node.marked = false;
                    self.roots.marked -= 1;
                }
                node.parent = None;
            }
        }

        let start = if removed.next == min {
            removed.child
        } else {
            let (prev, next) = (removed.prev, removed.next);
            self.nodes[prev].next = next;
            self.nodes[next].prev = prev;
            if let Some(child) = removed.child {
                self.splice(prev, child);
            }
            if self.roots.first == Some(min) {
                removed.child.or(Some(next))
            } else {
                self.roots.first
            }
        };

        match start {
            Some(start) => {
                self.roots.first = Some(start);
                self.roots.min = None;
                self.consolidate();
            }
            None => self.clear(),
        }
        Some(removed.key)
    }

    /// Append the root ring of another heap (already living in these slots).
    pub(crate) fn absorb(&mut self, theirs: Roots) {
        let Some(their_first) = theirs.first else {
            self.roots.metrics.absorb(theirs.metrics);
            return;
        };
        match (self.roots.first, self.roots.min) {
            (Some(first), Some(min)) => {
                let last = self.nodes[first].prev;
                self.splice(last, their_first);
                if let Some(their_min) = theirs.min {
                    if self.key(their_min) < self.key(min) {
                        self.roots.min = Some(their_min);
                    }
                }
            }
            _ => {
                self.roots.first = Some(their_first);
                self.roots.min = theirs.min;
            }
        }
        self.roots.size += theirs.size;
        self.roots.trees += theirs.trees;
        self.roots.marked += theirs.marked;
        self.roots.metrics.absorb(theirs.metrics);
    }
}
