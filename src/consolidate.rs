//! Consolidation: merge equal-rank roots until every root rank is unique.

use crate::forest::{ring, Forest};
use crate::node::NodeId;
use crate::rank;
use log::{debug, trace};
use smallvec::{smallvec, SmallVec};

impl Forest<'_> {
    /// Rebuild the root list so that no two roots share a rank.
    ///
    /// Each root is dropped into the bucket for its rank; a collision links
    /// the two trees and retries one rank higher. The surviving trees are
    /// re-inserted from the highest rank down, which leaves the lowest rank
    /// first in the root list. `trees` and `min` are recomputed on the way.
    pub(crate) fn consolidate(&mut self) {
        let Some(first) = self.roots.first else {
            return;
        };
        let pending: Vec<NodeId> = ring(self.nodes, first).collect();
        let before = pending.len();

        let mut buckets: SmallVec<[Option<NodeId>; 64]> =
            smallvec![None; rank::bucket_capacity(self.roots.size)];
        for mut tree in pending {
            self.isolate(tree);
            loop {
                let r = self.nodes[tree].rank as usize;
                if r >= buckets.len() {
                    buckets.resize(r + 1, None);
                }
                match buckets[r].take() {
                    Some(other) => tree = self.link(other, tree),
                    None => {
                        buckets[r] = Some(tree);
                        break;
                    }
                }
            }
        }

        self.roots.first = None;
        self.roots.min = None;
        self.roots.trees = 0;
        for tree in buckets.into_iter().rev().flatten() {
            self.insert_root(tree);
        }
        debug!(
            "consolidated {} roots into {} (size {})",
            before, self.roots.trees, self.roots.size
        );
    }

    /// Hang one of two equal-rank roots under the other and return the parent.
    ///
    /// The root with the strictly smaller key becomes the parent; on equal
    /// keys `b` becomes the child.
    pub(crate) fn link(&mut self, a: NodeId, b: NodeId) -> NodeId {
        let (parent, child) = if self.key(b) < self.key(a) {
            (b, a)
        } else {
            (a, b)
        };

        self.isolate(child);
        let node = &mut self.nodes[child];
        node.parent = Some(parent);
        node.marked = false;

        if let Some(head) = self.nodes[parent].child {
            let last = self.nodes[head].prev;
            self.splice(last, child);
        }
        let node = &mut self.nodes[parent];
        node.child = Some(child);
        node.rank = rank::increment(node.rank);

        self.roots.metrics.record_link();
        trace!("link {:?} under {:?}", child, parent);
        parent
    }
}

#[cfg(test)]
mod tests {
    use crate::forest::ring;
    use crate::FibonacciHeap;

    #[test]
    fn test_consolidate_binomial_shape() {
        let mut heap = FibonacciHeap::new();
        for key in 0..9 {
            heap.insert(key);
        }
        heap.delete_min();

        // 8 nodes left: a single tree of rank 3
        assert_eq!(heap.counters_rep(), vec![0, 0, 0, 1]);
        assert_eq!(heap.total_links(), 7);
        assert_eq!(heap.min_key(), Some(1));
    }

    #[test]
    fn test_consolidate_orders_roots_by_rank() {
        let mut heap = FibonacciHeap::new();
        for key in 0..8 {
            heap.insert(key);
        }
        heap.delete_min();

        // 7 = 0b111: one tree each of rank 0, 1 and 2, lowest rank first
        assert_eq!(heap.counters_rep(), vec![1, 1, 1]);
        let ranks: Vec<u8> = {
            let slots = heap.arena().slots();
            ring(&slots, heap.first().unwrap())
                .map(|id| slots[id].rank())
                .collect()
        };
        assert_eq!(ranks, vec![0, 1, 2]);
    }

    #[test]
    fn test_link_tie_keeps_first_argument_as_parent() {
        let mut heap = FibonacciHeap::new();
        let a = heap.insert(5);
        let b = heap.insert(5);
        heap.insert(0);
        heap.delete_min();

        assert_eq!(heap.trees(), 1);
        let (na, nb) = (heap.node(a).unwrap(), heap.node(b).unwrap());
        // Roots are scanned from the most recent insert, so `b` fills the
        // bucket first and `a` arrives as the second argument.
        assert_eq!(na.parent(), Some(b));
        assert!(nb.is_root());
        assert_eq!(nb.rank(), 1);
    }
}
