//! k-smallest extraction without touching the source heap.
//!
//! The algorithm runs a second, auxiliary heap whose nodes shadow nodes of
//! the source. Each shadow remembers which source node it mirrors (the source
//! never learns about its shadows). Extracting the auxiliary minimum yields
//! the next smallest source key, and the mirrored node's children become the
//! new candidates. Heap order guarantees that a key is never reported before
//! its ancestors, so each step looks at `deg` new candidates at most.

use crate::fibonacci::FibonacciHeap;
use crate::forest::ring;
use crate::node::{Key, NodeId};
use log::debug;
use slotmap::SecondaryMap;

/// Returns the `k` smallest keys of `heap` in non-decreasing order.
///
/// `heap` is only read. An empty heap yields an empty vector, and a `k`
/// larger than `heap.len()` yields every key.
///
/// # Time Complexity
/// O(k · deg(H)) when `heap` is a single tree of root degree `deg(H)`. A
/// forest adds one candidate per root up front.
///
/// # Example
///
/// ```rust
/// use fibheap::{k_min, FibonacciHeap};
///
/// let mut heap: FibonacciHeap = [7, 2, 1, 18, 15, 100, 3, 8, 20].into_iter().collect();
/// heap.delete_min();
/// assert_eq!(k_min(&heap, 3), vec![2, 3, 7]);
/// assert_eq!(heap.len(), 8);
/// ```
pub fn k_min(heap: &FibonacciHeap, k: usize) -> Vec<Key> {
    let Some(first) = heap.first() else {
        return Vec::new();
    };
    let slots = heap.arena().slots();

    let mut candidates = FibonacciHeap::with_private_arena();
    let mut mirrors: SecondaryMap<NodeId, NodeId> = SecondaryMap::new();
    for root in ring(&slots, first) {
        mirrors.insert(candidates.insert(slots[root].key()), root);
    }

    let mut out = Vec::with_capacity(k.min(heap.len()));
    while out.len() < k {
        let Some(shadow) = candidates.find_min() else {
            break;
        };
        candidates.delete_min();
        let Some(source) = mirrors.remove(shadow) else {
            break;
        };
        out.push(slots[source].key());

        if let Some(child) = slots[source].child() {
            for id in ring(&slots, child) {
                mirrors.insert(candidates.insert(slots[id].key()), id);
            }
        }
    }
    debug!(
        "k_min: {} keys, {} auxiliary links",
        out.len(),
        candidates.total_links()
    );
    out
}
