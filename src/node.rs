//! Heap nodes and their handles.

use crate::rank::Rank;
use slotmap::new_key_type;

/// Key type stored in the heap.
pub type Key = i64;

new_key_type! {
    /// Stable handle to a node, returned by [`FibonacciHeap::insert`].
    ///
    /// Handles are generational: once a node is removed, its handle is
    /// rejected instead of aliasing a newer node.
    ///
    /// [`FibonacciHeap::insert`]: crate::FibonacciHeap::insert
    pub struct NodeId;
}

/// A single tree element.
///
/// Every node sits in exactly one circular sibling list (the root list or
/// its parent's child list); a lone node links to itself. `parent` is a
/// plain back-reference used for upward traversal only. Which list a node
/// sits in, not its `parent` field, determines who holds it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Node {
    pub(crate) key: Key,
    pub(crate) rank: Rank,
    pub(crate) marked: bool,
    pub(crate) parent: Option<NodeId>,
    pub(crate) child: Option<NodeId>,
    pub(crate) next: NodeId,
    pub(crate) prev: NodeId,
}

impl Node {
    /// Singleton node: rank 0, unmarked, in a one-element ring of its own.
    pub(crate) fn new(id: NodeId, key: Key) -> Self {
        Node {
            key,
            rank: 0,
            marked: false,
            parent: None,
            child: None,
            next: id,
            prev: id,
        }
    }

    pub fn key(&self) -> Key {
        self.key
    }

    /// Number of direct children.
    pub fn rank(&self) -> Rank {
        self.rank
    }

    /// Whether this non-root node has lost a child since it last became a child.
    pub fn is_marked(&self) -> bool {
        self.marked
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// One arbitrary child, the entry point into the child ring.
    pub fn child(&self) -> Option<NodeId> {
        self.child
    }

    pub fn next(&self) -> NodeId {
        self.next
    }

    pub fn prev(&self) -> NodeId {
        self.prev
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}
