//! Node storage shared between heaps
//!
//! All nodes live in a [`SlotMap`] keyed by [`NodeId`], so tree links are
//! plain indices and no reference cycles exist. Every heap created on a
//! thread allocates from that thread's arena. Handles are therefore unique
//! among all heaps of the thread: melding two heaps only splices their root
//! lists, every handle stays valid, and a handle of a removed node is
//! rejected instead of aliasing another node.
//!
//! # Example
//!
//! ```rust
//! use fibheap::FibonacciHeap;
//!
//! let mut a = FibonacciHeap::new();
//! let mut b = FibonacciHeap::new();
//! assert!(a.arena().ptr_eq(b.arena()));
//!
//! a.insert(4);
//! let moved = b.insert(2);
//! a.meld(b);
//! assert_eq!(a.find_min(), Some(moved));
//! assert_eq!(a.decrease_key(moved, 1), Ok(()));
//! assert_eq!(a.min_key(), Some(1));
//! ```

use crate::node::{Node, NodeId};
use slotmap::SlotMap;
use std::cell::{Ref, RefCell, RefMut};
use std::fmt;
use std::rc::Rc;

pub(crate) type Slots = SlotMap<NodeId, Node>;

thread_local! {
    static THREAD_ARENA: NodeArena = NodeArena::new();
}

/// Reference-counted node arena.
///
/// Cloning a `NodeArena` yields another handle to the same storage.
/// [`FibonacciHeap::arena`](crate::FibonacciHeap::arena) exposes it for
/// inspection.
#[derive(Clone)]
pub struct NodeArena(Rc<RefCell<Slots>>);

impl NodeArena {
    /// A fresh arena no heap shares.
    pub(crate) fn new() -> Self {
        NodeArena(Rc::new(RefCell::new(SlotMap::with_key())))
    }

    /// The arena of the current thread.
    pub(crate) fn thread_default() -> Self {
        THREAD_ARENA.with(NodeArena::clone)
    }

    /// Number of live nodes across every heap using this arena.
    pub fn len(&self) -> usize {
        self.0.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether `self` and `other` are handles to the same storage.
    pub fn ptr_eq(&self, other: &NodeArena) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    /// Whether more than one handle to this storage exists.
    pub(crate) fn is_shared(&self) -> bool {
        Rc::strong_count(&self.0) > 1
    }

    pub(crate) fn slots(&self) -> Ref<'_, Slots> {
        self.0.borrow()
    }

    pub(crate) fn slots_mut(&self) -> RefMut<'_, Slots> {
        self.0.borrow_mut()
    }

    pub(crate) fn try_slots_mut(&self) -> Option<RefMut<'_, Slots>> {
        self.0.try_borrow_mut().ok()
    }
}

impl fmt::Debug for NodeArena {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeArena")
            .field("ptr", &Rc::as_ptr(&self.0))
            .field("len", &self.len())
            .finish()
    }
}
