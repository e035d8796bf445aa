//! Independent invariant verifier
//!
//! Rebuilds the whole structure of a heap through its public read accessors
//! and checks every invariant the operations promise to keep:
//!
//! - sibling rings are consistent (`next.prev == node`, `prev.next == node`)
//! - roots have no parent and are unmarked
//! - children point back at their parent and have strictly larger keys
//! - every rank equals the number of children
//! - `find_min` is a root holding the smallest key of all nodes
//! - `len`, `counters_rep` and `potential` agree with what was found
//!
//! The stress tests run this after every operation.

use crate::fibonacci::FibonacciHeap;
use crate::node::{Key, Node, NodeId};
use rustc_hash::FxHashSet;
use std::fmt;

/// Totals found while walking a valid heap.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Census {
    pub size: usize,
    pub trees: usize,
    pub marked: usize,
}

/// First invariant violation found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    /// `is_empty`, `len`, `first` and `find_min` disagree about emptiness
    Emptiness,
    /// A link leads to a node that no longer exists
    Dangling(NodeId),
    /// `node.next.prev` or `node.prev.next` is not `node`
    BrokenRing(NodeId),
    /// A node was reached twice
    Revisited(NodeId),
    /// A root has a parent or is marked
    BadRoot(NodeId),
    /// A child's parent field does not name the node whose list holds it
    WrongParent(NodeId),
    /// A child's key is not greater than its parent's
    HeapOrder { parent: Key, child: Key },
    /// A rank differs from the child count
    Rank { key: Key, rank: usize, children: usize },
    /// `find_min` is missing, not a root, or not the smallest key
    Min { reported: Option<Key>, actual: Key },
    Size { reported: usize, actual: usize },
    Counters { reported: Vec<usize>, actual: Vec<usize> },
    Potential { reported: usize, actual: usize },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::Emptiness => write!(f, "emptiness indicators disagree"),
            Violation::Dangling(id) => write!(f, "link to removed node {:?}", id),
            Violation::BrokenRing(id) => write!(f, "sibling ring broken at {:?}", id),
            Violation::Revisited(id) => write!(f, "node {:?} reached twice", id),
            Violation::BadRoot(id) => write!(f, "root {:?} has a parent or is marked", id),
            Violation::WrongParent(id) => write!(f, "node {:?} has the wrong parent", id),
            Violation::HeapOrder { parent, child } => {
                write!(f, "child key {} is not greater than parent key {}", child, parent)
            }
            Violation::Rank {
                key,
                rank,
                children,
            } => write!(f, "node {} has rank {} but {} children", key, rank, children),
            Violation::Min { reported, actual } => {
                write!(f, "find_min reports {:?} but the minimum is {}", reported, actual)
            }
            Violation::Size { reported, actual } => {
                write!(f, "len() is {} but {} nodes were found", reported, actual)
            }
            Violation::Counters { reported, actual } => {
                write!(f, "counters_rep() is {:?} but roots give {:?}", reported, actual)
            }
            Violation::Potential { reported, actual } => {
                write!(f, "potential() is {} but trees + 2 * marked is {}", reported, actual)
            }
        }
    }
}

impl std::error::Error for Violation {}

/// Checks every structural invariant of `heap`.
pub fn validate(heap: &FibonacciHeap) -> Result<Census, Violation> {
    let Some(first) = heap.first() else {
        let empty = heap.is_empty()
            && heap.len() == 0
            && heap.find_min().is_none()
            && heap.counters_rep().is_empty()
            && heap.potential() == 0;
        return if empty {
            Ok(Census::default())
        } else {
            Err(Violation::Emptiness)
        };
    };
    if heap.is_empty() {
        return Err(Violation::Emptiness);
    }

    let mut visited = FxHashSet::default();
    let roots = walk_ring(heap, first, &mut visited)?;

    let mut census = Census {
        trees: roots.len(),
        ..Census::default()
    };
    let mut ranks: Vec<usize> = Vec::new();
    let mut smallest = Key::MAX;
    let mut pending: Vec<(NodeId, Node)> = Vec::new();
    for &(id, node) in &roots {
        if node.parent().is_some() || node.is_marked() {
            return Err(Violation::BadRoot(id));
        }
        let rank = node.rank() as usize;
        if rank >= ranks.len() {
            ranks.resize(rank + 1, 0);
        }
        ranks[rank] += 1;
        pending.push((id, node));
    }

    while let Some((id, node)) = pending.pop() {
        census.size += 1;
        census.marked += usize::from(node.is_marked());
        smallest = smallest.min(node.key());

        let children = match node.child() {
            Some(child) => walk_ring(heap, child, &mut visited)?,
            None => Vec::new(),
        };
        if children.len() != node.rank() as usize {
            return Err(Violation::Rank {
                key: node.key(),
                rank: node.rank() as usize,
                children: children.len(),
            });
        }
        for (child_id, child) in children {
            if child.parent() != Some(id) {
                return Err(Violation::WrongParent(child_id));
            }
            if child.key() <= node.key() {
                return Err(Violation::HeapOrder {
                    parent: node.key(),
                    child: child.key(),
                });
            }
            pending.push((child_id, child));
        }
    }

    let min = heap.find_min().and_then(|id| heap.node(id));
    match min {
        Some(min) if min.is_root() && min.key() == smallest => {}
        _ => {
            return Err(Violation::Min {
                reported: min.map(|node| node.key()),
                actual: smallest,
            })
        }
    }

    if heap.len() != census.size {
        return Err(Violation::Size {
            reported: heap.len(),
            actual: census.size,
        });
    }
    let reported = heap.counters_rep();
    if reported != ranks {
        return Err(Violation::Counters {
            reported,
            actual: ranks,
        });
    }
    let actual = census.trees + 2 * census.marked;
    if heap.potential() != actual {
        return Err(Violation::Potential {
            reported: heap.potential(),
            actual,
        });
    }
    Ok(census)
}

/// Collects one sibling ring, checking both link directions.
fn walk_ring(
    heap: &FibonacciHeap,
    start: NodeId,
    visited: &mut FxHashSet<NodeId>,
) -> Result<Vec<(NodeId, Node)>, Violation> {
    let mut out = Vec::new();
    let mut cur = start;
    loop {
        if !visited.insert(cur) {
            return Err(Violation::Revisited(cur));
        }
        let node = heap.node(cur).ok_or(Violation::Dangling(cur))?;
        let next = heap.node(node.next()).ok_or(Violation::Dangling(node.next()))?;
        let prev = heap.node(node.prev()).ok_or(Violation::Dangling(node.prev()))?;
        if next.prev() != cur || prev.next() != cur {
            return Err(Violation::BrokenRing(cur));
        }
        out.push((cur, node));
        cur = node.next();
        if cur == start {
            return Ok(out);
        }
    }
}
