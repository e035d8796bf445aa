//! Decrease-key and the cut / cascading-cut repair.

use crate::error::HeapError;
use crate::forest::Forest;
use crate::node::{Key, NodeId};
use crate::rank;
use log::trace;

impl Forest<'_> {
    pub(crate) fn decrease_key(&mut self, id: NodeId, delta: Key) -> Result<(), HeapError> {
        if delta < 0 {
            return Err(HeapError::NegativeDelta(delta));
        }
        let node = self.nodes.get(id).ok_or(HeapError::InvalidHandle)?;
        let key = node
            .key
            .checked_sub(delta)
            .ok_or(HeapError::KeyUnderflow {
                key: node.key,
                delta,
            })?;
        let parent = node.parent;

        self.nodes[id].key = key;
        if self.roots.min.map_or(true, |min| key < self.key(min)) {
            self.roots.min = Some(id);
        }
        if let Some(parent) = parent {
            if key <= self.key(parent) {
                self.cascading_cuts(id, parent);
            }
        }
        Ok(())
    }

    /// Make `id` a root and the designated minimum, as if its key had dropped
    /// below every other key. `delete_min` then removes it.
    pub(crate) fn detach_as_min(&mut self, id: NodeId) -> Result<(), HeapError> {
        let node = self.nodes.get(id).ok_or(HeapError::InvalidHandle)?;
        if let Some(parent) = node.parent {
            self.cascading_cuts(id, parent);
        }
        self.roots.min = Some(id);
        Ok(())
    }

    /// Detach `child` from `parent` and re-insert it as a root.
    fn cut(&mut self, child: NodeId, parent: NodeId) {
        let next = self.nodes[child].next;
        if next == child {
            self.nodes[parent].child = None;
        } else {
            if self.nodes[parent].child == Some(child) {
                self.nodes[parent].child = Some(next);
            }
            self.unlink(child);
        }
        self.nodes[child].parent = None;
        let node = &mut self.nodes[parent];
        node.rank = rank::decrement(node.rank);

        self.roots.metrics.record_cut();
        trace!("cut {:?} from {:?}", child, parent);
        self.insert_root(child);
    }

    /// Cut `node` from `parent`, then walk up while ancestors are already
    /// marked. The first unmarked non-root ancestor gets marked.
    fn cascading_cuts(&mut self, node: NodeId, parent: NodeId) {
        let (mut node, mut parent) = (node, parent);
        loop {
            if self.nodes[node].marked {
                self.nodes[node].marked = false;
                self.roots.marked -= 1;
            }
            self.cut(node, parent);

            let Some(grandparent) = self.nodes[parent].parent else {
                return;
            };
            if self.nodes[parent].marked {
                node = parent;
                parent = grandparent;
            } else {
                self.nodes[parent].marked = true;
                self.roots.marked += 1;
                return;
            }
        }
    }
}
