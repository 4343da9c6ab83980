//! Slot-based node storage with a free list
//!
//! Nodes live in a `Vec<Option<Node>>` and link to each other through
//! `NodeId` indices instead of pointers. A slot owns its node exclusively;
//! releasing a node vacates the slot and parks the index on the free list
//! for reuse, so a stale `NodeId` can never reach freed memory.

use crate::error::QueueError;

/// Index of an occupied arena slot. Stable for the lifetime of the node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct NodeId(usize);

/// One chain element: an owned string and the successor link.
#[derive(Debug)]
struct Node {
    value: String,
    next: Option<NodeId>,
}

/// Storage for every node of a queue.
#[derive(Debug, Default)]
pub(crate) struct NodeArena {
    slots: Vec<Option<Node>>,
    free: Vec<NodeId>,
}

impl NodeArena {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Allocate a node holding an owned copy of `value`, with no successor.
    ///
    /// Both the string copy and (when the free list is empty) the slot
    /// growth go through `try_reserve`, so an allocator refusal surfaces as
    /// `QueueError::Alloc` with nothing retained: the partially built
    /// string is dropped and the arena is unchanged.
    pub(crate) fn alloc(&mut self, value: &str) -> Result<NodeId, QueueError> {
        let mut copy = String::new();
        copy.try_reserve_exact(value.len())?;
        copy.push_str(value);

        let node = Node { value: copy, next: None };
        match self.free.pop() {
            Some(id) => {
                debug_assert!(self.slots[id.0].is_none());
                self.slots[id.0] = Some(node);
                Ok(id)
            }
            None => {
                if let Err(e) = self.slots.try_reserve(1) {
                    // `node` (and its string) drops here; all-or-nothing.
                    return Err(e.into());
                }
                let id = NodeId(self.slots.len());
                self.slots.push(Some(node));
                Ok(id)
            }
        }
    }

    /// Release the node, returning its owned string. The slot becomes
    /// vacant and the index is reusable by the next `alloc`.
    pub(crate) fn release(&mut self, id: NodeId) -> String {
        let node = self.slots[id.0].take().expect("released NodeId must be live");
        self.free.push(id);
        node.value
    }

    pub(crate) fn value(&self, id: NodeId) -> &str {
        &self.node(id).value
    }

    pub(crate) fn next(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).next
    }

    pub(crate) fn set_next(&mut self, id: NodeId, next: Option<NodeId>) {
        self.node_mut(id).next = next;
    }

    /// Number of live nodes currently stored.
    pub(crate) fn live(&self) -> usize {
        self.slots.len() - self.free.len()
    }

    /// Drop every node and forget the free list.
    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
    }

    fn node(&self, id: NodeId) -> &Node {
        self.slots[id.0].as_ref().expect("linked NodeId must be live")
    }

    fn node_mut(&mut self, id: NodeId) -> &mut Node {
        self.slots[id.0].as_mut().expect("linked NodeId must be live")
    }
}
