//! Singly linked string queue
//!
//! This module provides an ordered sequence of owned strings that supports:
//! - Insertion at either end (FIFO and LIFO usage)
//! - Removal from the front, with C-style truncating copy-out
//! - In-place reversal by link rewiring
//! - In-place stable merge sort by byte-wise comparison
//!
//! Nodes are held in an index-linked arena rather than behind raw
//! pointers, so the chain stays singly linked and exclusively owned while
//! reversal and sorting stay pure relink operations.

mod arena;
mod serde;
mod sort;

use arena::{NodeArena, NodeId};
use tracing::debug;

use crate::error::QueueError;

/// A queue of owned strings backed by an arena of index-linked nodes.
///
/// The handle tracks the first and last node of the chain and the element
/// count; an empty queue has neither end. Every operation is synchronous
/// and single-threaded, with exclusive access enforced by `&mut self`.
#[derive(Debug, Default)]
pub struct StringQueue {
    arena: NodeArena,
    head: Option<NodeId>,
    tail: Option<NodeId>,
    len: usize,
}

impl StringQueue {
    /// Create a new empty queue. Allocates nothing until the first insert.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of elements in the queue.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the queue holds no elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// First element in the chain, if any.
    pub fn front(&self) -> Option<&str> {
        self.head.map(|id| self.arena.value(id))
    }

    /// Last element in the chain, if any.
    pub fn back(&self) -> Option<&str> {
        self.tail.map(|id| self.arena.value(id))
    }

    /// Iterate over the elements in chain order, head first.
    pub fn iter(&self) -> Iter<'_> {
        Iter { queue: self, cursor: self.head }
    }

    /// Insert an owned copy of `value` as the new first element.
    ///
    /// Fails only when the allocator refuses memory; in that case nothing
    /// is retained and the queue is unmodified.
    pub fn insert_head(&mut self, value: &str) -> Result<(), QueueError> {
        let id = self.arena.alloc(value)?;
        self.arena.set_next(id, self.head);
        self.head = Some(id);
        if self.tail.is_none() {
            self.tail = Some(id);
        }
        self.len += 1;
        debug!("Inserted {} bytes at head, size now {}", value.len(), self.len);
        Ok(())
    }

    /// Insert an owned copy of `value` as the new last element.
    ///
    /// Same failure contract as [`insert_head`](Self::insert_head): the two
    /// insertions validate and allocate identically.
    pub fn insert_tail(&mut self, value: &str) -> Result<(), QueueError> {
        let id = self.arena.alloc(value)?;
        match self.tail {
            Some(t) => self.arena.set_next(t, Some(id)),
            None => self.head = Some(id),
        }
        self.tail = Some(id);
        self.len += 1;
        debug!("Inserted {} bytes at tail, size now {}", value.len(), self.len);
        Ok(())
    }

    /// Remove the first element, copying its value into `out`.
    ///
    /// At most `out.len() - 1` value bytes are written, followed by a NUL
    /// terminator, so the buffer can never overflow; longer values are
    /// truncated. Returns the number of value bytes written.
    ///
    /// Fails with [`QueueError::Empty`] on an empty queue and
    /// [`QueueError::BufferTooSmall`] when `out` cannot hold the
    /// terminator; both failures leave the queue untouched.
    pub fn remove_head(&mut self, out: &mut [u8]) -> Result<usize, QueueError> {
        if out.is_empty() {
            return Err(QueueError::BufferTooSmall);
        }
        let value = self.pop_head()?;
        let copied = value.len().min(out.len() - 1);
        out[..copied].copy_from_slice(&value.as_bytes()[..copied]);
        out[copied] = 0;
        Ok(copied)
    }

    /// Remove the first element and return its owned string.
    ///
    /// Fails with [`QueueError::Empty`] on an empty queue, with no side
    /// effect.
    pub fn pop_head(&mut self) -> Result<String, QueueError> {
        let id = self.head.ok_or(QueueError::Empty)?;
        self.head = self.arena.next(id);
        if self.head.is_none() {
            self.tail = None;
        }
        self.len -= 1;
        let value = self.arena.release(id);
        debug!("Removed {} bytes from head, size now {}", value.len(), self.len);
        Ok(value)
    }

    /// Reverse the chain in place by rewiring the links.
    ///
    /// No node or string is allocated or freed. Queues with fewer than two
    /// elements are left exactly as they are, single node included.
    pub fn reverse(&mut self) {
        if self.len < 2 {
            return;
        }
        let mut prev = None;
        let mut cursor = self.head;
        while let Some(id) = cursor {
            cursor = self.arena.next(id);
            self.arena.set_next(id, prev);
            prev = Some(id);
        }
        std::mem::swap(&mut self.head, &mut self.tail);
        debug!("Reversed queue of {} elements", self.len);
    }

    /// Sort the elements in place into ascending byte-wise order.
    ///
    /// Stable merge sort over the links: equal elements keep their
    /// relative order. Nothing is allocated or freed. Queues with fewer
    /// than two elements are left untouched.
    pub fn sort(&mut self) {
        if self.len < 2 {
            return;
        }
        self.head = sort::sort_chain(&mut self.arena, self.head);

        // The old tail may now sit anywhere; rescan for the new last node.
        let mut last = self.head;
        while let Some(id) = last {
            match self.arena.next(id) {
                Some(next) => last = Some(next),
                None => break,
            }
        }
        self.tail = last;
        debug!("Sorted queue of {} elements", self.len);
    }

    /// Remove every element, releasing each node and its string.
    pub fn clear(&mut self) {
        self.arena.clear();
        self.head = None;
        self.tail = None;
        self.len = 0;
    }
}

/// Iterator over queue elements in chain order.
#[derive(Debug)]
pub struct Iter<'a> {
    queue: &'a StringQueue,
    cursor: Option<NodeId>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let id = self.cursor?;
        self.cursor = self.queue.arena.next(id);
        Some(self.queue.arena.value(id))
    }
}

impl<'a> IntoIterator for &'a StringQueue {
    type Item = &'a str;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}
