//! Error types for queue operations

use std::collections::TryReserveError;
use thiserror::Error;

/// Failures reported by queue operations.
///
/// Every variant is a refused single attempt with zero side effects: the
/// queue is left exactly as it was before the call.
#[derive(Debug, Error)]
pub enum QueueError {
    /// Removal was attempted on a queue with no elements.
    #[error("queue is empty")]
    Empty,
    /// The output buffer cannot hold even the NUL terminator.
    #[error("output buffer must hold at least one byte")]
    BufferTooSmall,
    /// The allocator refused memory for a node or its string copy.
    /// Any partial allocation has already been released.
    #[error("allocation failed: {0}")]
    Alloc(#[from] TryReserveError),
}
