pub mod error;
pub mod queue;

// Public API
pub use error::QueueError;
pub use queue::{Iter, StringQueue};
