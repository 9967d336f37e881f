//! Generic containers.
//!
//! - [`Queue`]: FIFO, returns `None` when taken from empty
//! - [`PriorityQueue`]: binary heap ordered by a comparator, panics when popped empty

pub mod priority_queue;
pub mod queue;

pub use priority_queue::{OrdComparator, PriorityQueue};
pub use queue::Queue;
