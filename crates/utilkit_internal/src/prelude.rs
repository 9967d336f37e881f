//! Prelude module for `utilkit_internal`.
//!
//! This module provides a convenient way to import commonly used types and functions.
//!
//! # Examples
//!
//! ```rust
//! use utilkit_internal::prelude::*;
//!
//! let mut queue = Queue::new();
//! queue.enqueue("job");
//!
//! let mut heap = PriorityQueue::new(|a: &u8, b: &u8| a < b);
//! heap.push(4);
//!
//! let grid = CharGrid::from_lines(split_crlf("ab\r\ncd"));
//! assert_eq!(grid.get(1, 0), Some('c'));
//! ```

// Re-export everything from utilkit_types::prelude
#[doc(inline)]
pub use utilkit_types::prelude::*;

// Re-export the entire utilkit_types module for advanced usage
#[doc(inline)]
pub use utilkit_types;
