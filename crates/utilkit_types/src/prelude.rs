//! Prelude module for `utilkit_types`.
//!
//! This module provides a convenient way to import commonly used types and functions.
//!
//! # Examples
//!
//! ```
//! use utilkit_types::prelude::*;
//!
//! let mut queue = Queue::new();
//! queue.enqueue('a');
//!
//! let mut heap = PriorityQueue::max_heap();
//! heap.push(3);
//! assert_eq!(heap.pop(), 3);
//! ```

// Containers
#[doc(inline)]
pub use crate::collections::{PriorityQueue, Queue};

// Loader
#[doc(inline)]
pub use crate::file::{LoadError, load_file, load_file_or_empty, split_crlf};

// Grid
#[doc(inline)]
pub use crate::grid::{CharGrid, to_char_grid};

// Re-export the modules for advanced usage
#[doc(inline)]
pub use crate::{collections, file, grid};
