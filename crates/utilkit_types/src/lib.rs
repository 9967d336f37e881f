//! This crate provides the containers and loaders for the `utilkit` project.
//!
//! # Components
//!
//! - **`Queue`**: Unbounded FIFO queue with graceful empty handling
//! - **`PriorityQueue`**: Binary heap ordered by a caller-supplied `less(a, b)` comparator
//! - **Line loader**: Reads a file and splits it on `\r\n` only
//! - **`CharGrid`**: Rows of text turned into a grid of characters
//!
//! # Examples
//!
//! Using the prelude (recommended):
//!
//! ```no_run
//! use utilkit_types::prelude::*;
//!
//! let lines = load_file("board.txt").unwrap_or_default();
//! let grid = CharGrid::from_lines(&lines);
//!
//! let mut frontier = PriorityQueue::min_heap();
//! frontier.push((0u32, (0usize, 0usize)));
//! while let Some((cost, (row, col))) = frontier.try_pop() {
//!     if grid.get(row, col).is_none() {
//!         continue;
//!     }
//!     // ...
//! #   let _ = cost;
//! }
//! ```
//!
//! Or use explicit paths:
//!
//! ```
//! use utilkit_types::collections::Queue;
//!
//! let mut queue = Queue::new();
//! queue.enqueue(1);
//! assert_eq!(queue.dequeue(), Some(1));
//! ```

pub mod collections;
pub mod file;
pub mod grid;

/// `use utilkit_types::prelude::*;` to import commonly used items.
pub mod prelude;
