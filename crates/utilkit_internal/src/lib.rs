//! This module is separated into its own crate so the facade crate stays a thin re-export, and should not be used directly.

/// `use utilkit::prelude::*;` to import commonly used items.
pub mod prelude;

// Re-export utilkit_types for convenience
pub use utilkit_types;

// Re-export commonly used types at crate root
pub use utilkit_types::{
	collections::{PriorityQueue, Queue},
	file::{LoadError, load_file, load_file_or_empty},
	grid::CharGrid,
};
