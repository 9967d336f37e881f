//! Text file support for `utilkit`.

mod error;

pub mod lines;

/// Record terminator the line loader splits on
pub const LINE_TERMINATOR: &str = "\r\n";

// Re-export unified error type
pub use error::LoadError;

pub use lines::{load_file, load_file_or_empty, load_reader, split_crlf};
