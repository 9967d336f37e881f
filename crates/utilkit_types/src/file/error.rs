//! Error types for loading text files.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when loading a line-oriented file
#[derive(Debug, Error)]
pub enum LoadError {
	/// The file could not be opened or read
	#[error("Cannot read file {}: {source}", path.display())]
	Io {
		/// Path that was requested
		path: PathBuf,
		/// Underlying IO error
		#[source]
		source: std::io::Error,
	},

	/// Reading from a non-file source failed
	#[error("Cannot read input: {0}")]
	Read(#[source] std::io::Error),

	/// The file contents are not valid UTF-8
	#[error("File {} is not valid UTF-8: {source}", path.display())]
	InvalidUtf8 {
		/// Path that was requested
		path: PathBuf,
		/// Underlying decoding error
		#[source]
		source: std::string::FromUtf8Error,
	},

	/// Reader contents are not valid UTF-8
	#[error("Input is not valid UTF-8: {0}")]
	InvalidReaderUtf8(#[source] std::string::FromUtf8Error),
}

impl LoadError {
	/// Returns `true` if the error was caused by a missing file
	pub fn is_not_found(&self) -> bool {
		match self {
			Self::Io {
				source,
				..
			}
			| Self::Read(source) => source.kind() == std::io::ErrorKind::NotFound,
			Self::InvalidUtf8 {
				..
			}
			| Self::InvalidReaderUtf8(_) => false,
		}
	}
}
