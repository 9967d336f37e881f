//! Line-oriented file loading.
//!
//! Records are separated by the two-byte sequence `\r\n` and nothing else.
//! A file that uses bare `\n` terminators comes back as a single line.
//! Splitting follows plain string-split semantics: empty content yields one
//! empty line, and a trailing `\r\n` yields a trailing empty line.

use std::{
	io::Read,
	path::{Path, PathBuf},
};

use log::{debug, error, warn};

use super::{LINE_TERMINATOR, error::LoadError};

/// Splits text into lines on `\r\n` only
///
/// # Examples
///
/// ```
/// use utilkit_types::file::split_crlf;
///
/// assert_eq!(split_crlf("a\r\nb"), vec!["a", "b"]);
/// assert_eq!(split_crlf("a\nb"), vec!["a\nb"]);
/// ```
pub fn split_crlf(content: &str) -> Vec<String> {
	content.split(LINE_TERMINATOR).map(str::to_owned).collect()
}

/// Reads a whole file and splits it into lines
///
/// # Errors
///
/// Returns [`LoadError::Io`] if the file cannot be read and
/// [`LoadError::InvalidUtf8`] if its contents are not UTF-8. Either way the
/// failure is also logged as a warning.
pub fn load_file(path: impl AsRef<Path>) -> Result<Vec<String>, LoadError> {
	let path = path.as_ref();
	let lines = read_to_string(path).map(|content| split_crlf(&content)).inspect_err(|e| {
		warn!("Error reading file: {e}");
	})?;

	debug!("Loaded {} lines from {}", lines.len(), path.display());
	Ok(lines)
}

/// Reads a whole file and splits it into lines, discarding the error
///
/// Any failure is logged at error level and turned into `None`. Prefer
/// [`load_file`] when the caller needs to tell a missing file apart from an
/// empty one.
pub fn load_file_or_empty(path: impl AsRef<Path>) -> Option<Vec<String>> {
	let path = path.as_ref();
	match read_to_string(path) {
		Ok(content) => Some(split_crlf(&content)),
		Err(e) => {
			error!("Error reading file: {e}");
			None
		}
	}
}

/// Reads everything from `reader` and splits it into lines
pub fn load_reader<R: Read>(reader: &mut R) -> Result<Vec<String>, LoadError> {
	let mut data = Vec::new();
	reader.read_to_end(&mut data).map_err(LoadError::Read)?;
	let content = String::from_utf8(data).map_err(LoadError::InvalidReaderUtf8)?;
	Ok(split_crlf(&content))
}

fn read_to_string(path: &Path) -> Result<String, LoadError> {
	let data = std::fs::read(path).map_err(|source| LoadError::Io {
		path: PathBuf::from(path),
		source,
	})?;

	String::from_utf8(data).map_err(|source| LoadError::InvalidUtf8 {
		path: PathBuf::from(path),
		source,
	})
}
