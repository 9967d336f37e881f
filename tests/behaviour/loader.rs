use std::io::Write;

use anyhow::Result;
use utilkit::{LoadError, load_file, load_file_or_empty};

fn fixture(content: &str) -> Result<tempfile::NamedTempFile> {
	let mut file = tempfile::NamedTempFile::new()?;
	file.write_all(content.as_bytes())?;
	Ok(file)
}

#[test_log::test]
fn test_crlf_lines() -> Result<()> {
	let file = fixture("line1\r\nline2\r\nline3")?;
	assert_eq!(load_file(file.path())?, vec!["line1", "line2", "line3"]);
	Ok(())
}

#[test_log::test]
fn test_lf_only_stays_single_line() -> Result<()> {
	let file = fixture("line1\nline2\n")?;
	assert_eq!(load_file(file.path())?, vec!["line1\nline2\n"]);
	Ok(())
}

#[test_log::test]
fn test_nonexistent_path() -> Result<()> {
	let dir = tempfile::tempdir()?;
	let path = dir.path().join("non_existent.txt");

	assert!(matches!(load_file(&path), Err(LoadError::Io { .. })));
	assert!(load_file_or_empty(&path).is_none());
	Ok(())
}

#[test]
fn test_error_message_names_the_path() -> Result<()> {
	let dir = tempfile::tempdir()?;
	let path = dir.path().join("missing.txt");

	let message = load_file(&path).unwrap_err().to_string();
	assert!(message.contains("missing.txt"), "unexpected message: {message}");
	Ok(())
}
