use std::io::Write;

use anyhow::Result;
use utilkit::{CharGrid, load_file};

#[test]
fn test_board_from_file() -> Result<()> {
	let mut file = tempfile::NamedTempFile::new()?;
	file.write_all(b"#.#\r\n...\r\n#.#")?;

	let grid = CharGrid::from_lines(load_file(file.path())?);
	assert_eq!(grid.rows(), 3);
	assert_eq!(grid.max_width(), 3);
	assert_eq!(grid.get(0, 0), Some('#'));
	assert_eq!(grid.get(1, 1), Some('.'));
	assert_eq!(grid.to_string(), "#.#\n...\n#.#");
	Ok(())
}
