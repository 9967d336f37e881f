//! Character grid built from text rows.

use std::fmt::{self, Formatter};

/// Converts text rows into a grid of characters
///
/// Each row becomes one `Vec<char>`; rows keep their own width.
pub fn to_char_grid<I, S>(lines: I) -> Vec<Vec<char>>
where
	I: IntoIterator<Item = S>,
	S: AsRef<str>,
{
	lines.into_iter().map(|line| line.as_ref().chars().collect()).collect()
}

/// A board of characters addressed by `(row, col)`
///
/// Rows may have different widths; lookups outside a row return `None`.
///
/// # Examples
///
/// ```
/// use utilkit_types::grid::CharGrid;
///
/// let grid = CharGrid::from_lines(["#.#", ".#."]);
/// assert_eq!(grid.rows(), 2);
/// assert_eq!(grid.get(1, 1), Some('#'));
/// assert_eq!(grid.get(2, 0), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct CharGrid {
	cells: Vec<Vec<char>>,
}

impl CharGrid {
	/// Builds a grid from text rows
	pub fn from_lines<I, S>(lines: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		Self {
			cells: to_char_grid(lines),
		}
	}

	/// Returns the number of rows
	pub fn rows(&self) -> usize {
		self.cells.len()
	}

	/// Returns `true` if the grid has no rows
	pub fn is_empty(&self) -> bool {
		self.cells.is_empty()
	}

	/// Returns the width of `row`, or `None` past the last row
	pub fn width(&self, row: usize) -> Option<usize> {
		self.cells.get(row).map(Vec::len)
	}

	/// Returns the width of the widest row
	pub fn max_width(&self) -> usize {
		self.cells.iter().map(Vec::len).max().unwrap_or(0)
	}

	/// Returns the character at `(row, col)`
	pub fn get(&self, row: usize, col: usize) -> Option<char> {
		self.cells.get(row)?.get(col).copied()
	}

	/// Returns a whole row
	pub fn row(&self, row: usize) -> Option<&[char]> {
		self.cells.get(row).map(Vec::as_slice)
	}

	/// Iterates over rows from top to bottom
	pub fn iter_rows(&self) -> impl Iterator<Item = &[char]> + '_ {
		self.cells.iter().map(Vec::as_slice)
	}

	/// Consumes the grid and returns the raw rows
	pub fn into_inner(self) -> Vec<Vec<char>> {
		self.cells
	}
}

impl fmt::Display for CharGrid {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		for (i, row) in self.cells.iter().enumerate() {
			if i > 0 {
				writeln!(f)?;
			}
			for &c in row {
				write!(f, "{c}")?;
			}
		}
		Ok(())
	}
}

impl From<Vec<Vec<char>>> for CharGrid {
	fn from(cells: Vec<Vec<char>>) -> Self {
		Self {
			cells,
		}
	}
}

impl From<CharGrid> for Vec<Vec<char>> {
	fn from(grid: CharGrid) -> Self {
		grid.cells
	}
}
