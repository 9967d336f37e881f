//! Board file utility
//!
//! Loads a CRLF separated board file and inspects it as a character grid.
//!
//! # Usage
//!
//! ```bash
//! # Print the board and its dimensions
//! cargo run --example grid_utils -- show board.txt
//!
//! # Count every distinct character
//! cargo run --example grid_utils -- count board.txt
//!
//! # Flood the region reachable from a cell through matching characters
//! cargo run --example grid_utils -- flood board.txt --row 0 --col 0
//! ```

use std::{
	collections::{BTreeMap, HashSet},
	path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use log::{info, warn};
use utilkit::prelude::*;

#[derive(Parser)]
#[command(name = "grid_utils")]
#[command(about = "Inspect CRLF separated board files", long_about = None)]
struct Cli {
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// Print the board with its dimensions
	Show {
		/// Input board file
		#[arg(value_name = "INPUT")]
		input: PathBuf,
	},

	/// Count occurrences of each character
	Count {
		/// Input board file
		#[arg(value_name = "INPUT")]
		input: PathBuf,
	},

	/// Breadth-first flood from a starting cell over equal characters
	Flood {
		/// Input board file
		#[arg(value_name = "INPUT")]
		input: PathBuf,

		/// Starting row
		#[arg(long, default_value_t = 0)]
		row: usize,

		/// Starting column
		#[arg(long, default_value_t = 0)]
		col: usize,
	},
}

fn main() -> Result<()> {
	env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

	match Cli::parse().command {
		Commands::Show {
			input,
		} => {
			let grid = open_grid(&input)?;
			info!("{} rows, widest row {} columns", grid.rows(), grid.max_width());
			println!("{grid}");
		}
		Commands::Count {
			input,
		} => {
			let grid = open_grid(&input)?;
			let mut counts = BTreeMap::new();
			for row in grid.iter_rows() {
				for &c in row {
					*counts.entry(c).or_insert(0usize) += 1;
				}
			}
			for (c, count) in counts {
				println!("{c:?}: {count}");
			}
		}
		Commands::Flood {
			input,
			row,
			col,
		} => {
			let grid = open_grid(&input)?;
			let size = flood(&grid, row, col)?;
			println!("{size}");
		}
	}

	Ok(())
}

fn open_grid(path: &Path) -> Result<CharGrid> {
	let lines = load_file(path).with_context(|| format!("Cannot load board {}", path.display()))?;
	if lines.len() == 1 && lines[0].contains('\n') {
		warn!("{} has no CRLF terminators, treating it as one row", path.display());
	}
	Ok(CharGrid::from_lines(lines))
}

fn flood(grid: &CharGrid, row: usize, col: usize) -> Result<usize> {
	let Some(target) = grid.get(row, col) else {
		bail!("Cell ({row}, {col}) is outside the board");
	};

	let mut seen = HashSet::from([(row, col)]);
	let mut frontier = Queue::new();
	frontier.enqueue((row, col));

	while let Some((r, c)) = frontier.dequeue() {
		let neighbours = [
			r.checked_sub(1).map(|r| (r, c)),
			Some((r + 1, c)),
			c.checked_sub(1).map(|c| (r, c)),
			Some((r, c + 1)),
		];
		for (nr, nc) in neighbours.into_iter().flatten() {
			if grid.get(nr, nc) == Some(target) && seen.insert((nr, nc)) {
				frontier.enqueue((nr, nc));
			}
		}
	}

	Ok(seen.len())
}
