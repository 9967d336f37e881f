//! Benchmark helper utilities for utilkit
//!
//! This module provides generators for synthetic input data shared by the
//! benchmark suite.

use rand::{Rng, SeedableRng, rngs::SmallRng, seq::SliceRandom};

/// Seed used by every generator so runs are comparable
pub const SEED: u64 = 0x0B1A_5EED;

/// Generates `len` random priorities in `0..max`
pub fn random_priorities(len: usize, max: u32) -> Vec<u32> {
	let mut rng = SmallRng::seed_from_u64(SEED);
	(0..len).map(|_| rng.random_range(0..max)).collect()
}

/// Generates `0..len` in shuffled order, without duplicates
pub fn shuffled_range(len: u32) -> Vec<u32> {
	let mut rng = SmallRng::seed_from_u64(SEED);
	let mut values: Vec<u32> = (0..len).collect();
	values.shuffle(&mut rng);
	values
}

/// Generates CRLF separated text with `lines` rows of `width` characters
pub fn crlf_text(lines: usize, width: usize) -> String {
	let row = ".".repeat(width);
	vec![row; lines].join("\r\n")
}

/// Common benchmark sizes
pub mod sizes {
	/// Tiny workload: fits in L1
	pub const TINY: usize = 64;
	/// Small workload
	pub const SMALL: usize = 1_024;
	/// Medium workload
	pub const MEDIUM: usize = 16_384;
	/// Large workload
	pub const LARGE: usize = 262_144;

	// Sizes must grow monotonically
	const _: () = assert!(TINY < SMALL && SMALL < MEDIUM && MEDIUM < LARGE);
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_random_priorities() {
		let data = random_priorities(100, 10);
		assert_eq!(data.len(), 100);
		assert!(data.iter().all(|&p| p < 10));
		assert_eq!(data, random_priorities(100, 10));
	}

	#[test]
	fn test_shuffled_range_is_permutation() {
		let mut data = shuffled_range(50);
		data.sort_unstable();
		assert_eq!(data, (0..50).collect::<Vec<_>>());
	}

	#[test]
	fn test_crlf_text() {
		assert_eq!(crlf_text(3, 2), "..\r\n..\r\n..");
		assert_eq!(crlf_text(0, 2), "");
	}
}
