use rand::{Rng, SeedableRng, rngs::SmallRng};
use utilkit::Queue;

#[test]
fn test_fifo_law_for_random_sequences() {
	let mut rng = SmallRng::seed_from_u64(7);

	for _ in 0..20 {
		let input: Vec<i64> = (0..rng.random_range(0..100)).map(|_| rng.random()).collect();

		let mut queue = Queue::new();
		for &value in &input {
			queue.enqueue(value);
		}

		let mut output = Vec::new();
		while let Some(value) = queue.dequeue() {
			output.push(value);
		}
		assert_eq!(output, input);
	}
}

#[test]
fn test_is_empty_tracks_balance() {
	let mut rng = SmallRng::seed_from_u64(11);
	let mut queue = Queue::new();
	let mut balance = 0usize;

	for step in 0..500 {
		if rng.random_bool(0.55) {
			queue.enqueue(step);
			balance += 1;
		} else if queue.dequeue().is_some() {
			balance -= 1;
		}
		assert_eq!(queue.is_empty(), balance == 0);
		assert_eq!(queue.len(), balance);
	}
}
