use rand::{SeedableRng, rngs::SmallRng, seq::SliceRandom};
use utilkit::PriorityQueue;

#[test]
fn test_scenario_min_heap() {
	let mut heap = PriorityQueue::new(|a: &i32, b: &i32| a < b);
	for priority in [5, 1, 4, 2, 8] {
		heap.push(priority);
	}

	let popped: Vec<_> = (0..5).map(|_| heap.pop()).collect();
	assert_eq!(popped, vec![1, 2, 4, 5, 8]);
}

#[test]
fn test_heap_sort_property_with_duplicates() {
	let mut rng = SmallRng::seed_from_u64(2024);
	let mut input: Vec<u16> = (0..300).map(|i| i % 37).collect();
	input.shuffle(&mut rng);

	let mut heap = PriorityQueue::new(|a: &u16, b: &u16| a > b);
	heap.extend(input.iter().copied());

	let mut popped = Vec::new();
	while let Some(value) = heap.try_pop() {
		popped.push(value);
	}

	let mut expected = input;
	expected.sort_unstable_by(|a, b| b.cmp(a));
	assert_eq!(popped, expected);
}

#[test]
fn test_size_after_pushes_and_pops() {
	let mut heap = PriorityQueue::max_heap();
	for k in 0..40 {
		heap.push(k);
	}
	for j in 1..=15 {
		heap.pop();
		assert_eq!(heap.len(), 40 - j);
	}
}

#[test]
#[should_panic(expected = "pop called on an empty priority queue")]
fn test_pop_on_empty_panics() {
	let mut heap = PriorityQueue::new(|a: &String, b: &String| a < b);
	heap.pop();
}
