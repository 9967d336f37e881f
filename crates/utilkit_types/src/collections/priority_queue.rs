//! Binary heap priority queue ordered by a caller-supplied comparator.
//!
//! The heap is stored as a flat `Vec` where the children of slot `i` live at
//! `2i + 1` and `2i + 2`. Slot positions never leave this module; callers only
//! see [`PriorityQueue::push`], [`PriorityQueue::pop`] and friends.
//!
//! # Ordering
//!
//! The comparator `less(a, b)` returns `true` when `a` must come out before
//! `b`. Every parent satisfies `!less(child, parent)`, so the root is always
//! an element no other element beats.
//!
//! Elements of equal priority come out in an unspecified relative order.
//! Insertion order among ties is **not** preserved.
//!
//! # Underflow
//!
//! Unlike [`Queue::dequeue`](super::Queue::dequeue), [`PriorityQueue::pop`] and
//! [`PriorityQueue::peek`] panic on an empty queue. Use
//! [`PriorityQueue::try_pop`] / [`PriorityQueue::try_peek`] when emptiness is
//! an expected outcome.

use std::fmt;

/// Comparator type used by [`PriorityQueue::min_heap`] and [`PriorityQueue::max_heap`]
pub type OrdComparator<T> = fn(&T, &T) -> bool;

/// Priority queue backed by a binary heap
///
/// # Examples
///
/// ```
/// use utilkit_types::collections::PriorityQueue;
///
/// let mut queue = PriorityQueue::new(|a: &u32, b: &u32| a < b);
/// for priority in [5, 1, 4, 2, 8] {
///     queue.push(priority);
/// }
///
/// let order: Vec<_> = std::iter::from_fn(|| queue.try_pop()).collect();
/// assert_eq!(order, vec![1, 2, 4, 5, 8]);
/// ```
#[derive(Clone)]
pub struct PriorityQueue<T, F> {
	items: Vec<T>,
	less: F,
}

impl<T, F> PriorityQueue<T, F>
where
	F: Fn(&T, &T) -> bool,
{
	/// Creates an empty queue ordered by `less`
	///
	/// The comparator is fixed for the lifetime of the queue.
	pub fn new(less: F) -> Self {
		Self {
			items: Vec::new(),
			less,
		}
	}

	/// Creates an empty queue with room for at least `capacity` elements
	pub fn with_capacity(capacity: usize, less: F) -> Self {
		Self {
			items: Vec::with_capacity(capacity),
			less,
		}
	}

	/// Builds a queue from existing items in O(n)
	pub fn from_vec(items: Vec<T>, less: F) -> Self {
		let mut queue = Self {
			items,
			less,
		};
		for pos in (0..queue.items.len() / 2).rev() {
			queue.sift_down(pos);
		}
		queue
	}

	/// Inserts an item in O(log n)
	pub fn push(&mut self, item: T) {
		self.items.push(item);
		self.sift_up(self.items.len() - 1);
	}

	/// Removes and returns the highest-priority item in O(log n)
	///
	/// # Panics
	///
	/// Panics if the queue is empty. Popping an empty priority queue is a
	/// caller bug; use [`try_pop`](Self::try_pop) if emptiness is expected.
	#[track_caller]
	pub fn pop(&mut self) -> T {
		match self.try_pop() {
			Some(top) => top,
			None => underflow("pop"),
		}
	}

	/// Removes and returns the highest-priority item, or `None` if empty
	pub fn try_pop(&mut self) -> Option<T> {
		let last = self.items.pop()?;
		if self.items.is_empty() {
			return Some(last);
		}

		let top = std::mem::replace(&mut self.items[0], last);
		self.sift_down(0);
		Some(top)
	}

	/// Returns the highest-priority item without removing it
	///
	/// # Panics
	///
	/// Panics if the queue is empty.
	#[track_caller]
	pub fn peek(&self) -> &T {
		match self.items.first() {
			Some(top) => top,
			None => underflow("peek"),
		}
	}

	/// Returns the highest-priority item, or `None` if empty
	pub fn try_peek(&self) -> Option<&T> {
		self.items.first()
	}

	/// Returns the number of items
	pub fn len(&self) -> usize {
		self.items.len()
	}

	/// Returns `true` if the queue holds no items
	pub fn is_empty(&self) -> bool {
		self.items.is_empty()
	}

	/// Removes every item, keeping the comparator
	pub fn clear(&mut self) {
		self.items.clear();
	}

	fn sift_up(&mut self, mut pos: usize) {
		while pos > 0 {
			let parent = (pos - 1) / 2;
			if !(self.less)(&self.items[pos], &self.items[parent]) {
				break;
			}
			self.items.swap(pos, parent);
			pos = parent;
		}
	}

	fn sift_down(&mut self, mut pos: usize) {
		let len = self.items.len();
		loop {
			let left = 2 * pos + 1;
			if left >= len {
				break;
			}

			// Pick the child that must come out first
			let right = left + 1;
			let child = if right < len && (self.less)(&self.items[right], &self.items[left]) {
				right
			} else {
				left
			};

			if !(self.less)(&self.items[child], &self.items[pos]) {
				break;
			}
			self.items.swap(pos, child);
			pos = child;
		}
	}
}

impl<T: Ord> PriorityQueue<T, OrdComparator<T>> {
	/// Creates an empty queue that pops the smallest item first
	pub fn min_heap() -> Self {
		Self::new(ascending::<T>)
	}

	/// Creates an empty queue that pops the largest item first
	pub fn max_heap() -> Self {
		Self::new(descending::<T>)
	}
}

impl<T, F> Extend<T> for PriorityQueue<T, F>
where
	F: Fn(&T, &T) -> bool,
{
	fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
		let iter = iter.into_iter();
		self.items.reserve(iter.size_hint().0);
		for item in iter {
			self.push(item);
		}
	}
}

impl<T, F> fmt::Debug for PriorityQueue<T, F> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("PriorityQueue").field("len", &self.items.len()).finish_non_exhaustive()
	}
}

fn ascending<T: Ord>(a: &T, b: &T) -> bool {
	a < b
}

fn descending<T: Ord>(a: &T, b: &T) -> bool {
	a > b
}

#[cold]
#[track_caller]
fn underflow(op: &str) -> ! {
	panic!("{op} called on an empty priority queue")
}
