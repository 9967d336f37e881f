//! Unbounded FIFO queue.

use std::collections::{VecDeque, vec_deque};

/// First-in first-out queue
///
/// Elements leave in exactly the order they arrived. Taking from an empty
/// queue is not an error: [`Queue::dequeue`] returns `None` and the caller
/// decides what that means.
///
/// # Examples
///
/// ```
/// use utilkit_types::collections::Queue;
///
/// let mut queue = Queue::new();
/// queue.enqueue("hello");
/// queue.enqueue("world");
///
/// assert_eq!(queue.dequeue(), Some("hello"));
/// assert_eq!(queue.dequeue(), Some("world"));
/// assert_eq!(queue.dequeue(), None);
/// assert!(queue.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Queue<T> {
	items: VecDeque<T>,
}

impl<T> Queue<T> {
	/// Creates a new empty queue
	pub fn new() -> Self {
		Self {
			items: VecDeque::new(),
		}
	}

	/// Creates an empty queue with room for at least `capacity` elements
	pub fn with_capacity(capacity: usize) -> Self {
		Self {
			items: VecDeque::with_capacity(capacity),
		}
	}

	/// Adds an element to the back of the queue
	pub fn enqueue(&mut self, value: T) {
		self.items.push_back(value);
	}

	/// Removes and returns the front element
	///
	/// Returns `None` if the queue is empty.
	pub fn dequeue(&mut self) -> Option<T> {
		self.items.pop_front()
	}

	/// Returns a reference to the front element without removing it
	pub fn peek(&self) -> Option<&T> {
		self.items.front()
	}

	/// Returns `true` if the queue holds no elements
	pub fn is_empty(&self) -> bool {
		self.items.is_empty()
	}

	/// Returns the number of elements in the queue
	pub fn len(&self) -> usize {
		self.items.len()
	}

	/// Removes every element
	pub fn clear(&mut self) {
		self.items.clear();
	}

	/// Iterates from front to back without consuming the queue
	pub fn iter(&self) -> vec_deque::Iter<'_, T> {
		self.items.iter()
	}
}

impl<T> Default for Queue<T> {
	fn default() -> Self {
		Self::new()
	}
}

impl<T> FromIterator<T> for Queue<T> {
	fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
		Self {
			items: iter.into_iter().collect(),
		}
	}
}

impl<T> Extend<T> for Queue<T> {
	fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
		self.items.extend(iter);
	}
}

impl<T> IntoIterator for Queue<T> {
	type Item = T;
	type IntoIter = vec_deque::IntoIter<T>;

	fn into_iter(self) -> Self::IntoIter {
		self.items.into_iter()
	}
}

impl<'a, T> IntoIterator for &'a Queue<T> {
	type Item = &'a T;
	type IntoIter = vec_deque::Iter<'a, T>;

	fn into_iter(self) -> Self::IntoIter {
		self.items.iter()
	}
}
