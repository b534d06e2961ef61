use core::fmt;
use std::collections::VecDeque;

use crate::common::*;


/// A FIFO queue guarded by a single lock.
///
/// Elements are enqueued at the back and dequeued from the front. Dequeuing
/// from an empty queue returns `None` immediately instead of waiting.
///
/// # Example
///
/// ```
/// use threadsafe::Queue;
///
/// let queue = Queue::new();
/// queue.enqueue(1);
/// queue.enqueue(2);
/// assert_eq!(queue.dequeue(), Some(1));
/// assert_eq!(queue.peek(), Some(2));
/// ```
pub struct Queue<T> {
  data: Mutex<VecDeque<T>>,
}

impl<T> Queue<T> {
  /// Creates an empty queue.
  #[inline]
  pub fn new() -> Self {
    Self::from_deque(VecDeque::new())
  }

  /// Creates an empty queue with room for at least `cap` elements.
  #[inline]
  pub fn with_capacity(cap: usize) -> Self {
    Self::from_deque(VecDeque::with_capacity(cap))
  }

  #[inline]
  fn from_deque(data: VecDeque<T>) -> Self {
    Self {
      data: Mutex::new(data),
    }
  }

  /// Adds `value` to the back of the queue.
  #[inline]
  pub fn enqueue(&self, value: T) {
    lock(&self.data).push_back(value);
  }

  /// Removes and returns the front element, or `None` if the queue is empty.
  pub fn dequeue(&self) -> Option<T> {
    let val = lock(&self.data).pop_front();

    #[cfg(feature = "tracing")]
    if val.is_none() {
      tracing::trace!("queue: dequeue on empty queue");
    }

    val
  }

  /// Returns the number of elements in the queue.
  #[inline]
  pub fn len(&self) -> usize {
    lock(&self.data).len()
  }

  /// Returns `true` if the queue holds no elements.
  #[inline]
  pub fn is_empty(&self) -> bool {
    lock(&self.data).is_empty()
  }

  /// Removes every element.
  #[inline]
  pub fn clear(&self) {
    lock(&self.data).clear();
  }

  /// Consumes the queue and returns its elements from front to back.
  #[inline]
  pub fn into_vec(self) -> Vec<T> {
    into_inner(self.data).into()
  }
}

impl<T: Clone> Queue<T> {
  /// Returns a copy of the front element without removing it.
  pub fn peek(&self) -> Option<T> {
    let val = lock(&self.data).front().cloned();

    #[cfg(feature = "tracing")]
    if val.is_none() {
      tracing::trace!("queue: peek on empty queue");
    }

    val
  }

  /// Returns a snapshot of the queue from front to back.
  pub fn values(&self) -> Vec<T> {
    lock(&self.data).iter().cloned().collect()
  }
}

impl<T> Default for Queue<T> {
  #[inline]
  fn default() -> Self {
    Self::new()
  }
}

impl<T> From<Vec<T>> for Queue<T> {
  /// The first element of `data` becomes the front of the queue.
  #[inline]
  fn from(data: Vec<T>) -> Self {
    Self::from_deque(data.into())
  }
}

impl<T> FromIterator<T> for Queue<T> {
  #[inline]
  fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
    Self::from_deque(iter.into_iter().collect())
  }
}

impl<T: Clone> Clone for Queue<T> {
  #[inline]
  fn clone(&self) -> Self {
    Self::from_deque(lock(&self.data).clone())
  }
}

impl<T: fmt::Debug> fmt::Debug for Queue<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Queue")
      .field("data", &*lock(&self.data))
      .finish()
  }
}
