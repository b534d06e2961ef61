use core::fmt;

use crate::common::*;


/// A LIFO stack guarded by a single lock.
///
/// The top of the stack is the logical end of the storage. Popping an empty
/// stack returns `None` immediately instead of waiting.
///
/// # Example
///
/// ```
/// use threadsafe::Stack;
///
/// let stack = Stack::new();
/// stack.push(1);
/// stack.push(2);
/// stack.push(3);
/// assert_eq!(stack.values(), [3, 2, 1]);
/// assert_eq!(stack.pop(), Some(3));
/// ```
pub struct Stack<T> {
  data: Mutex<Vec<T>>,
}

impl<T> Stack<T> {
  /// Creates an empty stack.
  #[inline]
  pub fn new() -> Self {
    Self::from(Vec::new())
  }

  /// Creates an empty stack with room for at least `cap` elements.
  #[inline]
  pub fn with_capacity(cap: usize) -> Self {
    Self::from(Vec::with_capacity(cap))
  }

  /// Pushes `value` onto the top of the stack.
  #[inline]
  pub fn push(&self, value: T) {
    lock(&self.data).push(value);
  }

  /// Removes and returns the top element, or `None` if the stack is empty.
  pub fn pop(&self) -> Option<T> {
    let val = lock(&self.data).pop();

    #[cfg(feature = "tracing")]
    if val.is_none() {
      tracing::trace!("stack: pop on empty stack");
    }

    val
  }

  /// Returns the number of elements on the stack.
  #[inline]
  pub fn len(&self) -> usize {
    lock(&self.data).len()
  }

  /// Returns `true` if the stack holds no elements.
  #[inline]
  pub fn is_empty(&self) -> bool {
    lock(&self.data).is_empty()
  }

  /// Removes every element.
  #[inline]
  pub fn clear(&self) {
    lock(&self.data).clear();
  }

  /// Consumes the stack and returns its elements from bottom to top.
  #[inline]
  pub fn into_vec(self) -> Vec<T> {
    into_inner(self.data)
  }
}

impl<T: Clone> Stack<T> {
  /// Returns a copy of the top element without removing it.
  pub fn peek(&self) -> Option<T> {
    let val = lock(&self.data).last().cloned();

    #[cfg(feature = "tracing")]
    if val.is_none() {
      tracing::trace!("stack: peek on empty stack");
    }

    val
  }

  /// Returns a snapshot of the stack from top to bottom, most recently pushed first.
  ///
  /// This is the reverse of [`into_vec`](Self::into_vec).
  pub fn values(&self) -> Vec<T> {
    lock(&self.data).iter().rev().cloned().collect()
  }
}

impl<T> Default for Stack<T> {
  #[inline]
  fn default() -> Self {
    Self::new()
  }
}

impl<T> From<Vec<T>> for Stack<T> {
  /// The last element of `data` becomes the top of the stack.
  #[inline]
  fn from(data: Vec<T>) -> Self {
    Self {
      data: Mutex::new(data),
    }
  }
}

impl<T> FromIterator<T> for Stack<T> {
  /// Pushes the items in order, so the last one ends up on top.
  #[inline]
  fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
    Self::from(iter.into_iter().collect::<Vec<_>>())
  }
}

impl<T: Clone> Clone for Stack<T> {
  #[inline]
  fn clone(&self) -> Self {
    Self::from(lock(&self.data).clone())
  }
}

impl<T: fmt::Debug> fmt::Debug for Stack<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Stack")
      .field("data", &*lock(&self.data))
      .finish()
  }
}
