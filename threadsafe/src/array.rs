use core::fmt;

use crate::{common::*, OutOfBounds};


/// A resizable, index-addressed array guarded by a single lock.
///
/// All methods take `&self`, so an `Array` can be shared between threads
/// behind an [`Arc`](std::sync::Arc). Every call holds the lock for its
/// whole duration and never hands out references into the storage.
///
/// # Example
///
/// ```
/// use threadsafe::Array;
///
/// let arr = Array::<u32>::new(3);
/// assert!(arr.set(2, 42));
/// assert_eq!(arr.get(2), Some(42));
/// assert_eq!(arr.get(10), None);
/// ```
pub struct Array<T> {
  data: Mutex<Vec<T>>,
}

impl<T: Default> Array<T> {
  /// Creates an array holding `size` default values.
  pub fn new(size: usize) -> Self {
    Self::from(
      core::iter::repeat_with(T::default)
        .take(size)
        .collect::<Vec<_>>(),
    )
  }
}

impl<T> Array<T> {
  /// Creates an empty array with room for at least `cap` elements.
  #[inline]
  pub fn with_capacity(cap: usize) -> Self {
    Self::from(Vec::with_capacity(cap))
  }

  /// Returns the number of elements in the array.
  #[inline]
  pub fn len(&self) -> usize {
    lock(&self.data).len()
  }

  /// Returns `true` if the array holds no elements.
  #[inline]
  pub fn is_empty(&self) -> bool {
    lock(&self.data).is_empty()
  }

  /// Overwrites the element at `index`.
  ///
  /// Returns `false` and leaves the array untouched if `index` is out of range.
  #[inline]
  pub fn set(&self, index: usize, value: T) -> bool {
    self.try_set(index, value).is_ok()
  }

  /// Overwrites the element at `index`, returning the element it replaced.
  ///
  /// On failure the value is returned inside the error.
  pub fn try_set(&self, index: usize, value: T) -> Result<T, OutOfBounds<T>> {
    let mut data = lock(&self.data);
    match data.get_mut(index) {
      Some(slot) => Ok(core::mem::replace(slot, value)),
      None => {
        #[cfg(feature = "tracing")]
        tracing::trace!(index, len = data.len(), "array: set out of bounds");
        Err(OutOfBounds::new(index, data.len(), value))
      }
    }
  }

  /// Appends `value` to the end of the array.
  #[inline]
  pub fn push(&self, value: T) {
    lock(&self.data).push(value);
  }

  /// Inserts `value` at `index`, shifting every element after it one position later.
  ///
  /// `index` may equal [`len`](Self::len), which appends. Returns `false` and
  /// leaves the array untouched for any larger index.
  #[inline]
  pub fn insert(&self, index: usize, value: T) -> bool {
    self.try_insert(index, value).is_ok()
  }

  /// Like [`insert`](Self::insert), but gives the value back on failure.
  pub fn try_insert(&self, index: usize, value: T) -> Result<(), OutOfBounds<T>> {
    let mut data = lock(&self.data);
    if index > data.len() {
      #[cfg(feature = "tracing")]
      tracing::trace!(index, len = data.len(), "array: insert out of bounds");
      return Err(OutOfBounds::new(index, data.len(), value));
    }

    data.insert(index, value);
    Ok(())
  }

  /// Removes and returns the element at `index`, shifting every element after
  /// it one position earlier.
  ///
  /// Returns `None` and leaves the array untouched if `index` is out of range.
  pub fn remove(&self, index: usize) -> Option<T> {
    let mut data = lock(&self.data);
    if index >= data.len() {
      #[cfg(feature = "tracing")]
      tracing::trace!(index, len = data.len(), "array: remove out of bounds");
      return None;
    }

    Some(data.remove(index))
  }

  /// Removes every element.
  #[inline]
  pub fn clear(&self) {
    lock(&self.data).clear();
  }

  /// Consumes the array and returns its elements in index order.
  #[inline]
  pub fn into_vec(self) -> Vec<T> {
    into_inner(self.data)
  }
}

impl<T: Clone> Array<T> {
  /// Returns a copy of the element at `index`, or `None` if it is out of range.
  pub fn get(&self, index: usize) -> Option<T> {
    let data = lock(&self.data);
    let val = data.get(index).cloned();

    #[cfg(feature = "tracing")]
    if val.is_none() {
      tracing::trace!(index, len = data.len(), "array: get out of bounds");
    }

    val
  }

  /// Returns a snapshot of every element in index order.
  ///
  /// The snapshot is independent of the array: later writes to either side
  /// are not visible in the other.
  #[inline]
  pub fn values(&self) -> Vec<T> {
    lock(&self.data).clone()
  }
}

impl<T: PartialEq> Array<T> {
  /// Returns `true` if any element equals `value`.
  #[inline]
  pub fn contains(&self, value: &T) -> bool {
    lock(&self.data).contains(value)
  }
}

impl<T> Default for Array<T> {
  #[inline]
  fn default() -> Self {
    Self::from(Vec::new())
  }
}

impl<T> From<Vec<T>> for Array<T> {
  #[inline]
  fn from(data: Vec<T>) -> Self {
    Self {
      data: Mutex::new(data),
    }
  }
}

impl<T> FromIterator<T> for Array<T> {
  #[inline]
  fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
    Self::from(iter.into_iter().collect::<Vec<_>>())
  }
}

impl<T: Clone> Clone for Array<T> {
  /// Copies the array under the lock. The copy shares nothing with the original.
  #[inline]
  fn clone(&self) -> Self {
    Self::from(self.values())
  }
}

impl<T: fmt::Debug> fmt::Debug for Array<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Array")
      .field("data", &*lock(&self.data))
      .finish()
  }
}
