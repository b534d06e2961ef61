/// Error returned when an index falls outside the range an operation accepts.
///
/// The rejected value is handed back so the caller can retry without cloning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutOfBounds<T> {
  pub(crate) index: usize,
  pub(crate) len: usize,
  pub(crate) value: T,
}

#[allow(clippy::len_without_is_empty)]
impl<T> OutOfBounds<T> {
  #[inline]
  pub(crate) const fn new(index: usize, len: usize, value: T) -> Self {
    Self { index, len, value }
  }

  /// Returns the index that was requested.
  #[inline]
  pub const fn index(&self) -> usize {
    self.index
  }

  /// Returns the length of the container when the operation was rejected.
  #[inline]
  pub const fn len(&self) -> usize {
    self.len
  }

  /// Returns a reference to the rejected value.
  #[inline]
  pub const fn value(&self) -> &T {
    &self.value
  }

  /// Consumes the error, returning the rejected value.
  #[inline]
  pub fn into_inner(self) -> T {
    self.value
  }
}

impl<T> core::fmt::Display for OutOfBounds<T> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    write!(
      f,
      "index out of bounds: the len is {} but the index is {}",
      self.len, self.index
    )
  }
}

impl<T: core::fmt::Debug> std::error::Error for OutOfBounds<T> {}
