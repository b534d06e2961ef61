#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![cfg_attr(docsrs, allow(unused_attributes))]
#![deny(missing_docs)]

mod array;
pub use array::*;

mod queue;
pub use queue::*;

mod stack;
pub use stack::*;

mod error;
pub use error::*;


mod common {
  #[cfg(not(feature = "loom"))]
  pub(crate) use std::sync::{Mutex, MutexGuard};

  #[cfg(feature = "loom")]
  pub(crate) use loom::sync::{Mutex, MutexGuard};

  #[cfg(all(test, not(feature = "loom")))]
  pub(crate) use std::{sync::Arc, thread};

  #[cfg(all(test, feature = "loom"))]
  pub(crate) use loom::{sync::Arc, thread};

  use std::sync::PoisonError;

  /// Acquires the guard.
  ///
  /// A panic in a user `Clone` or `PartialEq` impl can poison the lock, but no
  /// operation mutates storage after calling into user code, so the data is
  /// always consistent and the poison is ignored.
  #[inline]
  pub(crate) fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
  }

  #[inline]
  pub(crate) fn into_inner<T>(mutex: Mutex<T>) -> T {
    mutex.into_inner().unwrap_or_else(PoisonError::into_inner)
  }
}
