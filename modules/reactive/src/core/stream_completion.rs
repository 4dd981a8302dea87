use alloc::rc::Rc;
use core::cell::RefCell;

use super::{Completion, StreamError};

#[cfg(test)]
mod tests;

/// Shared slot receiving the terminal outcome of a chain; the first result wins.
pub struct StreamCompletion<T> {
  inner: Rc<RefCell<Option<Result<T, StreamError>>>>,
}

impl<T> Clone for StreamCompletion<T> {
  fn clone(&self) -> Self {
    Self { inner: self.inner.clone() }
  }
}

impl<T> StreamCompletion<T> {
  /// Creates a new completion handle.
  #[must_use]
  pub fn new() -> Self {
    Self { inner: Rc::new(RefCell::new(None)) }
  }

  /// Polls the completion state.
  #[must_use]
  pub fn poll(&self) -> Completion<T>
  where
    T: Clone, {
    Completion::from(self.inner.borrow().clone())
  }

  /// Returns `true` once a result has been recorded.
  #[must_use]
  pub fn is_ready(&self) -> bool {
    self.inner.borrow().is_some()
  }

  /// Attempts to take the completion result.
  #[must_use]
  pub fn try_take(&self) -> Option<Result<T, StreamError>> {
    self.inner.borrow_mut().take()
  }

  pub(crate) fn complete(&self, result: Result<T, StreamError>) {
    // 最初の終端結果のみ記録する
    self.inner.borrow_mut().get_or_insert(result);
  }
}

impl<T> Default for StreamCompletion<T> {
  fn default() -> Self {
    Self::new()
  }
}
