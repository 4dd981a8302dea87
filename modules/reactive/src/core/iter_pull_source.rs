use core::iter::Peekable;

use super::{PullSource, StreamError};

/// Pull source over any iterator.
pub struct IterPullSource<I: Iterator> {
  values: Peekable<I>,
}

impl<I: Iterator> IterPullSource<I> {
  /// Wraps the iterator of `values`.
  #[must_use]
  pub fn new<V>(values: V) -> Self
  where
    V: IntoIterator<IntoIter = I>, {
    Self { values: values.into_iter().peekable() }
  }
}

impl<I: Iterator> PullSource for IterPullSource<I> {
  type Item = I::Item;

  fn has_more(&mut self) -> bool {
    self.values.peek().is_some()
  }

  fn take_one(&mut self) -> Result<Self::Item, StreamError> {
    self.values.next().ok_or(StreamError::Failed)
  }
}
