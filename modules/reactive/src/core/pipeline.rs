//! Deferred-head pipelines.

use alloc::{rc::Rc, vec::Vec};

use super::{Flow, Source, StreamError, Subscriber};


/// Reusable chain whose head is kept apart from its tail.
///
/// The head factory builds a fresh upstream for every run and the tail is a [`Flow`], so
/// each subscription replays the whole chain from the original head. Alternate tails built
/// with [`Pipeline::via`] share the head.
pub struct Pipeline<H, T> {
  head: Rc<dyn Fn() -> Source<H>>,
  tail: Flow<H, T>,
}

impl<H, T> Clone for Pipeline<H, T> {
  fn clone(&self) -> Self {
    Self { head: self.head.clone(), tail: self.tail.clone() }
  }
}

impl<H: 'static> Pipeline<H, H> {
  /// Creates a pipeline without stages.
  #[must_use]
  pub fn new<F>(head: F) -> Self
  where
    F: Fn() -> Source<H> + 'static, {
    Self { head: Rc::new(head), tail: Flow::new() }
  }
}

impl<H: 'static, T: 'static> Pipeline<H, T> {
  /// Creates a pipeline from a head factory and a tail.
  #[must_use]
  pub fn with_tail<F>(head: F, tail: Flow<H, T>) -> Self
  where
    F: Fn() -> Source<H> + 'static, {
    Self { head: Rc::new(head), tail }
  }

  /// Returns a new pipeline with `flow` appended, sharing this pipeline's head.
  #[must_use]
  pub fn via<U: 'static>(&self, flow: &Flow<T, U>) -> Pipeline<H, U> {
    Pipeline { head: self.head.clone(), tail: self.tail.via(flow) }
  }

  /// Builds a fresh head source, without the tail.
  #[must_use]
  pub fn head(&self) -> Source<H> {
    (self.head)()
  }

  /// Builds a fresh instance of the whole chain.
  #[must_use]
  pub fn source(&self) -> Source<T> {
    self.tail.apply(self.head())
  }

  /// Runs a fresh instance of the chain into `subscriber`.
  pub fn subscribe<S>(&self, subscriber: S)
  where
    S: Subscriber<T> + 'static, {
    self.source().subscribe(subscriber);
  }

  /// Runs a fresh instance of the chain with unbounded demand and returns its items.
  ///
  /// # Errors
  ///
  /// Returns the stream error, or `StreamError::WouldBlock` when the chain did not terminate
  /// synchronously.
  pub fn collect_values(&self) -> Result<Vec<T>, StreamError> {
    self.source().collect_values()
  }
}
