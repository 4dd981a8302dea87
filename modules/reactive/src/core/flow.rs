//! Reusable stage recipes.

use alloc::{borrow::Cow, rc::Rc};
use core::fmt::Debug;

use super::{Source, StageLogic};


/// Reusable chain of stages from `In` to `Out`.
///
/// A flow holds recipes, not running stages: every [`Flow::apply`] builds fresh logics,
/// so one flow can be attached to any number of sources.
pub struct Flow<In, Out> {
  build: Rc<dyn Fn(Source<In>) -> Source<Out>>,
}

impl<In, Out> Clone for Flow<In, Out> {
  fn clone(&self) -> Self {
    Self { build: self.build.clone() }
  }
}

impl<T: 'static> Flow<T, T> {
  /// Creates the identity flow.
  #[must_use]
  pub fn new() -> Self {
    Self::from_fn(|source| source)
  }
}

impl<T: 'static> Default for Flow<T, T> {
  fn default() -> Self {
    Self::new()
  }
}

impl<In: 'static, Out: 'static> Flow<In, Out> {
  /// Creates a flow from a source transformation.
  #[must_use]
  pub fn from_fn<F>(build: F) -> Self
  where
    F: Fn(Source<In>) -> Source<Out> + 'static, {
    Self { build: Rc::new(build) }
  }

  /// Attaches the flow to `source`.
  #[must_use]
  pub fn apply(&self, source: Source<In>) -> Source<Out> {
    (self.build)(source)
  }

  /// Appends `next` after this flow.
  #[must_use]
  pub fn via<U: 'static>(&self, next: &Flow<Out, U>) -> Flow<In, U> {
    let head = self.clone();
    let next = next.clone();
    Flow::from_fn(move |source| next.apply(head.apply(source)))
  }

  fn extend<U, G>(self, stage: G) -> Flow<In, U>
  where
    U: 'static,
    G: Fn(Source<Out>) -> Source<U> + 'static, {
    Flow::from_fn(move |source| stage(self.apply(source)))
  }

  /// Appends a stage whose logic is built by `factory` on every application.
  #[must_use]
  pub fn then_with<U, L, F>(self, factory: F) -> Flow<In, U>
  where
    U: 'static,
    L: StageLogic<Out, U> + 'static,
    F: Fn() -> L + 'static, {
    self.extend(move |source| source.then(factory()))
  }

  /// Appends [`Source::map`].
  #[must_use]
  pub fn map<U, F>(self, func: F) -> Flow<In, U>
  where
    U: 'static,
    F: Fn(Out) -> U + Clone + 'static, {
    self.extend(move |source| source.map(func.clone()))
  }

  /// Appends [`Source::filter`].
  #[must_use]
  pub fn filter<F>(self, predicate: F) -> Flow<In, Out>
  where
    F: Fn(&Out) -> bool + Clone + 'static, {
    self.extend(move |source| source.filter(predicate.clone()))
  }

  /// Appends [`Source::take`].
  #[must_use]
  pub fn take(self, count: u64) -> Flow<In, Out> {
    self.extend(move |source| source.take(count))
  }

  /// Appends [`Source::skip`].
  #[must_use]
  pub fn skip(self, count: u64) -> Flow<In, Out> {
    self.extend(move |source| source.skip(count))
  }

  /// Appends [`Source::scan`].
  #[must_use]
  pub fn scan<F>(self, seed: Out, func: F) -> Flow<In, Out>
  where
    Out: Clone,
    F: Fn(Out, Out) -> Out + Clone + 'static, {
    self.extend(move |source| source.scan(seed.clone(), func.clone()))
  }

  /// Appends [`Source::flat_map`].
  #[must_use]
  pub fn flat_map<U, F>(self, func: F) -> Flow<In, U>
  where
    U: 'static,
    F: Fn(Out) -> Source<U> + Clone + 'static, {
    self.extend(move |source| source.flat_map(func.clone()))
  }

  /// Appends [`Source::log`].
  #[must_use]
  pub fn log(self, name: impl Into<Cow<'static, str>>) -> Flow<In, Out>
  where
    Out: Debug, {
    let name = name.into();
    self.extend(move |source| source.log(name.clone()))
  }
}
