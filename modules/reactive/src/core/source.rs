//! Composable source façade.

use alloc::{borrow::Cow, boxed::Box, vec::Vec};
use core::fmt::Debug;

use super::{
  AccumulateLogic, AccumulateSeed, BoxedSubscriber, Completion, ContinueWithLogic, CounterPullSource, DelegateLogic,
  DrainConfig, DrainSink, FilterLogic, FinallyLogic, FlatMapLogic, Flow, IterPullSource, LastLogic, LogLogic, MapLogic,
  OnCompleteLogic, Publisher, PullDriver, PullSource, SkipLogic, Stage, StageLogic, StreamCompletion, StreamError,
  Subscriber, SubstituteLogic, TakeLogic, ToCollectionLogic, Zip, collect_sink::CollectSink,
  failed_publisher::FailedPublisher,
};

#[cfg(test)]
mod tests;

/// Single-subscription producer of `T` items with a fluent operator chain.
///
/// Every operator consumes the source and returns a new one whose publisher wraps the old
/// chain; nothing runs until a subscriber is attached.
pub struct Source<T> {
  publisher: Box<dyn Publisher<T>>,
}

impl<T: 'static> Source<T> {
  /// Wraps a collaborator publisher.
  #[must_use]
  pub fn from_publisher<P>(publisher: P) -> Self
  where
    P: Publisher<T> + 'static, {
    Self { publisher: Box::new(publisher) }
  }

  /// Creates a source driven from a pull capability.
  #[must_use]
  pub fn from_pull<S>(source: S) -> Self
  where
    S: PullSource<Item = T> + 'static, {
    Self::from_publisher(PullDriver::new(source))
  }

  /// Creates a source that completes right away.
  #[must_use]
  pub fn empty() -> Self {
    Self::from_iterator(Vec::new())
  }

  /// Creates a source emitting a single item.
  #[must_use]
  pub fn single(value: T) -> Self {
    Self::from_iterator(Some(value))
  }

  /// Creates a source emitting the array elements in order.
  #[must_use]
  pub fn from_array<const N: usize>(values: [T; N]) -> Self {
    Self::from_iterator(values)
  }

  /// Creates a source emitting every item of `values`.
  #[must_use]
  pub fn from_iterator<I>(values: I) -> Self
  where
    I: IntoIterator<Item = T>,
    I::IntoIter: 'static, {
    Self::from_pull(IterPullSource::new(values))
  }

  /// Creates a source that fails right after subscription.
  #[must_use]
  pub fn failed(error: StreamError) -> Self {
    Self::from_publisher(FailedPublisher::new(error))
  }

  /// Relays the sources one after another.
  #[must_use]
  pub fn concat_all<I>(sources: I) -> Self
  where
    I: IntoIterator<Item = Source<T>>,
    I::IntoIter: 'static, {
    Source::from_iterator(sources).flatten()
  }

  /// Attaches `subscriber` and starts the chain.
  pub fn subscribe<S>(self, subscriber: S)
  where
    S: Subscriber<T> + 'static, {
    self.subscribe_boxed(Box::new(subscriber));
  }

  /// Attaches an already boxed subscriber.
  pub fn subscribe_boxed(self, subscriber: BoxedSubscriber<T>) {
    self.publisher.subscribe(subscriber);
  }

  /// Appends a stage running `logic`.
  #[must_use]
  pub fn then<U, L>(self, logic: L) -> Source<U>
  where
    U: 'static,
    L: StageLogic<T, U> + 'static, {
    Source::from_publisher(Stage::new(self, logic))
  }

  /// Appends every stage of `flow`.
  #[must_use]
  pub fn via<U: 'static>(self, flow: &Flow<T, U>) -> Source<U> {
    flow.apply(self)
  }

  /// Transforms every item.
  #[must_use]
  pub fn map<U, F>(self, mut func: F) -> Source<U>
  where
    U: 'static,
    F: FnMut(T) -> U + 'static, {
    self.then(MapLogic::new(move |value| Ok(func(value))))
  }

  /// Transforms every item with a fallible function; an error fails the stream.
  #[must_use]
  pub fn try_map<U, F>(self, func: F) -> Source<U>
  where
    U: 'static,
    F: FnMut(T) -> Result<U, StreamError> + 'static, {
    self.then(MapLogic::new(func))
  }

  /// Keeps the items matching `predicate`.
  #[must_use]
  pub fn filter<F>(self, mut predicate: F) -> Source<T>
  where
    F: FnMut(&T) -> bool + 'static, {
    self.then(FilterLogic::new(move |value: &T| Ok(predicate(value))))
  }

  /// Keeps the items matching a fallible predicate; an error fails the stream.
  #[must_use]
  pub fn try_filter<F>(self, predicate: F) -> Source<T>
  where
    F: FnMut(&T) -> Result<bool, StreamError> + 'static, {
    self.then(FilterLogic::new(predicate))
  }

  /// Emits at most `count` items.
  #[must_use]
  pub fn take(self, count: u64) -> Source<T> {
    self.then(TakeLogic::new(count))
  }

  /// Drops the first `count` items.
  #[must_use]
  pub fn skip(self, count: u64) -> Source<T> {
    self.then(SkipLogic::new(count))
  }

  /// Emits only the last item, on completion.
  #[must_use]
  pub fn last(self) -> Source<T> {
    self.then(LastLogic::new())
  }

  /// Emits the running fold of the items, starting from `seed`.
  #[must_use]
  pub fn accumulate<F>(self, seed: AccumulateSeed<T>, func: F) -> Source<T>
  where
    T: Clone,
    F: FnMut(T, T) -> Result<T, StreamError> + 'static, {
    self.then(AccumulateLogic::new(seed, func))
  }

  /// Infallible [`Source::accumulate`] with a present seed.
  #[must_use]
  pub fn scan<F>(self, seed: T, mut func: F) -> Source<T>
  where
    T: Clone,
    F: FnMut(T, T) -> T + 'static, {
    self.accumulate(AccumulateSeed::Value(seed), move |acc, value| Ok(func(acc, value)))
  }

  /// Emits all items as one collection on completion.
  #[must_use]
  pub fn to_collection<C>(self) -> Source<C>
  where
    C: Default + Extend<T> + 'static, {
    self.then(ToCollectionLogic::<T, C>::new())
  }

  /// Maps every item to a source and relays those sources in order.
  #[must_use]
  pub fn flat_map<U, F>(self, mut func: F) -> Source<U>
  where
    U: 'static,
    F: FnMut(T) -> Source<U> + 'static, {
    self.then(FlatMapLogic::new(move |value| Ok(func(value))))
  }

  /// Fallible [`Source::flat_map`].
  #[must_use]
  pub fn try_flat_map<U, F>(self, func: F) -> Source<U>
  where
    U: 'static,
    F: FnMut(T) -> Result<Source<U>, StreamError> + 'static, {
    self.then(FlatMapLogic::new(func))
  }

  /// Relays `other` after this source completes.
  #[must_use]
  pub fn concat(self, other: Source<T>) -> Source<T> {
    Source::concat_all([self, other])
  }

  /// Pairs items of this source with items of `other`.
  #[must_use]
  pub fn zip<U: 'static>(self, other: Source<U>) -> Source<(T, U)> {
    Source::from_publisher(Zip::new(self, other))
  }

  /// Runs `hook` when upstream completes, before completion is relayed.
  #[must_use]
  pub fn on_complete<F>(self, hook: F) -> Source<T>
  where
    F: FnOnce() -> Result<(), StreamError> + 'static, {
    self.then(OnCompleteLogic::new(hook))
  }

  /// Relays the source built by `continuation` once this source completes.
  #[must_use]
  pub fn continue_with<F>(self, continuation: F) -> Source<T>
  where
    F: FnOnce() -> Source<T> + 'static, {
    self.then(ContinueWithLogic::new(continuation))
  }

  /// Swallows every item and relays the source built by `factory` once this source completes.
  #[must_use]
  pub fn substitute<U, F>(self, factory: F) -> Source<U>
  where
    U: 'static,
    F: FnOnce() -> Source<U> + 'static, {
    self.then(SubstituteLogic::new(factory))
  }

  /// Runs `hook` on upstream completion or failure, before the signal is relayed.
  #[must_use]
  pub fn run_finally<F>(self, hook: F) -> Source<T>
  where
    F: FnOnce() -> Result<(), StreamError> + 'static, {
    self.then(FinallyLogic::new(hook))
  }

  /// Mirrors every item and the termination to `target`.
  #[must_use]
  pub fn delegate<S>(self, target: S) -> Source<T>
  where
    T: Clone,
    S: Subscriber<T> + 'static, {
    self.then(DelegateLogic::new(Box::new(target)))
  }

  /// Records every signal as a `debug` event tagged with `name`.
  #[must_use]
  pub fn log(self, name: impl Into<Cow<'static, str>>) -> Source<T>
  where
    T: Debug, {
    self.then(LogLogic::new(name))
  }

  /// Requests `amount` items once and discards everything that arrives.
  pub fn start(self, amount: u64) -> StreamCompletion<()> {
    self.run_with(DrainConfig::new(amount, false))
  }

  /// Pulls the stream to completion one item at a time.
  pub fn drain(self) -> StreamCompletion<()> {
    self.run_with(DrainConfig::default())
  }

  /// Runs the stream into a [`DrainSink`] configured by `config`.
  pub fn run_with(self, config: DrainConfig) -> StreamCompletion<()> {
    let sink = DrainSink::new(config);
    let completion = sink.completion();
    self.subscribe(sink);
    completion
  }

  /// Runs the stream with unbounded demand and gathers its items.
  pub fn collect(self) -> StreamCompletion<Vec<T>> {
    let completion = StreamCompletion::new();
    self.subscribe(CollectSink::new(completion.clone()));
    completion
  }

  /// Runs the stream with unbounded demand and returns its items.
  ///
  /// # Errors
  ///
  /// Returns the stream error, or `StreamError::WouldBlock` when the stream did not terminate
  /// before this call returned.
  pub fn collect_values(self) -> Result<Vec<T>, StreamError> {
    Completion::from(self.collect().try_take()).into_result()
  }
}

impl Source<u64> {
  /// Creates an infinite counter starting at `start`.
  #[must_use]
  pub fn counter(start: u64) -> Self {
    Self::from_pull(CounterPullSource::new(start))
  }
}

impl Source<i32> {
  /// Creates a source emitting `start..end`.
  #[must_use]
  pub fn range(start: i32, end: i32) -> Self {
    Self::from_iterator(start..end)
  }
}

impl<T: 'static> Source<Source<T>> {
  /// Relays the inner sources one after another.
  #[must_use]
  pub fn flatten(self) -> Source<T> {
    self.try_flat_map(Ok)
  }
}
