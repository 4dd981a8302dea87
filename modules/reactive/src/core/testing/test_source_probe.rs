use alloc::{boxed::Box, rc::Rc};
use core::cell::Cell;

use super::{BoxedSubscriber, Demand, DemandHandle, Publisher, Source, StreamError, Subscription};

/// Manually driven publisher that records the demand and cancellations it receives.
pub struct TestSourceProbe<T> {
  state: Rc<SourceProbeState<T>>,
}

struct SourceProbeState<T> {
  handle:    DemandHandle<T>,
  requested: Cell<u64>,
  requests:  Cell<usize>,
  cancels:   Cell<usize>,
}

struct ProbePublisher<T> {
  state: Rc<SourceProbeState<T>>,
}

struct ProbeSubscription<T> {
  state: Rc<SourceProbeState<T>>,
}

impl<T> Clone for TestSourceProbe<T> {
  fn clone(&self) -> Self {
    Self { state: self.state.clone() }
  }
}

impl<T: 'static> TestSourceProbe<T> {
  /// Creates a probe whose consumer has not subscribed yet.
  #[must_use]
  pub fn new() -> Self {
    let state = SourceProbeState {
      handle:    DemandHandle::new(),
      requested: Cell::new(0),
      requests:  Cell::new(0),
      cancels:   Cell::new(0),
    };
    Self { state: Rc::new(state) }
  }

  /// Returns the source side of the probe. Subscribe to it at most once.
  #[must_use]
  pub fn source(&self) -> Source<T> {
    Source::from_publisher(ProbePublisher { state: self.state.clone() })
  }

  /// Pushes one item to the consumer.
  ///
  /// # Errors
  ///
  /// Returns `StreamError::DemandExceeded` when the consumer has no outstanding demand.
  pub fn push(&self, item: T) -> Result<(), StreamError> {
    self.state.handle.deliver(item)
  }

  /// Completes the consumer.
  pub fn complete(&self) {
    self.state.handle.complete();
  }

  /// Fails the consumer.
  pub fn fail(&self, error: StreamError) {
    self.state.handle.fail(error);
  }

  /// Returns the cumulative amount requested by the consumer.
  #[must_use]
  pub fn requested(&self) -> u64 {
    self.state.requested.get()
  }

  /// Returns the number of `request` calls received.
  #[must_use]
  pub fn request_calls(&self) -> usize {
    self.state.requests.get()
  }

  /// Returns the demand that has been requested but not yet satisfied.
  #[must_use]
  pub fn outstanding(&self) -> Demand {
    self.state.handle.demand()
  }

  /// Returns the number of `cancel` calls received.
  #[must_use]
  pub fn cancel_count(&self) -> usize {
    self.state.cancels.get()
  }

  /// Returns `true` once the consumer cancelled.
  #[must_use]
  pub fn is_cancelled(&self) -> bool {
    self.state.handle.is_cancelled()
  }
}

impl<T: 'static> Default for TestSourceProbe<T> {
  fn default() -> Self {
    Self::new()
  }
}

impl<T: 'static> Publisher<T> for ProbePublisher<T> {
  fn subscribe(self: Box<Self>, subscriber: BoxedSubscriber<T>) {
    let subscription = Rc::new(ProbeSubscription { state: self.state.clone() });
    self.state.handle.attach(subscriber, subscription);
  }
}

impl<T> Subscription for ProbeSubscription<T> {
  fn request(&self, amount: u64) {
    self.state.requests.set(self.state.requests.get() + 1);
    self.state.requested.set(self.state.requested.get().saturating_add(amount));
    if let Err(error) = self.state.handle.increase(amount) {
      self.state.handle.fail(error);
    }
  }

  fn cancel(&self) {
    self.state.cancels.set(self.state.cancels.get() + 1);
    self.state.handle.cancel();
  }
}
