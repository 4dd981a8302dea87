//! Producer-owned link to one consumer.


use alloc::{collections::VecDeque, rc::Rc};
use core::cell::RefCell;

use super::{
  BoxedSubscriber, Demand, DemandTracker, LOG_TARGET, SharedSubscription, StreamError, TerminalState, signal::Signal,
};

/// Outstanding demand and terminal state of one consumer.
///
/// A producer owns the handle for the lifetime of the subscription and pushes every signal
/// through it. The handle enforces the consumer contract:
///
/// - items are only accepted while outstanding demand is positive,
/// - at most one terminal signal is delivered, and nothing follows it,
/// - after cancellation every operation is a no-op.
///
/// Signals raised while the consumer is still inside one of its own callbacks are queued and
/// delivered in order once that callback returns, so reentrant producers never recurse into a
/// consumer. The consumer reference is released when the link terminates.
pub struct DemandHandle<T> {
  inner: Rc<HandleInner<T>>,
}

struct HandleInner<T> {
  state:      RefCell<HandleState<T>>,
  subscriber: RefCell<Option<BoxedSubscriber<T>>>,
}

struct HandleState<T> {
  demand:      DemandTracker,
  terminal:    TerminalState,
  queue:       VecDeque<Signal<T>>,
  dispatching: bool,
}

impl<T> Clone for DemandHandle<T> {
  fn clone(&self) -> Self {
    Self { inner: self.inner.clone() }
  }
}

impl<T> DemandHandle<T> {
  /// Creates a handle without consumer and without demand.
  #[must_use]
  pub fn new() -> Self {
    let state = HandleState {
      demand:      DemandTracker::new(),
      terminal:    TerminalState::Active,
      queue:       VecDeque::new(),
      dispatching: false,
    };
    Self { inner: Rc::new(HandleInner { state: RefCell::new(state), subscriber: RefCell::new(None) }) }
  }

  /// Attaches the consumer and sends it `on_subscribe(subscription)`.
  ///
  /// `on_subscribe` always precedes signals pushed before the consumer was attached.
  pub fn attach(&self, subscriber: BoxedSubscriber<T>, subscription: SharedSubscription) {
    *self.inner.subscriber.borrow_mut() = Some(subscriber);
    self.inner.state.borrow_mut().queue.push_front(Signal::Subscribe(subscription));
    self.drain();
  }

  /// Adds `amount` to the outstanding demand.
  ///
  /// Once the link is terminal the request is ignored and the current demand is returned.
  ///
  /// # Errors
  ///
  /// Returns `StreamError::InvalidDemand` when `amount` is zero. The caller is expected to fail
  /// the consumer with that error.
  pub fn increase(&self, amount: u64) -> Result<Demand, StreamError> {
    let mut state = self.inner.state.borrow_mut();
    if state.terminal.is_terminal() {
      return Ok(state.demand.current());
    }
    state.demand.request(amount).inspect_err(|_| {
      tracing::warn!(target: LOG_TARGET, amount, "rejected non-positive demand request");
    })
  }

  /// Delivers one item, consuming one unit of demand.
  ///
  /// Items offered after the link terminated are dropped silently.
  ///
  /// # Errors
  ///
  /// Returns `StreamError::DemandExceeded` when no demand is outstanding; the item is dropped.
  pub fn deliver(&self, item: T) -> Result<(), StreamError> {
    {
      let mut state = self.inner.state.borrow_mut();
      if state.terminal.is_terminal() {
        tracing::trace!(target: LOG_TARGET, "dropped item for terminated consumer");
        return Ok(());
      }
      if !state.demand.consume_one() {
        tracing::warn!(target: LOG_TARGET, "producer delivered an item without outstanding demand");
        return Err(StreamError::DemandExceeded);
      }
      state.queue.push_back(Signal::Next(item));
    }
    self.drain();
    Ok(())
  }

  /// Completes the consumer. Only the first terminal call has an effect.
  pub fn complete(&self) {
    if !self.terminate(TerminalState::Completed, Signal::Complete) {
      return;
    }
    tracing::trace!(target: LOG_TARGET, "consumer completed");
    self.drain();
  }

  /// Fails the consumer. Only the first terminal call has an effect.
  pub fn fail(&self, error: StreamError) {
    if !self.terminate(TerminalState::Errored(error.clone()), Signal::Error(error)) {
      return;
    }
    tracing::trace!(target: LOG_TARGET, "consumer failed");
    self.drain();
  }

  /// Marks the link cancelled and drops undelivered signals. Idempotent.
  pub fn cancel(&self) {
    let dropped = {
      let mut state = self.inner.state.borrow_mut();
      if state.terminal.is_terminal() {
        return;
      }
      state.terminal = TerminalState::Cancelled;
      state.demand.reset();
      core::mem::take(&mut state.queue)
    };
    drop(dropped);
    tracing::trace!(target: LOG_TARGET, "consumer cancelled");
    self.release();
  }

  /// Returns the outstanding demand.
  #[must_use]
  pub fn demand(&self) -> Demand {
    self.inner.state.borrow().demand.current()
  }

  /// Returns `true` when an item may be delivered right now.
  #[must_use]
  pub fn has_demand(&self) -> bool {
    let state = self.inner.state.borrow();
    !state.terminal.is_terminal() && state.demand.has_demand()
  }

  /// Returns the terminal state of the link.
  #[must_use]
  pub fn state(&self) -> TerminalState {
    self.inner.state.borrow().terminal.clone()
  }

  /// Returns `true` once the link completed, failed, or was cancelled.
  #[must_use]
  pub fn is_terminal(&self) -> bool {
    self.inner.state.borrow().terminal.is_terminal()
  }

  /// Returns `true` once the consumer cancelled.
  #[must_use]
  pub fn is_cancelled(&self) -> bool {
    self.inner.state.borrow().terminal.is_cancelled()
  }

  fn terminate(&self, terminal: TerminalState, signal: Signal<T>) -> bool {
    let mut state = self.inner.state.borrow_mut();
    if state.terminal.is_terminal() {
      return false;
    }
    state.terminal = terminal;
    state.demand.reset();
    state.queue.push_back(signal);
    true
  }

  fn drain(&self) {
    {
      let mut state = self.inner.state.borrow_mut();
      if state.dispatching {
        return;
      }
      state.dispatching = true;
    }
    loop {
      let next = self.inner.state.borrow_mut().queue.pop_front();
      let Some(signal) = next else {
        break;
      };
      let mut slot = self.inner.subscriber.borrow_mut();
      let Some(subscriber) = slot.as_mut() else {
        // not attached yet: keep the signal until `attach`
        drop(slot);
        self.inner.state.borrow_mut().queue.push_front(signal);
        break;
      };
      match signal {
        | Signal::Subscribe(subscription) => subscriber.on_subscribe(subscription),
        | Signal::Next(item) => subscriber.on_next(item),
        | Signal::Complete => subscriber.on_complete(),
        | Signal::Error(error) => subscriber.on_error(error),
      }
    }
    let finished = {
      let mut state = self.inner.state.borrow_mut();
      state.dispatching = false;
      state.terminal.is_terminal() && state.queue.is_empty()
    };
    if finished {
      self.release();
    }
  }

  fn release(&self) {
    // while a callback is running the borrow fails and `drain` releases on its way out
    let released = match self.inner.subscriber.try_borrow_mut() {
      | Ok(mut slot) => slot.take(),
      | Err(_) => None,
    };
    drop(released);
  }
}

impl<T> Default for DemandHandle<T> {
  fn default() -> Self {
    Self::new()
  }
}
