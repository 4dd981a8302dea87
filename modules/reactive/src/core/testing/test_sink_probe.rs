use alloc::{boxed::Box, rc::Rc, vec::Vec};
use core::cell::RefCell;

use super::{BoxedSubscriber, ProbeEvent, SharedSubscription, StreamError, Subscriber};

#[cfg(test)]
mod tests;

/// Recording subscriber with manual and scripted demand.
///
/// The probe keeps every signal it receives, including signals that arrive after a terminal
/// one, so tests can assert on protocol violations as well as on values.
pub struct TestSinkProbe<T> {
  state: Rc<RefCell<ProbeState<T>>>,
}

struct ProbeState<T> {
  subscription:     Option<SharedSubscription>,
  events:           Vec<ProbeEvent<T>>,
  initial_request:  u64,
  request_per_item: bool,
  cancel_after:     Option<usize>,
  requested:        u64,
  received:         usize,
}

struct ProbeSubscriber<T> {
  state: Rc<RefCell<ProbeState<T>>>,
}

impl<T> Clone for TestSinkProbe<T> {
  fn clone(&self) -> Self {
    Self { state: self.state.clone() }
  }
}

impl<T: 'static> TestSinkProbe<T> {
  /// Creates a probe that requests nothing on its own.
  #[must_use]
  pub fn new() -> Self {
    let state = ProbeState {
      subscription:     None,
      events:           Vec::new(),
      initial_request:  0,
      request_per_item: false,
      cancel_after:     None,
      requested:        0,
      received:         0,
    };
    Self { state: Rc::new(RefCell::new(state)) }
  }

  /// Creates a probe that requests `amount` items as soon as it is subscribed.
  #[must_use]
  pub fn with_initial_request(amount: u64) -> Self {
    let probe = Self::new();
    probe.state.borrow_mut().initial_request = amount;
    probe
  }

  /// Makes the probe request one more item after every received item.
  #[must_use]
  pub fn request_per_item(self) -> Self {
    self.state.borrow_mut().request_per_item = true;
    self
  }

  /// Makes the probe cancel right after it has received `count` items.
  #[must_use]
  pub fn cancel_after(self, count: usize) -> Self {
    self.state.borrow_mut().cancel_after = Some(count);
    self
  }

  /// Returns a subscriber that records into this probe.
  #[must_use]
  pub fn subscriber(&self) -> BoxedSubscriber<T> {
    Box::new(ProbeSubscriber { state: self.state.clone() })
  }

  /// Requests `amount` items through the recorded subscription.
  pub fn request(&self, amount: u64) {
    let subscription = {
      let mut state = self.state.borrow_mut();
      state.requested = state.requested.saturating_add(amount);
      state.subscription.clone()
    };
    if let Some(subscription) = subscription {
      subscription.request(amount);
    }
  }

  /// Cancels the recorded subscription.
  pub fn cancel(&self) {
    let subscription = self.state.borrow().subscription.clone();
    if let Some(subscription) = subscription {
      subscription.cancel();
    }
  }

  /// Returns all received items in order.
  #[must_use]
  pub fn items(&self) -> Vec<T>
  where
    T: Clone, {
    self
      .state
      .borrow()
      .events
      .iter()
      .filter_map(|event| match event {
        | ProbeEvent::Next(item) => Some(item.clone()),
        | _ => None,
      })
      .collect()
  }

  /// Returns all received signals in order.
  #[must_use]
  pub fn events(&self) -> Vec<ProbeEvent<T>>
  where
    T: Clone, {
    self.state.borrow().events.clone()
  }

  /// Returns the total amount requested by the probe.
  #[must_use]
  pub fn requested(&self) -> u64 {
    self.state.borrow().requested
  }

  /// Returns `true` once `on_subscribe` was received.
  #[must_use]
  pub fn is_subscribed(&self) -> bool {
    self.state.borrow().subscription.is_some()
  }

  /// Returns `true` once `on_complete` was received.
  #[must_use]
  pub fn is_completed(&self) -> bool {
    self.state.borrow().events.iter().any(|event| matches!(event, ProbeEvent::Completed))
  }

  /// Returns the first received error, if any.
  #[must_use]
  pub fn error(&self) -> Option<StreamError> {
    self.state.borrow().events.iter().find_map(|event| match event {
      | ProbeEvent::Failed(error) => Some(error.clone()),
      | _ => None,
    })
  }

  /// Returns the number of terminal signals received.
  #[must_use]
  pub fn terminal_count(&self) -> usize {
    self.state.borrow().events.iter().filter(|event| event.is_terminal()).count()
  }

  /// Returns the number of signals received after the first terminal signal.
  #[must_use]
  pub fn signals_after_terminal(&self) -> usize {
    let state = self.state.borrow();
    match state.events.iter().position(ProbeEvent::is_terminal) {
      | Some(index) => state.events.len() - index - 1,
      | None => 0,
    }
  }
}

impl<T: 'static> Default for TestSinkProbe<T> {
  fn default() -> Self {
    Self::new()
  }
}

impl<T> Subscriber<T> for ProbeSubscriber<T> {
  fn on_subscribe(&mut self, subscription: SharedSubscription) {
    let initial = {
      let mut state = self.state.borrow_mut();
      if state.subscription.is_some() {
        drop(state);
        // 二重購読は即座に取り消す
        subscription.cancel();
        return;
      }
      state.subscription = Some(subscription.clone());
      state.events.push(ProbeEvent::Subscribed);
      state.requested = state.requested.saturating_add(state.initial_request);
      state.initial_request
    };
    if initial > 0 {
      subscription.request(initial);
    }
  }

  fn on_next(&mut self, item: T) {
    let (subscription, request, cancel) = {
      let mut state = self.state.borrow_mut();
      state.events.push(ProbeEvent::Next(item));
      state.received += 1;
      let cancel = state.cancel_after == Some(state.received);
      let request = state.request_per_item && !cancel;
      if request {
        state.requested = state.requested.saturating_add(1);
      }
      (state.subscription.clone(), request, cancel)
    };
    let Some(subscription) = subscription else {
      return;
    };
    if cancel {
      subscription.cancel();
    } else if request {
      subscription.request(1);
    }
  }

  fn on_complete(&mut self) {
    self.state.borrow_mut().events.push(ProbeEvent::Completed);
  }

  fn on_error(&mut self, error: StreamError) {
    self.state.borrow_mut().events.push(ProbeEvent::Failed(error));
  }
}
