//! Iterative driver for eager sources.

#[cfg(test)]
mod tests;

use alloc::{boxed::Box, rc::Rc};
use core::cell::{Cell, RefCell};

use super::{BoxedSubscriber, DemandHandle, Publisher, PullSource, Subscription};

/// Publisher that satisfies demand from a [`PullSource`].
///
/// Demand is served by an explicit loop. A request issued from inside the loop (a consumer
/// asking for more while handling an item) only adds demand and returns; the running loop
/// picks it up. Arbitrarily large demand therefore never grows the call stack.
pub struct PullDriver<S> {
  source: S,
}

struct PullSubscription<S: PullSource> {
  handle:   DemandHandle<S::Item>,
  source:   RefCell<S>,
  draining: Cell<bool>,
}

impl<S> PullDriver<S>
where
  S: PullSource + 'static,
{
  /// Creates a driver for `source`.
  #[must_use]
  pub const fn new(source: S) -> Self {
    Self { source }
  }
}

impl<S> Publisher<S::Item> for PullDriver<S>
where
  S: PullSource + 'static,
  S::Item: 'static,
{
  fn subscribe(self: Box<Self>, subscriber: BoxedSubscriber<S::Item>) {
    let subscription = Rc::new(PullSubscription {
      handle:   DemandHandle::new(),
      source:   RefCell::new(self.source),
      draining: Cell::new(false),
    });
    // on_subscribe 内の要求は需要の加算のみとし、配送は直後のループで行う
    subscription.draining.set(true);
    subscription.handle.attach(subscriber, subscription.clone());
    subscription.draining.set(false);
    subscription.drain();
  }
}

impl<S: PullSource> PullSubscription<S> {
  fn drain(&self) {
    if self.draining.replace(true) {
      return;
    }
    while self.handle.has_demand() {
      let next = {
        let mut source = self.source.borrow_mut();
        if source.has_more() { Some(source.take_one()) } else { None }
      };
      match next {
        | Some(Ok(item)) => {
          let _ = self.handle.deliver(item);
        },
        | Some(Err(error)) => {
          self.handle.fail(error);
          break;
        },
        | None => break,
      }
    }
    self.complete_if_exhausted();
    self.draining.set(false);
  }

  fn complete_if_exhausted(&self) {
    if self.handle.is_terminal() {
      return;
    }
    let exhausted = !self.source.borrow_mut().has_more();
    if exhausted {
      self.handle.complete();
    }
  }
}

impl<S: PullSource> Subscription for PullSubscription<S> {
  fn request(&self, amount: u64) {
    if let Err(error) = self.handle.increase(amount) {
      self.handle.fail(error);
      return;
    }
    self.drain();
  }

  fn cancel(&self) {
    self.handle.cancel();
  }
}
