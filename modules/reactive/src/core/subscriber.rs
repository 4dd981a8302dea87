use alloc::boxed::Box;

use super::{SharedSubscription, StreamError};

/// Boxed subscriber handed to [`Publisher::subscribe`](super::Publisher::subscribe).
pub type BoxedSubscriber<T> = Box<dyn Subscriber<T>>;

/// Consumer side of the subscription protocol.
///
/// `on_subscribe` arrives exactly once before any other signal. `on_next` arrives at most as
/// many times as the subscriber has requested, and at most one of `on_complete` / `on_error`
/// ends the subscription.
pub trait Subscriber<T> {
  /// Receives the link used to request items and to cancel.
  fn on_subscribe(&mut self, subscription: SharedSubscription);

  /// Receives one item.
  fn on_next(&mut self, item: T);

  /// Receives successful completion.
  fn on_complete(&mut self);

  /// Receives a terminal failure.
  fn on_error(&mut self, error: StreamError);
}

impl<T, S> Subscriber<T> for Box<S>
where
  S: Subscriber<T> + ?Sized,
{
  fn on_subscribe(&mut self, subscription: SharedSubscription) {
    (**self).on_subscribe(subscription);
  }

  fn on_next(&mut self, item: T) {
    (**self).on_next(item);
  }

  fn on_complete(&mut self) {
    (**self).on_complete();
  }

  fn on_error(&mut self, error: StreamError) {
    (**self).on_error(error);
  }
}
