use alloc::boxed::Box;

use super::BoxedSubscriber;

/// Producer side of the subscription protocol.
///
/// Publishers in this crate are single-subscription: subscribing consumes the publisher.
/// Repeatable subscription is provided by [`Pipeline`](super::Pipeline), which rebuilds its
/// head for each subscriber.
pub trait Publisher<T> {
  /// Attaches `subscriber`, which receives `on_subscribe` before any other signal.
  fn subscribe(self: Box<Self>, subscriber: BoxedSubscriber<T>);
}
