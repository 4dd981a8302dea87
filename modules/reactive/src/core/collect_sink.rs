use alloc::vec::Vec;

use super::{SharedSubscription, StreamCompletion, StreamError, Subscriber};

/// Subscriber that requests unbounded demand and gathers every item.
///
/// The subscription is held until the stream terminates, which keeps stages with deferred
/// items alive after their upstream finished.
pub(crate) struct CollectSink<T> {
  items:        Vec<T>,
  completion:   StreamCompletion<Vec<T>>,
  subscription: Option<SharedSubscription>,
}

impl<T> CollectSink<T> {
  pub(crate) const fn new(completion: StreamCompletion<Vec<T>>) -> Self {
    Self { items: Vec::new(), completion, subscription: None }
  }
}

impl<T> Subscriber<T> for CollectSink<T> {
  fn on_subscribe(&mut self, subscription: SharedSubscription) {
    if self.subscription.is_some() {
      subscription.cancel();
      return;
    }
    self.subscription = Some(subscription.clone());
    subscription.request(u64::MAX);
  }

  fn on_next(&mut self, item: T) {
    self.items.push(item);
  }

  fn on_complete(&mut self) {
    self.subscription = None;
    self.completion.complete(Ok(core::mem::take(&mut self.items)));
  }

  fn on_error(&mut self, error: StreamError) {
    self.subscription = None;
    self.items.clear();
    self.completion.complete(Err(error));
  }
}
