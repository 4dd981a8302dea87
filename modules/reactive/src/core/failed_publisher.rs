use alloc::{boxed::Box, rc::Rc};

use super::{BoxedSubscriber, DemandHandle, Publisher, StreamError, Subscription};

/// Publisher that fails its subscriber right after `on_subscribe`.
pub(crate) struct FailedPublisher {
  error: StreamError,
}

struct FailedSubscription<T> {
  handle: DemandHandle<T>,
}

impl FailedPublisher {
  pub(crate) const fn new(error: StreamError) -> Self {
    Self { error }
  }
}

impl<T: 'static> Publisher<T> for FailedPublisher {
  fn subscribe(self: Box<Self>, subscriber: BoxedSubscriber<T>) {
    let handle = DemandHandle::new();
    handle.attach(subscriber, Rc::new(FailedSubscription { handle: handle.clone() }));
    handle.fail(self.error);
  }
}

impl<T> Subscription for FailedSubscription<T> {
  fn request(&self, amount: u64) {
    if let Err(error) = self.handle.increase(amount) {
      self.handle.fail(error);
    }
  }

  fn cancel(&self) {
    self.handle.cancel();
  }
}
