use alloc::rc::Rc;

use super::{SharedSubscription, StreamError, Subscriber, zip_core::ZipCore};

/// Subscriber for one side of a zip; `T` is that side's item type.
pub(crate) struct ZipInlet<A, B, T> {
  core:      Rc<ZipCore<A, B>>,
  subscribe: fn(&ZipCore<A, B>, SharedSubscription),
  push:      fn(&ZipCore<A, B>, T),
  complete:  fn(&ZipCore<A, B>),
}

impl<A: 'static, B: 'static> ZipInlet<A, B, A> {
  pub(crate) fn left(core: Rc<ZipCore<A, B>>) -> Self {
    Self {
      core,
      subscribe: ZipCore::on_left_subscribe,
      push: ZipCore::on_left_item,
      complete: ZipCore::on_left_complete,
    }
  }
}

impl<A: 'static, B: 'static> ZipInlet<A, B, B> {
  pub(crate) fn right(core: Rc<ZipCore<A, B>>) -> Self {
    Self {
      core,
      subscribe: ZipCore::on_right_subscribe,
      push: ZipCore::on_right_item,
      complete: ZipCore::on_right_complete,
    }
  }
}

impl<A: 'static, B: 'static, T> Subscriber<T> for ZipInlet<A, B, T> {
  fn on_subscribe(&mut self, subscription: SharedSubscription) {
    (self.subscribe)(&self.core, subscription);
  }

  fn on_next(&mut self, item: T) {
    (self.push)(&self.core, item);
  }

  fn on_complete(&mut self) {
    (self.complete)(&self.core);
  }

  fn on_error(&mut self, error: StreamError) {
    self.core.fail(error);
  }
}
