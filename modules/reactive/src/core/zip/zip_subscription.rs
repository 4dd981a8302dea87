use alloc::rc::Rc;

use super::{Subscription, zip_core::ZipCore};

/// Subscription a zip hands to its downstream.
pub(crate) struct ZipSubscription<A, B> {
  core: Rc<ZipCore<A, B>>,
}

impl<A, B> ZipSubscription<A, B> {
  pub(crate) const fn new(core: Rc<ZipCore<A, B>>) -> Self {
    Self { core }
  }
}

impl<A: 'static, B: 'static> Subscription for ZipSubscription<A, B> {
  fn request(&self, amount: u64) {
    self.core.on_downstream_request(amount);
  }

  fn cancel(&self) {
    self.core.on_downstream_cancel();
  }
}
