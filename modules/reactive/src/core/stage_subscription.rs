use alloc::rc::Rc;

use super::{StageLogic, Subscription, stage_core::StageCore};

/// Subscription a stage hands to its downstream.
pub(crate) struct StageSubscription<In, Out, L> {
  core: Rc<StageCore<In, Out, L>>,
}

impl<In, Out, L> StageSubscription<In, Out, L> {
  pub(crate) const fn new(core: Rc<StageCore<In, Out, L>>) -> Self {
    Self { core }
  }
}

impl<In, Out, L> Subscription for StageSubscription<In, Out, L>
where
  In: 'static,
  Out: 'static,
  L: StageLogic<In, Out> + 'static,
{
  fn request(&self, amount: u64) {
    self.core.on_downstream_request(amount);
  }

  fn cancel(&self) {
    self.core.on_downstream_cancel();
  }
}
