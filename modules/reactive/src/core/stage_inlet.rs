use alloc::rc::Rc;

use super::{SharedSubscription, StageLogic, StreamError, Subscriber, stage_core::StageCore};

/// Subscriber a stage hands to its upstream.
pub(crate) struct StageInlet<In, Out, L> {
  core: Rc<StageCore<In, Out, L>>,
}

impl<In, Out, L> StageInlet<In, Out, L> {
  pub(crate) const fn new(core: Rc<StageCore<In, Out, L>>) -> Self {
    Self { core }
  }
}

impl<In, Out, L> Subscriber<In> for StageInlet<In, Out, L>
where
  In: 'static,
  Out: 'static,
  L: StageLogic<In, Out> + 'static,
{
  fn on_subscribe(&mut self, subscription: SharedSubscription) {
    self.core.on_upstream_subscribe(subscription);
  }

  fn on_next(&mut self, item: In) {
    self.core.on_upstream_item(item);
  }

  fn on_complete(&mut self) {
    self.core.on_upstream_complete();
  }

  fn on_error(&mut self, error: StreamError) {
    self.core.on_upstream_error(error);
  }
}
