use alloc::rc::Weak;

use super::{SharedSubscription, StageLogic, StreamError, Subscriber, stage_core::StageCore};

/// Subscriber a stage hands to a child source. Child items bypass the logic.
pub(crate) struct StageChildInlet<In, Out, L> {
  core: Weak<StageCore<In, Out, L>>,
}

impl<In, Out, L> StageChildInlet<In, Out, L> {
  pub(crate) const fn new(core: Weak<StageCore<In, Out, L>>) -> Self {
    Self { core }
  }
}

impl<In, Out, L> Subscriber<Out> for StageChildInlet<In, Out, L>
where
  In: 'static,
  Out: 'static,
  L: StageLogic<In, Out> + 'static,
{
  fn on_subscribe(&mut self, subscription: SharedSubscription) {
    match self.core.upgrade() {
      | Some(core) => core.on_child_subscribe(subscription),
      | None => subscription.cancel(),
    }
  }

  fn on_next(&mut self, item: Out) {
    if let Some(core) = self.core.upgrade() {
      core.on_child_item(item);
    }
  }

  fn on_complete(&mut self) {
    if let Some(core) = self.core.upgrade() {
      core.on_child_complete();
    }
  }

  fn on_error(&mut self, error: StreamError) {
    if let Some(core) = self.core.upgrade() {
      core.on_child_error(error);
    }
  }
}
