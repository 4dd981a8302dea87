use alloc::collections::VecDeque;
use core::marker::PhantomData;

use super::{Source, StageContext, StageLogic, StreamError};


/// Maps every item to a child source and relays the children one after another.
///
/// An upstream item stays in flight until its child completes, and the next upstream item is
/// pulled only when no child is active or queued, so upstream completion is relayed after the
/// last child drained.
pub struct FlatMapLogic<In, Out, F> {
  func:   F,
  queue:  VecDeque<Source<Out>>,
  active: bool,
  _pd:    PhantomData<fn(In)>,
}

impl<In, Out, F> FlatMapLogic<In, Out, F>
where
  F: FnMut(In) -> Result<Source<Out>, StreamError>,
{
  /// Creates the logic.
  #[must_use]
  pub const fn new(func: F) -> Self {
    Self { func, queue: VecDeque::new(), active: false, _pd: PhantomData }
  }

  fn pull_next(ctx: &mut StageContext<Out>) {
    if !ctx.is_upstream_done() && ctx.upstream_outstanding() == 0 {
      ctx.request_upstream(1);
    }
  }
}

impl<In, Out, F> StageLogic<In, Out> for FlatMapLogic<In, Out, F>
where
  F: FnMut(In) -> Result<Source<Out>, StreamError>,
{
  fn on_item(&mut self, item: In, ctx: &mut StageContext<Out>) {
    match (self.func)(item) {
      | Ok(child) if self.active => self.queue.push_back(child),
      | Ok(child) => {
        self.active = true;
        ctx.attach_child(child);
      },
      | Err(error) => ctx.fail(error),
    }
  }

  fn on_request(&mut self, amount: u64, ctx: &mut StageContext<Out>) {
    if ctx.has_child() {
      ctx.request_child(amount);
    } else if !self.active {
      Self::pull_next(ctx);
    }
  }

  fn on_child_complete(&mut self, ctx: &mut StageContext<Out>) {
    ctx.resolve();
    if let Some(next) = self.queue.pop_front() {
      ctx.attach_child(next);
      return;
    }
    self.active = false;
    if ctx.downstream_demand().has_demand() {
      Self::pull_next(ctx);
    }
  }
}
