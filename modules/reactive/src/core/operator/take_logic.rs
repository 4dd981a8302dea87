use super::{StageContext, StageLogic};


/// Forwards the first `count` items, then completes and cancels upstream.
///
/// After the last permitted item one more item is pulled. Its arrival proves upstream is
/// longer than `count`, so upstream is cancelled; upstream completing instead ends the stage
/// without a cancel.
pub struct TakeLogic {
  remaining: u64,
}

impl TakeLogic {
  /// Creates the logic.
  #[must_use]
  pub const fn new(count: u64) -> Self {
    Self { remaining: count }
  }

  fn probe<T>(ctx: &mut StageContext<T>) {
    if ctx.upstream_outstanding() == 0 {
      ctx.request_upstream(1);
    }
  }
}

impl<T> StageLogic<T, T> for TakeLogic {
  fn on_start(&mut self, ctx: &mut StageContext<T>) {
    if self.remaining == 0 {
      Self::probe(ctx);
    }
  }

  fn on_item(&mut self, item: T, ctx: &mut StageContext<T>) {
    if self.remaining == 0 {
      ctx.resolve();
      ctx.complete();
      return;
    }
    self.remaining -= 1;
    ctx.forward(item);
    if self.remaining == 0 {
      Self::probe(ctx);
    }
  }

  fn on_request(&mut self, amount: u64, ctx: &mut StageContext<T>) {
    let wanted = self.remaining.saturating_sub(ctx.upstream_outstanding()).min(amount);
    ctx.request_upstream(wanted);
  }
}
