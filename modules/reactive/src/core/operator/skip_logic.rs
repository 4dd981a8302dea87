use super::{StageContext, StageLogic};

/// Drops the first `count` items and forwards the rest.
pub struct SkipLogic {
  remaining: u64,
}

impl SkipLogic {
  /// Creates the logic.
  #[must_use]
  pub const fn new(count: u64) -> Self {
    Self { remaining: count }
  }
}

impl<T> StageLogic<T, T> for SkipLogic {
  fn on_item(&mut self, item: T, ctx: &mut StageContext<T>) {
    if self.remaining > 0 {
      self.remaining -= 1;
      ctx.discard();
      return;
    }
    ctx.forward(item);
  }
}
