use super::{StageContext, StageLogic};

/// Emits only the final upstream item, once upstream completes.
pub struct LastLogic<T> {
  last: Option<T>,
}

impl<T> LastLogic<T> {
  /// Creates the logic.
  #[must_use]
  pub const fn new() -> Self {
    Self { last: None }
  }
}

impl<T> Default for LastLogic<T> {
  fn default() -> Self {
    Self::new()
  }
}

impl<T> StageLogic<T, T> for LastLogic<T> {
  fn on_item(&mut self, item: T, ctx: &mut StageContext<T>) {
    self.last = Some(item);
    ctx.discard();
  }

  fn on_upstream_complete(&mut self, ctx: &mut StageContext<T>) {
    if let Some(last) = self.last.take() {
      ctx.push(last);
    }
  }
}
