use core::marker::PhantomData;

use super::{Source, StageContext, StageLogic};

/// Forwards upstream items and, on upstream completion, continues with a second source.
pub struct ContinueWithLogic<T, F> {
  continuation: Option<F>,
  switched:     bool,
  _pd:          PhantomData<fn(T)>,
}

impl<T, F> ContinueWithLogic<T, F>
where
  F: FnOnce() -> Source<T>,
{
  /// Creates the logic.
  #[must_use]
  pub const fn new(continuation: F) -> Self {
    Self { continuation: Some(continuation), switched: false, _pd: PhantomData }
  }
}

impl<T, F> StageLogic<T, T> for ContinueWithLogic<T, F>
where
  F: FnOnce() -> Source<T>,
{
  fn on_item(&mut self, item: T, ctx: &mut StageContext<T>) {
    ctx.forward(item);
  }

  fn on_request(&mut self, amount: u64, ctx: &mut StageContext<T>) {
    if self.switched {
      ctx.request_child(amount);
    } else {
      ctx.request_upstream(amount);
    }
  }

  fn on_upstream_complete(&mut self, ctx: &mut StageContext<T>) {
    let Some(continuation) = self.continuation.take() else {
      return;
    };
    self.switched = true;
    ctx.defer();
    ctx.attach_child(continuation());
  }

  fn on_child_complete(&mut self, ctx: &mut StageContext<T>) {
    ctx.resolve();
  }
}
