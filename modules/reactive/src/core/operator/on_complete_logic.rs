use core::marker::PhantomData;

use super::{StageContext, StageLogic, StreamError};

/// Forwards items and runs a hook before relaying upstream completion.
///
/// A failing hook fails downstream instead of completing it.
pub struct OnCompleteLogic<T, F> {
  hook: Option<F>,
  _pd:  PhantomData<fn(T)>,
}

impl<T, F> OnCompleteLogic<T, F>
where
  F: FnOnce() -> Result<(), StreamError>,
{
  /// Creates the logic.
  #[must_use]
  pub const fn new(hook: F) -> Self {
    Self { hook: Some(hook), _pd: PhantomData }
  }
}

impl<T, F> StageLogic<T, T> for OnCompleteLogic<T, F>
where
  F: FnOnce() -> Result<(), StreamError>,
{
  fn on_item(&mut self, item: T, ctx: &mut StageContext<T>) {
    ctx.forward(item);
  }

  fn on_upstream_complete(&mut self, ctx: &mut StageContext<T>) {
    let Some(hook) = self.hook.take() else {
      return;
    };
    if let Err(error) = hook() {
      ctx.fail(error);
    }
  }
}
