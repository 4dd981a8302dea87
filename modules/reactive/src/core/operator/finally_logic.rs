use core::marker::PhantomData;

use super::{StageContext, StageLogic, StreamError};

/// Forwards items and runs a hook before relaying whichever terminal signal upstream sends.
///
/// An error returned by the hook replaces the relayed signal. The hook does not run when
/// downstream cancels.
pub struct FinallyLogic<T, F> {
  hook: Option<F>,
  _pd:  PhantomData<fn(T)>,
}

impl<T, F> FinallyLogic<T, F>
where
  F: FnOnce() -> Result<(), StreamError>,
{
  /// Creates the logic.
  #[must_use]
  pub const fn new(hook: F) -> Self {
    Self { hook: Some(hook), _pd: PhantomData }
  }

  fn run_hook(&mut self) -> Result<(), StreamError> {
    match self.hook.take() {
      | Some(hook) => hook(),
      | None => Ok(()),
    }
  }
}

impl<T, F> StageLogic<T, T> for FinallyLogic<T, F>
where
  F: FnOnce() -> Result<(), StreamError>,
{
  fn on_item(&mut self, item: T, ctx: &mut StageContext<T>) {
    ctx.forward(item);
  }

  fn on_upstream_complete(&mut self, ctx: &mut StageContext<T>) {
    if let Err(error) = self.run_hook() {
      ctx.fail(error);
    }
  }

  fn on_upstream_error(&mut self, error: StreamError, ctx: &mut StageContext<T>) {
    match self.run_hook() {
      | Ok(()) => ctx.fail(error),
      | Err(hook_error) => ctx.fail(hook_error),
    }
  }
}
