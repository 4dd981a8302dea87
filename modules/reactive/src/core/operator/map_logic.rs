use core::marker::PhantomData;

use super::{StageContext, StageLogic, StreamError};

/// Transforms every item with a fallible function.
pub struct MapLogic<In, Out, F> {
  func: F,
  _pd:  PhantomData<fn(In) -> Out>,
}

impl<In, Out, F> MapLogic<In, Out, F>
where
  F: FnMut(In) -> Result<Out, StreamError>,
{
  /// Creates the logic.
  #[must_use]
  pub const fn new(func: F) -> Self {
    Self { func, _pd: PhantomData }
  }
}

impl<In, Out, F> StageLogic<In, Out> for MapLogic<In, Out, F>
where
  F: FnMut(In) -> Result<Out, StreamError>,
{
  fn on_item(&mut self, item: In, ctx: &mut StageContext<Out>) {
    match (self.func)(item) {
      | Ok(output) => ctx.forward(output),
      | Err(error) => ctx.fail(error),
    }
  }
}
