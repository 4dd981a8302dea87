use core::marker::PhantomData;

use super::{StageContext, StageLogic, StreamError};

/// Forwards items accepted by a fallible predicate; rejected items are replaced by a new pull.
pub struct FilterLogic<T, F> {
  predicate: F,
  _pd:       PhantomData<fn(T)>,
}

impl<T, F> FilterLogic<T, F>
where
  F: FnMut(&T) -> Result<bool, StreamError>,
{
  /// Creates the logic.
  #[must_use]
  pub const fn new(predicate: F) -> Self {
    Self { predicate, _pd: PhantomData }
  }
}

impl<T, F> StageLogic<T, T> for FilterLogic<T, F>
where
  F: FnMut(&T) -> Result<bool, StreamError>,
{
  fn on_item(&mut self, item: T, ctx: &mut StageContext<T>) {
    match (self.predicate)(&item) {
      | Ok(true) => ctx.forward(item),
      | Ok(false) => ctx.discard(),
      | Err(error) => ctx.fail(error),
    }
  }
}
