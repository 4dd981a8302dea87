use core::marker::PhantomData;

use super::{StageContext, StageLogic};

/// Gathers every item into one collection emitted on upstream completion.
pub struct ToCollectionLogic<T, C> {
  collection: Option<C>,
  _pd:        PhantomData<fn(T)>,
}

impl<T, C> ToCollectionLogic<T, C>
where
  C: Default + Extend<T>,
{
  /// Creates the logic with an empty collection.
  #[must_use]
  pub fn new() -> Self {
    Self { collection: Some(C::default()), _pd: PhantomData }
  }
}

impl<T, C> Default for ToCollectionLogic<T, C>
where
  C: Default + Extend<T>,
{
  fn default() -> Self {
    Self::new()
  }
}

impl<T, C> StageLogic<T, C> for ToCollectionLogic<T, C>
where
  C: Default + Extend<T>,
{
  fn on_item(&mut self, item: T, ctx: &mut StageContext<C>) {
    if let Some(collection) = self.collection.as_mut() {
      collection.extend(core::iter::once(item));
    }
    ctx.discard();
  }

  fn on_upstream_complete(&mut self, ctx: &mut StageContext<C>) {
    if let Some(collection) = self.collection.take() {
      ctx.push(collection);
    }
  }
}
