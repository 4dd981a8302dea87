use core::marker::PhantomData;

use super::{Source, StageContext, StageLogic};

/// Swallows upstream items and, on upstream completion, relays the source built by `factory`.
///
/// Upstream is still pulled one item at a time so that it runs to completion. An upstream
/// error is relayed without calling `factory`.
pub struct SubstituteLogic<In, Out, F> {
  factory:  Option<F>,
  switched: bool,
  _pd:      PhantomData<fn(In) -> Out>,
}

impl<In, Out, F> SubstituteLogic<In, Out, F>
where
  F: FnOnce() -> Source<Out>,
{
  /// Creates the logic.
  #[must_use]
  pub const fn new(factory: F) -> Self {
    Self { factory: Some(factory), switched: false, _pd: PhantomData }
  }
}

impl<In, Out, F> StageLogic<In, Out> for SubstituteLogic<In, Out, F>
where
  F: FnOnce() -> Source<Out>,
{
  fn on_item(&mut self, _item: In, ctx: &mut StageContext<Out>) {
    ctx.discard();
  }

  fn on_request(&mut self, amount: u64, ctx: &mut StageContext<Out>) {
    if self.switched {
      ctx.request_child(amount);
    } else if ctx.upstream_outstanding() == 0 {
      ctx.request_upstream(1);
    }
  }

  fn on_upstream_complete(&mut self, ctx: &mut StageContext<Out>) {
    let Some(factory) = self.factory.take() else {
      return;
    };
    self.switched = true;
    ctx.defer();
    ctx.attach_child(factory());
  }

  fn on_child_complete(&mut self, ctx: &mut StageContext<Out>) {
    ctx.resolve();
  }
}
