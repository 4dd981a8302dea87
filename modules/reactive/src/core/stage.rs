//! Stage publisher.

use alloc::boxed::Box;
use core::marker::PhantomData;

use super::{BoxedSubscriber, Publisher, Source, StageLogic, stage_core::StageCore, stage_inlet::StageInlet};

/// Publisher that runs `logic` over the items of an upstream source.
///
/// Subscribing wires the downstream first, so demand it issues from `on_subscribe` is held
/// until the upstream link exists, then subscribes the stage to the upstream.
pub struct Stage<In, Out, L> {
  upstream: Source<In>,
  logic:    L,
  _output:  PhantomData<fn() -> Out>,
}

impl<In, Out, L> Stage<In, Out, L>
where
  In: 'static,
  Out: 'static,
  L: StageLogic<In, Out> + 'static,
{
  /// Creates a stage over `upstream`.
  #[must_use]
  pub const fn new(upstream: Source<In>, logic: L) -> Self {
    Self { upstream, logic, _output: PhantomData }
  }
}

impl<In, Out, L> Publisher<Out> for Stage<In, Out, L>
where
  In: 'static,
  Out: 'static,
  L: StageLogic<In, Out> + 'static,
{
  fn subscribe(self: Box<Self>, subscriber: BoxedSubscriber<Out>) {
    let Self { upstream, logic, .. } = *self;
    let core = StageCore::new(logic);
    core.attach_downstream(subscriber);
    upstream.subscribe_boxed(Box::new(StageInlet::new(core)));
  }
}
