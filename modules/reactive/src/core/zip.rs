//! Pairwise fan-in of two sources.

use alloc::{boxed::Box, rc::Rc};

// Bridge imports for children
use super::{
  BoxedSubscriber, DemandHandle, LOG_TARGET, Publisher, SharedSubscription, Source, StreamError, Subscriber,
  Subscription,
};


mod side_state;
mod zip_core;
mod zip_inlet;
mod zip_subscription;

use zip_core::ZipCore;
use zip_inlet::ZipInlet;

/// Publisher emitting `(left, right)` pairs in arrival order of both sides.
///
/// Each side is pulled one item at a time while downstream has demand, so an infinite side
/// never runs ahead of the other. The zip completes as soon as one side has completed with
/// no unpaired item left, cancelling the other side. An error from either side cancels the
/// other and is relayed.
pub struct Zip<A, B> {
  left:  Source<A>,
  right: Source<B>,
}

impl<A, B> Zip<A, B>
where
  A: 'static,
  B: 'static,
{
  /// Creates the publisher.
  #[must_use]
  pub const fn new(left: Source<A>, right: Source<B>) -> Self {
    Self { left, right }
  }
}

impl<A, B> Publisher<(A, B)> for Zip<A, B>
where
  A: 'static,
  B: 'static,
{
  fn subscribe(self: Box<Self>, subscriber: BoxedSubscriber<(A, B)>) {
    let Self { left, right } = *self;
    let core = Rc::new(ZipCore::new());
    core.attach_downstream(subscriber);
    left.subscribe_boxed(Box::new(ZipInlet::left(core.clone())));
    right.subscribe_boxed(Box::new(ZipInlet::right(core)));
  }
}
