use alloc::{collections::VecDeque, vec::Vec};

use super::{SharedSubscription, Source, stage_command::StageCommand};

/// Mutable bookkeeping of one stage.
///
/// Owned by the stage and mutated only on the single logical call path of its chain.
pub(crate) struct StageState<Out> {
  pub(crate) upstream:             Option<SharedSubscription>,
  pub(crate) child:                Option<SharedSubscription>,
  pub(crate) next_child:           Option<Source<Out>>,
  pub(crate) buffer:               VecDeque<Out>,
  pub(crate) in_flight:            usize,
  pub(crate) upstream_outstanding: u64,
  pub(crate) external:             Vec<StageCommand<Out>>,
  pub(crate) activated:            bool,
  pub(crate) upstream_done:        bool,
  pub(crate) completing:           bool,
  pub(crate) terminated:           bool,
  pub(crate) flushing:             bool,
  pub(crate) attaching:            bool,
  pub(crate) running:              bool,
  pub(crate) replay:               u64,
  pub(crate) cancel_deferred:      bool,
}

impl<Out> StageState<Out> {
  pub(crate) const fn new() -> Self {
    Self {
      upstream:             None,
      child:                None,
      next_child:           None,
      buffer:               VecDeque::new(),
      in_flight:            0,
      upstream_outstanding: 0,
      external:             Vec::new(),
      activated:            false,
      upstream_done:        false,
      completing:           false,
      terminated:           false,
      flushing:             false,
      attaching:            false,
      running:              false,
      replay:               0,
      cancel_deferred:      false,
    }
  }

  /// Returns `true` when downstream may be completed.
  pub(crate) fn is_settled(&self) -> bool {
    !self.terminated
      && !self.flushing
      && !self.attaching
      && (self.upstream_done || self.completing)
      && self.in_flight == 0
      && self.buffer.is_empty()
      && self.child.is_none()
      && self.next_child.is_none()
  }
}
