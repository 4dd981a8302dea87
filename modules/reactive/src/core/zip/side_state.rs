use alloc::collections::VecDeque;

use super::SharedSubscription;

/// Bookkeeping of one zip input.
pub(crate) struct SideState<T> {
  pub(crate) subscription: Option<SharedSubscription>,
  pub(crate) queue:        VecDeque<T>,
  pub(crate) outstanding:  bool,
  pub(crate) done:         bool,
}

impl<T> SideState<T> {
  pub(crate) const fn new() -> Self {
    Self { subscription: None, queue: VecDeque::new(), outstanding: false, done: false }
  }

  /// Returns `true` once the side completed and every item it sent was paired.
  pub(crate) fn is_exhausted(&self) -> bool {
    self.done && self.queue.is_empty()
  }

  /// Marks one pull in progress and returns the link to pull from, if one is due.
  pub(crate) fn next_pull(&mut self) -> Option<SharedSubscription> {
    if self.done || self.outstanding || !self.queue.is_empty() {
      return None;
    }
    let subscription = self.subscription.clone()?;
    self.outstanding = true;
    Some(subscription)
  }

  pub(crate) fn finish(&mut self) {
    self.done = true;
    self.outstanding = false;
    self.subscription = None;
  }
}
