use alloc::rc::Rc;
use core::cell::RefCell;

use super::{
  BoxedSubscriber, DemandHandle, LOG_TARGET, SharedSubscription, StreamError, side_state::SideState,
  zip_subscription::ZipSubscription,
};

pub(crate) struct ZipCore<A, B> {
  downstream: DemandHandle<(A, B)>,
  state:      RefCell<ZipState<A, B>>,
}

struct ZipState<A, B> {
  left:       SideState<A>,
  right:      SideState<B>,
  terminated: bool,
}

impl<A: 'static, B: 'static> ZipCore<A, B> {
  pub(crate) fn new() -> Self {
    let state = ZipState { left: SideState::new(), right: SideState::new(), terminated: false };
    Self { downstream: DemandHandle::new(), state: RefCell::new(state) }
  }

  pub(crate) fn attach_downstream(self: &Rc<Self>, subscriber: BoxedSubscriber<(A, B)>) {
    self.downstream.attach(subscriber, Rc::new(ZipSubscription::new(self.clone())));
  }

  pub(crate) fn on_downstream_request(&self, amount: u64) {
    if self.state.borrow().terminated {
      return;
    }
    if let Err(error) = self.downstream.increase(amount) {
      self.fail(error);
      return;
    }
    self.pull();
  }

  pub(crate) fn on_downstream_cancel(&self) {
    let (left, right) = {
      let mut state = self.state.borrow_mut();
      if state.terminated {
        return;
      }
      state.terminated = true;
      (state.left.subscription.take(), state.right.subscription.take())
    };
    self.downstream.cancel();
    for subscription in [left, right].into_iter().flatten() {
      subscription.cancel();
    }
  }

  pub(crate) fn on_left_subscribe(&self, subscription: SharedSubscription) {
    if self.accept(subscription, |state| &mut state.left.subscription) {
      self.pull();
    }
  }

  pub(crate) fn on_right_subscribe(&self, subscription: SharedSubscription) {
    if self.accept(subscription, |state| &mut state.right.subscription) {
      self.pull();
    }
  }

  pub(crate) fn on_left_item(&self, item: A) {
    let pair = {
      let mut state = self.state.borrow_mut();
      if state.terminated {
        return;
      }
      state.left.outstanding = false;
      match state.right.queue.pop_front() {
        | Some(right) => Some((item, right)),
        | None => {
          if !state.right.done {
            state.left.queue.push_back(item);
          }
          None
        },
      }
    };
    self.emit(pair);
  }

  pub(crate) fn on_right_item(&self, item: B) {
    let pair = {
      let mut state = self.state.borrow_mut();
      if state.terminated {
        return;
      }
      state.right.outstanding = false;
      match state.left.queue.pop_front() {
        | Some(left) => Some((left, item)),
        | None => {
          if !state.left.done {
            state.right.queue.push_back(item);
          }
          None
        },
      }
    };
    self.emit(pair);
  }

  pub(crate) fn on_left_complete(&self) {
    self.state.borrow_mut().left.finish();
    self.complete_if_exhausted();
  }

  pub(crate) fn on_right_complete(&self) {
    self.state.borrow_mut().right.finish();
    self.complete_if_exhausted();
  }

  pub(crate) fn fail(&self, error: StreamError) {
    let (left, right) = {
      let mut state = self.state.borrow_mut();
      if state.terminated {
        return;
      }
      state.terminated = true;
      state.left.queue.clear();
      state.right.queue.clear();
      (state.left.subscription.take(), state.right.subscription.take())
    };
    tracing::trace!(target: LOG_TARGET, %error, "zip failed");
    for subscription in [left, right].into_iter().flatten() {
      subscription.cancel();
    }
    self.downstream.fail(error);
  }

  fn accept(
    &self,
    subscription: SharedSubscription,
    slot: impl FnOnce(&mut ZipState<A, B>) -> &mut Option<SharedSubscription>,
  ) -> bool {
    let accepted = {
      let mut state = self.state.borrow_mut();
      let terminated = state.terminated;
      let slot = slot(&mut *state);
      if terminated || slot.is_some() {
        false
      } else {
        *slot = Some(subscription.clone());
        true
      }
    };
    if !accepted {
      subscription.cancel();
    }
    accepted
  }

  fn emit(&self, pair: Option<(A, B)>) {
    if let Some(pair) = pair {
      let _ = self.downstream.deliver(pair);
    }
    if !self.complete_if_exhausted() {
      self.pull();
    }
  }

  fn pull(&self) {
    let pulls = {
      let mut state = self.state.borrow_mut();
      if state.terminated || !self.downstream.has_demand() {
        return;
      }
      (state.left.next_pull(), state.right.next_pull())
    };
    if let Some(left) = pulls.0 {
      left.request(1);
    }
    if let Some(right) = pulls.1 {
      right.request(1);
    }
  }

  fn complete_if_exhausted(&self) -> bool {
    let others = {
      let mut state = self.state.borrow_mut();
      if state.terminated {
        return true;
      }
      if !state.left.is_exhausted() && !state.right.is_exhausted() {
        return false;
      }
      state.terminated = true;
      state.left.queue.clear();
      state.right.queue.clear();
      (state.left.subscription.take(), state.right.subscription.take())
    };
    for subscription in [others.0, others.1].into_iter().flatten() {
      subscription.cancel();
    }
    self.downstream.complete();
    true
  }
}
