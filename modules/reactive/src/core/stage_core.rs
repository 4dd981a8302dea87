//! Demand accounting shared by every stage.


use alloc::{
  boxed::Box,
  rc::{Rc, Weak},
  vec::Vec,
};
use core::{cell::RefCell, marker::PhantomData};

use super::{
  BoxedSubscriber, Demand, DemandHandle, LOG_TARGET, SharedSubscription, Source, StageContext, StageLogic, StreamError,
  resolve_target::ResolveTarget, stage_child_inlet::StageChildInlet, stage_command::StageCommand,
  stage_state::StageState, stage_subscription::StageSubscription,
};

/// Runtime of one subscribed stage.
///
/// Owns the logic, the in-flight counter and the output buffer. Logic callbacks only record
/// commands; the core applies them after the callback returns. Outgoing calls that re-enter
/// the core (a downstream requesting from `on_next`, a synchronous child completing inside
/// `subscribe`) are absorbed by the `flushing` and `attaching` guards and picked up by the
/// running loop. Requests and cancellations that arrive while a callback still holds the logic
/// (a mirror or a user closure signalling this stage's downstream link) are recorded and
/// replayed once it returns.
pub(crate) struct StageCore<In, Out, L> {
  self_ref:   Weak<Self>,
  logic:      RefCell<L>,
  state:      RefCell<StageState<Out>>,
  downstream: DemandHandle<Out>,
  _input:     PhantomData<fn(In)>,
}

impl<In, Out, L> StageCore<In, Out, L>
where
  In: 'static,
  Out: 'static,
  L: StageLogic<In, Out> + 'static,
{
  pub(crate) fn new(logic: L) -> Rc<Self> {
    Rc::new_cyclic(|self_ref| Self {
      self_ref:   self_ref.clone(),
      logic:      RefCell::new(logic),
      state:      RefCell::new(StageState::new()),
      downstream: DemandHandle::new(),
      _input:     PhantomData,
    })
  }

  pub(crate) fn attach_downstream(self: &Rc<Self>, subscriber: BoxedSubscriber<Out>) {
    self.downstream.attach(subscriber, Rc::new(StageSubscription::new(self.clone())));
  }

  pub(crate) fn on_downstream_request(&self, amount: u64) {
    let before = {
      let state = self.state.borrow();
      if state.terminated {
        return;
      }
      self.unfilled_demand(&state)
    };
    if let Err(error) = self.downstream.increase(amount) {
      self.terminate_with(error);
      return;
    }
    let (activated, added) = {
      let state = self.state.borrow();
      (state.activated, additional_demand(before, self.unfilled_demand(&state)))
    };
    if !activated {
      // 上流が接続された時点でまとめて要求する
      return;
    }
    {
      let mut state = self.state.borrow_mut();
      if state.running {
        // ロジック実行中の要求はコールバック終了後に再生する
        state.replay = state.replay.saturating_add(added);
        return;
      }
    }
    self.flush();
    if added > 0 {
      self.run(|logic, ctx| logic.on_request(added, ctx));
    }
    self.settle();
  }

  pub(crate) fn on_downstream_cancel(&self) {
    let (upstream, child) = {
      let mut state = self.state.borrow_mut();
      if state.terminated {
        return;
      }
      state.terminated = true;
      state.buffer.clear();
      state.next_child = None;
      (state.upstream.take(), state.child.take())
    };
    self.downstream.cancel();
    match self.logic.try_borrow_mut() {
      | Ok(mut logic) => logic.on_cancel(),
      | Err(_) => self.state.borrow_mut().cancel_deferred = true,
    }
    if let Some(upstream) = upstream {
      upstream.cancel();
    }
    if let Some(child) = child {
      child.cancel();
    }
  }

  pub(crate) fn on_upstream_subscribe(&self, subscription: SharedSubscription) {
    let accepted = {
      let mut state = self.state.borrow_mut();
      if state.terminated || state.activated {
        false
      } else {
        state.upstream = Some(subscription.clone());
        state.activated = true;
        true
      }
    };
    if !accepted {
      subscription.cancel();
      return;
    }
    self.run(|logic, ctx| logic.on_start(ctx));
    let pending = {
      let state = self.state.borrow();
      if state.terminated { 0 } else { self.unfilled_demand(&state).as_request() }
    };
    if pending > 0 {
      self.run(|logic, ctx| logic.on_request(pending, ctx));
    }
  }

  pub(crate) fn on_upstream_item(&self, item: In) {
    {
      let mut state = self.state.borrow_mut();
      if state.terminated || state.upstream.is_none() {
        return;
      }
      state.in_flight += 1;
      if state.upstream_outstanding != u64::MAX {
        state.upstream_outstanding = state.upstream_outstanding.saturating_sub(1);
      }
    }
    self.run(|logic, ctx| logic.on_item(item, ctx));
  }

  pub(crate) fn on_upstream_complete(&self) {
    if !self.detach_upstream() {
      return;
    }
    self.run(|logic, ctx| logic.on_upstream_complete(ctx));
  }

  pub(crate) fn on_upstream_error(&self, error: StreamError) {
    if !self.detach_upstream() {
      return;
    }
    self.run(|logic, ctx| logic.on_upstream_error(error, ctx));
  }

  pub(crate) fn on_child_subscribe(&self, subscription: SharedSubscription) {
    let demand = {
      let mut state = self.state.borrow_mut();
      if state.terminated || state.child.is_some() {
        None
      } else {
        state.child = Some(subscription.clone());
        Some(self.unfilled_demand(&state).as_request())
      }
    };
    match demand {
      | None => subscription.cancel(),
      | Some(0) => {},
      | Some(amount) => subscription.request(amount),
    }
  }

  pub(crate) fn on_child_item(&self, item: Out) {
    {
      let mut state = self.state.borrow_mut();
      if state.terminated {
        return;
      }
      state.buffer.push_back(item);
    }
    self.flush();
    self.settle();
  }

  pub(crate) fn on_child_complete(&self) {
    if !self.detach_child() {
      return;
    }
    self.run(|logic, ctx| logic.on_child_complete(ctx));
  }

  pub(crate) fn on_child_error(&self, error: StreamError) {
    if !self.detach_child() {
      return;
    }
    self.run(|logic, ctx| logic.on_child_error(error, ctx));
  }

  fn detach_upstream(&self) -> bool {
    let mut state = self.state.borrow_mut();
    if state.terminated || state.upstream.is_none() {
      return false;
    }
    state.upstream = None;
    state.upstream_done = true;
    true
  }

  fn detach_child(&self) -> bool {
    let mut state = self.state.borrow_mut();
    if state.terminated || state.child.is_none() {
      return false;
    }
    state.child = None;
    true
  }

  fn unfilled_demand(&self, state: &StageState<Out>) -> Demand {
    self.downstream.demand().saturating_sub(state.buffer.len() as u64)
  }

  fn context(&self) -> StageContext<Out> {
    let state = self.state.borrow();
    let target: Weak<dyn ResolveTarget<Out>> = self.self_ref.clone();
    StageContext::new(
      target,
      self.unfilled_demand(&state),
      state.upstream_outstanding,
      state.upstream_done,
      state.child.is_some(),
    )
  }

  fn run(&self, callback: impl FnOnce(&mut L, &mut StageContext<Out>)) {
    let mut ctx = self.context();
    self.state.borrow_mut().running = true;
    callback(&mut self.logic.borrow_mut(), &mut ctx);
    let mut commands = ctx.into_commands();
    let (replay, cancelled) = {
      let mut state = self.state.borrow_mut();
      state.running = false;
      commands.append(&mut state.external);
      (core::mem::take(&mut state.replay), core::mem::take(&mut state.cancel_deferred))
    };
    if cancelled {
      self.logic.borrow_mut().on_cancel();
      return;
    }
    self.apply(commands);
    if replay > 0 && !self.state.borrow().terminated {
      self.flush();
      self.run_replay(replay);
      self.settle();
    }
  }

  // Non-generic so that the recursive `run` instantiation has a fixed closure type.
  fn run_replay(&self, replay: u64) {
    self.run(|logic, ctx| logic.on_request(replay, ctx));
  }

  fn apply(&self, commands: Vec<StageCommand<Out>>) {
    let mut failure = None;
    let mut cancels = Vec::new();
    let mut requests = Vec::new();
    let mut attaches = Vec::new();
    {
      let mut state = self.state.borrow_mut();
      if state.terminated {
        return;
      }
      for command in commands {
        match command {
          | StageCommand::Push(item) => state.buffer.push_back(item),
          | StageCommand::Resolve => state.in_flight = state.in_flight.saturating_sub(1),
          | StageCommand::Defer => state.in_flight += 1,
          | StageCommand::RequestUpstream(amount) => {
            if let Some(upstream) = state.upstream.clone() {
              state.upstream_outstanding = if amount == u64::MAX {
                u64::MAX
              } else {
                state.upstream_outstanding.saturating_add(amount)
              };
              requests.push((upstream, amount));
            }
          },
          | StageCommand::CancelUpstream => {
            if let Some(upstream) = state.upstream.take() {
              state.upstream_done = true;
              cancels.push(upstream);
            }
          },
          | StageCommand::RequestChild(amount) => {
            if let Some(child) = state.child.clone() {
              requests.push((child, amount));
            }
          },
          | StageCommand::AttachChild(source) => attaches.push(source),
          | StageCommand::Complete => {
            state.completing = true;
            if let Some(upstream) = state.upstream.take() {
              cancels.push(upstream);
            }
          },
          | StageCommand::Fail(error) => {
            failure = Some(error);
            break;
          },
        }
      }
    }
    if let Some(error) = failure {
      self.terminate_with(error);
      return;
    }
    for upstream in cancels {
      upstream.cancel();
    }
    self.flush();
    for (subscription, amount) in requests {
      if self.state.borrow().terminated {
        return;
      }
      subscription.request(amount);
    }
    for source in attaches {
      self.attach_child(source);
    }
    self.settle();
  }

  fn flush(&self) {
    {
      let mut state = self.state.borrow_mut();
      if state.flushing || state.terminated {
        return;
      }
      state.flushing = true;
    }
    loop {
      let next = {
        let mut state = self.state.borrow_mut();
        if state.terminated || !self.downstream.has_demand() { None } else { state.buffer.pop_front() }
      };
      let Some(item) = next else {
        break;
      };
      let _ = self.downstream.deliver(item);
    }
    self.state.borrow_mut().flushing = false;
  }

  fn attach_child(&self, source: Source<Out>) {
    {
      let mut state = self.state.borrow_mut();
      if state.terminated {
        return;
      }
      if state.attaching {
        state.next_child = Some(source);
        return;
      }
      state.attaching = true;
    }
    let mut next = Some(source);
    while let Some(source) = next {
      source.subscribe_boxed(Box::new(StageChildInlet::new(self.self_ref.clone())));
      let mut state = self.state.borrow_mut();
      next = if state.terminated { None } else { state.next_child.take() };
    }
    self.state.borrow_mut().attaching = false;
    self.flush();
  }

  fn settle(&self) {
    {
      let mut state = self.state.borrow_mut();
      if !state.is_settled() {
        return;
      }
      state.terminated = true;
    }
    tracing::trace!(target: LOG_TARGET, "stage settled");
    self.downstream.complete();
  }

  /// Fails downstream at once. Items still buffered for lack of demand are dropped.
  fn terminate_with(&self, error: StreamError) {
    let (upstream, child) = {
      let mut state = self.state.borrow_mut();
      if state.terminated {
        return;
      }
      state.terminated = true;
      state.buffer.clear();
      state.next_child = None;
      (state.upstream.take(), state.child.take())
    };
    tracing::trace!(target: LOG_TARGET, %error, "stage failed");
    if let Some(upstream) = upstream {
      upstream.cancel();
    }
    if let Some(child) = child {
      child.cancel();
    }
    self.downstream.fail(error);
  }
}

impl<In, Out, L> ResolveTarget<Out> for StageCore<In, Out, L>
where
  In: 'static,
  Out: 'static,
  L: StageLogic<In, Out> + 'static,
{
  fn resolve_external(&self, item: Option<Out>) {
    let mut commands = Vec::new();
    if let Some(item) = item {
      commands.push(StageCommand::Push(item));
    }
    commands.push(StageCommand::Resolve);
    self.submit(commands);
  }

  fn fail_external(&self, error: StreamError) {
    self.submit(alloc::vec![StageCommand::Fail(error)]);
  }
}

impl<In, Out, L> StageCore<In, Out, L>
where
  In: 'static,
  Out: 'static,
  L: StageLogic<In, Out> + 'static,
{
  fn submit(&self, commands: Vec<StageCommand<Out>>) {
    {
      let mut state = self.state.borrow_mut();
      if state.running {
        // ロジック実行中の解決はコールバック終了後に適用する
        state.external.extend(commands);
        return;
      }
    }
    self.apply(commands);
  }
}

/// Returns how much of `after` was not already covered by `before`, as a request amount.
fn additional_demand(before: Demand, after: Demand) -> u64 {
  match (before, after) {
    | (Demand::Unbounded, _) => 0,
    | (Demand::Finite(_), Demand::Unbounded) => u64::MAX,
    | (Demand::Finite(before), Demand::Finite(after)) => after.saturating_sub(before),
  }
}
