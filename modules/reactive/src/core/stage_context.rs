use alloc::{rc::Weak, vec::Vec};

use super::{Demand, Resolver, Source, StreamError, resolve_target::ResolveTarget, stage_command::StageCommand};

/// Handle through which a [`StageLogic`](super::StageLogic) acts on its stage.
///
/// Calls are recorded and applied in order once the logic callback returns, so a logic never
/// observes reentrant signals while it runs. The query methods report the stage as it was when
/// the callback started.
pub struct StageContext<Out> {
  commands:             Vec<StageCommand<Out>>,
  target:               Weak<dyn ResolveTarget<Out>>,
  downstream_demand:    Demand,
  upstream_outstanding: u64,
  upstream_done:        bool,
  has_child:            bool,
}

impl<Out> StageContext<Out> {
  pub(crate) const fn new(
    target: Weak<dyn ResolveTarget<Out>>,
    downstream_demand: Demand,
    upstream_outstanding: u64,
    upstream_done: bool,
    has_child: bool,
  ) -> Self {
    Self { commands: Vec::new(), target, downstream_demand, upstream_outstanding, upstream_done, has_child }
  }

  pub(crate) fn into_commands(self) -> Vec<StageCommand<Out>> {
    self.commands
  }

  /// Emits `item` downstream. Output beyond downstream demand is buffered by the stage.
  pub fn push(&mut self, item: Out) {
    self.commands.push(StageCommand::Push(item));
  }

  /// Marks the current item resolved.
  pub fn resolve(&mut self) {
    self.commands.push(StageCommand::Resolve);
  }

  /// Emits `item` and resolves the current item.
  pub fn forward(&mut self, item: Out) {
    self.push(item);
    self.resolve();
  }

  /// Resolves the current item without output and pulls one replacement from upstream.
  pub fn discard(&mut self) {
    self.resolve();
    self.request_upstream(1);
  }

  /// Keeps one more unit in flight, holding back completion until it is resolved.
  ///
  /// Items received through `on_item` are already in flight; this is for work started from
  /// other callbacks, such as a continuation subscribed on upstream completion.
  pub fn defer(&mut self) {
    self.commands.push(StageCommand::Defer);
  }

  /// Returns a handle that resolves one in-flight item later.
  #[must_use]
  pub fn resolver(&self) -> Resolver<Out> {
    Resolver::new(self.target.clone())
  }

  /// Requests `amount` items from upstream.
  pub fn request_upstream(&mut self, amount: u64) {
    if amount > 0 {
      self.commands.push(StageCommand::RequestUpstream(amount));
    }
  }

  /// Cancels upstream without terminating downstream.
  pub fn cancel_upstream(&mut self) {
    self.commands.push(StageCommand::CancelUpstream);
  }

  /// Requests `amount` items from the active child source.
  pub fn request_child(&mut self, amount: u64) {
    if amount > 0 {
      self.commands.push(StageCommand::RequestChild(amount));
    }
  }

  /// Subscribes to `source` as the active child.
  ///
  /// Child items go straight to the downstream buffer, and the child is asked for the
  /// outstanding downstream demand as soon as it subscribes. One child is active at a time.
  pub fn attach_child(&mut self, source: Source<Out>) {
    self.commands.push(StageCommand::AttachChild(source));
  }

  /// Cancels upstream and completes downstream once buffered output has drained.
  pub fn complete(&mut self) {
    self.commands.push(StageCommand::Complete);
  }

  /// Fails downstream and cancels upstream and the active child.
  pub fn fail(&mut self, error: StreamError) {
    self.commands.push(StageCommand::Fail(error));
  }

  /// Returns downstream demand not covered by buffered output.
  #[must_use]
  pub const fn downstream_demand(&self) -> Demand {
    self.downstream_demand
  }

  /// Returns the upstream demand requested but not yet received.
  #[must_use]
  pub const fn upstream_outstanding(&self) -> u64 {
    self.upstream_outstanding
  }

  /// Returns `true` once upstream completed or failed.
  #[must_use]
  pub const fn is_upstream_done(&self) -> bool {
    self.upstream_done
  }

  /// Returns `true` while a child source is subscribed.
  #[must_use]
  pub const fn has_child(&self) -> bool {
    self.has_child
  }
}
