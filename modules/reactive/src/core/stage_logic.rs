use super::{StageContext, StreamError};

/// Per-operator behaviour plugged into a [`Stage`](super::Stage).
///
/// Every item handed to [`StageLogic::on_item`] is in flight until the logic resolves it
/// through the context: by forwarding it, by discarding it, or later through a
/// [`Resolver`](super::Resolver). Upstream completion is relayed only once no item is in
/// flight and buffered output has drained.
///
/// Output pushed beyond downstream demand is buffered. An error, from upstream or from the
/// logic, overtakes that buffer: the buffered items are dropped and `on_error` is delivered
/// at once. Items already delivered are never taken back.
pub trait StageLogic<In, Out> {
  /// Called once both the upstream and the downstream link exist.
  fn on_start(&mut self, _ctx: &mut StageContext<Out>) {}

  /// Called for each upstream item.
  fn on_item(&mut self, item: In, ctx: &mut StageContext<Out>);

  /// Called when downstream asks for `amount` more items than the stage has buffered.
  fn on_request(&mut self, amount: u64, ctx: &mut StageContext<Out>) {
    ctx.request_upstream(amount);
  }

  /// Called when upstream completes.
  fn on_upstream_complete(&mut self, _ctx: &mut StageContext<Out>) {}

  /// Called when upstream fails.
  fn on_upstream_error(&mut self, error: StreamError, ctx: &mut StageContext<Out>) {
    ctx.fail(error);
  }

  /// Called when the active child source completes.
  fn on_child_complete(&mut self, _ctx: &mut StageContext<Out>) {}

  /// Called when the active child source fails.
  fn on_child_error(&mut self, error: StreamError, ctx: &mut StageContext<Out>) {
    ctx.fail(error);
  }

  /// Called when downstream cancels.
  ///
  /// A cancel that arrives during another callback is reported after that callback returns.
  fn on_cancel(&mut self) {}
}
