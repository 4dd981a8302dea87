use alloc::rc::Weak;

use super::{StreamError, resolve_target::ResolveTarget};

/// Resolves one deferred in-flight item from outside the stage callback.
///
/// Obtained from [`StageContext::resolver`](super::StageContext::resolver) while handling an
/// item that is not resolved synchronously. The stage keeps the item in flight, and therefore
/// holds back upstream completion, until the resolver is consumed. A resolver that outlives its
/// stage does nothing.
pub struct Resolver<Out> {
  target: Weak<dyn ResolveTarget<Out>>,
}

impl<Out> Resolver<Out> {
  pub(crate) const fn new(target: Weak<dyn ResolveTarget<Out>>) -> Self {
    Self { target }
  }

  /// Marks the item resolved without output.
  pub fn resolve(self) {
    if let Some(target) = self.target.upgrade() {
      target.resolve_external(None);
    }
  }

  /// Emits `item` downstream and marks the item resolved.
  pub fn resolve_with(self, item: Out) {
    if let Some(target) = self.target.upgrade() {
      target.resolve_external(Some(item));
    }
  }

  /// Fails the stage.
  pub fn fail(self, error: StreamError) {
    if let Some(target) = self.target.upgrade() {
      target.fail_external(error);
    }
  }
}
