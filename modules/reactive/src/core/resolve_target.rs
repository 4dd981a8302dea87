use super::StreamError;

/// Stage entry points reachable from a [`Resolver`](super::Resolver).
pub(crate) trait ResolveTarget<Out> {
  fn resolve_external(&self, item: Option<Out>);

  fn fail_external(&self, error: StreamError);
}
