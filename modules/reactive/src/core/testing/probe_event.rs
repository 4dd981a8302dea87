use super::StreamError;

/// Signal observed by a [`TestSinkProbe`](super::TestSinkProbe).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeEvent<T> {
  /// `on_subscribe` was received.
  Subscribed,
  /// `on_next` was received.
  Next(T),
  /// `on_complete` was received.
  Completed,
  /// `on_error` was received.
  Failed(StreamError),
}

impl<T> ProbeEvent<T> {
  /// Returns `true` for completion and failure.
  #[must_use]
  pub const fn is_terminal(&self) -> bool {
    matches!(self, Self::Completed | Self::Failed(_))
  }
}
