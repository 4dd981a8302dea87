use super::StreamError;

/// Lifecycle state of a consumer link.
///
/// Transitions only leave [`TerminalState::Active`], and never revert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TerminalState {
  /// Signals may still flow.
  Active,
  /// The consumer has been (or is about to be) completed.
  Completed,
  /// The consumer has been (or is about to be) failed.
  Errored(StreamError),
  /// The consumer cancelled the link.
  Cancelled,
}

impl TerminalState {
  /// Returns `true` unless the state is [`TerminalState::Active`].
  #[must_use]
  pub const fn is_terminal(&self) -> bool {
    !matches!(self, Self::Active)
  }

  /// Returns `true` when the consumer cancelled.
  #[must_use]
  pub const fn is_cancelled(&self) -> bool {
    matches!(self, Self::Cancelled)
  }
}
