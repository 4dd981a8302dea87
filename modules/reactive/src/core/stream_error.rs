//! Stream error definitions.

#[cfg(test)]
mod tests;

use alloc::string::String;

/// Errors carried by the terminal error signal of a stream.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum StreamError {
  /// A consumer requested zero items.
  #[error("invalid demand request")]
  InvalidDemand,
  /// A producer tried to deliver an item without outstanding demand.
  #[error("item delivered without outstanding demand")]
  DemandExceeded,
  /// A source signalled failure.
  #[error("stream failed")]
  Failed,
  /// A user-supplied operator function failed while processing an item.
  #[error("operator `{operator}` failed: {reason}")]
  OperatorFailed {
    /// Name of the failing operator.
    operator: &'static str,
    /// Description of the failure.
    reason:   String,
  },
  /// The stream has not terminated yet.
  #[error("stream has not terminated")]
  WouldBlock,
}

impl StreamError {
  /// Creates an [`StreamError::OperatorFailed`] error.
  #[must_use]
  pub fn operator(operator: &'static str, reason: impl Into<String>) -> Self {
    Self::OperatorFailed { operator, reason: reason.into() }
  }

  /// Returns `true` for errors caused by a broken demand contract.
  #[must_use]
  pub const fn is_protocol_violation(&self) -> bool {
    matches!(self, Self::InvalidDemand | Self::DemandExceeded)
  }
}
