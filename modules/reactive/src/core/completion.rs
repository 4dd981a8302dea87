use super::StreamError;

#[cfg(test)]
mod tests;

/// Outcome of a chain observed at one point in time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion<T> {
  /// The chain has not terminated yet, for example while a resolver is still outstanding.
  Pending,
  /// The chain terminated with the given result.
  Ready(Result<T, StreamError>),
}

impl<T> Completion<T> {
  /// Returns the terminal result, or `StreamError::WouldBlock` while the chain is still running.
  ///
  /// # Errors
  ///
  /// Returns the stream error of a failed chain, or `StreamError::WouldBlock` when pending.
  pub fn into_result(self) -> Result<T, StreamError> {
    match self {
      | Self::Ready(result) => result,
      | Self::Pending => Err(StreamError::WouldBlock),
    }
  }
}

impl<T> From<Option<Result<T, StreamError>>> for Completion<T> {
  fn from(value: Option<Result<T, StreamError>>) -> Self {
    match value {
      | Some(result) => Self::Ready(result),
      | None => Self::Pending,
    }
  }
}
