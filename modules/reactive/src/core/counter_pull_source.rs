use super::{PullSource, StreamError};

/// Pull source that counts upwards from a start value.
///
/// The counter ends after emitting `u64::MAX`.
pub struct CounterPullSource {
  next: Option<u64>,
}

impl CounterPullSource {
  /// Creates a counter whose first item is `start`.
  #[must_use]
  pub const fn new(start: u64) -> Self {
    Self { next: Some(start) }
  }
}

impl PullSource for CounterPullSource {
  type Item = u64;

  fn has_more(&mut self) -> bool {
    self.next.is_some()
  }

  fn take_one(&mut self) -> Result<u64, StreamError> {
    let current = self.next.ok_or(StreamError::Failed)?;
    self.next = current.checked_add(1);
    Ok(current)
  }
}
