use super::StreamError;

/// Eagerly iterable source capability driven by a [`PullDriver`](super::PullDriver).
pub trait PullSource {
  /// Item type produced by the source.
  type Item;

  /// Returns `true` while another item can be taken.
  fn has_more(&mut self) -> bool;

  /// Takes the next item. Only called after `has_more` returned `true`.
  ///
  /// # Errors
  ///
  /// Returns the error that terminates the stream.
  fn take_one(&mut self) -> Result<Self::Item, StreamError>;
}
