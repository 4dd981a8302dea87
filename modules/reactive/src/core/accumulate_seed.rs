/// Starting point of an accumulation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccumulateSeed<T> {
  /// No seed: the first item becomes the running value and produces no output.
  Absent,
  /// Seed emitted as the first output and used as the initial running value.
  Value(T),
}

impl<T> From<Option<T>> for AccumulateSeed<T> {
  fn from(value: Option<T>) -> Self {
    match value {
      | Some(seed) => Self::Value(seed),
      | None => Self::Absent,
    }
  }
}
