//! Demand model.

/// Outstanding demand of one consumer: items it has committed to accept but not yet received.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Demand {
  /// Finite demand with remaining count.
  Finite(u64),
  /// Unbounded demand, requested with `u64::MAX` or reached by overflow.
  Unbounded,
}

impl Demand {
  /// Zero demand.
  pub const NONE: Self = Self::Finite(0);

  /// Converts a raw request amount, treating `u64::MAX` as unbounded.
  #[must_use]
  pub const fn from_request(amount: u64) -> Self {
    if amount == u64::MAX {
      return Self::Unbounded;
    }
    Self::Finite(amount)
  }

  /// Returns `true` if the demand is unbounded.
  #[must_use]
  pub const fn is_unbounded(&self) -> bool {
    matches!(self, Self::Unbounded)
  }

  /// Returns `true` if there is remaining demand.
  #[must_use]
  pub const fn has_demand(&self) -> bool {
    matches!(self, Self::Unbounded) || matches!(self, Self::Finite(remaining) if *remaining > 0)
  }

  /// Returns the demand as a request amount (`u64::MAX` when unbounded).
  #[must_use]
  pub const fn as_request(&self) -> u64 {
    match self {
      | Self::Finite(value) => *value,
      | Self::Unbounded => u64::MAX,
    }
  }

  /// Returns the demand left after `count` items are accounted for.
  #[must_use]
  pub const fn saturating_sub(self, count: u64) -> Self {
    match self {
      | Self::Finite(value) => Self::Finite(value.saturating_sub(count)),
      | Self::Unbounded => Self::Unbounded,
    }
  }
}
