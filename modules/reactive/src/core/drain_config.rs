#[cfg(test)]
mod tests;

/// Demand policy of the terminal driver.
///
/// `initial_demand` is requested on subscription; `u64::MAX` requests unbounded demand and
/// zero requests nothing. With `refill` the driver requests one more item after every item
/// it receives, which pulls a finite chain to completion one item at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrainConfig {
  initial_demand: u64,
  refill:         bool,
}

impl DrainConfig {
  /// Creates a new configuration.
  #[must_use]
  pub const fn new(initial_demand: u64, refill: bool) -> Self {
    Self { initial_demand, refill }
  }

  /// Returns the amount requested on subscription.
  #[must_use]
  pub const fn initial_demand(&self) -> u64 {
    self.initial_demand
  }

  /// Returns `true` when the driver re-requests after each item.
  #[must_use]
  pub const fn refill(&self) -> bool {
    self.refill
  }

  /// Updates the amount requested on subscription.
  #[must_use]
  pub const fn with_initial_demand(mut self, initial_demand: u64) -> Self {
    self.initial_demand = initial_demand;
    self
  }

  /// Updates the refill policy.
  #[must_use]
  pub const fn with_refill(mut self, refill: bool) -> Self {
    self.refill = refill;
    self
  }
}

impl Default for DrainConfig {
  fn default() -> Self {
    Self { initial_demand: 1, refill: true }
  }
}
