use alloc::rc::Rc;

/// Shared handle to a subscription, as held by consumers.
pub type SharedSubscription = Rc<dyn Subscription>;

/// Control link a consumer uses to signal its producer.
///
/// Demand and cancellation travel upstream only through this trait.
pub trait Subscription {
  /// Requests `amount` more items.
  ///
  /// `amount` must be greater than zero. A zero request fails the consumer with
  /// [`StreamError::InvalidDemand`](super::StreamError::InvalidDemand) and ends the
  /// subscription. `u64::MAX` means unbounded demand.
  fn request(&self, amount: u64);

  /// Cancels the subscription. Idempotent.
  fn cancel(&self);
}
