use super::{SharedSubscription, StreamError};

/// Signal queued for delivery to a subscriber.
pub(crate) enum Signal<T> {
  Subscribe(SharedSubscription),
  Next(T),
  Complete,
  Error(StreamError),
}
