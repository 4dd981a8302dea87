use super::{DrainConfig, LOG_TARGET, SharedSubscription, StreamCompletion, StreamError, Subscriber};

/// Terminal driver: discards items and records how the stream ended.
pub struct DrainSink {
  config:       DrainConfig,
  subscription: Option<SharedSubscription>,
  completion:   StreamCompletion<()>,
  received:     u64,
}

impl DrainSink {
  /// Creates a sink driven by `config`.
  #[must_use]
  pub fn new(config: DrainConfig) -> Self {
    Self { config, subscription: None, completion: StreamCompletion::new(), received: 0 }
  }

  /// Returns the handle completed when the stream terminates.
  #[must_use]
  pub fn completion(&self) -> StreamCompletion<()> {
    self.completion.clone()
  }
}

impl<T> Subscriber<T> for DrainSink {
  fn on_subscribe(&mut self, subscription: SharedSubscription) {
    if self.subscription.is_some() {
      subscription.cancel();
      return;
    }
    self.subscription = Some(subscription.clone());
    if self.config.initial_demand() > 0 {
      subscription.request(self.config.initial_demand());
    }
  }

  fn on_next(&mut self, _item: T) {
    self.received += 1;
    if !self.config.refill() {
      return;
    }
    if let Some(subscription) = &self.subscription {
      subscription.request(1);
    }
  }

  fn on_complete(&mut self) {
    tracing::trace!(target: LOG_TARGET, received = self.received, "drain completed");
    self.subscription = None;
    self.completion.complete(Ok(()));
  }

  fn on_error(&mut self, error: StreamError) {
    tracing::trace!(target: LOG_TARGET, received = self.received, %error, "drain failed");
    self.subscription = None;
    self.completion.complete(Err(error));
  }
}
