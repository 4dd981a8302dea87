use alloc::borrow::Cow;
use core::fmt::Debug;

use super::{LOG_TARGET, StageContext, StageLogic, StreamError};

#[cfg(test)]
mod tests;

/// Pass-through stage that records every signal as a `debug` event.
pub struct LogLogic {
  name: Cow<'static, str>,
}

impl LogLogic {
  /// Creates the logic; `name` is attached to every event.
  #[must_use]
  pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
    Self { name: name.into() }
  }
}

impl<T: Debug> StageLogic<T, T> for LogLogic {
  fn on_item(&mut self, item: T, ctx: &mut StageContext<T>) {
    tracing::debug!(target: LOG_TARGET, stage = %self.name, ?item, "element");
    ctx.forward(item);
  }

  fn on_upstream_complete(&mut self, _ctx: &mut StageContext<T>) {
    tracing::debug!(target: LOG_TARGET, stage = %self.name, "upstream finished");
  }

  fn on_upstream_error(&mut self, error: StreamError, ctx: &mut StageContext<T>) {
    tracing::debug!(target: LOG_TARGET, stage = %self.name, %error, "upstream failed");
    ctx.fail(error);
  }

  fn on_cancel(&mut self) {
    tracing::debug!(target: LOG_TARGET, stage = %self.name, "downstream cancelled");
  }
}
