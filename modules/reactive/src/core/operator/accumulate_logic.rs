use super::{AccumulateSeed, StageContext, StageLogic, StreamError};

#[cfg(test)]
mod tests;

/// Running fold that emits every intermediate value.
pub struct AccumulateLogic<T, F> {
  seed:    Option<AccumulateSeed<T>>,
  running: Option<T>,
  func:    F,
}

impl<T, F> AccumulateLogic<T, F>
where
  T: Clone,
  F: FnMut(T, T) -> Result<T, StreamError>,
{
  /// Creates the logic.
  #[must_use]
  pub const fn new(seed: AccumulateSeed<T>, func: F) -> Self {
    Self { seed: Some(seed), running: None, func }
  }
}

impl<T, F> StageLogic<T, T> for AccumulateLogic<T, F>
where
  T: Clone,
  F: FnMut(T, T) -> Result<T, StreamError>,
{
  fn on_start(&mut self, ctx: &mut StageContext<T>) {
    if let Some(AccumulateSeed::Value(seed)) = self.seed.take() {
      ctx.push(seed.clone());
      self.running = Some(seed);
    }
  }

  fn on_item(&mut self, item: T, ctx: &mut StageContext<T>) {
    let Some(running) = self.running.take() else {
      self.running = Some(item);
      ctx.discard();
      return;
    };
    match (self.func)(running, item) {
      | Ok(next) => {
        self.running = Some(next.clone());
        ctx.forward(next);
      },
      | Err(error) => ctx.fail(error),
    }
  }
}
