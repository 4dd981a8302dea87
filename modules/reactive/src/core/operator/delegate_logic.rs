use alloc::{collections::VecDeque, rc::Rc};
use core::cell::{Cell, RefCell};

use super::{BoxedSubscriber, DemandHandle, StageContext, StageLogic, StreamError, Subscription};


/// Forwards items unchanged and mirrors them, with the same termination, to a second subscriber.
///
/// The mirror runs on its own demand: items it has not requested yet wait in a buffer and do
/// not hold back the main downstream. When the main downstream cancels, the mirror completes
/// once its buffer drained. A mirror that cancels only stops receiving copies.
pub struct DelegateLogic<T> {
  target: Option<BoxedSubscriber<T>>,
  mirror: Rc<MirrorLink<T>>,
}

struct MirrorLink<T> {
  handle:   DemandHandle<T>,
  buffer:   RefCell<VecDeque<T>>,
  terminal: RefCell<Option<Result<(), StreamError>>>,
  flushing: Cell<bool>,
  stopped:  Cell<bool>,
}

impl<T: Clone + 'static> DelegateLogic<T> {
  /// Creates the logic mirroring into `target`.
  #[must_use]
  pub fn new(target: BoxedSubscriber<T>) -> Self {
    let mirror = MirrorLink {
      handle:   DemandHandle::new(),
      buffer:   RefCell::new(VecDeque::new()),
      terminal: RefCell::new(None),
      flushing: Cell::new(false),
      stopped:  Cell::new(false),
    };
    Self { target: Some(target), mirror: Rc::new(mirror) }
  }
}

impl<T: Clone + 'static> StageLogic<T, T> for DelegateLogic<T> {
  fn on_start(&mut self, _ctx: &mut StageContext<T>) {
    if let Some(target) = self.target.take() {
      self.mirror.handle.attach(target, self.mirror.clone());
    }
  }

  fn on_item(&mut self, item: T, ctx: &mut StageContext<T>) {
    if !self.mirror.stopped.get() {
      self.mirror.buffer.borrow_mut().push_back(item.clone());
      self.mirror.flush();
    }
    ctx.forward(item);
  }

  fn on_upstream_complete(&mut self, _ctx: &mut StageContext<T>) {
    self.mirror.finish(Ok(()));
  }

  fn on_upstream_error(&mut self, error: StreamError, ctx: &mut StageContext<T>) {
    self.mirror.finish(Err(error.clone()));
    ctx.fail(error);
  }

  fn on_cancel(&mut self) {
    self.mirror.finish(Ok(()));
  }
}

impl<T> MirrorLink<T> {
  fn finish(&self, result: Result<(), StreamError>) {
    if self.stopped.get() {
      return;
    }
    self.terminal.borrow_mut().get_or_insert(result);
    self.flush();
  }

  fn flush(&self) {
    if self.flushing.replace(true) {
      return;
    }
    while self.handle.has_demand() {
      let next = self.buffer.borrow_mut().pop_front();
      let Some(item) = next else {
        break;
      };
      let _ = self.handle.deliver(item);
    }
    if self.buffer.borrow().is_empty() {
      let terminal = self.terminal.borrow_mut().take();
      match terminal {
        | Some(Ok(())) => self.handle.complete(),
        | Some(Err(error)) => self.handle.fail(error),
        | None => {},
      }
    }
    self.flushing.set(false);
  }

  fn stop(&self) {
    self.stopped.set(true);
    self.buffer.borrow_mut().clear();
    self.terminal.borrow_mut().take();
  }
}

impl<T> Subscription for MirrorLink<T> {
  fn request(&self, amount: u64) {
    if let Err(error) = self.handle.increase(amount) {
      self.stop();
      self.handle.fail(error);
      return;
    }
    self.flush();
  }

  fn cancel(&self) {
    self.stop();
    self.handle.cancel();
  }
}
