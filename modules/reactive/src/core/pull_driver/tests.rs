use alloc::{boxed::Box, rc::Rc, vec, vec::Vec};
use core::cell::RefCell;

use super::PullDriver;
use crate::core::{
  CounterPullSource, IterPullSource, Publisher, PullSource, SharedSubscription, StreamError, Subscriber,
  testing::TestSinkProbe,
};

#[test]
fn serves_demand_in_order_and_completes() {
  let probe = TestSinkProbe::with_initial_request(10);
  Box::new(PullDriver::new(IterPullSource::new(vec![1, 2, 3]))).subscribe(probe.subscriber());
  assert_eq!(probe.items(), [1, 2, 3]);
  assert!(probe.is_completed());
}

#[test]
fn never_exceeds_demand() {
  let probe = TestSinkProbe::with_initial_request(2);
  Box::new(PullDriver::new(CounterPullSource::new(0))).subscribe(probe.subscriber());
  assert_eq!(probe.items(), [0, 1]);
  assert!(!probe.is_completed());
  probe.request(3);
  assert_eq!(probe.items(), [0, 1, 2, 3, 4]);
}

#[test]
fn empty_source_completes_without_demand() {
  let probe = TestSinkProbe::<u8>::new();
  Box::new(PullDriver::new(IterPullSource::new(Vec::new()))).subscribe(probe.subscriber());
  assert!(probe.is_completed());
}

#[test]
fn reentrant_requests_do_not_grow_the_stack() {
  let probe = TestSinkProbe::with_initial_request(1).request_per_item().cancel_after(200_000);
  Box::new(PullDriver::new(CounterPullSource::new(0))).subscribe(probe.subscriber());
  assert_eq!(probe.items().len(), 200_000);
  assert_eq!(probe.terminal_count(), 0);
}

#[test]
fn zero_request_fails_the_consumer() {
  let probe = TestSinkProbe::new();
  Box::new(PullDriver::new(CounterPullSource::new(0))).subscribe(probe.subscriber());
  probe.request(0);
  assert_eq!(probe.error(), Some(StreamError::InvalidDemand));
  probe.request(5);
  assert!(probe.items().is_empty());
}

struct Failing {
  left: u32,
}

impl PullSource for Failing {
  type Item = u32;

  fn has_more(&mut self) -> bool {
    true
  }

  fn take_one(&mut self) -> Result<u32, StreamError> {
    if self.left == 0 {
      return Err(StreamError::operator("pull", "exhausted budget"));
    }
    self.left -= 1;
    Ok(self.left)
  }
}

#[test]
fn take_error_fails_the_consumer() {
  let probe = TestSinkProbe::with_initial_request(10);
  Box::new(PullDriver::new(Failing { left: 2 })).subscribe(probe.subscriber());
  assert_eq!(probe.items(), [1, 0]);
  assert_eq!(probe.error(), Some(StreamError::operator("pull", "exhausted budget")));
}

struct CancelOnSubscribe {
  seen: Rc<RefCell<Vec<u64>>>,
}

impl Subscriber<u64> for CancelOnSubscribe {
  fn on_subscribe(&mut self, subscription: SharedSubscription) {
    subscription.request(5);
    subscription.cancel();
  }

  fn on_next(&mut self, item: u64) {
    self.seen.borrow_mut().push(item);
  }

  fn on_complete(&mut self) {}

  fn on_error(&mut self, _error: StreamError) {}
}

#[test]
fn cancel_inside_on_subscribe_stops_delivery() {
  let seen = Rc::new(RefCell::new(Vec::new()));
  Box::new(PullDriver::new(CounterPullSource::new(0))).subscribe(Box::new(CancelOnSubscribe { seen: seen.clone() }));
  assert!(seen.borrow().is_empty());
}
