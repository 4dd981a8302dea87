use super::DemandTracker;
use crate::core::{Demand, StreamError};

#[test]
fn starts_without_demand() {
  let tracker = DemandTracker::new();
  assert_eq!(tracker.current(), Demand::Finite(0));
  assert!(!tracker.has_demand());
}

#[test]
fn rejects_zero_request() {
  let mut tracker = DemandTracker::new();
  assert_eq!(tracker.request(0), Err(StreamError::InvalidDemand));
  assert_eq!(tracker.current(), Demand::Finite(0));
}

#[test]
fn accumulates_and_consumes() {
  let mut tracker = DemandTracker::new();
  assert_eq!(tracker.request(2), Ok(Demand::Finite(2)));
  assert_eq!(tracker.request(3), Ok(Demand::Finite(5)));
  assert!(tracker.consume_one());
  assert_eq!(tracker.current(), Demand::Finite(4));
}

#[test]
fn consume_fails_without_demand() {
  let mut tracker = DemandTracker::new();
  assert!(!tracker.consume_one());
  assert_eq!(tracker.current(), Demand::Finite(0));
}

#[test]
fn max_request_is_unbounded_and_never_drains() {
  let mut tracker = DemandTracker::new();
  assert_eq!(tracker.request(u64::MAX), Ok(Demand::Unbounded));
  for _ in 0..10 {
    assert!(tracker.consume_one());
  }
  assert_eq!(tracker.current(), Demand::Unbounded);
}

#[test]
fn overflowing_sum_becomes_unbounded() {
  let mut tracker = DemandTracker::new();
  tracker.request(u64::MAX - 1).unwrap();
  assert_eq!(tracker.request(2), Ok(Demand::Unbounded));
}

#[test]
fn reset_clears_demand() {
  let mut tracker = DemandTracker::new();
  tracker.request(4).unwrap();
  tracker.reset();
  assert!(!tracker.has_demand());
}
