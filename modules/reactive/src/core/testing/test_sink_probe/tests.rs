use super::TestSinkProbe;
use crate::core::{Source, StreamError, testing::ProbeEvent};

#[test]
fn records_signals_in_order() {
  let probe = TestSinkProbe::with_initial_request(5);
  Source::from_array([1, 2]).subscribe_boxed(probe.subscriber());
  assert_eq!(probe.events(), [ProbeEvent::Subscribed, ProbeEvent::Next(1), ProbeEvent::Next(2), ProbeEvent::Completed]);
  assert_eq!(probe.requested(), 5);
}

#[test]
fn manual_requests_drive_the_source() {
  let probe = TestSinkProbe::new();
  Source::counter(10).subscribe_boxed(probe.subscriber());
  assert!(probe.items().is_empty());
  probe.request(2);
  assert_eq!(probe.items(), [10, 11]);
}

#[test]
fn cancel_after_stops_the_source() {
  let probe = TestSinkProbe::with_initial_request(u64::MAX).cancel_after(3);
  Source::counter(0).subscribe_boxed(probe.subscriber());
  assert_eq!(probe.items(), [0, 1, 2]);
  assert_eq!(probe.terminal_count(), 0);
}

#[test]
fn exposes_the_error() {
  let probe = TestSinkProbe::<u8>::with_initial_request(1);
  Source::failed(StreamError::Failed).subscribe_boxed(probe.subscriber());
  assert_eq!(probe.error(), Some(StreamError::Failed));
  assert!(!probe.is_completed());
}

#[test]
fn second_subscription_is_cancelled() {
  let probe = TestSinkProbe::with_initial_request(1);
  let subscriber = probe.subscriber();
  Source::counter(0).subscribe_boxed(subscriber);
  let other = crate::core::testing::TestSourceProbe::<u64>::new();
  other.source().subscribe_boxed(probe.subscriber());
  assert!(other.is_cancelled());
  assert_eq!(probe.items(), [0]);
}
