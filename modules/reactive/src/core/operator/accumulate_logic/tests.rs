use crate::core::{
  AccumulateSeed, Source, StreamError,
  testing::{TestSinkProbe, TestSourceProbe},
};

#[test]
fn seed_is_emitted_before_upstream_items() {
  let upstream = TestSourceProbe::new();
  let probe = TestSinkProbe::with_initial_request(1);
  upstream
    .source()
    .accumulate(AccumulateSeed::Value(100), |acc, value| Ok(acc + value))
    .subscribe_boxed(probe.subscriber());
  assert_eq!(probe.items(), [100]);
  // the seed used up the only demand
  assert_eq!(upstream.requested(), 0);
  probe.request(1);
  upstream.push(1).unwrap();
  assert_eq!(probe.items(), [100, 101]);
}

#[test]
fn absent_seed_uses_the_first_item() {
  let values = Source::from_array([4, 5, 6]).accumulate(AccumulateSeed::Absent, |acc, value| Ok(acc * value));
  assert_eq!(values.collect_values(), Ok(alloc::vec![20, 120]));
}

#[test]
fn failure_keeps_already_emitted_values() {
  let probe = TestSinkProbe::with_initial_request(u64::MAX);
  Source::from_array([1, 2, 3, 4])
    .accumulate(AccumulateSeed::Value(0), |acc, value| {
      if value == 3 { Err(StreamError::operator("accumulate", "three")) } else { Ok(acc + value) }
    })
    .subscribe_boxed(probe.subscriber());
  assert_eq!(probe.items(), [0, 1, 3]);
  assert_eq!(probe.error(), Some(StreamError::operator("accumulate", "three")));
}
