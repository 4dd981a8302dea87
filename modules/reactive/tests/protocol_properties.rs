use std::{cell::Cell, rc::Rc};

use fraktor_reactive_rs::core::{
  AccumulateSeed, Source, StreamError,
  testing::{TestSinkProbe, TestSourceProbe},
};

fn chains() -> Vec<(&'static str, fn() -> Source<u64>)> {
  vec![
    ("counter", || Source::counter(0)),
    ("map_filter", || Source::counter(0).map(|value| value * 3).filter(|value| value % 2 == 0)),
    ("take", || Source::counter(0).take(7)),
    ("skip_take", || Source::counter(0).skip(3).take(5)),
    ("scan", || Source::counter(1).scan(0, |acc, value| acc + value).take(6)),
    ("flat_map", || Source::counter(0).take(4).flat_map(|value| Source::counter(value).take(value))),
    ("concat", || Source::counter(0).take(3).concat(Source::counter(100).take(3))),
    ("zip", || Source::counter(0).zip(Source::counter(10).take(5)).map(|(left, right)| left + right)),
    ("continue_with", || Source::counter(0).take(2).continue_with(|| Source::counter(50).take(2))),
    ("last", || Source::counter(0).take(9).last()),
  ]
}

#[test]
fn delivered_items_never_exceed_requested_demand() {
  for (name, chain) in chains() {
    for step in [1_u64, 2, 5] {
      let probe = TestSinkProbe::new();
      chain().subscribe_boxed(probe.subscriber());
      for _ in 0..4 {
        probe.request(step);
        assert!(probe.items().len() as u64 <= probe.requested(), "{name} delivered beyond demand");
      }
    }
  }
}

#[test]
fn nothing_follows_a_terminal_signal() {
  for (name, chain) in chains() {
    let probe = TestSinkProbe::with_initial_request(1).request_per_item().cancel_after(40);
    chain().subscribe_boxed(probe.subscriber());
    assert!(probe.terminal_count() <= 1, "{name} terminated twice");
    assert_eq!(probe.signals_after_terminal(), 0, "{name} signalled after terminal");
  }
}

#[test]
fn take_emits_min_of_count_and_length_and_cancels_only_longer_upstreams() {
  for (count, length) in [(0_u64, 3_usize), (2, 3), (3, 3), (5, 3)] {
    let upstream = TestSourceProbe::new();
    let probe = TestSinkProbe::with_initial_request(u64::MAX);
    upstream.source().take(count).subscribe_boxed(probe.subscriber());
    for value in 0..length {
      if upstream.is_cancelled() {
        break;
      }
      upstream.push(value).unwrap();
    }
    upstream.complete();
    assert_eq!(probe.items().len(), (count as usize).min(length));
    assert!(probe.is_completed());
    assert_eq!(upstream.is_cancelled(), (count as usize) < length, "take({count}) over {length}");
  }
}

#[test]
fn skip_cases() {
  assert_eq!(Source::from_array([1, 2, 3]).skip(1).collect_values(), Ok(vec![2, 3]));
  assert_eq!(Source::from_array([1, 2, 3]).skip(5).collect_values(), Ok(vec![]));
}

#[test]
fn accumulate_cases() {
  let seeded = Source::from_array([1, 2, 3]).accumulate(AccumulateSeed::Value(0), |acc, value| Ok(acc + value));
  assert_eq!(seeded.collect_values(), Ok(vec![0, 1, 3, 6]));
  let unseeded = Source::from_array([1, 2, 3]).accumulate(AccumulateSeed::Absent, |acc, value| Ok(acc + value));
  assert_eq!(unseeded.collect_values(), Ok(vec![1, 3, 6]));
}

#[test]
fn zip_example() {
  let pairs = Source::counter(0).zip(Source::from_array(["a", "b", "c"])).collect_values();
  assert_eq!(pairs, Ok(vec![(0, "a"), (1, "b"), (2, "c")]));
}

#[test]
fn concat_example() {
  let values = Source::from_array([1, 2, 3]).concat(Source::from_array([4, 5])).collect_values();
  assert_eq!(values, Ok(vec![1, 2, 3, 4, 5]));
}

#[test]
fn failing_operator_yields_prior_items_then_one_error_and_cancels_upstream() {
  let cancelled = Rc::new(Cell::new(false));
  let upstream = TestSourceProbe::new();
  let probe = TestSinkProbe::with_initial_request(3);
  upstream
    .source()
    .try_map(|value: u32| if value == 2 { Err(StreamError::operator("map", "boom")) } else { Ok(value) })
    .subscribe_boxed(probe.subscriber());
  for value in 1..=3 {
    upstream.push(value).unwrap();
    cancelled.set(upstream.is_cancelled());
  }
  assert_eq!(probe.items(), [1]);
  assert_eq!(probe.terminal_count(), 1);
  assert!(probe.error().is_some());
  assert!(cancelled.get());
}

#[test]
fn last_over_empty_completes_without_items() {
  let probe = TestSinkProbe::<u8>::with_initial_request(1);
  Source::empty().last().subscribe_boxed(probe.subscriber());
  assert!(probe.items().is_empty());
  assert!(probe.is_completed());
  assert_eq!(probe.error(), None);
}
