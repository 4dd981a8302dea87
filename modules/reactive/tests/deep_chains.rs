use fraktor_reactive_rs::core::{DrainConfig, Flow, Pipeline, Source, testing::TestSinkProbe};

#[test]
fn per_item_requests_over_a_million_items_do_not_overflow() {
  let probe = TestSinkProbe::with_initial_request(1).request_per_item();
  Source::counter(0)
    .map(|value| value + 1)
    .filter(|_| true)
    .take(1_000_000)
    .last()
    .subscribe_boxed(probe.subscriber());
  assert_eq!(probe.items(), [1_000_000]);
  assert!(probe.is_completed());
}

#[test]
fn drain_runs_a_long_chain_to_completion() {
  let completion = Source::range(0, 500_000).skip(10).map(i64::from).run_with(DrainConfig::default());
  assert_eq!(completion.try_take(), Some(Ok(())));
}

#[test]
fn concatenating_many_sources_stays_iterative() {
  let sources = (0..50_000_u64).map(Source::single);
  let total = Source::concat_all(sources).scan(0, |acc, value| acc + value).last().collect_values();
  assert_eq!(total, Ok(vec![(0..50_000_u64).sum()]));
}

#[test]
fn flat_map_with_many_empty_children() {
  let values = Source::counter(0).take(100_000).flat_map(|_| Source::<u64>::empty()).collect_values();
  assert_eq!(values, Ok(vec![]));
}

#[test]
fn many_stages_in_one_chain() {
  let mut source = Source::from_iterator(0..1_000_u32);
  for _ in 0..50 {
    source = source.map(|value| value);
  }
  assert_eq!(source.collect_values().map(|values| values.len()), Ok(1_000));
}

#[test]
fn pipeline_replays_a_deep_chain() {
  let tail = Flow::<u64, u64>::new().filter(|value| value % 3 == 0).take(10_000);
  let pipeline = Pipeline::new(|| Source::counter(0)).via(&tail);
  for _ in 0..2 {
    let values = pipeline.collect_values().unwrap();
    assert_eq!(values.len(), 10_000);
    assert_eq!(values.last(), Some(&29_997));
  }
}
