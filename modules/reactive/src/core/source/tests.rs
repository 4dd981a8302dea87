use alloc::{collections::BTreeSet, rc::Rc, string::String, vec, vec::Vec};
use core::cell::{Cell, RefCell};

use crate::core::{
  Completion, DrainConfig, Source, StreamError,
  testing::{TestSinkProbe, TestSourceProbe},
};

#[test]
fn base_sources() {
  assert_eq!(Source::<u8>::empty().collect_values(), Ok(Vec::new()));
  assert_eq!(Source::single(4).collect_values(), Ok(vec![4]));
  assert_eq!(Source::from_iterator(vec![1, 2]).collect_values(), Ok(vec![1, 2]));
  assert_eq!(Source::range(3, 6).collect_values(), Ok(vec![3, 4, 5]));
  assert_eq!(Source::counter(7).take(2).collect_values(), Ok(vec![7, 8]));
  assert_eq!(Source::<u8>::failed(StreamError::Failed).collect_values(), Err(StreamError::Failed));
}

#[test]
fn map_failure_stops_after_the_first_item() {
  let upstream = TestSourceProbe::new();
  let probe = TestSinkProbe::with_initial_request(3);
  upstream
    .source()
    .try_map(|value: u32| if value == 2 { Err(StreamError::operator("map", "two")) } else { Ok(value * 10) })
    .subscribe_boxed(probe.subscriber());
  upstream.push(1).unwrap();
  upstream.push(2).unwrap();
  assert_eq!(probe.items(), [10]);
  assert_eq!(probe.error(), Some(StreamError::operator("map", "two")));
  assert_eq!(probe.terminal_count(), 1);
  assert!(upstream.is_cancelled());
}

#[test]
fn filter_pulls_replacements_for_rejected_items() {
  let upstream = TestSourceProbe::new();
  let probe = TestSinkProbe::with_initial_request(1);
  upstream.source().filter(|value: &u32| value % 2 == 0).subscribe_boxed(probe.subscriber());
  upstream.push(1).unwrap();
  assert_eq!(upstream.requested(), 2);
  upstream.push(2).unwrap();
  assert_eq!(probe.items(), [2]);
}

#[test]
fn try_filter_failure_is_relayed() {
  let values = Source::from_array([1, 2]).try_filter(|_| Err(StreamError::Failed)).collect_values();
  assert_eq!(values, Err(StreamError::Failed));
}

#[test]
fn skip_drops_leading_items() {
  assert_eq!(Source::from_array([1, 2, 3]).skip(1).collect_values(), Ok(vec![2, 3]));
  assert_eq!(Source::from_array([1, 2, 3]).skip(5).collect_values(), Ok(Vec::new()));
}

#[test]
fn last_emits_the_final_item() {
  assert_eq!(Source::from_array([1, 2, 3]).last().collect_values(), Ok(vec![3]));
  let probe = TestSinkProbe::<u8>::with_initial_request(1);
  Source::empty().last().subscribe_boxed(probe.subscriber());
  assert!(probe.items().is_empty());
  assert!(probe.is_completed());
}

#[test]
fn to_collection_emits_once() {
  let sets = Source::from_array([3, 1, 3, 2]).to_collection::<BTreeSet<_>>().collect_values();
  assert_eq!(sets, Ok(vec![BTreeSet::from([1, 2, 3])]));
  let empty = Source::<u8>::empty().to_collection::<Vec<_>>().collect_values();
  assert_eq!(empty, Ok(vec![Vec::new()]));
}

#[test]
fn scan_emits_seed_and_running_values() {
  assert_eq!(Source::from_array([1, 2, 3]).scan(0, |acc, value| acc + value).collect_values(), Ok(vec![0, 1, 3, 6]));
}

#[test]
fn concat_relays_sources_in_order() {
  let values = Source::from_array([1, 2, 3]).concat(Source::from_array([4, 5])).collect_values();
  assert_eq!(values, Ok(vec![1, 2, 3, 4, 5]));
}

#[test]
fn concat_stops_at_the_first_error() {
  let visited = Rc::new(Cell::new(false));
  let flag = visited.clone();
  let values = Source::concat_all([
    Source::single(1),
    Source::failed(StreamError::Failed),
    Source::single(3).on_complete(move || {
      flag.set(true);
      Ok(())
    }),
  ])
  .collect_values();
  assert_eq!(values, Err(StreamError::Failed));
  assert!(!visited.get());
}

#[test]
fn concat_reissues_outstanding_demand_to_the_next_source() {
  let second = TestSourceProbe::new();
  let probe = TestSinkProbe::with_initial_request(3);
  Source::single(1).concat(second.source()).subscribe_boxed(probe.subscriber());
  assert_eq!(probe.items(), [1]);
  assert_eq!(second.requested(), 2);
}

#[test]
fn on_complete_runs_before_completion() {
  let log = Rc::new(RefCell::new(Vec::new()));
  let hook_log = log.clone();
  let probe = TestSinkProbe::with_initial_request(5);
  Source::from_array([1])
    .on_complete(move || {
      hook_log.borrow_mut().push("hook");
      Ok(())
    })
    .subscribe_boxed(probe.subscriber());
  assert_eq!(*log.borrow(), ["hook"]);
  assert!(probe.is_completed());

  let failing = Source::from_array([1]).on_complete(|| Err(StreamError::Failed)).collect_values();
  assert_eq!(failing, Err(StreamError::Failed));
}

#[test]
fn continue_with_appends_a_continuation() {
  let values = Source::from_array([1, 2]).continue_with(|| Source::from_array([9])).collect_values();
  assert_eq!(values, Ok(vec![1, 2, 9]));
}

#[test]
fn substitute_swallows_items_and_switches() {
  let upstream = TestSourceProbe::new();
  let probe = TestSinkProbe::with_initial_request(2);
  upstream.source().substitute(|| Source::from_array([String::from("done")])).subscribe_boxed(probe.subscriber());
  upstream.push(1).unwrap();
  upstream.push(2).unwrap();
  assert!(probe.items().is_empty());
  assert_eq!(upstream.requested(), 3);
  upstream.complete();
  assert_eq!(probe.items(), [String::from("done")]);
  assert!(probe.is_completed());
}

#[test]
fn substitute_error_skips_the_factory() {
  let called = Rc::new(Cell::new(false));
  let flag = called.clone();
  let result = Source::<u8>::failed(StreamError::Failed)
    .substitute(move || {
      flag.set(true);
      Source::single(0_u8)
    })
    .collect_values();
  assert_eq!(result, Err(StreamError::Failed));
  assert!(!called.get());
}

#[test]
fn run_finally_runs_on_complete_and_on_error() {
  let runs = Rc::new(Cell::new(0));
  let counter = runs.clone();
  let ok = Source::from_array([1]).run_finally(move || {
    counter.set(counter.get() + 1);
    Ok(())
  });
  assert_eq!(ok.collect_values(), Ok(vec![1]));
  let counter = runs.clone();
  let failed = Source::<u8>::failed(StreamError::Failed).run_finally(move || {
    counter.set(counter.get() + 1);
    Ok(())
  });
  assert_eq!(failed.collect_values(), Err(StreamError::Failed));
  assert_eq!(runs.get(), 2);
}

#[test]
fn run_finally_error_replaces_the_signal() {
  let hook_error = StreamError::operator("finally", "cleanup");
  let expected = hook_error.clone();
  let result = Source::<u8>::failed(StreamError::Failed).run_finally(move || Err(hook_error)).collect_values();
  assert_eq!(result, Err(expected));
}

#[test]
fn run_finally_skips_the_hook_on_cancel() {
  let runs = Rc::new(Cell::new(0));
  let counter = runs.clone();
  let probe = TestSinkProbe::with_initial_request(1).cancel_after(1);
  Source::counter(0)
    .run_finally(move || {
      counter.set(counter.get() + 1);
      Ok(())
    })
    .subscribe_boxed(probe.subscriber());
  assert_eq!(probe.items(), [0]);
  assert_eq!(runs.get(), 0);
}

#[test]
fn start_requests_once() {
  let upstream = TestSourceProbe::<u8>::new();
  let completion = upstream.source().start(4);
  assert_eq!(upstream.requested(), 4);
  upstream.complete();
  assert_eq!(completion.poll(), Completion::Ready(Ok(())));
}

#[test]
fn drain_pulls_one_item_at_a_time() {
  let upstream = TestSourceProbe::new();
  let completion = upstream.source().drain();
  assert_eq!(upstream.outstanding().as_request(), 1);
  upstream.push(1).unwrap();
  assert_eq!(upstream.outstanding().as_request(), 1);
  assert_eq!(upstream.request_calls(), 2);
  assert_eq!(completion.poll(), Completion::Pending);
  upstream.fail(StreamError::Failed);
  assert_eq!(completion.poll(), Completion::Ready(Err(StreamError::Failed)));
}

#[test]
fn run_with_uses_the_configured_demand() {
  let upstream = TestSourceProbe::<u8>::new();
  let _completion = upstream.source().run_with(DrainConfig::default().with_initial_demand(3).with_refill(false));
  assert_eq!(upstream.requested(), 3);
}

#[test]
fn collect_values_reports_pending_streams() {
  let upstream = TestSourceProbe::<u8>::new();
  assert_eq!(upstream.source().collect_values(), Err(StreamError::WouldBlock));
}
