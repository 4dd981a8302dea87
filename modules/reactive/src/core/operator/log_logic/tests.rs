use alloc::{borrow::ToOwned, string::String, vec::Vec};
use core::fmt;
use std::sync::{Arc, Mutex};

use tracing::{
  Event, Level, Metadata, Subscriber,
  field::{Field, Visit},
  span::{Attributes, Id, Record},
  subscriber::with_default,
};

use crate::core::{LOG_TARGET, Source, StreamError};

#[test]
fn logs_items_and_completion() {
  let collector = RecordingSubscriber::default();
  let values = with_default(collector.clone(), || Source::from_array([1, 2]).log("numbers").collect_values());
  assert_eq!(values, Ok(alloc::vec![1, 2]));

  let events: Vec<_> = collector.events().into_iter().filter(|event| event.level == Level::DEBUG).collect();
  let messages: Vec<_> = events.iter().map(|event| event.message.as_str()).collect();
  assert_eq!(messages, ["element", "element", "upstream finished"]);
  assert!(events.iter().all(|event| event.target == LOG_TARGET && event.stage.as_deref() == Some("numbers")));
  assert_eq!(events[1].item.as_deref(), Some("2"));
}

#[test]
fn logs_failures() {
  let collector = RecordingSubscriber::default();
  let result =
    with_default(collector.clone(), || Source::<u8>::failed(StreamError::Failed).log("broken").collect_values());
  assert_eq!(result, Err(StreamError::Failed));
  assert!(collector.events().iter().any(|event| event.message == "upstream failed"));
}

#[test]
fn rejected_demand_is_warned() {
  let collector = RecordingSubscriber::default();
  with_default(collector.clone(), || {
    let probe = crate::core::testing::TestSinkProbe::<u64>::new();
    Source::counter(0).subscribe_boxed(probe.subscriber());
    probe.request(0);
  });
  assert!(collector.events().iter().any(|event| event.level == Level::WARN && event.target == LOG_TARGET));
}

#[derive(Clone, Default)]
struct RecordingSubscriber {
  events: Arc<Mutex<Vec<CapturedEvent>>>,
}

impl RecordingSubscriber {
  fn events(&self) -> Vec<CapturedEvent> {
    self.events.lock().expect("lock").clone()
  }
}

impl Subscriber for RecordingSubscriber {
  fn enabled(&self, _metadata: &Metadata<'_>) -> bool {
    true
  }

  fn new_span(&self, _: &Attributes<'_>) -> Id {
    Id::from_u64(1)
  }

  fn record(&self, _: &Id, _: &Record<'_>) {}

  fn record_follows_from(&self, _: &Id, _: &Id) {}

  fn event(&self, event: &Event<'_>) {
    let mut visitor = EventVisitor::default();
    event.record(&mut visitor);
    let captured = CapturedEvent {
      level:   *event.metadata().level(),
      target:  event.metadata().target().to_owned(),
      message: visitor.message.unwrap_or_default(),
      stage:   visitor.stage,
      item:    visitor.item,
    };
    self.events.lock().expect("lock").push(captured);
  }

  fn enter(&self, _: &Id) {}

  fn exit(&self, _: &Id) {}
}

#[derive(Clone, Debug)]
struct CapturedEvent {
  level:   Level,
  target:  String,
  message: String,
  stage:   Option<String>,
  item:    Option<String>,
}

#[derive(Default)]
struct EventVisitor {
  message: Option<String>,
  stage:   Option<String>,
  item:    Option<String>,
}

impl Visit for EventVisitor {
  fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
    let rendered = alloc::format!("{value:?}");
    match field.name() {
      | "message" => self.message = Some(rendered),
      | "stage" => self.stage = Some(rendered),
      | "item" => self.item = Some(rendered),
      | _ => {},
    }
  }
}
