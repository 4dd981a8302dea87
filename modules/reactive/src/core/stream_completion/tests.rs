use super::StreamCompletion;
use crate::core::{Completion, StreamError};

#[test]
fn completion_starts_pending() {
  let completion = StreamCompletion::<u32>::new();
  assert_eq!(completion.poll(), Completion::Pending);
  assert!(!completion.is_ready());
}

#[test]
fn first_result_wins() {
  let completion: StreamCompletion<u32> = StreamCompletion::new();
  completion.complete(Ok(7));
  completion.complete(Err(StreamError::Failed));
  assert_eq!(completion.poll(), Completion::Ready(Ok(7)));
}

#[test]
fn try_take_consumes_result() {
  let completion: StreamCompletion<u32> = StreamCompletion::new();
  completion.clone().complete(Err(StreamError::Failed));
  assert_eq!(completion.try_take(), Some(Err(StreamError::Failed)));
  assert_eq!(completion.poll(), Completion::Pending);
}
