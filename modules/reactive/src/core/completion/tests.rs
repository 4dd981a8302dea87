use crate::core::{Completion, StreamError};

#[test]
fn pending_reads_as_would_block() {
  assert_eq!(Completion::<u32>::Pending.into_result(), Err(StreamError::WouldBlock));
}

#[test]
fn ready_keeps_the_chain_outcome() {
  assert_eq!(Completion::Ready(Ok(3)).into_result(), Ok(3));
  assert_eq!(Completion::<u32>::Ready(Err(StreamError::Failed)).into_result(), Err(StreamError::Failed));
}

#[test]
fn taken_slot_converts_into_completion() {
  assert_eq!(Completion::<u32>::from(None), Completion::Pending);
  assert_eq!(Completion::from(Some(Ok(1))), Completion::Ready(Ok(1)));
}
