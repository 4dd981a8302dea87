use super::{Source, StreamError};

/// Effect requested by a stage logic, applied by the stage after the callback returns.
pub(crate) enum StageCommand<Out> {
  Push(Out),
  Resolve,
  Defer,
  RequestUpstream(u64),
  CancelUpstream,
  RequestChild(u64),
  AttachChild(Source<Out>),
  Complete,
  Fail(StreamError),
}
