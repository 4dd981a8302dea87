//! Probes for stream verification.

// Bridge imports for children
use super::{
  BoxedSubscriber, Demand, DemandHandle, Publisher, SharedSubscription, Source, StreamError, Subscriber,
  Subscription,
};

mod probe_event;
mod test_sink_probe;
mod test_source_probe;

pub use probe_event::ProbeEvent;
pub use test_sink_probe::TestSinkProbe;
pub use test_source_probe::TestSourceProbe;
