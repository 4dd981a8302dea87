//! Protocol, stage base, and operator catalog.

/// Accumulate seed type.
mod accumulate_seed;
/// Collecting subscriber used by `collect`.
mod collect_sink;
/// Completion polling types.
mod completion;
/// Infinite counter pull source.
mod counter_pull_source;
/// Demand model types.
mod demand;
/// Per-consumer demand handle.
mod demand_handle;
/// Demand tracking utilities.
mod demand_tracker;
/// Terminal driver configuration.
mod drain_config;
/// Terminal driver subscriber.
mod drain_sink;
/// Publisher that fails on subscription.
mod failed_publisher;
/// Reusable stage recipes.
mod flow;
/// Iterator-backed pull source.
mod iter_pull_source;
/// Concrete operator logics.
mod operator;
/// Deferred-head pipelines.
mod pipeline;
/// Publisher trait.
mod publisher;
/// Pull source driver.
mod pull_driver;
/// Pull source capability trait.
mod pull_source;
/// Stage entry points for deferred resolution (internal).
mod resolve_target;
/// Deferred in-flight resolution handle.
mod resolver;
/// Queued signal (internal).
mod signal;
/// Composable source façade.
mod source;
/// Stage publisher.
mod stage;
/// Upstream adapter for child sources (internal).
mod stage_child_inlet;
/// Stage command (internal).
mod stage_command;
/// Stage execution context.
mod stage_context;
/// Stage runtime (internal).
mod stage_core;
/// Upstream adapter (internal).
mod stage_inlet;
/// Stage logic trait.
mod stage_logic;
/// Stage runtime state (internal).
mod stage_state;
/// Downstream subscription of a stage (internal).
mod stage_subscription;
/// Stream completion handle.
mod stream_completion;
/// Stream error definitions.
mod stream_error;
/// Subscriber trait.
mod subscriber;
/// Subscription trait.
mod subscription;
/// Terminal state enum.
mod terminal_state;
/// Probes for stream verification.
pub mod testing;
/// Zip fan-in.
mod zip;

pub use accumulate_seed::AccumulateSeed;
pub use completion::Completion;
pub use counter_pull_source::CounterPullSource;
pub use demand::Demand;
pub use demand_handle::DemandHandle;
pub use demand_tracker::DemandTracker;
pub use drain_config::DrainConfig;
pub use drain_sink::DrainSink;
pub use flow::Flow;
pub use iter_pull_source::IterPullSource;
pub use operator::{
  AccumulateLogic, ContinueWithLogic, DelegateLogic, FilterLogic, FinallyLogic, FlatMapLogic, LastLogic, LogLogic,
  MapLogic, OnCompleteLogic, SkipLogic, SubstituteLogic, TakeLogic, ToCollectionLogic,
};
pub use pipeline::Pipeline;
pub use publisher::Publisher;
pub use pull_driver::PullDriver;
pub use pull_source::PullSource;
pub use resolver::Resolver;
pub use source::Source;
pub use stage::Stage;
pub use stage_context::StageContext;
pub use stage_logic::StageLogic;
pub use stream_completion::StreamCompletion;
pub use stream_error::StreamError;
pub use subscriber::{BoxedSubscriber, Subscriber};
pub use subscription::{SharedSubscription, Subscription};
pub use terminal_state::TerminalState;
pub use zip::Zip;

/// `tracing` target used by every event the crate emits.
pub const LOG_TARGET: &str = "fraktor::reactive";
