//! Concrete stage logics behind the [`Source`] operators.

// Bridge imports for children
use super::{
  AccumulateSeed, BoxedSubscriber, DemandHandle, LOG_TARGET, Source, StageContext, StageLogic, StreamError,
  Subscription,
};

mod accumulate_logic;
mod continue_with_logic;
mod delegate_logic;
mod filter_logic;
mod finally_logic;
mod flat_map_logic;
mod last_logic;
mod log_logic;
mod map_logic;
mod on_complete_logic;
mod skip_logic;
mod substitute_logic;
mod take_logic;
mod to_collection_logic;

pub use accumulate_logic::AccumulateLogic;
pub use continue_with_logic::ContinueWithLogic;
pub use delegate_logic::DelegateLogic;
pub use filter_logic::FilterLogic;
pub use finally_logic::FinallyLogic;
pub use flat_map_logic::FlatMapLogic;
pub use last_logic::LastLogic;
pub use log_logic::LogLogic;
pub use map_logic::MapLogic;
pub use on_complete_logic::OnCompleteLogic;
pub use skip_logic::SkipLogic;
pub use substitute_logic::SubstituteLogic;
pub use take_logic::TakeLogic;
pub use to_collection_logic::ToCollectionLogic;
