//! Game rules: the flip/match/revert state machine.

pub mod resolver;

pub use resolver::{MatchResolver, ResolverPhase, SettleOutcome};
