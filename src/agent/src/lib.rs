//! The computer opponent and the bookkeeping for one match against it.

pub mod history;
pub mod random;
pub mod session;
pub mod strategy;

pub use history::{MatchHistory, Stats};
pub use random::{RandomSource, RngSource, ScriptedSource};
pub use session::MatchSession;
pub use strategy::{AdaptiveStrategy, Percent, Strategy};
