//! The matching core.
//!
//! Four components, leaves first:
//!
//! - [`availability`]: can this candidate take this meeting time?
//! - [`tier`]: geographic affinity between a candidate and an owner.
//! - [`status`]: per-owner requirement-satisfaction state.
//! - [`engine`]: the round-based greedy assignment loop consuming the
//!   other three.

pub mod availability;
mod engine;
pub mod status;
pub mod tier;

pub use availability::is_available;
pub use engine::{MatchConfig, MatchOutcome, Matchmaker};
pub use status::{derive_status, Status};
pub use tier::{score, Tier};
