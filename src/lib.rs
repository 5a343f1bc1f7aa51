//! Matchmaking engine for parliamentary lobby events.
//!
//! Assigns a pool of event attendees (delegates and staff) to scheduled
//! parliamentarian meetings, honoring per-meeting geographic
//! requirements, attendee day-availability, double-booking limits, and
//! fixed per-role quotas.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Candidate`, `MeetingOwner`,
//!   `RequirementSpec`, `Quotas`, `TimeslotGroups`
//! - **`matching`**: The core — availability index, tier scorer,
//!   satisfaction status, and the greedy assignment engine
//! - **`validation`**: Input integrity checks before a run
//! - **`loader`**: CSV ingestion of the two input tables
//! - **`report`**: Text report and CSV contact sheet from final records
//!
//! # Architecture
//!
//! The engine is a single-threaded, in-memory greedy computation: it
//! takes exclusive access to the owner and candidate collections for
//! the duration of one [`matching::Matchmaker::run`] call and mutates
//! them in place. Runs are deterministic given a seed; the seed is an
//! explicit input/output so any run can be reproduced.

pub mod loader;
pub mod matching;
pub mod models;
pub mod report;
pub mod validation;

pub use matching::{MatchConfig, MatchOutcome, Matchmaker, Status, Tier};
pub use models::{
    Candidate, Commitment, MeetingOwner, Quotas, RequirementSpec, RoleKind, TimeslotGroups,
};
