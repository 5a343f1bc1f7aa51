//! Matchmaking domain models.
//!
//! Core data types for representing a matching problem and its solution:
//! the candidate pool, the meeting owners with their requirements and
//! role buckets, and the timeslot grouping the engine iterates over.

mod candidate;
mod owner;
mod timeslot;

pub use candidate::{Candidate, Commitment, RoleKind};
pub use owner::{MeetingOwner, Placement, Quotas, RequirementSpec};
pub use timeslot::{format_timeslot, TimeslotGroups};
