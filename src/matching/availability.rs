//! Availability index.
//!
//! Answers "can this candidate take this meeting time?". Pure over the
//! candidate's current state, but the candidate's commitment list
//! mutates between calls within a single pass — availability must be
//! recomputed on every call, never precomputed per timeslot.

use chrono::{NaiveDateTime, TimeDelta};

use crate::models::Candidate;

/// Whether a candidate can attend a meeting at `timeslot`.
///
/// True iff the candidate attends the event on the timeslot's calendar
/// day AND no existing commitment (any role, any owner) lies within
/// `min_separation` of the timeslot, measured as absolute difference.
/// Commitments exactly `min_separation` apart do not conflict.
pub fn is_available(
    candidate: &Candidate,
    timeslot: NaiveDateTime,
    min_separation: TimeDelta,
) -> bool {
    if !candidate.available_on(timeslot.date()) {
        return false;
    }
    candidate
        .commitments
        .iter()
        .all(|c| (c.timeslot - timeslot).abs() >= min_separation)
}
