//! Timeslot grouping and timestamp formatting.
//!
//! Meetings sharing an exact start time are matched together: the
//! assignment engine processes one timeslot group at a time so that
//! candidates compete across simultaneous meetings. Owners without a
//! timeslot land in the sentinel "unscheduled" group, which is never
//! matched and passes through to reporting unchanged.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::MeetingOwner;

/// Owners grouped by exact meeting time.
///
/// Values are indices into the run's owner slice, in input order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TimeslotGroups {
    /// Scheduled groups, ordered by meeting time.
    pub scheduled: BTreeMap<NaiveDateTime, Vec<usize>>,
    /// The sentinel group: owners with no timeslot.
    pub unscheduled: Vec<usize>,
}

impl TimeslotGroups {
    /// Groups the given owners by their meeting time.
    pub fn from_owners(owners: &[MeetingOwner]) -> Self {
        let mut groups = Self::default();
        for (idx, owner) in owners.iter().enumerate() {
            match owner.timeslot {
                Some(ts) => groups.scheduled.entry(ts).or_default().push(idx),
                None => groups.unscheduled.push(idx),
            }
        }
        groups
    }

    /// Number of scheduled groups (excludes the sentinel group).
    pub fn group_count(&self) -> usize {
        self.scheduled.len()
    }

    /// Total owners across all groups, sentinel included.
    pub fn owner_count(&self) -> usize {
        self.scheduled.values().map(Vec::len).sum::<usize>() + self.unscheduled.len()
    }
}

/// Formats a meeting time for human-readable reports.
///
/// `Mon Nov 24 @ 10:30 AM` — leading zeros in day and hour are stripped.
pub fn format_timeslot(timeslot: NaiveDateTime) -> String {
    timeslot
        .format("%a %b %d @ %I:%M %p")
        .to_string()
        .replace(" 0", " ")
}
