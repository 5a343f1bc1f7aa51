//! Candidate (attendee) model.
//!
//! A candidate is an event attendee — a delegate or a staff member —
//! eligible to be matched into parliamentarian meetings. The staff flag
//! partitions the candidate pool into two disjoint sub-pools; staff are
//! only considered during staff role passes.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The four matching roles, in fixed pass order.
///
/// The assignment engine runs one pass per role, in declaration order.
/// Delegate passes draw from the non-staff sub-pool, staff passes from
/// the staff sub-pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoleKind {
    /// A confirmed delegate seat in the meeting.
    PrimaryDelegate,
    /// A delegate on standby if a primary cannot attend.
    BackupDelegate,
    /// A confirmed staff seat in the meeting.
    PrimaryStaff,
    /// A staff member on standby.
    BackupStaff,
}

impl RoleKind {
    /// All roles in engine pass order.
    pub const PASS_ORDER: [RoleKind; 4] = [
        RoleKind::PrimaryDelegate,
        RoleKind::BackupDelegate,
        RoleKind::PrimaryStaff,
        RoleKind::BackupStaff,
    ];

    /// Whether this role draws from the staff sub-pool.
    #[inline]
    pub fn is_staff(&self) -> bool {
        matches!(self, RoleKind::PrimaryStaff | RoleKind::BackupStaff)
    }

    /// Whether this role is a standby seat.
    #[inline]
    pub fn is_backup(&self) -> bool {
        matches!(self, RoleKind::BackupDelegate | RoleKind::BackupStaff)
    }

    /// Human-readable role label.
    pub fn label(&self) -> &'static str {
        match self {
            RoleKind::PrimaryDelegate => "Delegate",
            RoleKind::BackupDelegate => "Backup Delegate",
            RoleKind::PrimaryStaff => "Staff",
            RoleKind::BackupStaff => "Backup Staff",
        }
    }
}

/// A recorded placement of a candidate into one owner's meeting.
///
/// Appended by the assignment engine, never revised. The full commitment
/// list is what the availability index scans for time conflicts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Commitment {
    /// Role the candidate was placed into.
    pub role: RoleKind,
    /// Name of the meeting owner.
    pub owner: String,
    /// Exact meeting time.
    pub timeslot: NaiveDateTime,
}

/// An event attendee eligible for matching.
///
/// # Invariant
/// No two commitments lie within the engine's minimum separation window
/// of each other (default 1 hour). The engine enforces this through the
/// availability index; nothing else mutates `commitments`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Candidate {
    /// Unique attendee name.
    pub name: String,
    /// Contact email.
    pub email: String,
    /// Attendance flag per event day. Assumed total over all event days.
    pub availability: BTreeMap<NaiveDate, bool>,
    /// Staff members are matched only in staff role passes.
    pub staff: bool,
    /// Local (chapter) number, if the attendee belongs to one.
    pub local: Option<u32>,
    /// Electoral constituency, if known.
    pub constituency: Option<String>,
    /// Province or territory of residence.
    pub province: String,
    /// Every meeting this candidate has been placed into.
    pub commitments: Vec<Commitment>,
}

impl Candidate {
    /// Creates a new candidate with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: String::new(),
            availability: BTreeMap::new(),
            staff: false,
            local: None,
            constituency: None,
            province: String::new(),
            commitments: Vec::new(),
        }
    }

    /// Sets the contact email.
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Sets the attendance flag for one event day.
    pub fn with_availability(mut self, day: NaiveDate, attending: bool) -> Self {
        self.availability.insert(day, attending);
        self
    }

    /// Marks the candidate as staff.
    pub fn with_staff(mut self, staff: bool) -> Self {
        self.staff = staff;
        self
    }

    /// Sets the local number.
    pub fn with_local(mut self, local: u32) -> Self {
        self.local = Some(local);
        self
    }

    /// Sets the constituency.
    pub fn with_constituency(mut self, constituency: impl Into<String>) -> Self {
        self.constituency = Some(constituency.into());
        self
    }

    /// Sets the province.
    pub fn with_province(mut self, province: impl Into<String>) -> Self {
        self.province = province.into();
        self
    }

    /// Whether the candidate attends the event on the given day.
    ///
    /// Days absent from the availability map count as unavailable.
    #[inline]
    pub fn available_on(&self, day: NaiveDate) -> bool {
        self.availability.get(&day).copied().unwrap_or(false)
    }

    /// Number of primary (confirmed) commitments.
    pub fn primary_count(&self) -> usize {
        self.commitments.iter().filter(|c| !c.role.is_backup()).count()
    }

    /// Number of backup (standby) commitments.
    pub fn backup_count(&self) -> usize {
        self.commitments.iter().filter(|c| c.role.is_backup()).count()
    }

    /// Whether this candidate already holds any role with the given owner.
    pub fn is_committed_to(&self, owner: &str) -> bool {
        self.commitments.iter().any(|c| c.owner == owner)
    }
}
