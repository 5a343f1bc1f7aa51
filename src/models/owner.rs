//! Meeting owner (parliamentarian) model.
//!
//! A meeting owner requests a meeting slot and carries the geographic
//! requirements and per-role quotas the assignment engine fills against.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::matching::{Status, Tier};

use super::RoleKind;

/// Geographic/affiliation requirement on a meeting.
///
/// The three tiers are mutually exclusive and tried in strict precedence
/// order: locality, then constituency, then province. Only the first
/// configured requirement is ever enforced.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequirementSpec {
    /// Local numbers of which at least one primary delegate must be a member.
    /// Empty = no locality requirement.
    pub required_locals: Vec<u32>,
    /// At least one primary delegate must share the owner's constituency.
    pub requires_constituent: bool,
    /// At least one primary delegate must live in the owner's province.
    pub requires_province_dweller: bool,
}

impl RequirementSpec {
    /// A requirement spec with no constraints.
    pub fn none() -> Self {
        Self::default()
    }

    /// Whether any geographic requirement is configured.
    pub fn has_any(&self) -> bool {
        !self.required_locals.is_empty()
            || self.requires_constituent
            || self.requires_province_dweller
    }

    /// Human-readable description of the active requirement, if any.
    pub fn describe(&self) -> Option<&'static str> {
        if !self.required_locals.is_empty() {
            Some("Requires delegate from a represented Local")
        } else if self.requires_constituent {
            Some("Requires delegate from the same Constituency")
        } else if self.requires_province_dweller {
            Some("Requires delegate from the same Province")
        } else {
            None
        }
    }
}

/// Per-role bucket capacities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quotas {
    /// Confirmed delegate seats per meeting.
    pub primary_delegates: usize,
    /// Standby delegate seats per meeting.
    pub backup_delegates: usize,
    /// Confirmed staff seats per meeting.
    pub primary_staff: usize,
    /// Standby staff seats per meeting.
    pub backup_staff: usize,
}

impl Quotas {
    /// Capacity of the bucket for the given role.
    #[inline]
    pub fn for_role(&self, role: RoleKind) -> usize {
        match role {
            RoleKind::PrimaryDelegate => self.primary_delegates,
            RoleKind::BackupDelegate => self.backup_delegates,
            RoleKind::PrimaryStaff => self.primary_staff,
            RoleKind::BackupStaff => self.backup_staff,
        }
    }
}

impl Default for Quotas {
    fn default() -> Self {
        Self {
            primary_delegates: 2,
            backup_delegates: 2,
            primary_staff: 1,
            backup_staff: 1,
        }
    }
}

/// One filled seat in a role bucket.
///
/// Records which candidate was placed and at which affinity tier the
/// match was made. Never revised once recorded — the engine does not
/// backtrack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    /// Index into the run's candidate slice.
    pub candidate: usize,
    /// Affinity tier at which the match was scored.
    pub tier: Tier,
}

/// A parliamentarian requesting a meeting.
///
/// Owners without a timeslot are "unscheduled": they are grouped under
/// the sentinel group and never matched, only reported.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeetingOwner {
    /// Unique owner name.
    pub name: String,
    /// Contact email.
    pub email: String,
    /// Chamber label carried from input (e.g. "MP" or "Sen").
    pub chamber: String,
    /// Electoral constituency, if the owner has one.
    pub constituency: Option<String>,
    /// Province or territory represented.
    pub province: String,
    /// Geographic requirement on primary delegates.
    pub requirement: RequirementSpec,
    /// Exact meeting time. `None` = unscheduled.
    pub timeslot: Option<NaiveDateTime>,
    /// Confirmed delegate seats.
    pub primary_delegates: Vec<Placement>,
    /// Standby delegate seats.
    pub backup_delegates: Vec<Placement>,
    /// Confirmed staff seats.
    pub primary_staff: Vec<Placement>,
    /// Standby staff seats.
    pub backup_staff: Vec<Placement>,
    /// Current requirement-satisfaction state. Maintained by the engine.
    pub status: Status,
}

impl MeetingOwner {
    /// Creates a new owner with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: String::new(),
            chamber: String::new(),
            constituency: None,
            province: String::new(),
            requirement: RequirementSpec::none(),
            timeslot: None,
            primary_delegates: Vec::new(),
            backup_delegates: Vec::new(),
            primary_staff: Vec::new(),
            backup_staff: Vec::new(),
            status: Status::Unsatisfied,
        }
    }

    /// Sets the contact email.
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Sets the chamber label.
    pub fn with_chamber(mut self, chamber: impl Into<String>) -> Self {
        self.chamber = chamber.into();
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

    /// Sets the geographic requirement.
    pub fn with_requirement(mut self, requirement: RequirementSpec) -> Self {
        self.requirement = requirement;
        self
    }

    /// Sets the meeting time.
    pub fn with_timeslot(mut self, timeslot: NaiveDateTime) -> Self {
        self.timeslot = Some(timeslot);
        self
    }

    /// The bucket holding seats for the given role.
    pub fn bucket(&self, role: RoleKind) -> &[Placement] {
        match role {
            RoleKind::PrimaryDelegate => &self.primary_delegates,
            RoleKind::BackupDelegate => &self.backup_delegates,
            RoleKind::PrimaryStaff => &self.primary_staff,
            RoleKind::BackupStaff => &self.backup_staff,
        }
    }

    /// Mutable access to the bucket for the given role.
    pub fn bucket_mut(&mut self, role: RoleKind) -> &mut Vec<Placement> {
        match role {
            RoleKind::PrimaryDelegate => &mut self.primary_delegates,
            RoleKind::BackupDelegate => &mut self.backup_delegates,
            RoleKind::PrimaryStaff => &mut self.primary_staff,
            RoleKind::BackupStaff => &mut self.backup_staff,
        }
    }

    /// Total seats filled across all four buckets.
    pub fn placement_count(&self) -> usize {
        self.primary_delegates.len()
            + self.backup_delegates.len()
            + self.primary_staff.len()
            + self.backup_staff.len()
    }
}
