//! Satisfaction status tracking.
//!
//! Derives an owner's requirement-satisfaction state from its
//! primary-delegate bucket. The status orders the engine's work queue:
//! owners with an unmet hard requirement are serviced before owners
//! that are merely under-filled.

use serde::{Deserialize, Serialize};

use crate::models::MeetingOwner;

use super::Tier;

/// An owner's requirement-satisfaction state.
///
/// Ordered least to most severe, so `a > b` means `a` is the more
/// urgent owner. Variants are compared directly; severity is never
/// reconstructed from a numeric score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub enum Status {
    /// All requirements met and the primary-delegate bucket is full.
    Satisfied,
    /// No unmet hard requirement, but the bucket is below quota.
    #[default]
    Unsatisfied,
    /// Province requirement not yet matched.
    UnsatReqProvince,
    /// Constituency requirement not yet matched.
    UnsatReqConstituency,
    /// Locality requirement not yet matched.
    UnsatReqLocal,
}

impl Status {
    /// Whether any hard geographic requirement is still unmet.
    #[inline]
    pub fn requirement_unmet(&self) -> bool {
        matches!(
            self,
            Status::UnsatReqLocal | Status::UnsatReqConstituency | Status::UnsatReqProvince
        )
    }
}

/// Derives an owner's status from its primary-delegate bucket.
///
/// A configured requirement tier counts as met once a single placement
/// of at least that strictness exists (viability floor 1, regardless of
/// the full quota). With all requirements met, the owner stays
/// `Unsatisfied` until the bucket reaches `primary_quota`, then flips
/// to `Satisfied`.
pub fn derive_status(owner: &MeetingOwner, primary_quota: usize) -> Status {
    let met = |tier: Tier| {
        owner
            .primary_delegates
            .iter()
            .filter(|p| p.tier <= tier)
            .count()
    };

    if !owner.requirement.required_locals.is_empty() && met(Tier::Local) < 1 {
        Status::UnsatReqLocal
    } else if owner.requirement.requires_constituent && met(Tier::Constituency) < 1 {
        Status::UnsatReqConstituency
    } else if owner.requirement.requires_province_dweller && met(Tier::Province) < 1 {
        Status::UnsatReqProvince
    } else if owner.primary_delegates.len() < primary_quota {
        Status::Unsatisfied
    } else {
        Status::Satisfied
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Placement, RequirementSpec};

    fn place(owner: &mut MeetingOwner, tier: Tier) {
        owner.primary_delegates.push(Placement { candidate: 0, tier });
    }

    #[test]
    fn test_severity_ordering() {
        assert!(Status::UnsatReqLocal > Status::UnsatReqConstituency);
        assert!(Status::UnsatReqConstituency > Status::UnsatReqProvince);
        assert!(Status::UnsatReqProvince > Status::Unsatisfied);
        assert!(Status::Unsatisfied > Status::Satisfied);
    }

    #[test]
    fn test_no_requirement_fills_to_quota() {
        let mut owner = MeetingOwner::new("MP Smith");
        assert_eq!(derive_status(&owner, 2), Status::Unsatisfied);
        place(&mut owner, Tier::Unrestricted);
        assert_eq!(derive_status(&owner, 2), Status::Unsatisfied);
        place(&mut owner, Tier::Unrestricted);
        assert_eq!(derive_status(&owner, 2), Status::Satisfied);
    }

    #[test]
    fn test_locality_requirement_cleared_by_one_local_match() {
        let mut owner = MeetingOwner::new("MP Smith").with_requirement(RequirementSpec {
            required_locals: vec![7],
            ..RequirementSpec::none()
        });
        assert_eq!(derive_status(&owner, 2), Status::UnsatReqLocal);

        // An unrestricted placement does not clear the requirement.
        place(&mut owner, Tier::Unrestricted);
        assert_eq!(derive_status(&owner, 2), Status::UnsatReqLocal);

        place(&mut owner, Tier::Local);
        assert_eq!(derive_status(&owner, 2), Status::Satisfied);
    }

    #[test]
    fn test_stricter_tier_clears_looser_requirement() {
        let mut owner = MeetingOwner::new("MP Smith").with_requirement(RequirementSpec {
            requires_province_dweller: true,
            ..RequirementSpec::none()
        });
        assert_eq!(derive_status(&owner, 2), Status::UnsatReqProvince);
        // A constituency-tier match is at least as strict as province.
        place(&mut owner, Tier::Constituency);
        assert_eq!(derive_status(&owner, 1), Status::Satisfied);
    }

    #[test]
    fn test_requirement_precedence() {
        let owner = MeetingOwner::new("MP Smith").with_requirement(RequirementSpec {
            required_locals: vec![7],
            requires_constituent: true,
            requires_province_dweller: true,
        });
        // Only the strictest configured requirement is reported.
        assert_eq!(derive_status(&owner, 2), Status::UnsatReqLocal);
    }

    #[test]
    fn test_requirement_met_but_under_quota() {
        let mut owner = MeetingOwner::new("MP Smith").with_requirement(RequirementSpec {
            required_locals: vec![7],
            ..RequirementSpec::none()
        });
        place(&mut owner, Tier::Local);
        assert_eq!(derive_status(&owner, 2), Status::Unsatisfied);
        assert_eq!(derive_status(&owner, 1), Status::Satisfied);
    }
}
